//! monshou-export: Figure to SVG markup serialization.
//!
//! A pure function crate: [`to_svg`] turns a
//! [`monshou_pipeline::Figure`] into an SVG string and nothing here
//! touches the filesystem.

mod svg;

pub use svg::to_svg;
