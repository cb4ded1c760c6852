//! SVG serializer.
//!
//! Converts a [`Figure`] into an SVG string using the [`svg`] crate for
//! document construction and XML escaping. Path `d` attributes are
//! formatted manually because the figure model carries arc, horizontal,
//! vertical, and quadratic commands the crate's `Data` builder does not
//! cover uniformly.
//!
//! Determinism matters here: the catalog deduplicates and re-verifies
//! records by hashing this output, so attribute order (the `svg` crate
//! sorts attributes) and number formatting (`f64` `Display`, shortest
//! round-trip form) must never vary between runs.

use std::fmt::Write;

use svg::Document;
use svg::node::element::{Circle, Ellipse, Path, Rectangle};

use monshou_pipeline::{CANVAS_SIZE, Element, Figure, Paint, PathCommand};

/// Serialize a figure to SVG markup with the canonical
/// `viewBox="0 0 24 24"` and `currentColor` paint.
#[must_use]
pub fn to_svg(figure: &Figure) -> String {
    let mut document = Document::new().set("viewBox", format!("0 0 {CANVAS_SIZE} {CANVAS_SIZE}"));
    for element in figure.elements() {
        match element {
            Element::Circle { cx, cy, r, paint } => {
                let node = Circle::new().set("cx", *cx).set("cy", *cy).set("r", *r);
                document = document.add(apply_paint_circle(node, *paint));
            }
            Element::Ellipse { cx, cy, rx, ry } => {
                document = document.add(
                    Ellipse::new()
                        .set("cx", *cx)
                        .set("cy", *cy)
                        .set("rx", *rx)
                        .set("ry", *ry)
                        .set("fill", "currentColor"),
                );
            }
            Element::Rect {
                x,
                y,
                width,
                height,
            } => {
                document = document.add(
                    Rectangle::new()
                        .set("x", *x)
                        .set("y", *y)
                        .set("width", *width)
                        .set("height", *height)
                        .set("fill", "currentColor"),
                );
            }
            Element::Path { commands, paint } => {
                let node = Path::new().set("d", build_path_data(commands));
                document = document.add(apply_paint_path(node, *paint));
            }
        }
    }
    document.to_string()
}

fn apply_paint_circle(node: Circle, paint: Paint) -> Circle {
    match paint {
        Paint::Fill => node.set("fill", "currentColor"),
        Paint::Stroke { width } => node
            .set("fill", "none")
            .set("stroke", "currentColor")
            .set("stroke-width", width),
    }
}

fn apply_paint_path(node: Path, paint: Paint) -> Path {
    match paint {
        Paint::Fill => node.set("fill", "currentColor"),
        Paint::Stroke { width } => node
            .set("fill", "none")
            .set("stroke", "currentColor")
            .set("stroke-width", width)
            .set("stroke-linecap", "round")
            .set("stroke-linejoin", "round"),
    }
}

/// Build a path `d` attribute from drawing commands.
///
/// Coordinates use `f64` `Display` formatting: integral values print
/// without a fractional part (`3` not `3.000`), everything else prints
/// its shortest round-trip form.
#[must_use]
pub fn build_path_data(commands: &[PathCommand]) -> String {
    let mut d = String::new();
    for command in commands {
        if !d.is_empty() {
            d.push(' ');
        }
        // String formatting is infallible.
        let _ = match *command {
            PathCommand::MoveTo(p) => write!(d, "M{} {}", p.x, p.y),
            PathCommand::LineTo(p) => write!(d, "L{} {}", p.x, p.y),
            PathCommand::CubicTo { c1, c2, to } => {
                write!(d, "C{} {} {} {} {} {}", c1.x, c1.y, c2.x, c2.y, to.x, to.y)
            }
            PathCommand::QuadTo { ctrl, to } => {
                write!(d, "Q{} {} {} {}", ctrl.x, ctrl.y, to.x, to.y)
            }
            PathCommand::ArcTo {
                rx,
                ry,
                x_rotation,
                large_arc,
                sweep,
                to,
            } => write!(
                d,
                "A{rx} {ry} {x_rotation} {} {} {} {}",
                u8::from(large_arc),
                u8::from(sweep),
                to.x,
                to.y
            ),
            PathCommand::HorizontalTo(x) => write!(d, "H{x}"),
            PathCommand::VerticalTo(y) => write!(d, "V{y}"),
            PathCommand::Close => {
                d.push('Z');
                Ok(())
            }
        };
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use monshou_pipeline::{Element, Figure, Paint, PathCommand, Point};

    #[test]
    fn path_data_formats_every_command() {
        let commands = [
            PathCommand::MoveTo(Point::new(2.0, 2.5)),
            PathCommand::LineTo(Point::new(20.0, 20.0)),
            PathCommand::CubicTo {
                c1: Point::new(3.0, 4.0),
                c2: Point::new(5.0, 6.0),
                to: Point::new(7.0, 8.0),
            },
            PathCommand::QuadTo {
                ctrl: Point::new(9.0, 10.0),
                to: Point::new(11.0, 12.0),
            },
            PathCommand::ArcTo {
                rx: 5.0,
                ry: 5.0,
                x_rotation: 0.0,
                large_arc: false,
                sweep: true,
                to: Point::new(20.0, 12.0),
            },
            PathCommand::HorizontalTo(21.0),
            PathCommand::VerticalTo(19.0),
            PathCommand::Close,
        ];
        assert_eq!(
            build_path_data(&commands),
            "M2 2.5 L20 20 C3 4 5 6 7 8 Q9 10 11 12 A5 5 0 0 1 20 12 H21 V19 Z"
        );
    }

    #[test]
    fn quantized_coordinates_keep_their_decimals() {
        let commands = [PathCommand::MoveTo(Point::new(3.045, 12.0))];
        assert_eq!(build_path_data(&commands), "M3.045 12");
    }

    #[test]
    fn empty_command_list_yields_empty_data() {
        assert_eq!(build_path_data(&[]), "");
    }

    #[test]
    fn filled_path_markup() {
        let figure = Figure::new(vec![Element::Path {
            commands: vec![
                PathCommand::MoveTo(Point::new(2.0, 2.0)),
                PathCommand::LineTo(Point::new(20.0, 20.0)),
                PathCommand::Close,
            ],
            paint: Paint::Fill,
        }]);
        let markup = to_svg(&figure);
        assert!(markup.contains(r#"viewBox="0 0 24 24""#));
        assert!(markup.contains(r#"d="M2 2 L20 20 Z""#));
        assert!(markup.contains(r#"fill="currentColor""#));
        assert!(markup.contains("xmlns"));
    }

    #[test]
    fn stroked_path_markup() {
        let figure = Figure::new(vec![Element::Path {
            commands: vec![
                PathCommand::MoveTo(Point::new(2.0, 12.0)),
                PathCommand::LineTo(Point::new(22.0, 12.0)),
            ],
            paint: Paint::Stroke { width: 1.5 },
        }]);
        let markup = to_svg(&figure);
        assert!(markup.contains(r#"fill="none""#));
        assert!(markup.contains(r#"stroke="currentColor""#));
        assert!(markup.contains(r#"stroke-width="1.5""#));
    }

    #[test]
    fn primitive_markup() {
        let figure = Figure::new(vec![
            Element::Circle {
                cx: 12.0,
                cy: 12.0,
                r: 5.0,
                paint: Paint::Fill,
            },
            Element::Rect {
                x: 2.0,
                y: 2.0,
                width: 4.0,
                height: 3.0,
            },
        ]);
        let markup = to_svg(&figure);
        assert!(markup.contains(r#"<circle cx="12" cy="12" fill="currentColor" r="5""#));
        assert!(markup.contains(r#"<rect fill="currentColor" height="3" width="4" x="2" y="2""#));
    }

    #[test]
    fn serialization_is_deterministic() {
        let figure = Figure::new(vec![Element::Ellipse {
            cx: 10.0,
            cy: 14.0,
            rx: 6.0,
            ry: 4.0,
        }]);
        assert_eq!(to_svg(&figure), to_svg(&figure));
    }
}
