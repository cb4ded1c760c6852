//! Shape description types shared by the geometry generators and the
//! SVG serializer.

use serde::{Deserialize, Serialize};

/// Side length of the canonical square viewport (`viewBox="0 0 24 24"`).
pub const CANVAS_SIZE: f64 = 24.0;

/// Lower edge of the safe band generators confine coordinates to.
///
/// Generators keep a margin inside the canonical viewport so stroke widths
/// and jitter never push geometry out of bounds. The validity checker still
/// verifies the full `[0, CANVAS_SIZE]` range independently.
pub const SAFE_MIN: f64 = 2.0;

/// Upper edge of the safe band generators confine coordinates to.
pub const SAFE_MAX: f64 = 22.0;

/// A 2D point in canonical icon coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (0 = left edge of the viewport).
    pub x: f64,
    /// Vertical position (0 = top edge of the viewport).
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// How an element is painted.
///
/// The serializer substitutes the `currentColor` placeholder for both
/// variants so consumers can recolor icons via CSS.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    /// Solid fill, no stroke.
    Fill,
    /// Stroked outline with no fill and an explicit stroke width.
    Stroke {
        /// Stroke width in canonical units.
        width: f64,
    },
}

/// One drawing command in a path payload.
///
/// Generators emit absolute commands only; relative commands exist in the
/// wild (and the validity checker handles them) but nothing here produces
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// `M x y`
    MoveTo(Point),
    /// `L x y`
    LineTo(Point),
    /// `C c1x c1y c2x c2y x y`
    CubicTo {
        /// First control point.
        c1: Point,
        /// Second control point.
        c2: Point,
        /// End point.
        to: Point,
    },
    /// `Q cx cy x y`
    QuadTo {
        /// Control point.
        ctrl: Point,
        /// End point.
        to: Point,
    },
    /// `A rx ry rot large-arc sweep x y`
    ArcTo {
        /// Horizontal radius.
        rx: f64,
        /// Vertical radius.
        ry: f64,
        /// Rotation of the ellipse axes in degrees.
        x_rotation: f64,
        /// Large-arc flag.
        large_arc: bool,
        /// Sweep flag.
        sweep: bool,
        /// End point.
        to: Point,
    },
    /// `H x`
    HorizontalTo(f64),
    /// `V y`
    VerticalTo(f64),
    /// `Z`
    Close,
}

/// A primitive or path element within a figure.
///
/// Circles and paths carry their own [`Paint`]; ellipses and rectangles are
/// always filled (no generator family strokes them).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    /// `<circle>`
    Circle {
        /// Center x.
        cx: f64,
        /// Center y.
        cy: f64,
        /// Radius.
        r: f64,
        /// Fill or stroke.
        paint: Paint,
    },
    /// `<ellipse>`, filled.
    Ellipse {
        /// Center x.
        cx: f64,
        /// Center y.
        cy: f64,
        /// Horizontal radius.
        rx: f64,
        /// Vertical radius.
        ry: f64,
    },
    /// `<rect>`, filled.
    Rect {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
    },
    /// `<path>` with a command payload.
    Path {
        /// The drawing commands, in order.
        commands: Vec<PathCommand>,
        /// Fill or stroke.
        paint: Paint,
    },
}

/// An abstract vector drawing: the output of one generator invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure(Vec<Element>);

impl Figure {
    /// Create a figure from its elements.
    #[must_use]
    pub const fn new(elements: Vec<Element>) -> Self {
        Self(elements)
    }

    /// Returns `true` if the figure has no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns a slice of all elements.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.0
    }
}
