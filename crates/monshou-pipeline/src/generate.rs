//! Seeded geometry generators.
//!
//! [`generate`] maps a seed to a [`Figure`] through a dispatch over twenty
//! pattern families. Every parameter is drawn through the seeded PRNG at a
//! distinct offset, so the whole figure is a pure function of the seed.
//! Offset 0 always selects the family; each family starts its own draws at
//! offset 1.
//!
//! Generator obligation: all coordinates a family emits stay inside the
//! safe band `[SAFE_MIN, SAFE_MAX]`, leaving margin for stroke widths
//! inside the canonical viewport. The validity checker re-verifies the
//! full `[0, 24]` range downstream; nothing here relies on that backstop.

use std::f64::consts::TAU;

use crate::rng::SeedStream;
use crate::shape::{Element, Figure, Paint, PathCommand, Point, SAFE_MAX, SAFE_MIN};

/// Number of pattern families in the dispatch table.
pub const FAMILY_COUNT: usize = 20;

/// Center of the canonical viewport on both axes.
const CENTER: f64 = 12.0;

/// One of the twenty shape templates an icon can be drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternFamily {
    Polygon,
    Star,
    Spiral,
    Wave,
    Grid,
    Zigzag,
    Rays,
    CubicChain,
    QuadChain,
    ScatteredCircles,
    DotField,
    Rings,
    Ellipses,
    RectMosaic,
    Triangles,
    CrossLines,
    Arches,
    Staircase,
    Diamonds,
    Honeycomb,
}

impl PatternFamily {
    /// Every family, in dispatch order.
    pub const ALL: [Self; FAMILY_COUNT] = [
        Self::Polygon,
        Self::Star,
        Self::Spiral,
        Self::Wave,
        Self::Grid,
        Self::Zigzag,
        Self::Rays,
        Self::CubicChain,
        Self::QuadChain,
        Self::ScatteredCircles,
        Self::DotField,
        Self::Rings,
        Self::Ellipses,
        Self::RectMosaic,
        Self::Triangles,
        Self::CrossLines,
        Self::Arches,
        Self::Staircase,
        Self::Diamonds,
        Self::Honeycomb,
    ];

    /// English display name, used when composing record titles.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Polygon => "Polygon",
            Self::Star => "Star",
            Self::Spiral => "Spiral",
            Self::Wave => "Wave",
            Self::Grid => "Grid",
            Self::Zigzag => "Zigzag",
            Self::Rays => "Rays",
            Self::CubicChain => "Ribbon",
            Self::QuadChain => "Curve",
            Self::ScatteredCircles => "Scatter",
            Self::DotField => "Dots",
            Self::Rings => "Rings",
            Self::Ellipses => "Ellipses",
            Self::RectMosaic => "Mosaic",
            Self::Triangles => "Triangles",
            Self::CrossLines => "Lines",
            Self::Arches => "Arches",
            Self::Staircase => "Stairs",
            Self::Diamonds => "Diamond",
            Self::Honeycomb => "Honeycomb",
        }
    }

    /// Japanese display name, mirrored into the optional `titleJa` field.
    #[must_use]
    pub const fn name_ja(self) -> &'static str {
        match self {
            Self::Polygon => "多角形",
            Self::Star => "星",
            Self::Spiral => "渦巻き",
            Self::Wave => "波",
            Self::Grid => "格子",
            Self::Zigzag => "ジグザグ",
            Self::Rays => "放射",
            Self::CubicChain => "リボン",
            Self::QuadChain => "曲線",
            Self::ScatteredCircles => "散らばる円",
            Self::DotField => "点",
            Self::Rings => "同心円",
            Self::Ellipses => "楕円",
            Self::RectMosaic => "モザイク",
            Self::Triangles => "三角形",
            Self::CrossLines => "交差線",
            Self::Arches => "アーチ",
            Self::Staircase => "階段",
            Self::Diamonds => "ひし形",
            Self::Honeycomb => "蜂の巣",
        }
    }

    /// Single classification label for the record's `category` field.
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            Self::Polygon | Self::Star | Self::Triangles | Self::Diamonds => "geometric",
            Self::Spiral | Self::Wave | Self::Ellipses => "organic",
            Self::Grid | Self::RectMosaic | Self::Honeycomb => "pattern",
            Self::Zigzag | Self::CrossLines | Self::Staircase => "lines",
            Self::Rays | Self::Rings => "radial",
            Self::CubicChain | Self::QuadChain | Self::Arches => "curves",
            Self::ScatteredCircles | Self::DotField => "dots",
        }
    }

    /// Category labels for the record's `tags` field.
    #[must_use]
    pub const fn tags(self) -> &'static [&'static str] {
        match self {
            Self::Polygon => &["polygon", "geometric", "basic"],
            Self::Star => &["star", "sparkle", "geometric"],
            Self::Spiral => &["spiral", "curve", "organic"],
            Self::Wave => &["wave", "flow", "organic"],
            Self::Grid => &["grid", "squares", "pattern"],
            Self::Zigzag => &["zigzag", "sharp", "lines"],
            Self::Rays => &["rays", "burst", "radial"],
            Self::CubicChain => &["ribbon", "curve", "flow"],
            Self::QuadChain => &["curve", "arc", "smooth"],
            Self::ScatteredCircles => &["circles", "scatter", "dots"],
            Self::DotField => &["dots", "field", "pattern"],
            Self::Rings => &["rings", "concentric", "radial"],
            Self::Ellipses => &["ellipse", "oval", "organic"],
            Self::RectMosaic => &["rectangles", "mosaic", "pattern"],
            Self::Triangles => &["triangles", "geometric", "sharp"],
            Self::CrossLines => &["lines", "cross", "abstract"],
            Self::Arches => &["arches", "arc", "curve"],
            Self::Staircase => &["stairs", "steps", "lines"],
            Self::Diamonds => &["diamond", "rhombus", "geometric"],
            Self::Honeycomb => &["hexagon", "honeycomb", "pattern"],
        }
    }

    /// Japanese mirror of [`Self::tags`], for the optional `tagsJa` field.
    #[must_use]
    pub const fn tags_ja(self) -> &'static [&'static str] {
        match self {
            Self::Polygon => &["多角形", "幾何学", "基本"],
            Self::Star => &["星", "きらめき", "幾何学"],
            Self::Spiral => &["渦巻き", "曲線", "有機的"],
            Self::Wave => &["波", "流れ", "有機的"],
            Self::Grid => &["格子", "四角", "模様"],
            Self::Zigzag => &["ジグザグ", "鋭い", "線"],
            Self::Rays => &["放射", "バースト", "放射状"],
            Self::CubicChain => &["リボン", "曲線", "流れ"],
            Self::QuadChain => &["曲線", "弧", "なめらか"],
            Self::ScatteredCircles => &["円", "散布", "点"],
            Self::DotField => &["点", "フィールド", "模様"],
            Self::Rings => &["輪", "同心円", "放射状"],
            Self::Ellipses => &["楕円", "オーバル", "有機的"],
            Self::RectMosaic => &["長方形", "モザイク", "模様"],
            Self::Triangles => &["三角形", "幾何学", "鋭い"],
            Self::CrossLines => &["線", "交差", "抽象"],
            Self::Arches => &["アーチ", "弧", "曲線"],
            Self::Staircase => &["階段", "ステップ", "線"],
            Self::Diamonds => &["ひし形", "菱形", "幾何学"],
            Self::Honeycomb => &["六角形", "蜂の巣", "模様"],
        }
    }
}

/// The family the given seed dispatches to.
#[must_use]
pub fn family_for_seed(seed: u64) -> PatternFamily {
    PatternFamily::ALL[SeedStream::new(seed).index(0, FAMILY_COUNT)]
}

/// Produce the figure for a seed. Pure and total.
#[must_use]
pub fn generate(seed: u64) -> Figure {
    let r = SeedStream::new(seed);
    let elements = match family_for_seed(seed) {
        PatternFamily::Polygon => polygon(r),
        PatternFamily::Star => star(r),
        PatternFamily::Spiral => spiral(r),
        PatternFamily::Wave => wave(r),
        PatternFamily::Grid => grid(r),
        PatternFamily::Zigzag => zigzag(r),
        PatternFamily::Rays => rays(r),
        PatternFamily::CubicChain => cubic_chain(r),
        PatternFamily::QuadChain => quad_chain(r),
        PatternFamily::ScatteredCircles => scattered_circles(r),
        PatternFamily::DotField => dot_field(r),
        PatternFamily::Rings => rings(r),
        PatternFamily::Ellipses => ellipses(r),
        PatternFamily::RectMosaic => rect_mosaic(r),
        PatternFamily::Triangles => triangles(r),
        PatternFamily::CrossLines => cross_lines(r),
        PatternFamily::Arches => arches(r),
        PatternFamily::Staircase => staircase(r),
        PatternFamily::Diamonds => diamonds(r),
        PatternFamily::Honeycomb => honeycomb(r),
    };
    Figure::new(elements)
}

/// Quantize to 3 decimal places, the catalog's coordinate precision.
fn q(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

fn qp(x: f64, y: f64) -> Point {
    Point::new(q(x), q(y))
}

#[allow(clippy::cast_precision_loss)]
fn f(n: usize) -> f64 {
    n as f64
}

/// Draw-offset arithmetic for per-element parameter blocks.
#[allow(clippy::cast_possible_truncation)]
const fn o(n: usize) -> u64 {
    n as u64
}

fn ring_point(radius: f64, angle: f64) -> Point {
    qp(
        radius.mul_add(angle.cos(), CENTER),
        radius.mul_add(angle.sin(), CENTER),
    )
}

fn closed_ring(points: impl Iterator<Item = Point>) -> Vec<PathCommand> {
    let mut commands = Vec::new();
    for (i, p) in points.enumerate() {
        if i == 0 {
            commands.push(PathCommand::MoveTo(p));
        } else {
            commands.push(PathCommand::LineTo(p));
        }
    }
    commands.push(PathCommand::Close);
    commands
}

fn polygon(r: SeedStream) -> Vec<Element> {
    let sides = r.count(1, 3, 8);
    let radius = r.range(2, 3.0, 9.0);
    let rotation = r.range(3, 0.0, TAU);
    let commands = closed_ring(
        (0..sides).map(|i| ring_point(radius, (f(i) / f(sides)).mul_add(TAU, rotation))),
    );
    vec![Element::Path {
        commands,
        paint: Paint::Fill,
    }]
}

fn star(r: SeedStream) -> Vec<Element> {
    let points = r.count(1, 5, 9);
    let outer = r.range(2, 6.0, 9.5);
    let inner = outer * r.range(3, 0.35, 0.55);
    let rotation = r.range(4, 0.0, TAU);
    let commands = closed_ring((0..points * 2).map(|i| {
        let radius = if i % 2 == 0 { outer } else { inner };
        ring_point(radius, (f(i) / f(points * 2)).mul_add(TAU, rotation))
    }));
    vec![Element::Path {
        commands,
        paint: Paint::Fill,
    }]
}

fn spiral(r: SeedStream) -> Vec<Element> {
    let turns = r.range(1, 2.0, 4.0);
    let steps = r.count(2, 24, 48);
    let max_radius = r.range(3, 5.0, 9.0);
    let width = r.range(4, 1.0, 2.0);
    let phase = r.range(5, 0.0, TAU);
    let mut commands = vec![PathCommand::MoveTo(qp(CENTER, CENTER))];
    for i in 1..=steps {
        let t = f(i) / f(steps);
        commands.push(PathCommand::LineTo(ring_point(
            t * max_radius,
            (t * turns).mul_add(TAU, phase),
        )));
    }
    vec![Element::Path {
        commands,
        paint: Paint::Stroke { width: q(width) },
    }]
}

fn wave(r: SeedStream) -> Vec<Element> {
    let cycles = r.count(1, 2, 4);
    let amplitude = r.range(2, 2.0, 5.0);
    let mid = r.range(3, 9.0, 15.0);
    let width = r.range(4, 1.0, 2.0);
    let span = SAFE_MAX - SAFE_MIN - 2.0;
    let half = span / f(cycles * 2);
    let mut commands = vec![PathCommand::MoveTo(qp(SAFE_MIN + 1.0, mid))];
    let mut x = SAFE_MIN + 1.0;
    for i in 0..cycles * 2 {
        let dir = if i % 2 == 0 { -1.0 } else { 1.0 };
        let ctrl = qp(x + half / 2.0, (dir * amplitude).mul_add(1.4, mid));
        x += half;
        commands.push(PathCommand::QuadTo {
            ctrl,
            to: qp(x, mid),
        });
    }
    vec![Element::Path {
        commands,
        paint: Paint::Stroke { width: q(width) },
    }]
}

fn grid(r: SeedStream) -> Vec<Element> {
    let rows = r.count(1, 2, 4);
    let cols = r.count(2, 2, 4);
    let gap = r.range(3, 0.6, 1.4);
    let span = SAFE_MAX - SAFE_MIN - 2.0;
    let cell_w = (span - gap * f(cols - 1)) / f(cols);
    let cell_h = (span - gap * f(rows - 1)) / f(rows);
    let mut elements = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            elements.push(Element::Rect {
                x: q(f(col).mul_add(cell_w + gap, SAFE_MIN + 1.0)),
                y: q(f(row).mul_add(cell_h + gap, SAFE_MIN + 1.0)),
                width: q(cell_w),
                height: q(cell_h),
            });
        }
    }
    elements
}

fn zigzag(r: SeedStream) -> Vec<Element> {
    let segments = r.count(1, 5, 11);
    let low = r.range(2, 4.0, 10.0);
    let high = r.range(3, 14.0, 20.0);
    let width = r.range(4, 1.0, 2.0);
    let span = SAFE_MAX - SAFE_MIN - 2.0;
    let commands = (0..=segments)
        .map(|i| {
            let x = (f(i) / f(segments)).mul_add(span, SAFE_MIN + 1.0);
            let y = if i % 2 == 0 { high } else { low };
            let p = qp(x, y);
            if i == 0 {
                PathCommand::MoveTo(p)
            } else {
                PathCommand::LineTo(p)
            }
        })
        .collect();
    vec![Element::Path {
        commands,
        paint: Paint::Stroke { width: q(width) },
    }]
}

fn rays(r: SeedStream) -> Vec<Element> {
    let count = r.count(1, 6, 14);
    let inner = r.range(2, 2.0, 4.0);
    let outer = r.range(3, 7.0, 9.5);
    let width = r.range(4, 1.0, 2.0);
    let rotation = r.range(5, 0.0, TAU);
    let mut commands = Vec::with_capacity(count * 2);
    for i in 0..count {
        let angle = (f(i) / f(count)).mul_add(TAU, rotation);
        commands.push(PathCommand::MoveTo(ring_point(inner, angle)));
        commands.push(PathCommand::LineTo(ring_point(outer, angle)));
    }
    vec![Element::Path {
        commands,
        paint: Paint::Stroke { width: q(width) },
    }]
}

fn cubic_chain(r: SeedStream) -> Vec<Element> {
    let segments = r.count(1, 2, 4);
    let width = r.range(2, 1.0, 2.0);
    let start_y = r.range(3, 4.0, 20.0);
    let span = SAFE_MAX - SAFE_MIN - 2.0;
    let step = span / f(segments);
    let mut commands = vec![PathCommand::MoveTo(qp(SAFE_MIN + 1.0, start_y))];
    let mut x = SAFE_MIN + 1.0;
    for i in 0..segments {
        let base = 4 + 4 * o(i);
        let c1 = qp(x + step / 3.0, r.range(base, 4.0, 20.0));
        let c2 = qp(x + step * 2.0 / 3.0, r.range(base + 1, 4.0, 20.0));
        x += step;
        let to = qp(x, r.range(base + 2, 4.0, 20.0));
        commands.push(PathCommand::CubicTo { c1, c2, to });
    }
    vec![Element::Path {
        commands,
        paint: Paint::Stroke { width: q(width) },
    }]
}

fn quad_chain(r: SeedStream) -> Vec<Element> {
    let segments = r.count(1, 2, 5);
    let width = r.range(2, 1.0, 2.0);
    let start_y = r.range(3, 4.0, 20.0);
    let span = SAFE_MAX - SAFE_MIN - 2.0;
    let step = span / f(segments);
    let mut commands = vec![PathCommand::MoveTo(qp(SAFE_MIN + 1.0, start_y))];
    let mut x = SAFE_MIN + 1.0;
    for i in 0..segments {
        let base = 4 + 3 * o(i);
        let ctrl = qp(x + step / 2.0, r.range(base, 4.0, 20.0));
        x += step;
        let to = qp(x, r.range(base + 1, 4.0, 20.0));
        commands.push(PathCommand::QuadTo { ctrl, to });
    }
    vec![Element::Path {
        commands,
        paint: Paint::Stroke { width: q(width) },
    }]
}

fn scattered_circles(r: SeedStream) -> Vec<Element> {
    let count = r.count(1, 3, 7);
    let mut elements = Vec::with_capacity(count);
    for i in 0..count {
        let base = 2 + 3 * o(i);
        let radius = r.range(base, 0.8, 2.2);
        elements.push(Element::Circle {
            cx: q(r.range(base + 1, SAFE_MIN + radius, SAFE_MAX - radius)),
            cy: q(r.range(base + 2, SAFE_MIN + radius, SAFE_MAX - radius)),
            r: q(radius),
            paint: Paint::Fill,
        });
    }
    elements
}

fn dot_field(r: SeedStream) -> Vec<Element> {
    let rows = r.count(1, 3, 5);
    let cols = r.count(2, 3, 5);
    let radius = r.range(3, 0.7, 1.4);
    let mut elements = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let base = 4 + 2 * o(row * cols + col);
            let cx = (f(col) / f(cols - 1)).mul_add(16.0, 4.0) + r.range(base, -0.5, 0.5);
            let cy = (f(row) / f(rows - 1)).mul_add(16.0, 4.0) + r.range(base + 1, -0.5, 0.5);
            elements.push(Element::Circle {
                cx: q(cx),
                cy: q(cy),
                r: q(radius),
                paint: Paint::Fill,
            });
        }
    }
    elements
}

fn rings(r: SeedStream) -> Vec<Element> {
    let count = r.count(1, 2, 5);
    let max_radius = r.range(2, 5.5, 9.0);
    let width = r.range(3, 0.8, 1.5);
    (1..=count)
        .map(|i| Element::Circle {
            cx: CENTER,
            cy: CENTER,
            r: q(max_radius * f(i) / f(count)),
            paint: Paint::Stroke { width: q(width) },
        })
        .collect()
}

fn ellipses(r: SeedStream) -> Vec<Element> {
    let count = r.count(1, 2, 4);
    let mut elements = Vec::with_capacity(count);
    for i in 0..count {
        let base = 2 + 4 * o(i);
        let rx = r.range(base, 2.0, 6.0);
        let ry = r.range(base + 1, 1.5, 5.0);
        elements.push(Element::Ellipse {
            cx: q(r.range(base + 2, SAFE_MIN + rx, SAFE_MAX - rx)),
            cy: q(r.range(base + 3, SAFE_MIN + ry, SAFE_MAX - ry)),
            rx: q(rx),
            ry: q(ry),
        });
    }
    elements
}

fn rect_mosaic(r: SeedStream) -> Vec<Element> {
    let count = r.count(1, 3, 6);
    let mut elements = Vec::with_capacity(count);
    for i in 0..count {
        let base = 2 + 4 * o(i);
        let w = r.range(base, 2.0, 5.0);
        let h = r.range(base + 1, 2.0, 5.0);
        elements.push(Element::Rect {
            x: q(r.range(base + 2, SAFE_MIN, SAFE_MAX - w)),
            y: q(r.range(base + 3, SAFE_MIN, SAFE_MAX - h)),
            width: q(w),
            height: q(h),
        });
    }
    elements
}

fn triangles(r: SeedStream) -> Vec<Element> {
    let count = r.count(1, 2, 4);
    let mut commands = Vec::with_capacity(count * 4);
    for i in 0..count {
        let base = 2 + 4 * o(i);
        let radius = r.range(base, 2.0, 4.0);
        let cx = r.range(base + 1, SAFE_MIN + radius, SAFE_MAX - radius);
        let cy = r.range(base + 2, SAFE_MIN + radius, SAFE_MAX - radius);
        let rotation = r.range(base + 3, 0.0, TAU);
        for k in 0..3 {
            let angle = (f(k) / 3.0).mul_add(TAU, rotation);
            let p = qp(
                radius.mul_add(angle.cos(), cx),
                radius.mul_add(angle.sin(), cy),
            );
            if k == 0 {
                commands.push(PathCommand::MoveTo(p));
            } else {
                commands.push(PathCommand::LineTo(p));
            }
        }
        commands.push(PathCommand::Close);
    }
    vec![Element::Path {
        commands,
        paint: Paint::Fill,
    }]
}

fn cross_lines(r: SeedStream) -> Vec<Element> {
    let count = r.count(1, 3, 6);
    let width = r.range(2, 1.0, 2.0);
    let mut commands = Vec::with_capacity(count * 2);
    for i in 0..count {
        let base = 3 + 4 * o(i);
        commands.push(PathCommand::MoveTo(qp(
            r.range(base, 3.0, 21.0),
            r.range(base + 1, 3.0, 21.0),
        )));
        commands.push(PathCommand::LineTo(qp(
            r.range(base + 2, 3.0, 21.0),
            r.range(base + 3, 3.0, 21.0),
        )));
    }
    vec![Element::Path {
        commands,
        paint: Paint::Stroke { width: q(width) },
    }]
}

fn arches(r: SeedStream) -> Vec<Element> {
    let count = r.count(1, 2, 4);
    let baseline = r.range(2, 14.0, 20.0);
    let width = r.range(3, 1.0, 2.0);
    let mut commands = Vec::with_capacity(count * 2);
    for i in 0..count {
        let base = 4 + 3 * o(i);
        let x1 = r.range(base, 3.0, 12.0);
        let rx = r.range(base + 1, 2.0, 5.0);
        let ry = r.range(base + 2, 2.0, 6.0);
        commands.push(PathCommand::MoveTo(qp(x1, baseline)));
        commands.push(PathCommand::ArcTo {
            rx: q(rx),
            ry: q(ry),
            x_rotation: 0.0,
            large_arc: false,
            sweep: true,
            to: qp(rx.mul_add(2.0, x1), baseline),
        });
    }
    vec![Element::Path {
        commands,
        paint: Paint::Stroke { width: q(width) },
    }]
}

fn staircase(r: SeedStream) -> Vec<Element> {
    let steps = r.count(1, 3, 7);
    let top = r.range(2, 3.0, 7.0);
    let bottom = r.range(3, 17.0, 21.0);
    let width = r.range(4, 1.0, 2.0);
    let span = SAFE_MAX - SAFE_MIN - 2.0;
    let mut commands = vec![PathCommand::MoveTo(qp(SAFE_MIN + 1.0, bottom))];
    for i in 1..=steps {
        let t = f(i) / f(steps);
        commands.push(PathCommand::HorizontalTo(q(
            t.mul_add(span, SAFE_MIN + 1.0)
        )));
        commands.push(PathCommand::VerticalTo(q(t.mul_add(top - bottom, bottom))));
    }
    vec![Element::Path {
        commands,
        paint: Paint::Stroke { width: q(width) },
    }]
}

fn diamonds(r: SeedStream) -> Vec<Element> {
    let count = r.count(1, 1, 3);
    let max_radius = r.range(2, 5.0, 9.5);
    let width = r.range(3, 0.8, 1.5);
    let mut commands = Vec::with_capacity(count * 5);
    for i in 1..=count {
        let radius = max_radius * f(i) / f(count);
        commands.push(PathCommand::MoveTo(qp(CENTER, CENTER - radius)));
        commands.push(PathCommand::LineTo(qp(CENTER + radius, CENTER)));
        commands.push(PathCommand::LineTo(qp(CENTER, CENTER + radius)));
        commands.push(PathCommand::LineTo(qp(CENTER - radius, CENTER)));
        commands.push(PathCommand::Close);
    }
    vec![Element::Path {
        commands,
        paint: Paint::Stroke { width: q(width) },
    }]
}

fn honeycomb(r: SeedStream) -> Vec<Element> {
    let cols = r.count(1, 2, 3);
    let rows = r.count(2, 2, 3);
    let radius = r.range(3, 1.6, 2.4);
    let width = r.range(4, 0.8, 1.2);
    let dx = 1.75 * radius;
    let dy = 1.6 * radius;
    let x0 = f(cols - 1).mul_add(-dx / 2.0, CENTER);
    let y0 = f(rows - 1).mul_add(dy, 0.8 * radius).mul_add(-0.5, CENTER);
    let mut commands = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            let cx = f(col).mul_add(dx, x0);
            let cy = f(row).mul_add(dy, y0) + if col % 2 == 1 { 0.8 * radius } else { 0.0 };
            for k in 0..6 {
                let angle = f(k) / 6.0 * TAU + TAU / 12.0;
                let p = qp(
                    radius.mul_add(angle.cos(), cx),
                    radius.mul_add(angle.sin(), cy),
                );
                if k == 0 {
                    commands.push(PathCommand::MoveTo(p));
                } else {
                    commands.push(PathCommand::LineTo(p));
                }
            }
            commands.push(PathCommand::Close);
        }
    }
    vec![Element::Path {
        commands,
        paint: Paint::Stroke { width: q(width) },
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::CANVAS_SIZE;

    fn assert_point_in_canvas(p: Point) {
        assert!((0.0..=CANVAS_SIZE).contains(&p.x), "x out of range: {p:?}");
        assert!((0.0..=CANVAS_SIZE).contains(&p.y), "y out of range: {p:?}");
    }

    fn assert_figure_in_canvas(figure: &Figure) {
        for element in figure.elements() {
            match element {
                Element::Circle { cx, cy, r, .. } => {
                    assert!(cx - r >= 0.0 && cx + r <= CANVAS_SIZE);
                    assert!(cy - r >= 0.0 && cy + r <= CANVAS_SIZE);
                    assert!(*r > 0.0);
                }
                Element::Ellipse { cx, cy, rx, ry } => {
                    assert!(cx - rx >= 0.0 && cx + rx <= CANVAS_SIZE);
                    assert!(cy - ry >= 0.0 && cy + ry <= CANVAS_SIZE);
                }
                Element::Rect {
                    x,
                    y,
                    width,
                    height,
                } => {
                    assert!(*x >= 0.0 && x + width <= CANVAS_SIZE);
                    assert!(*y >= 0.0 && y + height <= CANVAS_SIZE);
                    assert!(*width > 0.0 && *height > 0.0);
                }
                Element::Path { commands, .. } => {
                    assert!(!commands.is_empty());
                    for command in commands {
                        match *command {
                            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                                assert_point_in_canvas(p);
                            }
                            PathCommand::CubicTo { c1, c2, to } => {
                                assert_point_in_canvas(c1);
                                assert_point_in_canvas(c2);
                                assert_point_in_canvas(to);
                            }
                            PathCommand::QuadTo { ctrl, to } => {
                                assert_point_in_canvas(ctrl);
                                assert_point_in_canvas(to);
                            }
                            PathCommand::ArcTo { rx, ry, to, .. } => {
                                assert!((0.0..=CANVAS_SIZE).contains(&rx));
                                assert!((0.0..=CANVAS_SIZE).contains(&ry));
                                assert_point_in_canvas(to);
                            }
                            PathCommand::HorizontalTo(v) | PathCommand::VerticalTo(v) => {
                                assert!((0.0..=CANVAS_SIZE).contains(&v));
                            }
                            PathCommand::Close => {}
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn generate_is_deterministic() {
        for seed in [0, 1, 7, 42, 9999, u64::MAX] {
            assert_eq!(generate(seed), generate(seed));
        }
    }

    #[test]
    fn every_seed_yields_a_nonempty_figure() {
        for seed in 0..500 {
            assert!(!generate(seed).is_empty(), "empty figure for seed {seed}");
        }
    }

    #[test]
    fn all_coordinates_stay_in_canvas() {
        for seed in 0..2000 {
            assert_figure_in_canvas(&generate(seed));
        }
    }

    #[test]
    fn every_family_is_reachable() {
        let mut seen = [false; FAMILY_COUNT];
        for seed in 0..500 {
            let family = family_for_seed(seed);
            let index = PatternFamily::ALL
                .iter()
                .position(|&f| f == family)
                .unwrap_or(FAMILY_COUNT);
            seen[index] = true;
        }
        assert!(seen.iter().all(|&s| s), "unreached family: {seen:?}");
    }

    #[test]
    fn family_selection_matches_dispatch() {
        // family_for_seed reuses draw offset 0, so metadata derived from it
        // always describes the figure generate() built.
        for seed in 0..100 {
            let family = family_for_seed(seed);
            assert_eq!(family, family_for_seed(seed));
            let _ = generate(seed);
            assert_eq!(family, family_for_seed(seed));
        }
    }

    #[test]
    fn coordinates_are_quantized_to_three_decimals() {
        for seed in 0..200 {
            for element in generate(seed).elements() {
                if let Element::Path { commands, .. } = element {
                    for command in commands {
                        if let PathCommand::MoveTo(p) | PathCommand::LineTo(p) = *command {
                            let scaled = p.x * 1000.0;
                            assert!(
                                (scaled - scaled.round()).abs() < 1e-6,
                                "unquantized coordinate {}",
                                p.x
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn metadata_is_complete_for_every_family() {
        for family in PatternFamily::ALL {
            assert!(!family.name().is_empty());
            assert!(!family.name_ja().is_empty());
            assert!(!family.category().is_empty());
            assert_eq!(family.tags().len(), 3);
            assert_eq!(family.tags_ja().len(), 3);
        }
    }
}
