use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Vec2};
use crate::paint::LinearRgba;
use crate::scene::{CircleCmd, DrawCmd, DrawList, LineCmd, RectCmd, ShapeStyle, TriangleCmd};

/// Fewest segments used for any circle.
const MIN_CIRCLE_SEGMENTS: u32 = 12;
/// Most segments used for any circle.
const MAX_CIRCLE_SEGMENTS: u32 = 96;

/// One triangle-list vertex: logical-pixel position + premultiplied linear color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PrimitiveVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

/// Number of segments used to approximate a circle of `radius` logical pixels.
#[inline]
pub fn circle_segments(radius: f32) -> u32 {
    let n = (radius.max(0.0).sqrt() * 4.0).ceil() as u32;
    n.clamp(MIN_CIRCLE_SEGMENTS, MAX_CIRCLE_SEGMENTS)
}

/// Appends triangle-list vertices for every command in `list` to `out`.
///
/// Degenerate commands (non-finite coordinates, zero-length lines, empty
/// rects, non-positive radii or stroke widths) emit nothing. Returns how
/// many commands were skipped.
pub fn tessellate(list: &DrawList, out: &mut Vec<PrimitiveVertex>) -> usize {
    let mut skipped = 0;
    for cmd in list.items() {
        let emitted = match cmd {
            DrawCmd::Line(c) => line(out, c),
            DrawCmd::Rect(c) => rect(out, c),
            DrawCmd::Circle(c) => circle(out, c),
            DrawCmd::Triangle(c) => triangle(out, c),
        };
        if !emitted {
            skipped += 1;
        }
    }
    skipped
}

fn line(out: &mut Vec<PrimitiveVertex>, cmd: &LineCmd) -> bool {
    stroke(out, cmd.from, cmd.to, cmd.thickness, cmd.color.to_array())
}

fn rect(out: &mut Vec<PrimitiveVertex>, cmd: &RectCmd) -> bool {
    let r: Rect = cmd.rect.normalized();
    if !r.is_finite() || r.is_empty() {
        return false;
    }
    let c = r.corners();
    let color = cmd.color.to_array();

    match cmd.style {
        ShapeStyle::Filled => {
            tri(out, [c[0], c[1], c[2]], color);
            tri(out, [c[0], c[2], c[3]], color);
            true
        }
        ShapeStyle::Outline { thickness } => closed_outline(out, &c, thickness, color),
    }
}

fn circle(out: &mut Vec<PrimitiveVertex>, cmd: &CircleCmd) -> bool {
    if !cmd.center.is_finite() || !cmd.radius.is_finite() || cmd.radius <= 0.0 {
        return false;
    }
    let n = circle_segments(cmd.radius);
    let rim: Vec<Vec2> = (0..n)
        .map(|i| {
            let a = std::f32::consts::TAU * i as f32 / n as f32;
            cmd.center + Vec2::new(a.cos(), a.sin()) * cmd.radius
        })
        .collect();
    let color = cmd.color.to_array();

    match cmd.style {
        ShapeStyle::Filled => {
            for i in 0..rim.len() {
                tri(out, [cmd.center, rim[i], rim[(i + 1) % rim.len()]], color);
            }
            true
        }
        ShapeStyle::Outline { thickness } => closed_outline(out, &rim, thickness, color),
    }
}

fn triangle(out: &mut Vec<PrimitiveVertex>, cmd: &TriangleCmd) -> bool {
    if !cmd.points.iter().all(|p| p.is_finite()) {
        return false;
    }
    let color = cmd.color.to_array();

    match cmd.style {
        ShapeStyle::Filled => {
            tri(out, cmd.points, color);
            true
        }
        ShapeStyle::Outline { thickness } => closed_outline(out, &cmd.points, thickness, color),
    }
}

/// Strokes the closed polygon `points`. All-or-nothing: nothing is emitted
/// unless the stroke width is usable.
fn closed_outline(
    out: &mut Vec<PrimitiveVertex>,
    points: &[Vec2],
    thickness: f32,
    color: [f32; 4],
) -> bool {
    if !thickness.is_finite() || thickness <= 0.0 {
        return false;
    }
    let mut any = false;
    for i in 0..points.len() {
        any |= stroke(out, points[i], points[(i + 1) % points.len()], thickness, color);
    }
    any
}

/// Emits a quad of width `thickness` centered on segment `a`-`b`.
fn stroke(out: &mut Vec<PrimitiveVertex>, a: Vec2, b: Vec2, thickness: f32, color: [f32; 4]) -> bool {
    if !a.is_finite() || !b.is_finite() || !thickness.is_finite() || thickness <= 0.0 {
        return false;
    }
    let Some(dir) = (b - a).try_normalized() else { return false };
    let n = dir.perpendicular() * (thickness * 0.5);

    tri(out, [a + n, b + n, b - n], color);
    tri(out, [a + n, b - n, a - n], color);
    true
}

#[inline]
fn tri(out: &mut Vec<PrimitiveVertex>, points: [Vec2; 3], color: [f32; 4]) {
    out.extend(points.iter().map(|p| PrimitiveVertex { pos: [p.x, p.y], color }));
}
