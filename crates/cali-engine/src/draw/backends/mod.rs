mod recording;
mod offscreen;

pub use recording::RecordingBackend;
pub use offscreen::WgpuBackend;

use crate::coords::{Rect, Vec2};
use crate::scene::DrawList;

use super::DrawStyle;

/// Records one draw call as a scene command under `style`.
pub(crate) fn record_line(list: &mut DrawList, from: Vec2, to: Vec2, style: &DrawStyle) {
    list.push_line(from, to, style.thickness, style.linear_color());
}

pub(crate) fn record_rect(list: &mut DrawList, rect: Rect, style: &DrawStyle) {
    list.push_rect(rect, style.shape(), style.linear_color());
}

pub(crate) fn record_circle(list: &mut DrawList, center: Vec2, radius: f32, style: &DrawStyle) {
    list.push_circle(center, radius, style.shape(), style.linear_color());
}

pub(crate) fn record_triangle(list: &mut DrawList, points: [Vec2; 3], style: &DrawStyle) {
    list.push_triangle(points, style.shape(), style.linear_color());
}
