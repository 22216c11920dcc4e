use anyhow::Result;

use crate::coords::{Rect, Vec2, Viewport};
use crate::draw::{BackendKind, DrawBackend, DrawStyle};
use crate::scene::DrawList;

/// In-memory backend: draws accumulate in a [`DrawList`] for the caller to
/// render or inspect.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    list: DrawList,
    viewport: Viewport,
    ready: bool,
    flushes: u64,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last [`take_list`](Self::take_list).
    #[inline]
    pub fn list(&self) -> &DrawList {
        &self.list
    }

    /// Moves the recorded commands out, leaving an empty list.
    #[inline]
    pub fn take_list(&mut self) -> DrawList {
        self.list.take()
    }

    /// Number of flushes since the last initialize.
    #[inline]
    pub fn flushes(&self) -> u64 {
        self.flushes
    }
}

impl DrawBackend for RecordingBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Recording
    }

    fn initialize(&mut self, viewport: Viewport) -> Result<()> {
        self.list.clear();
        self.viewport = viewport;
        self.flushes = 0;
        self.ready = true;
        log::debug!("recording backend ready ({}x{})", viewport.width, viewport.height);
        Ok(())
    }

    fn shutdown(&mut self) {
        if !self.ready {
            return;
        }
        self.ready = false;
        log::debug!("recording backend shut down ({} commands dropped)", self.list.len());
        self.list.clear();
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.viewport = viewport;
        Ok(())
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, style: &DrawStyle) {
        super::record_line(&mut self.list, from, to, style);
    }

    fn draw_rect(&mut self, rect: Rect, style: &DrawStyle) {
        super::record_rect(&mut self.list, rect, style);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, style: &DrawStyle) {
        super::record_circle(&mut self.list, center, radius, style);
    }

    fn draw_triangle(&mut self, points: [Vec2; 3], style: &DrawStyle) {
        super::record_triangle(&mut self.list, points, style);
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{DrawCmd, ShapeStyle};

    fn ready() -> RecordingBackend {
        let mut b = RecordingBackend::new();
        b.initialize(Viewport::new(640.0, 480.0)).unwrap();
        b
    }

    #[test]
    fn records_in_call_order() {
        let mut b = ready();
        let style = DrawStyle::default();
        b.draw_line(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0), &style);
        b.draw_circle(Vec2::new(5.0, 5.0), 2.0, &style);

        let items = b.list().items();
        assert_eq!(items.len(), 2);
        assert!(matches!(items[0], DrawCmd::Line(_)));
        assert!(matches!(items[1], DrawCmd::Circle(_)));
    }

    #[test]
    fn style_maps_onto_commands() {
        let mut b = ready();
        let style = DrawStyle { filled: true, ..DrawStyle::default() };
        b.draw_rect(Rect::new(0.0, 0.0, 4.0, 4.0), &style);

        let DrawCmd::Rect(cmd) = &b.list().items()[0] else {
            panic!("expected rect");
        };
        assert_eq!(cmd.style, ShapeStyle::Filled);
        assert_eq!(cmd.color, style.linear_color());
    }

    #[test]
    fn take_list_empties_the_recording() {
        let mut b = ready();
        b.draw_triangle([Vec2::zero(); 3], &DrawStyle::default());
        assert_eq!(b.take_list().len(), 1);
        assert!(b.list().is_empty());
    }

    #[test]
    fn lifecycle() {
        let mut b = RecordingBackend::new();
        assert!(!b.is_ready());
        b.shutdown();

        b.initialize(Viewport::new(10.0, 10.0)).unwrap();
        b.flush().unwrap();
        b.draw_line(Vec2::zero(), Vec2::new(1.0, 0.0), &DrawStyle::default());
        assert_eq!(b.flushes(), 1);

        b.initialize(Viewport::new(20.0, 10.0)).unwrap();
        assert!(b.is_ready());
        assert!(b.list().is_empty());
        assert_eq!(b.flushes(), 0);
        assert_eq!(b.viewport(), Viewport::new(20.0, 10.0));

        b.shutdown();
        assert!(!b.is_ready());
    }
}
