use anyhow::Result;

use crate::coords::{Rect, Scalar, Vec2, Vector2D, Viewport};
use crate::paint::ColorKey;

use super::backends::{RecordingBackend, WgpuBackend};
use super::{BackendKind, DrawBackend, DrawError, DrawStyle};

/// Front end for immediate-mode shape drawing.
///
/// Owns one backend, chosen at construction, and a [`DrawStyle`] applied to
/// every draw call. Draw calls are forwarded one-to-one; nothing is batched
/// here. Before [`initialize`](Self::initialize) (or after
/// [`shutdown`](Self::shutdown)) every draw returns
/// [`DrawError::NotInitialized`].
pub struct DrawManager<B: DrawBackend = Box<dyn DrawBackend>> {
    backend: B,
    style: DrawStyle,
    initialized: bool,
}

impl DrawManager {
    /// Manager over a default-configured backend of `kind`.
    pub fn new(kind: BackendKind) -> Self {
        let backend: Box<dyn DrawBackend> = match kind {
            BackendKind::Wgpu => Box::new(WgpuBackend::default()),
            BackendKind::Recording => Box::new(RecordingBackend::new()),
        };
        Self::with_backend(backend)
    }
}

impl<B: DrawBackend> DrawManager<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            style: DrawStyle::default(),
            initialized: false,
        }
    }

    #[inline]
    pub fn kind(&self) -> BackendKind {
        self.backend.kind()
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Creates the backend device for `viewport`. Calling it again recreates
    /// the device.
    pub fn initialize(&mut self, viewport: Viewport) -> Result<()> {
        validate_viewport(viewport)?;

        if self.initialized {
            log::debug!("{} backend re-initializing", self.kind());
            self.shutdown();
        }

        self.backend.initialize(viewport)?;
        self.initialized = true;
        Ok(())
    }

    /// Releases the backend device. No-op when not initialized.
    pub fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }
        self.backend.shutdown();
        self.initialized = false;
    }

    /// Current viewport, `None` when not initialized.
    pub fn viewport(&self) -> Option<Viewport> {
        self.initialized.then(|| self.backend.viewport())
    }

    /// Moves the backend to `viewport`. Invalid viewports fail with
    /// [`DrawError`]; backend failures (e.g. a target beyond the device's
    /// texture limit) leave the previous viewport active.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.ensure_initialized()?;
        validate_viewport(viewport)?;
        self.backend.set_viewport(viewport)
    }

    #[inline]
    pub fn style(&self) -> &DrawStyle {
        &self.style
    }

    #[inline]
    pub fn set_style(&mut self, style: DrawStyle) {
        self.style = style;
    }

    #[inline]
    pub fn set_color(&mut self, color: ColorKey) {
        self.style.color = color;
    }

    #[inline]
    pub fn set_thickness(&mut self, thickness: f32) {
        self.style.thickness = thickness;
    }

    #[inline]
    pub fn set_filled(&mut self, filled: bool) {
        self.style.filled = filled;
    }

    /// Line segment from `v1` to `v2`, stroked at the current thickness.
    pub fn draw_line<T: Scalar>(&mut self, v1: Vector2D<T>, v2: Vector2D<T>) -> Result<(), DrawError> {
        self.ensure_initialized()?;
        let [a, b] = finite([v1.to_vec2(), v2.to_vec2()])?;
        self.backend.draw_line(a, b, &self.style);
        Ok(())
    }

    /// Axis-aligned rectangle spanning the opposite corners `v1` and `v2`.
    pub fn draw_rect<T: Scalar>(&mut self, v1: Vector2D<T>, v2: Vector2D<T>) -> Result<(), DrawError> {
        self.ensure_initialized()?;
        let [a, b] = finite([v1.to_vec2(), v2.to_vec2()])?;
        self.backend.draw_rect(Rect::from_corners(a, b), &self.style);
        Ok(())
    }

    pub fn draw_circle<T: Scalar>(&mut self, center: Vector2D<T>, radius: f64) -> Result<(), DrawError> {
        self.ensure_initialized()?;
        let [c] = finite([center.to_vec2()])?;
        let radius = radius as f32;
        if !radius.is_finite() {
            return Err(DrawError::NonFiniteGeometry);
        }
        self.backend.draw_circle(c, radius, &self.style);
        Ok(())
    }

    pub fn draw_triangle<T: Scalar>(
        &mut self,
        v1: Vector2D<T>,
        v2: Vector2D<T>,
        v3: Vector2D<T>,
    ) -> Result<(), DrawError> {
        self.ensure_initialized()?;
        let points = finite([v1.to_vec2(), v2.to_vec2(), v3.to_vec2()])?;
        self.backend.draw_triangle(points, &self.style);
        Ok(())
    }

    /// Submits everything drawn since the last flush.
    pub fn flush(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.backend.flush()
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[inline]
    fn ensure_initialized(&self) -> Result<(), DrawError> {
        if self.initialized {
            Ok(())
        } else {
            Err(DrawError::NotInitialized)
        }
    }
}

impl<B: DrawBackend> Drop for DrawManager<B> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn validate_viewport(viewport: Viewport) -> Result<(), DrawError> {
    if viewport.is_valid() {
        Ok(())
    } else {
        Err(DrawError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })
    }
}

/// Passes the points through when all coordinates survived the `f32` conversion.
fn finite<const N: usize>(points: [Vec2; N]) -> Result<[Vec2; N], DrawError> {
    if points.iter().all(|p| p.is_finite()) {
        Ok(points)
    } else {
        Err(DrawError::NonFiniteGeometry)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::coords::Vector3D;
    use crate::scene::{DrawCmd, ShapeStyle};

    fn ready() -> DrawManager<RecordingBackend> {
        let mut m = DrawManager::with_backend(RecordingBackend::new());
        m.initialize(Viewport::new(800.0, 600.0)).unwrap();
        m
    }

    fn take(m: &mut DrawManager<RecordingBackend>) -> Vec<DrawCmd> {
        m.backend_mut().take_list().items().to_vec()
    }

    #[test]
    fn draws_before_initialize_are_rejected() {
        let mut m = DrawManager::with_backend(RecordingBackend::new());
        let p = Vector2D::new(1.0, 2.0);

        assert_eq!(m.draw_line(p, p), Err(DrawError::NotInitialized));
        assert_eq!(m.draw_rect(p, p), Err(DrawError::NotInitialized));
        assert_eq!(m.draw_circle(p, 3.0), Err(DrawError::NotInitialized));
        assert_eq!(m.draw_triangle(p, p, p), Err(DrawError::NotInitialized));
        assert!(m.flush().is_err());
        assert_eq!(m.viewport(), None);
        assert!(m.backend().list().is_empty());
    }

    #[test]
    fn draws_after_shutdown_are_rejected() {
        let mut m = ready();
        m.shutdown();
        assert!(!m.is_initialized());
        assert_eq!(
            m.draw_line(Vector2D::new(0, 0), Vector2D::new(5, 5)),
            Err(DrawError::NotInitialized)
        );
    }

    #[test]
    fn line_uses_current_style() {
        let mut m = ready();
        m.set_thickness(3.0);
        m.set_color(ColorKey::from_rgb([255, 0, 0]));
        m.draw_line(Vector2D::new(0.0, 0.0), Vector2D::new(10.0, 5.0)).unwrap();

        let cmds = take(&mut m);
        let DrawCmd::Line(line) = &cmds[0] else { panic!("expected line") };
        assert_eq!(line.from, Vec2::new(0.0, 0.0));
        assert_eq!(line.to, Vec2::new(10.0, 5.0));
        assert_eq!(line.thickness, 3.0);
        assert_eq!(line.color, m.style().linear_color());
    }

    #[test]
    fn integer_vectors_are_accepted() {
        let mut m = ready();
        m.draw_line(Vector2D::new(1_i32, 2), Vector2D::new(3, 4)).unwrap();
        m.draw_circle(Vector2D::new(7_i64, 8), 2.5).unwrap();

        let cmds = take(&mut m);
        let DrawCmd::Circle(c) = &cmds[1] else { panic!("expected circle") };
        assert_eq!(c.center, Vec2::new(7.0, 8.0));
        assert_eq!(c.radius, 2.5);
    }

    #[test]
    fn rect_spans_corners_in_any_order() {
        let mut m = ready();
        m.set_filled(true);
        m.draw_rect(Vector2D::new(30.0, 40.0), Vector2D::new(10.0, 20.0)).unwrap();

        let cmds = take(&mut m);
        let DrawCmd::Rect(r) = &cmds[0] else { panic!("expected rect") };
        assert_eq!(r.rect, Rect::new(10.0, 20.0, 20.0, 20.0));
        assert_eq!(r.style, ShapeStyle::Filled);
    }

    #[test]
    fn triangle_keeps_vertex_order() {
        let mut m = ready();
        let (a, b, c) = (Vector2D::new(0.0, 0.0), Vector2D::new(4.0, 0.0), Vector2D::new(0.0, 3.0));
        m.draw_triangle(a, b, c).unwrap();

        let cmds = take(&mut m);
        let DrawCmd::Triangle(t) = &cmds[0] else { panic!("expected triangle") };
        assert_eq!(t.points, [a.to_vec2(), b.to_vec2(), c.to_vec2()]);
        assert_eq!(t.style, ShapeStyle::outline(1.0));
    }

    #[test]
    fn projected_3d_points_can_be_drawn() {
        let mut m = ready();
        let p = Vector3D::new(5.0, 6.0, 100.0);
        m.draw_circle(p.xy(), 1.0).unwrap();
        assert_eq!(take(&mut m).len(), 1);
    }

    #[test]
    fn non_finite_geometry_is_rejected() {
        let mut m = ready();
        let ok = Vector2D::new(0.0, 0.0);
        let nan = Vector2D::new(f64::NAN, 0.0);
        let huge = Vector2D::new(1.0e300, 0.0);

        assert_eq!(m.draw_line(ok, nan), Err(DrawError::NonFiniteGeometry));
        // Overflows f32.
        assert_eq!(m.draw_rect(ok, huge), Err(DrawError::NonFiniteGeometry));
        assert_eq!(m.draw_circle(ok, f64::INFINITY), Err(DrawError::NonFiniteGeometry));
        assert_eq!(m.draw_triangle(ok, ok, nan), Err(DrawError::NonFiniteGeometry));
        assert!(take(&mut m).is_empty());
    }

    #[test]
    fn viewport_round_trip_and_validation() {
        let mut m = ready();
        assert_eq!(m.viewport(), Some(Viewport::new(800.0, 600.0)));

        m.set_viewport(Viewport::new(1024.0, 768.0)).unwrap();
        assert_eq!(m.viewport(), Some(Viewport::new(1024.0, 768.0)));

        let err = m.set_viewport(Viewport::new(0.0, 10.0)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DrawError>(),
            Some(&DrawError::InvalidViewport { width: 0.0, height: 10.0 })
        );
        assert_eq!(m.viewport(), Some(Viewport::new(1024.0, 768.0)));
    }

    #[test]
    fn set_viewport_before_initialize_is_rejected() {
        let mut m = DrawManager::with_backend(RecordingBackend::new());
        let err = m.set_viewport(Viewport::new(10.0, 10.0)).unwrap_err();
        assert_eq!(err.downcast_ref::<DrawError>(), Some(&DrawError::NotInitialized));
    }

    #[test]
    fn oversized_wgpu_viewport_fails_initialize() {
        // Beyond any device's 2D texture limit; without an adapter it fails earlier.
        let mut m = DrawManager::with_backend(WgpuBackend::default());
        assert!(m.initialize(Viewport::new(20000.0, 10.0)).is_err());
        assert!(!m.is_initialized());
        assert!(!m.backend().is_ready());
    }

    #[test]
    fn initialize_rejects_invalid_viewport() {
        let mut m = DrawManager::with_backend(RecordingBackend::new());
        let err = m.initialize(Viewport::new(-1.0, 10.0)).unwrap_err();
        assert!(matches!(err.downcast_ref::<DrawError>(), Some(DrawError::InvalidViewport { .. })));
        assert!(!m.is_initialized());
    }

    #[test]
    fn reinitialize_restarts_the_backend() {
        let mut m = ready();
        m.draw_line(Vector2D::new(0.0, 0.0), Vector2D::new(1.0, 1.0)).unwrap();
        m.flush().unwrap();
        assert_eq!(m.backend().flushes(), 1);

        m.initialize(Viewport::new(320.0, 200.0)).unwrap();
        assert!(m.is_initialized());
        assert!(m.backend().list().is_empty());
        assert_eq!(m.backend().flushes(), 0);
        assert_eq!(m.viewport(), Some(Viewport::new(320.0, 200.0)));
    }

    #[test]
    fn boxed_manager_selects_backend_by_kind() {
        let mut m = DrawManager::new(BackendKind::Recording);
        assert_eq!(m.kind(), BackendKind::Recording);
        m.initialize(Viewport::new(10.0, 10.0)).unwrap();
        m.draw_circle(Vector2D::new(1.0, 1.0), 1.0).unwrap();
        m.flush().unwrap();

        // Construction alone does not touch the GPU.
        assert_eq!(DrawManager::new(BackendKind::Wgpu).kind(), BackendKind::Wgpu);
    }

    /// Counts shutdowns; fails `initialize` on request and rejects viewports
    /// wider than `max_width`.
    struct Scripted {
        fail: bool,
        shutdowns: Rc<Cell<u32>>,
        ready: bool,
        viewport: Viewport,
        max_width: f32,
    }

    impl Scripted {
        fn new(fail: bool, shutdowns: &Rc<Cell<u32>>) -> Self {
            Self {
                fail,
                shutdowns: shutdowns.clone(),
                ready: false,
                viewport: Viewport::default(),
                max_width: f32::INFINITY,
            }
        }
    }

    impl DrawBackend for Scripted {
        fn kind(&self) -> BackendKind {
            BackendKind::Recording
        }
        fn initialize(&mut self, viewport: Viewport) -> Result<()> {
            anyhow::ensure!(!self.fail, "no device");
            self.viewport = viewport;
            self.ready = true;
            Ok(())
        }
        fn shutdown(&mut self) {
            self.ready = false;
            self.shutdowns.set(self.shutdowns.get() + 1);
        }
        fn is_ready(&self) -> bool {
            self.ready
        }
        fn viewport(&self) -> Viewport {
            self.viewport
        }
        fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
            anyhow::ensure!(viewport.width <= self.max_width, "target too wide");
            self.viewport = viewport;
            Ok(())
        }
        fn draw_line(&mut self, _: Vec2, _: Vec2, _: &DrawStyle) {}
        fn draw_rect(&mut self, _: Rect, _: &DrawStyle) {}
        fn draw_circle(&mut self, _: Vec2, _: f32, _: &DrawStyle) {}
        fn draw_triangle(&mut self, _: [Vec2; 3], _: &DrawStyle) {}
        fn flush(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn backend_viewport_failure_keeps_previous_viewport() {
        let shutdowns = Rc::new(Cell::new(0));
        let mut m = DrawManager::with_backend(Scripted { max_width: 4096.0, ..Scripted::new(false, &shutdowns) });
        m.initialize(Viewport::new(800.0, 600.0)).unwrap();

        let err = m.set_viewport(Viewport::new(20000.0, 10.0)).unwrap_err();
        assert!(err.downcast_ref::<DrawError>().is_none());
        assert_eq!(m.viewport(), Some(Viewport::new(800.0, 600.0)));
        assert!(m.is_initialized());
    }

    #[test]
    fn failed_initialize_leaves_manager_uninitialized() {
        let shutdowns = Rc::new(Cell::new(0));
        let mut m = DrawManager::with_backend(Scripted::new(true, &shutdowns));
        assert!(m.initialize(Viewport::new(10.0, 10.0)).is_err());
        assert!(!m.is_initialized());
        drop(m);
        assert_eq!(shutdowns.get(), 0);
    }

    #[test]
    fn drop_shuts_down_once() {
        let shutdowns = Rc::new(Cell::new(0));
        {
            let mut m = DrawManager::with_backend(Scripted::new(false, &shutdowns));
            m.initialize(Viewport::new(10.0, 10.0)).unwrap();
            assert!(m.backend().is_ready());
        }
        assert_eq!(shutdowns.get(), 1);

        let mut m = DrawManager::with_backend(Scripted::new(false, &shutdowns));
        m.initialize(Viewport::new(10.0, 10.0)).unwrap();
        m.shutdown();
        drop(m);
        assert_eq!(shutdowns.get(), 2);
    }
}
