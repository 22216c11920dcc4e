use anyhow::Result;

use cali_engine::coords::{Vector2D, Vector3D, Viewport};
use cali_engine::core::{App, AppControl, FrameCtx};
use cali_engine::draw::{DrawError, DrawManager, RecordingBackend};
use cali_engine::paint::{Color, ColorKey, LinearRgba, SpreadMode};
use cali_engine::render::PrimitiveRenderer;
use cali_engine::series::{Gaussian, LinearGenerator};

const GRADIENT_COLUMNS: usize = 96;
const PLOT_SIZE: Vector2D = Vector2D::new(260.0, 120.0);
const MARGIN: f64 = 24.0;

const TETRAHEDRON: [Vector3D; 4] = [
    Vector3D::new(1.0, 1.0, 1.0),
    Vector3D::new(-1.0, -1.0, 1.0),
    Vector3D::new(-1.0, 1.0, -1.0),
    Vector3D::new(1.0, -1.0, -1.0),
];
const EDGES: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Demo overlay: draws through a [`DrawManager`] each frame and renders the
/// recorded stream into the window.
pub struct Overlay {
    draw: DrawManager<RecordingBackend>,
    renderer: PrimitiveRenderer,

    palette: Color,
    bell: Gaussian<f64>,
    ticks: Vec<i32>,
}

impl Overlay {
    pub fn new() -> Result<Self> {
        let palette = Color::new(
            "heat",
            vec![
                "#1E3CFFFF".parse::<ColorKey>()?,
                "#20E0A0FF".parse::<ColorKey>()?,
                "#FFD020FF".parse::<ColorKey>()?,
                ColorKey::from_hex_number(0xFF3030),
            ],
            vec![0.0, 0.35, 0.7, 1.0],
        );
        anyhow::ensure!(palette.is_consistent(), "palette {:?} is inconsistent", palette.name());

        // x in [-3, 3) at 0.05 spacing.
        let xs = LinearGenerator::new(0.0_f64, 120.0, 0.05)
            .into_calculated()
            .into_iter()
            .map(|x| x - 3.0)
            .collect();
        let bell = Gaussian::new(0.0, 1.0, xs);

        let ticks = LinearGenerator::new(0_i32, 7, 1).into_calculated();

        Ok(Self {
            draw: DrawManager::with_backend(RecordingBackend::new()),
            renderer: PrimitiveRenderer::new(),
            palette,
            bell,
            ticks,
        })
    }

    fn sync_viewport(&mut self, viewport: Viewport) -> Result<()> {
        match self.draw.viewport() {
            None => self.draw.initialize(viewport)?,
            Some(current) if current != viewport => self.draw.set_viewport(viewport)?,
            Some(_) => {}
        }
        Ok(())
    }

    fn paint(&mut self, viewport: Viewport, frame: u64) -> Result<(), DrawError> {
        let size = Vector2D::new(viewport.width as f64, viewport.height as f64);
        let center = size * 0.5;
        let phase = frame as f64 * 0.02;

        self.crosshair(center)?;
        self.orbit(center, phase)?;
        self.wireframe(center, phase)?;
        self.gradient_bars(size, phase)?;
        self.plot(Vector2D::new(MARGIN, MARGIN))?;
        Ok(())
    }

    fn crosshair(&mut self, center: Vector2D) -> Result<(), DrawError> {
        self.draw.set_color(ColorKey::from_rgba([255, 255, 255, 160]));
        self.draw.set_thickness(1.5);
        self.draw.set_filled(false);

        let h = Vector2D::new(12.0, 0.0);
        let v = h.perpendicular();
        self.draw.draw_line(center - h, center + h)?;
        self.draw.draw_line(center - v, center + v)?;
        self.draw.draw_circle(center, 6.0)
    }

    fn orbit(&mut self, center: Vector2D, phase: f64) -> Result<(), DrawError> {
        let dir = Vector2D::new(phase.cos(), phase.sin());
        let target = center + dir * 150.0;

        self.draw.set_color(ColorKey::from_hex_number(0x40FF80));
        self.draw.set_thickness(2.0);
        self.draw.draw_line(center + dir * 18.0, target - dir * 24.0)?;
        self.draw.draw_circle(target, 24.0)?;

        // Chevron pointing along the orbit.
        let tangent = dir.perpendicular();
        let tip = target + tangent * 36.0;
        self.draw.set_filled(true);
        self.draw.draw_triangle(tip, tip - tangent * 10.0 + dir * 6.0, tip - tangent * 10.0 - dir * 6.0)?;
        self.draw.draw_circle(target, 3.0)?;
        self.draw.set_filled(false);
        Ok(())
    }

    fn wireframe(&mut self, center: Vector2D, phase: f64) -> Result<(), DrawError> {
        let (sin, cos) = phase.sin_cos();
        let camera = Vector3D::new(0.0, 0.0, 5.0);

        let projected = TETRAHEDRON.map(|p| {
            // Rotate about Y, then perspective-divide onto the screen plane.
            let r = Vector3D::new(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos) + camera;
            center + r.xy() * (240.0 / r.z)
        });

        self.draw.set_color(ColorKey::from_rgba([120, 200, 255, 200]));
        self.draw.set_thickness(1.0);
        for (a, b) in EDGES {
            self.draw.draw_line(projected[a], projected[b])?;
        }
        Ok(())
    }

    fn gradient_bars(&mut self, size: Vector2D, phase: f64) -> Result<(), DrawError> {
        let width = (size.x - 2.0 * MARGIN) / GRADIENT_COLUMNS as f64;
        let pad_top = Vector2D::new(MARGIN, size.y - MARGIN - 40.0);
        let reflect_top = pad_top + Vector2D::new(0.0, 24.0);

        self.draw.set_filled(true);
        for i in 0..GRADIENT_COLUMNS {
            let t = i as f64 / (GRADIENT_COLUMNS - 1) as f64;
            let step = Vector2D::new(width * i as f64, 0.0);
            let cell = Vector2D::new(width, 16.0);

            if let Some(key) = self.palette.sample(t, SpreadMode::Pad) {
                self.draw.set_color(key);
                self.draw.draw_rect(pad_top + step, pad_top + step + cell)?;
            }
            if let Some(key) = self.palette.sample(t * 2.0 + phase, SpreadMode::Reflect) {
                self.draw.set_color(key);
                self.draw.draw_rect(reflect_top + step, reflect_top + step + cell)?;
            }
        }
        self.draw.set_filled(false);
        Ok(())
    }

    fn plot(&mut self, origin: Vector2D) -> Result<(), DrawError> {
        let data = self.bell.data();
        let pdf = self.bell.calculated();
        let peak = pdf.iter().copied().fold(f64::MIN_POSITIVE, f64::max);
        let (lo, hi) = (data[0], data[data.len() - 1]);

        let to_screen = |x: f64, y: f64| {
            origin + Vector2D::new((x - lo) / (hi - lo) * PLOT_SIZE.x, (1.0 - y / peak) * PLOT_SIZE.y)
        };

        self.draw.set_color(ColorKey::from_rgba([0, 0, 0, 120]));
        self.draw.set_filled(true);
        self.draw.draw_rect(origin, origin + PLOT_SIZE)?;

        self.draw.set_filled(false);
        self.draw.set_thickness(1.0);
        self.draw.set_color(ColorKey::from_rgba([255, 255, 255, 90]));
        let axis = origin + Vector2D::new(0.0, PLOT_SIZE.y);
        self.draw.draw_line(axis, axis + Vector2D::new(PLOT_SIZE.x, 0.0))?;
        for &tick in &self.ticks {
            let x = to_screen(lo + tick as f64, 0.0).x;
            self.draw.draw_line(Vector2D::new(x, axis.y), Vector2D::new(x, axis.y + 5.0))?;
        }

        self.draw.set_color(ColorKey::from_hex_number(0xFFD020));
        self.draw.set_thickness(2.0);
        for (x, y) in data.windows(2).zip(pdf.windows(2)) {
            self.draw.draw_line(to_screen(x[0], y[0]), to_screen(x[1], y[1]))?;
        }
        Ok(())
    }
}

impl App for Overlay {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.window.viewport();
        if !viewport.is_valid() {
            return AppControl::Continue;
        }

        if let Err(e) = self.sync_viewport(viewport) {
            log::error!("draw manager setup failed: {e:#}");
            return AppControl::Exit;
        }
        if let Err(e) = self.paint(viewport, ctx.frame_index) {
            log::warn!("frame {}: {e}", ctx.frame_index);
        }

        let list = self.draw.backend_mut().take_list();
        let renderer = &mut self.renderer;
        ctx.render(LinearRgba::transparent(), |rctx, target| {
            renderer.render(rctx, target, &list);
        })
    }
}
