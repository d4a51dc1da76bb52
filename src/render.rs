// render.rs - Encode simulation state to render buffers
//
// Each scene object gets a Layer of packed f32 data:
//   positions = [x0, y0, z0, x1, y1, z1, ...]
//   colors    = [r0, g0, b0, ...]   (empty when the layer has no vertex colors)
//
// Layers are rebuilt from scratch every tick, so a buffer read by the
// host always belongs to a single frame.

use crate::color::Color;
use crate::sim::{Point3, PointHistory, WaveField};

/// Display-space shift for the attractor, keeps it clear of the wave grid.
pub const LORENZ_OFFSET: Point3 = Point3::new(-80.0, -50.0, -50.0);

/// Field value per full hue turn.
pub const HUE_DIVISOR: f64 = 10.0;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawMode {
    /// Vertex pairs (0,1), (2,3), ... drawn as segments
    LineSegments = 0,
    Points = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerId {
    Lorenz,
    Wave,
}

/// Anything that can display a layer. The browser host reads buffers
/// straight out of wasm memory instead; this is the in-process seam.
pub trait SceneSink {
    fn submit(&mut self, id: LayerId, layer: &Layer);
}

pub struct Layer {
    mode: DrawMode,
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl Layer {
    pub fn new(mode: DrawMode, vertices: usize) -> Self {
        Self {
            mode,
            positions: Vec::with_capacity(vertices * 3),
            colors: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.colors.clear();
    }

    #[inline]
    fn push_position(&mut self, x: f64, y: f64, z: f64) {
        self.positions.extend_from_slice(&[x as f32, y as f32, z as f32]);
    }

    #[inline]
    fn push_color(&mut self, c: Color) {
        self.colors.extend_from_slice(&c.to_array());
    }

    pub fn mode(&self) -> DrawMode { self.mode }
    pub fn positions(&self) -> &[f32] { &self.positions }
    pub fn colors(&self) -> &[f32] { &self.colors }
    pub fn vertex_count(&self) -> usize { self.positions.len() / 3 }
    pub fn has_colors(&self) -> bool { !self.colors.is_empty() }
}

pub struct Encoder {
    lorenz: Layer,
    wave: Layer,
}

impl Encoder {
    pub fn new(wave_cells: usize) -> Self {
        let mut wave = Layer::new(DrawMode::Points, wave_cells);
        wave.colors.reserve(wave_cells * 3);
        Self {
            lorenz: Layer::new(DrawMode::LineSegments, 0),
            wave,
        }
    }

    /// Attractor trail, oldest point first, shifted by `LORENZ_OFFSET`.
    pub fn encode_lorenz(&mut self, history: &PointHistory) {
        let layer = &mut self.lorenz;
        layer.clear();
        for p in history.iter() {
            let q = p.translate(LORENZ_OFFSET);
            layer.push_position(q.x, q.y, q.z);
        }
    }

    /// One point per grid cell, centered on the origin, height = field
    /// value, hue = value / HUE_DIVISOR.
    pub fn encode_wave(&mut self, field: &WaveField) {
        let u = field.current();
        let (nx, ny) = field.dim();
        let (cx, cy) = (nx as f64 / 2.0, ny as f64 / 2.0);

        let layer = &mut self.wave;
        layer.clear();
        for ((i, j), &v) in u.indexed_iter() {
            layer.push_position(i as f64 - cx, j as f64 - cy, v);
            layer.push_color(Color::from_hsl(v / HUE_DIVISOR, 1.0, 0.5));
        }
    }

    pub fn submit(&self, sink: &mut impl SceneSink) {
        sink.submit(LayerId::Lorenz, &self.lorenz);
        sink.submit(LayerId::Wave, &self.wave);
    }

    pub fn lorenz(&self) -> &Layer { &self.lorenz }
    pub fn wave(&self) -> &Layer { &self.wave }
}
