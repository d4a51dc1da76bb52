// sim/ - Simulation state
//
// Each simulation owns its state and is only touched from `World::tick`.
// Rendering reads the results afterwards through `crate::render`.

mod history;
mod lorenz;
mod wave;

pub use history::PointHistory;
pub use lorenz::{Lorenz, LorenzParams, LorenzState};
pub use wave::{SEED_AMPLITUDE, WaveField, WaveParams};

use crate::log::console_warn;
use crate::render::{Encoder, SceneSink};

// Capacity limits
pub const HISTORY_CAPACITY: usize = 5000;
pub const GRID_NX: usize = 100;
pub const GRID_NY: usize = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn translate(self, by: Point3) -> Self {
        Self::new(self.x + by.x, self.y + by.y, self.z + by.z)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Both simulations plus the buffers handed to the renderer.
pub struct World {
    lorenz: Lorenz,
    history: PointHistory,
    wave: WaveField,
    encoder: Encoder,
    frame: u64,
    diverged: bool,
}

impl World {
    pub fn new() -> Self {
        Self::with_parts(
            Lorenz::new(),
            PointHistory::new(HISTORY_CAPACITY),
            WaveField::new(GRID_NX, GRID_NY),
        )
    }

    pub fn with_parts(lorenz: Lorenz, history: PointHistory, wave: WaveField) -> Self {
        let (nx, ny) = wave.dim();
        let mut world = Self {
            lorenz,
            history,
            wave,
            encoder: Encoder::new(nx * ny),
            frame: 0,
            diverged: false,
        };
        world.encode();
        world
    }

    pub fn reset(&mut self) {
        self.lorenz.reset();
        self.history.clear();
        self.wave.reset();
        self.frame = 0;
        self.diverged = false;
        self.encode();
    }

    /// Advance both simulations one step and rebuild the render layers.
    pub fn tick(&mut self) {
        let p = self.lorenz.tick();
        if !p.is_finite() && !self.diverged {
            console_warn!("lorenz state diverged at frame {}: {:?}", self.frame, p);
            self.diverged = true;
        }
        self.history.push(p);

        self.wave.step();
        self.frame += 1;

        self.encode();
    }

    fn encode(&mut self) {
        self.encoder.encode_lorenz(&self.history);
        self.encoder.encode_wave(&self.wave);
    }

    /// Hand the current layers to a sink.
    pub fn render(&self, sink: &mut impl SceneSink) {
        self.encoder.submit(sink);
    }

    pub fn lorenz(&self) -> &Lorenz { &self.lorenz }
    pub fn history(&self) -> &PointHistory { &self.history }
    pub fn wave(&self) -> &WaveField { &self.wave }
    pub fn encoder(&self) -> &Encoder { &self.encoder }
    pub fn frame(&self) -> u64 { self.frame }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
