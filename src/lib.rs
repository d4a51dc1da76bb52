use wasm_bindgen::prelude::*;

// ============================================================================
// ATTRACTOR ENGINE - Lorenz trail + 2D wave field for a WebGL scene
// ============================================================================
//
// The host page owns the renderer, camera and animation loop. Once per
// requestAnimationFrame it calls `tick()`, then reads the two layers:
//
//   lorenz: packed xyz, drawn as line segments
//   wave:   packed xyz + packed rgb, drawn as colored points

pub mod color;
pub mod log;
pub mod render;
pub mod sim;

use log::console_log;
use render::Layer;
use sim::{GRID_NX, GRID_NY, HISTORY_CAPACITY, World};

#[wasm_bindgen(start)]
pub fn start() {
    std::panic::set_hook(Box::new(|info| {
        log::error(&info.to_string());
    }));
}

#[wasm_bindgen]
pub struct Engine {
    world: World,
    paused: bool,
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_log!(
            "attractor-engine: {}x{} wave grid, {} point trail",
            GRID_NX, GRID_NY, HISTORY_CAPACITY
        );
        Self {
            world: World::new(),
            paused: false,
        }
    }

    pub fn tick(&mut self) {
        if self.paused { return; }
        self.world.tick();
    }

    pub fn reset(&mut self) {
        self.world.reset();
        console_log!("attractor-engine: reset");
    }

    pub fn pause(&mut self) { self.paused = true; }
    pub fn resume(&mut self) { self.paused = false; }
    pub fn is_paused(&self) -> bool { self.paused }

    /// Simulation ticks since construction or the last reset.
    pub fn frame(&self) -> f64 { self.world.frame() as f64 }

    // Lorenz layer
    pub fn lorenz_mode(&self) -> u8 { self.lorenz().mode() as u8 }
    pub fn lorenz_count(&self) -> usize { self.lorenz().vertex_count() }
    pub fn lorenz_positions_ptr(&self) -> *const f32 { self.lorenz().positions().as_ptr() }
    pub fn lorenz_positions_len(&self) -> usize { self.lorenz().positions().len() }
    pub fn lorenz_positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.lorenz().positions())
    }

    // Wave layer
    pub fn wave_mode(&self) -> u8 { self.wave().mode() as u8 }
    pub fn wave_count(&self) -> usize { self.wave().vertex_count() }
    pub fn wave_positions_ptr(&self) -> *const f32 { self.wave().positions().as_ptr() }
    pub fn wave_positions_len(&self) -> usize { self.wave().positions().len() }
    pub fn wave_colors_ptr(&self) -> *const f32 { self.wave().colors().as_ptr() }
    pub fn wave_colors_len(&self) -> usize { self.wave().colors().len() }
    pub fn wave_positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.wave().positions())
    }
    pub fn wave_colors(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.wave().colors())
    }

    pub fn grid_width(&self) -> usize { self.world.wave().dim().0 }
    pub fn grid_height(&self) -> usize { self.world.wave().dim().1 }
    pub fn history_capacity(&self) -> usize { self.world.history().capacity() }
}

impl Engine {
    fn lorenz(&self) -> &Layer { self.world.encoder().lorenz() }
    fn wave(&self) -> &Layer { self.world.encoder().wave() }

    pub fn world(&self) -> &World { &self.world }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
