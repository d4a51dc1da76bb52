// wave.rs - 2D wave equation
//
// Explicit leapfrog on a fixed nx x ny grid with a 5-point Laplacian.
// Three field buffers rotate through a ring: `cur` holds u(t), the slot
// behind it u(t-1), the slot ahead receives u(t+1).
//
// Only interior cells are ever written after construction, so the edge
// rows and columns keep their initial zero. There is no CFL check; the
// scheme is stable only while wave_speed * dt / dx stays small enough.

use ndarray::Array2;

pub const SEED_AMPLITUDE: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    pub wave_speed: f64,
    pub dx: f64,
    /// Carried for completeness; the stencil scales both axes by dx.
    pub dy: f64,
    pub dt: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            wave_speed: 1.0,
            dx: 1.0,
            dy: 1.0,
            dt: 0.01,
        }
    }
}

impl WaveParams {
    /// c * dt / dx. Informational only, the solver never consults it.
    pub fn courant_number(&self) -> f64 {
        self.wave_speed * self.dt / self.dx
    }
}

pub struct WaveField {
    params: WaveParams,
    slots: [Array2<f64>; 3],
    cur: usize,
}

impl WaveField {
    pub fn new(nx: usize, ny: usize) -> Self {
        Self::with_params(nx, ny, WaveParams::default())
    }

    /// Zero field with a single displacement of `SEED_AMPLITUDE` at the
    /// grid center. The previous step starts at zero everywhere.
    pub fn with_params(nx: usize, ny: usize, params: WaveParams) -> Self {
        assert!(nx >= 3 && ny >= 3, "wave grid needs interior cells, got {nx}x{ny}");

        let mut field = Self {
            params,
            slots: [
                Array2::zeros((nx, ny)),
                Array2::zeros((nx, ny)),
                Array2::zeros((nx, ny)),
            ],
            cur: 0,
        };
        field.seed();
        field
    }

    fn seed(&mut self) {
        let (nx, ny) = self.dim();
        self.slots[self.cur][[nx / 2, ny / 2]] = SEED_AMPLITUDE;
    }

    pub fn reset(&mut self) {
        for s in &mut self.slots { s.fill(0.0); }
        self.cur = 0;
        self.seed();
    }

    /// Advance one time step and return the new current field.
    pub fn step(&mut self) -> &Array2<f64> {
        let (nx, ny) = self.dim();
        let inv_dx2 = 1.0 / (self.params.dx * self.params.dx);
        let k = self.params.wave_speed * self.params.wave_speed * self.params.dt * self.params.dt;

        let (prev, u, next) = split_ring(&mut self.slots, self.cur);

        for i in 1..nx - 1 {
            for j in 1..ny - 1 {
                let c = u[[i, j]];
                let laplacian = (u[[i + 1, j]] + u[[i - 1, j]]
                    + u[[i, j + 1]] + u[[i, j - 1]]
                    - 4.0 * c) * inv_dx2;

                next[[i, j]] = 2.0 * c - prev[[i, j]] + k * laplacian;
            }
        }

        // u(t) becomes u(t-1), u(t+1) becomes u(t); the old u(t-1) slot
        // is overwritten by the next step.
        self.cur = (self.cur + 1) % 3;
        &self.slots[self.cur]
    }

    pub fn current(&self) -> &Array2<f64> {
        &self.slots[self.cur]
    }

    pub fn previous(&self) -> &Array2<f64> {
        &self.slots[(self.cur + 2) % 3]
    }

    pub fn dim(&self) -> (usize, usize) {
        self.slots[0].dim()
    }

    pub fn params(&self) -> WaveParams { self.params }
}

/// Borrow (previous, current, next) out of the ring for slot `cur`.
fn split_ring(
    slots: &mut [Array2<f64>; 3],
    cur: usize,
) -> (&Array2<f64>, &Array2<f64>, &mut Array2<f64>) {
    let [s0, s1, s2] = slots;
    match cur {
        0 => (&*s2, &*s0, s1),
        1 => (&*s0, &*s1, s2),
        _ => (&*s1, &*s2, s0),
    }
}
