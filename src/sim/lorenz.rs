// lorenz.rs - Lorenz attractor
//
// Forward Euler on the classic three-variable system. No step control,
// no divergence guard: the chaotic state is integrated as-is.

use super::Point3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LorenzParams {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
    pub dt: f64,
}

impl Default for LorenzParams {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
            dt: 0.01,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LorenzState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl LorenzState {
    pub const SEED: LorenzState = LorenzState { x: 0.1, y: 0.0, z: 0.0 };

    pub fn point(&self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }
}

impl Default for LorenzState {
    fn default() -> Self {
        Self::SEED
    }
}

pub struct Lorenz {
    params: LorenzParams,
    state: LorenzState,
}

impl Lorenz {
    pub fn new() -> Self {
        Self::with_params(LorenzParams::default())
    }

    pub fn with_params(params: LorenzParams) -> Self {
        Self { params, state: LorenzState::SEED }
    }

    /// Advance one Euler step and return the new state as a point.
    ///
    /// All three derivatives are taken from the pre-step state.
    pub fn tick(&mut self) -> Point3 {
        let LorenzParams { sigma, rho, beta, dt } = self.params;
        let LorenzState { x, y, z } = self.state;

        let dx = sigma * (y - x) * dt;
        let dy = (x * (rho - z) - y) * dt;
        let dz = (x * y - beta * z) * dt;

        self.state = LorenzState { x: x + dx, y: y + dy, z: z + dz };
        self.state.point()
    }

    pub fn reset(&mut self) {
        self.state = LorenzState::SEED;
    }

    pub fn state(&self) -> LorenzState { self.state }
    pub fn params(&self) -> LorenzParams { self.params }
}

impl Default for Lorenz {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_step() {
        let mut lorenz = Lorenz::new();
        let p = lorenz.tick();
        assert_relative_eq!(p.x, 0.09, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.028, epsilon = 1e-12);
        assert_eq!(p.z, 0.0);
        assert_eq!(lorenz.state().point(), p);
    }

    #[test]
    fn test_second_step_uses_pre_step_values() {
        let mut lorenz = Lorenz::new();
        lorenz.tick();
        let p = lorenz.tick();

        // From (0.09, 0.028, 0)
        let x = 0.09 + 10.0 * (0.028 - 0.09) * 0.01;
        let y = 0.028 + (0.09 * 28.0 - 0.028) * 0.01;
        let z = 0.0 + (0.09 * 0.028) * 0.01;
        assert_relative_eq!(p.x, x, epsilon = 1e-12);
        assert_relative_eq!(p.y, y, epsilon = 1e-12);
        assert_relative_eq!(p.z, z, epsilon = 1e-12);
    }

    #[test]
    fn test_custom_dt() {
        let params = LorenzParams { dt: 0.005, ..LorenzParams::default() };
        let mut lorenz = Lorenz::with_params(params);
        let p = lorenz.tick();
        assert_relative_eq!(p.x, 0.095, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.014, epsilon = 1e-12);
    }

    #[test]
    fn test_reset() {
        let mut lorenz = Lorenz::new();
        for _ in 0..50 { lorenz.tick(); }
        assert_ne!(lorenz.state(), LorenzState::SEED);
        lorenz.reset();
        assert_eq!(lorenz.state(), LorenzState::SEED);
    }

    #[test]
    fn test_stays_bounded_in_practice() {
        let mut lorenz = Lorenz::new();
        for _ in 0..20_000 {
            let p = lorenz.tick();
            assert!(p.is_finite());
            assert!(p.x.abs() < 100.0 && p.y.abs() < 100.0 && p.z.abs() < 100.0);
        }
    }
}
