// color.rs - Vertex colors
//
// RGB components in [0, 1], built from HSL for the wave field.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// HSL to RGB. Hue wraps into [0, 1), saturation and lightness clamp.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = h.rem_euclid(1.0);
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        if s == 0.0 {
            let v = l as f32;
            return Self::new(v, v, v);
        }

        let hi = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let lo = 2.0 * l - hi;

        Self::new(
            hue_to_rgb(lo, hi, h + 1.0 / 3.0) as f32,
            hue_to_rgb(lo, hi, h) as f32,
            hue_to_rgb(lo, hi, h - 1.0 / 3.0) as f32,
        )
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

fn hue_to_rgb(lo: f64, hi: f64, mut t: f64) -> f64 {
    if t < 0.0 { t += 1.0; }
    if t > 1.0 { t -= 1.0; }
    if t < 1.0 / 6.0 { return lo + (hi - lo) * 6.0 * t; }
    if t < 0.5 { return hi; }
    if t < 2.0 / 3.0 { return lo + (hi - lo) * 6.0 * (2.0 / 3.0 - t); }
    lo
}
