//! RgbaColor type — the color value the picker produces.
//!
//! Stores RGBA as f64 values in the 0.0–1.0 range. Every constructor clamps,
//! so components stay in range after any update.

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbaColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl RgbaColor {
    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }
}

impl Default for RgbaColor {
    /// Opaque white, the picker's starting color.
    fn default() -> Self {
        Self {
            r: 1.0,
            g: 1.0,
            b: 1.0,
            a: 1.0,
        }
    }
}

impl RgbaColor {
    /// Create from f64 RGBA. Components are clamped to 0.0–1.0.
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Copy with new RGB channels, alpha untouched.
    pub fn with_rgb(self, r: f64, g: f64, b: f64) -> Self {
        Self::from_rgba(r, g, b, self.a)
    }

    /// Copy with a new alpha channel, RGB untouched.
    pub fn with_alpha(self, a: f64) -> Self {
        Self::from_rgba(self.r, self.g, self.b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_opaque_white() {
        let c = RgbaColor::default();
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn constructors_clamp() {
        let c = RgbaColor::from_rgba(-0.5, 1.5, 0.25, 2.0);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0.0, 1.0, 0.25, 1.0));
    }

    #[test]
    fn channel_updates_are_independent() {
        let c = RgbaColor::default().with_alpha(0.5);
        assert_eq!((c.r(), c.g(), c.b()), (1.0, 1.0, 1.0));
        let c = c.with_rgb(0.1, 0.2, 0.3);
        assert_eq!(c.a(), 0.5);
    }
}
