//! Clamped display colour.

use prism_math::{Interval, Vector3};

const CHANNEL: Interval = Interval {
    min: 0.0,
    max: 255.0,
};

/// An RGB colour with each channel clamped to `[0, 255]`.
///
/// Arithmetic is carried out on unclamped reals; every operation returns a
/// freshly clamped `Color`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

/// Clamp a channel into `[0, 255]`. NaN maps to 0.
#[inline]
fn clamp_channel(c: f64) -> f64 {
    if c.is_nan() {
        return 0.0;
    }
    CHANNEL.clamp(c)
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub const WHITE: Color = Color {
        r: 255.0,
        g: 255.0,
        b: 255.0,
    };

    /// Create a new colour, clamping each channel.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Clamp an arbitrary vector into a colour.
    pub fn from_vector(v: Vector3) -> Self {
        Self::new(v.x(), v.y(), v.z())
    }

    /// Unpack a 24-bit `0xRRGGBB` value.
    pub fn from_value(value: u32) -> Self {
        let r = (value >> 16) & 0xff;
        let g = (value >> 8) & 0xff;
        let b = value & 0xff;
        Self::new(r as f64, g as f64, b as f64)
    }

    /// Packed 24-bit `0xRRGGBB` value. Fractional channels are truncated.
    pub fn value(&self) -> u32 {
        let [r, g, b] = self.to_rgb8();
        ((r as u32) << 16) | ((g as u32) << 8) | b as u32
    }

    #[inline]
    pub fn r(&self) -> f64 {
        self.r
    }

    #[inline]
    pub fn g(&self) -> f64 {
        self.g
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// The channels as an unclamped-arithmetic vector.
    pub fn to_vector(&self) -> Vector3 {
        Vector3::new(self.r, self.g, self.b)
    }

    /// Channels truncated to bytes.
    pub fn to_rgb8(&self) -> [u8; 3] {
        // Channels are already within [0, 255]
        [self.r as u8, self.g as u8, self.b as u8]
    }

    pub fn multiply_scalar(&self, scalar: f64) -> Color {
        Self::from_vector(self.to_vector().multiply_scalar(scalar))
    }

    /// Componentwise product with a light intensity or any other vector.
    pub fn multiply_vector(&self, v: Vector3) -> Color {
        Self::from_vector(self.to_vector().multiply_vector(v))
    }

    pub fn add_color(&self, other: Color) -> Color {
        Self::from_vector(self.to_vector().add_vector(other.to_vector()))
    }

    pub fn minus_color(&self, other: Color) -> Color {
        Self::from_vector(self.to_vector().minus_vector(other.to_vector()))
    }

    /// `self·(1 − weight) + other·weight`, clamping after each step.
    pub fn blend(&self, other: Color, weight: f64) -> Color {
        self.multiply_scalar(1.0 - weight)
            .add_color(other.multiply_scalar(weight))
    }
}

impl From<Vector3> for Color {
    fn from(v: Vector3) -> Self {
        Self::from_vector(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_construction() {
        let c = Color::new(-10.0, 128.5, 400.0);
        assert_eq!(c.r(), 0.0);
        assert_eq!(c.g(), 128.5);
        assert_eq!(c.b(), 255.0);

        let nan = Color::from_vector(Vector3::new(f64::NAN, 1.0, 2.0));
        assert_eq!(nan.r(), 0.0);
    }

    #[test]
    fn test_packed_value() {
        let c = Color::new(255.0, 128.0, 1.0);
        assert_eq!(c.value(), 0xff8001);

        // Truncation of fractional channels
        assert_eq!(Color::new(10.9, 0.2, 0.0).value(), 0x0a0000);
        assert_eq!(Color::WHITE.value(), 0xffffff);
        assert_eq!(Color::BLACK.value(), 0);
    }

    #[test]
    fn test_value_roundtrip() {
        for (r, g, b) in [(0.0, 0.0, 0.0), (255.0, 255.0, 255.0), (12.0, 200.0, 99.0)] {
            let c = Color::new(r, g, b);
            assert_eq!(Color::from_value(c.value()), c);
        }

        // Out-of-range input round-trips to its clamped triple
        let c = Color::new(300.0, -4.0, 17.0);
        assert_eq!(Color::from_value(c.value()), Color::new(255.0, 0.0, 17.0));
    }

    #[test]
    fn test_arithmetic_clamps_each_step() {
        let c = Color::new(200.0, 100.0, 50.0);

        assert_eq!(c.multiply_scalar(2.0), Color::new(255.0, 200.0, 100.0));
        assert_eq!(c.add_color(Color::new(100.0, 0.0, 0.0)), Color::new(255.0, 100.0, 50.0));
        assert_eq!(c.minus_color(Color::WHITE), Color::BLACK);
        assert_eq!(
            c.multiply_vector(Vector3::new(0.5, 0.2, 0.0)),
            Color::new(100.0, 20.0, 0.0)
        );
    }

    #[test]
    fn test_blend_weights() {
        let a = Color::new(200.0, 0.0, 100.0);
        let b = Color::new(0.0, 200.0, 100.0);

        assert_eq!(a.blend(b, 0.0), a);
        assert_eq!(a.blend(b, 1.0), b);
        assert_eq!(a.blend(b, 0.25), Color::new(150.0, 50.0, 100.0));
    }
}
