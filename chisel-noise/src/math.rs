//! Interpolation and rounding helpers shared by the noise samplers.

/// Quintic fade curve used for Perlin interpolation.
///
/// Formula: `6t^5 - 15t^4 + 10t^3`. Its first and second derivatives vanish
/// at `t = 0` and `t = 1`, which keeps the noise continuous across lattice
/// cell boundaries.
#[inline]
#[must_use]
pub fn smoothstep(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Floor to `i32` with true floor semantics for negative inputs.
///
/// A plain `as i32` cast truncates toward zero, which would shift the lattice
/// cell for negative coordinates.
#[inline]
#[must_use]
pub fn floor(v: f64) -> i32 {
    let i = v as i32;
    if v < f64::from(i) { i - 1 } else { i }
}

/// Linear interpolation between `a` and `b`.
#[inline]
#[must_use]
pub fn lerp(alpha: f64, a: f64, b: f64) -> f64 {
    a + alpha * (b - a)
}

/// Bilinear interpolation of four corner values.
///
/// `a1` blends along the first axis, `a2` along the second.
#[inline]
#[must_use]
pub fn lerp2(a1: f64, a2: f64, x00: f64, x10: f64, x01: f64, x11: f64) -> f64 {
    lerp(a2, lerp(a1, x00, x10), lerp(a1, x01, x11))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor() {
        assert_eq!(floor(1.5), 1);
        assert_eq!(floor(1.0), 1);
        assert_eq!(floor(0.0), 0);
        assert_eq!(floor(-0.5), -1);
        assert_eq!(floor(-1.0), -1);
        assert_eq!(floor(-1.5), -2);
    }

    #[test]
    fn test_smoothstep_boundaries() {
        assert!((smoothstep(0.0)).abs() < 1e-12);
        assert!((smoothstep(1.0) - 1.0).abs() < 1e-12);
        assert!((smoothstep(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_lerp2_corners() {
        assert!((lerp2(0.0, 0.0, 1.0, 2.0, 3.0, 4.0) - 1.0).abs() < 1e-12);
        assert!((lerp2(1.0, 0.0, 1.0, 2.0, 3.0, 4.0) - 2.0).abs() < 1e-12);
        assert!((lerp2(0.0, 1.0, 1.0, 2.0, 3.0, 4.0) - 3.0).abs() < 1e-12);
        assert!((lerp2(1.0, 1.0, 1.0, 2.0, 3.0, 4.0) - 4.0).abs() < 1e-12);
    }
}
