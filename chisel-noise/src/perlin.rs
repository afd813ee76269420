//! Classic 2D Perlin noise over the seeded permutation table.

use crate::GRADIENTS;
use crate::math::{floor, lerp2, smoothstep};
use crate::perm::PermutationTable;

/// Sample classic 2D Perlin noise at `(x, y)`.
///
/// Each of the four lattice cell corners selects one of the eight gradient
/// vectors through the permutation table; the gradient/offset dot products
/// are then blended with the quintic fade curve. Values at integer lattice
/// points are exactly zero (the corner's own offset vector is zero and the
/// fade weights collapse onto that corner).
pub(crate) fn sample(perm: &PermutationTable, x: f64, y: f64) -> f64 {
    let xi = floor(x);
    let yi = floor(y);
    let xf = x - f64::from(xi);
    let yf = y - f64::from(yi);

    let xi = (xi & 255) as usize;
    let yi = (yi & 255) as usize;

    // Gradient indices for the four cell corners. The mirrored table keeps
    // `perm[..] + yi + 1` in bounds without masking the inner sum.
    let g00 = perm.get(perm.get(xi) + yi);
    let g10 = perm.get(perm.get(xi + 1) + yi);
    let g01 = perm.get(perm.get(xi) + yi + 1);
    let g11 = perm.get(perm.get(xi + 1) + yi + 1);

    let d00 = grad_dot(g00, xf, yf);
    let d10 = grad_dot(g10, xf - 1.0, yf);
    let d01 = grad_dot(g01, xf, yf - 1.0);
    let d11 = grad_dot(g11, xf - 1.0, yf - 1.0);

    let u = smoothstep(xf);
    let v = smoothstep(yf);

    lerp2(u, v, d00, d10, d01, d11)
}

/// Dot product of the hashed gradient vector and the corner offset.
#[inline]
fn grad_dot(hash: usize, x: f64, y: f64) -> f64 {
    let g = &GRADIENTS[hash & 7];
    f64::from(g[0]) * x + f64::from(g[1]) * y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SplitMix64;

    fn table(seed: f64) -> PermutationTable {
        PermutationTable::shuffled(&mut SplitMix64::from_seed_value(seed))
    }

    #[test]
    fn test_zero_at_integer_lattice_points() {
        let perm = table(0.0);
        for x in -3..4 {
            for y in -3..4 {
                let v = sample(&perm, f64::from(x), f64::from(y));
                assert_eq!(v, 0.0, "nonzero at lattice point ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let perm = table(5.0);
        let a = sample(&perm, 12.34, -56.78);
        let b = sample(&perm, 12.34, -56.78);
        assert!(a.to_bits() == b.to_bits(), "repeated call changed value");
    }

    #[test]
    fn test_range_bound() {
        for seed in [0.0, 1.0, 2.0, -17.25] {
            let perm = table(seed);
            let mut x = -100.0;
            while x < 100.0 {
                let mut y = -100.0;
                while y < 100.0 {
                    let v = sample(&perm, x, y);
                    assert!(v.abs() <= 1.01, "|perlin2({x}, {y})| = {} > 1.01", v.abs());
                    y += 0.73;
                }
                x += 0.73;
            }
        }
    }

    #[test]
    fn test_continuous_across_lattice_boundary() {
        let perm = table(3.0);
        // Shrinking delta across the x = 1 boundary must shrink the jump.
        let mut prev_jump = f64::INFINITY;
        for delta in [1e-2, 1e-4, 1e-6] {
            let jump = (sample(&perm, 1.0 + delta, 0.4) - sample(&perm, 1.0 - delta, 0.4)).abs();
            assert!(jump < prev_jump + 1e-12, "jump grew as delta shrank");
            prev_jump = jump;
        }
        assert!(prev_jump < 1e-4, "discontinuity at lattice boundary");
    }

    #[test]
    fn test_lattice_wraps_with_period_256() {
        // Cell coordinates are masked to the table, so the field repeats
        // every 256 units and negative coordinates stay well defined.
        let perm = table(6.0);
        let a = sample(&perm, 3.25, -7.5);
        assert_eq!(a.to_bits(), sample(&perm, 3.25 + 256.0, -7.5).to_bits());
        assert_eq!(a.to_bits(), sample(&perm, 3.25, -7.5 - 256.0).to_bits());
    }

    #[test]
    fn test_non_finite_inputs_propagate() {
        let perm = table(0.0);
        assert!(sample(&perm, f64::NAN, 0.5).is_nan());
        assert!(!sample(&perm, f64::INFINITY, 0.5).is_finite());
    }
}
