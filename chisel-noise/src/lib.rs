//! 2D gradient noise primitives for the noise extension blocks.
//!
//! This crate is pure math: no I/O, no host coupling. It provides
//! [`NoiseEngine`], a reseedable generator producing classic Perlin noise,
//! simplex noise, and a divergence-free curl field derived from the simplex
//! potential. All outputs are deterministic for a given seed and coordinate,
//! and multiple engines coexist without shared state.

mod math;
mod perlin;
mod perm;
mod random;
mod simplex;

pub use random::{Random, SplitMix64};

use perm::PermutationTable;

/// Gradient vectors shared by the Perlin and simplex samplers.
///
/// The classic 8-direction set: the four diagonals and the four axis
/// directions. Selection masks the permutation value to the table size, so
/// every lattice point picks uniformly among these.
pub(crate) const GRADIENTS: [[i32; 2]; 8] = [
    [1, 1],
    [-1, 1],
    [1, -1],
    [-1, -1],
    [1, 0],
    [-1, 0],
    [0, 1],
    [0, -1],
];

/// Finite-difference step for [`NoiseEngine::curl2`].
///
/// Small enough that the central difference tracks the analytic gradient of
/// the simplex field, large enough to stay clear of cancellation noise.
pub const CURL_EPSILON: f64 = 1.0e-4;

/// Reseedable 2D noise generator.
///
/// Owns its permutation table, so independent engines (one per logical noise
/// generator, or one per test) never interfere. Reseeding replaces the table
/// wholesale; callers sharing one engine across threads must serialize
/// `seed` against evaluation (the extension layer wraps the engine in a
/// mutex for exactly that reason).
#[derive(Debug, Clone)]
pub struct NoiseEngine {
    perm: PermutationTable,
}

impl NoiseEngine {
    /// Create an engine seeded with `seed`.
    ///
    /// Any finite value is acceptable, including negative, fractional and
    /// zero seeds; the value's bit pattern is hashed into the shuffle.
    #[must_use]
    pub fn new(seed: f64) -> Self {
        Self {
            perm: PermutationTable::shuffled(&mut SplitMix64::from_seed_value(seed)),
        }
    }

    /// Replace the permutation table with one derived from `value`.
    ///
    /// Identical values always rebuild identical tables.
    pub fn seed(&mut self, value: f64) {
        self.perm = PermutationTable::shuffled(&mut SplitMix64::from_seed_value(value));
    }

    /// Classic 2D Perlin noise at `(x, y)`.
    ///
    /// Output is conventionally within `[-1, 1]` for the 8-vector gradient
    /// set. Non-finite inputs propagate through the arithmetic per IEEE-754;
    /// nothing panics.
    #[must_use]
    pub fn perlin2(&self, x: f64, y: f64) -> f64 {
        perlin::sample(&self.perm, x, y)
    }

    /// 2D simplex noise at `(x, y)`, normalized to match Perlin's range.
    #[must_use]
    pub fn simplex2(&self, x: f64, y: f64) -> f64 {
        simplex::sample(&self.perm, x, y)
    }

    /// Divergence-free 2D vector field derived from the simplex potential.
    ///
    /// Central-differences the scalar field with step [`CURL_EPSILON`] and
    /// rotates the gradient 90 degrees: the result is `(dp/dy, -dp/dx)`.
    #[must_use]
    pub fn curl2(&self, x: f64, y: f64) -> [f64; 2] {
        let e = CURL_EPSILON;
        let dpdx = (self.simplex2(x + e, y) - self.simplex2(x - e, y)) / (2.0 * e);
        let dpdy = (self.simplex2(x, y + e) - self.simplex2(x, y - e)) / (2.0 * e);
        [dpdy, -dpdx]
    }
}

impl Default for NoiseEngine {
    /// An engine with the deterministic default seed `0.0`.
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_then_evaluate_is_bit_identical() {
        let mut engine = NoiseEngine::default();
        engine.seed(11.0);
        let a = engine.perlin2(3.7, -2.2);
        engine.seed(11.0);
        let b = engine.perlin2(3.7, -2.2);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_seed_sensitivity() {
        let one = NoiseEngine::new(1.0);
        let two = NoiseEngine::new(2.0);
        let differing = (0..64)
            .filter(|&i| {
                let x = f64::from(i) * 0.37 + 0.11;
                let y = f64::from(i) * 0.21 - 3.0;
                one.perlin2(x, y) != two.perlin2(x, y)
            })
            .count();
        assert!(differing > 48, "seeds 1 and 2 agree on {} of 64 points", 64 - differing);
    }

    #[test]
    fn test_default_seed_matches_explicit_zero() {
        let default = NoiseEngine::default();
        let zero = NoiseEngine::new(0.0);
        assert_eq!(
            default.simplex2(4.2, -1.3).to_bits(),
            zero.simplex2(4.2, -1.3).to_bits()
        );
    }

    #[test]
    fn test_origin_scenario() {
        // seed(0); perlin2(0, 0) must be exactly zero: the origin sits on a
        // lattice corner with zero fractional offset.
        let mut engine = NoiseEngine::default();
        engine.seed(0.0);
        assert_eq!(engine.perlin2(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_frozen_reference_values() {
        // Reference values generated once from this implementation and
        // frozen. A change to the shuffle, gradient selection or
        // interpolation that slips past the property tests breaks seed
        // reproducibility across versions and must show up here.
        const CASES: [(f64, f64, f64, f64, f64); 6] = [
            // (seed, x, y, perlin2, simplex2)
            (0.0, 1.25, -2.75, 0.239_441_871_643_066_4, -0.479_605_074_187_209_16),
            (0.0, 10.1, 3.7, -0.124_157_175_359_999_93, 0.063_836_557_216_877_7),
            (0.0, -4.2, 7.9, -0.127_556_943_359_999_12, 0.786_817_028_755_327_7),
            (1.0, 1.25, -2.75, -0.185_757_637_023_925_78, -0.479_605_074_187_209_16),
            (1.0, 10.1, 3.7, 0.336_084_000_000_000_05, 0.311_153_445_905_905_3),
            (1.0, -4.2, 7.9, -0.055_660_328_960_000_84, -0.333_279_573_690_759_4),
        ];
        for (seed, x, y, perlin, simplex) in CASES {
            let engine = NoiseEngine::new(seed);
            let p = engine.perlin2(x, y);
            let s = engine.simplex2(x, y);
            assert!(
                (p - perlin).abs() < 1e-12,
                "perlin2({x}, {y}) with seed {seed}: got {p}, expected {perlin}"
            );
            assert!(
                (s - simplex).abs() < 1e-12,
                "simplex2({x}, {y}) with seed {seed}: got {s}, expected {simplex}"
            );
        }
    }

    #[test]
    fn test_independent_engines_do_not_interfere() {
        let a = NoiseEngine::new(1.0);
        let mut b = NoiseEngine::new(1.0);
        let before = a.simplex2(0.5, 0.5);
        b.seed(999.0);
        assert_eq!(before.to_bits(), a.simplex2(0.5, 0.5).to_bits());
    }

    #[test]
    fn test_curl_is_discretely_divergence_free() {
        let engine = NoiseEngine::new(7.0);
        let h = 1e-3;
        for i in 0..20 {
            let x = f64::from(i) * 0.77 - 7.0;
            let y = f64::from(i) * 0.41 + 0.3;
            let dx = (engine.curl2(x + h, y)[0] - engine.curl2(x - h, y)[0]) / (2.0 * h);
            let dy = (engine.curl2(x, y + h)[1] - engine.curl2(x, y - h)[1]) / (2.0 * h);
            let div = dx + dy;
            assert!(div.abs() < 1e-2, "divergence {div} at ({x}, {y})");
        }
    }

    #[test]
    fn test_curl_sign_convention() {
        // curl = (dp/dy, -dp/dx), so the components must match central
        // differences of the simplex potential regardless of the step used.
        let engine = NoiseEngine::new(3.0);
        let (x, y) = (1.234, -0.567);
        let h = 1e-5;
        let dpdx = (engine.simplex2(x + h, y) - engine.simplex2(x - h, y)) / (2.0 * h);
        let dpdy = (engine.simplex2(x, y + h) - engine.simplex2(x, y - h)) / (2.0 * h);
        let c = engine.curl2(x, y);
        assert!((c[0] - dpdy).abs() < 1e-3);
        assert!((c[1] + dpdx).abs() < 1e-3);
    }

    #[test]
    fn test_curl_components_are_finite() {
        let engine = NoiseEngine::new(0.0);
        for i in 0..50 {
            let x = f64::from(i) * 0.19;
            let c = engine.curl2(x, -x * 0.5);
            assert!(c[0].is_finite() && c[1].is_finite());
        }
    }
}
