//! 2D simplex noise on the skewed triangular grid.

use crate::GRADIENTS;
use crate::math::floor;
use crate::perm::PermutationTable;

#[allow(clippy::unreadable_literal)]
const SQRT_3: f64 = 1.7320508075688772;
/// Skew factor for 2D simplex: `(sqrt(3) - 1) / 2`.
const F2: f64 = 0.5 * (SQRT_3 - 1.0);
/// Unskew factor for 2D simplex: `(3 - sqrt(3)) / 6`.
const G2: f64 = (3.0 - SQRT_3) / 6.0;

/// Normalization applied to the summed corner contributions so the output
/// range matches Perlin's conventional `[-1, 1]`.
const SCALE: f64 = 70.0;

/// Sample 2D simplex noise at `(x, y)`.
///
/// The input is skewed onto a triangular grid; the three corners of the
/// containing triangle each contribute `max(0, 0.5 - dx^2 - dy^2)^4` times
/// the gradient/offset dot product. Gradients come from the same 8-vector
/// table as Perlin, selected by summed permutation lookups.
pub(crate) fn sample(perm: &PermutationTable, xin: f64, yin: f64) -> f64 {
    let s = (xin + yin) * F2;
    let i = floor(xin + s);
    let j = floor(yin + s);
    let t = f64::from(i + j) * G2;

    // Offsets from the first (unskewed) simplex corner.
    let x0 = xin - (f64::from(i) - t);
    let y0 = yin - (f64::from(j) - t);

    // Which of the two triangles of the skewed unit square holds the point.
    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    let x1 = x0 - f64::from(i1) + G2;
    let y1 = y0 - f64::from(j1) + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    let ii = (i & 255) as usize;
    let jj = (j & 255) as usize;
    let gi0 = perm.get(ii + perm.get(jj));
    let gi1 = perm.get(ii + i1 as usize + perm.get(jj + j1 as usize));
    let gi2 = perm.get(ii + 1 + perm.get(jj + 1));

    let n0 = corner(gi0, x0, y0);
    let n1 = corner(gi1, x1, y1);
    let n2 = corner(gi2, x2, y2);

    SCALE * (n0 + n1 + n2)
}

/// Contribution of a single simplex corner.
#[inline]
fn corner(hash: usize, x: f64, y: f64) -> f64 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        0.0
    } else {
        let g = &GRADIENTS[hash & 7];
        let t2 = t * t;
        t2 * t2 * (f64::from(g[0]) * x + f64::from(g[1]) * y)
    }
}
