// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::geometry::Point2;
use crate::numeric::RationalPoint2;
use crate::numeric::rational::{det2, sign_of};

/// Half the machine epsilon: the relative rounding error of one operation.
pub(crate) const EPSILON: f64 = f64::EPSILON * 0.5;

const CCW_ERR_BOUND_A: f64 = (3.0 + 16.0 * EPSILON) * EPSILON;

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
///
/// Plain floating point evaluation; the sign may be wrong for nearly
/// collinear input.
#[inline]
pub fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (a.x - c.x) * (b.y - c.y) - (a.y - c.y) * (b.x - c.x)
}

/// Same contract as [`orient2d`], but the sign is always correct.
///
/// The determinant is evaluated in floating point first; only when its
/// magnitude falls under the forward error bound is it recomputed exactly.
/// An exact result is reported as `-1.0`, `0.0` or `1.0`.
pub fn orient2d_adaptive(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let detleft = (a.x - c.x) * (b.y - c.y);
    let detright = (a.y - c.y) * (b.x - c.x);
    let det = detleft - detright;

    let detsum = if detleft > 0.0 {
        if detright <= 0.0 {
            return det;
        }
        detleft + detright
    } else if detleft < 0.0 {
        if detright >= 0.0 {
            return det;
        }
        -detleft - detright
    } else {
        return det;
    };

    let errbound = CCW_ERR_BOUND_A * detsum;
    if det >= errbound || -det >= errbound {
        return det;
    }
    orient2d_exact(a, b, c)
}

/// Exact orientation sign in rational arithmetic.
pub fn orient2d_exact(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let a = RationalPoint2::from_point(a);
    let b = RationalPoint2::from_point(b);
    let c = RationalPoint2::from_point(c);
    let (acx, acy) = a.delta(&c);
    let (bcx, bcy) = b.delta(&c);
    sign_of(&det2(&acx, &acy, &bcx, &bcy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ccw_test() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);

        assert!(orient2d(&a, &b, &c) > 0.0); // Counter-clockwise
        assert!(orient2d(&a, &c, &b) < 0.0);
        assert!(orient2d_adaptive(&a, &b, &c) > 0.0);
    }

    #[test]
    fn exact_detects_true_collinearity() {
        let a = Point2::new(0.1, 0.1);
        let b = Point2::new(0.2, 0.2);
        let c = Point2::new(0.7, 0.7);
        assert_eq!(orient2d_exact(&a, &b, &c), orient2d_adaptive(&a, &b, &c));
    }

    #[test]
    fn adaptive_matches_exact_near_degeneracy() {
        // Points almost on the line y = x, perturbed by one ulp.
        let a = Point2::new(0.5, 0.5);
        let b = Point2::new(12.0, 12.0);
        let c = Point2::new(24.0, f64::from_bits(24.0f64.to_bits() + 1));
        let adaptive = orient2d_adaptive(&a, &b, &c);
        let exact = orient2d_exact(&a, &b, &c);
        assert_eq!(adaptive.signum(), exact.signum());
        assert!(exact > 0.0);
    }
}
