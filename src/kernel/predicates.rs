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
use crate::kernel::orientation::EPSILON;
use crate::numeric::RationalPoint2;
use crate::numeric::rational::{det2, norm2, sign_of};

const ICC_ERR_BOUND_A: f64 = (10.0 + 96.0 * EPSILON) * EPSILON;

/// Swap test on the angles opposite the shared edge `(v1, v2)`.
///
/// `v3` is the apex of the triangle across the edge and `p` the apex on the
/// near side. Returns `true` when `p` lies inside the circumcircle of
/// `(v1, v2, v3)`, i.e. when the two opposite angles sum to more than pi.
/// Only the signs of the angle cosines are inspected unless they disagree,
/// in which case the sine of the angle sum decides.
pub fn angle_sum_in_circle(v1: &Point2, v2: &Point2, v3: &Point2, p: &Point2) -> bool {
    let x13 = v1.x - v3.x;
    let y13 = v1.y - v3.y;
    let x23 = v2.x - v3.x;
    let y23 = v2.y - v3.y;
    let x1p = v1.x - p.x;
    let y1p = v1.y - p.y;
    let x2p = v2.x - p.x;
    let y2p = v2.y - p.y;

    let cos_a = x13 * x23 + y13 * y23;
    let cos_b = x2p * x1p + y1p * y2p;

    if cos_a >= 0.0 && cos_b >= 0.0 {
        false
    } else if cos_a < 0.0 && cos_b < 0.0 {
        true
    } else {
        let sin_a = x13 * y23 - x23 * y13;
        let sin_b = x2p * y1p - x1p * y2p;
        sin_a * cos_b + sin_b * cos_a < 0.0
    }
}

/// Returns:
/// - >0 if `d` lies inside the circle through the CCW triangle `(a, b, c)`
/// - <0 if outside
/// - =0 if the four points are cocircular
#[inline]
pub fn incircle(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> f64 {
    let (adx, ady) = (a.x - d.x, a.y - d.y);
    let (bdx, bdy) = (b.x - d.x, b.y - d.y);
    let (cdx, cdy) = (c.x - d.x, c.y - d.y);

    let alift = adx * adx + ady * ady;
    let blift = bdx * bdx + bdy * bdy;
    let clift = cdx * cdx + cdy * cdy;

    alift * (bdx * cdy - cdx * bdy) + blift * (cdx * ady - adx * cdy) + clift * (adx * bdy - bdx * ady)
}

/// Same contract as [`incircle`], with a guaranteed sign.
pub fn incircle_adaptive(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> f64 {
    let (adx, ady) = (a.x - d.x, a.y - d.y);
    let (bdx, bdy) = (b.x - d.x, b.y - d.y);
    let (cdx, cdy) = (c.x - d.x, c.y - d.y);

    let bdxcdy = bdx * cdy;
    let cdxbdy = cdx * bdy;
    let cdxady = cdx * ady;
    let adxcdy = adx * cdy;
    let adxbdy = adx * bdy;
    let bdxady = bdx * ady;

    let alift = adx * adx + ady * ady;
    let blift = bdx * bdx + bdy * bdy;
    let clift = cdx * cdx + cdy * cdy;

    let det = alift * (bdxcdy - cdxbdy) + blift * (cdxady - adxcdy) + clift * (adxbdy - bdxady);

    let permanent = (bdxcdy.abs() + cdxbdy.abs()) * alift
        + (cdxady.abs() + adxcdy.abs()) * blift
        + (adxbdy.abs() + bdxady.abs()) * clift;
    let errbound = ICC_ERR_BOUND_A * permanent;
    if det > errbound || -det > errbound {
        return det;
    }
    incircle_exact(a, b, c, d)
}

/// Exact incircle sign in rational arithmetic.
pub fn incircle_exact(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> f64 {
    let d = RationalPoint2::from_point(d);
    let (adx, ady) = RationalPoint2::from_point(a).delta(&d);
    let (bdx, bdy) = RationalPoint2::from_point(b).delta(&d);
    let (cdx, cdy) = RationalPoint2::from_point(c).delta(&d);

    let alift = norm2(&adx, &ady);
    let blift = norm2(&bdx, &bdy);
    let clift = norm2(&cdx, &cdy);

    let det = alift * det2(&bdx, &cdx, &bdy, &cdy)
        + blift * det2(&cdx, &adx, &cdy, &ady)
        + clift * det2(&adx, &bdx, &ady, &bdy);
    sign_of(&det)
}
