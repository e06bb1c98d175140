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

//! Super-triangle corners as points at infinity.
//!
//! Corner `i` sits at `(sx * M^ex, sy * M^ey)` for an unbounded `M`. Each
//! predicate touching a corner is decided by the sign of its leading
//! coefficient in `M`, which is the exact answer for every large enough
//! `M`. The exponents are chosen so one monomial always dominates. No
//! circumcircle of real points ever reaches a corner, so hull triangles
//! survive however flat they are.

use rug::Rational;

use crate::geometry::Point2;
use crate::kernel::orient2d_adaptive;
use crate::numeric::RationalPoint2;
use crate::numeric::rational::{norm2, sign_of};

/// `sign * M^degree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Term {
    sign: i32,
    degree: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SuperVertex {
    x: Term,
    y: Term,
}

/// Counter-clockwise corners `(-M, -M^2)`, `(M^4, M^3)`, `(-M^9, M^8)`.
pub(crate) const SUPER_VERTICES: [SuperVertex; 3] = [
    SuperVertex::new((-1, 1), (-1, 2)),
    SuperVertex::new((1, 4), (1, 3)),
    SuperVertex::new((-1, 9), (1, 8)),
];

impl SuperVertex {
    const fn new(x: (i32, u32), y: (i32, u32)) -> Self {
        SuperVertex {
            x: Term {
                sign: x.0,
                degree: x.1,
            },
            y: Term {
                sign: y.0,
                degree: y.1,
            },
        }
    }

    fn degree(&self) -> u32 {
        self.x.degree.max(self.y.degree)
    }

    /// Leading sign of `cross(w, self)` for a bounded vector `w` given by the
    /// signs of its components.
    fn cross_sign(&self, wx: i32, wy: i32) -> i32 {
        let from_y = wx * self.y.sign;
        let from_x = -wy * self.x.sign;
        let (major, minor) = if self.y.degree > self.x.degree {
            (from_y, from_x)
        } else {
            (from_x, from_y)
        };
        if major != 0 { major } else { minor }
    }
}

/// Exact sign of `a - b`.
fn sign_diff(a: f64, b: f64) -> i32 {
    if a > b {
        1
    } else if a < b {
        -1
    } else {
        0
    }
}

fn sign(v: f64) -> i32 {
    sign_diff(v, 0.0)
}

/// Sign of `orient(a, b, s)` for real `a`, `b` and corner `s`.
pub(crate) fn orient_one(a: &Point2, b: &Point2, s: usize) -> i32 {
    SUPER_VERTICES[s].cross_sign(sign_diff(b.x, a.x), sign_diff(b.y, a.y))
}

/// Sign of `orient(si, sj, c)` for two distinct corners and any third vertex.
pub(crate) fn orient_corners(i: usize, j: usize) -> i32 {
    debug_assert_ne!(i, j);
    if j == (i + 1) % 3 { 1 } else { -1 }
}

/// Whether real `p` lies inside the circle through real `a`, `b` and corner
/// `s`, with `(a, b, s)` counter-clockwise.
///
/// The circle degenerates to the half-plane left of `ab`. For `p` on that
/// line the next term decides: `cross(|a-p|^2 (b-p) - |b-p|^2 (a-p), s)`.
pub(crate) fn in_circle_one(a: &Point2, b: &Point2, s: usize, p: &Point2) -> bool {
    let o = orient2d_adaptive(a, b, p);
    if o != 0.0 {
        return o > 0.0;
    }

    let rp = RationalPoint2::from_point(p);
    let (ax, ay) = RationalPoint2::from_point(a).delta(&rp);
    let (bx, by) = RationalPoint2::from_point(b).delta(&rp);
    let za = norm2(&ax, &ay);
    let zb = norm2(&bx, &by);
    let qx = Rational::from(&za * &bx) - Rational::from(&zb * &ax);
    let qy = Rational::from(&za * &by) - Rational::from(&zb * &ay);

    SUPER_VERTICES[s].cross_sign(sign(sign_of(&qx)), sign(sign_of(&qy))) > 0
}

/// Whether real `p` lies inside the circle through real `a` and corners `x`
/// then `y`, with `(a, x, y)` counter-clockwise.
pub(crate) fn in_circle_two(a: &Point2, x: usize, y: usize, p: &Point2) -> bool {
    let (wx, wy) = (sign_diff(a.x, p.x), sign_diff(a.y, p.y));
    let (sx, sy) = (&SUPER_VERTICES[x], &SUPER_VERTICES[y]);
    let s = if sx.degree() > sy.degree() {
        -sy.cross_sign(wx, wy)
    } else {
        sx.cross_sign(wx, wy)
    };
    s > 0
}
