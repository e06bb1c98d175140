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

use std::cmp::Ordering;

use rug::Rational;

use crate::geometry::Point2;

/// A point lifted into arbitrary-precision rationals (GMP backed).
///
/// Every finite `f64` is a dyadic rational, so the conversion is exact.
#[derive(Clone, Debug)]
pub struct RationalPoint2 {
    pub x: Rational,
    pub y: Rational,
}

impl RationalPoint2 {
    pub fn from_point(p: &Point2) -> Self {
        RationalPoint2 {
            x: to_rational(p.x),
            y: to_rational(p.y),
        }
    }

    /// `self - other`, component-wise.
    pub fn delta(&self, other: &RationalPoint2) -> (Rational, Rational) {
        (
            Rational::from(&self.x - &other.x),
            Rational::from(&self.y - &other.y),
        )
    }
}

/// Exact conversion of a finite double.
///
/// Coordinates are validated finite before any predicate runs; a non-finite
/// value maps to zero rather than aborting the predicate.
pub fn to_rational(v: f64) -> Rational {
    Rational::from_f64(v).unwrap_or_default()
}

/// `a * d - b * c`, evaluated exactly.
pub fn det2(a: &Rational, b: &Rational, c: &Rational, d: &Rational) -> Rational {
    Rational::from(a * d) - Rational::from(b * c)
}

/// `x * x + y * y`, evaluated exactly.
pub fn norm2(x: &Rational, y: &Rational) -> Rational {
    Rational::from(x * x) + Rational::from(y * y)
}

/// Sign of an exact value as an `f64` in `{-1, 0, 1}`.
pub fn sign_of(v: &Rational) -> f64 {
    match v.cmp0() {
        Ordering::Less => -1.0,
        Ordering::Equal => 0.0,
        Ordering::Greater => 1.0,
    }
}
