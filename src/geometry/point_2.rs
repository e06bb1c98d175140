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

use std::ops::Sub;

use num_traits::ToPrimitive;

/// A 2D coordinate in double precision.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// z component of the 3D cross product of `self` and `other`.
    pub fn cross(&self, other: &Point2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for Point2 {
    type Output = Point2;
    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<[f64; 2]> for Point2 {
    fn from(c: [f64; 2]) -> Self {
        Point2::new(c[0], c[1])
    }
}

impl From<(f64, f64)> for Point2 {
    fn from(c: (f64, f64)) -> Self {
        Point2::new(c.0, c.1)
    }
}

/// Anything that can be read as a 2D input coordinate.
///
/// Components that cannot be represented as `f64` read back as NaN and are
/// rejected by the triangulator as non-finite input.
pub trait PointLike {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    fn to_point2(&self) -> Point2 {
        Point2::new(self.x(), self.y())
    }
}

impl PointLike for Point2 {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

impl<T: ToPrimitive + Copy> PointLike for [T; 2] {
    fn x(&self) -> f64 {
        self[0].to_f64().unwrap_or(f64::NAN)
    }
    fn y(&self) -> f64 {
        self[1].to_f64().unwrap_or(f64::NAN)
    }
}

impl<T: ToPrimitive + Copy> PointLike for (T, T) {
    fn x(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }
    fn y(&self) -> f64 {
        self.1.to_f64().unwrap_or(f64::NAN)
    }
}

impl<P: PointLike> PointLike for &P {
    fn x(&self) -> f64 {
        (*self).x()
    }
    fn y(&self) -> f64 {
        (*self).y()
    }
}
