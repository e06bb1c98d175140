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
use crate::kernel::Kernel;
use crate::operations::triangulation::super_vertex::{
    in_circle_one, in_circle_two, orient_corners, orient_one,
};

/// 1-based vertex table: `1..=n` are normalized input points, `n + 1..=n + 3`
/// the symbolic super-triangle corners.
#[derive(Debug, Clone)]
pub(crate) struct Vertices {
    points: Vec<Point2>,
    num_points: usize,
}

#[derive(Debug, Clone, Copy)]
enum Vertex<'a> {
    Real(&'a Point2),
    Corner(usize),
}

use Vertex::{Corner, Real};

impl Vertices {
    /// `points[0]` is a placeholder.
    pub fn new(points: Vec<Point2>) -> Self {
        let num_points = points.len().saturating_sub(1);
        Vertices { points, num_points }
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn is_corner(&self, v: usize) -> bool {
        v > self.num_points
    }

    fn vertex(&self, v: usize) -> Vertex<'_> {
        if self.is_corner(v) {
            Corner(v - self.num_points - 1)
        } else {
            Real(&self.points[v])
        }
    }

    /// Orientation of `(a, b, c)`: positive when counter-clockwise.
    ///
    /// Only the sign is meaningful once a corner is involved.
    pub fn orient<K: Kernel>(&self, a: usize, b: usize, c: usize) -> f64 {
        let sign = match (self.vertex(a), self.vertex(b), self.vertex(c)) {
            (Real(a), Real(b), Real(c)) => return K::orient2d(a, b, c),
            (Real(a), Real(b), Corner(s)) => orient_one(a, b, s),
            (Corner(s), Real(b), Real(c)) => orient_one(b, c, s),
            (Real(a), Corner(s), Real(c)) => orient_one(c, a, s),
            (Corner(i), Corner(j), _) => orient_corners(i, j),
            (Corner(i), Real(_), Corner(j)) => orient_corners(j, i),
            (Real(_), Corner(i), Corner(j)) => orient_corners(i, j),
        };
        f64::from(sign)
    }

    /// Whether vertex `p` lies strictly inside the circumcircle of the
    /// counter-clockwise triangle `(v1, v2, v3)`.
    ///
    /// `p` is always a real point; corners are never tested against a circle.
    pub fn in_circumcircle<K: Kernel>(&self, v1: usize, v2: usize, v3: usize, p: usize) -> bool {
        let Real(p) = self.vertex(p) else {
            return false;
        };
        match (self.vertex(v1), self.vertex(v2), self.vertex(v3)) {
            (Real(a), Real(b), Real(c)) => K::in_circumcircle(a, b, c, p),
            (Real(a), Real(b), Corner(s)) => in_circle_one(a, b, s, p),
            (Corner(s), Real(b), Real(c)) => in_circle_one(b, c, s, p),
            (Real(a), Corner(s), Real(c)) => in_circle_one(c, a, s, p),
            (Real(a), Corner(x), Corner(y)) => in_circle_two(a, x, y, p),
            (Corner(x), Real(a), Corner(y)) => in_circle_two(a, y, x, p),
            (Corner(x), Corner(y), Real(a)) => in_circle_two(a, x, y, p),
            (Corner(_), Corner(_), Corner(_)) => true,
        }
    }
}
