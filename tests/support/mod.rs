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

#![allow(dead_code)]

pub mod points;

use sloan_delaunay::{Point2, Triangulation};

/// Routes `log` output through the test harness; set `RUST_LOG` to see it.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sum of the unsigned areas of all output triangles.
pub fn triangle_area_sum(points: &[Point2], triangulation: &Triangulation) -> f64 {
    triangulation
        .triangles()
        .map(|[a, b, c]| {
            let (a, b, c) = (points[a], points[b], points[c]);
            0.5 * ((b - a).cross(&(c - a))).abs()
        })
        .sum()
}

/// Area of the convex hull (Andrew's monotone chain).
pub fn convex_hull_area(points: &[Point2]) -> f64 {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup();
    if pts.len() < 3 {
        return 0.0;
    }

    let turn = |o: &Point2, a: &Point2, b: &Point2| (*a - *o).cross(&(*b - *o));
    let mut hull: Vec<Point2> = Vec::with_capacity(2 * pts.len());
    for pass in [pts.clone(), pts.iter().rev().copied().collect()] {
        let base = hull.len();
        for p in pass {
            while hull.len() >= base + 2 && turn(&hull[hull.len() - 2], &hull[hull.len() - 1], &p) <= 0.0 {
                hull.pop();
            }
            hull.push(p);
        }
        hull.pop();
    }

    let mut area = 0.0;
    for i in 0..hull.len() {
        let (a, b) = (hull[i], hull[(i + 1) % hull.len()]);
        area += a.x * b.y - b.x * a.y;
    }
    0.5 * area.abs()
}

/// Signed area of triangle `t` (positive when counter-clockwise).
pub fn signed_area(points: &[Point2], t: [usize; 3]) -> f64 {
    let [a, b, c] = t.map(|i| points[i]);
    0.5 * (b - a).cross(&(c - a))
}
