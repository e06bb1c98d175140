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

//! Brute-force validation of a triangulation against its input points.
//!
//! Checks the properties every Delaunay triangulation must have: valid
//! indices, one consistent winding, empty circumcircles, mirrored adjacency
//! and the Euler characteristic of a disk. Coverage is checked against an
//! independently computed convex hull: the boundary must be the hull and the
//! triangle count must be `2V - h - 2`. Quadratic in the input size; meant
//! for tests and debugging.

use std::collections::HashMap;

use crate::geometry::{Aabb2, Point2, PointLike};
use crate::kernel::{incircle, orient2d, orient2d_adaptive};
use crate::operations::triangulation::Triangulation;
use crate::operations::triangulation::normalize::to_unit;

/// Default tolerance for the empty-circumcircle check, in the unit-square
/// frame the points are rescaled to before testing.
pub const DEFAULT_INCIRCLE_TOLERANCE: f64 = 1e-12;

/// Detailed validation report for a triangulation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Number of triangles checked.
    pub num_triangles: usize,
    /// Indices that do not name an input point.
    pub out_of_range_indices: usize,
    /// Input points not used by any triangle.
    pub unused_points: usize,
    /// Triangles wound counter-clockwise.
    pub ccw_triangles: usize,
    /// Triangles wound clockwise.
    pub cw_triangles: usize,
    /// Triangles with zero area.
    pub zero_area_triangles: usize,
    /// (triangle, point) pairs where the point is strictly inside the
    /// triangle's circumcircle.
    pub delaunay_violations: usize,
    /// Neighbour links not mirrored across the same edge.
    pub asymmetric_adjacencies: usize,
    /// V - E + F over the used vertices; 1 for a triangulated disk.
    pub euler_characteristic: i64,
    /// Convex hull vertices of the input, counting points on hull edges.
    pub hull_vertices: usize,
    /// `2V - h - 2` for `V` distinct input locations and `h` hull vertices.
    pub expected_triangles: usize,
    /// Boundary edges that are not hull edges plus hull edges missing from
    /// the boundary.
    pub coverage_gaps: usize,
}

impl ValidationReport {
    /// True when every triangle shares one winding.
    pub fn orientation_consistent(&self) -> bool {
        self.ccw_triangles == 0 || self.cw_triangles == 0
    }

    /// Check if the triangulation is a valid Delaunay triangulation.
    ///
    /// Unused points are tolerated (duplicates are never referenced twice),
    /// but every distinct location must be covered.
    pub fn is_valid(&self) -> bool {
        self.num_triangles > 0
            && self.out_of_range_indices == 0
            && self.orientation_consistent()
            && self.zero_area_triangles == 0
            && self.delaunay_violations == 0
            && self.asymmetric_adjacencies == 0
            && self.euler_characteristic == 1
            && self.num_triangles == self.expected_triangles
            && self.coverage_gaps == 0
    }
}

/// Validate `triangulation` against `points` with the default tolerance.
pub fn validate<P: PointLike>(points: &[P], triangulation: &Triangulation) -> ValidationReport {
    validate_with_tolerance(points, triangulation, DEFAULT_INCIRCLE_TOLERANCE)
}

/// Validate with an explicit incircle tolerance (unit-square frame).
pub fn validate_with_tolerance<P: PointLike>(
    points: &[P],
    triangulation: &Triangulation,
    tolerance: f64,
) -> ValidationReport {
    let raw: Vec<Point2> = points.iter().map(PointLike::to_point2).collect();
    let pts = unit_frame(&raw);
    let n = pts.len();
    let mut report = ValidationReport {
        num_triangles: triangulation.num_triangles(),
        ..Default::default()
    };

    let mut used = vec![false; n];
    let mut edges: HashMap<(usize, usize), usize> = HashMap::new();
    let mut valid_triangles = Vec::with_capacity(report.num_triangles);

    for tri in triangulation.triangles() {
        if tri.iter().any(|&v| v >= n) {
            report.out_of_range_indices += tri.iter().filter(|&&v| v >= n).count();
            continue;
        }
        for i in 0..3 {
            used[tri[i]] = true;
            let (a, b) = (tri[i], tri[(i + 1) % 3]);
            *edges.entry((a.min(b), a.max(b))).or_default() += 1;
        }

        let [a, b, c] = tri.map(|v| pts[v]);
        let o = orient2d(&a, &b, &c);
        if o > 0.0 {
            report.ccw_triangles += 1;
            valid_triangles.push([a, b, c]);
        } else if o < 0.0 {
            report.cw_triangles += 1;
            valid_triangles.push([a, c, b]);
        } else {
            report.zero_area_triangles += 1;
        }
    }

    for [a, b, c] in &valid_triangles {
        report.delaunay_violations += pts
            .iter()
            .filter(|p| *p != a && *p != b && *p != c)
            .filter(|p| incircle(a, b, c, p) > tolerance)
            .count();
    }

    report.asymmetric_adjacencies = count_asymmetric(triangulation);
    report.unused_points = used.iter().filter(|&&u| !u).count();
    let used_vertices = used.iter().filter(|&&u| u).count() as i64;
    report.euler_characteristic =
        used_vertices - edges.len() as i64 + report.num_triangles as i64;

    // One representative per location, used points first.
    let mut distinct: Vec<usize> = (0..n).collect();
    distinct.sort_by(|&a, &b| {
        pts[a]
            .x
            .total_cmp(&pts[b].x)
            .then(pts[a].y.total_cmp(&pts[b].y))
            .then(used[b].cmp(&used[a]))
    });
    distinct.dedup_by(|cur, kept| pts[*cur] == pts[*kept]);

    let hull = hull_cycle(&pts, &distinct);
    report.hull_vertices = hull.len();
    report.expected_triangles = (2 * distinct.len()).saturating_sub(hull.len() + 2);

    let mut hull_edges: Vec<(usize, usize)> = (0..hull.len())
        .map(|i| {
            let (a, b) = (hull[i], hull[(i + 1) % hull.len()]);
            (a.min(b), a.max(b))
        })
        .collect();
    hull_edges.sort_unstable();
    hull_edges.dedup();
    let boundary = edges.iter().filter(|&(_, &count)| count == 1).count();
    let matched = hull_edges
        .iter()
        .filter(|&e| edges.get(e) == Some(&1))
        .count();
    report.coverage_gaps = (boundary - matched) + (hull_edges.len() - matched);
    report
}

/// Rescale into the unit square exactly as the triangulator does.
fn unit_frame(raw: &[Point2]) -> Vec<Point2> {
    let Some(bounds) = Aabb2::from_points(raw) else {
        return Vec::new();
    };
    let half = bounds.half_max_extent();
    let fact = if half > 0.0 && half.is_finite() { 1.0 / half } else { 1.0 };
    raw.iter().map(|p| to_unit(p, &bounds, fact)).collect()
}

/// Convex hull of the distinct points `sorted` (lexicographic order) as a
/// counter-clockwise cycle. Points on hull edges are kept.
fn hull_cycle(pts: &[Point2], sorted: &[usize]) -> Vec<usize> {
    let mut lower = half_hull(pts, sorted.iter().copied());
    let mut upper = half_hull(pts, sorted.iter().rev().copied());
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Monotone chain; pops only on strict right turns.
fn half_hull(pts: &[Point2], order: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut chain: Vec<usize> = Vec::new();
    for i in order {
        while let [.., a, b] = chain[..] {
            if orient2d_adaptive(&pts[a], &pts[b], &pts[i]) >= 0.0 {
                break;
            }
            chain.pop();
        }
        chain.push(i);
    }
    chain
}

fn count_asymmetric(triangulation: &Triangulation) -> usize {
    let neighbors = triangulation.neighbors();
    let mut bad = 0;
    for (t, links) in neighbors.iter().enumerate() {
        let tri = triangulation.triangle(t);
        for i in 0..3 {
            let Some(r) = links[i] else { continue };
            let Some(back_links) = neighbors.get(r) else {
                bad += 1;
                continue;
            };
            let other = triangulation.triangle(r);
            let (a, b) = (tri[i], tri[(i + 1) % 3]);
            let mirrored = (0..3).any(|j| {
                back_links[j] == Some(t) && other[j] == b && other[(j + 1) % 3] == a
            });
            if !mirrored {
                bad += 1;
            }
        }
    }
    bad
}
