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

mod support;

use approx::assert_relative_eq;
use sloan_delaunay::validation::validate;
use sloan_delaunay::{InCirclePredicate, Point2, Triangulation, TriangulationConfig, triangulate_with};
use support::points::{
    clustered_points, grid_points, jittered_grid_points, random_disk_points, random_square_points,
};
use support::{convex_hull_area, triangle_area_sum};

fn configs() -> [TriangulationConfig; 2] {
    [
        TriangulationConfig::default().with_predicate(InCirclePredicate::AngleSum),
        TriangulationConfig::default().with_predicate(InCirclePredicate::Exact),
    ]
}

/// Per-triangle properties: winding, non-degeneracy, empty circumcircles.
fn assert_delaunay(points: &[Point2], t: &Triangulation) {
    let report = validate(points, t);
    assert!(report.num_triangles > 0);
    assert_eq!(report.out_of_range_indices, 0, "{report:?}");
    assert_eq!(report.cw_triangles, 0, "{report:?}");
    assert_eq!(report.zero_area_triangles, 0, "{report:?}");
    assert_eq!(report.delaunay_violations, 0, "{report:?}");
    assert_eq!(report.asymmetric_adjacencies, 0, "{report:?}");
}

/// Full coverage of the convex hull: every point used, Euler number of a
/// disk, boundary equal to the hull and `2N - h - 2` triangles.
fn assert_covering(points: &[Point2], t: &Triangulation) {
    let report = validate(points, t);
    assert!(report.is_valid(), "{report:?}");
    assert_eq!(report.unused_points, 0);
    assert_eq!(report.coverage_gaps, 0);
    assert_eq!(
        report.num_triangles,
        2 * points.len() - report.hull_vertices - 2
    );
    assert_relative_eq!(
        triangle_area_sum(points, t),
        convex_hull_area(points),
        max_relative = 1e-9
    );
}

#[test]
fn random_disk_is_delaunay_and_covering() {
    support::init_logging();
    for seed in [1, 2, 3] {
        let points = random_disk_points(300, Point2::new(50.0, -20.0), 40.0, seed);
        for config in configs() {
            let t = triangulate_with(&points, &config).unwrap();
            assert_delaunay(&points, &t);
            assert_covering(&points, &t);
        }
    }
}

#[test]
fn random_square_is_delaunay_and_covering() {
    support::init_logging();
    for seed in [11, 12, 13, 14] {
        let points = random_square_points(500, 1000.0, seed);
        for config in configs() {
            let t = triangulate_with(&points, &config).unwrap();
            assert_delaunay(&points, &t);
            assert_covering(&points, &t);
        }
    }
}

#[test]
fn clustered_points_are_delaunay_and_covering() {
    let points = clustered_points(400, 5, 0.5, 99);
    for config in configs() {
        let t = triangulate_with(&points, &config).unwrap();
        assert_delaunay(&points, &t);
        assert_covering(&points, &t);
    }
}

#[test]
fn jittered_grid_is_delaunay_and_covering() {
    let points = jittered_grid_points(15, 0.2, 5);
    for config in configs() {
        let t = triangulate_with(&points, &config).unwrap();
        assert_delaunay(&points, &t);
        assert_covering(&points, &t);
    }
}

#[test]
fn integer_grid_is_fully_triangulated() {
    support::init_logging();
    // 81 points, 32 on the hull: 2 * 81 - 32 - 2 = 128 triangles.
    let points = grid_points(9);
    for config in configs() {
        let t = triangulate_with(&points, &config).unwrap();
        assert_eq!(t.num_triangles(), 128);
        assert_delaunay(&points, &t);
        assert_covering(&points, &t);
        assert_relative_eq!(triangle_area_sum(&points, &t), 64.0);
    }
}

#[test]
fn predicates_agree_on_well_spaced_input() {
    let points = random_disk_points(200, Point2::new(0.0, 0.0), 1.0, 2024);
    let [fast, exact] = configs();
    let a = triangulate_with(&points, &fast).unwrap();
    let b = triangulate_with(&points, &exact).unwrap();

    let canonical = |t: &Triangulation| {
        let mut tris: Vec<[usize; 3]> = t
            .triangles()
            .map(|mut tri| {
                let k = (0..3).min_by_key(|&i| tri[i]).unwrap_or(0);
                tri.rotate_left(k);
                tri
            })
            .collect();
        tris.sort_unstable();
        tris
    };
    assert_eq!(canonical(&a), canonical(&b));
}

#[test]
fn output_is_deterministic() {
    let points = random_square_points(1000, 1.0, 42);
    let config = TriangulationConfig::default();
    let a = triangulate_with(&points, &config).unwrap();
    let b = triangulate_with(&points, &config).unwrap();
    assert_eq!(a.indices(), b.indices());
    assert_eq!(a.neighbors(), b.neighbors());
    assert_eq!(a.stats(), b.stats());
}

#[test]
fn neighbors_share_reversed_edges() {
    let points = random_disk_points(150, Point2::new(0.0, 0.0), 10.0, 8);
    let t = triangulate_with(&points, &TriangulationConfig::default()).unwrap();
    assert_eq!(t.neighbors().len(), t.num_triangles());

    let mut hull_edges = 0;
    for (i, links) in t.neighbors().iter().enumerate() {
        let tri = t.triangle(i);
        for e in 0..3 {
            let (a, b) = (tri[e], tri[(e + 1) % 3]);
            match links[e] {
                Some(j) => {
                    let other = t.triangle(j);
                    let back = (0..3).find(|&f| other[f] == b && other[(f + 1) % 3] == a);
                    let f = back.expect("neighbor must hold the reversed edge");
                    assert_eq!(t.neighbors()[j][f], Some(i));
                }
                None => hull_edges += 1,
            }
        }
    }
    // T = 2N - h - 2 with h hull edges.
    assert_eq!(t.num_triangles(), 2 * points.len() - hull_edges - 2);
}

#[test]
fn large_input_stats_are_consistent() {
    support::init_logging();
    let points = random_square_points(20_000, 1.0, 3);
    let t = triangulate_with(&points, &TriangulationConfig::default()).unwrap();
    let stats = t.stats();
    assert_eq!(stats.num_points, 20_000);
    assert_eq!(stats.grid_divisions, 12);
    assert_eq!(stats.super_triangles_removed + t.num_triangles(), 2 * 20_000 + 1);
    // Bin sorting keeps the walk short on average.
    assert!(stats.walk_steps < 20 * stats.num_points);
}

#[test]
fn circle_with_center_is_a_fan() {
    let n = 64;
    let mut points: Vec<Point2> = (0..n)
        .map(|i| {
            let theta = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            Point2::new(100.0 * theta.cos(), 100.0 * theta.sin())
        })
        .collect();
    points.push(Point2::new(0.0, 0.0));

    for config in configs() {
        let t = triangulate_with(&points, &config).unwrap();
        assert_eq!(t.num_triangles(), n);
        assert!(t.triangles().all(|tri| tri.contains(&n)));
        assert_delaunay(&points, &t);
    }
}
