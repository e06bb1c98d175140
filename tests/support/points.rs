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

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sloan_delaunay::Point2;
use std::f64::consts::PI;

/// Uniform points in the axis-aligned square `[0, size]^2`.
pub fn random_square_points(n: usize, size: f64, seed: u64) -> Vec<Point2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point2::new(rng.random_range(0.0..size), rng.random_range(0.0..size)))
        .collect()
}

/// Uniform points in the disk of radius `radius` centered at `center`.
pub fn random_disk_points(n: usize, center: Point2, radius: f64, seed: u64) -> Vec<Point2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let r = radius * rng.random::<f64>().sqrt();
            let theta = rng.random_range(0.0..2.0 * PI);
            Point2::new(center.x + r * theta.cos(), center.y + r * theta.sin())
        })
        .collect()
}

/// Tight gaussian-ish clusters around a few random centers.
pub fn clustered_points(n: usize, clusters: usize, spread: f64, seed: u64) -> Vec<Point2> {
    let mut rng = StdRng::seed_from_u64(seed);
    let centers: Vec<Point2> = (0..clusters.max(1))
        .map(|_| Point2::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect();

    (0..n)
        .map(|i| {
            let c = centers[i % centers.len()];
            // Sum of uniforms is close enough to a normal for test data.
            let dx: f64 = (0..4).map(|_| rng.random_range(-1.0..1.0)).sum::<f64>();
            let dy: f64 = (0..4).map(|_| rng.random_range(-1.0..1.0)).sum::<f64>();
            Point2::new(c.x + spread * dx, c.y + spread * dy)
        })
        .collect()
}

/// Regular `side x side` integer grid, row by row.
pub fn grid_points(side: usize) -> Vec<Point2> {
    (0..side)
        .flat_map(|j| (0..side).map(move |i| Point2::new(i as f64, j as f64)))
        .collect()
}

/// Grid with every point displaced by up to `jitter` in each axis.
pub fn jittered_grid_points(side: usize, jitter: f64, seed: u64) -> Vec<Point2> {
    let mut rng = StdRng::seed_from_u64(seed);
    grid_points(side)
        .into_iter()
        .map(|p| {
            Point2::new(
                p.x + rng.random_range(-jitter..jitter),
                p.y + rng.random_range(-jitter..jitter),
            )
        })
        .collect()
}
