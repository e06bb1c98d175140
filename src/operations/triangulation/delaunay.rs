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

use std::marker::PhantomData;

use log::{debug, trace, warn};

use crate::error::{TriangulationError, TriangulationResult};
use crate::geometry::{Point2, PointLike};
use crate::kernel::{BigRationalKernel, F64Kernel, Kernel, orient2d_adaptive};
use crate::operations::triangulation::bin_sort::bin_order;
use crate::operations::triangulation::config::{InCirclePredicate, TriangulationConfig};
use crate::operations::triangulation::extract::extract;
use crate::operations::triangulation::legalize::legalize;
use crate::operations::triangulation::locate::locate;
use crate::operations::triangulation::mesh::Mesh;
use crate::operations::triangulation::normalize::{NormalizedPoints, normalize};
use crate::operations::triangulation::split::split_triangle;
use crate::operations::triangulation::vertices::Vertices;
use crate::operations::triangulation::{Triangulation, TriangulationStats};

/// State of one incremental Delaunay run.
///
/// Owns the vertex table, the triangle arena and the legalization stack;
/// nothing outlives a single call to [`triangulate_with`]. The super-triangle
/// corners are symbolic, see [`Vertices`].
pub(crate) struct SloanTriangulator<K: Kernel> {
    vertices: Vertices,
    mesh: Mesh,
    stack: Vec<usize>,
    config: TriangulationConfig,
    stats: TriangulationStats,
    _kernel: PhantomData<K>,
}

impl<K: Kernel> SloanTriangulator<K> {
    pub fn new(normalized: NormalizedPoints, config: &TriangulationConfig) -> Self {
        let num_points = normalized.len();
        Self {
            vertices: Vertices::new(normalized.vertices),
            mesh: Mesh::with_super_triangle(num_points),
            stack: Vec::new(),
            config: config.clone(),
            stats: TriangulationStats {
                num_points,
                ..Default::default()
            },
            _kernel: PhantomData,
        }
    }

    /// Inserts vertex `p`: locate, split, legalize.
    pub fn insert(&mut self, p: usize) -> TriangulationResult<()> {
        let start = self.mesh.live();
        let limit = self.config.walk_limit(start);
        let (t, steps) = locate::<K>(&self.mesh, &self.vertices, p, start, limit)?;
        trace!("vertex {p}: located in triangle {t} after {steps} steps");

        split_triangle(&mut self.mesh, t, p, &mut self.stack)?;
        let flips = legalize::<K>(&mut self.mesh, &self.vertices, p, &mut self.stack)?;

        self.stats.walk_steps += steps;
        self.stats.flips += flips;
        Ok(())
    }

    pub fn insert_all(&mut self, order: &[usize]) -> TriangulationResult<()> {
        for &p in order {
            self.insert(p)?;
        }
        Ok(())
    }

    /// Strips the super-triangle and produces the output.
    ///
    /// An empty result is `Collinear` only when the points are exactly
    /// collinear; otherwise the predicate was inconsistent.
    pub fn finish(mut self) -> TriangulationResult<Triangulation> {
        debug_assert!(self.mesh.check_adjacency().is_ok());
        let out = extract(&mut self.mesh, self.vertices.num_points())?;
        if out.indices.is_empty() {
            return Err(if all_collinear(&self.vertices.points()[1..]) {
                TriangulationError::Collinear
            } else {
                TriangulationError::InconsistentPredicates
            });
        }
        self.stats.super_triangles_removed = out.removed;

        let degenerate = out
            .indices
            .chunks_exact(3)
            .filter(|t| self.vertices.orient::<K>(t[0] + 1, t[1] + 1, t[2] + 1) == 0.0)
            .count();
        if degenerate > 0 {
            warn!("{degenerate} zero-area triangles in output; input likely has duplicate points");
        }
        self.stats.degenerate_triangles = degenerate;

        Ok(Triangulation {
            indices: out.indices,
            neighbors: out.neighbors,
            stats: self.stats,
        })
    }
}

/// Exact check that every point lies on one line. Coincident points count.
fn all_collinear(points: &[Point2]) -> bool {
    let Some(a) = points.first() else {
        return true;
    };
    let Some(b) = points.iter().find(|p| *p != a) else {
        return true;
    };
    points.iter().all(|c| orient2d_adaptive(a, b, c) == 0.0)
}

fn run<K: Kernel>(
    normalized: NormalizedPoints,
    config: &TriangulationConfig,
) -> TriangulationResult<Triangulation> {
    let (order, grid_divisions) = bin_order(&normalized.vertices, normalized.extent);
    let mut triangulator = SloanTriangulator::<K>::new(normalized, config);
    triangulator.stats.grid_divisions = grid_divisions;
    triangulator.insert_all(&order)?;
    triangulator.finish()
}

/// Delaunay triangulation of `points` with an explicit configuration.
///
/// Input is validated before any mesh is built: fewer than 3 points,
/// non-finite coordinates, fully coincident input and exactly collinear
/// input are rejected. Output triangles reference input positions and are
/// counter-clockwise (clockwise in the raw frame when `flip_y` is set).
/// Duplicate points are not removed.
///
/// If the floating-point predicate leaves no triangle for non-collinear
/// input, the run is repeated with the exact predicate.
pub fn triangulate_with<P: PointLike>(
    points: &[P],
    config: &TriangulationConfig,
) -> TriangulationResult<Triangulation> {
    if points.len() < 3 {
        return Err(TriangulationError::InsufficientPoints(points.len()));
    }

    let mut input = Vec::with_capacity(points.len());
    for (index, p) in points.iter().enumerate() {
        let mut q = p.to_point2();
        if config.flip_y {
            q.y = -q.y;
        }
        if !q.is_finite() {
            return Err(TriangulationError::NonFiniteCoordinate { index });
        }
        input.push(q);
    }

    let normalized = normalize(&input)?;
    if all_collinear(&input) {
        return Err(TriangulationError::Collinear);
    }
    debug!(
        "triangulating {} points, bounds {:?}, predicate {:?}",
        normalized.len(),
        normalized.bounds,
        config.predicate
    );

    let triangulation = match config.predicate {
        InCirclePredicate::AngleSum => match run::<F64Kernel>(normalized, config) {
            Err(TriangulationError::InconsistentPredicates) => {
                warn!("angle-sum predicate left no triangle; retrying with exact arithmetic");
                run::<BigRationalKernel>(normalize(&input)?, config)?
            }
            result => result?,
        },
        InCirclePredicate::Exact => run::<BigRationalKernel>(normalized, config)?,
    };

    let stats = triangulation.stats();
    debug!(
        "produced {} triangles: {} flips, {} walk steps, {} grid divisions, {} super-triangle triangles removed",
        triangulation.num_triangles(),
        stats.flips,
        stats.walk_steps,
        stats.grid_divisions,
        stats.super_triangles_removed
    );
    Ok(triangulation)
}

/// Delaunay triangulation of `points` with the default configuration.
///
/// Returns three 0-based indices into `points` per triangle.
pub fn triangulate<P: PointLike>(points: &[P]) -> TriangulationResult<Vec<usize>> {
    triangulate_with(points, &TriangulationConfig::default()).map(Triangulation::into_indices)
}
