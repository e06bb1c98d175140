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

//! Incremental Delaunay triangulation of planar point sets.
//!
//! Points are normalized, bin-sorted along a serpentine grid and inserted one
//! by one into a mesh seeded with a super-triangle. Each insertion walks to the
//! containing triangle, splits it and restores the Delaunay condition with
//! Lawson edge flips. Finally every triangle touching the super-triangle is
//! dropped.

mod bin_sort;
pub mod config;
pub mod delaunay;
mod extract;
mod legalize;
mod locate;
mod mesh;
pub(crate) mod normalize;
mod split;
mod super_vertex;
mod vertices;

pub use config::{InCirclePredicate, TriangulationConfig};
pub use delaunay::{triangulate, triangulate_with};

/// Counters collected during one triangulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriangulationStats {
    /// Number of input points.
    pub num_points: usize,
    /// Rows (and columns) of the insertion-order grid.
    pub grid_divisions: usize,
    /// Total edges crossed by point location.
    pub walk_steps: usize,
    /// Edge flips performed while legalizing.
    pub flips: usize,
    /// Triangles discarded for touching a super-triangle vertex.
    pub super_triangles_removed: usize,
    /// Output triangles with zero area (from duplicate input points).
    pub degenerate_triangles: usize,
}

/// Result of a triangulation run.
#[derive(Debug, Clone, Default)]
pub struct Triangulation {
    pub(crate) indices: Vec<usize>,
    pub(crate) neighbors: Vec<[Option<usize>; 3]>,
    pub(crate) stats: TriangulationStats,
}

impl Triangulation {
    /// Flat list of vertex indices, three per triangle.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Input indices of triangle `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.num_triangles()`.
    pub fn triangle(&self, i: usize) -> [usize; 3] {
        [self.indices[3 * i], self.indices[3 * i + 1], self.indices[3 * i + 2]]
    }

    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// For each triangle, the triangle across edge `i` (from corner `i` to
    /// corner `i + 1`), or `None` on the hull.
    pub fn neighbors(&self) -> &[[Option<usize>; 3]] {
        &self.neighbors
    }

    pub fn stats(&self) -> &TriangulationStats {
        &self.stats
    }
}
