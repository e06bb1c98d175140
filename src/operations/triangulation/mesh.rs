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

use crate::error::{TriangulationError, TriangulationResult};

/// Neighbour value meaning "no triangle across this edge".
pub(crate) const NO_NEIGHBOR: usize = 0;

/// Cyclic successor of an edge or vertex slot.
#[inline]
pub(crate) fn next(slot: usize) -> usize {
    if slot == 2 { 0 } else { slot + 1 }
}

/// A triangle record of the mesh arena.
///
/// Edge `i` runs from `v[i]` to `v[next(i)]` and `n[i]` is the triangle
/// across it. Vertices are counter-clockwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Triangle {
    pub v: [usize; 3],
    pub n: [usize; 3],
}

impl Triangle {
    pub fn new(v: [usize; 3], n: [usize; 3]) -> Self {
        Triangle { v, n }
    }

    /// True if any vertex index is above `last_real`, i.e. a super-triangle vertex.
    pub fn uses_vertex_above(&self, last_real: usize) -> bool {
        self.v.iter().any(|&v| v > last_real)
    }
}

/// Growable arena of triangles addressed by 1-based index.
///
/// Slot 0 is a placeholder so that `NO_NEIGHBOR` never names a live
/// triangle. Slots are never freed while triangulating; splits and flips
/// overwrite them in place.
#[derive(Debug, Clone)]
pub(crate) struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// A mesh holding only the super-triangle `(n + 1, n + 2, n + 3)`, with
    /// room for every triangle the insertion of `n` points creates.
    pub fn with_super_triangle(num_points: usize) -> Self {
        let mut triangles = Vec::with_capacity(2 * num_points + 2);
        triangles.push(Triangle::default());
        triangles.push(Triangle::new(
            [num_points + 1, num_points + 2, num_points + 3],
            [NO_NEIGHBOR; 3],
        ));
        Mesh { triangles }
    }

    /// Number of live triangles; also the index of the most recent one.
    #[inline]
    pub fn live(&self) -> usize {
        self.triangles.len() - 1
    }

    #[inline]
    pub fn triangle(&self, t: usize) -> &Triangle {
        &self.triangles[t]
    }

    #[inline]
    pub fn triangle_mut(&mut self, t: usize) -> &mut Triangle {
        &mut self.triangles[t]
    }

    /// Appends a triangle and returns its index.
    pub fn push(&mut self, triangle: Triangle) -> usize {
        self.triangles.push(triangle);
        self.live()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Triangle)> {
        self.triangles.iter().enumerate().skip(1)
    }

    /// Edge slot of `t` whose neighbour is `neighbor`.
    pub fn adjacent_edge(&self, t: usize, neighbor: usize) -> TriangulationResult<usize> {
        self.triangles
            .get(t)
            .filter(|_| t != NO_NEIGHBOR)
            .and_then(|tri| tri.n.iter().position(|&n| n == neighbor))
            .ok_or(TriangulationError::NotAdjacent {
                triangle: t,
                neighbor,
            })
    }

    /// In triangle `t`, re-points the edge facing `old` at `new`.
    pub fn replace_neighbor(&mut self, t: usize, old: usize, new: usize) -> TriangulationResult<()> {
        let edge = self.adjacent_edge(t, old)?;
        self.triangles[t].n[edge] = new;
        Ok(())
    }

    /// Checks that every adjacency is mirrored by the neighbour across the
    /// same (reversed) edge.
    pub fn check_adjacency(&self) -> TriangulationResult<()> {
        for (t, tri) in self.iter() {
            for i in 0..3 {
                let r = tri.n[i];
                if r == NO_NEIGHBOR {
                    continue;
                }
                let back = self.adjacent_edge(r, t)?;
                let other = self.triangle(r);
                let (a, b) = (tri.v[i], tri.v[next(i)]);
                if other.v[back] != b || other.v[next(back)] != a {
                    return Err(TriangulationError::NotAdjacent {
                        triangle: r,
                        neighbor: t,
                    });
                }
            }
        }
        Ok(())
    }
}
