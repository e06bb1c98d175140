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
use crate::operations::triangulation::mesh::{Mesh, NO_NEIGHBOR};

/// Final mesh with the super-triangle stripped, 0-based.
#[derive(Debug, Clone, Default)]
pub(crate) struct Extracted {
    /// Three indices per triangle into the input points.
    pub indices: Vec<usize>,
    /// Output triangle across each edge, `None` on the convex hull.
    pub neighbors: Vec<[Option<usize>; 3]>,
    /// Triangles dropped for touching a super-triangle vertex.
    pub removed: usize,
}

/// Removes every triangle that uses a vertex above `num_points` and
/// compacts the rest.
///
/// Links from kept triangles into removed ones are cleared first, so those
/// edges become hull edges. Kept triangles are renumbered in mesh order.
pub(crate) fn extract(mesh: &mut Mesh, num_points: usize) -> TriangulationResult<Extracted> {
    let doomed: Vec<usize> = mesh
        .iter()
        .filter(|(_, tri)| tri.uses_vertex_above(num_points))
        .map(|(t, _)| t)
        .collect();

    for &t in &doomed {
        for i in 0..3 {
            let across = mesh.triangle(t).n[i];
            if across != NO_NEIGHBOR {
                mesh.replace_neighbor(across, t, NO_NEIGHBOR)?;
                mesh.triangle_mut(t).n[i] = NO_NEIGHBOR;
            }
        }
    }

    let mut remap = vec![None; mesh.live() + 1];
    let mut kept = 0;
    for (t, tri) in mesh.iter() {
        if !tri.uses_vertex_above(num_points) {
            remap[t] = Some(kept);
            kept += 1;
        }
    }

    let mut out = Extracted {
        indices: Vec::with_capacity(kept * 3),
        neighbors: Vec::with_capacity(kept),
        removed: doomed.len(),
    };
    for (t, tri) in mesh.iter() {
        if remap[t].is_none() {
            continue;
        }
        let mut neighbors = [None; 3];
        for i in 0..3 {
            let across = tri.n[i];
            if across == NO_NEIGHBOR {
                continue;
            }
            neighbors[i] = Some(remap[across].ok_or(TriangulationError::NotAdjacent {
                triangle: t,
                neighbor: across,
            })?);
        }
        out.indices.extend(tri.v.iter().map(|&v| v - 1));
        out.neighbors.push(neighbors);
    }
    Ok(out)
}
