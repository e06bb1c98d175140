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
use crate::kernel::Kernel;
use crate::operations::triangulation::mesh::{Mesh, NO_NEIGHBOR, next};
use crate::operations::triangulation::vertices::Vertices;

/// Walks the mesh from `start` towards vertex `p`.
///
/// Whenever `p` lies strictly right of a (counter-clockwise) edge, the walk
/// crosses that edge and rescans the new triangle from its first edge.
/// Returns the containing triangle and the number of edges crossed. Points
/// on an edge count as inside.
pub(crate) fn locate<K: Kernel>(
    mesh: &Mesh,
    vertices: &Vertices,
    p: usize,
    start: usize,
    max_steps: usize,
) -> TriangulationResult<(usize, usize)> {
    let mut t = start;
    let mut steps = 0;

    'walk: loop {
        let tri = mesh.triangle(t);
        for i in 0..3 {
            if vertices.orient::<K>(tri.v[i], tri.v[next(i)], p) < 0.0 {
                steps += 1;
                let across = tri.n[i];
                if across == NO_NEIGHBOR || steps > max_steps {
                    return Err(TriangulationError::LocateFailed { point: p, steps });
                }
                t = across;
                continue 'walk;
            }
        }
        return Ok((t, steps));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point2;
    use crate::kernel::{BigRationalKernel, F64Kernel};
    use crate::operations::triangulation::mesh::Triangle;
    use crate::operations::triangulation::split::split_triangle;

    /// Unit square split along its diagonal, plus three query points.
    ///
    /// 4 --- 3
    /// | \ 2 |
    /// | 1 \ |
    /// 1 --- 2
    fn square() -> (Mesh, Vertices) {
        let vertices = Vertices::new(vec![
            Point2::default(),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.6, 0.2),
            Point2::new(0.2, 0.6),
            Point2::new(2.0, 0.5),
        ]);
        let mut mesh = Mesh::with_super_triangle(0);
        // Overwrite the seed triangle; this mesh never touches a corner.
        *mesh.triangle_mut(1) = Triangle::new([1, 2, 4], [0, 2, 0]);
        mesh.push(Triangle::new([2, 3, 4], [0, 0, 1]));
        (mesh, vertices)
    }

    #[test]
    fn finds_start_triangle_without_walking() {
        let (mesh, vertices) = square();
        assert_eq!(locate::<F64Kernel>(&mesh, &vertices, 5, 1, 8), Ok((1, 0)));
    }

    #[test]
    fn crosses_the_diagonal() {
        let (mesh, vertices) = square();
        assert_eq!(locate::<F64Kernel>(&mesh, &vertices, 6, 2, 8), Ok((1, 1)));
        assert_eq!(locate::<BigRationalKernel>(&mesh, &vertices, 6, 2, 8), Ok((1, 1)));
    }

    #[test]
    fn walking_off_the_mesh_fails() {
        let (mesh, vertices) = square();
        assert_eq!(
            locate::<F64Kernel>(&mesh, &vertices, 7, 1, 8),
            Err(TriangulationError::LocateFailed { point: 7, steps: 2 })
        );
    }

    #[test]
    fn step_bound_is_enforced() {
        let (mesh, vertices) = square();
        assert!(locate::<F64Kernel>(&mesh, &vertices, 6, 2, 0).is_err());
    }

    #[test]
    fn walks_across_corner_triangles() {
        // Fan of three triangles around point 1, built from the corners 3, 4, 5.
        let vertices = Vertices::new(vec![
            Point2::default(),
            Point2::new(0.5, 0.5),
            Point2::new(0.9, 0.1),
        ]);
        let mut mesh = Mesh::with_super_triangle(2);
        split_triangle(&mut mesh, 1, 1, &mut Vec::new()).unwrap();

        let mut found = Vec::new();
        for start in 1..=3 {
            let (t, _) = locate::<F64Kernel>(&mesh, &vertices, 2, start, 8).unwrap();
            let tri = mesh.triangle(t);
            for i in 0..3 {
                assert!(vertices.orient::<F64Kernel>(tri.v[i], tri.v[next(i)], 2) >= 0.0);
            }
            found.push(t);
        }
        assert!(found.windows(2).all(|w| w[0] == w[1]));
    }
}
