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

use log::trace;

use crate::error::TriangulationResult;
use crate::kernel::Kernel;
use crate::operations::triangulation::mesh::{Mesh, NO_NEIGHBOR, Triangle, next};
use crate::operations::triangulation::vertices::Vertices;

/// Restores the Delaunay condition around the newly inserted vertex `p`.
///
/// Every triangle on `stack` has `p` in slot 0 and a neighbour across edge 1.
/// If `p` falls inside the circumcircle of that neighbour, the shared edge is
/// flipped and the two triangles now facing away from `p` are queued. Returns
/// the number of flips; `stack` is empty on return.
pub(crate) fn legalize<K: Kernel>(
    mesh: &mut Mesh,
    vertices: &Vertices,
    p: usize,
    stack: &mut Vec<usize>,
) -> TriangulationResult<usize> {
    let mut flips = 0;

    while let Some(l) = stack.pop() {
        let r = mesh.triangle(l).n[1];
        let erl = mesh.adjacent_edge(r, l)?;
        let era = next(erl);
        let erb = next(era);

        let tr = *mesh.triangle(r);
        let (v1, v2, v3) = (tr.v[erl], tr.v[era], tr.v[erb]);

        if !vertices.in_circumcircle::<K>(v1, v2, v3, p) {
            continue;
        }

        // Quad (p, v2, v3, v1): swap diagonal (v1, v2) for (p, v3).
        let a = tr.n[era];
        let b = tr.n[erb];
        let c = mesh.triangle(l).n[2];

        {
            let tl = mesh.triangle_mut(l);
            tl.v[2] = v3;
            tl.n[1] = a;
            tl.n[2] = r;
        }
        *mesh.triangle_mut(r) = Triangle::new([p, v3, v1], [l, b, c]);

        if a != NO_NEIGHBOR {
            mesh.replace_neighbor(a, r, l)?;
            stack.push(l);
        }
        if b != NO_NEIGHBOR {
            stack.push(r);
        }
        if c != NO_NEIGHBOR {
            mesh.replace_neighbor(c, l, r)?;
        }

        flips += 1;
        trace!("flipped edge ({v1}, {v2}) -> ({p}, {v3}) between triangles {l} and {r}");
    }

    Ok(flips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point2;
    use crate::kernel::{BigRationalKernel, F64Kernel};

    /// Two triangles sharing the diagonal (2, 4) of a kite whose apex 1
    /// lies inside the circumcircle of (2, 3, 4).
    ///
    ///       3
    ///     /   \
    ///    4 --- 2
    ///     \ 1 /
    ///       1
    fn kite(apex_y: f64) -> (Mesh, Vertices) {
        let vertices = Vertices::new(vec![
            Point2::default(),
            Point2::new(0.0, apex_y),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 3.0),
            Point2::new(-1.0, 0.0),
        ]);
        let mut mesh = Mesh::with_super_triangle(0);
        *mesh.triangle_mut(1) = Triangle::new([1, 2, 4], [0, 2, 0]);
        mesh.push(Triangle::new([2, 3, 4], [0, 0, 1]));
        (mesh, vertices)
    }

    #[test]
    fn flips_illegal_edge() {
        let (mut mesh, vertices) = kite(-0.1);
        let mut stack = vec![1];
        let flips = legalize::<F64Kernel>(&mut mesh, &vertices, 1, &mut stack).unwrap();

        assert_eq!(flips, 1);
        assert!(stack.is_empty());
        assert_eq!(mesh.triangle(1).v, [1, 2, 3]);
        assert_eq!(mesh.triangle(2).v, [1, 3, 4]);
        assert_eq!(mesh.triangle(1).n, [0, 0, 2]);
        assert_eq!(mesh.triangle(2).n, [1, 0, 0]);
        mesh.check_adjacency().unwrap();
    }

    #[test]
    fn keeps_legal_edge() {
        let (mut mesh, vertices) = kite(-5.0);
        let before = mesh.clone();
        let mut stack = vec![1];
        let flips = legalize::<BigRationalKernel>(&mut mesh, &vertices, 1, &mut stack).unwrap();

        assert_eq!(flips, 0);
        assert_eq!(mesh.triangle(1), before.triangle(1));
        assert_eq!(mesh.triangle(2), before.triangle(2));
    }

    #[test]
    fn both_kernels_agree_on_kite() {
        for apex in [-0.1, -0.2, -0.3, -2.0, -4.0] {
            let (mut m1, vertices) = kite(apex);
            let mut m2 = m1.clone();
            let f1 = legalize::<F64Kernel>(&mut m1, &vertices, 1, &mut vec![1]).unwrap();
            let f2 = legalize::<BigRationalKernel>(&mut m2, &vertices, 1, &mut vec![1]).unwrap();
            assert_eq!(f1, f2, "apex {apex}");
        }
    }

    #[test]
    fn flat_hull_triangle_survives_next_to_a_corner() {
        // 1 and 2 span a hull edge, 3 sits just above it; 4, 5, 6 are corners.
        let vertices = Vertices::new(vec![
            Point2::default(),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1e-6),
        ]);
        // (3, 1, 2) and (2, 1, 4) share edge (1, 2); corner 4 lies below it.
        let mut mesh = Mesh::with_super_triangle(3);
        *mesh.triangle_mut(1) = Triangle::new([3, 1, 2], [0, 2, 0]);
        mesh.push(Triangle::new([2, 1, 4], [1, 0, 0]));

        let flips = legalize::<F64Kernel>(&mut mesh, &vertices, 3, &mut vec![1]).unwrap();
        assert_eq!(flips, 0);
        assert_eq!(mesh.triangle(1).v, [3, 1, 2]);
    }
}
