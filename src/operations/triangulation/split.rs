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

use crate::error::TriangulationResult;
use crate::operations::triangulation::mesh::{Mesh, NO_NEIGHBOR, Triangle};

/// Splits triangle `t = (v1, v2, v3)` into three triangles around vertex `p`.
///
/// Postcondition: slot `t` is reused for `(p, v1, v2)` and two slots are
/// appended, `(p, v2, v3)` then `(p, v3, v1)`; their indices are returned in
/// that order. All three have `p` in slot 0, so edge 1 is the edge inherited
/// from `t`. Outer neighbours are re-pointed at their new triangle, and every
/// new triangle with an outer neighbour is pushed on `stack`.
pub(crate) fn split_triangle(
    mesh: &mut Mesh,
    t: usize,
    p: usize,
    stack: &mut Vec<usize>,
) -> TriangulationResult<(usize, usize)> {
    let Triangle {
        v: [v1, v2, v3],
        n: [a, b, c],
    } = *mesh.triangle(t);

    let t2 = mesh.push(Triangle::new([p, v2, v3], [t, b, NO_NEIGHBOR]));
    let t3 = mesh.push(Triangle::new([p, v3, v1], [t2, c, t]));
    mesh.triangle_mut(t2).n[2] = t3;
    *mesh.triangle_mut(t) = Triangle::new([p, v1, v2], [t3, a, t2]);

    if a != NO_NEIGHBOR {
        stack.push(t);
    }
    if b != NO_NEIGHBOR {
        mesh.replace_neighbor(b, t, t2)?;
        stack.push(t2);
    }
    if c != NO_NEIGHBOR {
        mesh.replace_neighbor(c, t, t3)?;
        stack.push(t3);
    }
    Ok((t2, t3))
}
