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

//! Error types for triangulation.

use thiserror::Error;

/// Errors that can occur while triangulating a point set.
///
/// Input problems are reported before any mesh is built. `NotAdjacent` and
/// `LocateFailed` mean the mesh bookkeeping itself is broken; they indicate a
/// bug rather than bad input. `InconsistentPredicates` comes from the
/// floating-point predicate; `triangulate_with` retries exactly before
/// reporting it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangulationError {
    /// At least 3 points are needed to form a triangle.
    #[error("insufficient points: need at least 3, got {0}")]
    InsufficientPoints(usize),

    /// An input coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    /// Every input point is at the same location.
    #[error("degenerate input: all points coincide")]
    DegenerateBounds,

    /// All points lie exactly on one line.
    #[error("degenerate input: all points are collinear")]
    Collinear,

    /// No triangle survived although the points are not collinear. The
    /// in-circle predicate contradicted itself during insertion.
    #[error("inconsistent predicates: no triangle survived for non-collinear input")]
    InconsistentPredicates,

    /// A triangle does not list the expected neighbour. Mesh corruption.
    #[error("mesh corrupted: triangle {triangle} is not adjacent to triangle {neighbor}")]
    NotAdjacent { triangle: usize, neighbor: usize },

    /// Point location walked off the mesh or did not converge.
    #[error("point location failed for vertex {point} after {steps} steps")]
    LocateFailed { point: usize, steps: usize },
}

pub type TriangulationResult<T> = Result<T, TriangulationError>;
