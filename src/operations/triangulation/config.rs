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

/// Circumcircle predicate used by the legalizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InCirclePredicate {
    /// Sign-based angle-sum swap test in double precision.
    ///
    /// Fast and adequate for typical input. Near-cocircular configurations
    /// may be classified inconsistently.
    #[default]
    AngleSum,
    /// Floating point filter with an exact `rug::Rational` fallback, used for
    /// both point location and the circumcircle test.
    Exact,
}

/// Configuration for a triangulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriangulationConfig {
    /// Which circumcircle predicate to use.
    pub predicate: InCirclePredicate,

    /// Treat input as screen coordinates (y grows downwards).
    ///
    /// The y axis is negated before triangulating, so emitted triangles are
    /// counter-clockwise on screen and clockwise in the raw input frame.
    pub flip_y: bool,

    /// Upper bound on triangles visited while locating one point.
    ///
    /// `None` derives the bound from the current triangle count. The walk
    /// always terminates on a valid mesh; hitting the bound means the mesh is
    /// corrupted and the run fails with `LocateFailed`.
    pub max_walk_steps: Option<usize>,
}

impl Default for TriangulationConfig {
    fn default() -> Self {
        Self {
            predicate: InCirclePredicate::AngleSum,
            flip_y: false,
            max_walk_steps: None,
        }
    }
}

impl TriangulationConfig {
    pub fn with_predicate(mut self, predicate: InCirclePredicate) -> Self {
        self.predicate = predicate;
        self
    }

    pub fn with_flip_y(mut self, flip_y: bool) -> Self {
        self.flip_y = flip_y;
        self
    }

    pub fn with_max_walk_steps(mut self, steps: usize) -> Self {
        self.max_walk_steps = Some(steps);
        self
    }

    /// Walk bound for a mesh currently holding `live_triangles` triangles.
    pub(crate) fn walk_limit(&self, live_triangles: usize) -> usize {
        self.max_walk_steps.unwrap_or(4 * live_triangles + 16)
    }
}
