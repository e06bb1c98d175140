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
use crate::geometry::{Aabb2, Point2};

/// Input points rescaled into the unit square.
#[derive(Debug, Clone)]
pub(crate) struct NormalizedPoints {
    /// 1-based vertex table: slot 0 is unused, slots `1..=n` hold the points.
    pub vertices: Vec<Point2>,
    /// Width and height after scaling; the larger of the two is 1.
    pub extent: (f64, f64),
    /// Bounding box of the raw input.
    pub bounds: Aabb2,
}

impl NormalizedPoints {
    pub fn len(&self) -> usize {
        self.vertices.len() - 1
    }
}

/// Maps every point through `(p - min) / max(width, height)`.
///
/// A single scale factor keeps the aspect ratio, so orientation and
/// circumcircle tests see the same shapes as in the input frame.
///
/// Differences are taken between halved coordinates and scaled by the
/// reciprocal of the half extent. Away from the ends of the `f64` range this
/// rounds exactly like the direct formula.
pub(crate) fn normalize(points: &[Point2]) -> TriangulationResult<NormalizedPoints> {
    let bounds = Aabb2::from_points(points).ok_or(TriangulationError::InsufficientPoints(0))?;
    let half = bounds.half_max_extent();
    if !(half > 0.0) || !half.is_finite() {
        return Err(TriangulationError::DegenerateBounds);
    }
    let fact = 1.0 / half;

    let mut vertices = Vec::with_capacity(points.len() + 1);
    vertices.push(Point2::default());
    vertices.extend(points.iter().map(|p| to_unit(p, &bounds, fact)));

    Ok(NormalizedPoints {
        vertices,
        extent: (bounds.half_width() * fact, bounds.half_height() * fact),
        bounds,
    })
}

/// `(p - min) / (2 * half_extent)` given `fact = 1 / half_extent`.
pub(crate) fn to_unit(p: &Point2, bounds: &Aabb2, fact: f64) -> Point2 {
    Point2::new(
        (p.x * 0.5 - bounds.min.x * 0.5) * fact,
        (p.y * 0.5 - bounds.min.y * 0.5) * fact,
    )
}
