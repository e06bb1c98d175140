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

//! Planar Delaunay triangulation.
//!
//! Implements Sloan's incremental algorithm: points are rescaled to the unit
//! square, ordered along a serpentine bin grid for locality, inserted into a
//! mesh seeded with a super-triangle and legalized with edge flips.
//!
//! # Example
//!
//! ```
//! use sloan_delaunay::triangulate;
//!
//! let points = [(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)];
//! let indices = triangulate(&points).expect("three corners form a triangle");
//!
//! let mut sorted = indices.clone();
//! sorted.sort_unstable();
//! assert_eq!(sorted, vec![0, 1, 2]);
//! ```
//!
//! Use [`triangulate_with`] for adjacency, run statistics and the exact
//! predicate:
//!
//! ```
//! use sloan_delaunay::{InCirclePredicate, TriangulationConfig, triangulate_with};
//!
//! let points = [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [4.0, 6.0]];
//! let config = TriangulationConfig::default().with_predicate(InCirclePredicate::Exact);
//! let tri = triangulate_with(&points, &config).unwrap();
//!
//! assert_eq!(tri.num_triangles(), 4);
//! assert_eq!(tri.neighbors().len(), 4);
//! ```

pub mod error;
pub mod geometry;
pub mod kernel;
pub mod numeric;
pub mod operations;
pub mod validation;

pub use error::{TriangulationError, TriangulationResult};
pub use geometry::{Point2, PointLike};
pub use operations::triangulation::{
    InCirclePredicate, Triangulation, TriangulationConfig, TriangulationStats, triangulate,
    triangulate_with,
};
