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

use crate::geometry::Point2;
use crate::kernel::kernel::Kernel;
use crate::kernel::{incircle_adaptive, orient2d_adaptive};

/// Filtered kernel: doubles first, `rug::Rational` (GMP) when the floating
/// point sign cannot be trusted.
pub struct BigRationalKernel;

impl Kernel for BigRationalKernel {
    fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
        orient2d_adaptive(a, b, c)
    }

    fn in_circumcircle(v1: &Point2, v2: &Point2, v3: &Point2, p: &Point2) -> bool {
        incircle_adaptive(v1, v2, v3, p) > 0.0
    }
}
