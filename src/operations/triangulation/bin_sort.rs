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

/// Rows (and columns) of the binning grid for `n` points: `round(n^(1/4))`.
pub(crate) fn grid_divisions(num_points: usize) -> usize {
    ((num_points as f64).powf(0.25).round() as usize).max(1)
}

/// Serpentine bin number of a grid cell: even rows run left to right, odd
/// rows right to left, so consecutive bins are always spatial neighbours.
#[inline]
pub(crate) fn bin_key(row: usize, col: usize, n_div: usize) -> usize {
    if row % 2 == 0 {
        row * n_div + col
    } else {
        (row + 1) * n_div - col - 1
    }
}

/// Grid cell along one axis; a zero-extent axis collapses into cell 0.
#[inline]
fn cell(coord: f64, fact: f64, n_div: usize) -> usize {
    if !fact.is_finite() {
        return 0;
    }
    ((coord * fact) as usize).min(n_div - 1)
}

/// Insertion order of the normalized points `vertices[1..=n]`.
///
/// Points are sorted by serpentine bin; the sort is stable, so points
/// sharing a bin keep their input order. Returns the order and the grid size.
pub(crate) fn bin_order(vertices: &[Point2], extent: (f64, f64)) -> (Vec<usize>, usize) {
    let num_points = vertices.len().saturating_sub(1);
    let n_div = grid_divisions(num_points);
    // Slightly enlarged so the maximum coordinate stays inside the last cell.
    let fact_x = n_div as f64 / (extent.0 * 1.01);
    let fact_y = n_div as f64 / (extent.1 * 1.01);

    let keys: Vec<usize> = vertices
        .iter()
        .map(|v| {
            let row = cell(v.y, fact_y, n_div);
            let col = cell(v.x, fact_x, n_div);
            bin_key(row, col, n_div)
        })
        .collect();

    let mut order: Vec<usize> = (1..=num_points).collect();
    order.sort_by_key(|&k| keys[k]);
    (order, n_div)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisions_grow_with_fourth_root() {
        assert_eq!(grid_divisions(1), 1);
        assert_eq!(grid_divisions(3), 1);
        assert_eq!(grid_divisions(16), 2);
        assert_eq!(grid_divisions(10_000), 10);
    }

    #[test]
    fn serpentine_numbering() {
        // 3x3 grid: row 0 left->right, row 1 right->left, row 2 left->right.
        let keys: Vec<usize> = (0..3)
            .flat_map(|r| (0..3).map(move |c| bin_key(r, c, 3)))
            .collect();
        assert_eq!(keys, vec![0, 1, 2, 5, 4, 3, 6, 7, 8]);
    }

    #[test]
    fn orders_by_bin_then_input() {
        // 16 points -> 2x2 grid. Bins: (row0,col0)=0, (row0,col1)=1,
        // (row1,col1)=2, (row1,col0)=3.
        let mut vertices = vec![Point2::default()];
        for _ in 0..4 {
            vertices.push(Point2::new(0.1, 0.9)); // bin 3
            vertices.push(Point2::new(0.9, 0.9)); // bin 2
            vertices.push(Point2::new(0.9, 0.1)); // bin 1
            vertices.push(Point2::new(0.1, 0.1)); // bin 0
        }
        let (order, n_div) = bin_order(&vertices, (1.0, 1.0));
        assert_eq!(n_div, 2);
        assert_eq!(&order[..4], &[4, 8, 12, 16]);
        assert_eq!(&order[4..8], &[3, 7, 11, 15]);
        assert_eq!(&order[8..12], &[2, 6, 10, 14]);
        assert_eq!(&order[12..], &[1, 5, 9, 13]);
    }

    #[test]
    fn zero_height_does_not_overflow() {
        let vertices = vec![
            Point2::default(),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 0.0),
        ];
        let (order, _) = bin_order(&vertices, (1.0, 0.0));
        assert_eq!(order.len(), 3);
    }
}
