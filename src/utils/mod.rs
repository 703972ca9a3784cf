//! Internal utility functions for regiongrow.
//!
//! This module contains small grid helpers shared by the region growing
//! implementation.

/// Returns true when (x, y) addresses a pixel of a `width` x `height`
/// grid.
#[inline]
#[must_use]
pub fn in_bounds(x: u32, y: u32, width: u32, height: u32) -> bool {
    x < width && y < height
}

/// Enumerates the in-bounds 4-connected neighbors of a pixel.
///
/// Probe order is left, right, up, down. Insertion order decides which
/// frontier candidate wins an intensity tie, so the order is observable
/// and must stay fixed. Both axes use a strict upper bound check.
pub fn neighbors4(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> impl Iterator<Item = (u32, u32)> {
    const OFFSETS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

    let (x, y) = (i64::from(x), i64::from(y));
    let (width, height) = (i64::from(width), i64::from(height));

    OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let (nx, ny) = (x + dx, y + dy);
        if nx >= 0 && ny >= 0 && nx < width && ny < height {
            Some((nx as u32, ny as u32))
        } else {
            None
        }
    })
}
