use super::buffer::*;
use super::color::*;

/// True iff the squared RGBA distance between `a` and `b` is strictly below
/// `tolerance`. A tolerance of zero therefore never matches.
pub fn colors_match(a: Color, b: Color, tolerance: f32) -> bool {
    a.distance_squared(b) < tolerance
}

/// Index of the first entry in row 0 of `strip` that matches `color`.
pub fn find_match(color: Color, strip: &Image, tolerance: f32) -> Option<usize> {
    find_in_row(color, strip.row(0), tolerance)
}

pub(crate) fn find_in_row(color: Color, row: &[Color], tolerance: f32) -> Option<usize> {
    row.iter().position(|&entry| colors_match(entry, color, tolerance))
}
