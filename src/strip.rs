use tracing::debug;

use super::{buffer::*, color::*};

/// Builds a one-row swap strip by shifting every entry in row 0 of
/// `reference` by `offset`. Alpha is copied, and nothing is clamped.
///
/// The strip is as wide as row 0 actually is, so a reference without rows
/// yields an empty strip.
pub fn generate_swap_strip(reference: &Image, offset: Offset) -> Image {
    let row = reference.row(0);
    debug!(width = row.len(), ?offset, "generating swap strip");

    Image::strip(row.iter().map(|&c| offset.apply(c)))
}
