use std::{collections::HashMap, ops::Range, thread};
use tracing::{debug, warn};

use super::{buffer::*, color::*, error::*, matcher::*, settings::*};

/// What a matched pixel turns into.
#[derive(Debug, Clone, Copy)]
enum Replacement<'a> {
    Swap(&'a [Color]),
    Offset(Offset),
}

/// Recolors `original` against the `reference` palette strip.
///
/// Fully transparent pixels come out as [`Color::CLEAR`], pixels without a
/// match in row 0 of `reference` pass through untouched, and every other
/// pixel is replaced according to `settings` (see [`RemapSettings`]).
/// `swap` is only consulted when `settings.use_swapper` is set.
///
/// All validation happens before any pixel is processed.
pub fn remap_image(
    original: &Image,
    reference: &Image,
    swap: Option<&Image>,
    settings: &RemapSettings,
) -> Result<Image, RemapError> {
    let replacement = validate(original, reference, swap, settings)?;
    let palette = reference.row(0);

    debug!(
        width = original.width,
        height = original.height,
        palette_len = palette.len(),
        use_swapper = settings.use_swapper,
        tolerance = settings.tolerance,
        "remapping image"
    );

    let threads = settings.threads.clamp(1, original.height);
    let (image, matched) = if threads == 1 {
        remap_rows(original, 0..original.height, palette, replacement, settings.tolerance)
    } else {
        let band = original.height.div_ceil(threads);

        thread::scope(|s| {
            let handles: Vec<_> = (0..original.height)
                .step_by(band)
                .map(|start| {
                    let rows = start..usize::min(start + band, original.height);
                    s.spawn(move || remap_rows(original, rows, palette, replacement, settings.tolerance))
                })
                .collect();

            let mut matched = 0;
            let bands: Vec<Image> = handles
                .into_iter()
                .map(|h| {
                    let (band, n) = h.join().unwrap();
                    matched += n;
                    band
                })
                .collect();

            (Image::stack(bands), matched)
        })
    };

    debug!(matched, total = image.pixels.len(), "remap finished");

    Ok(image)
}

fn validate<'a>(
    original: &Image,
    reference: &Image,
    swap: Option<&'a Image>,
    settings: &RemapSettings,
) -> Result<Replacement<'a>, RemapError> {
    if !settings.tolerance.is_finite() || settings.tolerance < 0. {
        return Err(RemapError::InvalidInput(format!(
            "tolerance must be a non-negative number, got {}",
            settings.tolerance
        )));
    }

    if original.is_empty() {
        return Err(RemapError::InvalidInput("original image is empty".into()));
    }

    if reference.height != 1 {
        warn!(height = reference.height, "reference strip is not one row tall, only row 0 is used");
    }

    if !settings.use_swapper {
        return Ok(Replacement::Offset(settings.offset));
    }

    let swap = swap.ok_or_else(|| RemapError::InvalidInput("swap strip is required in swap mode".into()))?;

    // compare the scanned rows so a zero-height strip cannot slip through
    let (palette_len, swap_len) = (reference.row(0).len(), swap.row(0).len());
    if swap.width != reference.width || swap_len != palette_len {
        return Err(RemapError::DimensionMismatch { reference: palette_len, swap: swap_len });
    }

    if swap.height != 1 {
        warn!(height = swap.height, "swap strip is not one row tall, only row 0 is used");
    }

    Ok(Replacement::Swap(swap.row(0)))
}

/// Most source colors a worker remembers the outcome for.
const MEMO_LIMIT: usize = 4096;

/// Palettes this short are scanned directly, hashing would cost more.
const MEMO_MIN_PALETTE: usize = 8;

/// Bounded cache of per-color outcomes, keyed on the exact channel bits.
struct Memo {
    map: HashMap<[u32; 4], Option<Color>>,
    enabled: bool,
}

impl Memo {
    fn for_palette(palette: &[Color]) -> Self {
        Memo { map: HashMap::new(), enabled: palette.len() >= MEMO_MIN_PALETTE }
    }

    fn get_or_insert_with(&mut self, color: Color, f: impl FnOnce() -> Option<Color>) -> Option<Color> {
        if !self.enabled {
            return f();
        }

        let key = color.bits();
        if let Some(&known) = self.map.get(&key) {
            return known;
        }

        let outcome = f();
        if self.map.len() < MEMO_LIMIT {
            self.map.insert(key, outcome);
        }
        outcome
    }
}

fn remap_rows(
    original: &Image,
    rows: Range<usize>,
    palette: &[Color],
    replacement: Replacement<'_>,
    tolerance: f32,
) -> (Image, usize) {
    let mut memo = Memo::for_palette(palette);
    let mut matched = 0;

    let image = Image::from_func(original.width, rows.len(), |x, y| {
        let color = original.get(x, rows.start + y);
        if color.is_transparent() {
            return Color::CLEAR;
        }

        let swapped = memo.get_or_insert_with(color, || replace(color, palette, replacement, tolerance));

        match swapped {
            Some(c) => {
                matched += 1;
                c
            }
            None => color,
        }
    });

    (image, matched)
}

fn replace(color: Color, palette: &[Color], replacement: Replacement<'_>, tolerance: f32) -> Option<Color> {
    let i = find_in_row(color, palette, tolerance)?;
    Some(match replacement {
        Replacement::Swap(swap) => swap[i],
        Replacement::Offset(offset) => offset.apply(palette[i]),
    })
}
