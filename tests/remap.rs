use palswap::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

const RED: Color = Color::rgb(1., 0., 0.);
const GREEN: Color = Color::rgb(0., 1., 0.);
const BLUE: Color = Color::rgb(0., 0., 1.);

fn random_color(rng: &mut impl Rng) -> Color {
    // every fifth pixel fully transparent
    let alpha = if rng.random_ratio(1, 5) { 0. } else { rng.random() };
    Color::rgba(rng.random(), rng.random(), rng.random(), alpha)
}

/// An image drawing most of its pixels from `palette`, the rest at random.
fn random_image(rng: &mut impl Rng, width: usize, height: usize, palette: &Image) -> Image {
    Image::from_func(width, height, |_, _| {
        if !palette.is_empty() && rng.random_bool(0.6) {
            palette.get(rng.random_range(0..palette.width()), 0)
        } else {
            random_color(rng)
        }
    })
}

fn random_strip(rng: &mut impl Rng, len: usize) -> Image {
    Image::strip((0..len).map(|_| Color::rgb(rng.random(), rng.random(), rng.random())))
}

#[test]
fn red_swaps_to_blue() {
    let reference = Image::strip([RED, GREEN, BLUE]);
    let swap = Image::strip([BLUE, RED, GREEN]);
    let original = Image::strip([RED]);

    let out = remap_image(&original, &reference, Some(&swap), &RemapSettings::swap(0.01)).unwrap();
    assert_eq!(out.get(0, 0), BLUE);
}

#[test]
fn green_offset_is_unclamped() {
    let reference = Image::strip([RED, GREEN, BLUE]);
    let original = Image::strip([Color::rgba(0., 1., 0., 1.)]);
    let settings = RemapSettings::offset(0.01, Offset::new(0., 0.1, 0.));

    let out = remap_image(&original, &reference, None, &settings).unwrap();
    assert_eq!(out.get(0, 0), Color::rgba(0., 1. + 0.1, 0., 1.));
    assert!(out.get(0, 0).green > 1.);
}

#[test]
fn empty_reference_passes_everything_through() {
    let mut rng = StdRng::seed_from_u64(7);
    let reference = Image::new(0, 1);
    let original = random_image(&mut rng, 9, 6, &reference);

    for settings in [RemapSettings::swap(1.), RemapSettings::offset(1., Offset::new(0.5, 0.5, 0.5))] {
        let out = remap_image(&original, &reference, Some(&Image::new(0, 1)), &settings).unwrap();
        for (&src, &dst) in original.pixels().iter().zip(out.pixels()) {
            if src.is_transparent() {
                assert_eq!(dst, Color::CLEAR);
            } else {
                assert_eq!(dst, src);
            }
        }
    }
}

#[test]
fn transparent_pixels_always_cleared() {
    let mut rng = StdRng::seed_from_u64(11);
    let reference = random_strip(&mut rng, 8);
    let swap = random_strip(&mut rng, 8);
    let original = random_image(&mut rng, 16, 16, &reference);

    for tolerance in [0., 0.001, 0.5, 100.] {
        for settings in [RemapSettings::swap(tolerance), RemapSettings::offset(tolerance, Offset::new(0.2, 0., -0.2))] {
            let out = remap_image(&original, &reference, Some(&swap), &settings).unwrap();
            for (src, dst) in original.pixels().iter().zip(out.pixels()) {
                if src.is_transparent() {
                    assert_eq!(*dst, Color::CLEAR);
                }
            }
        }
    }
}

#[test]
fn zero_tolerance_is_identity_on_visible_pixels() {
    let mut rng = StdRng::seed_from_u64(3);
    let reference = random_strip(&mut rng, 5);
    let swap = random_strip(&mut rng, 5);
    let original = random_image(&mut rng, 12, 10, &reference);

    let offset = Offset::new(0.3, -0.3, 0.1);
    for settings in [RemapSettings::swap(0.), RemapSettings::offset(0., offset)] {
        let out = remap_image(&original, &reference, Some(&swap), &settings).unwrap();
        for (src, dst) in original.pixels().iter().zip(out.pixels()) {
            let expected = if src.is_transparent() { Color::CLEAR } else { *src };
            assert_eq!(*dst, expected);
        }
    }
}

#[test]
fn every_pixel_follows_first_match() {
    let mut rng = StdRng::seed_from_u64(42);
    let reference = random_strip(&mut rng, 12);
    let swap = random_strip(&mut rng, 12);
    let offset = Offset::new(-0.3, 0.1, 0.4);
    let original = random_image(&mut rng, 20, 15, &reference);
    let tolerance = 0.05;

    let swapped = remap_image(&original, &reference, Some(&swap), &RemapSettings::swap(tolerance)).unwrap();
    let shifted = remap_image(&original, &reference, None, &RemapSettings::offset(tolerance, offset)).unwrap();

    for y in 0..original.height() {
        for x in 0..original.width() {
            let src = original.get(x, y);
            if src.is_transparent() {
                continue;
            }
            match find_match(src, &reference, tolerance) {
                Some(i) => {
                    assert_eq!(swapped.get(x, y), swap.get(i, 0));

                    let entry = reference.get(i, 0);
                    let out = shifted.get(x, y);
                    assert_eq!(out, offset.apply(entry));
                    assert_eq!(out.alpha, entry.alpha);
                }
                None => {
                    assert_eq!(swapped.get(x, y), src);
                    assert_eq!(shifted.get(x, y), src);
                }
            }
        }
    }
}

#[test]
fn remap_is_deterministic_across_calls_and_threads() {
    let mut rng = StdRng::seed_from_u64(99);
    let reference = random_strip(&mut rng, 6);
    let swap = random_strip(&mut rng, 6);
    let original = random_image(&mut rng, 33, 21, &reference);

    let settings = RemapSettings::swap(0.02);
    let first = remap_image(&original, &reference, Some(&swap), &settings).unwrap();
    let second = remap_image(&original, &reference, Some(&swap), &settings).unwrap();
    let threaded = remap_image(&original, &reference, Some(&swap), &settings.with_threads(4)).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, threaded);
    assert_eq!((first.width(), first.height()), (33, 21));
}

#[test]
fn inputs_are_left_untouched() {
    let mut rng = StdRng::seed_from_u64(5);
    let reference = random_strip(&mut rng, 4);
    let swap = random_strip(&mut rng, 4);
    let original = random_image(&mut rng, 8, 8, &reference);
    let copies = (original.clone(), reference.clone(), swap.clone());

    remap_image(&original, &reference, Some(&swap), &RemapSettings::swap(0.01)).unwrap();
    assert_eq!((original, reference, swap), copies);
}

#[test]
fn generated_strip_round_trips_through_offset_mode() {
    let mut rng = StdRng::seed_from_u64(17);
    let reference = random_strip(&mut rng, 10);
    let offset = Offset::new(0.1, -0.2, 0.3);
    let original = random_image(&mut rng, 10, 10, &reference);

    let strip = generate_swap_strip(&reference, offset);
    for x in 0..reference.width() {
        assert_eq!(strip.get(x, 0), offset.apply(reference.get(x, 0)));
    }

    let via_strip = remap_image(&original, &reference, Some(&strip), &RemapSettings::swap(0.001)).unwrap();
    let via_offset = remap_image(&original, &reference, None, &RemapSettings::offset(0.001, offset)).unwrap();
    assert_eq!(via_strip, via_offset);
}

#[test]
fn validation_fails_before_processing() {
    let reference = Image::strip([RED, GREEN, BLUE]);
    let original = Image::strip([RED]);

    assert!(matches!(
        remap_image(&original, &reference, None, &RemapSettings::swap(0.01)),
        Err(RemapError::InvalidInput(_))
    ));
    assert_eq!(
        remap_image(&original, &reference, Some(&Image::strip([RED])), &RemapSettings::swap(0.01)),
        Err(RemapError::DimensionMismatch { reference: 3, swap: 1 })
    );
}
