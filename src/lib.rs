//! Palette swapping for bitmap images.
//!
//! Every pixel of an image is looked up in a one-row *reference* palette
//! strip. A pixel that matches an entry (within a squared-distance tolerance)
//! is replaced either by the entry at the same index of a *swap* strip, or by
//! the reference entry shifted by a fixed RGB [`Offset`].

mod color;
pub use color::*;

mod buffer;
pub use buffer::*;

mod error;
pub use error::*;

mod matcher;
pub use matcher::{colors_match, find_match};

mod remap;
pub use remap::*;

mod strip;
pub use strip::*;

mod settings;
pub use settings::*;

pub mod file;
pub use file::{load_image, save_image};
