//! Fixed-geometry character segmentation
//!
//! The captcha family handled here always renders 5 characters at the
//! same pixel positions inside a decorative frame. Segmentation is
//! therefore pure geometry, not learned: crop the character band,
//! threshold it into ink/background, and slice it into 5 equal-width
//! slot windows.

use capgrid_core::{IntensityGrid, MORPH_HEIGHT, MORPH_WIDTH, Morphology};

/// First row of the character band (frame rows above are discarded).
pub const BAND_TOP: u32 = 11;

/// Height of the character band; equal to the mask height.
pub const BAND_HEIGHT: u32 = MORPH_HEIGHT as u32;

/// First column of the character band.
pub const BAND_LEFT: u32 = 5;

/// Width of the character band.
pub const BAND_WIDTH: u32 = 45;

/// Number of character slots per captcha.
pub const SLOT_COUNT: usize = 5;

/// Horizontal distance between slot origins: 8 ink columns plus a
/// 1-column gap.
pub const SLOT_STRIDE: u32 = MORPH_WIDTH as u32 + 1;

/// Intensities below this are ink; the background texture never drops
/// below it.
pub const INK_THRESHOLD: u8 = 100;

/// Whether an intensity value is foreground ink.
#[inline]
pub fn is_ink(value: u8) -> bool {
    value < INK_THRESHOLD
}

/// Extract up to [`SLOT_COUNT`] character masks from a decoded grid.
///
/// Slots are produced in left-to-right order. A grid too small for the
/// fixed layout yields fewer masks rather than an error; callers treat a
/// short result as degraded recognition.
pub fn segment(grid: &IntensityGrid) -> Vec<Morphology> {
    let mut morphs = Vec::with_capacity(SLOT_COUNT);

    if grid.height() < BAND_TOP + BAND_HEIGHT {
        return morphs;
    }

    for slot in 0..SLOT_COUNT {
        let left = BAND_LEFT + slot as u32 * SLOT_STRIDE;
        if left + MORPH_WIDTH as u32 > grid.width() {
            break;
        }
        morphs.push(Morphology::from_fn(|row, col| {
            let value = grid
                .get(left + col as u32, BAND_TOP + row as u32)
                .unwrap_or(u8::MAX);
            is_ink(value)
        }));
    }

    morphs
}
