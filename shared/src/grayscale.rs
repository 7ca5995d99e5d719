// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::color::{Color, CHANNEL_MAX};
use crate::luminance::{GAMMA, GAMMA_OFFSET, GAMMA_SCALE, LINEAR_SLOPE, LINEAR_THRESHOLD};

/// The linear light value at the sRGB curve's breakpoint.
const LUMINANCE_THRESHOLD: f64 = LINEAR_THRESHOLD / LINEAR_SLOPE;

/// Gets the gray with the given relative luminance.
///
/// For a gray all three linear channels are equal, so the channel weights sum to 1 and the
/// luminance is the linear channel value; inverting the sRGB curve gives the channel.
/// Luminance outside of [0, 1] is clamped first, and NaN is treated as 0.
pub fn grayscale_color(luminance: f64) -> Color {
	let luminance = luminance.max(0.0).min(1.0);
	let gray = if luminance <= LUMINANCE_THRESHOLD {
		luminance * LINEAR_SLOPE
	} else {
		luminance.powf(1.0 / GAMMA) * GAMMA_SCALE - GAMMA_OFFSET
	};
	Color::gray(gray * CHANNEL_MAX)
}
