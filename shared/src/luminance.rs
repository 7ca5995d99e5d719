// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! WCAG 2.x relative luminance and contrast ratio.

use crate::color::{Color, CHANNEL_MAX};

/// Normalized channel values at or below this are in the linear part of the sRGB curve.
pub const LINEAR_THRESHOLD: f64 = 0.03928;
pub(crate) const LINEAR_SLOPE: f64 = 12.92;
pub(crate) const GAMMA: f64 = 2.4;
pub(crate) const GAMMA_OFFSET: f64 = 0.055;
pub(crate) const GAMMA_SCALE: f64 = 1.055;

const RED_WEIGHT: f64 = 0.2126;
const GREEN_WEIGHT: f64 = 0.7152;
const BLUE_WEIGHT: f64 = 0.0722;

/// Added to both luminances before dividing, accounting for ambient flare.
pub const FLARE: f64 = 0.05;

/// Converts a normalized sRGB channel to linear light.
pub(crate) fn channel_to_linear(channel: f64) -> f64 {
	if channel <= LINEAR_THRESHOLD {
		channel / LINEAR_SLOPE
	} else {
		((channel + GAMMA_OFFSET) / GAMMA_SCALE).powf(GAMMA)
	}
}

/// Gets the relative luminance of a color, from 0 for black to 1 for white.
pub fn luminance(color: &Color) -> f64 {
	let [red, green, blue] = color.channels().map(|channel| channel_to_linear(channel / CHANNEL_MAX));
	RED_WEIGHT * red + GREEN_WEIGHT * green + BLUE_WEIGHT * blue
}

/// Gets the contrast ratio between two luminances. Argument order doesn't matter.
pub fn contrast_ratio(luminance_a: f64, luminance_b: f64) -> f64 {
	let (lighter, darker) = if luminance_a >= luminance_b {
		(luminance_a, luminance_b)
	} else {
		(luminance_b, luminance_a)
	};
	(lighter + FLARE) / (darker + FLARE)
}

pub fn color_contrast(color_a: &Color, color_b: &Color) -> f64 {
	contrast_ratio(luminance(color_a), luminance(color_b))
}
