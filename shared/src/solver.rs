// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::luminance::FLARE;
use crate::ratio::ContrastRatio;

/// Gets the luminances that would form the target contrast ratio with a known luminance.
///
/// The known luminance may be the lighter or the darker of the pair, so there are two
/// candidates: the darker one comes first, then the lighter one. Candidates outside of [0, 1]
/// can't be displayed and are left out, so the result may be empty.
pub fn complementary_luminances(known_luminance: f64, target: ContrastRatio) -> Vec<f64> {
	let ratio = target.value();
	let known_plus_flare = known_luminance + FLARE;

	let darker = known_plus_flare / ratio - FLARE;
	let lighter = known_plus_flare * ratio - FLARE;

	[darker, lighter]
		.into_iter()
		.filter(|luminance| (0.0..=1.0).contains(luminance))
		.collect()
}
