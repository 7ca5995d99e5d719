// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::color::{Color, CHANNEL_MAX};
use crate::grayscale::grayscale_color;
use crate::luminance::luminance;
use crate::quiz::QuizData;
use crate::random::RandomSource;
use crate::ratio::ContrastRatio;
use crate::solver::complementary_luminances;
use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;

/// How many random colors the default generator tries before giving up.
pub const MAX_ATTEMPTS: u32 = 10_000;

const DEFAULT_MAX_ATTEMPTS: NonZeroU32 = match NonZeroU32::new(MAX_ATTEMPTS) {
	Some(max_attempts) => max_attempts,
	None => panic!("MAX_ATTEMPTS must be non-zero"),
};

/// Every attempt at generating a round failed.
///
/// Almost every random color has a partner for every ratio, so this indicates a broken random
/// source or a logic error rather than bad luck.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GenerationFailure {
	pub contrast: ContrastRatio,
	pub attempts: u32,
}

impl fmt::Display for GenerationFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"failed to generate quiz data for a contrast of {} after {} attempts",
			self.contrast, self.attempts
		)
	}
}

impl Error for GenerationFailure {}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QuizGenerator {
	max_attempts: NonZeroU32,
}

impl Default for QuizGenerator {
	fn default() -> Self {
		Self {
			max_attempts: DEFAULT_MAX_ATTEMPTS,
		}
	}
}

impl QuizGenerator {
	pub fn with_max_attempts(max_attempts: NonZeroU32) -> Self {
		Self { max_attempts }
	}

	pub fn max_attempts(&self) -> u32 {
		self.max_attempts.get()
	}

	/// Generates a round.
	///
	/// The target ratio is chosen once per call. Each attempt then samples a fresh color and
	/// looks for a gray that forms the target ratio with it; the two colors are assigned to
	/// background and text at random.
	pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<QuizData, GenerationFailure> {
		let contrast = ContrastRatio::random(rng);

		for attempt in 1..=self.max_attempts.get() {
			let color_a = random_color(rng);
			let luminance_a = luminance(&color_a);
			let luminances_b = complementary_luminances(luminance_a, contrast);
			let Some(&luminance_b) = rng.pick(&luminances_b) else {
				continue;
			};
			let color_b = grayscale_color(luminance_b);

			let (background_color, text_color) = if rng.coin_flip() {
				(color_a, color_b)
			} else {
				(color_b, color_a)
			};

			log::debug!("Generated a {} quiz round after {} attempt(s)", contrast, attempt);
			return Ok(QuizData::new(contrast, background_color, text_color));
		}

		log::warn!(
			"No color pair with a contrast of {} was found in {} attempts",
			contrast,
			self.max_attempts
		);
		Err(GenerationFailure {
			contrast,
			attempts: self.max_attempts.get(),
		})
	}
}

/// Generates a round with the default attempt limit.
pub fn generate_quiz_data<R: RandomSource + ?Sized>(rng: &mut R) -> Result<QuizData, GenerationFailure> {
	QuizGenerator::default().generate(rng)
}

fn random_color<R: RandomSource + ?Sized>(rng: &mut R) -> Color {
	let red = CHANNEL_MAX * rng.next_unit();
	let green = CHANNEL_MAX * rng.next_unit();
	let blue = CHANNEL_MAX * rng.next_unit();
	Color::clamped(red, green, blue)
}
