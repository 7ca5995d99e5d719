// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::color::Color;
use crate::luminance::{color_contrast, luminance};
use crate::ratio::ContrastRatio;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// How far a round's measured contrast may drift from its target.
pub const CONTRAST_TOLERANCE: f64 = 1e-6;

/// One quiz round: a color pair and the contrast ratio between them.
///
/// The measured contrast of the pair always matches `contrast`. Rounds are replaced rather
/// than edited, so the fields are read-only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UncheckedQuizData")]
pub struct QuizData {
	contrast: ContrastRatio,
	background_color: Color,
	text_color: Color,
}

impl QuizData {
	pub(crate) fn new(contrast: ContrastRatio, background_color: Color, text_color: Color) -> Self {
		Self {
			contrast,
			background_color,
			text_color,
		}
	}

	pub fn contrast(&self) -> ContrastRatio {
		self.contrast
	}

	pub fn background_color(&self) -> Color {
		self.background_color
	}

	pub fn text_color(&self) -> Color {
		self.text_color
	}

	/// Computes the contrast of the pair from the colors themselves.
	pub fn measured_contrast(&self) -> f64 {
		color_contrast(&self.background_color, &self.text_color)
	}

	pub fn background_is_lighter(&self) -> bool {
		luminance(&self.background_color) > luminance(&self.text_color)
	}

	pub fn check_answer(&self, guess: ContrastRatio) -> AnswerOutcome {
		AnswerOutcome {
			guess,
			answer: self.contrast,
		}
	}
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UncheckedQuizData {
	contrast: ContrastRatio,
	background_color: Color,
	text_color: Color,
}

impl TryFrom<UncheckedQuizData> for QuizData {
	type Error = QuizDataError;

	fn try_from(value: UncheckedQuizData) -> Result<Self, Self::Error> {
		let quiz_data = Self::new(value.contrast, value.background_color, value.text_color);
		let measured = quiz_data.measured_contrast();
		if (measured - quiz_data.contrast.value()).abs() > CONTRAST_TOLERANCE {
			return Err(QuizDataError::ContrastMismatch {
				expected: quiz_data.contrast,
				measured,
			});
		}
		Ok(quiz_data)
	}
}

#[derive(Debug)]
pub enum QuizDataError {
	ContrastMismatch { expected: ContrastRatio, measured: f64 },
}

impl fmt::Display for QuizDataError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ContrastMismatch { expected, measured } => write!(
				f,
				"colors have a contrast of {:.4}:1 but the round claims {}",
				measured, expected
			),
		}
	}
}

impl Error for QuizDataError {}

/// The result of scoring a guess against a round.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnswerOutcome {
	pub guess: ContrastRatio,
	pub answer: ContrastRatio,
}

impl AnswerOutcome {
	pub fn is_correct(&self) -> bool {
		self.guess == self.answer
	}
}
