// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Round generation for a color contrast quiz.
//!
//! Each round is a background/text color pair whose WCAG contrast ratio is exactly one of
//! the enumerated [`ContrastRatio`] values. Players guess the ratio; the [`QuizData`] for the
//! round is the ground truth for scoring.

pub mod color;
pub mod generator;
pub mod grayscale;
pub mod luminance;
pub mod quiz;
pub mod random;
pub mod ratio;
pub mod session;
pub mod solver;

pub use color::{Color, ColorError};
pub use generator::{generate_quiz_data, GenerationFailure, QuizGenerator, MAX_ATTEMPTS};
pub use grayscale::grayscale_color;
pub use luminance::{color_contrast, contrast_ratio, luminance};
pub use quiz::{AnswerOutcome, QuizData, QuizDataError};
pub use random::RandomSource;
pub use ratio::{ContrastRatio, PassLevel, RatioError, TextSize};
pub use session::QuizSession;
pub use solver::complementary_luminances;
