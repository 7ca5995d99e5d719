// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::generator::{GenerationFailure, QuizGenerator};
use crate::quiz::{AnswerOutcome, QuizData};
use crate::random::RandomSource;
use crate::ratio::ContrastRatio;

/// The live state of a quiz: the round being shown and what's needed to make the next one.
///
/// Only the current round is kept. Callers sharing a session between threads need to put it
/// behind a lock, since advancing replaces the round.
#[derive(Debug)]
pub struct QuizSession<R> {
	rng: R,
	generator: QuizGenerator,
	current: QuizData,
	round: u64,
}

impl<R: RandomSource> QuizSession<R> {
	pub fn new(rng: R) -> Result<Self, GenerationFailure> {
		Self::with_generator(rng, QuizGenerator::default())
	}

	pub fn with_generator(mut rng: R, generator: QuizGenerator) -> Result<Self, GenerationFailure> {
		let current = generator.generate(&mut rng)?;
		Ok(Self {
			rng,
			generator,
			current,
			round: 1,
		})
	}

	pub fn current(&self) -> &QuizData {
		&self.current
	}

	/// The 1-based number of the current round.
	pub fn round(&self) -> u64 {
		self.round
	}

	/// Replaces the current round with a new one.
	///
	/// If generation fails, the current round is kept.
	pub fn advance(&mut self) -> Result<&QuizData, GenerationFailure> {
		self.current = self.generator.generate(&mut self.rng)?;
		self.round += 1;
		Ok(&self.current)
	}

	/// Scores a guess for the current round without moving on.
	pub fn answer(&self, guess: ContrastRatio) -> AnswerOutcome {
		self.current.check_answer(guess)
	}
}
