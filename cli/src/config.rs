// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::args::GenerateArgs;
use contrast_quiz_shared::{QuizGenerator, MAX_ATTEMPTS};
use knuffel::Decode;
use miette::{miette, IntoDiagnostic, Result};
use std::fs;
use std::num::NonZeroU32;
use std::path::Path;

/// How many rounds `generate` prints when neither the command line nor the configuration file says.
pub const DEFAULT_ROUNDS: u32 = 1;

#[derive(Debug, Decode, Default)]
pub struct ConfigDocument {
	#[knuffel(child, unwrap(argument))]
	pub max_attempts: Option<u32>,
	#[knuffel(child, unwrap(argument))]
	pub rounds: Option<u32>,
	#[knuffel(child, unwrap(argument))]
	pub seed: Option<u64>,
}

impl ConfigDocument {
	pub fn generator(&self) -> Result<QuizGenerator> {
		let max_attempts = self.max_attempts.unwrap_or(MAX_ATTEMPTS);
		let max_attempts =
			NonZeroU32::new(max_attempts).ok_or_else(|| miette!("max-attempts must be greater than zero"))?;
		Ok(QuizGenerator::with_max_attempts(max_attempts))
	}

	/// Merges the round count and seed, preferring values given on the command line.
	pub fn resolve(&self, generate_args: &GenerateArgs) -> (u32, Option<u64>) {
		let rounds = generate_args.rounds.or(self.rounds).unwrap_or(DEFAULT_ROUNDS);
		let seed = generate_args.seed.or(self.seed);
		(rounds, seed)
	}
}

/// Reads the configuration file. A missing file means every setting takes its default.
pub fn parse_config(path: &Path) -> Result<ConfigDocument> {
	if !path.exists() {
		log::info!("No configuration file at {}; using defaults", path.display());
		return Ok(ConfigDocument::default());
	}
	let config_file_contents = fs::read_to_string(path).into_diagnostic()?;
	parse_config_str(&path.to_string_lossy(), &config_file_contents)
}

fn parse_config_str(file_name: &str, contents: &str) -> Result<ConfigDocument> {
	let config = knuffel::parse(file_name, contents).into_diagnostic()?;
	Ok(config)
}
