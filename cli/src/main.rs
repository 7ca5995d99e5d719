// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::Parser;
use contrast_quiz_shared::{color_contrast, Color, QuizSession};
use miette::{IntoDiagnostic, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod args;
use args::{CliArgs, Command, GenerateArgs};

mod config;
use config::{parse_config, ConfigDocument};

mod output;
use output::{format_check, format_round};

fn main() -> Result<()> {
	let args = CliArgs::parse();

	let default_filter = if args.verbose { "debug" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

	let config = parse_config(&args.config)?;

	match args.command {
		Command::Generate(generate_args) => run_generate(&config, &generate_args),
		Command::Check { first, second } => run_check(&first, &second),
	}
}

fn run_generate(config: &ConfigDocument, generate_args: &GenerateArgs) -> Result<()> {
	let generator = config.generator()?;
	let (rounds, seed) = config.resolve(generate_args);
	let rng = match seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_entropy(),
	};

	let mut session = QuizSession::with_generator(rng, generator).into_diagnostic()?;
	for round in 1..=rounds {
		if round > 1 {
			session.advance().into_diagnostic()?;
		}
		println!("{}", format_round(session.round(), session.current(), generate_args.format)?);
	}

	Ok(())
}

fn run_check(first: &str, second: &str) -> Result<()> {
	let first = Color::from_hex(first).into_diagnostic()?;
	let second = Color::from_hex(second).into_diagnostic()?;
	println!("{}", format_check(&first, &second, color_contrast(&first, &second)));
	Ok(())
}
