// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "Contrast Quiz")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
	#[arg(short, long, default_value = "contrast-quiz.kdl", help = "Configuration file path")]
	pub config: PathBuf,
	#[arg(short, long, help = "Log details about each generated round")]
	pub verbose: bool,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
	#[command(about = "Generate quiz rounds")]
	Generate(GenerateArgs),
	#[command(about = "Measure the contrast between two #rrggbb colors")]
	Check {
		#[arg(help = "First color")]
		first: String,
		#[arg(help = "Second color")]
		second: String,
	},
}

#[derive(Args)]
pub struct GenerateArgs {
	#[arg(short, long, help = "Number of rounds to generate (overrides the configuration file)")]
	pub rounds: Option<u32>,
	#[arg(short, long, help = "Seed for reproducible rounds (overrides the configuration file)")]
	pub seed: Option<u64>,
	#[arg(short, long, value_enum, default_value_t = OutputFormat::Json, help = "Output format")]
	pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
	Json,
	Text,
}
