// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::args::OutputFormat;
use contrast_quiz_shared::{Color, PassLevel, QuizData, TextSize};
use miette::{IntoDiagnostic, Result};

pub fn format_round(round: u64, quiz_data: &QuizData, format: OutputFormat) -> Result<String> {
	match format {
		OutputFormat::Json => serde_json::to_string(quiz_data).into_diagnostic(),
		OutputFormat::Text => Ok(format!(
			"Round {}: {}\n  background {} ({})\n  text       {} ({})",
			round,
			quiz_data.contrast(),
			quiz_data.background_color().css(),
			quiz_data.background_color().hex(),
			quiz_data.text_color().css(),
			quiz_data.text_color().hex()
		)),
	}
}

pub fn format_check(first: &Color, second: &Color, ratio: f64) -> String {
	format!(
		"{} on {}: {:.2}:1\n  normal text: {}\n  large text:  {}",
		first.hex(),
		second.hex(),
		ratio,
		PassLevel::for_ratio(ratio, TextSize::Normal),
		PassLevel::for_ratio(ratio, TextSize::Large)
	)
}
