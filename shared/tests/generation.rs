// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use approx::assert_relative_eq;
use contrast::contrast;
use contrast_quiz_shared::{
	color_contrast, complementary_luminances, generate_quiz_data, grayscale_color, luminance, Color,
	ContrastRatio, GenerationFailure, QuizGenerator, QuizSession, RandomSource, MAX_ATTEMPTS,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rgb::RGB8;
use std::collections::HashSet;
use std::num::NonZeroU32;

/// Chooses 7:1 and then only offers colors whose luminance has no partner at that ratio.
struct Unsolvable {
	calls: usize,
}

impl RandomSource for Unsolvable {
	fn next_unit(&mut self) -> f64 {
		self.calls += 1;
		if self.calls == 1 {
			0.8
		} else {
			0.4845
		}
	}
}

#[test]
fn generated_rounds_match_their_contrast() {
	let mut rng = StdRng::seed_from_u64(2024);
	for _ in 0..2000 {
		let quiz_data = generate_quiz_data(&mut rng).unwrap();
		let measured = quiz_data.measured_contrast();
		assert!(
			(measured - quiz_data.contrast().value()).abs() < 1e-6,
			"{:?} measures {}",
			quiz_data,
			measured
		);
	}
}

#[test]
fn generated_channels_are_in_range() {
	let mut rng = StdRng::seed_from_u64(99);
	for _ in 0..2000 {
		let quiz_data = generate_quiz_data(&mut rng).unwrap();
		for color in [quiz_data.background_color(), quiz_data.text_color()] {
			assert!(color.channels().iter().all(|channel| (0.0..=255.0).contains(channel)));
			assert!(Color::new(color.red(), color.green(), color.blue()).is_ok());
		}
	}
}

#[test]
fn every_ratio_gets_generated() {
	let mut rng = StdRng::seed_from_u64(5);
	let seen: HashSet<ContrastRatio> = (0..400)
		.map(|_| generate_quiz_data(&mut rng).unwrap().contrast())
		.collect();
	assert_eq!(seen.len(), ContrastRatio::ALL.len());
	assert!(seen.iter().all(|ratio| ContrastRatio::ALL.contains(ratio)));
}

#[test]
fn one_color_of_each_round_is_gray() {
	let mut rng = StdRng::seed_from_u64(11);
	for _ in 0..500 {
		let quiz_data = generate_quiz_data(&mut rng).unwrap();
		assert!(quiz_data.background_color().is_gray() || quiz_data.text_color().is_gray());
	}
}

#[test]
fn background_is_lighter_about_half_the_time() {
	let mut rng = StdRng::seed_from_u64(314);
	let rounds = 4000;
	let lighter_backgrounds = (0..rounds)
		.filter(|_| generate_quiz_data(&mut rng).unwrap().background_is_lighter())
		.count();
	let share = lighter_backgrounds as f64 / rounds as f64;
	assert!((0.45..0.55).contains(&share), "lighter background share was {}", share);
}

#[test]
fn unsolvable_source_fails_at_the_bound() {
	let mut rng = Unsolvable { calls: 0 };
	let failure = generate_quiz_data(&mut rng).unwrap_err();
	assert_eq!(
		failure,
		GenerationFailure {
			contrast: ContrastRatio::Seven,
			attempts: MAX_ATTEMPTS,
		}
	);
	assert_eq!(rng.calls, 1 + 3 * MAX_ATTEMPTS as usize);
}

#[test]
fn session_with_unsolvable_source_fails_to_start() {
	let generator = QuizGenerator::with_max_attempts(NonZeroU32::new(10).unwrap());
	let result = QuizSession::with_generator(Unsolvable { calls: 0 }, generator);
	assert!(result.is_err());
}

#[test]
fn session_rounds_are_all_valid() {
	let mut session = QuizSession::new(StdRng::seed_from_u64(8)).unwrap();
	for round in 2..=50 {
		let quiz_data = session.advance().unwrap();
		assert!((quiz_data.measured_contrast() - quiz_data.contrast().value()).abs() < 1e-6);
		assert_eq!(session.round(), round);
	}
}

#[test]
fn solver_literal_cases() {
	let candidates = complementary_luminances(0.5, ContrastRatio::Three);
	assert_eq!(candidates.len(), 1);
	assert_relative_eq!(candidates[0], 0.55 / 3.0 - 0.05, epsilon = 1e-12);

	let candidates = complementary_luminances(1.0, ContrastRatio::Seven);
	assert_eq!(candidates.len(), 1);
	assert_relative_eq!(candidates[0], 0.1, epsilon = 1e-12);
}

#[test]
fn solved_grays_reach_the_target() {
	let mut rng = StdRng::seed_from_u64(77);
	for _ in 0..1000 {
		let known: f64 = rng.gen();
		for ratio in ContrastRatio::ALL {
			for candidate in complementary_luminances(known, ratio) {
				let gray = grayscale_color(candidate);
				assert_relative_eq!(luminance(&gray), candidate, epsilon = 1e-6);
			}
		}
	}
}

#[test]
fn contrast_agrees_with_contrast_crate() {
	let mut rng = StdRng::seed_from_u64(1);
	for _ in 0..500 {
		let a = RGB8::new(rng.gen(), rng.gen(), rng.gen());
		let b = RGB8::new(rng.gen(), rng.gen(), rng.gen());
		let expected: f64 = contrast(a, b);
		assert_relative_eq!(color_contrast(&a.into(), &b.into()), expected, epsilon = 1e-6);
	}
}

#[test]
fn quiz_data_survives_json() {
	let quiz_data = generate_quiz_data(&mut StdRng::seed_from_u64(6)).unwrap();
	let json = serde_json::to_string(&quiz_data).unwrap();
	let parsed: contrast_quiz_shared::QuizData = serde_json::from_str(&json).unwrap();
	assert_eq!(parsed.contrast(), quiz_data.contrast());
	assert_relative_eq!(
		parsed.measured_contrast(),
		quiz_data.measured_contrast(),
		epsilon = 1e-9
	);
}
