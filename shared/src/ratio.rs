// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// The contrast ratios a quiz round can target.
///
/// These sit on the WCAG 2.1 text thresholds, so a player who can tell them apart can tell
/// whether text passes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum ContrastRatio {
	OneAndAHalf,
	Three,
	FourAndAHalf,
	Seven,
}

impl ContrastRatio {
	pub const ALL: [ContrastRatio; 4] = [Self::OneAndAHalf, Self::Three, Self::FourAndAHalf, Self::Seven];

	pub fn value(&self) -> f64 {
		match self {
			Self::OneAndAHalf => 1.5,
			Self::Three => 3.0,
			Self::FourAndAHalf => 4.5,
			Self::Seven => 7.0,
		}
	}

	/// Picks one of the ratios uniformly.
	pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
		Self::ALL[rng.pick_index(Self::ALL.len())]
	}

	pub fn pass_level(&self, text_size: TextSize) -> PassLevel {
		PassLevel::for_ratio(self.value(), text_size)
	}
}

impl fmt::Display for ContrastRatio {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:1", self.value())
	}
}

impl From<ContrastRatio> for f64 {
	fn from(value: ContrastRatio) -> Self {
		value.value()
	}
}

impl TryFrom<f64> for ContrastRatio {
	type Error = RatioError;

	fn try_from(value: f64) -> Result<Self, Self::Error> {
		Self::ALL
			.into_iter()
			.find(|ratio| ratio.value() == value)
			.ok_or(RatioError::NotEnumerated(value))
	}
}

#[derive(Debug)]
pub enum RatioError {
	NotEnumerated(f64),
}

impl fmt::Display for RatioError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NotEnumerated(value) => write!(f, "{} is not one of the quiz contrast ratios", value),
		}
	}
}

impl Error for RatioError {}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextSize {
	Normal,
	Large,
}

/// How well a contrast ratio serves text of a given size under WCAG 2.1.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassLevel {
	Fail,
	Pass,
	Good,
}

impl PassLevel {
	pub fn for_ratio(ratio: f64, text_size: TextSize) -> Self {
		let (pass, good) = match text_size {
			TextSize::Normal => (4.5, 7.0),
			TextSize::Large => (3.0, 4.5),
		};
		if ratio >= good {
			Self::Good
		} else if ratio >= pass {
			Self::Pass
		} else {
			Self::Fail
		}
	}
}

impl fmt::Display for PassLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Fail => write!(f, "fail"),
			Self::Pass => write!(f, "pass"),
			Self::Good => write!(f, "good"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Fixed(f64);

	impl RandomSource for Fixed {
		fn next_unit(&mut self) -> f64 {
			self.0
		}
	}

	#[test]
	fn random_covers_every_ratio() {
		assert_eq!(ContrastRatio::random(&mut Fixed(0.0)), ContrastRatio::OneAndAHalf);
		assert_eq!(ContrastRatio::random(&mut Fixed(0.3)), ContrastRatio::Three);
		assert_eq!(ContrastRatio::random(&mut Fixed(0.6)), ContrastRatio::FourAndAHalf);
		assert_eq!(ContrastRatio::random(&mut Fixed(0.999)), ContrastRatio::Seven);
		// A source that breaks its contract still yields a ratio.
		assert_eq!(ContrastRatio::random(&mut Fixed(1.0)), ContrastRatio::Seven);
	}

	#[test]
	fn converts_only_exact_values() {
		assert_eq!(ContrastRatio::try_from(4.5).unwrap(), ContrastRatio::FourAndAHalf);
		assert!(matches!(ContrastRatio::try_from(4.4999), Err(RatioError::NotEnumerated(_))));
		assert!(ContrastRatio::try_from(21.0).is_err());
	}

	#[test]
	fn serializes_as_number() {
		assert_eq!(serde_json::to_string(&ContrastRatio::FourAndAHalf).unwrap(), "4.5");
		let ratio: ContrastRatio = serde_json::from_str("7").unwrap();
		assert_eq!(ratio, ContrastRatio::Seven);
		assert!(serde_json::from_str::<ContrastRatio>("2").is_err());
	}

	#[test]
	fn displays_as_ratio() {
		assert_eq!(ContrastRatio::OneAndAHalf.to_string(), "1.5:1");
		assert_eq!(ContrastRatio::Seven.to_string(), "7:1");
	}

	#[test]
	fn pass_levels_follow_text_size() {
		use ContrastRatio::*;

		let normal: Vec<PassLevel> = ContrastRatio::ALL.iter().map(|r| r.pass_level(TextSize::Normal)).collect();
		assert_eq!(normal, [PassLevel::Fail, PassLevel::Fail, PassLevel::Pass, PassLevel::Good]);

		let large: Vec<PassLevel> = ContrastRatio::ALL.iter().map(|r| r.pass_level(TextSize::Large)).collect();
		assert_eq!(large, [PassLevel::Fail, PassLevel::Pass, PassLevel::Good, PassLevel::Good]);

		assert_eq!(Three.pass_level(TextSize::Large), PassLevel::Pass);
		assert_eq!(PassLevel::for_ratio(4.49, TextSize::Normal), PassLevel::Fail);
		assert_eq!(PassLevel::for_ratio(21.0, TextSize::Normal), PassLevel::Good);
	}
}
