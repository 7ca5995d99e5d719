// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use rgb::{RGB, RGB8};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// The largest value a color channel can hold.
pub const CHANNEL_MAX: f64 = 255.0;

#[derive(Debug)]
pub enum ColorError {
	OutOfRange(f64),
	InvalidLength,
	InvalidHex(String),
}

impl fmt::Display for ColorError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::OutOfRange(value) => write!(f, "color channel {} is outside of 0-255", value),
			Self::InvalidLength => write!(f, "color value is an invalid length"),
			Self::InvalidHex(digits) => write!(f, "color value {:?} contains a non-hexadecimal digit", digits),
		}
	}
}

impl Error for ColorError {}

/// An sRGB color with real-valued channels in 0-255.
///
/// Channels are kept unrounded so that a generated pair measures its target contrast exactly;
/// use [`Color::to_rgb8`] when a display needs whole channel values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RGB<f64>", into = "RGB<f64>")]
pub struct Color(RGB<f64>);

impl Color {
	pub fn new(red: f64, green: f64, blue: f64) -> Result<Self, ColorError> {
		for channel in [red, green, blue] {
			if !(0.0..=CHANNEL_MAX).contains(&channel) {
				return Err(ColorError::OutOfRange(channel));
			}
		}
		Ok(Self(RGB::new(red, green, blue)))
	}

	/// Builds a color, forcing each channel into range. NaN channels become 0.
	pub(crate) fn clamped(red: f64, green: f64, blue: f64) -> Self {
		Self(RGB::new(clamp_channel(red), clamp_channel(green), clamp_channel(blue)))
	}

	pub(crate) fn gray(value: f64) -> Self {
		let value = clamp_channel(value);
		Self(RGB::new(value, value, value))
	}

	pub fn red(&self) -> f64 {
		self.0.r
	}

	pub fn green(&self) -> f64 {
		self.0.g
	}

	pub fn blue(&self) -> f64 {
		self.0.b
	}

	pub fn channels(&self) -> [f64; 3] {
		[self.0.r, self.0.g, self.0.b]
	}

	pub fn is_gray(&self) -> bool {
		self.0.r == self.0.g && self.0.g == self.0.b
	}

	/// Rounds each channel to the nearest whole value.
	pub fn to_rgb8(&self) -> RGB8 {
		RGB8::new(
			self.0.r.round() as u8,
			self.0.g.round() as u8,
			self.0.b.round() as u8,
		)
	}

	/// Formats the color as a CSS `rgb()` value with unrounded channels.
	pub fn css(&self) -> String {
		format!("rgb({},{},{})", self.0.r, self.0.g, self.0.b)
	}

	/// Formats the color as #abcdef, rounding each channel.
	pub fn hex(&self) -> String {
		let color = self.to_rgb8();
		format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
	}

	/// Parses a color from a #abcdef string. The leading # is optional.
	pub fn from_hex(color_str: &str) -> Result<Self, ColorError> {
		let color_str = color_str.strip_prefix('#').unwrap_or(color_str);

		let digits: Vec<char> = color_str.chars().collect();
		if digits.len() != 6 {
			return Err(ColorError::InvalidLength);
		}

		if !digits.iter().all(char::is_ascii_hexdigit) {
			return Err(ColorError::InvalidHex(color_str.to_string()));
		}

		let channel = |pair: &[char]| {
			let pair: String = pair.iter().collect();
			u8::from_str_radix(&pair, 16).map_err(|_| ColorError::InvalidHex(color_str.to_string()))
		};
		let color_red = channel(&digits[0..2])?;
		let color_green = channel(&digits[2..4])?;
		let color_blue = channel(&digits[4..6])?;

		Ok(RGB8::new(color_red, color_green, color_blue).into())
	}
}

fn clamp_channel(value: f64) -> f64 {
	// f64::max discards NaN
	value.max(0.0).min(CHANNEL_MAX)
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.css())
	}
}

impl From<RGB8> for Color {
	fn from(value: RGB8) -> Self {
		Self(RGB::new(value.r.into(), value.g.into(), value.b.into()))
	}
}

impl TryFrom<RGB<f64>> for Color {
	type Error = ColorError;

	fn try_from(value: RGB<f64>) -> Result<Self, Self::Error> {
		Self::new(value.r, value.g, value.b)
	}
}

impl From<Color> for RGB<f64> {
	fn from(value: Color) -> Self {
		value.0
	}
}
