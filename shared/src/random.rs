// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use rand::Rng;

/// A source of uniformly distributed values in [0, 1).
///
/// Every [`rand::Rng`] is a source, so a `ThreadRng` or a seeded `StdRng` can be passed
/// straight in. Tests can implement this directly to script the values a generator sees.
pub trait RandomSource {
	fn next_unit(&mut self) -> f64;

	/// Picks one item uniformly. An empty slice consumes no randomness.
	fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
		if items.is_empty() {
			return None;
		}
		items.get(self.pick_index(items.len()))
	}

	/// Picks an index below `len` uniformly. `len` must not be zero.
	fn pick_index(&mut self, len: usize) -> usize {
		let index = (self.next_unit() * len as f64) as usize;
		index.min(len.saturating_sub(1))
	}

	fn coin_flip(&mut self) -> bool {
		self.next_unit() < 0.5
	}
}

impl<R: Rng + ?Sized> RandomSource for R {
	fn next_unit(&mut self) -> f64 {
		self.gen()
	}
}
