//! Time elapsed since a start date, for the "together since" counter.

use std::fmt;

const SECOND_MS: f64 = 1000.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Elapsed {
	pub days: u64,
	pub hours: u64,
	pub minutes: u64,
	pub seconds: u64,
}

impl Elapsed {
	/// Splits `now_ms - start_ms` into whole units. Negative or non-finite
	/// spans yield zero.
	pub fn between(start_ms: f64, now_ms: f64) -> Self {
		let span = now_ms - start_ms;
		if !span.is_finite() || span <= 0.0 {
			return Self::default();
		}
		let total = (span / SECOND_MS).floor() as u64;
		Self {
			days: total / 86_400,
			hours: total / 3_600 % 24,
			minutes: total / 60 % 60,
			seconds: total % 60,
		}
	}
}

impl fmt::Display for Elapsed {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let unit = if self.days > 1 { "jours" } else { "jour" };
		write!(
			f,
			"{} {} {} h {} min {} s",
			self.days, unit, self.hours, self.minutes, self.seconds
		)
	}
}
