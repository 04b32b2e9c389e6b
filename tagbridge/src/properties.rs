//! Audio properties reported to the caller

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A single audio property name
///
/// These are always emitted in the order of [`AudioProperty::ALL`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AudioProperty {
	/// Bitrate in kbps
	Bitrate,
	/// Duration in whole seconds
	LengthSeconds,
	/// Sample rate in Hz
	SampleRate,
	/// Channel count
	Channels,
}

impl AudioProperty {
	/// All properties, in emission order
	pub const ALL: [AudioProperty; 4] = [
		AudioProperty::Bitrate,
		AudioProperty::LengthSeconds,
		AudioProperty::SampleRate,
		AudioProperty::Channels,
	];

	/// The name used across the foreign boundary
	///
	/// # Examples
	///
	/// ```rust
	/// use tagbridge::properties::AudioProperty;
	///
	/// assert_eq!(AudioProperty::LengthSeconds.as_str(), "LENGTH_SECONDS");
	/// ```
	pub fn as_str(self) -> &'static str {
		match self {
			AudioProperty::Bitrate => "BITRATE",
			AudioProperty::LengthSeconds => "LENGTH_SECONDS",
			AudioProperty::SampleRate => "SAMPLE_RATE",
			AudioProperty::Channels => "CHANNELS",
		}
	}
}

impl Display for AudioProperty {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for AudioProperty {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		AudioProperty::ALL
			.into_iter()
			.find(|property| property.as_str() == s)
			.ok_or(())
	}
}

/// The raw audio properties of a parsed file
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct AudioProperties {
	/// Bitrate in kbps
	pub bitrate: u32,
	/// Duration in whole seconds
	pub length_seconds: u64,
	/// Sample rate in Hz
	pub sample_rate: u32,
	/// Channel count
	pub channels: u32,
}

impl AudioProperties {
	/// Get the value of a single property, clamped into an `i32`
	///
	/// # Examples
	///
	/// ```rust
	/// use tagbridge::properties::{AudioProperties, AudioProperty};
	///
	/// let properties = AudioProperties {
	/// 	bitrate: 320,
	/// 	length_seconds: 215,
	/// 	sample_rate: 44100,
	/// 	channels: 2,
	/// };
	///
	/// assert_eq!(properties.get(AudioProperty::SampleRate), 44100);
	/// ```
	pub fn get(&self, property: AudioProperty) -> i32 {
		let value = match property {
			AudioProperty::Bitrate => u64::from(self.bitrate),
			AudioProperty::LengthSeconds => self.length_seconds,
			AudioProperty::SampleRate => u64::from(self.sample_rate),
			AudioProperty::Channels => u64::from(self.channels),
		};

		i32::try_from(value).unwrap_or(i32::MAX)
	}
}
