//! Supported container formats and the extension dispatch table

mod extension;

pub use extension::{EXTENSIONS, extension_of, formats_for_extension};

use std::fmt::{Display, Formatter};

/// A container format that a parser can be constructed for
///
/// Whether a format can actually be parsed is up to the [`Backend`](crate::backend::Backend).
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[non_exhaustive]
pub enum Format {
	/// MPEG audio (MP1/MP2/MP3), including ADTS AAC streams
	Mpeg,
	/// Vorbis in an Ogg container
	OggVorbis,
	/// FLAC in an Ogg container
	OggFlac,
	/// Native FLAC
	Flac,
	/// Musepack
	Mpc,
	/// WavPack
	WavPack,
	/// Speex in an Ogg container
	Speex,
	/// Opus in an Ogg container
	Opus,
	/// TrueAudio
	TrueAudio,
	/// MPEG-4 audio (M4A and friends)
	Mp4,
	/// Advanced Systems Format (WMA)
	Asf,
	/// AIFF and AIFF-C
	Aiff,
	/// RIFF WAVE
	Wav,
	/// Monkey's Audio
	Ape,
	/// ProTracker module
	Mod,
	/// ScreamTracker III module
	S3m,
	/// Impulse Tracker module
	It,
	/// FastTracker II module
	Xm,
	/// DSD Stream File
	Dsf,
	/// DSD Interchange File Format
	Dsdiff,
}

impl Format {
	/// A human readable name for the format
	///
	/// # Examples
	///
	/// ```rust
	/// use tagbridge::format::Format;
	///
	/// assert_eq!(Format::OggFlac.name(), "Ogg FLAC");
	/// ```
	pub fn name(self) -> &'static str {
		match self {
			Format::Mpeg => "MPEG",
			Format::OggVorbis => "Ogg Vorbis",
			Format::OggFlac => "Ogg FLAC",
			Format::Flac => "FLAC",
			Format::Mpc => "Musepack",
			Format::WavPack => "WavPack",
			Format::Speex => "Speex",
			Format::Opus => "Opus",
			Format::TrueAudio => "TrueAudio",
			Format::Mp4 => "MP4",
			Format::Asf => "ASF",
			Format::Aiff => "AIFF",
			Format::Wav => "WAV",
			Format::Ape => "APE",
			Format::Mod => "MOD",
			Format::S3m => "S3M",
			Format::It => "IT",
			Format::Xm => "XM",
			Format::Dsf => "DSF",
			Format::Dsdiff => "DSDIFF",
		}
	}
}

impl Display for Format {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}
