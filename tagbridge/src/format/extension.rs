use super::Format;

/// List of recognized audio extensions, upper-cased
///
/// This can be used as a filter when scanning directories. A file with one of these extensions
/// is not guaranteed to parse, and files without them may still be detected from their content.
///
/// # Examples
///
/// ```rust
/// use tagbridge::format::EXTENSIONS;
///
/// assert!(EXTENSIONS.contains(&"FLAC"));
/// ```
pub const EXTENSIONS: &[&str] = &[
	// Also update `EXTENSION_TABLE` below
	"MP3", "MP2", "AAC", "OGG", "OGA", "FLAC", "MPC", "WV", "SPX", "OPUS", "TTA", "M4A", "M4R",
	"M4B", "M4P", "MP4", "3G2", "M4V", "WMA", "ASF", "AIF", "AIFF", "AFC", "AIFC", "WAV", "APE",
	"MOD", "MODULE", "NST", "WOW", "S3M", "IT", "XM", "DSF", "DFF", "DSDIFF",
];

// Each row maps a set of extensions to the formats tried, in order, for them.
// Only `.oga` is ambiguous: it can hold any Ogg audio, so FLAC is tried before Vorbis.
//
// Also update `EXTENSIONS` above
static EXTENSION_TABLE: &[(&[&str], &[Format])] = &[
	(&["MP3", "MP2", "AAC"], &[Format::Mpeg]),
	(&["OGG"], &[Format::OggVorbis]),
	(&["OGA"], &[Format::OggFlac, Format::OggVorbis]),
	(&["FLAC"], &[Format::Flac]),
	(&["MPC"], &[Format::Mpc]),
	(&["WV"], &[Format::WavPack]),
	(&["SPX"], &[Format::Speex]),
	(&["OPUS"], &[Format::Opus]),
	(&["TTA"], &[Format::TrueAudio]),
	(
		&["M4A", "M4R", "M4B", "M4P", "MP4", "3G2", "M4V"],
		&[Format::Mp4],
	),
	(&["WMA", "ASF"], &[Format::Asf]),
	(&["AIF", "AIFF", "AFC", "AIFC"], &[Format::Aiff]),
	(&["WAV"], &[Format::Wav]),
	(&["APE"], &[Format::Ape]),
	// module, nst and wow are possible but uncommon extensions
	(&["MOD", "MODULE", "NST", "WOW"], &[Format::Mod]),
	(&["S3M"], &[Format::S3m]),
	(&["IT"], &[Format::It]),
	(&["XM"], &[Format::Xm]),
	(&["DSF"], &[Format::Dsf]),
	(&["DFF", "DSDIFF"], &[Format::Dsdiff]),
];

/// Extracts the upper-cased extension from a file name
///
/// The extension is everything after the last `.`, which may include path separators
/// if a directory contains a dot. Returns `None` when there is no `.` or nothing follows it.
///
/// # Examples
///
/// ```rust
/// use tagbridge::format::extension_of;
///
/// assert_eq!(extension_of("song.flac").as_deref(), Some("FLAC"));
/// assert_eq!(extension_of("archive.tar.Mp3").as_deref(), Some("MP3"));
/// assert_eq!(extension_of("README"), None);
/// assert_eq!(extension_of("trailing."), None);
/// ```
pub fn extension_of(filename: &str) -> Option<String> {
	let (_, ext) = filename.rsplit_once('.')?;
	if ext.is_empty() {
		return None;
	}

	Some(ext.to_ascii_uppercase())
}

/// Looks up the candidate formats for an (upper-cased) extension
///
/// Candidates are returned in the order they should be attempted.
///
/// # Examples
///
/// ```rust
/// use tagbridge::format::{Format, formats_for_extension};
///
/// assert_eq!(formats_for_extension("AAC"), Some(&[Format::Mpeg][..]));
/// assert_eq!(
/// 	formats_for_extension("OGA"),
/// 	Some(&[Format::OggFlac, Format::OggVorbis][..])
/// );
/// assert_eq!(formats_for_extension("TXT"), None);
/// ```
pub fn formats_for_extension(ext: &str) -> Option<&'static [Format]> {
	EXTENSION_TABLE
		.iter()
		.find(|(extensions, _)| extensions.contains(&ext))
		.map(|(_, formats)| *formats)
}
