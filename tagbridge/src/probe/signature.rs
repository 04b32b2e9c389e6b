//! Content signature checks
//!
//! Each [`Format`] has a cheap predicate that looks at the start of a stream and reports whether
//! the content resembles that format. No parser is constructed, a match only means the format is
//! worth trying.
//!
//! | Format     | Skips ID3v2 | Check                                                       |
//! |------------|-------------|-------------------------------------------------------------|
//! | MPEG       | yes         | Two consecutive matching frame headers in the first 1 KiB    |
//! | Ogg Vorbis | no          | First Ogg packet starts with `\x01vorbis`                   |
//! | Ogg FLAC   | no          | First Ogg packet starts with `\x7FFLAC` or `fLaC`           |
//! | FLAC       | yes         | `fLaC`                                                      |
//! | Musepack   | yes         | `MPCK` or `MP+`                                             |
//! | WavPack    | no          | `wvpk`                                                      |
//! | Speex      | no          | First Ogg packet starts with `Speex   `                     |
//! | Opus       | no          | First Ogg packet starts with `OpusHead`                     |
//! | TrueAudio  | yes         | `TTA`                                                       |
//! | MP4        | no          | `ftyp` at offset 4                                          |
//! | ASF        | no          | ASF header object GUID                                      |
//! | AIFF       | no          | `FORM`, then `AIFF` or `AIFC` at offset 8                   |
//! | WAV        | no          | `RIFF`, then `WAVE` at offset 8                             |
//! | APE        | yes         | `MAC `                                                      |
//! | DSF        | no          | `DSD `                                                      |
//! | DSDIFF     | no          | `FRM8`, then `DSD ` at offset 12                            |
//!
//! The tracker formats (MOD, S3M, IT, XM) have no signature and are only ever detected by
//! extension.

use super::mpeg;
use crate::error::Result;
use crate::format::Format;

use std::io::{Read, Seek, SeekFrom};

use ogg_pager::Page;

const ASF_HEADER_GUID: [u8; 16] = [
	0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE, 0x6C,
];

// Long enough for every fixed-offset signature
const PREFIX_LEN: u64 = 16;

/// Check whether the content of `reader` looks like `format`
///
/// The reader is expected to be at the start of the stream. Its position afterwards is
/// unspecified.
///
/// # Errors
///
/// * Failure to read from or seek `reader`
///
/// Content that is too short to hold a signature is not an error.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use tagbridge::format::Format;
/// use tagbridge::probe::signature::is_supported;
///
/// # fn main() -> tagbridge::error::Result<()> {
/// let mut id3v2_then_flac = Cursor::new(b"ID3\x04\x00\x00\x00\x00\x00\x00fLaC".to_vec());
/// assert!(is_supported(Format::Flac, &mut id3v2_then_flac)?);
/// # Ok(()) }
/// ```
pub fn is_supported<R>(format: Format, reader: &mut R) -> Result<bool>
where
	R: Read + Seek,
{
	match format {
		Format::Mpeg => {
			skip_id3v2(reader)?;
			Ok(mpeg::find_frame_pair(reader)?.is_some())
		},
		Format::OggVorbis => first_packet_starts_with(reader, &[b"\x01vorbis"]),
		Format::OggFlac => first_packet_starts_with(reader, &[b"\x7FFLAC", b"fLaC"]),
		Format::Speex => first_packet_starts_with(reader, &[b"Speex   "]),
		Format::Opus => first_packet_starts_with(reader, &[b"OpusHead"]),
		Format::Flac => {
			skip_id3v2(reader)?;
			Ok(read_prefix(reader)?.starts_with(b"fLaC"))
		},
		Format::Mpc => {
			skip_id3v2(reader)?;
			let prefix = read_prefix(reader)?;
			Ok(prefix.starts_with(b"MPCK") || prefix.starts_with(b"MP+"))
		},
		Format::TrueAudio => {
			skip_id3v2(reader)?;
			Ok(read_prefix(reader)?.starts_with(b"TTA"))
		},
		Format::Ape => {
			skip_id3v2(reader)?;
			Ok(read_prefix(reader)?.starts_with(b"MAC "))
		},
		Format::WavPack => Ok(read_prefix(reader)?.starts_with(b"wvpk")),
		Format::Mp4 => Ok(has_magic_at(&read_prefix(reader)?, 4, b"ftyp")),
		Format::Asf => Ok(read_prefix(reader)?.starts_with(&ASF_HEADER_GUID)),
		Format::Aiff => {
			let prefix = read_prefix(reader)?;
			Ok(prefix.starts_with(b"FORM")
				&& (has_magic_at(&prefix, 8, b"AIFF") || has_magic_at(&prefix, 8, b"AIFC")))
		},
		Format::Wav => {
			let prefix = read_prefix(reader)?;
			Ok(prefix.starts_with(b"RIFF") && has_magic_at(&prefix, 8, b"WAVE"))
		},
		Format::Dsf => Ok(read_prefix(reader)?.starts_with(b"DSD ")),
		Format::Dsdiff => {
			let prefix = read_prefix(reader)?;
			Ok(prefix.starts_with(b"FRM8") && has_magic_at(&prefix, 12, b"DSD "))
		},
		Format::Mod | Format::S3m | Format::It | Format::Xm => Ok(false),
	}
}

/// Skip over an ID3v2 tag at the start of the stream, if one exists
///
/// Afterwards, `reader` is positioned at the first byte following the tag (and its footer), or
/// at the start of the stream if there is no tag.
///
/// # Errors
///
/// * Failure to read from or seek `reader`
pub fn skip_id3v2<R>(reader: &mut R) -> Result<u64>
where
	R: Read + Seek,
{
	reader.rewind()?;

	let mut header = Vec::with_capacity(10);
	reader.by_ref().take(10).read_to_end(&mut header)?;

	let end = match header[..] {
		[b'I', b'D', b'3', _, _, flags, s0, s1, s2, s3] if (s0 | s1 | s2 | s3) & 0x80 == 0 => {
			// Synchsafe, 7 bits per byte
			let size = [s0, s1, s2, s3]
				.into_iter()
				.fold(0u64, |acc, b| (acc << 7) | u64::from(b));

			let footer = if flags & 0x10 == 0x10 { 10 } else { 0 };
			10 + size + footer
		},
		_ => 0,
	};

	if end > 0 {
		log::debug!("Skipping ID3v2 tag, content starts at {end}");
	}

	reader.seek(SeekFrom::Start(end))?;
	Ok(end)
}

fn read_prefix<R>(reader: &mut R) -> Result<Vec<u8>>
where
	R: Read,
{
	let mut prefix = Vec::with_capacity(PREFIX_LEN as usize);
	reader.take(PREFIX_LEN).read_to_end(&mut prefix)?;

	Ok(prefix)
}

fn has_magic_at(prefix: &[u8], offset: usize, magic: &[u8]) -> bool {
	prefix
		.get(offset..)
		.is_some_and(|rest| rest.starts_with(magic))
}

fn first_packet_starts_with<R>(reader: &mut R, magics: &[&[u8]]) -> Result<bool>
where
	R: Read + Seek,
{
	match Page::read(reader) {
		Ok(page) => {
			let content = page.content();
			Ok(magics.iter().any(|magic| content.starts_with(magic)))
		},
		Err(e) => {
			log::trace!("No Ogg page at the start of the stream: {e}");
			Ok(false)
		},
	}
}
