// Frame sync detection for MPEG audio and ADTS streams.
//
// A lone sync word is too weak a signal, random data contains them often enough. A stream is
// only accepted when a frame header is found whose successor (at the computed frame length)
// carries the same version, layer and sample rate.

use crate::error::Result;

use std::io::{Read, Seek, SeekFrom};

use byteorder::{BigEndian, ReadBytesExt};

/// How far into the stream to search for the first frame
pub(crate) const SEARCH_WINDOW: u64 = 1024;

// Version, layer, and sample rate of an MPEG frame header
const MPEG_HEADER_MASK: u32 = 0xFFFE_0C00;
// Sync, id, layer, profile, and sample rate of an ADTS header
const ADTS_HEADER_MASK: u32 = 0xFFF6_FC00;

// [version][layer]
const BITRATES: [[[u32; 16]; 3]; 2] = [
	[
		[0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448, 0],
		[0, 32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384, 0],
		[0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 0],
	],
	[
		[0, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256, 0],
		[0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0],
		[0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0],
	],
];

// [version]
const SAMPLE_RATES: [[u32; 3]; 3] = [
	[44100, 48000, 32000],
	[22050, 24000, 16000],
	[11025, 12000, 8000],
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Version {
	V1,
	V2,
	V2_5,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Layer {
	Layer1,
	Layer2,
	Layer3,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum FrameKind {
	Mpeg,
	Adts,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FrameHeader {
	pub(crate) kind: FrameKind,
	pub(crate) raw: u32,
	pub(crate) len: u32,
}

pub(crate) fn verify_frame_sync(first: u8, second: u8) -> bool {
	first == 0xFF && second >> 5 == 0b111
}

impl FrameHeader {
	pub(crate) fn parse(raw: u32) -> Option<Self> {
		let [first, second, ..] = raw.to_be_bytes();
		if !verify_frame_sync(first, second) {
			return None;
		}

		// The layer bits are reserved in MPEG audio, ADTS always leaves them unset
		if (raw >> 17) & 0b11 == 0 {
			return Self::parse_adts(raw);
		}

		Self::parse_mpeg(raw)
	}

	fn parse_mpeg(raw: u32) -> Option<Self> {
		let version = match (raw >> 19) & 0b11 {
			0b00 => Version::V2_5,
			0b10 => Version::V2,
			0b11 => Version::V1,
			_ => return None,
		};

		let layer = match (raw >> 17) & 0b11 {
			0b01 => Layer::Layer3,
			0b10 => Layer::Layer2,
			0b11 => Layer::Layer1,
			_ => return None,
		};

		let bitrate_table = if version == Version::V1 { 0 } else { 1 };
		let layer_index = match layer {
			Layer::Layer1 => 0,
			Layer::Layer2 => 1,
			Layer::Layer3 => 2,
		};

		let bitrate = BITRATES[bitrate_table][layer_index][((raw >> 12) & 0xF) as usize];
		if bitrate == 0 {
			// Free format or invalid
			return None;
		}

		let sample_rate_index = ((raw >> 10) & 0b11) as usize;
		if sample_rate_index == 0b11 {
			return None;
		}

		let version_index = match version {
			Version::V1 => 0,
			Version::V2 => 1,
			Version::V2_5 => 2,
		};
		let sample_rate = SAMPLE_RATES[version_index][sample_rate_index];
		let padding = (raw >> 9) & 1;

		let len = match layer {
			Layer::Layer1 => (12_000 * bitrate / sample_rate + padding) * 4,
			Layer::Layer2 => 144_000 * bitrate / sample_rate + padding,
			Layer::Layer3 if version == Version::V1 => 144_000 * bitrate / sample_rate + padding,
			Layer::Layer3 => 72_000 * bitrate / sample_rate + padding,
		};

		Some(Self {
			kind: FrameKind::Mpeg,
			raw,
			len,
		})
	}

	fn parse_adts(raw: u32) -> Option<Self> {
		// Only the first 4 bytes are available here, the length needs the 5th and 6th
		let sample_rate_index = (raw >> 10) & 0xF;
		if sample_rate_index > 12 {
			return None;
		}

		Some(Self {
			kind: FrameKind::Adts,
			raw,
			len: 0,
		})
	}

	fn mask(self) -> u32 {
		match self.kind {
			FrameKind::Mpeg => MPEG_HEADER_MASK,
			FrameKind::Adts => ADTS_HEADER_MASK,
		}
	}

	pub(crate) fn matches(self, other: u32) -> bool {
		self.raw & self.mask() == other & self.mask()
	}
}

// The ADTS frame length is a 13 bit field spanning bytes 4 to 6 of the header
fn adts_frame_len(header: &[u8]) -> Option<u32> {
	let [_, _, _, b3, b4, b5, ..] = *header else {
		return None;
	};

	let len = (u32::from(b3 & 0b11) << 11) | (u32::from(b4) << 3) | (u32::from(b5) >> 5);

	// Must at least fit the 7 byte header
	(len >= 7).then_some(len)
}

/// Search for a pair of consecutive matching frame headers
///
/// The search starts at the current position of `reader` and covers [`SEARCH_WINDOW`] bytes.
///
/// # Errors
///
/// * Failure to seek `reader`
pub(crate) fn find_frame_pair<R>(reader: &mut R) -> Result<Option<(u64, FrameHeader)>>
where
	R: Read + Seek,
{
	let start = reader.stream_position()?;

	// Keep enough slack past the window to read a full ADTS header at its very end
	let mut window = Vec::new();
	reader.by_ref().take(SEARCH_WINDOW + 6).read_to_end(&mut window)?;

	for (i, &byte) in window.iter().enumerate().take(SEARCH_WINDOW as usize) {
		if !verify_frame_sync(byte, window.get(i + 1).copied().unwrap_or(0)) {
			continue;
		}

		let Some(raw) = window
			.get(i..i + 4)
			.and_then(|bytes| <[u8; 4]>::try_from(bytes).ok())
		else {
			break;
		};

		let Some(mut header) = FrameHeader::parse(u32::from_be_bytes(raw)) else {
			continue;
		};

		if header.kind == FrameKind::Adts {
			let Some(len) = adts_frame_len(&window[i..]) else {
				continue;
			};
			header.len = len;
		}

		let frame_start = start + i as u64;
		reader.seek(SeekFrom::Start(frame_start + u64::from(header.len)))?;

		match reader.read_u32::<BigEndian>() {
			Ok(next) if header.matches(next) => {
				log::debug!("Found {:?} frame pair at offset {frame_start}", header.kind);
				return Ok(Some((frame_start, header)));
			},
			_ => {},
		}
	}

	Ok(None)
}
