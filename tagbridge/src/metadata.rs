//! A Rust-side aggregate of the emitted metadata
//!
//! [`MetadataCollector`] is a [`MetadataSink`] that gathers every callback, and turns them into
//! an [`AudioMetadata`] record once detection and emission are done.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tagbridge::metadata::AudioMetadata;
//!
//! # fn main() -> tagbridge::error::Result<()> {
//! let metadata = AudioMetadata::read_from_path("path/to/my.flac")?;
//!
//! println!("{:?} by {:?}", metadata.title, metadata.artists);
//! # Ok(()) }
//! ```

use crate::backend::LoftyBackend;
use crate::config::ParseOptions;
use crate::error::Result;
use crate::marshal::MetadataSink;
use crate::picture::PictureEntry;
use crate::properties::AudioProperty;
use crate::tag::PropertyMap;

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use lofty::tag::items::Timestamp;

/// Aggregated metadata of a single file
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct AudioMetadata {
	/// `TITLE`
	pub title: Option<String>,
	/// `ALBUM`
	pub album: Option<String>,
	/// `ARTIST`, de-duplicated
	pub artists: Vec<String>,
	/// `ALBUMARTIST`, de-duplicated
	pub album_artists: Vec<String>,
	/// `COMPOSER`, de-duplicated
	pub composers: Vec<String>,
	/// `GENRE`, de-duplicated
	pub genres: Vec<String>,
	/// The disc number, from `DISCNUMBER`
	pub disc_number: Option<u32>,
	/// The disc total, from `DISCNUMBER` (`N/M`), `DISCTOTAL` or `TOTALDISCS`
	pub disc_total: Option<u32>,
	/// The track number, from `TRACKNUMBER`
	pub track_number: Option<u32>,
	/// The track total, from `TRACKNUMBER` (`N/M`), `TRACKTOTAL` or `TOTALTRACKS`
	pub track_total: Option<u32>,
	/// `DATE`, if it is a valid timestamp
	pub date: Option<Timestamp>,
	/// `LYRICS`
	pub lyrics: Option<String>,
	/// `ENCODING`, or `ENCODEDBY`
	pub encoding: Option<String>,
	/// Bitrate in kbps
	pub bitrate: Option<i32>,
	/// Duration in whole seconds
	pub length_seconds: Option<i32>,
	/// Sample rate in Hz
	pub sample_rate: Option<i32>,
	/// Channel count
	pub channels: Option<i32>,
	/// Embedded pictures, in file order
	pub pictures: Vec<PictureEntry<'static>>,
	/// `REPLAYGAIN_TRACK_GAIN` in dB
	pub song_gain: Option<f32>,
	/// `REPLAYGAIN_ALBUM_GAIN` in dB
	pub album_gain: Option<f32>,
}

impl AudioMetadata {
	/// Read the metadata of the file at `path`
	///
	/// The path is used both to open the file and for its extension.
	///
	/// # Errors
	///
	/// * `path` cannot be opened
	/// * See [`crate::read_metadata`]
	pub fn read_from_path<P>(path: P) -> Result<Self>
	where
		P: AsRef<Path>,
	{
		let path = path.as_ref();
		let reader = BufReader::new(File::open(path)?);

		Self::read_from(&path.to_string_lossy(), reader, ParseOptions::new())
	}

	/// Read the metadata from `reader`, using `filename` for its extension
	///
	/// # Errors
	///
	/// See [`crate::read_metadata`]
	pub fn read_from<R>(filename: &str, reader: R, options: ParseOptions) -> Result<Self>
	where
		R: Read + Seek,
	{
		let mut collector = MetadataCollector::new();
		crate::read_metadata(filename, reader, options, &LoftyBackend, &mut collector)?;

		Ok(collector.finish())
	}
}

/// A [`MetadataSink`] that builds an [`AudioMetadata`]
#[derive(Debug, Default)]
pub struct MetadataCollector {
	tags: PropertyMap,
	pictures: Vec<PictureEntry<'static>>,
	properties: [Option<i32>; 4],
}

impl MetadataCollector {
	/// Create an empty `MetadataCollector`
	pub fn new() -> Self {
		Self::default()
	}

	/// All tags received so far
	pub fn tags(&self) -> &PropertyMap {
		&self.tags
	}

	/// Build the final [`AudioMetadata`]
	pub fn finish(self) -> AudioMetadata {
		let tags = &self.tags;
		let first = |key: &str| tags.get_first(key).map(str::to_owned);
		let first_number = |keys: &[&str]| {
			keys.iter()
				.find_map(|key| tags.get_first(key))
				.and_then(|value| value.trim().parse::<u32>().ok())
		};

		let (disc_number, disc_total) = tags
			.get_first("DISCNUMBER")
			.map_or((None, None), parse_slashed_number);
		let (track_number, track_total) = tags
			.get_first("TRACKNUMBER")
			.map_or((None, None), parse_slashed_number);

		let [bitrate, length_seconds, sample_rate, channels] = self.properties;

		AudioMetadata {
			title: first("TITLE"),
			album: first("ALBUM"),
			artists: unique_values(tags, "ARTIST"),
			album_artists: unique_values(tags, "ALBUMARTIST"),
			composers: unique_values(tags, "COMPOSER"),
			genres: unique_values(tags, "GENRE"),
			disc_number,
			disc_total: disc_total.or_else(|| first_number(&["DISCTOTAL", "TOTALDISCS"])),
			track_number,
			track_total: track_total.or_else(|| first_number(&["TRACKTOTAL", "TOTALTRACKS"])),
			date: tags.get_first("DATE").and_then(parse_date),
			lyrics: first("LYRICS"),
			encoding: first("ENCODING").or_else(|| first("ENCODEDBY")),
			bitrate,
			length_seconds,
			sample_rate,
			channels,
			song_gain: tags.get_first("REPLAYGAIN_TRACK_GAIN").and_then(parse_gain),
			album_gain: tags.get_first("REPLAYGAIN_ALBUM_GAIN").and_then(parse_gain),
			pictures: self.pictures,
		}
	}
}

impl MetadataSink for MetadataCollector {
	fn put_tag(&mut self, key: &str, value: &str) {
		self.tags.insert(key, value);
	}

	fn put_picture(&mut self, picture_type: &str, mime_type: &str, data: &[u8]) {
		self.pictures.push(PictureEntry {
			picture_type: picture_type.to_owned().into(),
			mime_type: mime_type.to_owned().into(),
			data: data.to_vec().into(),
		});
	}

	fn put_audio_property(&mut self, property: AudioProperty, value: i32) {
		let index = match property {
			AudioProperty::Bitrate => 0,
			AudioProperty::LengthSeconds => 1,
			AudioProperty::SampleRate => 2,
			AudioProperty::Channels => 3,
		};

		self.properties[index] = Some(value);
	}
}

fn unique_values(tags: &PropertyMap, key: &str) -> Vec<String> {
	let mut values: Vec<String> = Vec::new();
	for value in tags.get(key).unwrap_or_default() {
		if !values.contains(value) {
			values.push(value.clone());
		}
	}

	values
}

// "N/M" or "N"
fn parse_slashed_number(text: &str) -> (Option<u32>, Option<u32>) {
	let parse = |s: &str| s.trim().parse::<u32>().ok();

	match text.split_once('/') {
		Some((number, total)) if !total.contains('/') => (parse(number), parse(total)),
		Some(_) => (None, None),
		None => (parse(text), None),
	}
}

fn parse_date(text: &str) -> Option<Timestamp> {
	match text.trim().parse::<Timestamp>() {
		Ok(timestamp) => Some(timestamp),
		Err(e) => {
			log::debug!("Ignoring invalid date {text:?}: {e}");
			None
		},
	}
}

// Replay gain values are written as "-6.50 dB"
fn parse_gain(text: &str) -> Option<f32> {
	let text = text.trim();
	let number = text
		.strip_suffix("dB")
		.or_else(|| text.strip_suffix("db"))
		.or_else(|| text.strip_suffix("DB"))
		.unwrap_or(text);

	number.trim().parse().ok()
}
