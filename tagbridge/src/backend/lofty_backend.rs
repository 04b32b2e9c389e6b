use super::{Backend, ParsedFile};
use crate::config::ParseOptions;
use crate::error::Result;
use crate::format::Format;
use crate::picture::{PictureEntry, picture_type_name};
use crate::properties::AudioProperties;
use crate::tag::PropertyMap;

use std::borrow::Cow;
use std::io::{Read, Seek};

use lofty::file::{AudioFile, FileType, TaggedFile, TaggedFileExt};
use lofty::flac::FlacFile;
use lofty::ogg::{OpusFile, SpeexFile, VorbisComments, VorbisFile};
use lofty::probe::Probe;
use lofty::tag::{Tag, TagType};

/// A [`Backend`] built on [`lofty`]
///
/// Formats are mapped onto lofty's [`FileType`]s, which are tried in order until one parses.
/// Formats lofty cannot read at all always produce invalid files, so a read of one of them
/// fails with no callbacks and `readMetadata` returns `false`. These are:
///
/// * Ogg FLAC
/// * TrueAudio
/// * ASF (`.wma`, `.asf`)
/// * MOD, S3M, IT and XM
/// * DSF and DSDIFF
///
/// Detection still names these formats, another [`Backend`] may be able to open them.
///
/// # Examples
///
/// ```rust,no_run
/// use tagbridge::backend::{Backend, LoftyBackend, ParsedFile};
/// use tagbridge::config::ParseOptions;
/// use tagbridge::format::Format;
///
/// # fn main() -> tagbridge::error::Result<()> {
/// let mut reader = std::fs::File::open("song.flac")?;
/// let file = LoftyBackend.open(Format::Flac, &mut reader, ParseOptions::new())?;
/// assert!(file.is_valid());
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct LoftyBackend;

impl LoftyBackend {
	/// The lofty file types able to parse `format`, in the order they are tried
	pub fn file_types(format: Format) -> &'static [FileType] {
		match format {
			Format::Mpeg => &[FileType::Mpeg, FileType::Aac],
			Format::OggVorbis => &[FileType::Vorbis],
			Format::Flac => &[FileType::Flac],
			Format::Mpc => &[FileType::Mpc],
			Format::WavPack => &[FileType::WavPack],
			Format::Speex => &[FileType::Speex],
			Format::Opus => &[FileType::Opus],
			Format::Mp4 => &[FileType::Mp4],
			Format::Aiff => &[FileType::Aiff],
			Format::Wav => &[FileType::Wav],
			Format::Ape => &[FileType::Ape],
			Format::OggFlac
			| Format::TrueAudio
			| Format::Asf
			| Format::Mod
			| Format::S3m
			| Format::It
			| Format::Xm
			| Format::Dsf
			| Format::Dsdiff => &[],
		}
	}
}

impl Backend for LoftyBackend {
	type File = LoftyFile;

	fn open<R>(&self, format: Format, reader: &mut R, options: ParseOptions) -> Result<Self::File>
	where
		R: Read + Seek,
	{
		let mut file = LoftyFile {
			inner: None,
			comments: None,
			read_properties: options.read_properties,
		};

		for &file_type in Self::file_types(format) {
			reader.rewind()?;

			match read_as(&mut *reader, file_type, options.to_lofty()) {
				Ok((tagged_file, comments)) => {
					file.inner = Some(tagged_file);
					file.comments = comments;
					break;
				},
				Err(e) => log::debug!("Unable to read content as {file_type:?}: {e}"),
			}
		}

		Ok(file)
	}
}

// Xiph formats are read through their concrete types, so the comments can be kept as stored.
// Converting them into a generic `Tag` renames fields and adds the vendor string as an item.
fn read_as<R>(
	reader: &mut R,
	file_type: FileType,
	options: lofty::config::ParseOptions,
) -> lofty::error::Result<(TaggedFile, Option<PropertyMap>)>
where
	R: Read + Seek,
{
	match file_type {
		FileType::Flac => {
			let file = <FlacFile as AudioFile>::read_from(reader, options)?;
			let comments = file.vorbis_comments().map(comment_map);
			Ok((file.into(), comments))
		},
		FileType::Vorbis => {
			let file = <VorbisFile as AudioFile>::read_from(reader, options)?;
			let comments = comment_map(file.vorbis_comments());
			Ok((file.into(), Some(comments)))
		},
		FileType::Opus => {
			let file = <OpusFile as AudioFile>::read_from(reader, options)?;
			let comments = comment_map(file.vorbis_comments());
			Ok((file.into(), Some(comments)))
		},
		FileType::Speex => {
			let file = <SpeexFile as AudioFile>::read_from(reader, options)?;
			let comments = comment_map(file.vorbis_comments());
			Ok((file.into(), Some(comments)))
		},
		_ => Probe::with_file_type(reader, file_type)
			.options(options)
			.read()
			.map(|file| (file, None)),
	}
}

fn comment_map(comments: &VorbisComments) -> PropertyMap {
	let mut map = PropertyMap::new();
	for (key, value) in comments.items() {
		map.insert(key.to_ascii_uppercase(), value);
	}

	map
}

/// A file read by [`LoftyBackend`]
pub struct LoftyFile {
	inner: Option<TaggedFile>,
	comments: Option<PropertyMap>,
	read_properties: bool,
}

impl LoftyFile {
	/// The underlying [`TaggedFile`], if the content could be parsed
	pub fn tagged_file(&self) -> Option<&TaggedFile> {
		self.inner.as_ref()
	}

	/// The [`FileType`] the content was parsed as
	pub fn file_type(&self) -> Option<FileType> {
		self.inner.as_ref().map(|file| file.file_type())
	}

	fn tag(&self) -> Option<&Tag> {
		let file = self.inner.as_ref()?;
		file.primary_tag().or_else(|| file.first_tag())
	}
}

impl ParsedFile for LoftyFile {
	fn is_valid(&self) -> bool {
		self.inner.is_some()
	}

	fn tags(&self) -> Option<PropertyMap> {
		let tag = self.tag()?;

		if let (TagType::VorbisComments, Some(comments)) = (tag.tag_type(), &self.comments) {
			return Some(comments.clone());
		}

		// Only the text items are needed, leave the pictures behind
		let mut text = Tag::new(tag.tag_type());
		for item in tag.items() {
			text.push_unchecked(item.clone());
		}

		let comments = VorbisComments::from(text);
		let mut map = comment_map(&comments);

		// The conversion moves the encoder software into the vendor string
		if !comments.vendor().is_empty() {
			map.insert("ENCODER", comments.vendor());
		}

		Some(map)
	}

	fn pictures(&self) -> Vec<PictureEntry<'_>> {
		let Some(tag) = self.tag() else {
			return Vec::new();
		};

		tag.pictures()
			.iter()
			.map(|picture| PictureEntry {
				picture_type: Cow::Borrowed(picture_type_name(picture.pic_type().as_u8())),
				mime_type: Cow::Borrowed(picture.mime_type().map_or("", |mime| mime.as_str())),
				data: Cow::Borrowed(picture.data()),
			})
			.collect()
	}

	fn audio_properties(&self) -> Option<AudioProperties> {
		if !self.read_properties {
			return None;
		}

		let properties = self.inner.as_ref()?.properties();
		Some(AudioProperties {
			bitrate: properties
				.audio_bitrate()
				.or(properties.overall_bitrate())
				.unwrap_or(0),
			length_seconds: properties.duration().as_secs(),
			sample_rate: properties.sample_rate().unwrap_or(0),
			channels: u32::from(properties.channels().unwrap_or(0)),
		})
	}
}
