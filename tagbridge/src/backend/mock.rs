use super::{Backend, ParsedFile};
use crate::config::ParseOptions;
use crate::error::Result;
use crate::format::Format;
use crate::marshal::MetadataSink;
use crate::picture::PictureEntry;
use crate::properties::{AudioProperties, AudioProperty};
use crate::tag::PropertyMap;

use std::cell::RefCell;
use std::io::{Read, Seek, SeekFrom};

#[derive(Debug, Clone, Default)]
pub(crate) struct MockFile {
	pub format: Option<Format>,
	pub valid: bool,
	pub tags: Option<PropertyMap>,
	pub pictures: Vec<PictureEntry<'static>>,
	pub properties: Option<AudioProperties>,
}

impl ParsedFile for MockFile {
	fn is_valid(&self) -> bool {
		self.valid
	}

	fn tags(&self) -> Option<PropertyMap> {
		self.tags.clone()
	}

	fn pictures(&self) -> Vec<PictureEntry<'_>> {
		self.pictures.clone()
	}

	fn audio_properties(&self) -> Option<AudioProperties> {
		self.properties
	}
}

/// A backend that records every call made to it
#[derive(Default)]
pub(crate) struct MockBackend {
	/// Formats that construct valid files
	pub valid: Vec<Format>,
	/// Formats whose sniff predicate matches
	pub supported: Vec<Format>,
	pub opened: RefCell<Vec<Format>>,
	pub sniffed: RefCell<Vec<Format>>,
	/// The stream position observed by each `open`/`is_supported` call
	pub positions: RefCell<Vec<u64>>,
}

impl MockBackend {
	pub fn new(valid: &[Format], supported: &[Format]) -> Self {
		Self {
			valid: valid.to_vec(),
			supported: supported.to_vec(),
			..Self::default()
		}
	}
}

impl Backend for MockBackend {
	type File = MockFile;

	fn open<R>(&self, format: Format, reader: &mut R, _: ParseOptions) -> Result<Self::File>
	where
		R: Read + Seek,
	{
		self.positions.borrow_mut().push(reader.stream_position()?);
		self.opened.borrow_mut().push(format);

		// Leave the stream somewhere else, the caller has to rewind
		reader.seek(SeekFrom::End(0))?;

		Ok(MockFile {
			format: Some(format),
			valid: self.valid.contains(&format),
			..MockFile::default()
		})
	}

	fn is_supported<R>(&self, format: Format, reader: &mut R) -> Result<bool>
	where
		R: Read + Seek,
	{
		self.positions.borrow_mut().push(reader.stream_position()?);
		self.sniffed.borrow_mut().push(format);

		reader.seek(SeekFrom::End(0))?;

		Ok(self.supported.contains(&format))
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
	Tag(String, String),
	Picture(PictureEntry<'static>),
	Property(AudioProperty, i32),
}

impl Event {
	pub fn tag(key: &str, value: &str) -> Self {
		Event::Tag(key.to_string(), value.to_string())
	}
}

#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
	pub events: Vec<Event>,
}

impl MetadataSink for RecordingSink {
	fn put_tag(&mut self, key: &str, value: &str) {
		self.events.push(Event::tag(key, value));
	}

	fn put_picture(&mut self, picture_type: &str, mime_type: &str, data: &[u8]) {
		self.events.push(Event::Picture(
			PictureEntry {
				picture_type: picture_type.into(),
				mime_type: mime_type.into(),
				data: data.into(),
			}
			.into_owned(),
		));
	}

	fn put_audio_property(&mut self, property: AudioProperty, value: i32) {
		self.events.push(Event::Property(property, value));
	}
}
