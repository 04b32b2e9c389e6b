//! Emission of parsed results to a callback target
//!
//! A [`MetadataSink`] receives every tag, picture and audio property of a [`ParsedFile`] through
//! [`emit`]. The JNI layer implements the sink by forwarding to Java methods, and
//! [`MetadataCollector`](crate::metadata::MetadataCollector) implements it to build an
//! [`AudioMetadata`](crate::metadata::AudioMetadata) record.

use crate::backend::ParsedFile;
use crate::properties::AudioProperty;

/// A receiver of metadata callbacks
///
/// Callbacks are made in the following order:
///
/// 1. [`put_tag`](MetadataSink::put_tag) for every (key, value) pair
/// 2. [`put_picture`](MetadataSink::put_picture) for every picture
/// 3. [`put_audio_property`](MetadataSink::put_audio_property) for each of [`AudioProperty::ALL`]
pub trait MetadataSink {
	/// Receive a single tag value
	///
	/// Keys with multiple values are delivered once per value.
	fn put_tag(&mut self, key: &str, value: &str);

	/// Receive an embedded picture
	fn put_picture(&mut self, picture_type: &str, mime_type: &str, data: &[u8]);

	/// Receive an audio property
	fn put_audio_property(&mut self, property: AudioProperty, value: i32);
}

impl<S> MetadataSink for &mut S
where
	S: MetadataSink + ?Sized,
{
	fn put_tag(&mut self, key: &str, value: &str) {
		(**self).put_tag(key, value);
	}

	fn put_picture(&mut self, picture_type: &str, mime_type: &str, data: &[u8]) {
		(**self).put_picture(picture_type, mime_type, data);
	}

	fn put_audio_property(&mut self, property: AudioProperty, value: i32) {
		(**self).put_audio_property(property, value);
	}
}

/// Emit the contents of `file` to `sink`
///
/// * Tags and pictures are only emitted if the file supports tags
/// * Audio properties are emitted as exactly four callbacks, or not at all
///
/// Missing tags, pictures or properties are not errors.
pub fn emit<F, S>(file: &F, sink: &mut S)
where
	F: ParsedFile + ?Sized,
	S: MetadataSink + ?Sized,
{
	if let Some(tags) = file.tags() {
		log::debug!("Emitting {} tag keys", tags.len());
		for (key, value) in tags.pairs() {
			sink.put_tag(key, value);
		}

		for picture in file.pictures() {
			sink.put_picture(&picture.picture_type, &picture.mime_type, &picture.data);
		}
	}

	if let Some(properties) = file.audio_properties() {
		for property in AudioProperty::ALL {
			sink.put_audio_property(property, properties.get(property));
		}
	}
}
