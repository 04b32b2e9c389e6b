//! The metadata library seam
//!
//! Detection and marshaling never look at tag schemas or bitstreams themselves. Everything
//! format specific is asked of a [`Backend`], which constructs [`ParsedFile`]s for a given
//! [`Format`].
//!
//! The default backend is [`LoftyBackend`].

mod lofty_backend;
#[cfg(test)]
pub(crate) mod mock;

pub use lofty_backend::{LoftyBackend, LoftyFile};

use crate::config::ParseOptions;
use crate::error::Result;
use crate::format::Format;
use crate::picture::PictureEntry;
use crate::probe::signature;
use crate::properties::AudioProperties;
use crate::tag::PropertyMap;

use std::io::{Read, Seek};

/// Constructs parsers for formats
pub trait Backend {
	/// The parser type produced by [`Backend::open`]
	type File: ParsedFile;

	/// Construct a parser for `format` over `reader`
	///
	/// The reader is positioned at the start of the stream.
	///
	/// # Errors
	///
	/// Malformed content is **not** an error, it should produce a file for which
	/// [`ParsedFile::is_valid`] returns `false`. Errors are reserved for failures of the stream
	/// itself.
	fn open<R>(&self, format: Format, reader: &mut R, options: ParseOptions) -> Result<Self::File>
	where
		R: Read + Seek;

	/// Check whether the content of `reader` looks like `format`
	///
	/// This is a cheap signature check, no parser is constructed. The default implementation
	/// defers to [`signature::is_supported`].
	///
	/// # Errors
	///
	/// * Failure to read from `reader`
	fn is_supported<R>(&self, format: Format, reader: &mut R) -> Result<bool>
	where
		R: Read + Seek,
	{
		signature::is_supported(format, reader)
	}
}

/// A constructed parser
pub trait ParsedFile {
	/// Whether the content was successfully parsed as the requested format
	fn is_valid(&self) -> bool;

	/// The tags of the file
	///
	/// Returns `None` if the format (or this particular file) has no tag support.
	fn tags(&self) -> Option<PropertyMap>;

	/// The embedded pictures of the file
	///
	/// Only consulted when [`ParsedFile::tags`] returns `Some`.
	fn pictures(&self) -> Vec<PictureEntry<'_>>;

	/// The audio properties of the file
	///
	/// Returns `None` if they were not requested, or could not be determined.
	fn audio_properties(&self) -> Option<AudioProperties>;
}
