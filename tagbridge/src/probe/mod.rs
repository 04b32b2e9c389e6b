//! Format detection
//!
//! Detection is a two stage cascade:
//!
//! 1. **Extension**: the file name's extension selects one or more candidate formats (see
//!    [`formats_for_extension`]). Each candidate is constructed and the first valid one wins.
//! 2. **Content**: if no candidate is valid, every format in [`SNIFF_ORDER`] is asked whether the
//!    content looks like it. The first format to claim the content is constructed, and its
//!    validity decides the outcome. Later formats are never tried.

mod mpeg;
pub mod signature;

use crate::backend::{Backend, ParsedFile};
use crate::config::ParseOptions;
use crate::error::Result;
use crate::format::{Format, extension_of, formats_for_extension};
use crate::macros::err;
use crate::marshal::{self, MetadataSink};

use std::io::{Read, Seek};

/// The order formats are asked to identify content
///
/// MPEG comes first, as its frame sync check is the most permissive and many formats can carry
/// a leading ID3v2 tag.
pub const SNIFF_ORDER: [Format; 16] = [
	Format::Mpeg,
	Format::OggVorbis,
	Format::OggFlac,
	Format::Flac,
	Format::Mpc,
	Format::WavPack,
	Format::Speex,
	Format::Opus,
	Format::TrueAudio,
	Format::Mp4,
	Format::Asf,
	Format::Aiff,
	Format::Wav,
	Format::Ape,
	Format::Dsf,
	Format::Dsdiff,
];

/// How a [`ParserHandle`]'s format was determined
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DetectionMethod {
	/// The file name's extension
	Extension,
	/// The content of the stream
	Content,
}

/// A format agnostic reader
///
/// # Examples
///
/// ```rust,no_run
/// use std::fs::File;
/// use std::io::BufReader;
/// use tagbridge::backend::LoftyBackend;
/// use tagbridge::config::{ParseOptions, ReadStyle};
/// use tagbridge::probe::{DetectionMethod, Probe};
///
/// # fn main() -> tagbridge::error::Result<()> {
/// let path = "path/to/my.flac";
/// let reader = BufReader::new(File::open(path)?);
///
/// let handle = Probe::new(path, reader)
/// 	.options(ParseOptions::new().read_style(ReadStyle::Accurate))
/// 	.read(&LoftyBackend)?;
///
/// if handle.method() == DetectionMethod::Content {
/// 	println!("{path} is actually a {} file", handle.format());
/// }
/// # Ok(()) }
/// ```
pub struct Probe<R> {
	filename: String,
	inner: R,
	options: Option<ParseOptions>,
}

impl<R> Probe<R>
where
	R: Read + Seek,
{
	/// Create a new `Probe`
	///
	/// `filename` is only used for its extension, it is never opened.
	///
	/// Before creating a `Probe`, consider wrapping the reader in a [`BufReader`](std::io::BufReader).
	pub fn new(filename: impl Into<String>, reader: R) -> Self {
		Self {
			filename: filename.into(),
			inner: reader,
			options: None,
		}
	}

	/// Set the [`ParseOptions`] handed to the [`Backend`]
	///
	/// # Examples
	///
	/// ```rust
	/// use std::io::Cursor;
	/// use tagbridge::config::ParseOptions;
	/// use tagbridge::probe::Probe;
	///
	/// let probe = Probe::new("song.mp3", Cursor::new(Vec::new()))
	/// 	.options(ParseOptions::new().read_properties(false));
	/// ```
	#[must_use]
	pub fn options(mut self, options: ParseOptions) -> Self {
		self.options = Some(options);
		self
	}

	/// The file name the extension is taken from
	pub fn filename(&self) -> &str {
		&self.filename
	}

	/// Extract the reader
	pub fn into_inner(self) -> R {
		self.inner
	}

	/// Attempt to construct a valid parser from the file name's extension
	///
	/// Returns `None` when the extension is missing, unknown, or none of its candidate formats
	/// produced a valid parser. Invalid candidates are discarded.
	///
	/// # Errors
	///
	/// * Failure to rewind the reader
	/// * Any error returned by [`Backend::open`]
	pub fn detect_by_extension<B>(&mut self, backend: &B) -> Result<Option<(Format, B::File)>>
	where
		B: Backend,
	{
		let Some(ext) = extension_of(&self.filename) else {
			log::debug!("No extension in {:?}", self.filename);
			return Ok(None);
		};

		let Some(candidates) = formats_for_extension(&ext) else {
			log::debug!("Unknown extension: {ext}");
			return Ok(None);
		};

		let options = self.options.unwrap_or_default();
		for &format in candidates {
			self.inner.rewind()?;

			let file = backend.open(format, &mut self.inner, options)?;
			if file.is_valid() {
				return Ok(Some((format, file)));
			}

			log::debug!("Extension {ext} suggested {format}, but the content is not valid");
		}

		Ok(None)
	}

	/// Attempt to construct a valid parser from the content of the stream
	///
	/// Formats are asked in [`SNIFF_ORDER`]. Returns `None` if no format claims the content.
	///
	/// # Errors
	///
	/// * [`ErrorKind::InvalidContent`](crate::error::ErrorKind::InvalidContent) if the claiming
	///   format fails to produce a valid parser
	/// * Failure to rewind the reader
	/// * Any error returned by [`Backend::is_supported`] or [`Backend::open`]
	pub fn detect_by_content<B>(&mut self, backend: &B) -> Result<Option<(Format, B::File)>>
	where
		B: Backend,
	{
		for format in SNIFF_ORDER {
			self.inner.rewind()?;
			if !backend.is_supported(format, &mut self.inner)? {
				continue;
			}

			log::debug!("Content looks like {format}");

			self.inner.rewind()?;
			let file = backend.open(format, &mut self.inner, self.options.unwrap_or_default())?;
			if file.is_valid() {
				return Ok(Some((format, file)));
			}

			err!(InvalidContent(format));
		}

		Ok(None)
	}

	/// Run the full detection cascade
	///
	/// # Errors
	///
	/// * [`ErrorKind::UnknownFormat`](crate::error::ErrorKind::UnknownFormat) if neither stage
	///   produced a parser
	/// * See [`Probe::detect_by_extension`] and [`Probe::detect_by_content`]
	pub fn read<B>(mut self, backend: &B) -> Result<ParserHandle<B::File, R>>
	where
		B: Backend,
	{
		if let Some((format, file)) = self.detect_by_extension(backend)? {
			return Ok(ParserHandle {
				format,
				method: DetectionMethod::Extension,
				file,
				stream: self.inner,
			});
		}

		match self.detect_by_content(backend)? {
			Some((format, file)) => Ok(ParserHandle {
				format,
				method: DetectionMethod::Content,
				file,
				stream: self.inner,
			}),
			None => err!(UnknownFormat),
		}
	}
}

/// A validated parser, along with the stream it was built from
///
/// The stream stays open for as long as the handle exists.
#[derive(Debug)]
pub struct ParserHandle<F, R> {
	format: Format,
	method: DetectionMethod,
	file: F,
	stream: R,
}

impl<F, R> ParserHandle<F, R>
where
	F: ParsedFile,
{
	/// The detected format
	pub fn format(&self) -> Format {
		self.format
	}

	/// How the format was detected
	pub fn method(&self) -> DetectionMethod {
		self.method
	}

	/// The parsed file
	pub fn file(&self) -> &F {
		&self.file
	}

	/// Emit the file's tags, pictures and audio properties to `sink`
	///
	/// See [`marshal::emit`].
	pub fn emit<S>(&self, sink: &mut S)
	where
		S: MetadataSink + ?Sized,
	{
		marshal::emit(&self.file, sink);
	}

	/// Consume the handle, returning the parsed file and the stream
	pub fn into_parts(self) -> (F, R) {
		(self.file, self.stream)
	}
}
