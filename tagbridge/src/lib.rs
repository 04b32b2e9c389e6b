//! Detect audio formats and hand their metadata to a foreign runtime.
//!
//! `tagbridge` sits between a JVM application and a metadata library. Given a file name and an
//! open stream, it:
//!
//! 1. picks a parser from the file name's extension ([`format::formats_for_extension`]),
//! 2. falls back to asking every format whether it recognizes the content
//!    ([`probe::signature`]),
//! 3. emits the tags, pictures and audio properties of the parsed file to a callback object
//!    ([`marshal::MetadataSink`]).
//!
//! Parsing itself is done by a [`backend::Backend`], [`backend::LoftyBackend`] by default.
//!
//! # Examples
//!
//! ## Reading into an aggregate
//!
//! ```rust,no_run
//! # fn main() -> tagbridge::error::Result<()> {
//! use tagbridge::metadata::AudioMetadata;
//!
//! let metadata = AudioMetadata::read_from_path("test.mp3")?;
//! println!("{:?}: {:?}s", metadata.title, metadata.length_seconds);
//! # Ok(()) }
//! ```
//!
//! ## Receiving callbacks
//!
//! ```rust,no_run
//! # fn main() -> tagbridge::error::Result<()> {
//! use tagbridge::backend::LoftyBackend;
//! use tagbridge::config::ParseOptions;
//! use tagbridge::marshal::MetadataSink;
//! use tagbridge::properties::AudioProperty;
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! struct Printer;
//!
//! impl MetadataSink for Printer {
//! 	fn put_tag(&mut self, key: &str, value: &str) {
//! 		println!("{key}={value}");
//! 	}
//!
//! 	fn put_picture(&mut self, picture_type: &str, mime_type: &str, data: &[u8]) {
//! 		println!("{picture_type} ({mime_type}, {} bytes)", data.len());
//! 	}
//!
//! 	fn put_audio_property(&mut self, property: AudioProperty, value: i32) {
//! 		println!("{property}: {value}");
//! 	}
//! }
//!
//! let path = "test.opus";
//! let reader = BufReader::new(File::open(path)?);
//!
//! tagbridge::read_metadata(path, reader, ParseOptions::new(), &LoftyBackend, &mut Printer)?;
//! # Ok(()) }
//! ```
//!
//! # JNI
//!
//! With the `jni` feature (enabled by default), the crate builds as a `cdylib` exporting
//! `JNI_OnLoad`, `JNI_OnUnload`, and the native method
//! `io.github.tagbridge.AudioMetadataParser.readMetadata(String, int): boolean`. See [`jni`].
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod backend;
pub mod config;
pub mod error;
pub mod format;
#[cfg(all(feature = "jni", unix))]
pub mod jni;
pub(crate) mod macros;
pub mod marshal;
pub mod metadata;
pub mod picture;
pub mod probe;
pub mod properties;
pub mod tag;

use crate::backend::Backend;
use crate::config::ParseOptions;
use crate::error::Result;
use crate::marshal::MetadataSink;
use crate::probe::Probe;

use std::io::{Read, Seek};

/// Detect the format of `stream` and emit its metadata to `sink`
///
/// `filename` is only used for its extension. The stream is closed (dropped) before returning,
/// on every path.
///
/// # Errors
///
/// * [`ErrorKind::UnknownFormat`](error::ErrorKind::UnknownFormat) if no valid parser could be
///   constructed, see [`BridgeError::is_no_match`](error::BridgeError::is_no_match)
/// * See [`Probe::read`]
///
/// Nothing is emitted to `sink` on error.
pub fn read_metadata<R, B, S>(
	filename: &str,
	stream: R,
	options: ParseOptions,
	backend: &B,
	sink: &mut S,
) -> Result<()>
where
	R: Read + Seek,
	B: Backend,
	S: MetadataSink + ?Sized,
{
	let handle = Probe::new(filename, stream).options(options).read(backend)?;
	log::debug!(
		"Reading {filename:?} as {} (detected by {:?})",
		handle.format(),
		handle.method()
	);

	handle.emit(sink);
	Ok(())
}
