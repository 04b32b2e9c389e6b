//! Contains the errors that can arise within tagbridge
//!
//! The primary error is [`BridgeError`]. The type of error is determined by [`ErrorKind`].
//!
//! Note that most detection failures are *not* errors. A parser that fails validation is
//! discarded and detection moves on, see [`Probe`](crate::probe::Probe).

use crate::format::Format;

use std::fmt::{Debug, Display, Formatter};

use lofty::error::LoftyError;

/// Alias for `Result<T, BridgeError>`
pub type Result<T> = std::result::Result<T, BridgeError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// Neither the extension nor the content matched a format that could be validated
	UnknownFormat,
	/// A format was sniffed from the content, but the constructed parser failed validation
	InvalidContent(Format),

	// Conversions for external errors
	/// Errors that arise within the wrapped metadata library
	Backend(LoftyError),
	/// Errors that arise while talking to the JVM
	#[cfg(feature = "jni")]
	Jni(jni::errors::Error),
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// Errors that could occur within tagbridge
pub struct BridgeError {
	pub(crate) kind: ErrorKind,
}

impl BridgeError {
	/// Create a `BridgeError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagbridge::error::{BridgeError, ErrorKind};
	///
	/// let unknown_format = BridgeError::new(ErrorKind::UnknownFormat);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagbridge::error::{BridgeError, ErrorKind};
	///
	/// let unknown_format = BridgeError::new(ErrorKind::UnknownFormat);
	/// if let ErrorKind::UnknownFormat = unknown_format.kind() {
	/// 	println!("What's the format?");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}

	/// Whether this error means no metadata could be extracted from the content
	///
	/// This is the "no match" outcome of detection, as opposed to a failing stream.
	pub fn is_no_match(&self) -> bool {
		matches!(
			self.kind,
			ErrorKind::UnknownFormat | ErrorKind::InvalidContent(_)
		)
	}
}

impl std::error::Error for BridgeError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::Backend(ref err) => Some(err),
			#[cfg(feature = "jni")]
			ErrorKind::Jni(ref err) => Some(err),
			ErrorKind::Io(ref err) => Some(err),
			_ => None,
		}
	}
}

impl From<LoftyError> for BridgeError {
	fn from(input: LoftyError) -> Self {
		Self {
			kind: ErrorKind::Backend(input),
		}
	}
}

#[cfg(feature = "jni")]
impl From<jni::errors::Error> for BridgeError {
	fn from(input: jni::errors::Error) -> Self {
		Self {
			kind: ErrorKind::Jni(input),
		}
	}
}

impl From<std::io::Error> for BridgeError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl Debug for BridgeError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl Display for BridgeError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			ErrorKind::UnknownFormat => write!(
				f,
				"No format could be determined from the provided file name or content"
			),
			ErrorKind::InvalidContent(format) => write!(
				f,
				"Content looked like {format}, but could not be parsed as such"
			),

			// Conversions
			ErrorKind::Backend(ref err) => write!(f, "{err}"),
			#[cfg(feature = "jni")]
			ErrorKind::Jni(ref err) => write!(f, "JNI: {err}"),
			ErrorKind::Io(ref err) => write!(f, "{err}"),
		}
	}
}
