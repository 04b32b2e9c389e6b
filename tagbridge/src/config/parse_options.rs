use lofty::config::ParsingMode;

/// How much effort to spend reading audio properties
///
/// Mirrors the read styles of classic tagging libraries. The wrapped library has no notion
/// of property accuracy, so each style is mapped onto a [`ParsingMode`], see [`ReadStyle::parsing_mode`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ReadStyle {
	/// Read as little of the file as possible, tolerating malformed input
	Fast,
	/// The default read style
	#[default]
	Average,
	/// Read as much of the file as needed for accurate values
	Accurate,
}

impl ReadStyle {
	/// The [`ParsingMode`] used when handing this read style to the wrapped library
	///
	/// # Examples
	///
	/// ```rust
	/// use lofty::config::ParsingMode;
	/// use tagbridge::config::ReadStyle;
	///
	/// assert_eq!(ReadStyle::Fast.parsing_mode(), ParsingMode::Relaxed);
	/// assert_eq!(ReadStyle::Accurate.parsing_mode(), ParsingMode::BestAttempt);
	/// ```
	pub fn parsing_mode(self) -> ParsingMode {
		match self {
			ReadStyle::Fast => ParsingMode::Relaxed,
			ReadStyle::Average | ReadStyle::Accurate => ParsingMode::BestAttempt,
		}
	}
}

/// Options to control how a file is detected and parsed
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) read_properties: bool,
	pub(crate) read_style: ReadStyle,
	pub(crate) read_cover_art: bool,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	read_properties: true,
	/// 	read_style: ReadStyle::Average,
	/// 	read_cover_art: true,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagbridge::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			read_properties: true,
			read_style: ReadStyle::Average,
			read_cover_art: true,
		}
	}

	/// Whether or not to read the audio properties
	///
	/// When disabled, no audio property callbacks are emitted.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagbridge::config::ParseOptions;
	///
	/// // By default, `read_properties` is enabled. Here, we don't want to read them.
	/// let parsing_options = ParseOptions::new().read_properties(false);
	/// ```
	pub fn read_properties(&mut self, read_properties: bool) -> Self {
		self.read_properties = read_properties;
		*self
	}

	/// The [`ReadStyle`] to use
	///
	/// # Examples
	///
	/// ```rust
	/// use tagbridge::config::{ParseOptions, ReadStyle};
	///
	/// let parsing_options = ParseOptions::new().read_style(ReadStyle::Accurate);
	/// ```
	pub fn read_style(&mut self, read_style: ReadStyle) -> Self {
		self.read_style = read_style;
		*self
	}

	/// Whether or not to read cover art
	///
	/// # Examples
	///
	/// ```rust
	/// use tagbridge::config::ParseOptions;
	///
	/// // Only the text tags are needed
	/// let parsing_options = ParseOptions::new().read_cover_art(false);
	/// ```
	pub fn read_cover_art(&mut self, read_cover_art: bool) -> Self {
		self.read_cover_art = read_cover_art;
		*self
	}

	/// Converts these options into the wrapped library's own [`ParseOptions`](lofty::config::ParseOptions)
	///
	/// Properties are always read, since MPEG streams are only checked for frames while reading
	/// them. `read_properties` is applied when they are reported instead.
	pub(crate) fn to_lofty(self) -> lofty::config::ParseOptions {
		lofty::config::ParseOptions::new()
			.read_properties(true)
			.read_cover_art(self.read_cover_art)
			.parsing_mode(self.read_style.parsing_mode())
	}
}
