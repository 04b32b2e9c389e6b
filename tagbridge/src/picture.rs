//! Normalized embedded pictures

use std::borrow::Cow;

// Conventional names for the ID3v2/FLAC picture type codes, indexed by code
const PICTURE_TYPE_NAMES: [&str; 21] = [
	"Other",
	"File Icon",
	"Other File Icon",
	"Front Cover",
	"Back Cover",
	"Leaflet Page",
	"Media",
	"Lead Artist",
	"Artist",
	"Conductor",
	"Band",
	"Composer",
	"Lyricist",
	"Recording Location",
	"During Recording",
	"During Performance",
	"Movie Screen Capture",
	"Coloured Fish",
	"Illustration",
	"Band Logo",
	"Publisher Logo",
];

/// Get the conventional name of a picture type code
///
/// Codes outside of the defined range are reported as `"Other"`.
///
/// # Examples
///
/// ```rust
/// use tagbridge::picture::picture_type_name;
///
/// assert_eq!(picture_type_name(3), "Front Cover");
/// assert_eq!(picture_type_name(200), "Other");
/// ```
pub fn picture_type_name(code: u8) -> &'static str {
	PICTURE_TYPE_NAMES
		.get(usize::from(code))
		.copied()
		.unwrap_or(PICTURE_TYPE_NAMES[0])
}

/// A format-independent embedded picture
///
/// This is what gets handed to [`MetadataSink::put_picture`](crate::marshal::MetadataSink::put_picture).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureEntry<'a> {
	/// The picture type name, see [`picture_type_name`]
	pub picture_type: Cow<'a, str>,
	/// The MIME type, empty if unknown
	pub mime_type: Cow<'a, str>,
	/// The raw picture data
	pub data: Cow<'a, [u8]>,
}

impl PictureEntry<'_> {
	/// Clone the borrowed contents, detaching the entry from its source
	pub fn into_owned(self) -> PictureEntry<'static> {
		PictureEntry {
			picture_type: Cow::Owned(self.picture_type.into_owned()),
			mime_type: Cow::Owned(self.mime_type.into_owned()),
			data: Cow::Owned(self.data.into_owned()),
		}
	}
}
