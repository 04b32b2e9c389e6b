use crate::util;

use std::io::BufReader;

use tagbridge::backend::LoftyBackend;
use tagbridge::config::ParseOptions;
use tagbridge::format::Format;
use tagbridge::probe::{DetectionMethod, Probe};
use tagbridge::properties::AudioProperty;

fn tagged_vorbis() -> Vec<u8> {
	util::ogg_vorbis(&[("ARTIST", "Test"), ("TITLE", "Song")])
}

fn detect(filename: &str, content: &[u8]) -> (Format, DetectionMethod) {
	let reader = BufReader::new(util::temp_file(content));
	let handle = Probe::new(filename, reader)
		.options(ParseOptions::new())
		.read(&LoftyBackend)
		.unwrap();

	(handle.format(), handle.method())
}

#[test_log::test]
fn oga_holding_vorbis() {
	// `.oga` is tried as Ogg FLAC first, which the backend cannot open
	assert_eq!(
		detect("song.oga", &tagged_vorbis()),
		(Format::OggVorbis, DetectionMethod::Extension)
	);

	let (result, sink) = util::read("song.oga", &tagged_vorbis(), ParseOptions::new());
	result.unwrap();

	assert_eq!(sink.tags(), [("ARTIST", "Test"), ("TITLE", "Song")]);
	assert_eq!(
		sink.properties(),
		[
			(AudioProperty::Bitrate, 128),
			(AudioProperty::LengthSeconds, 10),
			(AudioProperty::SampleRate, 44100),
			(AudioProperty::Channels, 2),
		]
	);
}

#[test_log::test]
fn detected_by_content() {
	let content = tagged_vorbis();

	assert_eq!(
		detect("song", &content),
		(Format::OggVorbis, DetectionMethod::Content)
	);

	let (result, sink) = util::read("song", &content, ParseOptions::new());
	result.unwrap();
	assert!(sink.tags().contains(&("TITLE", "Song")));
}

#[test_log::test]
fn comments_as_stored() {
	let content = util::ogg_vorbis(&[("Artist", "Test"), ("COMMENT", "a=b")]);

	let (result, sink) = util::read("song.ogg", &content, ParseOptions::new());
	result.unwrap();

	// Keys are reported upper case, values untouched, the vendor is not a field
	assert_eq!(sink.tags(), [("ARTIST", "Test"), ("COMMENT", "a=b")]);
}
