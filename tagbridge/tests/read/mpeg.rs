use crate::util;

use std::io::BufReader;

use tagbridge::backend::LoftyBackend;
use tagbridge::config::ParseOptions;
use tagbridge::format::Format;
use tagbridge::probe::{DetectionMethod, Probe};
use tagbridge::properties::AudioProperty;

// 192 frames of 417 bytes at 128 kbps
const FRAME_COUNT: usize = 192;

fn tagged_mp3() -> Vec<u8> {
	let tag = util::id3v2(&[(b"TIT2", "Song"), (b"TPE1", "Test")]);
	util::mpeg(&tag, FRAME_COUNT)
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
fn id3v2_and_properties() {
	for filename in ["song.mp3", "song"] {
		let (result, sink) = util::read(filename, &tagged_mp3(), ParseOptions::new());
		result.unwrap();

		let mut tags = sink.tags();
		tags.sort_unstable();
		assert_eq!(tags, [("ARTIST", "Test"), ("TITLE", "Song")]);

		assert!(sink.pictures().is_empty());
		assert_eq!(
			sink.properties(),
			[
				(AudioProperty::Bitrate, 128),
				(AudioProperty::LengthSeconds, 5),
				(AudioProperty::SampleRate, 44100),
				(AudioProperty::Channels, 2),
			]
		);
	}
}

#[test_log::test]
fn detection() {
	let content = tagged_mp3();

	assert_eq!(
		detect("song.mp3", &content),
		(Format::Mpeg, DetectionMethod::Extension)
	);
	assert_eq!(
		detect("song", &content),
		(Format::Mpeg, DetectionMethod::Content)
	);
}

#[test_log::test]
fn untagged() {
	let content = util::mpeg(&[], FRAME_COUNT);
	let (result, sink) = util::read("song.mp3", &content, ParseOptions::new());
	result.unwrap();

	assert!(sink.tags().is_empty());
	assert_eq!(sink.properties().len(), 4);
}
