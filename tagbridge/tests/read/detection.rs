use crate::util;

use std::io::BufReader;

use tagbridge::backend::LoftyBackend;
use tagbridge::config::ParseOptions;
use tagbridge::error::ErrorKind;
use tagbridge::format::Format;
use tagbridge::probe::{DetectionMethod, Probe};

fn detect(filename: &str, content: &[u8]) -> (Format, DetectionMethod) {
	let reader = BufReader::new(util::temp_file(content));
	let handle = Probe::new(filename, reader)
		.options(ParseOptions::new())
		.read(&LoftyBackend)
		.unwrap();

	(handle.format(), handle.method())
}

#[test_log::test]
fn by_extension() {
	let content = util::flac().comment("TITLE", "Song").build();
	assert_eq!(
		detect("song.FLAC", &content),
		(Format::Flac, DetectionMethod::Extension)
	);
}

#[test_log::test]
fn missing_extension() {
	let content = util::flac().comment("TITLE", "Song").build();
	assert_eq!(
		detect("song", &content),
		(Format::Flac, DetectionMethod::Content)
	);

	let (result, sink) = util::read("song", &content, ParseOptions::new());
	result.unwrap();
	assert!(sink.tags().contains(&("TITLE", "Song")));
}

#[test_log::test]
fn misnamed_file() {
	let content = util::flac().build();
	assert_eq!(
		detect("song.mp3", &content),
		(Format::Flac, DetectionMethod::Content)
	);
	assert_eq!(
		detect("song.wav", &content),
		(Format::Flac, DetectionMethod::Content)
	);
}

#[test_log::test]
fn id3v2_prefix() {
	let content = util::flac().comment("TITLE", "Song").id3v2().build();
	assert_eq!(
		detect("song.bin", &content),
		(Format::Flac, DetectionMethod::Content)
	);

	let (result, sink) = util::read("song.bin", &content, ParseOptions::new());
	result.unwrap();
	assert!(sink.tags().contains(&("TITLE", "Song")));
}

#[test_log::test]
fn unknown_content() {
	let content = b"definitely not audio ".repeat(200);

	for filename in ["junk", "junk.mp3", "junk.flac", "junk.ogg", "junk.mod"] {
		let (result, sink) = util::read(filename, &content, ParseOptions::new());

		let err = result.unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::UnknownFormat));
		assert!(err.is_no_match());
		assert!(sink.events.is_empty());
	}
}

#[test_log::test]
fn empty_stream() {
	let (result, sink) = util::read("empty.flac", &[], ParseOptions::new());

	assert!(result.unwrap_err().is_no_match());
	assert!(sink.events.is_empty());
}

#[test_log::test]
fn unreadable_formats_report_nothing() {
	let mut asf = vec![
		0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE,
		0x6C,
	];
	asf.resize(4096, 0);

	let mut dsf = b"DSD ".to_vec();
	dsf.resize(4096, 0);

	for (filename, content, format) in [
		("song.wma", &asf, Format::Asf),
		("song", &asf, Format::Asf),
		("song.dsf", &dsf, Format::Dsf),
	] {
		let (result, sink) = util::read(filename, content, ParseOptions::new());

		let err = result.unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::InvalidContent(f) if *f == format));
		assert!(err.is_no_match());
		assert!(sink.events.is_empty());
	}
}
