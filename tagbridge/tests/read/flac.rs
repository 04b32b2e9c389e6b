use crate::util::{self, Event};

use std::io::Write as _;

use tagbridge::config::ParseOptions;
use tagbridge::metadata::AudioMetadata;
use tagbridge::properties::AudioProperty;

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn tagged_flac() -> Vec<u8> {
	util::flac()
		.comment("ARTIST", "Test")
		.comment("TITLE", "Song")
		.picture(3, "image/png", &PNG_MAGIC)
		.build()
}

#[test_log::test]
fn callbacks_in_order() {
	let (result, sink) = util::read("song.flac", &tagged_flac(), ParseOptions::new());
	result.unwrap();

	let mut tags = sink.tags();
	tags.sort_unstable();
	assert_eq!(tags, [("ARTIST", "Test"), ("TITLE", "Song")]);

	assert_eq!(
		sink.pictures(),
		[&Event::Picture(
			String::from("Front Cover"),
			String::from("image/png"),
			PNG_MAGIC.to_vec()
		)]
	);

	assert_eq!(
		sink.properties(),
		[
			(AudioProperty::Bitrate, 16),
			(AudioProperty::LengthSeconds, 10),
			(AudioProperty::SampleRate, 44100),
			(AudioProperty::Channels, 2),
		]
	);

	// Tags, then pictures, then properties
	let first_picture = sink
		.events
		.iter()
		.position(|event| matches!(event, Event::Picture(..)))
		.unwrap();
	assert!(sink.events[..first_picture]
		.iter()
		.all(|event| matches!(event, Event::Tag(..))));
	assert!(sink.events[first_picture + 1..]
		.iter()
		.all(|event| matches!(event, Event::Property(..))));
}

#[test_log::test]
fn single_comment() {
	let content = util::flac().comment("ARTIST", "Test").build();

	let (result, sink) = util::read("song.flac", &content, ParseOptions::new());
	result.unwrap();

	// The vendor string is not a field
	assert_eq!(sink.tags(), [("ARTIST", "Test")]);
	assert_eq!(sink.properties().len(), 4);
}

#[test_log::test]
fn comments_are_not_renamed() {
	let content = util::flac()
		.comment("encoder", "LAME 3.100")
		.comment("MY_CUSTOM_FIELD", "yes")
		.build();

	let (result, sink) = util::read("song.flac", &content, ParseOptions::new());
	result.unwrap();

	assert_eq!(
		sink.tags(),
		[("ENCODER", "LAME 3.100"), ("MY_CUSTOM_FIELD", "yes")]
	);
}

#[test_log::test]
fn no_properties() {
	let (result, sink) = util::read(
		"song.flac",
		&tagged_flac(),
		ParseOptions::new().read_properties(false),
	);
	result.unwrap();

	assert_eq!(sink.tags().len(), 2);
	assert_eq!(sink.pictures().len(), 1);
	assert!(sink.properties().is_empty());
}

#[test_log::test]
fn no_cover_art() {
	let (result, sink) = util::read(
		"song.flac",
		&tagged_flac(),
		ParseOptions::new().read_cover_art(false),
	);
	result.unwrap();

	assert_eq!(sink.tags().len(), 2);
	assert!(sink.pictures().is_empty());
	assert_eq!(sink.properties().len(), 4);
}

#[test_log::test]
fn repeated_keys() {
	let content = util::flac()
		.comment("ARTIST", "Foo")
		.comment("ARTIST", "Bar")
		.build();

	let (result, sink) = util::read("song.flac", &content, ParseOptions::new());
	result.unwrap();

	let mut tags = sink.tags();
	tags.sort_unstable();
	assert_eq!(tags, [("ARTIST", "Bar"), ("ARTIST", "Foo")]);
}

#[test_log::test]
fn aggregate() {
	let mut file = tempfile::Builder::new()
		.suffix(".flac")
		.tempfile()
		.unwrap();
	file.write_all(&tagged_flac()).unwrap();
	file.flush().unwrap();

	let metadata = AudioMetadata::read_from_path(file.path()).unwrap();

	assert_eq!(metadata.title.as_deref(), Some("Song"));
	assert_eq!(metadata.artists, [String::from("Test")]);
	assert!(metadata.album.is_none());

	assert_eq!(metadata.bitrate, Some(16));
	assert_eq!(metadata.length_seconds, Some(10));
	assert_eq!(metadata.sample_rate, Some(44100));
	assert_eq!(metadata.channels, Some(2));

	assert_eq!(metadata.pictures.len(), 1);
	assert_eq!(metadata.pictures[0].picture_type, "Front Cover");
	assert_eq!(&*metadata.pictures[0].data, PNG_MAGIC);
}
