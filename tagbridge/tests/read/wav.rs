use crate::util;

use tagbridge::config::ParseOptions;
use tagbridge::properties::AudioProperty;

#[test_log::test]
fn properties_without_tags() {
	let (result, sink) = util::read("silence.wav", &util::wav(1), ParseOptions::new());
	result.unwrap();

	assert!(sink.tags().is_empty());
	assert!(sink.pictures().is_empty());
	assert_eq!(
		sink.properties(),
		[
			(AudioProperty::Bitrate, 1411),
			(AudioProperty::LengthSeconds, 1),
			(AudioProperty::SampleRate, 44100),
			(AudioProperty::Channels, 2),
		]
	);
}

#[test_log::test]
fn detected_by_content() {
	let (result, sink) = util::read("silence", &util::wav(1), ParseOptions::new());
	result.unwrap();

	assert_eq!(sink.properties().len(), 4);
}
