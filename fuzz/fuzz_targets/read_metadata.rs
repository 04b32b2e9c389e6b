#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use tagbridge::backend::LoftyBackend;
use tagbridge::config::ParseOptions;
use tagbridge::marshal::MetadataSink;
use tagbridge::properties::AudioProperty;

struct Discard;

impl MetadataSink for Discard {
	fn put_tag(&mut self, _: &str, _: &str) {}
	fn put_picture(&mut self, _: &str, _: &str, _: &[u8]) {}
	fn put_audio_property(&mut self, _: AudioProperty, _: i32) {}
}

fuzz_target!(|input: (&str, Vec<u8>)| {
	let (filename, data) = input;
	let _ = tagbridge::read_metadata(
		filename,
		Cursor::new(data),
		ParseOptions::new(),
		&LoftyBackend,
		&mut Discard,
	);
});
