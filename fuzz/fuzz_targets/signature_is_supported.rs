#![no_main]

use std::io::{Cursor, Seek};

use libfuzzer_sys::fuzz_target;
use tagbridge::probe::SNIFF_ORDER;
use tagbridge::probe::signature::is_supported;

fuzz_target!(|data: Vec<u8>| {
	let mut reader = Cursor::new(data);
	for format in SNIFF_ORDER {
		if reader.rewind().is_err() {
			return;
		}

		let _ = is_supported(format, &mut reader);
	}
});
