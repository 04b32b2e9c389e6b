//! The JNI boundary
//!
//! The Java side is expected to look like this:
//!
//! ```java
//! package io.github.tagbridge;
//!
//! public class AudioMetadataParser {
//!     static { System.loadLibrary("tagbridge"); }
//!
//!     public void putTag(String key, String value) { /* ... */ }
//!     public void putPicture(String pictureType, String mimeType, byte[] data) { /* ... */ }
//!     public void putAudioProperty(String key, int value) { /* ... */ }
//!
//!     public native boolean readMetadata(String filename, int fd);
//! }
//! ```
//!
//! The callback methods are resolved once, in [`JNI_OnLoad`], and released in [`JNI_OnUnload`].
//! [`readMetadata`](Java_io_github_tagbridge_AudioMetadataParser_readMetadata) then calls them on
//! the receiving object, in the order described in [`MetadataSink`](crate::marshal::MetadataSink).

mod contract;
mod sink;

pub use contract::CallbackContract;

use crate::backend::LoftyBackend;
use crate::config::{ParseOptions, ReadStyle};
use crate::error::Result;
use sink::JniSink;

use std::ffi::c_void;
use std::fs::File;
use std::io::BufReader;
use std::os::fd::FromRawFd;
use std::panic::{self, AssertUnwindSafe};

use jni::objects::{JObject, JString};
use jni::sys::{JNI_ERR, JNI_FALSE, JNI_TRUE, JNI_VERSION_1_6, jboolean, jint};
use jni::{JNIEnv, JavaVM};

/// Resolves the [`CallbackContract`] when the library is loaded
///
/// Returns `JNI_ERR` if the callback class or any of its methods cannot be found.
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "system" fn JNI_OnLoad(vm: JavaVM, _reserved: *mut c_void) -> jint {
	let mut env = match vm.get_env() {
		Ok(env) => env,
		Err(e) => {
			log::error!("Unable to get a JNIEnv while loading: {e}");
			return JNI_ERR;
		},
	};

	match CallbackContract::resolve(&mut env) {
		Ok(contract) => {
			contract::install(contract);
			JNI_VERSION_1_6
		},
		Err(e) => {
			log::error!(
				"Unable to resolve callbacks of `{}`: {e}",
				CallbackContract::CLASS
			);
			JNI_ERR
		},
	}
}

/// Releases the [`CallbackContract`]
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "system" fn JNI_OnUnload(_vm: JavaVM, _reserved: *mut c_void) {
	if !contract::clear() {
		log::debug!("Unloaded without a callback contract");
	}
}

/// `boolean AudioMetadataParser.readMetadata(String filename, int fd)`
///
/// Takes ownership of `fd`, which is closed before returning. Metadata is read with
/// [`ReadStyle::Accurate`] and emitted to `this`.
///
/// Returns `true` if a valid parser was found for the content. `false` is returned for negative
/// descriptors, when [`JNI_OnLoad`] did not run successfully, on any error, and on panics.
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "system" fn Java_io_github_tagbridge_AudioMetadataParser_readMetadata<'local>(
	mut env: JNIEnv<'local>,
	this: JObject<'local>,
	filename: JString<'local>,
	fd: jint,
) -> jboolean {
	if fd < 0 {
		log::warn!("Invalid file descriptor: {fd}");
		return JNI_FALSE;
	}

	// SAFETY: The caller hands over ownership of `fd`, dropping `file` closes it
	let file = unsafe { File::from_raw_fd(fd) };

	let Some(contract) = contract::current() else {
		log::error!("readMetadata called before JNI_OnLoad");
		return JNI_FALSE;
	};

	let result = panic::catch_unwind(AssertUnwindSafe(|| {
		read_metadata(&mut env, &this, &filename, file, &contract)
	}));

	match result {
		Ok(Ok(())) => JNI_TRUE,
		Ok(Err(e)) if e.is_no_match() => {
			log::debug!("No metadata read: {e}");
			JNI_FALSE
		},
		Ok(Err(e)) => {
			log::warn!("Failed to read metadata: {e}");
			JNI_FALSE
		},
		Err(_) => {
			log::error!("Panicked while reading metadata");
			JNI_FALSE
		},
	}
}

fn read_metadata<'local>(
	env: &mut JNIEnv<'local>,
	this: &JObject<'local>,
	filename: &JString<'local>,
	file: File,
	contract: &CallbackContract,
) -> Result<()> {
	let reader = BufReader::new(file);
	let filename: String = env.get_string(filename)?.into();

	let options = ParseOptions::new().read_style(ReadStyle::Accurate);
	let mut sink = JniSink::new(env, this, contract);

	crate::read_metadata(&filename, reader, options, &LoftyBackend, &mut sink)
}
