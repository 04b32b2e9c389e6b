use super::contract::CallbackContract;
use crate::marshal::MetadataSink;
use crate::properties::AudioProperty;

use jni::JNIEnv;
use jni::objects::{JMethodID, JObject, JValue};
use jni::signature::{Primitive, ReturnType};
use jni::sys::jvalue;

use std::fmt::Display;

// Every callback creates at most 3 local references
const LOCAL_FRAME_CAPACITY: i32 = 4;

/// Forwards [`MetadataSink`] calls to the Java callback object
///
/// Once a callback fails (usually because it threw), the exception is left pending for the
/// caller and every later callback is skipped.
pub(super) struct JniSink<'a, 'local> {
	env: &'a mut JNIEnv<'local>,
	target: &'a JObject<'local>,
	contract: &'a CallbackContract,
	latch: FailureLatch,
}

impl<'a, 'local> JniSink<'a, 'local> {
	pub(super) fn new(
		env: &'a mut JNIEnv<'local>,
		target: &'a JObject<'local>,
		contract: &'a CallbackContract,
	) -> Self {
		Self {
			env,
			target,
			contract,
			latch: FailureLatch::default(),
		}
	}

	fn invoke<F>(&mut self, name: &str, callback: F)
	where
		F: FnOnce(&mut JNIEnv<'_>) -> jni::errors::Result<()>,
	{
		let env = &mut *self.env;
		self.latch
			.run(name, || env.with_local_frame(LOCAL_FRAME_CAPACITY, callback));
	}
}

/// Runs callbacks until the first one fails, then skips the rest
#[derive(Debug, Default)]
struct FailureLatch {
	failed: bool,
}

impl FailureLatch {
	fn run<F, E>(&mut self, name: &str, callback: F)
	where
		F: FnOnce() -> Result<(), E>,
		E: Display,
	{
		if self.failed {
			return;
		}

		if let Err(e) = callback() {
			log::warn!("Callback `{name}` failed, skipping the remaining callbacks: {e}");
			self.failed = true;
		}
	}
}

fn call_void(
	env: &mut JNIEnv<'_>,
	target: &JObject<'_>,
	method: JMethodID,
	args: &[jvalue],
) -> jni::errors::Result<()> {
	// SAFETY: `method` was resolved from the target's class, and every caller passes arguments
	//         matching its signature
	unsafe {
		env.call_method_unchecked(
			target,
			method,
			ReturnType::Primitive(Primitive::Void),
			args,
		)?;
	}

	Ok(())
}

impl MetadataSink for JniSink<'_, '_> {
	fn put_tag(&mut self, key: &str, value: &str) {
		let (target, method) = (self.target, self.contract.put_tag);
		self.invoke("putTag", |env| {
			let key = env.new_string(key)?;
			let value = env.new_string(value)?;
			call_void(env, target, method, &[
				JValue::Object(&key).as_jni(),
				JValue::Object(&value).as_jni(),
			])
		});
	}

	fn put_picture(&mut self, picture_type: &str, mime_type: &str, data: &[u8]) {
		let (target, method) = (self.target, self.contract.put_picture);
		self.invoke("putPicture", |env| {
			let picture_type = env.new_string(picture_type)?;
			let mime_type = env.new_string(mime_type)?;
			let data = env.byte_array_from_slice(data)?;
			call_void(env, target, method, &[
				JValue::Object(&picture_type).as_jni(),
				JValue::Object(&mime_type).as_jni(),
				JValue::Object(&data).as_jni(),
			])
		});
	}

	fn put_audio_property(&mut self, property: AudioProperty, value: i32) {
		let (target, method) = (self.target, self.contract.put_audio_property);
		self.invoke("putAudioProperty", |env| {
			let name = env.new_string(property.as_str())?;
			call_void(env, target, method, &[
				JValue::Object(&name).as_jni(),
				JValue::Int(value).as_jni(),
			])
		});
	}
}
