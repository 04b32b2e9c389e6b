use crate::error::Result;

use std::sync::{Arc, RwLock};

use jni::JNIEnv;
use jni::objects::{GlobalRef, JMethodID};

static CONTRACT: RwLock<Option<Arc<CallbackContract>>> = RwLock::new(None);

/// The resolved callback methods of the Java parser class
///
/// Method IDs stay valid for as long as their class is loaded, which the held [`GlobalRef`]
/// guarantees.
pub struct CallbackContract {
	_class: GlobalRef,
	pub(super) put_tag: JMethodID,
	pub(super) put_picture: JMethodID,
	pub(super) put_audio_property: JMethodID,
}

impl CallbackContract {
	/// The fully qualified (slash separated) name of the callback class
	pub const CLASS: &'static str = "io/github/tagbridge/AudioMetadataParser";

	const PUT_TAG: (&'static str, &'static str) =
		("putTag", "(Ljava/lang/String;Ljava/lang/String;)V");
	const PUT_PICTURE: (&'static str, &'static str) =
		("putPicture", "(Ljava/lang/String;Ljava/lang/String;[B)V");
	const PUT_AUDIO_PROPERTY: (&'static str, &'static str) =
		("putAudioProperty", "(Ljava/lang/String;I)V");

	/// Look up the callback class and its methods
	///
	/// # Errors
	///
	/// * The class or any of its methods cannot be found
	pub fn resolve(env: &mut JNIEnv<'_>) -> Result<Self> {
		let class = env.find_class(Self::CLASS)?;

		let put_tag = env.get_method_id(&class, Self::PUT_TAG.0, Self::PUT_TAG.1)?;
		let put_picture = env.get_method_id(&class, Self::PUT_PICTURE.0, Self::PUT_PICTURE.1)?;
		let put_audio_property = env.get_method_id(
			&class,
			Self::PUT_AUDIO_PROPERTY.0,
			Self::PUT_AUDIO_PROPERTY.1,
		)?;

		let global = env.new_global_ref(&class)?;
		env.delete_local_ref(class)?;

		Ok(Self {
			_class: global,
			put_tag,
			put_picture,
			put_audio_property,
		})
	}
}

pub(super) fn install(contract: CallbackContract) {
	match CONTRACT.write() {
		Ok(mut slot) => *slot = Some(Arc::new(contract)),
		Err(poisoned) => *poisoned.into_inner() = Some(Arc::new(contract)),
	}
}

pub(super) fn current() -> Option<Arc<CallbackContract>> {
	match CONTRACT.read() {
		Ok(slot) => slot.clone(),
		Err(poisoned) => poisoned.into_inner().clone(),
	}
}

pub(super) fn clear() -> bool {
	let previous = match CONTRACT.write() {
		Ok(mut slot) => slot.take(),
		Err(poisoned) => poisoned.into_inner().take(),
	};

	previous.is_some()
}
