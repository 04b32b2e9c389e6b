// Shorthand for return Err(BridgeError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(BridgeError::new(ErrorKind::Variant))
// - err!(Variant(Value))   -> return Err(BridgeError::new(ErrorKind::Variant(Value)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::BridgeError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($value:expr)) => {
		return Err(crate::error::BridgeError::new(
			crate::error::ErrorKind::$variant($value),
		))
	};
}

pub(crate) use err;
