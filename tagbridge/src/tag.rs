//! A string keyed, multi-valued tag map

/// An insertion-ordered map of tag keys to one or more values
///
/// Keys are normalized upper-case property names (`ARTIST`, `TITLE`, ...).
/// Iteration follows the order in which keys were first inserted.
///
/// # Examples
///
/// ```rust
/// use tagbridge::tag::PropertyMap;
///
/// let mut map = PropertyMap::new();
/// map.insert("ARTIST", "Foo");
/// map.insert("TITLE", "Bar");
/// map.insert("ARTIST", "Baz");
///
/// assert_eq!(map.get("ARTIST"), Some(&["Foo".to_string(), "Baz".to_string()][..]));
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["ARTIST", "TITLE"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
	entries: Vec<(String, Vec<String>)>,
}

impl PropertyMap {
	/// Create an empty `PropertyMap`
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a value to `key`, creating the key if necessary
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let key = key.into();
		let value = value.into();

		match self.entries.iter_mut().find(|(k, _)| *k == key) {
			Some((_, values)) => values.push(value),
			None => self.entries.push((key, vec![value])),
		}
	}

	/// Get all values of `key`
	pub fn get(&self, key: &str) -> Option<&[String]> {
		self.entries
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, values)| values.as_slice())
	}

	/// Get the first value of `key`
	pub fn get_first(&self, key: &str) -> Option<&str> {
		self.get(key)
			.and_then(|values| values.first())
			.map(String::as_str)
	}

	/// The keys of the map, in insertion order
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(k, _)| k.as_str())
	}

	/// Iterate over every key along with its values
	pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.entries
			.iter()
			.map(|(k, values)| (k.as_str(), values.as_slice()))
	}

	/// Iterate over every (key, value) pair, repeating the key for each of its values
	pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
		self.iter()
			.flat_map(|(k, values)| values.iter().map(move |v| (k, v.as_str())))
	}

	/// The number of keys in the map
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the map has no keys
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
