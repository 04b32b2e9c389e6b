//! Configuration options to control detection and parsing

mod parse_options;

pub use parse_options::{ParseOptions, ReadStyle};
