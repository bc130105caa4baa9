//! Error type shared by the ComplyHub crates.

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
	NotFound,
	/// The change would collide with existing data (e.g. a second rule for a module)
	Conflict(String),
	ValidationError(String),
	/// A permission list handed to the merge resolver names the same module twice
	DuplicateModule(String),
	Parse(String),
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::Conflict(msg) => write!(f, "conflict: {}", msg),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::DuplicateModule(key) => {
				write!(f, "duplicate permission entries for module '{}'", key)
			}
			Error::Parse(msg) => write!(f, "parse error: {}", msg),
		}
	}
}

impl std::error::Error for Error {}


// vim: ts=4
