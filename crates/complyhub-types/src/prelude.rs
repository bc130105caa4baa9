pub use crate::access_level::AccessLevel;
pub use crate::error::{ClResult, Error};
pub use crate::types::{Patch, Timestamp};

// vim: ts=4
