//! Access level ordering
//!
//! Levels form a total order `none < read < write < execute`. The derived
//! `Ord` follows declaration order and always agrees with [`AccessLevel::rank`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
	#[default]
	None,
	Read,
	Write,
	Execute,
}

impl AccessLevel {
	pub const ALL: [AccessLevel; 4] =
		[AccessLevel::None, AccessLevel::Read, AccessLevel::Write, AccessLevel::Execute];

	pub fn rank(self) -> u8 {
		match self {
			AccessLevel::None => 0,
			AccessLevel::Read => 1,
			AccessLevel::Write => 2,
			AccessLevel::Execute => 3,
		}
	}

	/// The more permissive of the two levels
	pub fn higher(self, other: AccessLevel) -> AccessLevel {
		if self.rank() >= other.rank() { self } else { other }
	}

	/// The more restrictive of the two levels
	pub fn lower(self, other: AccessLevel) -> AccessLevel {
		if self.rank() <= other.rank() { self } else { other }
	}

	/// Cap this level at `ceiling`
	pub fn restrict(self, ceiling: AccessLevel) -> AccessLevel {
		self.lower(ceiling)
	}

	pub fn satisfies(self, required: AccessLevel) -> bool {
		self.rank() >= required.rank()
	}

	pub fn is_none(self) -> bool {
		self == AccessLevel::None
	}

	pub fn as_str(self) -> &'static str {
		match self {
			AccessLevel::None => "none",
			AccessLevel::Read => "read",
			AccessLevel::Write => "write",
			AccessLevel::Execute => "execute",
		}
	}
}

impl std::fmt::Display for AccessLevel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for AccessLevel {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"none" => Ok(AccessLevel::None),
			"read" => Ok(AccessLevel::Read),
			"write" => Ok(AccessLevel::Write),
			"execute" => Ok(AccessLevel::Execute),
			_ => Err(Error::Parse(format!("unknown access level '{}'", s))),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rank() {
		assert_eq!(AccessLevel::None.rank(), 0);
		assert_eq!(AccessLevel::Read.rank(), 1);
		assert_eq!(AccessLevel::Write.rank(), 2);
		assert_eq!(AccessLevel::Execute.rank(), 3);
	}

	#[test]
	fn test_total_order_agrees_with_rank() {
		for a in AccessLevel::ALL {
			for b in AccessLevel::ALL {
				assert_eq!(a.cmp(&b), a.rank().cmp(&b.rank()));
				assert_eq!(a.higher(b).rank(), a.rank().max(b.rank()));
				assert_eq!(a.lower(b).rank(), a.rank().min(b.rank()));
				assert_eq!(a.restrict(b), a.min(b));
			}
		}
	}

	#[test]
	fn test_satisfies() {
		assert!(AccessLevel::Write.satisfies(AccessLevel::Read));
		assert!(AccessLevel::Read.satisfies(AccessLevel::Read));
		assert!(!AccessLevel::Read.satisfies(AccessLevel::Execute));
		assert!(AccessLevel::None.satisfies(AccessLevel::None));
	}

	#[test]
	fn test_parse() {
		assert_eq!("write".parse::<AccessLevel>(), Ok(AccessLevel::Write));
		assert!("admin".parse::<AccessLevel>().is_err());
		assert!("Read".parse::<AccessLevel>().is_err());
	}

	#[test]
	fn test_serde_rejects_unknown_level() {
		assert_eq!(serde_json::to_string(&AccessLevel::Execute).unwrap(), r#""execute""#);
		assert!(serde_json::from_str::<AccessLevel>(r#""owner""#).is_err());
	}
}

// vim: ts=4
