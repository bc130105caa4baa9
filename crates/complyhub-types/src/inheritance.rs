//! Inheritance rules and per-organization inheritance configuration

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::access_level::AccessLevel;
use crate::org::Scope;
use crate::types::{Patch, Timestamp};

/// How much of an organization grant flows into an operating unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InheritLevel {
	None,
	#[default]
	Partial,
	Full,
}

impl InheritLevel {
	pub fn as_str(self) -> &'static str {
		match self {
			InheritLevel::None => "none",
			InheritLevel::Partial => "partial",
			InheritLevel::Full => "full",
		}
	}
}

impl std::fmt::Display for InheritLevel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Optional narrowing applied to an inherited grant
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InheritanceRestrictions {
	/// Ceiling for the inherited module access level
	pub access_level: Option<AccessLevel>,
	/// Feature keys allowed through on `partial` inheritance
	pub features: Option<Vec<String>>,
}

impl InheritanceRestrictions {
	pub fn access_level(level: AccessLevel) -> Self {
		Self { access_level: Some(level), features: None }
	}
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InheritanceRule {
	pub id: String,
	pub organization_id: String,
	pub module_key: String,
	pub source_scope: Scope,
	pub target_scope: Scope,
	pub inherit_level: InheritLevel,
	pub restrictions: Option<InheritanceRestrictions>,
	#[serde(default)]
	pub created_at: Timestamp,
	#[serde(default)]
	pub updated_at: Timestamp,
	#[serde(default)]
	pub created_by: String,
}

impl InheritanceRule {
	pub fn access_ceiling(&self) -> Option<AccessLevel> {
		self.restrictions.as_ref().and_then(|r| r.access_level)
	}

	pub fn feature_filter(&self) -> Option<&[String]> {
		self.restrictions.as_ref().and_then(|r| r.features.as_deref())
	}
}

/// The inheritance policy of one organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InheritanceConfig {
	pub organization_id: String,
	pub enable_inheritance: bool,
	pub default_inheritance_level: InheritLevel,
	#[serde(default)]
	pub rules: Vec<InheritanceRule>,
	#[serde(default)]
	pub created_at: Timestamp,
	#[serde(default)]
	pub updated_at: Timestamp,
}

impl InheritanceConfig {
	/// First rule for `module_key`. Validated configs hold at most one.
	pub fn find_rule(&self, module_key: &str) -> Option<&InheritanceRule> {
		self.rules.iter().find(|r| r.module_key == module_key)
	}

	pub fn rule_by_id(&self, rule_id: &str) -> Option<&InheritanceRule> {
		self.rules.iter().find(|r| r.id == rule_id)
	}
}

/// Request to add a rule to an organization's config
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInheritanceRule {
	pub organization_id: String,
	pub module_key: String,
	#[serde(default = "default_source_scope")]
	pub source_scope: Scope,
	#[serde(default = "default_target_scope")]
	pub target_scope: Scope,
	pub inherit_level: InheritLevel,
	pub restrictions: Option<InheritanceRestrictions>,
}

fn default_source_scope() -> Scope {
	Scope::Organization
}

fn default_target_scope() -> Scope {
	Scope::OperatingUnit
}

/// Partial update of an existing rule
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInheritanceRule {
	#[serde(default)]
	pub module_key: Patch<String>,
	#[serde(default)]
	pub source_scope: Patch<Scope>,
	#[serde(default)]
	pub target_scope: Patch<Scope>,
	#[serde(default)]
	pub inherit_level: Patch<InheritLevel>,
	#[serde(default)]
	pub restrictions: Patch<InheritanceRestrictions>,
}


// vim: ts=4
