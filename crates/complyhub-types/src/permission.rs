//! Module and feature permissions

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::access_level::AccessLevel;
use crate::inheritance::InheritanceRule;
use crate::org::Scope;

/// Access to a single feature inside a module. Unique by `feature_key` within
/// its module permission.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturePermission {
	pub feature_key: String,
	pub feature_name: String,
	pub access_level: AccessLevel,
	pub description: Option<String>,
}

impl FeaturePermission {
	pub fn new(
		feature_key: impl Into<String>,
		feature_name: impl Into<String>,
		access_level: AccessLevel,
	) -> Self {
		Self {
			feature_key: feature_key.into(),
			feature_name: feature_name.into(),
			access_level,
			description: None,
		}
	}
}

/// Access to a module. `access_level` is the module-wide ceiling; feature levels
/// are not capped by it, so callers may grant finer-grained rights on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModulePermission {
	pub module_key: String,
	pub module_name: String,
	pub access_level: AccessLevel,
	#[serde(default)]
	pub features: Vec<FeaturePermission>,
}

impl ModulePermission {
	pub fn new(
		module_key: impl Into<String>,
		module_name: impl Into<String>,
		access_level: AccessLevel,
	) -> Self {
		Self {
			module_key: module_key.into(),
			module_name: module_name.into(),
			access_level,
			features: Vec::new(),
		}
	}

	pub fn with_feature(mut self, feature: FeaturePermission) -> Self {
		self.features.push(feature);
		self
	}

	pub fn feature(&self, feature_key: &str) -> Option<&FeaturePermission> {
		self.features.iter().find(|f| f.feature_key == feature_key)
	}
}

/// A module permission that flowed down from an organization-scoped group.
///
/// Kept as its own type so that provenance can only leave the inheritance
/// stage through [`InheritedPermission::into_module_permission`], which drops it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InheritedPermission {
	pub module_key: String,
	pub module_name: String,
	pub access_level: AccessLevel,
	#[serde(default)]
	pub features: Vec<FeaturePermission>,
	pub inherited_from: Scope,
	/// Id of the organization group that granted the permission
	pub inherited_from_id: String,
	pub inheritance_rule: InheritanceRule,
}

impl InheritedPermission {
	pub fn into_module_permission(self) -> ModulePermission {
		ModulePermission {
			module_key: self.module_key,
			module_name: self.module_name,
			access_level: self.access_level,
			features: self.features,
		}
	}
}


// vim: ts=4
