//! Default inheritance configuration
//!
//! An organization without a stored config gets one synthesized from
//! [`InheritanceDefaults`]: inheritance enabled, `partial` level, and a
//! read-capped rule for each well-known module.

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use complyhub_types::InheritanceRestrictions;

/// Modules that get a rule in a freshly created config
pub const WELL_KNOWN_MODULES: &[&str] = &["usersRoles", "scans", "reports", "settings", "audit"];

/// Rules synthesized by the platform itself are attributed to this creator
pub const SYSTEM_CREATOR: &str = "system";

/// Settings for synthesizing default inheritance configs.
///
/// Deserializable so a host can load it from its own settings file; missing
/// fields fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InheritanceDefaults {
	pub modules: Vec<String>,
	pub inherit_level: InheritLevel,
	/// Access ceiling put on every default rule, `None` for no cap
	pub access_restriction: Option<AccessLevel>,
	pub enable_inheritance: bool,
}

impl Default for InheritanceDefaults {
	fn default() -> Self {
		Self {
			modules: WELL_KNOWN_MODULES.iter().map(|m| (*m).to_string()).collect(),
			inherit_level: InheritLevel::Partial,
			access_restriction: Some(AccessLevel::Read),
			enable_inheritance: true,
		}
	}
}

impl InheritanceDefaults {
	pub fn builder() -> InheritanceDefaultsBuilder {
		InheritanceDefaultsBuilder { defaults: InheritanceDefaults::default() }
	}

	pub fn from_json(json: &str) -> ClResult<Self> {
		serde_json::from_str(json)
			.map_err(|e| Error::Parse(format!("invalid inheritance defaults: {}", e)))
	}

	/// Build a fresh config for `organization_id` stamped with `now`
	pub fn create_config(&self, organization_id: &str, now: Timestamp) -> InheritanceConfig {
		let rules = self
			.modules
			.iter()
			.map(|module_key| InheritanceRule {
				id: format!("rule-{}-{}", organization_id, module_key),
				organization_id: organization_id.to_string(),
				module_key: module_key.clone(),
				source_scope: Scope::Organization,
				target_scope: Scope::OperatingUnit,
				inherit_level: self.inherit_level,
				restrictions: self.access_restriction.map(InheritanceRestrictions::access_level),
				created_at: now,
				updated_at: now,
				created_by: SYSTEM_CREATOR.to_string(),
			})
			.collect();

		InheritanceConfig {
			organization_id: organization_id.to_string(),
			enable_inheritance: self.enable_inheritance,
			default_inheritance_level: self.inherit_level,
			rules,
			created_at: now,
			updated_at: now,
		}
	}
}

/// Builder for [`InheritanceDefaults`]
pub struct InheritanceDefaultsBuilder {
	defaults: InheritanceDefaults,
}

impl InheritanceDefaultsBuilder {
	/// Replace the module list
	pub fn modules<I, S>(mut self, modules: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.defaults.modules = modules.into_iter().map(Into::into).collect();
		self
	}

	pub fn module(mut self, module: impl Into<String>) -> Self {
		self.defaults.modules.push(module.into());
		self
	}

	pub fn inherit_level(mut self, level: InheritLevel) -> Self {
		self.defaults.inherit_level = level;
		self
	}

	pub fn access_restriction(mut self, level: Option<AccessLevel>) -> Self {
		self.defaults.access_restriction = level;
		self
	}

	pub fn enable_inheritance(mut self, enable: bool) -> Self {
		self.defaults.enable_inheritance = enable;
		self
	}

	pub fn build(self) -> InheritanceDefaults {
		self.defaults
	}
}

/// Default config for an organization that has none stored yet
pub fn create_default_inheritance_config(organization_id: &str) -> InheritanceConfig {
	debug!(org = organization_id, "Creating default inheritance config");
	InheritanceDefaults::default().create_config(organization_id, Timestamp::now())
}


// vim: ts=4
