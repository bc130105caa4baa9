//! Shared fixtures for the access integration tests
#![allow(dead_code)]

use complyhub_types::prelude::*;
use complyhub_types::{
	FeaturePermission, Group, GroupType, InheritLevel, InheritanceConfig, InheritanceRestrictions,
	InheritanceRule, ModulePermission, Scope,
};

pub const ORG: &str = "org-1";
pub const OU: &str = "ou-1";

/// Initialize tracing output for tests that want to see engine decisions
pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

pub fn org_group(id: &str, perms: Vec<ModulePermission>) -> Group {
	group(id, Scope::Organization, None, perms)
}

pub fn ou_group(id: &str, perms: Vec<ModulePermission>) -> Group {
	group(id, Scope::OperatingUnit, Some(OU), perms)
}

fn group(id: &str, scope: Scope, ou: Option<&str>, perms: Vec<ModulePermission>) -> Group {
	Group {
		id: id.into(),
		name: format!("Group {}", id),
		group_type: GroupType::Custom,
		role_type: None,
		scope,
		organization_id: ORG.into(),
		operating_unit_id: ou.map(Into::into),
		permissions: perms,
		description: None,
		is_system_group: false,
		created_at: Timestamp(1_700_000_000),
		updated_at: Timestamp(1_700_000_000),
		created_by: "admin".into(),
	}
}

pub fn module(key: &str, level: AccessLevel) -> ModulePermission {
	ModulePermission::new(key, key, level)
}

pub fn feature(key: &str, level: AccessLevel) -> FeaturePermission {
	FeaturePermission::new(key, key, level)
}

pub fn rule(module_key: &str, level: InheritLevel) -> InheritanceRule {
	InheritanceRule {
		id: format!("rule-{}-{}", ORG, module_key),
		organization_id: ORG.into(),
		module_key: module_key.into(),
		source_scope: Scope::Organization,
		target_scope: Scope::OperatingUnit,
		inherit_level: level,
		restrictions: None,
		created_at: Timestamp(1_700_000_000),
		updated_at: Timestamp(1_700_000_000),
		created_by: "system".into(),
	}
}

pub fn capped_rule(module_key: &str, level: InheritLevel, ceiling: AccessLevel) -> InheritanceRule {
	InheritanceRule {
		restrictions: Some(InheritanceRestrictions::access_level(ceiling)),
		..rule(module_key, level)
	}
}

pub fn config(rules: Vec<InheritanceRule>) -> InheritanceConfig {
	InheritanceConfig {
		organization_id: ORG.into(),
		enable_inheritance: true,
		default_inheritance_level: InheritLevel::Partial,
		rules,
		created_at: Timestamp(1_700_000_000),
		updated_at: Timestamp(1_700_000_000),
	}
}

// vim: ts=4
