//! Inheritance rule management
//!
//! Create, update and delete rules inside an organization's config while
//! keeping one rule per module.

use uuid::Uuid;

use crate::prelude::*;
use complyhub_types::{CreateInheritanceRule, UpdateInheritanceRule};

/// Add a rule to `config`.
///
/// Fails with `Conflict` if the module already has a rule and with
/// `ValidationError` if the request is incomplete or names another organization.
pub fn add_rule<'a>(
	config: &'a mut InheritanceConfig,
	req: CreateInheritanceRule,
	created_by: &str,
	now: Timestamp,
) -> ClResult<&'a InheritanceRule> {
	if req.organization_id.is_empty() || req.module_key.is_empty() {
		return Err(Error::ValidationError("organizationId and moduleKey are required".into()));
	}
	if req.organization_id != config.organization_id {
		return Err(Error::ValidationError(format!(
			"rule organization '{}' does not match config organization '{}'",
			req.organization_id, config.organization_id
		)));
	}
	if config.find_rule(&req.module_key).is_some() {
		return Err(Error::Conflict(format!("rule already exists for module '{}'", req.module_key)));
	}

	let rule = InheritanceRule {
		id: Uuid::new_v4().to_string(),
		organization_id: req.organization_id,
		module_key: req.module_key,
		source_scope: req.source_scope,
		target_scope: req.target_scope,
		inherit_level: req.inherit_level,
		restrictions: req.restrictions,
		created_at: now,
		updated_at: now,
		created_by: created_by.to_string(),
	};
	info!(org = %config.organization_id, rule = %rule.id, module = %rule.module_key, "Inheritance rule created");

	config.rules.push(rule);
	config.updated_at = now;
	let idx = config.rules.len() - 1;
	Ok(&config.rules[idx])
}

/// Apply a partial update to the rule with `rule_id`.
///
/// `restrictions: null` clears the restrictions; module key and scopes can be
/// changed but not cleared.
pub fn update_rule<'a>(
	config: &'a mut InheritanceConfig,
	rule_id: &str,
	upd: UpdateInheritanceRule,
	now: Timestamp,
) -> ClResult<&'a InheritanceRule> {
	let idx = config.rules.iter().position(|r| r.id == rule_id).ok_or(Error::NotFound)?;

	if let Patch::Value(module_key) = &upd.module_key {
		if module_key.is_empty() {
			return Err(Error::ValidationError("moduleKey cannot be empty".into()));
		}
		if config.rules.iter().any(|r| r.id != rule_id && r.module_key == *module_key) {
			return Err(Error::Conflict(format!("rule already exists for module '{}'", module_key)));
		}
	}
	if upd.module_key.is_null()
		|| upd.source_scope.is_null()
		|| upd.target_scope.is_null()
		|| upd.inherit_level.is_null()
	{
		return Err(Error::ValidationError(
			"moduleKey, scopes and inheritLevel cannot be cleared".into(),
		));
	}

	let rule = &mut config.rules[idx];
	if let Patch::Value(module_key) = upd.module_key {
		rule.module_key = module_key;
	}
	if let Patch::Value(scope) = upd.source_scope {
		rule.source_scope = scope;
	}
	if let Patch::Value(scope) = upd.target_scope {
		rule.target_scope = scope;
	}
	if let Patch::Value(level) = upd.inherit_level {
		rule.inherit_level = level;
	}
	upd.restrictions.apply_to(&mut rule.restrictions);
	rule.updated_at = now;
	info!(org = %config.organization_id, rule = rule_id, "Inheritance rule updated");

	config.updated_at = now;
	Ok(&config.rules[idx])
}

/// Remove the rule with `rule_id`, returning it
pub fn remove_rule(
	config: &mut InheritanceConfig,
	rule_id: &str,
	now: Timestamp,
) -> ClResult<InheritanceRule> {
	let idx = config.rules.iter().position(|r| r.id == rule_id).ok_or(Error::NotFound)?;
	let rule = config.rules.remove(idx);
	config.updated_at = now;
	info!(org = %config.organization_id, rule = rule_id, module = %rule.module_key, "Inheritance rule deleted");
	Ok(rule)
}


// vim: ts=4
