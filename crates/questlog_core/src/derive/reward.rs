//! XP reward resolution for tasks.
//!
//! # Responsibility
//! - Compute the XP a task yields from its resolved definition/category pair.
//!
//! # Invariants
//! - The result is always a concrete non-negative number, even when
//!   neither a definition nor a category resolves.
//! - Exactly one precedence rule fires; later rules are never blended in.

use crate::model::record::{Category, TaskDefinition};

/// XP granted when neither an override nor a category base applies.
pub const FALLBACK_XP: f64 = 10.0;

/// Resolves the XP reward for a (definition, category) pair.
///
/// Precedence, highest first:
/// 1. definition `xp_override`, when present and non-zero;
/// 2. category `base_xp`, when present;
/// 3. [`FALLBACK_XP`].
pub fn xp_reward(definition: Option<&TaskDefinition>, category: Option<&Category>) -> f64 {
    if let Some(xp) = definition.and_then(|def| def.fields.xp_override) {
        if xp != 0.0 {
            return xp;
        }
    }
    if let Some(xp) = category.and_then(|cat| cat.fields.base_xp) {
        return xp;
    }
    FALLBACK_XP
}

#[cfg(test)]
mod tests {
    use super::{xp_reward, FALLBACK_XP};
    use crate::model::record::{Category, CategoryFields, Record, RecordId, TaskDefinitionFields};

    fn definition(xp_override: Option<f64>) -> Record<TaskDefinitionFields> {
        Record::new(
            RecordId::new("6975ec88c67aee72d346f89b"),
            TaskDefinitionFields {
                xp_override,
                ..TaskDefinitionFields::default()
            },
        )
    }

    fn category(base_xp: Option<f64>) -> Category {
        Record::new(
            RecordId::new("6975ec870ed5e30e8cfc909f"),
            CategoryFields {
                base_xp,
                ..CategoryFields::default()
            },
        )
    }

    #[test]
    fn falls_back_when_nothing_resolves() {
        assert_eq!(xp_reward(None, None), FALLBACK_XP);
    }

    #[test]
    fn override_wins_over_category_base() {
        let def = definition(Some(50.0));
        let cat = category(Some(5.0));
        assert_eq!(xp_reward(Some(&def), Some(&cat)), 50.0);
    }

    #[test]
    fn zero_override_defers_to_category() {
        let def = definition(Some(0.0));
        let cat = category(Some(5.0));
        assert_eq!(xp_reward(Some(&def), Some(&cat)), 5.0);
    }

    #[test]
    fn category_base_applies_without_override() {
        let def = definition(None);
        let cat = category(Some(15.0));
        assert_eq!(xp_reward(Some(&def), Some(&cat)), 15.0);
        assert_eq!(xp_reward(None, Some(&cat)), 15.0);
    }

    #[test]
    fn absent_base_xp_falls_back() {
        let cat = category(None);
        assert_eq!(xp_reward(None, Some(&cat)), FALLBACK_XP);
    }
}
