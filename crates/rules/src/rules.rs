//! The shared rule table.
//!
//! Rule names are bound to predicates in one table built on first access and
//! immutable afterwards. Tag-driven engines dispatch on rule-name strings, so
//! the table is string-keyed rather than an enum.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::predicates;

/// A named boolean check over a field's string form.
pub type Predicate = fn(&str) -> bool;

/// The registered rule names mapped to their predicates.
pub struct RuleSet {
    rules: BTreeMap<&'static str, Predicate>,
}

static SHARED: LazyLock<RuleSet> = LazyLock::new(RuleSet::new);

/// `notNull` is only invoked on values the engine has already extracted from
/// a non-null wrapper, so there is nothing left to check here.
fn not_null(_: &str) -> bool {
    true
}

impl RuleSet {
    fn new() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert("notNull", not_null as Predicate);
        rules.insert("int", predicates::is_int as Predicate);
        rules.insert("float", predicates::is_float as Predicate);
        rules.insert("date", predicates::is_date as Predicate);
        rules.insert("rfc3339", predicates::is_rfc3339 as Predicate);
        rules.insert(
            "rfc3339WithoutZone",
            predicates::is_rfc3339_without_zone as Predicate,
        );
        rules.insert("datetime", predicates::is_datetime as Predicate);
        Self { rules }
    }

    /// The process-wide rule table, built on first access.
    pub fn shared() -> &'static RuleSet {
        &SHARED
    }

    /// Look up the predicate registered under `name`.
    pub fn get(&self, name: &str) -> Option<Predicate> {
        self.rules.get(name).copied()
    }

    /// Apply the named rule to `value`. Unknown rule names silently pass.
    pub fn check(&self, name: &str, value: &str) -> bool {
        match self.get(name) {
            Some(predicate) => predicate(value),
            None => true,
        }
    }

    /// Registered rule names, in deterministic order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rule_names_registered() {
        let names: Vec<_> = RuleSet::shared().names().collect();
        assert_eq!(
            names,
            vec![
                "date",
                "datetime",
                "float",
                "int",
                "notNull",
                "rfc3339",
                "rfc3339WithoutZone",
            ]
        );
    }

    #[test]
    fn check_dispatches_to_predicates() {
        let rules = RuleSet::shared();
        assert!(rules.check("int", "-42"));
        assert!(!rules.check("int", "007"));
        assert!(rules.check("float", "3.14"));
        assert!(!rules.check("float", ""));
        assert!(rules.check("date", "2024-01-15"));
        assert!(rules.check("rfc3339", "2024-01-15T10:30:00Z"));
        assert!(!rules.check("rfc3339", "2024-01-15T10:30:00"));
        assert!(rules.check("rfc3339WithoutZone", "2024-01-15T10:30:00"));
        assert!(rules.check("datetime", "2024-01-15T10:30:00"));
    }

    #[test]
    fn not_null_always_passes() {
        let rules = RuleSet::shared();
        assert!(rules.check("notNull", ""));
        assert!(rules.check("notNull", "anything"));
    }

    #[test]
    fn unknown_rule_silently_passes() {
        assert!(RuleSet::shared().check("no_such_rule", "whatever"));
    }

    #[test]
    fn shared_table_is_stable_across_accesses() {
        let first: Vec<_> = RuleSet::shared().names().collect();
        let second: Vec<_> = RuleSet::shared().names().collect();
        assert_eq!(first, second);
        assert!(std::ptr::eq(RuleSet::shared(), RuleSet::shared()));
    }
}
