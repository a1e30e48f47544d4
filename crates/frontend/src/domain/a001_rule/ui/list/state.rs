use contracts::domain::a001_rule::{Rule, RuleId, RuleStatus};
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::list_utils::{filter_list, sort_list, Searchable, Sortable};

/// What the side form is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Editing {
    New,
    Existing(RuleId),
}

#[derive(Clone, Debug)]
pub struct RulesListState {
    pub search_query: String,
    /// Empty means all statuses
    pub status_filter: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub is_loaded: bool,
}

impl Default for RulesListState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            status_filter: String::new(),
            sort_field: "id".to_string(),
            sort_ascending: false,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<RulesListState> {
    RwSignal::new(RulesListState::default())
}

impl Searchable for Rule {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter)
            || self.id.to_string() == filter
            || self.rule_type.to_lowercase().contains(filter)
            || self
                .module
                .as_deref()
                .is_some_and(|m| m.to_lowercase().contains(filter))
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(filter))
    }
}

impl Sortable for Rule {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "module" => self.module_or_default().cmp(other.module_or_default()),
            "type" => self.rule_type.cmp(&other.rule_type),
            "deduct" => self.deduct.cmp(&other.deduct),
            "status" => self.status.cmp(&other.status),
            "version" => self.version.cmp(&other.version),
            _ => self.id.cmp(&other.id),
        }
    }
}

/// Rows to display for the current filters and sort
pub fn visible_rules(all: &[Rule], state: &RulesListState) -> Vec<Rule> {
    let mut rows = filter_list(all.to_vec(), &state.search_query);
    if !state.status_filter.is_empty() {
        let wanted = RuleStatus::parse(&state.status_filter);
        rows.retain(|r| r.status() == wanted);
    }
    sort_list(&mut rows, &state.sort_field, state.sort_ascending);
    rows
}

/// Replace a rule in place after a save, or put a new one on top
pub fn upsert_rule(rules: &mut Vec<Rule>, rule: Rule) {
    match rules.iter_mut().find(|r| r.id == rule.id) {
        Some(existing) => *existing = rule,
        None => rules.insert(0, rule),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rule(id: i64, name: &str, module: Option<&str>, status: &str) -> Rule {
        serde_json::from_value(json!({
            "id": id,
            "name": name,
            "module": module,
            "type": "completeness",
            "deduct": id,
            "fields_name": [],
            "config": {},
            "status": status,
            "version": 1
        }))
        .unwrap()
    }

    fn ids(rules: &[Rule]) -> Vec<i64> {
        rules.iter().map(|r| r.id.value()).collect()
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let all = vec![rule(1, "a", None, "draft"), rule(3, "c", None, "draft"), rule(2, "b", None, "draft")];
        assert_eq!(ids(&visible_rules(&all, &RulesListState::default())), vec![3, 2, 1]);
    }

    #[test]
    fn test_search_and_status_filter() {
        let all = vec![
            rule(1, "Chief complaint", Some("admission"), "published"),
            rule(2, "Discharge signed", Some("discharge"), "draft"),
            rule(3, "Admission vitals", Some("admission"), "draft"),
        ];
        let state = RulesListState {
            search_query: "Admission".into(),
            ..Default::default()
        };
        assert_eq!(ids(&visible_rules(&all, &state)), vec![3, 1]);

        let state = RulesListState {
            search_query: "admission".into(),
            status_filter: "draft".into(),
            ..Default::default()
        };
        assert_eq!(ids(&visible_rules(&all, &state)), vec![3]);
    }

    #[test]
    fn test_search_by_id() {
        let all = vec![rule(12, "x", None, "draft"), rule(1, "y", None, "draft")];
        let state = RulesListState {
            search_query: "12".into(),
            ..Default::default()
        };
        assert_eq!(ids(&visible_rules(&all, &state)), vec![12]);
    }

    #[test]
    fn test_upsert_rule() {
        let mut rules = vec![rule(1, "a", None, "draft")];
        upsert_rule(&mut rules, rule(1, "a", None, "published"));
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].status, "published");

        upsert_rule(&mut rules, rule(2, "b", None, "draft"));
        assert_eq!(ids(&rules), vec![2, 1]);
    }
}
