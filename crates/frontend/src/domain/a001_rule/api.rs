//! Rule management API

use contracts::domain::a001_rule::{Rule, RuleCreate, RuleId, RuleStatus, RuleUpdate};

use crate::shared::http::{ApiError, HttpClient};

const RULES_PATH: &str = "/rules/";

fn rule_path(id: RuleId) -> String {
    format!("/rules/{}", id)
}

fn publish_path(id: RuleId) -> String {
    format!("/rules/{}/publish", id)
}

/// Fetch all rules, newest first (backend order)
pub async fn list_rules() -> Result<Vec<Rule>, ApiError> {
    HttpClient::default().get(RULES_PATH).await
}

/// Fetch a single rule
pub async fn get_rule(id: RuleId) -> Result<Rule, ApiError> {
    HttpClient::default().get(&rule_path(id)).await
}

/// Create a rule; it starts as draft unless `auto_publish` is set
pub async fn create_rule(data: &RuleCreate) -> Result<Rule, ApiError> {
    HttpClient::default().post(RULES_PATH, data).await
}

/// Partially update a rule
pub async fn update_rule(id: RuleId, data: &RuleUpdate) -> Result<Rule, ApiError> {
    HttpClient::default().put(&rule_path(id), data).await
}

/// Publish a rule
pub async fn publish_rule(id: RuleId) -> Result<Rule, ApiError> {
    HttpClient::default().post_empty(&publish_path(id)).await
}

/// Take a published rule offline so it can be edited again
pub async fn take_rule_offline(id: RuleId) -> Result<Rule, ApiError> {
    update_rule(id, &RuleUpdate::status_only(RuleStatus::Offline)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(RULES_PATH, "/rules/");
        assert_eq!(rule_path(RuleId(12)), "/rules/12");
        assert_eq!(publish_path(RuleId(12)), "/rules/12/publish");
    }
}
