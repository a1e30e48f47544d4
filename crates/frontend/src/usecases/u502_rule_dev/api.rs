use contracts::domain::a001_rule::Rule;
use contracts::usecases::u502_rule_dev::{ImportRuleRequest, TestRuleRequest, TestRuleResponse};

use crate::shared::http::{ApiError, HttpClient};

/// Dry-run a rule config against a record without saving anything
pub async fn test_rule(request: &TestRuleRequest) -> Result<TestRuleResponse, ApiError> {
    HttpClient::default().post("/rule-dev/test", request).await
}

/// Store a tested config as a new rule
pub async fn import_rule(request: &ImportRuleRequest) -> Result<Rule, ApiError> {
    HttpClient::default().post("/rule-dev/import", request).await
}
