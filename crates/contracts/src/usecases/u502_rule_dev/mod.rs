//! Rule development endpoints: dry-run a rule config, then import it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRuleRequest {
    pub rule_config: Map<String, Value>,
    pub medical_record: Map<String, Value>,
}

/// Dry-run result. Engine failures come back as `success = false`
/// with a 200 status, not as an HTTP error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRuleResponse {
    pub success: bool,
    #[serde(default)]
    pub passed: Option<bool>,
    pub flag: i32,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub answer: Map<String, Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportRuleRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub rule_type: String,
    pub deduct: i64,
    pub fields_name: Vec<Vec<String>>,
    pub rule_config: Map<String, Value>,
    pub auto_publish: bool,
}

impl ImportRuleRequest {
    pub fn new(name: String, rule_config: Map<String, Value>) -> Self {
        Self {
            name,
            module: None,
            description: None,
            rule_type: "unknown".to_string(),
            deduct: 0,
            fields_name: Vec::new(),
            rule_config,
            auto_publish: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_import_defaults_match_backend() {
        let req = ImportRuleRequest::new("r".into(), Map::new());
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "name": "r",
                "type": "unknown",
                "deduct": 0,
                "fields_name": [],
                "rule_config": {},
                "auto_publish": false
            })
        );
    }

    #[test]
    fn test_failed_dry_run_parses() {
        let resp: TestRuleResponse = serde_json::from_value(json!({
            "success": false,
            "flag": -1,
            "explanation": "boom",
            "answer": {},
            "error": "KeyError",
            "duration_ms": 0
        }))
        .unwrap();
        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("KeyError"));
        assert_eq!(resp.passed, None);
    }
}
