use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::a001_rule::RuleId;

/// Outcome code returned by the rule engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionFlag {
    Pass,
    Fail,
    Skipped,
    Error,
    Unknown(i32),
}

impl ExecutionFlag {
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Pass,
            0 => Self::Fail,
            2 => Self::Skipped,
            -1 => Self::Error,
            other => Self::Unknown(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
            Self::Skipped => "Skipped",
            Self::Error => "Error",
            Self::Unknown(_) => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteResponse {
    pub rule_id: RuleId,
    pub rule_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub module: String,
    pub passed: Option<bool>,
    pub flag: i32,
    pub deduct: i64,
    #[serde(default)]
    pub answer: Map<String, Value>,
    #[serde(default)]
    pub explanation: String,
    #[serde(rename = "type", default)]
    pub rule_type: Option<String>,
    #[serde(default)]
    pub fields_name: Vec<Vec<String>>,
    #[serde(default)]
    pub duration_ms: Option<u64>,
}

impl ExecuteResponse {
    pub fn outcome(&self) -> ExecutionFlag {
        ExecutionFlag::from_code(self.flag)
    }

    /// Points actually deducted: only a failed check costs anything
    pub fn effective_deduct(&self) -> i64 {
        match self.outcome() {
            ExecutionFlag::Fail => self.deduct,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flag_codes() {
        assert_eq!(ExecutionFlag::from_code(1), ExecutionFlag::Pass);
        assert_eq!(ExecutionFlag::from_code(0), ExecutionFlag::Fail);
        assert_eq!(ExecutionFlag::from_code(2), ExecutionFlag::Skipped);
        assert_eq!(ExecutionFlag::from_code(-1), ExecutionFlag::Error);
        assert_eq!(ExecutionFlag::from_code(9), ExecutionFlag::Unknown(9));
    }

    #[test]
    fn test_response_with_duration() {
        let resp: ExecuteResponse = serde_json::from_value(json!({
            "rule_id": 3,
            "rule_name": "Discharge summary signed",
            "description": "",
            "module": "discharge",
            "passed": false,
            "flag": 0,
            "deduct": 5,
            "answer": {"signed": false},
            "explanation": "signature missing",
            "type": null,
            "fields_name": [],
            "duration_ms": 12
        }))
        .unwrap();
        assert_eq!(resp.outcome(), ExecutionFlag::Fail);
        assert_eq!(resp.effective_deduct(), 5);
        assert_eq!(resp.duration_ms, Some(12));
    }

    #[test]
    fn test_skipped_costs_nothing() {
        let resp: ExecuteResponse = serde_json::from_value(json!({
            "rule_id": 3,
            "rule_name": "r",
            "passed": null,
            "flag": 2,
            "deduct": 5
        }))
        .unwrap();
        assert_eq!(resp.effective_deduct(), 0);
    }
}
