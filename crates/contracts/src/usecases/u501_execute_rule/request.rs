use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::a001_rule::RuleId;

/// Run one published rule against one medical record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteRequest {
    pub rule_id: RuleId,
    pub medical_record: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_id: Option<String>,
}
