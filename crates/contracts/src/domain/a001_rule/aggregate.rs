use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Server-assigned rule identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(pub i64);

impl RuleId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(RuleId)
            .map_err(|e| format!("Invalid rule id '{}': {}", s, e))
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Status
// ============================================================================

/// Lifecycle status as reported by the backend.
///
/// The wire value stays a plain string on [`Rule`]; unknown values map to
/// [`RuleStatus::Other`] instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleStatus {
    Draft,
    Published,
    Offline,
    Other(String),
}

impl RuleStatus {
    pub const DRAFT: &'static str = "draft";
    pub const PUBLISHED: &'static str = "published";
    pub const OFFLINE: &'static str = "offline";

    pub fn parse(value: &str) -> Self {
        match value {
            Self::DRAFT => Self::Draft,
            Self::PUBLISHED => Self::Published,
            Self::OFFLINE => Self::Offline,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => Self::DRAFT,
            Self::Published => Self::PUBLISHED,
            Self::Offline => Self::OFFLINE,
            Self::Other(s) => s.as_str(),
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
            Self::Offline => "Offline",
            Self::Other(s) => s.as_str(),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Quality-control rule owned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: RuleId,
    pub name: String,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub rule_type: String,
    pub deduct: i64,
    /// Ordered `[field, label]` pairs shown alongside execution results
    #[serde(default)]
    pub fields_name: Vec<Vec<String>>,
    #[serde(default)]
    pub config: Map<String, Value>,
    pub status: String,
    pub version: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Rule {
    pub fn status(&self) -> RuleStatus {
        RuleStatus::parse(&self.status)
    }

    /// The backend rejects edits to anything but `status` once published.
    pub fn is_editable(&self) -> bool {
        self.status() != RuleStatus::Published
    }

    pub fn module_or_default(&self) -> &str {
        match self.module.as_deref() {
            Some(m) if !m.trim().is_empty() => m,
            _ => UNASSIGNED_MODULE,
        }
    }

    /// Field pairs with malformed entries dropped
    pub fn field_pairs(&self) -> Vec<(&str, &str)> {
        self.fields_name
            .iter()
            .filter_map(|pair| match pair.as_slice() {
                [field, label, ..] => Some((field.as_str(), label.as_str())),
                _ => None,
            })
            .collect()
    }
}

pub const UNASSIGNED_MODULE: &str = "(no module)";

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deduct: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields_name: Option<Vec<Vec<String>>>,
    pub config: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_publish: Option<bool>,
}

/// Partial update; `None` fields are left untouched by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deduct: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields_name: Option<Vec<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl RuleUpdate {
    pub fn status_only(status: RuleStatus) -> Self {
        Self {
            status: Some(status.as_str().to_string()),
            ..Default::default()
        }
    }
}
