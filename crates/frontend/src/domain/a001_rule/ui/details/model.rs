//! Editable rule form and its conversion into API payloads.
//!
//! `config` and `fields_name` are edited as raw JSON text and only parsed
//! on save, so the form can hold an invalid draft while the user types.

use contracts::domain::a001_rule::{Rule, RuleCreate, RuleId, RuleUpdate};
use serde_json::{Map, Value};

pub const DEFAULT_RULE_TYPE: &str = "unknown";

#[derive(Debug, Clone, PartialEq)]
pub struct RuleForm {
    pub id: Option<RuleId>,
    pub name: String,
    pub module: String,
    pub description: String,
    pub rule_type: String,
    pub deduct: String,
    pub fields_name: String,
    pub config: String,
    pub auto_publish: bool,
    pub status: String,
    pub version: i64,
}

impl Default for RuleForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            module: String::new(),
            description: String::new(),
            rule_type: DEFAULT_RULE_TYPE.to_string(),
            deduct: "0".to_string(),
            fields_name: "[]".to_string(),
            config: "{}".to_string(),
            auto_publish: false,
            status: String::new(),
            version: 0,
        }
    }
}

impl RuleForm {
    pub fn from_rule(rule: &Rule) -> Self {
        Self {
            id: Some(rule.id),
            name: rule.name.clone(),
            module: rule.module.clone().unwrap_or_default(),
            description: rule.description.clone().unwrap_or_default(),
            rule_type: rule.rule_type.clone(),
            deduct: rule.deduct.to_string(),
            fields_name: to_pretty(&rule.fields_name),
            config: to_pretty(&rule.config),
            auto_publish: false,
            status: rule.status.clone(),
            version: rule.version,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn to_create(&self) -> Result<RuleCreate, String> {
        let name = required_name(&self.name)?;
        Ok(RuleCreate {
            name,
            module: non_empty(&self.module),
            description: non_empty(&self.description),
            rule_type: non_empty(&self.rule_type),
            deduct: Some(parse_deduct(&self.deduct)?),
            fields_name: Some(parse_fields_name(&self.fields_name)?),
            config: parse_config(&self.config)?,
            auto_publish: self.auto_publish.then_some(true),
        })
    }

    /// Only fields that differ from `original` are sent, so an untouched
    /// config does not bump the rule version on the backend.
    pub fn to_update(&self, original: &Rule) -> Result<RuleUpdate, String> {
        let name = required_name(&self.name)?;
        let module = non_empty(&self.module);
        let description = non_empty(&self.description);
        let rule_type = self.rule_type.trim().to_string();
        let deduct = parse_deduct(&self.deduct)?;
        let fields_name = parse_fields_name(&self.fields_name)?;
        let config = parse_config(&self.config)?;

        Ok(RuleUpdate {
            name: (name != original.name).then_some(name),
            module: changed(module, original.module.as_ref()),
            description: changed(description, original.description.as_ref()),
            rule_type: (!rule_type.is_empty() && rule_type != original.rule_type)
                .then_some(rule_type),
            deduct: (deduct != original.deduct).then_some(deduct),
            fields_name: (fields_name != original.fields_name).then_some(fields_name),
            config: (config != original.config).then_some(config),
            status: None,
        })
    }
}

/// A cleared field yields `None`, which the backend reads as "leave
/// untouched", so optional text cannot be blanked through an update.
fn changed(new: Option<String>, old: Option<&String>) -> Option<String> {
    new.filter(|n| Some(n) != old)
}

fn required_name(name: &str) -> Result<String, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required".to_string());
    }
    Ok(name.to_string())
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub fn parse_deduct(text: &str) -> Result<i64, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0);
    }
    text.parse::<i64>()
        .map_err(|_| format!("Deduct must be a whole number, got '{}'", text))
}

pub fn parse_config(text: &str) -> Result<Map<String, Value>, String> {
    match serde_json::from_str::<Value>(text.trim()) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("Config must be a JSON object".to_string()),
        Err(e) => Err(format!("Config is not valid JSON: {}", e)),
    }
}

pub fn parse_fields_name(text: &str) -> Result<Vec<Vec<String>>, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str::<Vec<Vec<String>>>(text)
        .map_err(|e| format!("Fields must be a JSON list of [field, label] pairs: {}", e))
}

fn to_pretty<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rule() -> Rule {
        serde_json::from_value(json!({
            "id": 4,
            "name": "Temperature recorded",
            "module": "vitals",
            "description": null,
            "type": "numeric",
            "deduct": 1,
            "fields_name": [["temp", "Temperature"]],
            "config": {"function": "numeric_check", "min": 35},
            "status": "draft",
            "version": 2
        }))
        .unwrap()
    }

    #[test]
    fn test_new_form_to_create() {
        let form = RuleForm {
            name: "  Signed  ".into(),
            config: r#"{"function": "text_extract"}"#.into(),
            auto_publish: true,
            ..Default::default()
        };
        let create = form.to_create().unwrap();
        assert_eq!(create.name, "Signed");
        assert_eq!(create.rule_type.as_deref(), Some("unknown"));
        assert_eq!(create.deduct, Some(0));
        assert_eq!(create.fields_name, Some(vec![]));
        assert_eq!(create.auto_publish, Some(true));
        assert_eq!(create.config["function"], json!("text_extract"));
    }

    #[test]
    fn test_create_requires_name_and_object_config() {
        let form = RuleForm::default();
        assert_eq!(form.to_create().unwrap_err(), "Name is required");

        let form = RuleForm {
            name: "x".into(),
            config: "[1, 2]".into(),
            ..Default::default()
        };
        assert_eq!(form.to_create().unwrap_err(), "Config must be a JSON object");

        let form = RuleForm {
            name: "x".into(),
            deduct: "2.5".into(),
            ..Default::default()
        };
        assert!(form.to_create().unwrap_err().starts_with("Deduct"));
    }

    #[test]
    fn test_untouched_edit_sends_nothing() {
        let original = rule();
        let form = RuleForm::from_rule(&original);
        assert!(form.is_edit_mode());
        assert_eq!(form.to_update(&original).unwrap(), RuleUpdate::default());
    }

    #[test]
    fn test_edit_sends_only_changes() {
        let original = rule();
        let mut form = RuleForm::from_rule(&original);
        form.deduct = "3".into();
        form.config = r#"{"function": "numeric_check", "min": 36}"#.into();

        let update = form.to_update(&original).unwrap();
        assert_eq!(update.deduct, Some(3));
        assert_eq!(update.config.unwrap()["min"], json!(36));
        assert_eq!(update.name, None);
        assert_eq!(update.fields_name, None);
        assert_eq!(update.module, None);
    }

    #[test]
    fn test_parse_fields_name() {
        assert_eq!(
            parse_fields_name(r#"[["a", "A"], ["b", "B"]]"#).unwrap(),
            vec![vec!["a".to_string(), "A".to_string()], vec!["b".to_string(), "B".to_string()]]
        );
        assert_eq!(parse_fields_name("").unwrap(), Vec::<Vec<String>>::new());
        assert!(parse_fields_name(r#"{"a": 1}"#).is_err());
    }
}
