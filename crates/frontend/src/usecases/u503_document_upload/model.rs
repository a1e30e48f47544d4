use leptos::prelude::*;
use serde_json::{Map, Value};

pub type MedicalRecord = Map<String, Value>;

/// One uploaded file and the records parsed out of it
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedDocument {
    pub name: String,
    pub records: Vec<MedicalRecord>,
}

impl UploadedDocument {
    /// Identifier sent as `medical_id`: the record's own `id`/`medical_id`
    /// field when present, otherwise `<file>#<index>`
    pub fn record_label(&self, index: usize) -> String {
        self.records
            .get(index)
            .and_then(|record| {
                ["medical_id", "id"]
                    .iter()
                    .find_map(|key| record.get(*key).and_then(scalar_to_string))
            })
            .unwrap_or_else(|| format!("{}#{}", self.name, index + 1))
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Accepts one record object or an array of record objects
pub fn parse_records(text: &str) -> Result<Vec<MedicalRecord>, String> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| format!("Invalid JSON: {}", e))?;
    match value {
        Value::Object(record) => Ok(vec![record]),
        Value::Array(items) => {
            if items.is_empty() {
                return Err("The file contains an empty array".to_string());
            }
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::Object(record) => Ok(record),
                    _ => Err(format!("Item {} is not a JSON object", i + 1)),
                })
                .collect()
        }
        _ => Err("Expected a JSON object or an array of objects".to_string()),
    }
}

/// Session-scoped store of uploaded documents
#[derive(Clone, Copy)]
pub struct UploadedDocuments {
    pub documents: RwSignal<Vec<UploadedDocument>>,
}

impl Default for UploadedDocuments {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadedDocuments {
    pub fn new() -> Self {
        Self {
            documents: RwSignal::new(Vec::new()),
        }
    }

    /// Re-uploading a file with the same name replaces it
    pub fn add(&self, document: UploadedDocument) {
        self.documents.update(|docs| {
            match docs.iter_mut().find(|d| d.name == document.name) {
                Some(existing) => *existing = document,
                None => docs.push(document),
            }
        });
    }

    pub fn remove(&self, name: &str) {
        self.documents.update(|docs| docs.retain(|d| d.name != name));
    }

    pub fn clear(&self) {
        self.documents.set(Vec::new());
    }

    pub fn record_count(&self) -> usize {
        self.documents
            .with(|docs| docs.iter().map(|d| d.records.len()).sum())
    }

    /// Every record with its label, in upload order
    pub fn labelled_records(&self) -> Vec<(String, MedicalRecord)> {
        self.documents.with(|docs| {
            docs.iter()
                .flat_map(|doc| {
                    doc.records
                        .iter()
                        .enumerate()
                        .map(move |(i, record)| (doc.record_label(i), record.clone()))
                })
                .collect()
        })
    }
}

pub fn use_uploaded_documents() -> UploadedDocuments {
    use_context::<UploadedDocuments>().expect("UploadedDocuments context not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_object() {
        let records = parse_records(r#"{"id": "A1", "diagnosis": "flu"}"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["diagnosis"], json!("flu"));
    }

    #[test]
    fn test_array_of_objects() {
        let records = parse_records(r#"[{"a": 1}, {"a": 2}]"#).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_rejects_non_objects() {
        assert!(parse_records("[]").is_err());
        assert!(parse_records("42").is_err());
        assert!(parse_records("not json").unwrap_err().starts_with("Invalid JSON"));
        assert_eq!(
            parse_records(r#"[{"a": 1}, 3]"#).unwrap_err(),
            "Item 2 is not a JSON object"
        );
    }

    #[test]
    fn test_record_label() {
        let doc = UploadedDocument {
            name: "batch.json".into(),
            records: parse_records(r#"[{"medical_id": "M-7"}, {"id": 42}, {"x": 1}, {"id": ""}]"#)
                .unwrap(),
        };
        assert_eq!(doc.record_label(0), "M-7");
        assert_eq!(doc.record_label(1), "42");
        assert_eq!(doc.record_label(2), "batch.json#3");
        assert_eq!(doc.record_label(3), "batch.json#4");
    }

    #[test]
    fn test_store_replaces_same_name() {
        Owner::new().with(|| {
            let store = UploadedDocuments::new();
            store.add(UploadedDocument {
                name: "a.json".into(),
                records: vec![Map::new()],
            });
            store.add(UploadedDocument {
                name: "b.json".into(),
                records: vec![Map::new(), Map::new()],
            });
            store.add(UploadedDocument {
                name: "a.json".into(),
                records: vec![Map::new(), Map::new(), Map::new()],
            });
            assert_eq!(store.record_count(), 5);
            let labels: Vec<String> =
                store.labelled_records().into_iter().map(|(l, _)| l).collect();
            assert_eq!(labels[0], "a.json#1");
            assert_eq!(labels[3], "b.json#1");

            store.remove("a.json");
            assert_eq!(store.record_count(), 2);
            store.clear();
            assert_eq!(store.record_count(), 0);
        });
    }
}
