use super::model::RuleForm;
use crate::domain::a001_rule::api;
use contracts::domain::a001_rule::{Rule, RuleCreate, RuleId, RuleUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the rule create/edit form
#[derive(Clone, Copy)]
pub struct RuleDetailsViewModel {
    pub form: RwSignal<RuleForm>,
    pub original: RwSignal<Option<Rule>>,
    /// Id the form was opened for; `None` means a new rule
    pub requested_id: RwSignal<Option<RuleId>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl Default for RuleDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(RuleForm::default()),
            original: RwSignal::new(None),
            requested_id: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.requested_id.with(|id| id.is_some())
    }

    /// Published rules only accept status changes
    pub fn is_read_only(&self) -> bool {
        self.original
            .with(|r| r.as_ref().is_some_and(|r| !r.is_editable()))
    }

    pub fn can_save(&self) -> bool {
        !self.saving.get() && !self.loading.get() && !self.is_read_only()
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<RuleId>) {
        self.requested_id.set(id);
        let Some(id) = id else {
            return;
        };
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match api::get_rule(id).await {
                Ok(rule) => {
                    vm.form.set(RuleForm::from_rule(&rule));
                    vm.original.set(Some(rule));
                }
                Err(e) => vm.error.set(Some(format!("Failed to load rule: {}", e))),
            }
            vm.loading.set(false);
        });
    }

    /// Validate and send the form; `on_saved` receives the stored rule
    pub fn save_command(&self, on_saved: Callback<Rule>) {
        let current = self.form.get_untracked();
        let original = self.original.get_untracked();
        let requested = self.requested_id.get_untracked();
        let vm = *self;

        let request = match build_request(requested, &current, original.as_ref()) {
            Ok(request) => request,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        vm.error.set(None);
        vm.saving.set(true);
        spawn_local(async move {
            let result = match request {
                SaveRequest::Create(create) => api::create_rule(&create).await,
                SaveRequest::Update(id, update) => api::update_rule(id, &update).await,
            };
            vm.saving.set(false);
            match result {
                Ok(rule) => on_saved.run(rule),
                Err(e) => vm.error.set(Some(format!("Failed to save rule: {}", e))),
            }
        });
    }
}

#[derive(Debug, PartialEq)]
enum SaveRequest {
    Create(RuleCreate),
    Update(RuleId, RuleUpdate),
}

/// An edit form only ever updates; it never falls back to creating a rule.
fn build_request(
    requested: Option<RuleId>,
    form: &RuleForm,
    original: Option<&Rule>,
) -> Result<SaveRequest, String> {
    match (requested, original) {
        (None, _) => form.to_create().map(SaveRequest::Create),
        (Some(id), Some(original)) => form
            .to_update(original)
            .map(|update| SaveRequest::Update(id, update)),
        (Some(_), None) => Err("Rule is not loaded yet; reload it before saving".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rule() -> Rule {
        serde_json::from_value(json!({
            "id": 9,
            "name": "Signature present",
            "module": "documents",
            "type": "text",
            "deduct": 2,
            "fields_name": [],
            "config": {"function": "text_extract"},
            "status": "draft",
            "version": 1
        }))
        .unwrap()
    }

    fn filled_form() -> RuleForm {
        RuleForm {
            name: "Signature present".into(),
            config: r#"{"function": "text_extract"}"#.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_form_creates() {
        let request = build_request(None, &filled_form(), None).unwrap();
        assert!(matches!(request, SaveRequest::Create(c) if c.name == "Signature present"));
    }

    #[test]
    fn test_edit_before_load_is_rejected() {
        let err = build_request(Some(RuleId::new(9)), &filled_form(), None).unwrap_err();
        assert!(err.contains("not loaded"));
    }

    #[test]
    fn test_edit_after_load_updates() {
        let original = rule();
        let mut form = RuleForm::from_rule(&original);
        form.deduct = "5".into();
        let request = build_request(Some(original.id), &form, Some(&original)).unwrap();
        match request {
            SaveRequest::Update(id, update) => {
                assert_eq!(id, original.id);
                assert_eq!(update.deduct, Some(5));
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn test_default_view_model_is_empty_create_form() {
        Owner::new().with(|| {
            let vm = RuleDetailsViewModel::default();
            assert!(!vm.is_edit_mode());
            assert!(!vm.is_read_only());
            assert!(vm.can_save());
            assert_eq!(vm.form.get_untracked(), RuleForm::default());
        });
    }

    #[test]
    fn test_edit_mode_follows_requested_id_not_form() {
        Owner::new().with(|| {
            let vm = RuleDetailsViewModel::new();
            vm.requested_id.set(Some(RuleId::new(9)));
            vm.loading.set(true);
            assert!(vm.is_edit_mode());
            assert!(vm.form.with_untracked(|f| f.id.is_none()));
            assert!(!vm.can_save());
        });
    }
}
