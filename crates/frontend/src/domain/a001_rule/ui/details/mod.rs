mod model;
mod view_model;

pub use model::{parse_config, RuleForm};

use contracts::domain::a001_rule::{Rule, RuleId};
use leptos::prelude::*;
use thaw::*;
use view_model::RuleDetailsViewModel;

/// Create/edit form for a single rule
#[component]
pub fn RuleDetails(
    id: Option<RuleId>,
    #[prop(into)] on_saved: Callback<Rule>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = RuleDetailsViewModel::new();
    vm.load_if_needed(id);

    let handle_save = move |_| vm.save_command(on_saved);
    let handle_cancel = move |_| on_cancel.run(());

    view! {
        <div class="details-container rule-details">
            <div class="details-header">
                <h3>
                    {move || match vm.requested_id.get() {
                        None => "New rule".to_string(),
                        Some(id) if vm.loading.get() => format!("Loading rule #{}...", id.value()),
                        Some(id) => vm.form.with(|f| format!("Edit rule #{} (v{})", id.value(), f.version)),
                    }}
                </h3>
            </div>

            <Show when=move || vm.is_read_only()>
                <MessageBar intent=MessageBarIntent::Warning>
                    <span>"Published rules cannot be edited. Take the rule offline first."</span>
                </MessageBar>
            </Show>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                {text_input(vm, "name", "Name", |f| f.name.clone(), |f, v| f.name = v)}
                {text_input(vm, "module", "Module", |f| f.module.clone(), |f, v| f.module = v)}
                {text_input(vm, "rule_type", "Type", |f| f.rule_type.clone(), |f, v| f.rule_type = v)}
                {text_input(vm, "deduct", "Deduct", |f| f.deduct.clone(), |f, v| f.deduct = v)}
                {text_area(vm, "description", "Description", 2, |f| f.description.clone(), |f, v| f.description = v)}
                {text_area(vm, "fields_name", "Fields ([field, label] pairs, JSON)", 4, |f| f.fields_name.clone(), |f, v| f.fields_name = v)}
                {text_area(vm, "config", "Config (JSON object)", 12, |f| f.config.clone(), |f, v| f.config = v)}

                <Show when=move || !vm.is_edit_mode()>
                    <div class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            id="auto_publish"
                            prop:checked=move || vm.form.with(|f| f.auto_publish)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                vm.form.update(|f| f.auto_publish = checked);
                            }
                        />
                        <label for="auto_publish">"Publish immediately"</label>
                    </div>
                </Show>
            </div>

            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_save
                    disabled=Signal::derive(move || !vm.can_save())
                >
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </Button>
                <Button on_click=handle_cancel>"Cancel"</Button>
            </Flex>
        </div>
    }
}

fn text_input(
    vm: RuleDetailsViewModel,
    id: &'static str,
    label: &'static str,
    get: fn(&RuleForm) -> String,
    set: fn(&mut RuleForm, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type="text"
                id=id
                prop:value=move || vm.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|f| set(f, value));
                }
                disabled=move || vm.is_read_only()
            />
        </div>
    }
}

fn text_area(
    vm: RuleDetailsViewModel,
    id: &'static str,
    label: &'static str,
    rows: u32,
    get: fn(&RuleForm) -> String,
    set: fn(&mut RuleForm, String),
) -> impl IntoView {
    view! {
        <div class="form-group" style="grid-column: 1 / -1;">
            <label for=id>{label}</label>
            <textarea
                id=id
                rows=rows.to_string()
                class="code-input"
                prop:value=move || vm.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|f| set(f, value));
                }
                disabled=move || vm.is_read_only()
            ></textarea>
        </div>
    }
}
