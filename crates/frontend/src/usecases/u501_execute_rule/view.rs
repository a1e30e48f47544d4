use contracts::domain::a001_rule::{Rule, RuleId, RuleStatus};
use contracts::usecases::u501_execute_rule::{ExecuteRequest, ExecutionFlag};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use super::model::{summarize, RecordResult};
use crate::domain::a001_rule::api as rule_api;
use crate::usecases::u503_document_upload::use_uploaded_documents;

fn flag_badge(flag: ExecutionFlag) -> impl IntoView {
    let color = match flag {
        ExecutionFlag::Pass => BadgeColor::Success,
        ExecutionFlag::Fail => BadgeColor::Danger,
        ExecutionFlag::Skipped => BadgeColor::Subtle,
        ExecutionFlag::Error | ExecutionFlag::Unknown(_) => BadgeColor::Warning,
    };
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>{flag.label()}</Badge>
    }
}

/// Runs one published rule over every uploaded record
#[component]
pub fn BatchesPage() -> impl IntoView {
    let uploads = use_uploaded_documents();
    let published: RwSignal<Vec<Rule>> = RwSignal::new(Vec::new());
    let selected_rule = RwSignal::new(String::new());
    let results: RwSignal<Vec<RecordResult>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_running, set_is_running) = signal(false);

    spawn_local(async move {
        match rule_api::list_rules().await {
            Ok(rules) => {
                let rules: Vec<Rule> = rules
                    .into_iter()
                    .filter(|r| r.status() == RuleStatus::Published)
                    .collect();
                if let Some(first) = rules.first() {
                    selected_rule.set(first.id.to_string());
                }
                published.set(rules);
            }
            Err(e) => set_error.set(Some(format!("Failed to load rules: {}", e))),
        }
    });

    let summary = Memo::new(move |_| results.with(|r| summarize(r)));

    let can_run = Signal::derive(move || {
        !is_running.get()
            && uploads.record_count() > 0
            && RuleId::from_string(&selected_rule.get()).is_ok()
    });

    let run_batch = move |_| {
        let Ok(rule_id) = RuleId::from_string(&selected_rule.get_untracked()) else {
            set_error.set(Some("Select a published rule".to_string()));
            return;
        };
        let records = uploads.labelled_records();
        if records.is_empty() {
            set_error.set(Some("Upload at least one record first".to_string()));
            return;
        }

        set_error.set(None);
        results.set(Vec::new());
        set_is_running.set(true);
        log::info!("Running rule {} over {} record(s)", rule_id, records.len());
        spawn_local(async move {
            for (label, record) in records {
                let request = ExecuteRequest {
                    rule_id,
                    medical_record: record,
                    medical_id: Some(label.clone()),
                };
                let outcome = api::execute_rule(&request).await.map_err(|e| e.to_string());
                results.update(|r| r.push(RecordResult { label, outcome }));
            }
            set_is_running.set(false);
        });
    };

    view! {
        <div class="page batches">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 16px;">
                <h2>"Batches"</h2>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Label>"Rule:"</Label>
                    <Select value=selected_rule>
                        {move || published.get().into_iter().map(|rule| {
                            let value = rule.id.to_string();
                            view! { <option value=value>{format!("#{} {}", rule.id, rule.name)}</option> }
                        }).collect_view()}
                    </Select>
                    <span>{move || format!("{} record(s)", uploads.record_count())}</span>
                    <Button appearance=ButtonAppearance::Primary on_click=run_batch disabled=Signal::derive(move || !can_run.get())>
                        {move || if is_running.get() { "Running..." } else { "Run" }}
                    </Button>
                </Flex>
            </Flex>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show when=move || published.with(|p| p.is_empty())>
                <MessageBar intent=MessageBarIntent::Warning>
                    <span>"No published rules. Publish a rule on the Rule Management page first."</span>
                </MessageBar>
            </Show>

            {move || {
                let s = summary.get();
                (s.total > 0).then(|| view! {
                    <Card>
                        <Flex gap=FlexGap::Large>
                            <span>{format!("Total: {}", s.total)}</span>
                            <span>{format!("Passed: {}", s.passed)}</span>
                            <span>{format!("Failed: {}", s.failed)}</span>
                            <span>{format!("Skipped: {}", s.skipped)}</span>
                            <span>{format!("Errors: {}", s.errors)}</span>
                            <span>{format!("Deducted: {}", s.total_deduct)}</span>
                            <span>
                                {s.pass_rate().map(|rate| format!("Pass rate: {:.1}%", rate)).unwrap_or_default()}
                            </span>
                            <span>{format!("Time: {} ms", s.total_duration_ms)}</span>
                        </Flex>
                    </Card>
                })
            }}

            <Table attr:style="width: 100%; margin-top: 16px;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell attr:style="width: 180px;">"Record"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 100px;">"Result"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 80px;">"Deduct"</TableHeaderCell>
                        <TableHeaderCell>"Explanation"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 90px;">"Time"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || results.get().into_iter().map(|result| {
                        let flag = result.flag();
                        let (deduct, explanation, duration) = match &result.outcome {
                            Ok(resp) => (
                                resp.effective_deduct().to_string(),
                                resp.explanation.clone(),
                                resp.duration_ms.map(|d| format!("{} ms", d)).unwrap_or_default(),
                            ),
                            Err(e) => (String::new(), e.clone(), String::new()),
                        };
                        view! {
                            <TableRow>
                                <TableCell>{result.label.clone()}</TableCell>
                                <TableCell>{flag_badge(flag)}</TableCell>
                                <TableCell>{deduct}</TableCell>
                                <TableCell>{explanation}</TableCell>
                                <TableCell>{duration}</TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}
