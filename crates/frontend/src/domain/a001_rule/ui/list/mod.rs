mod state;

use contracts::domain::a001_rule::{Rule, RuleId, RuleStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::RuleDetails;
use crate::domain::a001_rule::api;
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::list_utils::get_sort_indicator;
use state::{create_state, upsert_rule, visible_rules, Editing};

pub fn status_badge(status: &str) -> impl IntoView {
    let status = RuleStatus::parse(status);
    let color = match status {
        RuleStatus::Published => BadgeColor::Success,
        RuleStatus::Draft => BadgeColor::Brand,
        RuleStatus::Offline => BadgeColor::Danger,
        RuleStatus::Other(_) => BadgeColor::Informative,
    };
    let label = status.display_name().to_string();
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>{label}</Badge>
    }
}

/// Rule management screen: list, search, create, edit, publish, take offline
#[component]
pub fn RuleManagePage() -> impl IntoView {
    let state = create_state();
    let all_rules: RwSignal<Vec<Rule>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let editing: RwSignal<Option<Editing>> = RwSignal::new(None);
    let busy_id: RwSignal<Option<RuleId>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::list_rules().await {
                Ok(data) => {
                    all_rules.set(data);
                    state.update(|s| s.is_loaded = true);
                }
                Err(e) => set_error.set(Some(format!("Failed to load rules: {}", e))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let rows = Memo::new(move |_| {
        all_rules.with(|all| state.with(|s| visible_rules(all, s)))
    });

    let search = RwSignal::new(String::new());
    Effect::new(move |_| {
        let query = search.get();
        state.update(|s| s.search_query = query);
    });
    let status_filter = RwSignal::new(String::new());
    Effect::new(move |_| {
        let value = status_filter.get();
        state.update(|s| s.status_filter = value);
    });

    let toggle_sort = move |field: &'static str| {
        state.update(|s| {
            if s.sort_field == field {
                s.sort_ascending = !s.sort_ascending;
            } else {
                s.sort_field = field.to_string();
                s.sort_ascending = true;
            }
        });
    };
    let sortable = move |field: &'static str, title: &'static str| {
        view! {
            <div class="table__sortable-header" style="cursor: pointer;" on:click=move |_| toggle_sort(field)>
                {title}
                <span>
                    {move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))}
                </span>
            </div>
        }
    };

    let run_status_change = move |id: RuleId, publish: bool| {
        busy_id.set(Some(id));
        set_error.set(None);
        spawn_local(async move {
            let result = if publish {
                api::publish_rule(id).await
            } else {
                api::take_rule_offline(id).await
            };
            match result {
                Ok(rule) => all_rules.update(|rules| upsert_rule(rules, rule)),
                Err(e) => set_error.set(Some(format!("Failed to update rule #{}: {}", id, e))),
            }
            busy_id.set(None);
        });
    };

    let on_saved = Callback::new(move |rule: Rule| {
        all_rules.update(|rules| upsert_rule(rules, rule));
        editing.set(None);
    });
    let on_cancel = Callback::new(move |_: ()| editing.set(None));

    view! {
        <div class="page rule-manage">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 16px;">
                <h2>"Rule Management"</h2>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Label>"Search:"</Label>
                    <Input value=search placeholder="name, module, type or id" />
                    <Select value=status_filter>
                        <option value="">"All statuses"</option>
                        <option value=RuleStatus::DRAFT>"Draft"</option>
                        <option value=RuleStatus::PUBLISHED>"Published"</option>
                        <option value=RuleStatus::OFFLINE>"Offline"</option>
                    </Select>
                    <Button on_click=move |_| load_data() disabled=Signal::derive(move || loading.get())>
                        "Refresh"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(Editing::New))>
                        "New rule"
                    </Button>
                </Flex>
            </Flex>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || editing.get().map(|target| {
                let id = match target {
                    Editing::New => None,
                    Editing::Existing(id) => Some(id),
                };
                view! {
                    <Card>
                        <RuleDetails id=id on_saved=on_saved on_cancel=on_cancel />
                    </Card>
                }
            })}

            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell attr:style="width: 70px;">{sortable("id", "ID")}</TableHeaderCell>
                        <TableHeaderCell>{sortable("name", "Name")}</TableHeaderCell>
                        <TableHeaderCell>{sortable("module", "Module")}</TableHeaderCell>
                        <TableHeaderCell>{sortable("type", "Type")}</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 80px;">{sortable("deduct", "Deduct")}</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 110px;">{sortable("status", "Status")}</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 80px;">{sortable("version", "Version")}</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 150px;">"Updated"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 220px;">"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        if loading.get() {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="9" attr:style="padding: 40px; text-align: center;">
                                        <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                                            <Spinner />
                                            "Loading..."
                                        </Flex>
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }
                        let rules = rows.get();
                        if rules.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="9" attr:style="padding: 40px; text-align: center;">
                                        "No rules found"
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }
                        rules.into_iter().map(|rule| {
                            let id = rule.id;
                            let editable = rule.is_editable();
                            let published = rule.status() == RuleStatus::Published;
                            let is_busy = move || busy_id.get() == Some(id);
                            let description = rule.description.clone().unwrap_or_default();
                            let name = rule.name.clone();
                            let module = rule.module_or_default().to_string();
                            let rule_type = rule.rule_type.clone();
                            let deduct = rule.deduct;
                            let version = rule.version;
                            let updated = format_optional_datetime(rule.updated_at.as_deref());
                            let badge = status_badge(&rule.status);
                            view! {
                                <TableRow>
                                    <TableCell>{id.to_string()}</TableCell>
                                    <TableCell>
                                        <span title=description>{name}</span>
                                    </TableCell>
                                    <TableCell>{module}</TableCell>
                                    <TableCell>{rule_type}</TableCell>
                                    <TableCell>{deduct}</TableCell>
                                    <TableCell>{badge}</TableCell>
                                    <TableCell>{version}</TableCell>
                                    <TableCell>{updated}</TableCell>
                                    <TableCell>
                                        <Flex gap=FlexGap::Small>
                                            <Button
                                                size=ButtonSize::Small
                                                on_click=move |_| editing.set(Some(Editing::Existing(id)))
                                            >
                                                {if editable { "Edit" } else { "View" }}
                                            </Button>
                                            {if published {
                                                view! {
                                                    <Button
                                                        size=ButtonSize::Small
                                                        disabled=Signal::derive(is_busy)
                                                        on_click=move |_| run_status_change(id, false)
                                                    >
                                                        "Take offline"
                                                    </Button>
                                                }.into_any()
                                            } else {
                                                view! {
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Primary
                                                        disabled=Signal::derive(is_busy)
                                                        on_click=move |_| run_status_change(id, true)
                                                    >
                                                        "Publish"
                                                    </Button>
                                                }.into_any()
                                            }}
                                        </Flex>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view().into_any()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
