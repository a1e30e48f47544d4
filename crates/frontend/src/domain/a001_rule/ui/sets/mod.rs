use std::collections::BTreeMap;

use contracts::domain::a001_rule::{Rule, RuleStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::list::status_badge;
use crate::domain::a001_rule::api;

/// Rules sharing one module, with per-status counts
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    pub module: String,
    pub rules: Vec<Rule>,
    pub draft: usize,
    pub published: usize,
    pub offline: usize,
}

impl RuleSet {
    fn new(module: String) -> Self {
        Self {
            module,
            rules: Vec::new(),
            draft: 0,
            published: 0,
            offline: 0,
        }
    }

    fn push(&mut self, rule: Rule) {
        match rule.status() {
            RuleStatus::Draft => self.draft += 1,
            RuleStatus::Published => self.published += 1,
            RuleStatus::Offline => self.offline += 1,
            RuleStatus::Other(_) => {}
        }
        self.rules.push(rule);
    }

    /// Sum of deductions a record can lose on this set's published rules
    pub fn published_deduct_total(&self) -> i64 {
        self.rules
            .iter()
            .filter(|r| r.status() == RuleStatus::Published)
            .map(|r| r.deduct)
            .sum()
    }
}

/// Group rules by module name; sets come out sorted by module, rules by id
pub fn group_by_module(rules: &[Rule]) -> Vec<RuleSet> {
    let mut sets: BTreeMap<String, RuleSet> = BTreeMap::new();
    for rule in rules {
        let module = rule.module_or_default().to_string();
        sets.entry(module.clone())
            .or_insert_with(|| RuleSet::new(module))
            .push(rule.clone());
    }
    sets.into_values()
        .map(|mut set| {
            set.rules.sort_by_key(|r| r.id);
            set
        })
        .collect()
}

#[component]
pub fn RuleSetPage() -> impl IntoView {
    let sets: RwSignal<Vec<RuleSet>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let expanded: RwSignal<Option<String>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::list_rules().await {
                Ok(rules) => sets.set(group_by_module(&rules)),
                Err(e) => set_error.set(Some(format!("Failed to load rules: {}", e))),
            }
            set_loading.set(false);
        });
    };
    load_data();

    view! {
        <div class="page rule-sets">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 16px;">
                <h2>"Rule Sets"</h2>
                <Button on_click=move |_| load_data() disabled=Signal::derive(move || loading.get())>
                    "Refresh"
                </Button>
            </Flex>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show when=move || loading.get()>
                <Flex justify=FlexJustify::Center gap=FlexGap::Small>
                    <Spinner />
                    "Loading..."
                </Flex>
            </Show>

            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Module"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 90px;">"Rules"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 90px;">"Draft"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 90px;">"Published"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 90px;">"Offline"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 140px;">"Max deduct"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || sets.get()
                        key=|set| (set.module.clone(), set.draft, set.published, set.offline)
                        children=move |set| {
                            let module = set.module.clone();
                            let toggle_module = module.clone();
                            let is_open = move || expanded.with(|e| e.as_deref() == Some(module.as_str()));
                            let rules = StoredValue::new(set.rules.clone());
                            let label = set.module.clone();
                            let count = set.rules.len();
                            let (draft, published, offline) = (set.draft, set.published, set.offline);
                            let deduct_total = set.published_deduct_total();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <a
                                            href="#"
                                            class="table__link"
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                let name = toggle_module.clone();
                                                expanded.update(|e| {
                                                    *e = if e.as_deref() == Some(name.as_str()) { None } else { Some(name) };
                                                });
                                            }
                                        >
                                            {label}
                                        </a>
                                    </TableCell>
                                    <TableCell>{count}</TableCell>
                                    <TableCell>{draft}</TableCell>
                                    <TableCell>{published}</TableCell>
                                    <TableCell>{offline}</TableCell>
                                    <TableCell>{deduct_total}</TableCell>
                                </TableRow>
                                <Show when=is_open>
                                    <TableRow>
                                        <TableCell attr:colspan="6">
                                            <ul class="rule-set__rules">
                                                {rules.with_value(|rules| {
                                                    rules.iter().map(|rule| {
                                                        let line = format!("#{} {} ", rule.id, rule.name);
                                                        let badge = status_badge(&rule.status);
                                                        view! { <li>{line}{badge}</li> }
                                                    }).collect_view()
                                                })}
                                            </ul>
                                        </TableCell>
                                    </TableRow>
                                </Show>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_rule::{RuleId, UNASSIGNED_MODULE};

    fn rule(id: i64, module: Option<&str>, status: &str, deduct: i64) -> Rule {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": format!("rule {}", id),
            "module": module,
            "type": "completeness",
            "deduct": deduct,
            "fields_name": [],
            "config": {},
            "status": status,
            "version": 1
        }))
        .unwrap()
    }

    #[test]
    fn test_groups_by_module_with_counts() {
        let rules = vec![
            rule(3, Some("discharge"), "published", 5),
            rule(1, Some("admission"), "draft", 2),
            rule(2, Some("discharge"), "offline", 3),
            rule(4, None, "published", 1),
            rule(5, Some("discharge"), "published", 4),
        ];
        let sets = group_by_module(&rules);

        let modules: Vec<&str> = sets.iter().map(|s| s.module.as_str()).collect();
        assert_eq!(modules, vec![UNASSIGNED_MODULE, "admission", "discharge"]);

        let discharge = &sets[2];
        assert_eq!(discharge.rules.len(), 3);
        assert_eq!(discharge.published, 2);
        assert_eq!(discharge.offline, 1);
        assert_eq!(discharge.draft, 0);
        assert_eq!(discharge.published_deduct_total(), 9);
        let ids: Vec<RuleId> = discharge.rules.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RuleId(2), RuleId(3), RuleId(5)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_module(&[]).is_empty());
    }
}
