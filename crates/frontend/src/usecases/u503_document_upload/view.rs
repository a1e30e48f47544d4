use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::model::{parse_records, use_uploaded_documents, UploadedDocument};

async fn read_file_text(file: &web_sys::File) -> Result<String, String> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    text.as_string()
        .ok_or_else(|| "File content is not text".to_string())
}

async fn load_document(file: web_sys::File) -> Result<UploadedDocument, String> {
    let name = file.name();
    let text = read_file_text(&file).await?;
    let records = parse_records(&text).map_err(|e| format!("{}: {}", name, e))?;
    Ok(UploadedDocument { name, records })
}

#[component]
pub fn DocumentUploadPage() -> impl IntoView {
    let uploads = use_uploaded_documents();
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);

    let handle_file_select = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(files) = input.files() else {
            return;
        };
        let selected: Vec<web_sys::File> = (0..files.length()).filter_map(|i| files.get(i)).collect();
        // allow choosing the same file again
        input.set_value("");
        if selected.is_empty() {
            return;
        }

        set_error.set(None);
        set_is_loading.set(true);
        spawn_local(async move {
            let mut failures = Vec::new();
            for file in selected {
                match load_document(file).await {
                    Ok(doc) => {
                        log::info!("Uploaded {} with {} record(s)", doc.name, doc.records.len());
                        uploads.add(doc);
                    }
                    Err(e) => {
                        log::warn!("Upload rejected: {}", e);
                        failures.push(e);
                    }
                }
            }
            if !failures.is_empty() {
                set_error.set(Some(failures.join("\n")));
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="page document-upload">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 16px;">
                <h2>"Document Upload"</h2>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <span>{move || format!("{} record(s) loaded", uploads.record_count())}</span>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || uploads.documents.with(|d| d.is_empty()))
                        on_click=move |_| uploads.clear()
                    >
                        "Clear all"
                    </Button>
                </Flex>
            </Flex>

            <Card>
                <div class="form-group">
                    <label for="upload_file">"Medical record JSON (one object or an array of objects)"</label>
                    <input
                        type="file"
                        id="upload_file"
                        accept=".json,application/json"
                        multiple=true
                        on:change=handle_file_select
                        disabled=move || is_loading.get()
                    />
                </div>
                <Show when=move || is_loading.get()>
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Spinner />
                        "Reading files..."
                    </Flex>
                </Show>
            </Card>

            {move || error.get().map(|e| view! { <div class="error" style="white-space: pre-line;">{e}</div> })}

            <Table attr:style="width: 100%; margin-top: 16px;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"File"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 120px;">"Records"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 120px;"></TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || uploads.documents.get()
                        key=|doc| (doc.name.clone(), doc.records.len())
                        children=move |doc| {
                            let name = doc.name.clone();
                            view! {
                                <TableRow>
                                    <TableCell>{doc.name.clone()}</TableCell>
                                    <TableCell>{doc.records.len()}</TableCell>
                                    <TableCell>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| uploads.remove(&name)
                                        >
                                            "Remove"
                                        </Button>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}
