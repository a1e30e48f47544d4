use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::shared::config::DEFAULT_AUTHED_ROUTE;
use crate::system::auth::use_auth;

fn validate(username: &str, password: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() {
        return Err("Enter a user name");
    }
    if password.is_empty() {
        return Err("Enter a password");
    }
    Ok(())
}

/// Entry page. Signing in only sets the local flag; there is no server session.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let auth = use_auth();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if let Err(e) = validate(&username.get_untracked(), &password.get_untracked()) {
            set_error_message.set(Some(e.to_string()));
            return;
        }
        set_error_message.set(None);
        auth.login();
        navigate(
            DEFAULT_AUTHED_ROUTE,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Rule Console"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"User name"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="admin"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button type="submit" class="btn-primary">
                        "Sign in"
                    </button>
                </form>
            </div>
        </div>
    }
}
