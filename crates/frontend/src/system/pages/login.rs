use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::global_context::use_app_context;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::auth::context::do_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get().trim().to_string();
        let password_val = password.get();
        if email_val.is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Email and password are required".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            // Success swaps the whole page for the dashboard shell
            if let Err(e) = do_login(ctx, email_val, password_val).await {
                log::warn!("login failed: {}", e);
                set_error_message.set(Some(format!("Login failed: {}", e)));
                set_is_loading.set(false);
            }
        });
    };

    view! {
        <PageFrame page_id="sys_login--form" category=PAGE_CAT_SYSTEM>
        <div class="login-container">
            <div class="login-box">
                <h1>"Resale Admin"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <Label>"Email"</Label>
                        <Input
                            value=email
                            input_type=InputType::Email
                            placeholder="name@company.com"
                            disabled=Signal::derive(move || is_loading.get())
                        />
                    </div>

                    <div class="form-group">
                        <Label>"Password"</Label>
                        <Input
                            value=password
                            input_type=InputType::Password
                            disabled=Signal::derive(move || is_loading.get())
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
        </PageFrame>
    }
}
