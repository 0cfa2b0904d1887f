//! TopHeader component - application top bar.
//!
//! Sidebar toggle, busy spinner, signed-in user and logout.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::system::auth::context::do_logout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let logout = move |_| {
        spawn_local(async move {
            do_logout(ctx).await;
        });
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Resale Admin"</span>
            </div>

            <div class="top-header__actions">
                <Show when=move || ctx.is_busy()>
                    <Spinner />
                </Show>

                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || ctx.user.get()
                            .map(|u| u.name)
                            .unwrap_or_default()}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
