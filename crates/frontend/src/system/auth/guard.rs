use leptos::prelude::*;

use crate::layout::global_context::use_app_context;

/// Renders `children` for a signed-in user, `fallback` otherwise
#[component]
pub fn RequireAuth(#[prop(into)] fallback: ViewFn, children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show
            when=move || ctx.user.with(|u| u.is_some())
            fallback=fallback
        >
            {children()}
        </Show>
    }
}
