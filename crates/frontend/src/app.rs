use crate::layout::center::{ActiveView, VIEW_INVENTORY};
use crate::layout::global_context::{use_app_context, AppGlobalContext};
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::restore_session;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();

    // Runs once per sign-in
    ctx.init_router_integration(VIEW_INVENTORY);

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ActiveView /> }.into_any()
        />
    }
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    restore_session(ctx);

    view! {
        <RequireAuth fallback=|| view! { <LoginPage /> }>
            <MainLayout />
        </RequireAuth>
    }
}
