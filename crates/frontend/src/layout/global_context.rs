use std::collections::HashMap;
use std::future::Future;

use contracts::system::auth::UserInfo;
use leptos::prelude::Effect;
use leptos::prelude::*;
use web_sys::window;

use crate::shared::busy::BusyState;

/// Dashboard-wide state, provided once at the app root.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Key of the view shown in the center area
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    pub busy: RwSignal<BusyState>,
    pub user: RwSignal<Option<UserInfo>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            busy: RwSignal::new(BusyState::default()),
            user: RwSignal::new(None),
        }
    }

    /// Restore `?active=` from the address bar and keep it in sync afterwards
    pub fn init_router_integration(&self, default_view: &str) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        match params.get("active") {
            Some(key) => self.open_view(key),
            None => self.open_view(default_view),
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let query_string =
                    serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                        .unwrap_or_default();
                let new_url = format!("?{}", query_string);

                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }

    pub fn open_view(&self, key: &str) {
        leptos::logging::log!("open_view: key='{}'", key);
        self.active.set(Some(key.to_string()));
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn is_busy(&self) -> bool {
        self.busy.with(|b| b.is_busy())
    }

    /// Run a request while the busy indicator counts it
    pub async fn track<F: Future>(self, fut: F) -> F::Output {
        self.busy.update(|b| b.begin());
        let output = fut.await;
        self.busy.update(|b| b.end());
        output
    }

    pub fn sign_in(&self, user: UserInfo) {
        self.user.set(Some(user));
    }

    /// Drop everything tied to the signed-in session
    pub fn teardown(&self) {
        self.user.set(None);
        self.busy.update(|b| b.reset());
        self.active.set(None);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
