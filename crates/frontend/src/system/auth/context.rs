use crate::layout::global_context::AppGlobalContext;
use crate::shared::http::ApiError;

use super::{api, storage};

/// Put a remembered user back into the context on page load
pub fn restore_session(ctx: AppGlobalContext) {
    if let Some(user) = storage::load_user() {
        log::debug!("restored session of {}", user.name);
        ctx.sign_in(user);
    }
}

/// Text shown under the login form
pub fn login_failure_message(err: &ApiError) -> String {
    match err.status() {
        Some(401) | Some(403) => "Invalid email or password".to_string(),
        _ => err.to_string(),
    }
}

/// Helper: Perform login
pub async fn do_login(ctx: AppGlobalContext, email: String, password: String) -> Result<(), String> {
    let user = ctx
        .track(api::login(email, &password))
        .await
        .map_err(|e| login_failure_message(&e))?;
    storage::save_user(&user);
    ctx.sign_in(user);
    Ok(())
}

/// Helper: Perform logout. Local state is dropped even when the server call fails.
pub async fn do_logout(ctx: AppGlobalContext) {
    if let Err(e) = ctx.track(api::logout()).await {
        log::warn!("logout request failed: {}", e);
    }
    storage::clear_user();
    ctx.teardown();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_failure_message() {
        let rejected = ApiError::Status {
            status: 401,
            body: "Unauthorized".to_string(),
        };
        assert_eq!(login_failure_message(&rejected), "Invalid email or password");
        let down = ApiError::Status {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert_eq!(login_failure_message(&down), "server responded 502: Bad Gateway");
        assert_eq!(
            login_failure_message(&ApiError::Timeout(8_000)),
            "request timed out after 8000 ms"
        );
    }
}
