use contracts::system::auth::{LoginRequest, UserInfo};

use super::password::hash_password;
use crate::shared::http::{post_ack, post_json, ApiError};

/// Login with email and plain password; the server sets the session cookie
pub async fn login(email: String, password: &str) -> Result<UserInfo, ApiError> {
    let request = LoginRequest {
        email,
        password: hash_password(password),
    };
    post_json("/userController/login", &request).await
}

/// Logout (drop the server session)
pub async fn logout() -> Result<(), ApiError> {
    post_ack::<()>("/userController/logout", None).await
}
