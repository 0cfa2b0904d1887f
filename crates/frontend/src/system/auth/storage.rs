use contracts::system::auth::UserInfo;
use web_sys::window;

const USER_KEY: &str = "auth_user_info";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Remember who is signed in; the session itself lives in the cookie
pub fn save_user(user: &UserInfo) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(user) {
        Ok(json) => {
            let _ = storage.set_item(USER_KEY, &json);
        }
        Err(e) => log::warn!("could not store user info: {}", e),
    }
}

pub fn load_user() -> Option<UserInfo> {
    let json = get_local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn clear_user() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(USER_KEY);
    }
}
