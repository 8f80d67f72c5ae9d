use crate::{api::Role, utils::storage as storage_utils};
use leptos::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl SessionUser {
    /// Greeting name: e-mail local part, then display name.
    pub fn display_name(&self) -> Option<String> {
        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|local| !local.is_empty())
            .map(str::to_string)
            .or_else(|| self.name.clone().filter(|n| !n.is_empty()))
    }
}

pub fn greeting_name(user: Option<&SessionUser>, fallback: &str) -> String {
    user.and_then(SessionUser::display_name)
        .unwrap_or_else(|| fallback.to_string())
}

type SessionContext = ReadSignal<Option<SessionUser>>;

pub fn parse_stored_user(raw: &str) -> Option<SessionUser> {
    match serde_json::from_str(raw) {
        Ok(user) => Some(user),
        Err(err) => {
            log::warn!("Ignoring malformed stored user: {}", err);
            None
        }
    }
}

fn load_stored_user() -> Option<SessionUser> {
    storage_utils::read_item(storage_utils::CURRENT_USER_KEY)
        .as_deref()
        .and_then(parse_stored_user)
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let (user, _set_user) = create_signal(load_stored_user());
    provide_context::<SessionContext>(user);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(None).0)
}
