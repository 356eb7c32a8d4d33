//! The closed action vocabulary and its serialized form.
//!
//! Every action is addressed to exactly one slice. On the wire an action is
//! `{ "type": "<TAG>", "payload": ... }`; in code it is an [`Action`] variant
//! so reducers match exhaustively.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::auth::AuthAction;
use crate::clicker::ClickerAction;
use crate::model::{Post, User};
use crate::resource::{Posts, Record, ResourceAction, ResourceKind, Users};

pub const CLICKER_SHIFT: &str = "CLICKER_SHIFT";
pub const USERS_LOADING: &str = "USERS_LOADING";
pub const USERS_SUCCEEDED: &str = "USERS_SUCCEEDED";
pub const USERS_FAILED: &str = "USERS_FAILED";
pub const POSTS_LOADING: &str = "POSTS_LOADING";
pub const POSTS_SUCCEEDED: &str = "POSTS_SUCCEEDED";
pub const POSTS_FAILED: &str = "POSTS_FAILED";
pub const AUTH_LOGGED_IN: &str = "AUTH_LOGGED_IN";
pub const AUTH_LOGGED_OUT: &str = "AUTH_LOGGED_OUT";

/// Errors for actions rejected before any reducer runs.
#[derive(Debug, Error)]
pub enum InvalidActionError {
    #[error("Action has no type")]
    MissingType,

    #[error("Malformed payload for action '{kind}': {source}")]
    MalformedPayload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Action is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialized action as it travels outside the process.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl RawAction {
    pub fn new(kind: impl Into<String>, payload: Option<Value>) -> Self {
        Self {
            kind: Some(kind.into()),
            payload,
        }
    }
}

/// Any action the store accepts, routed by variant to its slice.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Clicker(ClickerAction),
    Users(ResourceAction<User>),
    Posts(ResourceAction<Post>),
    Auth(AuthAction),
}

#[derive(Deserialize)]
struct ItemsPayload<T> {
    items: Vec<T>,
}

#[derive(Deserialize)]
struct LoginPayload {
    username: String,
}

impl Action {
    /// The slice-qualified tag, e.g. `USERS_SUCCEEDED`.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Clicker(ClickerAction::Shift { .. }) => CLICKER_SHIFT,
            Action::Users(action) => Users::TAGS.tag_of(action),
            Action::Posts(action) => Posts::TAGS.tag_of(action),
            Action::Auth(AuthAction::LoggedIn { .. }) => AUTH_LOGGED_IN,
            Action::Auth(AuthAction::LoggedOut) => AUTH_LOGGED_OUT,
        }
    }

    pub fn to_raw(&self) -> Result<RawAction, serde_json::Error> {
        let payload = match self {
            Action::Clicker(action) => Some(serde_json::to_value(action)?),
            Action::Users(action) => resource_payload(action)?,
            Action::Posts(action) => resource_payload(action)?,
            Action::Auth(AuthAction::LoggedIn { username }) => {
                Some(json!({ "username": username }))
            }
            Action::Auth(AuthAction::LoggedOut) => None,
        };
        Ok(RawAction::new(self.kind(), payload))
    }

    /// Decode a serialized action.
    ///
    /// A missing or empty `type` and a known `type` with an undecodable
    /// payload are errors. An unknown `type` is not: it yields `Ok(None)`
    /// because no slice reacts to it.
    pub fn parse(raw: RawAction) -> Result<Option<Action>, InvalidActionError> {
        let RawAction { kind, payload } = raw;
        let kind = match kind {
            Some(kind) if !kind.is_empty() => kind,
            _ => return Err(InvalidActionError::MissingType),
        };
        let payload = payload.unwrap_or(Value::Null);

        let action = match kind.as_str() {
            CLICKER_SHIFT => Action::Clicker(decode(&kind, payload)?),
            USERS_LOADING => Action::Users(ResourceAction::Loading),
            USERS_SUCCEEDED => Action::Users(decode_items(&kind, payload)?),
            USERS_FAILED => Action::Users(ResourceAction::Failed),
            POSTS_LOADING => Action::Posts(ResourceAction::Loading),
            POSTS_SUCCEEDED => Action::Posts(decode_items(&kind, payload)?),
            POSTS_FAILED => Action::Posts(ResourceAction::Failed),
            AUTH_LOGGED_IN => {
                let LoginPayload { username } = decode(&kind, payload)?;
                Action::Auth(AuthAction::LoggedIn { username })
            }
            AUTH_LOGGED_OUT => Action::Auth(AuthAction::LoggedOut),
            _ => return Ok(None),
        };
        Ok(Some(action))
    }
}

fn resource_payload<T: Record>(
    action: &ResourceAction<T>,
) -> Result<Option<Value>, serde_json::Error> {
    match action {
        ResourceAction::Succeeded { items } => {
            Ok(Some(json!({ "items": serde_json::to_value(items)? })))
        }
        ResourceAction::Loading | ResourceAction::Failed => Ok(None),
    }
}

fn decode<T: DeserializeOwned>(kind: &str, payload: Value) -> Result<T, InvalidActionError> {
    serde_json::from_value(payload).map_err(|source| InvalidActionError::MalformedPayload {
        kind: kind.to_string(),
        source,
    })
}

fn decode_items<T: Record>(
    kind: &str,
    payload: Value,
) -> Result<ResourceAction<T>, InvalidActionError> {
    let ItemsPayload { items } = decode(kind, payload)?;
    Ok(ResourceAction::Succeeded { items })
}

impl From<ClickerAction> for Action {
    fn from(action: ClickerAction) -> Self {
        Action::Clicker(action)
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}

impl From<ResourceAction<User>> for Action {
    fn from(action: ResourceAction<User>) -> Self {
        Users::wrap(action)
    }
}

impl From<ResourceAction<Post>> for Action {
    fn from(action: ResourceAction<Post>) -> Self {
        Posts::wrap(action)
    }
}
