//! Authentication Models
//!
//! Login/register bodies and the session cached in the browser.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "type", default = "default_token_type")]
    pub token_type: String,
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
}

/// Generic `{ "message": ... }` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Authenticated user cached in local storage
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserSession {
    pub token: String,
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl UserSession {
    /// Name shown in the chrome, "Admin" when unknown
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            "Admin"
        } else {
            &self.username
        }
    }

    /// Role shown in the sidebar footer
    pub fn display_role(&self) -> String {
        if self.role.is_empty() {
            return "Administrator".to_string();
        }
        self.role
            .split('_')
            .map(|word| {
                let lower = word.to_lowercase();
                let mut chars = lower.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<LoginResponse> for UserSession {
    fn from(resp: LoginResponse) -> Self {
        Self {
            token: resp.token,
            id: resp.id,
            username: resp.username,
            email: resp.email,
            role: resp.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_into_session() {
        let json = r#"{"token":"abc","type":"Bearer","id":"1","username":"admin","email":"a@b.c","role":"RESTAURANT_OWNER"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        let session = UserSession::from(resp);
        assert_eq!(session.token, "abc");
        assert_eq!(session.display_name(), "admin");
        assert_eq!(session.display_role(), "Restaurant Owner");
    }

    #[test]
    fn test_session_display_defaults() {
        let session = UserSession::default();
        assert_eq!(session.display_name(), "Admin");
        assert_eq!(session.display_role(), "Administrator");
    }
}
