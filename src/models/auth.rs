use serde::{Deserialize, Serialize};
use crate::models::user::AuthUser;

/// Sesión del cliente: identidad autenticada + credenciales.
/// Invariante: nunca existe un token sin usuario ni un usuario sin token;
/// el SessionStore es el único dueño de este valor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Respuesta de POST /api/user/login y /api/admin/login
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: AuthUser,
}

impl LoginResponse {
    pub fn into_session(self) -> Session {
        Session {
            access_token: self.access_token,
            refresh_token: Some(self.refresh_token),
            user: self.user,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Intercambio del refresh token: POST /api/user/refresh-token
#[derive(Debug, Clone, Serialize)]
pub struct RefreshTokenRequest {
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Role;

    #[test]
    fn test_login_response_into_session() {
        let json = r#"{
            "accessToken": "A1",
            "refreshToken": "R1",
            "user": {"id": "u1", "username": "alice", "role": "user"}
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        let session = response.into_session();
        assert_eq!(session.access_token, "A1");
        assert_eq!(session.refresh_token.as_deref(), Some("R1"));
        assert_eq!(session.user.role, Role::User);
    }
}
