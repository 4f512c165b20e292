use serde::{Deserialize, Serialize};

/// Rol del usuario autenticado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// Usuario autenticado (respuesta de login y de /api/user/me)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub role: Role,
}

/// Campos editables de un usuario; solo los presentes viajan en el PUT
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiUserPatch {
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub password: Option<String>,
}

impl ApiUserPatch {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.display_name.is_none() && self.password.is_none()
    }
}

/// Registro de usuario en las tablas de administración
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
        assert!(!role.is_admin());
    }

    #[test]
    fn test_auth_user_accepts_missing_display_name() {
        let json = r#"{"id":"u1","username":"alice","role":"user"}"#;
        let user: AuthUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "alice");
        assert!(user.display_name.is_none());
    }
}
