// ============================================================================
// AUTH VIEWMODEL - Login / registro / logout / perfil
// ============================================================================
// Lógica de negocio de autenticación. Devuelve valores; las vistas deciden
// navegación y toasts. El SessionStore llega inyectado desde App.
// ============================================================================

use crate::models::{ApiUserPatch, AuthUser, Session};
use crate::services::{ApiClient, ApiError, SessionStore};

pub struct AuthViewModel {
    api: ApiClient,
    store: SessionStore,
}

impl AuthViewModel {
    pub fn new(store: SessionStore) -> Self {
        Self {
            api: ApiClient::new(store.clone()),
            store,
        }
    }

    /// Login de usuario: autentica y establece la sesión completa
    pub async fn login_user(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let response = self.api.user_login(username, password).await?;
        let session = response.into_session();
        self.store.login(session.clone());
        Ok(session)
    }

    /// Login de administrador
    pub async fn login_admin(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let response = self.api.admin_login(username, password).await?;
        let session = response.into_session();
        self.store.login(session.clone());
        Ok(session)
    }

    /// Crear cuenta nueva (no inicia sesión)
    pub async fn register(&self, username: &str, password: &str) -> Result<(), ApiError> {
        self.api.register(username, password).await
    }

    /// Logout local incondicional (no notifica al backend)
    pub fn logout(&self) {
        self.store.logout();
    }

    /// Actualizar el perfil propio y reflejar el cambio en la sesión
    pub async fn update_profile(&self, patch: ApiUserPatch) -> Result<AuthUser, ApiError> {
        let user = self.store.current_user().ok_or_else(|| ApiError::Status {
            status: 401,
            message: "not authenticated".to_string(),
        })?;

        self.api
            .update_user(
                &user.id,
                patch.username.as_deref(),
                patch.display_name.as_deref(),
                patch.password.as_deref(),
            )
            .await?;

        let updated = AuthUser {
            username: patch.username.clone().unwrap_or(user.username),
            display_name: patch.display_name.clone().or(user.display_name),
            ..user
        };
        self.store.update_user(updated.clone());
        Ok(updated)
    }
}

/// Validación client-side del formulario de registro
pub fn validate_registration(username: &str, password: &str, confirm: &str) -> Result<(), String> {
    if username.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err("Please fill in all fields".to_string());
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }
    Ok(())
}

/// Validación del cambio de contraseña del perfil (vacío = sin cambio)
pub fn validate_password_change(new_password: &str, confirm: &str) -> Result<(), String> {
    if new_password.is_empty() {
        return Ok(());
    }
    if new_password != confirm {
        return Err("Passwords do not match".to_string());
    }
    if new_password.chars().count() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_requires_all_fields() {
        assert!(validate_registration("", "secret1", "secret1").is_err());
        assert!(validate_registration("alice", "", "").is_err());
    }

    #[test]
    fn test_registration_password_rules() {
        assert_eq!(
            validate_registration("alice", "secret1", "secret2"),
            Err("Passwords do not match".to_string())
        );
        assert_eq!(
            validate_registration("alice", "abc", "abc"),
            Err("Password must be at least 6 characters".to_string())
        );
        assert!(validate_registration("alice", "secret1", "secret1").is_ok());
    }

    #[test]
    fn test_empty_password_change_is_noop() {
        assert!(validate_password_change("", "cualquier-cosa").is_ok());
        assert!(validate_password_change("nuevo1", "nuevo1").is_ok());
        assert!(validate_password_change("nuevo1", "otro").is_err());
    }
}
