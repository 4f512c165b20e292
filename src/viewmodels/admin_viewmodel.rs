// ============================================================================
// ADMIN VIEWMODEL - Gestión de usuarios y agregados del dashboard admin
// ============================================================================

use crate::models::{ApiUserPatch, ManagedUser, ShortUrl};
use crate::services::{ApiClient, ApiError, SessionStore};

pub struct AdminViewModel {
    api: ApiClient,
}

impl AdminViewModel {
    pub fn new(store: SessionStore) -> Self {
        Self {
            api: ApiClient::new(store),
        }
    }

    /// Datos del dashboard admin: todos los links y todos los usuarios
    pub async fn fetch_dashboard(&self) -> Result<(Vec<ShortUrl>, Vec<ManagedUser>), ApiError> {
        let urls = self.api.get_urls().await?;
        let users = self.api.get_users().await?;
        Ok((urls, users))
    }

    pub async fn fetch_users(&self) -> Result<Vec<ManagedUser>, ApiError> {
        self.api.get_users().await
    }

    pub async fn update_user(&self, id: &str, patch: &ApiUserPatch) -> Result<(), ApiError> {
        self.api
            .update_user(
                id,
                patch.username.as_deref(),
                patch.display_name.as_deref(),
                patch.password.as_deref(),
            )
            .await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete_user(id).await
    }
}

/// Armar el patch del modal de edición: username solo si cambió, password
/// solo si se escribió. Patch vacío = nada que guardar.
pub fn build_user_patch(current: &ManagedUser, username: &str, password: &str) -> ApiUserPatch {
    let mut patch = ApiUserPatch::default();
    if !username.is_empty() && username != current.username {
        patch.username = Some(username.to_string());
    }
    if !password.is_empty() {
        patch.password = Some(password.to_string());
    }
    patch
}

/// Filtro de la tabla de usuarios por nombre (case-insensitive)
pub fn filter_users(users: &[ManagedUser], search: &str) -> Vec<ManagedUser> {
    if search.trim().is_empty() {
        return users.to_vec();
    }
    let q = search.trim().to_lowercase();
    users
        .iter()
        .filter(|u| u.username.to_lowercase().contains(&q))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str) -> ManagedUser {
        ManagedUser {
            id: format!("id-{}", username),
            username: username.to_string(),
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_build_user_patch_detects_changes() {
        let current = user("alice");
        assert!(build_user_patch(&current, "alice", "").is_empty());
        assert_eq!(
            build_user_patch(&current, "alicia", "").username.as_deref(),
            Some("alicia")
        );
        assert_eq!(
            build_user_patch(&current, "alice", "nueva123").password.as_deref(),
            Some("nueva123")
        );
    }

    #[test]
    fn test_filter_users() {
        let users = vec![user("alice"), user("bob"), user("Alina")];
        assert_eq!(filter_users(&users, "").len(), 3);
        assert_eq!(filter_users(&users, "ali").len(), 2);
        assert_eq!(filter_users(&users, "BOB").len(), 1);
        assert!(filter_users(&users, "zzz").is_empty());
    }
}
