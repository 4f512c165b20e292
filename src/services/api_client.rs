// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo endpoints tipados sobre el pipeline
// ============================================================================

use serde_json::json;
use crate::models::{AuthUser, LoginRequest, LoginResponse, ManagedUser, RegisterRequest, ShortUrl};
use crate::services::http::{ApiError, ApiRequest, HttpClient};
use crate::services::session_store::SessionStore;

/// Cliente API - endpoints tipados, sin estado propio
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
}

impl ApiClient {
    pub fn new(store: SessionStore) -> Self {
        Self {
            http: HttpClient::new(store),
        }
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// Crear cuenta de usuario
    pub async fn register(&self, username: &str, password: &str) -> Result<(), ApiError> {
        log::info!("📝 Registrando usuario: {}", username);
        let body = serde_json::to_value(RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| ApiError::Parse(e.to_string()))?;
        self.http
            .send::<serde_json::Value>(ApiRequest::post("/api/user/register", body))
            .await?;
        Ok(())
    }

    /// Login de usuario
    pub async fn user_login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 Login de usuario: {}", username);
        self.login_at("/api/user/login", username, password).await
    }

    /// Login de administrador
    pub async fn admin_login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 Login de admin: {}", username);
        self.login_at("/api/admin/login", username, password).await
    }

    async fn login_at(&self, path: &str, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = serde_json::to_value(LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| ApiError::Parse(e.to_string()))?;
        self.http.send(ApiRequest::post(path, body)).await
    }

    /// Perfil del usuario autenticado (validación de sesión al restaurar)
    pub async fn me(&self) -> Result<AuthUser, ApiError> {
        self.http.send(ApiRequest::get("/api/user/me")).await
    }

    // ------------------------------------------------------------------
    // URLs
    // ------------------------------------------------------------------

    /// Listar los links (del usuario, o todos si el token es de admin)
    pub async fn get_urls(&self) -> Result<Vec<ShortUrl>, ApiError> {
        self.http.send(ApiRequest::get("/api/url")).await
    }

    /// Acortar una URL (autenticado)
    pub async fn shorten(&self, original_url: &str) -> Result<ShortenResponse, ApiError> {
        log::info!("🔗 Acortando URL");
        self.http
            .send(ApiRequest::post("/api/url/shorten", json!({ "originalUrl": original_url })))
            .await
    }

    /// Acortar una URL sin cuenta (landing pública)
    pub async fn shorten_public(&self, original_url: &str) -> Result<ShortenResponse, ApiError> {
        log::info!("🔗 Acortando URL (pública)");
        self.http
            .send(ApiRequest::post("/api/url/shorten-public", json!({ "originalUrl": original_url })))
            .await
    }

    /// Acortar con back-half personalizado
    pub async fn shorten_custom(&self, original_url: &str, custom_code: &str) -> Result<ShortenResponse, ApiError> {
        log::info!("🔗 Acortando URL con código custom: {}", custom_code);
        self.http
            .send(ApiRequest::post(
                "/api/url/custom",
                json!({ "originalUrl": original_url, "customCode": custom_code }),
            ))
            .await
    }

    /// Actualizar un link existente (URL destino y/o short code)
    pub async fn update_url(
        &self,
        id: &str,
        original_url: Option<&str>,
        short_code: Option<&str>,
    ) -> Result<(), ApiError> {
        log::info!("📝 Actualizando link: {}", id);
        let mut body = serde_json::Map::new();
        if let Some(original_url) = original_url {
            body.insert("originalUrl".to_string(), json!(original_url));
        }
        if let Some(short_code) = short_code {
            body.insert("shortCode".to_string(), json!(short_code));
        }
        self.http
            .send::<serde_json::Value>(ApiRequest::put(format!("/api/url/{}", id), body.into()))
            .await?;
        Ok(())
    }

    /// Eliminar un link
    pub async fn delete_url(&self, id: &str) -> Result<(), ApiError> {
        log::info!("🗑️ Eliminando link: {}", id);
        self.http
            .send::<serde_json::Value>(ApiRequest::delete(format!("/api/url/{}", id)))
            .await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Usuarios (gestión admin + perfil propio)
    // ------------------------------------------------------------------

    /// Listar todos los usuarios registrados
    pub async fn get_users(&self) -> Result<Vec<ManagedUser>, ApiError> {
        self.http.send(ApiRequest::get("/api/user")).await
    }

    /// Actualizar un usuario (campos opcionales: solo se envían los presentes)
    pub async fn update_user(
        &self,
        id: &str,
        username: Option<&str>,
        display_name: Option<&str>,
        password: Option<&str>,
    ) -> Result<(), ApiError> {
        log::info!("📝 Actualizando usuario: {}", id);
        let mut body = serde_json::Map::new();
        if let Some(username) = username {
            body.insert("username".to_string(), json!(username));
        }
        if let Some(display_name) = display_name {
            body.insert("displayName".to_string(), json!(display_name));
        }
        if let Some(password) = password {
            body.insert("password".to_string(), json!(password));
        }
        self.http
            .send::<serde_json::Value>(ApiRequest::put(format!("/api/user/{}", id), body.into()))
            .await?;
        Ok(())
    }

    /// Eliminar un usuario
    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        log::info!("🗑️ Eliminando usuario: {}", id);
        self.http
            .send::<serde_json::Value>(ApiRequest::delete(format!("/api/user/{}", id)))
            .await?;
        Ok(())
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_code: String,
}
