// ============================================================================
// HTTP PIPELINE - Interceptor de requests (Bearer + refresh-on-401)
// ============================================================================
// Cada request sale con el access token de localStorage en el header
// Authorization. Ante un 401 en el primer intento se hace UN refresh y UN
// retry; el contador de intentos viaja inmutable en el ApiRequest, no hay
// flags compartidos. El pipeline nunca navega: ante una sesión irrecuperable
// limpia storage, vacía el SessionStore y emite el evento global
// "sessionInvalidated" que el shell observa.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use crate::services::session_store::SessionStore;
use crate::utils::constants::{BACKEND_URL, STORAGE_KEY_ACCESS_TOKEN, STORAGE_KEY_REFRESH_TOKEN};
use crate::utils::storage::{load_raw, save_raw};
use crate::models::{RefreshTokenRequest, RefreshTokenResponse};

/// Nombre del evento global que el shell escucha para volver al login
pub const SESSION_INVALIDATED_EVENT: &str = "sessionInvalidated";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Descripción de un request en vuelo. `attempt` marca cuántas veces se
/// despachó: un valor > 0 hace que un segundo 401 ya no se intercepte.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub attempt: u8,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            attempt: 0,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        let mut request = Self::new(HttpMethod::Post, path);
        request.body = Some(body);
        request
    }

    pub fn put(path: impl Into<String>, body: serde_json::Value) -> Self {
        let mut request = Self::new(HttpMethod::Put, path);
        request.body = Some(body);
        request
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Copia del request marcada como reintento
    fn retried(&self) -> Self {
        Self {
            attempt: self.attempt + 1,
            ..self.clone()
        }
    }
}

/// Errores del pipeline. Solo los fallos de auth se resuelven aquí; el resto
/// pasa sin tocar para que la página lo muestre en un toast.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Network(String),
    Parse(String),
    Status { status: u16, message: String },
    /// Refresh ausente o rechazado: la sesión quedó destruida y el shell
    /// debe volver al login
    SessionInvalidated { reason: String },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Network error: {}", e),
            ApiError::Parse(e) => write!(f, "Parse error: {}", e),
            ApiError::Status { status, message } => write!(f, "HTTP {}: {}", status, message),
            ApiError::SessionInvalidated { reason } => write!(f, "Session expired: {}", reason),
        }
    }
}

/// Qué hacer con la respuesta de un intento
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResponseAction {
    /// 2xx: entregar el body al caller
    Deliver,
    /// 401 en el primer intento con refresh token disponible
    RefreshAndRetry,
    /// 401 en el primer intento sin refresh token: sesión irrecuperable
    Invalidate,
    /// Cualquier otro fallo (incluido un 401 ya reintentado): propagar
    Fail,
}

/// Máquina de decisión del pipeline, separada del transporte para testearla
pub fn response_action(status: u16, attempt: u8, has_refresh_token: bool) -> ResponseAction {
    if (200..300).contains(&status) {
        ResponseAction::Deliver
    } else if status == 401 && attempt == 0 {
        if has_refresh_token {
            ResponseAction::RefreshAndRetry
        } else {
            ResponseAction::Invalidate
        }
    } else {
        ResponseAction::Fail
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Cliente HTTP con el interceptor integrado. Recibe el SessionStore por
/// referencia explícita en la construcción; no hay acceso global ambiente.
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    store: SessionStore,
}

impl HttpClient {
    pub fn new(store: SessionStore) -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
            store,
        }
    }

    /// Enviar un request y deserializar la respuesta JSON
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let response = self.dispatch(&request).await?;
        let has_refresh = load_raw(STORAGE_KEY_REFRESH_TOKEN).is_some();

        match response_action(response.status(), request.attempt, has_refresh) {
            ResponseAction::Deliver => parse_json(&response).await,
            ResponseAction::Fail => Err(status_error(&response).await),
            ResponseAction::Invalidate => {
                let original = status_error(&response).await;
                log::warn!("🔒 401 sin refresh token disponible, cerrando sesión");
                self.invalidate_session();
                Err(ApiError::SessionInvalidated { reason: original.to_string() })
            }
            ResponseAction::RefreshAndRetry => {
                log::info!("🔄 401 en {} - intentando refresh del access token", request.path);
                match self.refresh_access_token().await {
                    Ok(new_token) => {
                        let _ = save_raw(STORAGE_KEY_ACCESS_TOKEN, &new_token);
                        self.store.update_access_token(&new_token);

                        // Reintento único; su resultado se devuelve tal cual
                        let retried = request.retried();
                        let retry_response = self.dispatch(&retried).await?;
                        if retry_response.ok() {
                            log::info!("✅ Retry exitoso tras refresh: {}", retried.path);
                            parse_json(&retry_response).await
                        } else {
                            Err(status_error(&retry_response).await)
                        }
                    }
                    Err(e) => {
                        log::warn!("🔒 Refresh rechazado ({}), cerrando sesión", e);
                        self.invalidate_session();
                        Err(ApiError::SessionInvalidated { reason: e.to_string() })
                    }
                }
            }
        }
    }

    /// Despachar un intento: construir el request, adjuntar el Bearer si hay
    /// access token en storage, enviar
    async fn dispatch(&self, request: &ApiRequest) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        let builder = match request.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        let builder = attach_bearer(builder);

        let result = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Parse(format!("Request build error: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        };

        result.map_err(|e| ApiError::Network(e.to_string()))
    }

    /// Intercambiar el refresh token por un access token nuevo.
    /// Llamada directa (fuera del pipeline) para no interceptarse a sí misma.
    async fn refresh_access_token(&self) -> Result<String, ApiError> {
        let refresh_token = load_raw(STORAGE_KEY_REFRESH_TOKEN)
            .ok_or_else(|| ApiError::Status {
                status: 401,
                message: "refresh token missing".to_string(),
            })?;

        let url = format!("{}/api/user/refresh-token", self.base_url);
        let response = Request::post(&url)
            .json(&RefreshTokenRequest { token: refresh_token })
            .map_err(|e| ApiError::Parse(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(status_error(&response).await);
        }

        let body: RefreshTokenResponse = parse_json(&response).await?;
        Ok(body.access_token)
    }

    /// Destruir la sesión (memoria + storage) y avisar al shell.
    /// La navegación al login la hace el shell, no el pipeline.
    fn invalidate_session(&self) {
        self.store.clear();
        emit_session_invalidated();
    }
}

fn attach_bearer(builder: RequestBuilder) -> RequestBuilder {
    match load_raw(STORAGE_KEY_ACCESS_TOKEN) {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn parse_json<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Construir el error de status leyendo el mensaje del backend si lo hay
async fn status_error(response: &Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(ErrorBody { error: Some(message) }) => message,
        _ => response.status_text(),
    };
    ApiError::Status { status, message }
}

fn emit_session_invalidated() {
    if let Some(win) = web_sys::window() {
        if let Ok(event) = web_sys::Event::new(SESSION_INVALIDATED_EVENT) {
            let _ = win.dispatch_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_delivers() {
        assert_eq!(response_action(200, 0, true), ResponseAction::Deliver);
        assert_eq!(response_action(204, 1, false), ResponseAction::Deliver);
    }

    #[test]
    fn test_first_401_with_refresh_token_retries() {
        assert_eq!(response_action(401, 0, true), ResponseAction::RefreshAndRetry);
    }

    #[test]
    fn test_first_401_without_refresh_token_invalidates() {
        assert_eq!(response_action(401, 0, false), ResponseAction::Invalidate);
    }

    #[test]
    fn test_retried_401_is_never_intercepted_again() {
        assert_eq!(response_action(401, 1, true), ResponseAction::Fail);
        assert_eq!(response_action(401, 2, true), ResponseAction::Fail);
    }

    #[test]
    fn test_non_auth_failures_pass_through() {
        assert_eq!(response_action(404, 0, true), ResponseAction::Fail);
        assert_eq!(response_action(500, 0, true), ResponseAction::Fail);
        assert_eq!(response_action(403, 0, true), ResponseAction::Fail);
    }

    #[test]
    fn test_retried_copy_increments_attempt_without_mutating_original() {
        let original = ApiRequest::get("/api/url");
        let retried = original.retried();
        assert_eq!(original.attempt, 0);
        assert_eq!(retried.attempt, 1);
        assert_eq!(retried.path, original.path);
    }
}
