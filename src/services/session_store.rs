// ============================================================================
// SESSION STORE - Fuente única de verdad de "quién está logueado"
// ============================================================================
// Dueño exclusivo de la Session en memoria y de su espejo en localStorage.
// Se construye UNA vez en App::new() y se inyecta por referencia explícita
// al pipeline y a los viewmodels. Las vistas solo leen derivados
// (is_authenticated / is_admin) y mutan vía login/logout.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{AuthUser, Session};
use crate::utils::constants::{STORAGE_KEY_ACCESS_TOKEN, STORAGE_KEY_REFRESH_TOKEN, STORAGE_KEY_USER};
use crate::utils::storage::{load_raw, remove_from_storage, save_raw, save_to_storage};

#[derive(Clone)]
pub struct SessionStore {
    session: Rc<RefCell<Option<Session>>>,
    loading: Rc<RefCell<bool>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            session: Rc::new(RefCell::new(None)),
            // Arranca en loading: la UI no debe mostrar contenido protegido
            // hasta que restore() termine
            loading: Rc::new(RefCell::new(true)),
        }
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session
            .borrow()
            .as_ref()
            .map(|s| s.user.role.is_admin())
            .unwrap_or(false)
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.session.borrow().as_ref().map(|s| s.user.clone())
    }

    /// Establecer la sesión completa tras un login exitoso.
    /// Idempotente: reemplaza por completo cualquier estado anterior.
    pub fn login(&self, session: Session) {
        if let Err(e) = save_raw(STORAGE_KEY_ACCESS_TOKEN, &session.access_token) {
            log::error!("❌ Error guardando access token: {}", e);
        }
        match &session.refresh_token {
            Some(refresh) => {
                if let Err(e) = save_raw(STORAGE_KEY_REFRESH_TOKEN, refresh) {
                    log::error!("❌ Error guardando refresh token: {}", e);
                }
            }
            None => {
                let _ = remove_from_storage(STORAGE_KEY_REFRESH_TOKEN);
            }
        }
        if let Err(e) = save_to_storage(STORAGE_KEY_USER, &session.user) {
            log::error!("❌ Error guardando usuario: {}", e);
        }

        log::info!("✅ Sesión establecida para: {}", session.user.username);
        *self.session.borrow_mut() = Some(session);
    }

    /// Actualizar solo el access token (camino del refresh).
    /// El pipeline ya lo persistió en storage; aquí se refleja en memoria.
    pub fn update_access_token(&self, token: &str) {
        if let Some(session) = self.session.borrow_mut().as_mut() {
            session.access_token = token.to_string();
        }
    }

    /// Actualizar el usuario en memoria y storage (edición de perfil)
    pub fn update_user(&self, user: AuthUser) {
        if let Err(e) = save_to_storage(STORAGE_KEY_USER, &user) {
            log::error!("❌ Error guardando usuario: {}", e);
        }
        if let Some(session) = self.session.borrow_mut().as_mut() {
            session.user = user;
        }
    }

    /// Logout explícito: vaciar memoria y storage, incondicional.
    /// No notifica al backend; la navegación al login la hace el caller.
    pub fn logout(&self) {
        log::info!("👋 Logout - limpiando sesión y storage");
        self.clear();
    }

    /// Vaciar memoria y todas las claves durables de la sesión
    pub fn clear(&self) {
        *self.session.borrow_mut() = None;
        let _ = remove_from_storage(STORAGE_KEY_ACCESS_TOKEN);
        let _ = remove_from_storage(STORAGE_KEY_REFRESH_TOKEN);
        let _ = remove_from_storage(STORAGE_KEY_USER);
    }

    /// Restaurar la sesión al arrancar la app: si hay un access token
    /// guardado se valida contra el backend (GET /api/user/me via pipeline,
    /// que puede refrescar por el camino). Cualquier fallo deja la sesión
    /// vacía y el storage limpio; claves parciales o corruptas cuentan como
    /// "no autenticado", nunca como sesión a medias.
    pub async fn restore(&self, api: &crate::services::api_client::ApiClient) {
        self.set_loading(true);

        let stored_token = load_raw(STORAGE_KEY_ACCESS_TOKEN);
        if stored_token.is_none() {
            // Sin token no hay sesión; limpiar restos sueltos
            self.clear();
            self.set_loading(false);
            return;
        }

        match api.me().await {
            Ok(user) => {
                // Releer el token: el pipeline pudo haberlo rotado durante /me
                let access_token = load_raw(STORAGE_KEY_ACCESS_TOKEN).unwrap_or_default();
                if access_token.is_empty() {
                    log::warn!("⚠️ Perfil válido pero storage inconsistente, descartando sesión");
                    self.clear();
                } else {
                    let session = Session {
                        access_token,
                        refresh_token: load_raw(STORAGE_KEY_REFRESH_TOKEN),
                        user,
                    };
                    if let Err(e) = save_to_storage(STORAGE_KEY_USER, &session.user) {
                        log::error!("❌ Error guardando usuario restaurado: {}", e);
                    }
                    log::info!("✅ Sesión restaurada: {}", session.user.username);
                    *self.session.borrow_mut() = Some(session);
                }
            }
            Err(e) => {
                log::warn!("⚠️ Token guardado inválido ({}), limpiando sesión", e);
                self.clear();
            }
        }

        self.set_loading(false);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
