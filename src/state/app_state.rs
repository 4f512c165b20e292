// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{LinkAnalytics, ManagedUser, ShortUrl};
use crate::services::SessionStore;
use crate::state::route_state::RouteState;
use crate::dom::incremental::ModalType;

/// Tipo de actualización del DOM
#[derive(Clone, Debug)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (navegación, login/logout, datos nuevos)
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Debug)]
pub enum IncrementalUpdate {
    /// Actualizar el contenedor de toasts
    Toasts,
    /// Actualizar visibilidad/contenido de un modal
    Modal(ModalType),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Duración de un toast en pantalla (ms)
const TOAST_DURATION_MS: u32 = 3500;

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub route: RouteState,

    // Toasts transitorios (esquina superior derecha)
    pub toasts: Rc<RefCell<Vec<Toast>>>,
    toast_seq: Rc<RefCell<u32>>,

    // Modales
    pub qr_target: Rc<RefCell<Option<QrTarget>>>,
    pub edit_link: Rc<RefCell<Option<ShortUrl>>>,
    pub edit_user: Rc<RefCell<Option<ManagedUser>>>,

    // Landing: dominio custom para display y links creados en esta visita
    pub custom_domain: Rc<RefCell<String>>,
    pub created_urls: Rc<RefCell<Vec<ShortUrl>>>,

    // Cache de datos por página (se invalida en mutaciones y logout).
    // El flag de fetching evita dobles requests durante el re-render.
    pub urls_cache: Rc<RefCell<Option<Vec<ShortUrl>>>>,
    pub users_cache: Rc<RefCell<Option<Vec<ManagedUser>>>>,
    pub fetching_urls: Rc<RefCell<bool>>,
    pub fetching_users: Rc<RefCell<bool>>,

    // Desglose simulado de analytics, generado una vez por short code
    pub analytics_cache: Rc<RefCell<Option<(String, LinkAnalytics)>>>,
}

/// Link mostrado en el modal QR
#[derive(Debug, Clone, PartialEq)]
pub struct QrTarget {
    pub short_code: String,
    pub short_url: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: SessionStore::new(),
            route: RouteState::new(),
            toasts: Rc::new(RefCell::new(Vec::new())),
            toast_seq: Rc::new(RefCell::new(0)),
            qr_target: Rc::new(RefCell::new(None)),
            edit_link: Rc::new(RefCell::new(None)),
            edit_user: Rc::new(RefCell::new(None)),
            custom_domain: Rc::new(RefCell::new(String::new())),
            created_urls: Rc::new(RefCell::new(Vec::new())),
            urls_cache: Rc::new(RefCell::new(None)),
            users_cache: Rc::new(RefCell::new(None)),
            fetching_urls: Rc::new(RefCell::new(false)),
            fetching_users: Rc::new(RefCell::new(false)),
            analytics_cache: Rc::new(RefCell::new(None)),
        }
    }

    /// Mostrar un toast y programar su auto-dismiss
    pub fn push_toast(&self, kind: ToastKind, message: impl Into<String>) {
        let id = {
            let mut seq = self.toast_seq.borrow_mut();
            *seq += 1;
            *seq
        };
        let message = message.into();
        log::info!("🔔 Toast: {}", message);
        self.toasts.borrow_mut().push(Toast { id, kind, message });
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Toasts));

        let state = self.clone();
        gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
            state.dismiss_toast(id);
        })
        .forget();
    }

    pub fn toast_success(&self, message: impl Into<String>) {
        self.push_toast(ToastKind::Success, message);
    }

    pub fn toast_error(&self, message: impl Into<String>) {
        self.push_toast(ToastKind::Error, message);
    }

    pub fn dismiss_toast(&self, id: u32) {
        self.toasts.borrow_mut().retain(|t| t.id != id);
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Toasts));
    }

    /// Abrir/cerrar el modal QR (None lo cierra)
    pub fn set_qr_target(&self, target: Option<QrTarget>) {
        *self.qr_target.borrow_mut() = target;
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Modal(ModalType::Qr)));
    }

    /// Abrir/cerrar el modal de edición de link
    pub fn set_edit_link(&self, link: Option<ShortUrl>) {
        *self.edit_link.borrow_mut() = link;
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Modal(ModalType::EditLink)));
    }

    /// Invalidar los datos cacheados (tras mutaciones o al cerrar sesión)
    pub fn invalidate_data(&self) {
        *self.urls_cache.borrow_mut() = None;
        *self.users_cache.borrow_mut() = None;
        *self.analytics_cache.borrow_mut() = None;
    }

    /// Abrir/cerrar el modal de edición de usuario (admin)
    pub fn set_edit_user(&self, user: Option<ManagedUser>) {
        *self.edit_user.borrow_mut() = user;
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Modal(ModalType::EditUser)));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
