// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use wasm_bindgen_futures::spawn_local;
use crate::dom::{get_element_by_id, set_inner_html, append_child};
use crate::services::ApiClient;
use crate::state::{AppState, IncrementalUpdate};
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Option<Element>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Restaurar sesión: valida el token guardado contra el backend.
        // Mientras tanto la UI muestra el splash (session.is_loading()).
        {
            let state_clone = state.clone();
            spawn_local(async move {
                log::info!("💾 [APP] Restaurando sesión desde storage...");
                let api = ApiClient::new(state_clone.session.clone());
                state_clone.session.restore(&api).await;
                log::info!(
                    "✅ [APP] Restore completado (autenticado: {})",
                    state_clone.session.is_authenticated()
                );
                crate::rerender_app();
            });
        }

        Ok(Self {
            state,
            root: Some(root),
        })
    }

    /// Renderizar aplicación completa
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            set_inner_html(root, "");
            let app_view = render_app(&self.state)?;
            append_child(root, &app_view)?;
        }
        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        match update_type {
            IncrementalUpdate::Toasts => {
                crate::dom::incremental::update_toasts(&self.state)?;
            }
            IncrementalUpdate::Modal(modal_type) => {
                crate::dom::incremental::update_modal(&self.state, modal_type)?;
            }
        }
        Ok(())
    }
}
