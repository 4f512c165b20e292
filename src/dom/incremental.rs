// ============================================================================
// INCREMENTAL UPDATES - Actualizaciones puntuales del DOM
// ============================================================================
// Evitan el re-render completo para cambios chicos (toasts, modales).
// Si el contenedor esperado no existe en la página actual se devuelve error
// para que App haga fallback a re-render completo.
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{get_element_by_id, set_inner_html, append_child};
use crate::state::AppState;

/// Modales con actualización incremental
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ModalType {
    Qr,
    EditLink,
    EditUser,
}

/// Re-renderizar el contenedor de toasts desde el estado
pub fn update_toasts(state: &AppState) -> Result<(), JsValue> {
    let container = get_element_by_id("toast-container")
        .ok_or_else(|| JsValue::from_str("toast container not found, needs full render"))?;

    set_inner_html(&container, "");
    for toast in state.toasts.borrow().iter() {
        let element = crate::views::toast::build_toast(state, toast)?;
        append_child(&container, &element)?;
    }
    Ok(())
}

/// Actualizar visibilidad y contenido de un modal según el estado
pub fn update_modal(state: &AppState, modal: ModalType) -> Result<(), JsValue> {
    match modal {
        ModalType::Qr => crate::views::qr_modal::update_qr_modal(state),
        ModalType::EditLink => crate::views::links::update_edit_link_modal(state),
        ModalType::EditUser => crate::views::admin_users::update_edit_user_modal(state),
    }
}
