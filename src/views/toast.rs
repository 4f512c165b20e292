// ============================================================================
// TOAST - Notificaciones transitorias (esquina superior derecha)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, on_click};
use crate::state::{AppState, Toast, ToastKind};

/// Contenedor global de toasts, siempre presente en el shell
pub fn render_toast_container(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .id("toast-container")?
        .class("toast-container")
        .build();

    for toast in state.toasts.borrow().iter() {
        let element = build_toast(state, toast)?;
        append_child(&container, &element)?;
    }

    Ok(container)
}

/// Un toast individual con su botón de cierre
pub fn build_toast(state: &AppState, toast: &Toast) -> Result<Element, JsValue> {
    let kind_class = match toast.kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    };

    let element = ElementBuilder::new("div")?.class(kind_class).build();

    let icon = ElementBuilder::new("span")?
        .class("toast-icon")
        .text(match toast.kind {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
        })
        .build();

    let message = ElementBuilder::new("span")?
        .class("toast-message")
        .text(&toast.message)
        .build();

    let close_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("toast-close")
        .text("✕")
        .build();

    {
        let state = state.clone();
        let id = toast.id;
        on_click(&close_btn, move |_| {
            state.dismiss_toast(id);
        })?;
    }

    append_child(&element, &icon)?;
    append_child(&element, &message)?;
    append_child(&element, &close_btn)?;

    Ok(element)
}
