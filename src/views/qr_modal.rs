// ============================================================================
// QR MODAL - Código QR del link corto
// ============================================================================
// El shell renderiza el modal siempre (oculto); update_qr_modal() llena el
// contenido y alterna la clase "show" según el estado. La imagen viene del
// endpoint QR externo: generarla no es responsabilidad de la app.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, add_class, append_child, get_element_by_id, on_click, remove_class, set_inner_html};
use crate::state::AppState;
use crate::utils::format::qr_image_url;

const QR_SIZE: u32 = 200;

/// Shell del modal, siempre presente y controlado por CSS
pub fn render_qr_modal(state: &AppState) -> Result<Element, JsValue> {
    let modal = ElementBuilder::new("div")?
        .id("qr-modal")?
        .class("modal qr-modal")
        .build();

    let content = ElementBuilder::new("div")?
        .class("modal-content")
        .build();

    let header = ElementBuilder::new("div")?.class("modal-header").build();
    let title = ElementBuilder::new("h3")?.text("QR Code").build();
    let close_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-close")
        .text("✕")
        .build();

    {
        let state = state.clone();
        on_click(&close_btn, move |_| {
            state.set_qr_target(None);
        })?;
    }

    // Click fuera del contenido cierra el modal
    {
        let state = state.clone();
        on_click(&modal, move |_| {
            state.set_qr_target(None);
        })?;
    }
    {
        on_click(&content, move |e: web_sys::MouseEvent| {
            e.stop_propagation();
        })?;
    }

    append_child(&header, &title)?;
    append_child(&header, &close_btn)?;

    let body = ElementBuilder::new("div")?
        .id("qr-modal-body")?
        .class("modal-body qr-body")
        .build();

    append_child(&content, &header)?;
    append_child(&content, &body)?;
    append_child(&modal, &content)?;

    // Si había un QR abierto antes del re-render, restaurarlo
    update_qr_modal_element(state, &modal)?;

    Ok(modal)
}

/// Actualización incremental: visibilidad + contenido según qr_target
pub fn update_qr_modal(state: &AppState) -> Result<(), JsValue> {
    let modal = get_element_by_id("qr-modal")
        .ok_or_else(|| JsValue::from_str("Modal not found, needs full render"))?;
    update_qr_modal_element(state, &modal)
}

fn update_qr_modal_element(state: &AppState, modal: &Element) -> Result<(), JsValue> {
    let target = state.qr_target.borrow().clone();
    // Buscar dentro del propio modal: durante el render todavía no está en
    // el document
    let body = modal
        .query_selector("#qr-modal-body")
        .ok()
        .flatten()
        .ok_or_else(|| JsValue::from_str("Modal not found, needs full render"))?;

    match target {
        Some(target) => {
            set_inner_html(&body, "");

            let image_url = qr_image_url(&target.short_url, QR_SIZE);

            let frame = ElementBuilder::new("div")?.class("qr-frame").build();
            let image = ElementBuilder::new("img")?
                .class("qr-image")
                .attr("src", &image_url)?
                .attr("alt", &format!("QR code for {}", target.short_url))?
                .attr("width", &QR_SIZE.to_string())?
                .attr("height", &QR_SIZE.to_string())?
                .build();
            append_child(&frame, &image)?;

            let caption = ElementBuilder::new("p")?
                .class("qr-caption")
                .text(&target.short_url)
                .build();

            let download = ElementBuilder::new("a")?
                .class("btn btn-gradient qr-download")
                .attr("href", &image_url)?
                .attr("target", "_blank")?
                .attr("rel", "noopener noreferrer")?
                .attr("download", &format!("qr-{}.png", target.short_code))?
                .text("⬇ Download PNG")
                .build();

            append_child(&body, &frame)?;
            append_child(&body, &caption)?;
            append_child(&body, &download)?;

            add_class(modal, "show")?;
        }
        None => {
            remove_class(modal, "show")?;
        }
    }
    Ok(())
}
