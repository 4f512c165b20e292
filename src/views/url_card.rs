// ============================================================================
// URL CARD - Tarjeta de un link acortado
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{ElementBuilder, add_class, append_child, on_click, remove_class, set_text_content};
use crate::models::ShortUrl;
use crate::state::{AppState, QrTarget, Route};
use crate::utils::format::{format_date, short_url, truncate_url};

/// Tarjeta de link con acciones: copy / QR / stats / edit / delete
pub fn render_url_card(
    state: &AppState,
    url: &ShortUrl,
    custom_domain: Option<&str>,
    editable: bool,
    on_delete: Rc<dyn Fn(ShortUrl)>,
) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("url-card").build();

    let full_short_url = short_url(&url.short_code, custom_domain);

    // Fila superior: link corto + contador de clicks
    let top_row = ElementBuilder::new("div")?.class("url-card-top").build();

    let display_url = full_short_url
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let link = ElementBuilder::new("a")?
        .class("short-link")
        .attr("href", &full_short_url)?
        .attr("target", "_blank")?
        .attr("rel", "noopener noreferrer")?
        .text(display_url)
        .build();

    let clicks_label = ElementBuilder::new("span")?
        .class("clicks-label")
        .text(&format!(
            "{} click{}",
            url.clicks,
            if url.clicks == 1 { "" } else { "s" }
        ))
        .build();

    append_child(&top_row, &link)?;
    append_child(&top_row, &clicks_label)?;

    // URL original truncada
    let original = ElementBuilder::new("p")?
        .class("original-url")
        .attr("title", &url.original_url)?
        .text(&truncate_url(&url.original_url, 60))
        .build();

    // Fila inferior: fecha + acciones
    let bottom_row = ElementBuilder::new("div")?.class("url-card-bottom").build();

    let date = ElementBuilder::new("span")?
        .class("created-date")
        .text(&format_date(&url.created_at))
        .build();

    let actions = ElementBuilder::new("div")?.class("url-card-actions").build();

    // Copy
    let copy_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-ghost btn-copy")
        .text("📋 Copy")
        .build();
    {
        let state = state.clone();
        let text = full_short_url.clone();
        let button = copy_btn.clone();
        on_click(&copy_btn, move |_| {
            copy_to_clipboard(&state, text.clone(), button.clone());
        })?;
    }
    append_child(&actions, &copy_btn)?;

    // QR
    let qr_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-ghost")
        .text("▦ QR")
        .build();
    {
        let state = state.clone();
        let short_code = url.short_code.clone();
        let short_url = full_short_url.clone();
        on_click(&qr_btn, move |_| {
            state.set_qr_target(Some(QrTarget {
                short_code: short_code.clone(),
                short_url: short_url.clone(),
            }));
        })?;
    }
    append_child(&actions, &qr_btn)?;

    // Stats
    let stats_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-ghost")
        .text("📊 Stats")
        .build();
    {
        let state = state.clone();
        let short_code = url.short_code.clone();
        on_click(&stats_btn, move |_| {
            state.route.navigate(&Route::Analytics(short_code.clone()));
        })?;
    }
    append_child(&actions, &stats_btn)?;

    // Edit (solo en las páginas de gestión)
    if editable {
        let edit_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-ghost")
            .text("✏️ Edit")
            .build();
        {
            let state = state.clone();
            let url = url.clone();
            on_click(&edit_btn, move |_| {
                state.set_edit_link(Some(url.clone()));
            })?;
        }
        append_child(&actions, &edit_btn)?;
    }

    // Delete
    let delete_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-ghost btn-danger")
        .text("🗑")
        .build();
    {
        let url = url.clone();
        on_click(&delete_btn, move |_| {
            on_delete(url.clone());
        })?;
    }
    append_child(&actions, &delete_btn)?;

    append_child(&bottom_row, &date)?;
    append_child(&bottom_row, &actions)?;

    append_child(&card, &top_row)?;
    append_child(&card, &original)?;
    append_child(&card, &bottom_row)?;

    Ok(card)
}

/// Copiar al portapapeles con feedback temporal en el botón
fn copy_to_clipboard(state: &AppState, text: String, button: Element) {
    let state = state.clone();
    spawn_local(async move {
        let Some(win) = web_sys::window() else { return };
        let promise = win.navigator().clipboard().write_text(&text);
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => {
                state.toast_success("Link copied!");
                set_text_content(&button, "✓ Copied");
                let _ = add_class(&button, "copied");

                let button = button.clone();
                gloo_timers::callback::Timeout::new(2000, move || {
                    set_text_content(&button, "📋 Copy");
                    let _ = remove_class(&button, "copied");
                })
                .forget();
            }
            Err(_) => {
                log::warn!("⚠️ No se pudo copiar al portapapeles");
                state.toast_error("Could not copy link");
            }
        }
    });
}
