// ============================================================================
// LINKS VIEW - "My Links": búsqueda, lista y edición
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{ElementBuilder, add_class, append_child, create_element, get_element_by_id, input_value, on_click, on_input, remove_class, set_attribute, set_class_name, set_inner_html};
use crate::models::{filter_urls, ShortUrl};
use crate::state::AppState;
use crate::utils::utm::split_utm;
use crate::viewmodels::LinksViewModel;
use crate::views::app::ensure_urls_loaded;
use crate::views::dashboard::delete_link_callback;
use crate::views::form::form_group;
use crate::views::sidebar::render_sidebar;
use crate::views::url_card::render_url_card;
use crate::views::utm_builder::render_utm_builder;

pub fn render_links(state: &AppState) -> Result<Element, JsValue> {
    ensure_urls_loaded(state);

    let layout = ElementBuilder::new("div")?.class("dashboard-layout").build();
    append_child(&layout, &render_sidebar(state)?)?;

    let main = ElementBuilder::new("main")?.class("dashboard-main").build();

    // Header con búsqueda
    let header = ElementBuilder::new("div")?.class("page-header with-search").build();
    let titles = ElementBuilder::new("div")?.build();
    let title = ElementBuilder::new("h1")?.text("My Links").build();
    let subtitle = ElementBuilder::new("p")?
        .class("muted")
        .text("Manage all your shortened links")
        .build();
    append_child(&titles, &title)?;
    append_child(&titles, &subtitle)?;
    append_child(&header, &titles)?;

    let search = Rc::new(RefCell::new(String::new()));
    let search_input = create_element("input")?;
    set_attribute(&search_input, "type", "text")?;
    set_attribute(&search_input, "placeholder", "Search links...")?;
    set_class_name(&search_input, "form-input search-input");
    append_child(&header, &search_input)?;
    append_child(&main, &header)?;

    let urls = state.urls_cache.borrow().clone();

    match urls {
        None => {
            let loading = ElementBuilder::new("div")?
                .class("loading-block muted")
                .text("Loading...")
                .build();
            append_child(&main, &loading)?;
        }
        Some(urls) => {
            let list = ElementBuilder::new("div")?
                .id("links-list")?
                .class("url-list")
                .build();
            render_links_list(state, &list, &urls, "")?;
            append_child(&main, &list)?;

            // Filtrado en vivo: re-render del contenedor de la lista
            {
                let state = state.clone();
                let search = search.clone();
                let list = list.clone();
                let urls = urls.clone();
                on_input(&search_input, move |e| {
                    if let Some(value) = input_value(&e) {
                        *search.borrow_mut() = value;
                        let _ = render_links_list(&state, &list, &urls, &search.borrow());
                    }
                })?;
            }
        }
    }

    append_child(&layout, &main)?;

    // Modal de edición (oculto hasta que se abra)
    let modal = render_edit_link_modal_shell(state)?;
    append_child(&layout, &modal)?;
    update_edit_link_modal_element(state, &modal)?;

    Ok(layout)
}

/// Re-renderizar solo la lista filtrada
fn render_links_list(
    state: &AppState,
    list: &Element,
    urls: &[ShortUrl],
    search: &str,
) -> Result<(), JsValue> {
    set_inner_html(list, "");

    let filtered = filter_urls(urls, search);
    if filtered.is_empty() {
        let empty = ElementBuilder::new("div")?
            .class("empty-state")
            .text(if search.trim().is_empty() {
                "🔗 No links yet"
            } else {
                "🔗 No links found matching your search"
            })
            .build();
        append_child(list, &empty)?;
        return Ok(());
    }

    let on_delete = delete_link_callback(state);
    for url in &filtered {
        let card = render_url_card(state, url, None, true, on_delete.clone())?;
        append_child(list, &card)?;
    }
    Ok(())
}

// ----------------------------------------------------------------------
// Modal de edición: URL destino + UTM re-poblados desde el link
// ----------------------------------------------------------------------

fn render_edit_link_modal_shell(state: &AppState) -> Result<Element, JsValue> {
    let modal = ElementBuilder::new("div")?
        .id("edit-link-modal")?
        .class("modal")
        .build();

    let content = ElementBuilder::new("div")?
        .class("modal-content")
        .build();

    let header = ElementBuilder::new("div")?.class("modal-header").build();
    let title = ElementBuilder::new("h3")?.text("Edit Link").build();
    let close_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-close")
        .text("✕")
        .build();
    {
        let state = state.clone();
        on_click(&close_btn, move |_| {
            state.set_edit_link(None);
        })?;
    }
    append_child(&header, &title)?;
    append_child(&header, &close_btn)?;

    let body = ElementBuilder::new("div")?
        .id("edit-link-modal-body")?
        .class("modal-body")
        .build();

    {
        on_click(&content, move |e: web_sys::MouseEvent| {
            e.stop_propagation();
        })?;
    }
    {
        let state = state.clone();
        on_click(&modal, move |_| {
            state.set_edit_link(None);
        })?;
    }

    append_child(&content, &header)?;
    append_child(&content, &body)?;
    append_child(&modal, &content)?;
    Ok(modal)
}

/// Actualización incremental del modal de edición
pub fn update_edit_link_modal(state: &AppState) -> Result<(), JsValue> {
    let modal = get_element_by_id("edit-link-modal")
        .ok_or_else(|| JsValue::from_str("Modal not found, needs full render"))?;
    update_edit_link_modal_element(state, &modal)
}

fn update_edit_link_modal_element(state: &AppState, modal: &Element) -> Result<(), JsValue> {
    let editing = state.edit_link.borrow().clone();
    // Buscar dentro del propio modal: durante el render todavía no está en
    // el document
    let body = modal
        .query_selector("#edit-link-modal-body")
        .ok()
        .flatten()
        .ok_or_else(|| JsValue::from_str("Modal not found, needs full render"))?;

    match editing {
        Some(link) => {
            set_inner_html(&body, "");

            // La URL guardada se separa en base + UTM para re-poblar el builder
            let (base, utm_params) = split_utm(&link.original_url);
            let base_url = Rc::new(RefCell::new(base));
            let utm = Rc::new(RefCell::new(utm_params));
            let saving = Rc::new(RefCell::new(false));

            let code_note = ElementBuilder::new("p")?
                .class("muted")
                .text(&format!("Short code: {}", link.short_code))
                .build();
            append_child(&body, &code_note)?;

            let url_group = form_group(
                "edit-link-url",
                "Destination URL",
                "https://example.com",
                base_url.clone(),
            )?;
            append_child(&body, &url_group)?;

            let utm_builder = render_utm_builder(utm.clone())?;
            append_child(&body, &utm_builder)?;

            let footer = ElementBuilder::new("div")?.class("modal-footer").build();
            let cancel_btn = ElementBuilder::new("button")?
                .attr("type", "button")?
                .class("btn btn-outline")
                .text("Cancel")
                .build();
            let save_btn = ElementBuilder::new("button")?
                .attr("type", "button")?
                .class("btn btn-gradient")
                .text("Save Changes")
                .build();

            {
                let state = state.clone();
                on_click(&cancel_btn, move |_| {
                    state.set_edit_link(None);
                })?;
            }
            {
                let state = state.clone();
                let link_id = link.id.clone();
                let base_url = base_url.clone();
                let utm = utm.clone();
                let saving = saving.clone();
                on_click(&save_btn, move |_| {
                    let base_val = base_url.borrow().trim().to_string();
                    let utm_val = utm.borrow().clone();
                    if base_val.is_empty() {
                        state.toast_error("Please enter a URL");
                        return;
                    }
                    if *saving.borrow() {
                        return;
                    }
                    *saving.borrow_mut() = true;

                    let state = state.clone();
                    let link_id = link_id.clone();
                    let saving = saving.clone();
                    spawn_local(async move {
                        let vm = LinksViewModel::new(state.session.clone());
                        match vm.update_link(&link_id, &base_val, &utm_val).await {
                            Ok(()) => {
                                state.invalidate_data();
                                state.toast_success("Link updated");
                                state.set_edit_link(None);
                                crate::rerender_app();
                            }
                            Err(e) => {
                                log::error!("❌ Error actualizando link: {}", e);
                                state.toast_error(e.to_string());
                            }
                        }
                        *saving.borrow_mut() = false;
                    });
                })?;
            }

            append_child(&footer, &cancel_btn)?;
            append_child(&footer, &save_btn)?;
            append_child(&body, &footer)?;

            add_class(modal, "show")?;
        }
        None => {
            remove_class(modal, "show")?;
        }
    }
    Ok(())
}
