// ============================================================================
// SHORTEN FORM - Formulario de creación de links (landing y dashboard)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, create_element, on_submit, set_class_name};
use crate::models::ShortUrl;
use crate::state::AppState;
use crate::utils::utm::UtmParams;
use crate::viewmodels::links_viewmodel::{compose_target_url, LinksViewModel};
use crate::views::form::form_group;
use crate::views::utm_builder::render_utm_builder;

/// Dónde vive el formulario: decide el destino del link creado
#[derive(Clone, Copy, PartialEq)]
pub enum ShortenContext {
    /// Landing pública: el link se agrega a la lista local de la visita
    Landing,
    /// Dashboard: se invalida el cache y se recarga la lista real
    Dashboard,
}

pub fn render_shorten_form(state: &AppState, context: ShortenContext) -> Result<Element, JsValue> {
    let long_url = Rc::new(RefCell::new(String::new()));
    let custom_code = Rc::new(RefCell::new(String::new()));
    let utm = Rc::new(RefCell::new(UtmParams::default()));
    let submitting = Rc::new(RefCell::new(false));

    let form = create_element("form")?;
    set_class_name(&form, "shorten-form");

    let url_group = form_group(
        "long-url",
        "Long URL",
        "https://example.com/very-long-url",
        long_url.clone(),
    )?;
    let code_group = form_group(
        "custom-code",
        "Custom code (optional)",
        "my-custom-link",
        custom_code.clone(),
    )?;

    let fields_row = ElementBuilder::new("div")?.class("form-row").build();
    append_child(&fields_row, &url_group)?;
    append_child(&fields_row, &code_group)?;
    append_child(&form, &fields_row)?;

    // Dominio custom solo en la landing (display, no viaja al backend)
    if context == ShortenContext::Landing {
        let domain_group = form_group(
            "custom-domain",
            "Custom Domain",
            "https://your-domain.com",
            state_domain_cell(state),
        )?;
        append_child(&form, &domain_group)?;
    }

    let utm_builder = render_utm_builder(utm.clone())?;
    append_child(&form, &utm_builder)?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-gradient")
        .text(match context {
            ShortenContext::Landing => "Shorten →",
            ShortenContext::Dashboard => "Create Link",
        })
        .build();
    append_child(&form, &submit_btn)?;

    {
        let state = state.clone();
        let long_url = long_url.clone();
        let custom_code = custom_code.clone();
        let utm = utm.clone();
        let submitting = submitting.clone();

        on_submit(&form, move |_| {
            let long_url_val = long_url.borrow().trim().to_string();
            let custom_code_val = custom_code.borrow().trim().to_string();
            let utm_val = utm.borrow().clone();

            if long_url_val.is_empty() {
                state.toast_error("Please enter a URL");
                return;
            }
            if *submitting.borrow() {
                return;
            }
            *submitting.borrow_mut() = true;

            let state = state.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                let authenticated = state.session.is_authenticated();
                let vm = LinksViewModel::new(state.session.clone());
                match vm
                    .create_link(&long_url_val, &custom_code_val, &utm_val, authenticated)
                    .await
                {
                    Ok(response) => {
                        log::info!("✅ Link creado: {}", response.short_code);
                        match context {
                            ShortenContext::Landing => {
                                let created = ShortUrl {
                                    id: format!("local-{}", response.short_code),
                                    original_url: compose_target_url(&long_url_val, &utm_val),
                                    short_code: response.short_code,
                                    clicks: 0,
                                    created_at: now_iso(),
                                };
                                state.created_urls.borrow_mut().insert(0, created);
                                state.toast_success("Link shortened successfully!");
                            }
                            ShortenContext::Dashboard => {
                                state.invalidate_data();
                                state.toast_success("Link created!");
                            }
                        }
                        crate::rerender_app();
                    }
                    Err(e) => {
                        log::error!("❌ Error creando link: {}", e);
                        state.toast_error(e.to_string());
                    }
                }
                *submitting.borrow_mut() = false;
            });
        })?;
    }

    Ok(form)
}

/// El dominio custom persiste en el estado global para que las cards de la
/// landing lo usen tras el re-render
fn state_domain_cell(state: &AppState) -> Rc<RefCell<String>> {
    state.custom_domain.clone()
}

fn now_iso() -> String {
    js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default()
}
