// ============================================================================
// UTM BUILDER - Sección colapsable de parámetros de campaña
// ============================================================================
// El estado vive en el Rc<RefCell<UtmParams>> del formulario padre; este
// widget solo lo edita. Con valores iniciales no vacíos (edición de link)
// arranca expandido.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, add_class, append_child, create_element, input_value, on_click, on_input, remove_class, set_attribute, set_class_name};
use crate::utils::utm::UtmParams;

pub fn render_utm_builder(utm: Rc<RefCell<UtmParams>>) -> Result<Element, JsValue> {
    let expanded = !utm.borrow().is_empty();

    let builder = ElementBuilder::new("div")?
        .class(if expanded { "utm-builder expanded" } else { "utm-builder" })
        .build();

    // Toggle
    let toggle = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("utm-toggle")
        .build();

    let toggle_label = ElementBuilder::new("span")?
        .class("utm-toggle-label")
        .text("✨ UTM Campaign Builder")
        .build();

    let badge = ElementBuilder::new("span")?
        .class("utm-badge")
        .text("FREE")
        .build();

    let chevron = ElementBuilder::new("span")?
        .class("chevron")
        .text("▼")
        .build();

    append_child(&toggle, &toggle_label)?;
    append_child(&toggle, &badge)?;
    append_child(&toggle, &chevron)?;

    {
        let builder_clone = builder.clone();
        on_click(&toggle, move |_| {
            if builder_clone.class_list().contains("expanded") {
                let _ = remove_class(&builder_clone, "expanded");
            } else {
                let _ = add_class(&builder_clone, "expanded");
            }
        })?;
    }

    // Campos
    let fields = ElementBuilder::new("div")?.class("utm-fields").build();

    let initial = utm.borrow().clone();

    let source_field = {
        let utm = utm.clone();
        utm_field("utm_source", "Source", "e.g., facebook", initial.source.as_deref(), move |value| {
            utm.borrow_mut().source = non_empty(value);
        })?
    };
    let medium_field = {
        let utm = utm.clone();
        utm_field("utm_medium", "Medium", "e.g., social", initial.medium.as_deref(), move |value| {
            utm.borrow_mut().medium = non_empty(value);
        })?
    };
    let campaign_field = {
        let utm = utm.clone();
        utm_field("utm_campaign", "Campaign", "e.g., summer_sale", initial.campaign.as_deref(), move |value| {
            utm.borrow_mut().campaign = non_empty(value);
        })?
    };

    append_child(&fields, &source_field)?;
    append_child(&fields, &medium_field)?;
    append_child(&fields, &campaign_field)?;

    append_child(&builder, &toggle)?;
    append_child(&builder, &fields)?;

    Ok(builder)
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

fn utm_field(
    id: &str,
    label_text: &str,
    placeholder: &str,
    initial: Option<&str>,
    mut on_change: impl FnMut(String) + 'static,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = create_element("input")?;
    set_attribute(&input, "type", "text")?;
    set_attribute(&input, "id", id)?;
    set_attribute(&input, "placeholder", placeholder)?;
    if let Some(initial) = initial {
        set_attribute(&input, "value", initial)?;
    }
    set_class_name(&input, "form-input");

    on_input(&input, move |e| {
        if let Some(value) = input_value(&e) {
            on_change(value);
        }
    })?;

    append_child(&group, &label)?;
    append_child(&group, &input)?;

    Ok(group)
}
