// ============================================================================
// FORM HELPERS - Grupos label+input ligados a estado local del formulario
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, create_element, input_value, on_input, set_attribute, set_class_name};

/// Grupo label + input de texto, con el value reflejado en `value`
pub fn form_group(
    id: &str,
    label_text: &str,
    placeholder: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    input_group(id, label_text, placeholder, "text", value)
}

/// Grupo label + input de password
pub fn password_group(
    id: &str,
    label_text: &str,
    placeholder: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    input_group(id, label_text, placeholder, "password", value)
}

fn input_group(
    id: &str,
    label_text: &str,
    placeholder: &str,
    input_type: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = create_element("input")?;
    set_attribute(&input, "type", input_type)?;
    set_attribute(&input, "id", id)?;
    set_attribute(&input, "name", id)?;
    set_attribute(&input, "placeholder", placeholder)?;
    set_class_name(&input, "form-input");
    if !value.borrow().is_empty() {
        set_attribute(&input, "value", &value.borrow())?;
    }

    {
        let value = value.clone();
        on_input(&input, move |e| {
            if let Some(v) = input_value(&e) {
                *value.borrow_mut() = v;
            }
        })?;
    }

    append_child(&group, &label)?;
    append_child(&group, &input)?;

    Ok(group)
}
