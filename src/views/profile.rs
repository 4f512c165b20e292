// ============================================================================
// PROFILE VIEW - Edición del perfil propio
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, create_element, on_submit, set_class_name};
use crate::models::ApiUserPatch;
use crate::state::AppState;
use crate::viewmodels::auth_viewmodel::{validate_password_change, AuthViewModel};
use crate::views::form::{form_group, password_group};
use crate::views::sidebar::render_sidebar;

pub fn render_profile(state: &AppState) -> Result<Element, JsValue> {
    let layout = ElementBuilder::new("div")?.class("dashboard-layout").build();
    append_child(&layout, &render_sidebar(state)?)?;

    let main = ElementBuilder::new("main")?.class("dashboard-main").build();

    let header = ElementBuilder::new("div")?.class("page-header").build();
    let title = ElementBuilder::new("h1")?.text("Profile").build();
    let subtitle = ElementBuilder::new("p")?
        .class("muted")
        .text("Manage your account settings")
        .build();
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;
    append_child(&main, &header)?;

    let Some(user) = state.session.current_user() else {
        // El guard de rutas ya evita esto; defensa mínima
        return Ok(layout);
    };

    let display_name = Rc::new(RefCell::new(user.display_name.clone().unwrap_or_default()));
    let new_password = Rc::new(RefCell::new(String::new()));
    let confirm_password = Rc::new(RefCell::new(String::new()));
    let saving = Rc::new(RefCell::new(false));

    let card = ElementBuilder::new("div")?.class("profile-card").build();

    // Username solo lectura
    let username_row = ElementBuilder::new("div")?.class("form-group").build();
    let username_label = ElementBuilder::new("label")?.text("Username").build();
    let username_value = ElementBuilder::new("p")?
        .class("readonly-value")
        .text(&user.username)
        .build();
    append_child(&username_row, &username_label)?;
    append_child(&username_row, &username_value)?;
    append_child(&card, &username_row)?;

    let form = create_element("form")?;
    set_class_name(&form, "profile-form");

    let display_group = form_group(
        "profile-display-name",
        "Display Name",
        "How should we call you?",
        display_name.clone(),
    )?;
    let password_field = password_group(
        "profile-new-password",
        "New Password",
        "Leave blank to keep current password",
        new_password.clone(),
    )?;
    let confirm_field = password_group(
        "profile-confirm-password",
        "Confirm New Password",
        "Repeat the new password",
        confirm_password.clone(),
    )?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-gradient")
        .text("💾 Save Changes")
        .build();

    {
        let state = state.clone();
        let user = user.clone();
        let display_name = display_name.clone();
        let new_password = new_password.clone();
        let confirm_password = confirm_password.clone();
        let saving = saving.clone();

        on_submit(&form, move |_| {
            let display_val = display_name.borrow().trim().to_string();
            let password_val = new_password.borrow().clone();
            let confirm_val = confirm_password.borrow().clone();

            if let Err(message) = validate_password_change(&password_val, &confirm_val) {
                state.toast_error(message);
                return;
            }

            let mut patch = ApiUserPatch::default();
            if display_val != user.display_name.clone().unwrap_or_default() {
                patch.display_name = Some(display_val);
            }
            if !password_val.is_empty() {
                patch.password = Some(password_val);
            }
            if patch.is_empty() {
                state.toast_error("No changes to save");
                return;
            }
            if *saving.borrow() {
                return;
            }
            *saving.borrow_mut() = true;

            let state = state.clone();
            let saving = saving.clone();
            spawn_local(async move {
                let vm = AuthViewModel::new(state.session.clone());
                match vm.update_profile(patch).await {
                    Ok(updated) => {
                        log::info!("✅ Perfil actualizado: {}", updated.username);
                        state.toast_success("Profile updated successfully");
                        crate::rerender_app();
                    }
                    Err(e) => {
                        log::error!("❌ Error actualizando perfil: {}", e);
                        state.toast_error(e.to_string());
                    }
                }
                *saving.borrow_mut() = false;
            });
        })?;
    }

    append_child(&form, &display_group)?;
    append_child(&form, &password_field)?;
    append_child(&form, &confirm_field)?;
    append_child(&form, &submit_btn)?;
    append_child(&card, &form)?;
    append_child(&main, &card)?;

    append_child(&layout, &main)?;
    Ok(layout)
}
