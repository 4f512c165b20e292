// ============================================================================
// REGISTER VIEW - Alta de cuenta de usuario
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, create_element, on_submit, set_class_name};
use crate::state::{AppState, Route};
use crate::viewmodels::auth_viewmodel::{validate_registration, AuthViewModel};
use crate::views::form::{form_group, password_group};

const BENEFITS: [&str; 5] = [
    "Unlimited short links",
    "Advanced analytics",
    "QR code generation",
    "Custom domains",
    "UTM builder",
];

pub fn render_register(state: &AppState) -> Result<Element, JsValue> {
    let screen = ElementBuilder::new("div")?.class("auth-screen").build();
    let container = ElementBuilder::new("div")?.class("auth-container").build();

    // Header
    let header = ElementBuilder::new("div")?.class("auth-header").build();
    let back_link = ElementBuilder::new("a")?
        .attr("href", &Route::Home.to_hash())?
        .class("text-link back-link")
        .text("← Back to home")
        .build();
    let title = ElementBuilder::new("h2")?.text("Create your account").build();
    let subtitle = ElementBuilder::new("p")?
        .class("muted")
        .text("All features free, forever")
        .build();
    append_child(&header, &back_link)?;
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;

    // Formulario
    let username = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));
    let confirm = Rc::new(RefCell::new(String::new()));
    let loading = Rc::new(RefCell::new(false));

    let form = create_element("form")?;
    set_class_name(&form, "auth-form");

    let username_group = form_group("reg-username", "Username", "Choose a username", username.clone())?;
    let password_field = password_group("reg-password", "Password", "At least 6 characters", password.clone())?;
    let confirm_field = password_group("reg-confirm", "Confirm Password", "Repeat your password", confirm.clone())?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-gradient")
        .text("Create Free Account")
        .build();

    {
        let state = state.clone();
        let username = username.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let loading = loading.clone();

        on_submit(&form, move |_| {
            let username_val = username.borrow().clone();
            let password_val = password.borrow().clone();
            let confirm_val = confirm.borrow().clone();

            if let Err(message) = validate_registration(&username_val, &password_val, &confirm_val) {
                state.toast_error(message);
                return;
            }
            if *loading.borrow() {
                return;
            }
            *loading.borrow_mut() = true;

            let state = state.clone();
            let loading = loading.clone();
            spawn_local(async move {
                let vm = AuthViewModel::new(state.session.clone());
                match vm.register(&username_val, &password_val).await {
                    Ok(()) => {
                        log::info!("✅ Registro exitoso: {}", username_val);
                        state.toast_success("Account created! Please sign in.");
                        state.route.navigate(&Route::Login);
                    }
                    Err(e) => {
                        log::error!("❌ Error en registro: {}", e);
                        state.toast_error(e.to_string());
                    }
                }
                *loading.borrow_mut() = false;
            });
        })?;
    }

    append_child(&form, &username_group)?;
    append_child(&form, &password_field)?;
    append_child(&form, &confirm_field)?;
    append_child(&form, &submit_btn)?;

    // Lista de beneficios
    let benefits = ElementBuilder::new("ul")?.class("benefits-list").build();
    for benefit in BENEFITS {
        let item = ElementBuilder::new("li")?
            .text(&format!("✓ {}", benefit))
            .build();
        append_child(&benefits, &item)?;
    }

    let login_hint = ElementBuilder::new("p")?
        .class("auth-hint")
        .text("Already have an account? ")
        .build();
    let login_link = ElementBuilder::new("a")?
        .attr("href", &Route::Login.to_hash())?
        .class("text-link")
        .text("Sign in")
        .build();
    append_child(&login_hint, &login_link)?;

    append_child(&container, &header)?;
    append_child(&container, &form)?;
    append_child(&container, &benefits)?;
    append_child(&container, &login_hint)?;
    append_child(&screen, &container)?;

    Ok(screen)
}
