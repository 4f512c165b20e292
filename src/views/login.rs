// ============================================================================
// LOGIN VIEW - Tabs de usuario / admin
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{ElementBuilder, add_class, append_child, create_element, on_click, on_submit, remove_class, set_class_name};
use crate::state::{AppState, Route};
use crate::viewmodels::AuthViewModel;
use crate::views::form::{form_group, password_group};

/// Renderizar vista de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login() llamado");

    let screen = ElementBuilder::new("div")?.class("auth-screen").build();
    let container = ElementBuilder::new("div")?.class("auth-container").build();

    // Header
    let header = ElementBuilder::new("div")?.class("auth-header").build();
    let logo = ElementBuilder::new("a")?
        .attr("href", &Route::Home.to_hash())?
        .class("logo-link")
        .build();
    let logo_icon = ElementBuilder::new("div")?
        .class("logo-icon")
        .text("⚡")
        .build();
    let logo_text = ElementBuilder::new("span")?
        .class("logo-text")
        .text("LinkShort")
        .build();
    append_child(&logo, &logo_icon)?;
    append_child(&logo, &logo_text)?;

    let title = ElementBuilder::new("h2")?.text("Sign in").build();
    let subtitle = ElementBuilder::new("p")?
        .class("muted")
        .text("Choose your account type to continue")
        .build();

    append_child(&header, &logo)?;
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;

    // Tabs
    let tabs = ElementBuilder::new("div")?.class("tabs").build();
    let user_tab = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("tab active")
        .text("👤 User")
        .build();
    let admin_tab = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("tab")
        .text("🛡 Admin")
        .build();
    append_child(&tabs, &user_tab)?;
    append_child(&tabs, &admin_tab)?;

    // Panels
    let user_panel = render_login_form(state, false)?;
    let admin_panel = render_login_form(state, true)?;
    set_class_name(&user_panel, "tab-panel active");
    set_class_name(&admin_panel, "tab-panel");

    // Cambio de tab: alternar clases active
    {
        let user_tab_c = user_tab.clone();
        let admin_tab_c = admin_tab.clone();
        let user_panel_c = user_panel.clone();
        let admin_panel_c = admin_panel.clone();
        on_click(&user_tab, move |_| {
            let _ = add_class(&user_tab_c, "active");
            let _ = remove_class(&admin_tab_c, "active");
            let _ = add_class(&user_panel_c, "active");
            let _ = remove_class(&admin_panel_c, "active");
        })?;
    }
    {
        let user_tab_c = user_tab.clone();
        let admin_tab_c = admin_tab.clone();
        let user_panel_c = user_panel.clone();
        let admin_panel_c = admin_panel.clone();
        on_click(&admin_tab, move |_| {
            let _ = add_class(&admin_tab_c, "active");
            let _ = remove_class(&user_tab_c, "active");
            let _ = add_class(&admin_panel_c, "active");
            let _ = remove_class(&user_panel_c, "active");
        })?;
    }

    // Link a registro
    let register_hint = ElementBuilder::new("p")?
        .class("auth-hint")
        .text("Don't have an account? ")
        .build();
    let register_link = ElementBuilder::new("a")?
        .attr("href", &Route::Register.to_hash())?
        .class("text-link")
        .text("Sign up")
        .build();
    append_child(&register_hint, &register_link)?;

    append_child(&container, &header)?;
    append_child(&container, &tabs)?;
    append_child(&container, &user_panel)?;
    append_child(&container, &admin_panel)?;
    append_child(&container, &register_hint)?;
    append_child(&screen, &container)?;

    Ok(screen)
}

/// Formulario de login (usuario o admin según `admin`)
fn render_login_form(state: &AppState, admin: bool) -> Result<Element, JsValue> {
    let username = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));
    let loading = Rc::new(RefCell::new(false));

    let form = create_element("form")?;
    set_class_name(&form, "auth-form");

    let prefix = if admin { "admin" } else { "user" };
    let username_group = form_group(
        &format!("{}-username", prefix),
        if admin { "Admin Username" } else { "Username" },
        "Enter your username",
        username.clone(),
    )?;
    let password_field = password_group(
        &format!("{}-password", prefix),
        if admin { "Admin Password" } else { "Password" },
        "Enter your password",
        password.clone(),
    )?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class(if admin { "btn btn-admin" } else { "btn btn-gradient" })
        .text(if admin { "Sign in as Admin" } else { "Sign in" })
        .build();

    {
        let state = state.clone();
        let username = username.clone();
        let password = password.clone();
        let loading = loading.clone();

        on_submit(&form, move |_| {
            let username_val = username.borrow().clone();
            let password_val = password.borrow().clone();

            if username_val.is_empty() || password_val.is_empty() {
                state.toast_error("Please fill in all fields");
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
                let result = if admin {
                    vm.login_admin(&username_val, &password_val).await
                } else {
                    vm.login_user(&username_val, &password_val).await
                };

                match result {
                    Ok(session) => {
                        log::info!("✅ [LOGIN] Login exitoso: {}", session.user.username);
                        state.invalidate_data();
                        state.toast_success(if admin {
                            "Welcome back, Admin!"
                        } else {
                            "Welcome back!"
                        });
                        state.route.navigate(if admin { &Route::Admin } else { &Route::Dashboard });
                    }
                    Err(e) => {
                        log::error!("❌ [LOGIN] Error en login: {}", e);
                        state.toast_error(e.to_string());
                    }
                }
                *loading.borrow_mut() = false;
            });
        })?;
    }

    if admin {
        let note = ElementBuilder::new("div")?
            .class("admin-note")
            .text("Admin accounts are pre-configured. Contact your system administrator if you need access.")
            .build();
        append_child(&form, &note)?;
    }

    append_child(&form, &username_group)?;
    append_child(&form, &password_field)?;
    append_child(&form, &submit_btn)?;

    Ok(form)
}
