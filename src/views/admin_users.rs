// ============================================================================
// ADMIN USERS VIEW - Tabla de usuarios con edición y borrado
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{ElementBuilder, add_class, append_child, create_element, get_element_by_id, input_value, on_click, on_input, remove_class, set_attribute, set_class_name, set_inner_html};
use crate::models::ManagedUser;
use crate::state::AppState;
use crate::utils::format::format_date;
use crate::viewmodels::admin_viewmodel::{build_user_patch, filter_users, AdminViewModel};
use crate::views::app::ensure_users_loaded;
use crate::views::form::{form_group, password_group};
use crate::views::sidebar::render_sidebar;

pub fn render_admin_users(state: &AppState) -> Result<Element, JsValue> {
    ensure_users_loaded(state);

    let layout = ElementBuilder::new("div")?.class("dashboard-layout").build();
    append_child(&layout, &render_sidebar(state)?)?;

    let main = ElementBuilder::new("main")?.class("dashboard-main").build();

    let header = ElementBuilder::new("div")?.class("page-header with-search").build();
    let titles = ElementBuilder::new("div")?.build();
    let title = ElementBuilder::new("h1")?.text("User Management").build();
    let subtitle = ElementBuilder::new("p")?
        .class("muted")
        .text("Manage all registered users")
        .build();
    append_child(&titles, &title)?;
    append_child(&titles, &subtitle)?;
    append_child(&header, &titles)?;

    let search = Rc::new(RefCell::new(String::new()));
    let search_input = create_element("input")?;
    set_attribute(&search_input, "type", "text")?;
    set_attribute(&search_input, "placeholder", "Search users...")?;
    set_class_name(&search_input, "form-input search-input");
    append_child(&header, &search_input)?;
    append_child(&main, &header)?;

    let users = state.users_cache.borrow().clone();

    match users {
        None => {
            let loading = ElementBuilder::new("div")?
                .class("loading-block muted")
                .text("Loading...")
                .build();
            append_child(&main, &loading)?;
        }
        Some(users) => {
            let table_container = ElementBuilder::new("div")?
                .id("users-table")?
                .class("table-card")
                .build();
            render_users_table(state, &table_container, &users, "")?;
            append_child(&main, &table_container)?;

            {
                let state = state.clone();
                let search = search.clone();
                let table_container = table_container.clone();
                let users = users.clone();
                on_input(&search_input, move |e| {
                    if let Some(value) = input_value(&e) {
                        *search.borrow_mut() = value;
                        let _ = render_users_table(&state, &table_container, &users, &search.borrow());
                    }
                })?;
            }
        }
    }

    append_child(&layout, &main)?;

    // Modal de edición
    let modal = render_edit_user_modal_shell(state)?;
    append_child(&layout, &modal)?;
    update_edit_user_modal_element(state, &modal)?;

    Ok(layout)
}

fn render_users_table(
    state: &AppState,
    container: &Element,
    users: &[ManagedUser],
    search: &str,
) -> Result<(), JsValue> {
    set_inner_html(container, "");

    let filtered = filter_users(users, search);
    if filtered.is_empty() {
        let empty = ElementBuilder::new("div")?
            .class("empty-state")
            .text(if search.trim().is_empty() {
                "👥 No users yet"
            } else {
                "👥 No users found matching your search"
            })
            .build();
        append_child(container, &empty)?;
        return Ok(());
    }

    let table = ElementBuilder::new("table")?.class("data-table").build();

    let thead = ElementBuilder::new("thead")?.build();
    let head_row = ElementBuilder::new("tr")?.build();
    for heading in ["User", "Created", "Actions"] {
        let th = ElementBuilder::new("th")?.text(heading).build();
        append_child(&head_row, &th)?;
    }
    append_child(&thead, &head_row)?;
    append_child(&table, &thead)?;

    let tbody = ElementBuilder::new("tbody")?.build();
    for user in &filtered {
        let row = ElementBuilder::new("tr")?.build();

        // Usuario con avatar
        let user_cell = ElementBuilder::new("td")?.build();
        let user_wrap = ElementBuilder::new("div")?.class("table-user").build();
        let initial = user
            .username
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "U".to_string());
        let avatar = ElementBuilder::new("div")?
            .class("user-avatar")
            .text(&initial)
            .build();
        let name = ElementBuilder::new("span")?.text(&user.username).build();
        append_child(&user_wrap, &avatar)?;
        append_child(&user_wrap, &name)?;
        append_child(&user_cell, &user_wrap)?;

        let date_cell = ElementBuilder::new("td")?
            .class("muted")
            .text(&format_date(&user.created_at))
            .build();

        // Acciones
        let actions_cell = ElementBuilder::new("td")?.class("table-actions").build();

        let edit_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-ghost")
            .text("✏️ Edit")
            .build();
        {
            let state = state.clone();
            let user = user.clone();
            on_click(&edit_btn, move |_| {
                state.set_edit_user(Some(user.clone()));
            })?;
        }

        let delete_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-ghost btn-danger")
            .text("🗑 Delete")
            .build();
        {
            let state = state.clone();
            let user_id = user.id.clone();
            on_click(&delete_btn, move |_| {
                let confirmed = web_sys::window()
                    .and_then(|w| w.confirm_with_message("Are you sure you want to delete this user?").ok())
                    .unwrap_or(false);
                if !confirmed {
                    return;
                }

                let state = state.clone();
                let user_id = user_id.clone();
                spawn_local(async move {
                    let vm = AdminViewModel::new(state.session.clone());
                    match vm.delete_user(&user_id).await {
                        Ok(()) => {
                            state.invalidate_data();
                            state.toast_success("User deleted");
                            crate::rerender_app();
                        }
                        Err(e) => {
                            log::error!("❌ Error eliminando usuario: {}", e);
                            state.toast_error("Failed to delete user");
                        }
                    }
                });
            })?;
        }

        append_child(&actions_cell, &edit_btn)?;
        append_child(&actions_cell, &delete_btn)?;

        append_child(&row, &user_cell)?;
        append_child(&row, &date_cell)?;
        append_child(&row, &actions_cell)?;
        append_child(&tbody, &row)?;
    }
    append_child(&table, &tbody)?;
    append_child(container, &table)?;
    Ok(())
}

// ----------------------------------------------------------------------
// Modal de edición de usuario
// ----------------------------------------------------------------------

fn render_edit_user_modal_shell(state: &AppState) -> Result<Element, JsValue> {
    let modal = ElementBuilder::new("div")?
        .id("edit-user-modal")?
        .class("modal")
        .build();

    let content = ElementBuilder::new("div")?.class("modal-content").build();

    let header = ElementBuilder::new("div")?.class("modal-header").build();
    let title = ElementBuilder::new("h3")?.text("Edit User").build();
    let close_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-close")
        .text("✕")
        .build();
    {
        let state = state.clone();
        on_click(&close_btn, move |_| {
            state.set_edit_user(None);
        })?;
    }
    append_child(&header, &title)?;
    append_child(&header, &close_btn)?;

    let body = ElementBuilder::new("div")?
        .id("edit-user-modal-body")?
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
            state.set_edit_user(None);
        })?;
    }

    append_child(&content, &header)?;
    append_child(&content, &body)?;
    append_child(&modal, &content)?;
    Ok(modal)
}

/// Actualización incremental del modal de edición de usuario
pub fn update_edit_user_modal(state: &AppState) -> Result<(), JsValue> {
    let modal = get_element_by_id("edit-user-modal")
        .ok_or_else(|| JsValue::from_str("Modal not found, needs full render"))?;
    update_edit_user_modal_element(state, &modal)
}

fn update_edit_user_modal_element(state: &AppState, modal: &Element) -> Result<(), JsValue> {
    let editing = state.edit_user.borrow().clone();
    // Buscar dentro del propio modal: durante el render todavía no está en
    // el document
    let body = modal
        .query_selector("#edit-user-modal-body")
        .ok()
        .flatten()
        .ok_or_else(|| JsValue::from_str("Modal not found, needs full render"))?;

    match editing {
        Some(user) => {
            set_inner_html(&body, "");

            let username = Rc::new(RefCell::new(user.username.clone()));
            let password = Rc::new(RefCell::new(String::new()));
            let saving = Rc::new(RefCell::new(false));

            let username_group = form_group("edit-user-username", "Username", "Username", username.clone())?;
            let password_field = password_group(
                "edit-user-password",
                "New Password (optional)",
                "Leave blank to keep current password",
                password.clone(),
            )?;
            append_child(&body, &username_group)?;
            append_child(&body, &password_field)?;

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
                    state.set_edit_user(None);
                })?;
            }
            {
                let state = state.clone();
                let user = user.clone();
                let username = username.clone();
                let password = password.clone();
                let saving = saving.clone();
                on_click(&save_btn, move |_| {
                    let patch = build_user_patch(&user, username.borrow().trim(), &password.borrow());
                    if patch.is_empty() {
                        state.toast_error("No changes to save");
                        return;
                    }
                    if *saving.borrow() {
                        return;
                    }
                    *saving.borrow_mut() = true;

                    let state = state.clone();
                    let user_id = user.id.clone();
                    let saving = saving.clone();
                    spawn_local(async move {
                        let vm = AdminViewModel::new(state.session.clone());
                        match vm.update_user(&user_id, &patch).await {
                            Ok(()) => {
                                state.invalidate_data();
                                state.toast_success("User updated");
                                state.set_edit_user(None);
                                crate::rerender_app();
                            }
                            Err(e) => {
                                log::error!("❌ Error actualizando usuario: {}", e);
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
