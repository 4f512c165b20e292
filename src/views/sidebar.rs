// ============================================================================
// SIDEBAR - Navegación compartida de dashboard y admin
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, on_click};
use crate::state::{AppState, Route};
use crate::viewmodels::AuthViewModel;

struct NavItem {
    label: &'static str,
    route: Route,
    icon: &'static str,
}

pub fn render_sidebar(state: &AppState) -> Result<Element, JsValue> {
    let is_admin = state.session.is_admin();
    let current = state.route.current();

    let nav_items: Vec<NavItem> = if is_admin {
        vec![
            NavItem { label: "Dashboard", route: Route::Admin, icon: "▦" },
            NavItem { label: "All Links", route: Route::AdminLinks, icon: "🔗" },
            NavItem { label: "Users", route: Route::AdminUsers, icon: "👥" },
        ]
    } else {
        vec![
            NavItem { label: "Dashboard", route: Route::Dashboard, icon: "▦" },
            NavItem { label: "My Links", route: Route::DashboardLinks, icon: "🔗" },
            NavItem { label: "Profile", route: Route::DashboardProfile, icon: "👤" },
        ]
    };

    let sidebar = ElementBuilder::new("aside")?
        .class(if is_admin { "sidebar sidebar-admin" } else { "sidebar" })
        .build();

    // Logo
    let logo_section = ElementBuilder::new("div")?.class("sidebar-logo").build();
    let logo_link = ElementBuilder::new("a")?
        .attr("href", &Route::Home.to_hash())?
        .class("logo-link")
        .build();
    let logo_icon = ElementBuilder::new("div")?
        .class("logo-icon")
        .text("⚡")
        .build();
    let logo_text = ElementBuilder::new("span")?
        .class("logo-text")
        .text(if is_admin { "Admin" } else { "LinkShort" })
        .build();
    append_child(&logo_link, &logo_icon)?;
    append_child(&logo_link, &logo_text)?;
    append_child(&logo_section, &logo_link)?;

    // Navegación
    let nav = ElementBuilder::new("nav")?.class("sidebar-nav").build();
    for item in &nav_items {
        let is_active = current == item.route;
        let nav_link = ElementBuilder::new("a")?
            .attr("href", &item.route.to_hash())?
            .class(if is_active { "nav-item active" } else { "nav-item" })
            .build();
        let icon = ElementBuilder::new("span")?
            .class("nav-icon")
            .text(item.icon)
            .build();
        let label = ElementBuilder::new("span")?.text(item.label).build();
        append_child(&nav_link, &icon)?;
        append_child(&nav_link, &label)?;
        append_child(&nav, &nav_link)?;
    }

    // Usuario + logout
    let footer = ElementBuilder::new("div")?.class("sidebar-footer").build();

    if let Some(user) = state.session.current_user() {
        let user_info = ElementBuilder::new("div")?.class("sidebar-user").build();

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

        let user_text = ElementBuilder::new("div")?.class("user-text").build();
        let display = user.display_name.as_deref().unwrap_or(&user.username);
        let name = ElementBuilder::new("p")?
            .class("user-name")
            .text(display)
            .build();
        let role = ElementBuilder::new("p")?
            .class("user-role")
            .text(user.role.as_str())
            .build();
        append_child(&user_text, &name)?;
        append_child(&user_text, &role)?;

        append_child(&user_info, &avatar)?;
        append_child(&user_info, &user_text)?;
        append_child(&footer, &user_info)?;
    }

    let logout_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-logout")
        .text("⎋ Logout")
        .build();
    {
        let state = state.clone();
        on_click(&logout_btn, move |_| {
            let vm = AuthViewModel::new(state.session.clone());
            vm.logout();
            state.invalidate_data();
            state.route.navigate(&Route::Login);
        })?;
    }
    append_child(&footer, &logout_btn)?;

    append_child(&sidebar, &logo_section)?;
    append_child(&sidebar, &nav)?;
    append_child(&sidebar, &footer)?;

    Ok(sidebar)
}
