// ============================================================================
// APP VIEW - Shell principal: splash, guards de ruta, página y overlays
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::services::ApiError;
use crate::state::{AppState, Route};
use crate::viewmodels::{AdminViewModel, LinksViewModel};
use crate::views;

/// Renderizar la aplicación completa según el estado
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let shell = ElementBuilder::new("div")?.class("app-shell").build();

    // Mientras restore() está pendiente no se muestra contenido protegido
    if state.session.is_loading() {
        let splash = render_splash()?;
        append_child(&shell, &splash)?;
        let toasts = views::toast::render_toast_container(state)?;
        append_child(&shell, &toasts)?;
        return Ok(shell);
    }

    let requested = state.route.current();
    let resolved = resolve_route(
        &requested,
        state.session.is_authenticated(),
        state.session.is_admin(),
    );
    if resolved != requested {
        log::info!("🔒 Ruta {:?} denegada, redirigiendo a login", requested);
        state.route.navigate(&resolved);
    }

    let page = match &resolved {
        Route::Home => views::home::render_home(state)?,
        Route::Login => views::login::render_login(state)?,
        Route::Register => views::register::render_register(state)?,
        Route::Dashboard => views::dashboard::render_dashboard(state)?,
        Route::DashboardLinks => views::links::render_links(state)?,
        Route::DashboardProfile => views::profile::render_profile(state)?,
        Route::Admin => views::admin_dashboard::render_admin_dashboard(state)?,
        Route::AdminUsers => views::admin_users::render_admin_users(state)?,
        Route::AdminLinks => views::admin_links::render_admin_links(state)?,
        Route::Analytics(code) => views::analytics::render_analytics(state, code)?,
        Route::NotFound => render_not_found()?,
    };
    append_child(&shell, &page)?;

    // Overlays globales
    let toasts = views::toast::render_toast_container(state)?;
    append_child(&shell, &toasts)?;
    let qr_modal = views::qr_modal::render_qr_modal(state)?;
    append_child(&shell, &qr_modal)?;

    Ok(shell)
}

/// Guards de ruta: sin sesión no hay dashboard, sin rol admin no hay admin
pub fn resolve_route(route: &Route, authenticated: bool, admin: bool) -> Route {
    if route.requires_auth() && !authenticated {
        return Route::Login;
    }
    if route.requires_admin() && !admin {
        return Route::Login;
    }
    route.clone()
}

fn render_splash() -> Result<Element, JsValue> {
    let splash = ElementBuilder::new("div")?.class("splash-screen").build();
    let logo = ElementBuilder::new("div")?
        .class("logo-icon splash-logo")
        .text("⚡")
        .build();
    let text = ElementBuilder::new("p")?
        .class("splash-text")
        .text("Loading...")
        .build();
    append_child(&splash, &logo)?;
    append_child(&splash, &text)?;
    Ok(splash)
}

fn render_not_found() -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page not-found").build();
    let title = ElementBuilder::new("h1")?.text("404").build();
    let text = ElementBuilder::new("p")?
        .class("muted")
        .text("Page not found")
        .build();
    let home_link = ElementBuilder::new("a")?
        .class("btn btn-gradient")
        .attr("href", &Route::Home.to_hash())?
        .text("Go Home")
        .build();
    append_child(&page, &title)?;
    append_child(&page, &text)?;
    append_child(&page, &home_link)?;
    Ok(page)
}

// ----------------------------------------------------------------------
// Carga perezosa de datos por página. El flag de fetching evita que el
// re-render dispare requests duplicados.
// ----------------------------------------------------------------------

pub(crate) fn ensure_urls_loaded(state: &AppState) {
    if state.urls_cache.borrow().is_some() || *state.fetching_urls.borrow() {
        return;
    }
    *state.fetching_urls.borrow_mut() = true;

    let state = state.clone();
    spawn_local(async move {
        let vm = LinksViewModel::new(state.session.clone());
        match vm.fetch_urls().await {
            Ok(urls) => {
                log::info!("📋 Links cargados: {}", urls.len());
                *state.urls_cache.borrow_mut() = Some(urls);
            }
            Err(e) => {
                log::error!("❌ Error cargando links: {}", e);
                if !matches!(e, ApiError::SessionInvalidated { .. }) {
                    state.toast_error(e.to_string());
                }
                *state.urls_cache.borrow_mut() = Some(Vec::new());
            }
        }
        *state.fetching_urls.borrow_mut() = false;
        crate::rerender_app();
    });
}

pub(crate) fn ensure_users_loaded(state: &AppState) {
    if state.users_cache.borrow().is_some() || *state.fetching_users.borrow() {
        return;
    }
    *state.fetching_users.borrow_mut() = true;

    let state = state.clone();
    spawn_local(async move {
        let vm = AdminViewModel::new(state.session.clone());
        match vm.fetch_users().await {
            Ok(users) => {
                log::info!("📋 Usuarios cargados: {}", users.len());
                *state.users_cache.borrow_mut() = Some(users);
            }
            Err(e) => {
                log::error!("❌ Error cargando usuarios: {}", e);
                if !matches!(e, ApiError::SessionInvalidated { .. }) {
                    state.toast_error(e.to_string());
                }
                *state.users_cache.borrow_mut() = Some(Vec::new());
            }
        }
        *state.fetching_users.borrow_mut() = false;
        crate::rerender_app();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes_pass_through() {
        assert_eq!(resolve_route(&Route::Home, false, false), Route::Home);
        assert_eq!(
            resolve_route(&Route::Analytics("x".to_string()), false, false),
            Route::Analytics("x".to_string())
        );
    }

    #[test]
    fn test_dashboard_requires_session() {
        assert_eq!(resolve_route(&Route::Dashboard, false, false), Route::Login);
        assert_eq!(resolve_route(&Route::Dashboard, true, false), Route::Dashboard);
    }

    #[test]
    fn test_admin_requires_admin_role() {
        assert_eq!(resolve_route(&Route::Admin, true, false), Route::Login);
        assert_eq!(resolve_route(&Route::Admin, true, true), Route::Admin);
        assert_eq!(resolve_route(&Route::AdminUsers, false, false), Route::Login);
    }
}
