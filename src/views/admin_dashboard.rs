// ============================================================================
// ADMIN DASHBOARD VIEW - Agregados globales + actividad reciente
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::models::{ManagedUser, ShortUrl};
use crate::state::AppState;
use crate::utils::format::{format_date, truncate_url};
use crate::viewmodels::links_viewmodel::link_stats;
use crate::views::app::{ensure_urls_loaded, ensure_users_loaded};
use crate::views::dashboard::stat_tile;
use crate::views::sidebar::render_sidebar;

pub fn render_admin_dashboard(state: &AppState) -> Result<Element, JsValue> {
    ensure_urls_loaded(state);
    ensure_users_loaded(state);

    let layout = ElementBuilder::new("div")?.class("dashboard-layout").build();
    append_child(&layout, &render_sidebar(state)?)?;

    let main = ElementBuilder::new("main")?.class("dashboard-main").build();

    let username = state
        .session
        .current_user()
        .map(|u| u.username)
        .unwrap_or_default();
    let header = ElementBuilder::new("div")?.class("page-header").build();
    let title = ElementBuilder::new("h1")?.text("Admin Dashboard").build();
    let subtitle = ElementBuilder::new("p")?
        .class("muted")
        .text(&format!("Welcome back, {}", username))
        .build();
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;
    append_child(&main, &header)?;

    let urls = state.urls_cache.borrow().clone();
    let users = state.users_cache.borrow().clone();

    match (urls, users) {
        (Some(urls), Some(users)) => {
            let stats = link_stats(&urls);

            let grid = ElementBuilder::new("div")?.class("stats-grid wide").build();
            append_child(
                &grid,
                &stat_tile("👥", "Total Users", &users.len().to_string(), Some("+12%"))?,
            )?;
            append_child(
                &grid,
                &stat_tile("🔗", "Total Links", &stats.total_links.to_string(), Some("+8%"))?,
            )?;
            append_child(
                &grid,
                &stat_tile("🖱", "Total Clicks", &stats.total_clicks.to_string(), Some("+23%"))?,
            )?;
            append_child(
                &grid,
                &stat_tile("📈", "Avg. Clicks/Link", &stats.avg_clicks.to_string(), Some("+5%"))?,
            )?;
            append_child(&main, &grid)?;

            let row = ElementBuilder::new("div")?.class("recent-row").build();
            append_child(&row, &render_recent_users(&users)?)?;
            append_child(&row, &render_recent_links(&urls)?)?;
            append_child(&main, &row)?;
        }
        _ => {
            let loading = ElementBuilder::new("div")?
                .class("loading-block muted")
                .text("Loading...")
                .build();
            append_child(&main, &loading)?;
        }
    }

    append_child(&layout, &main)?;
    Ok(layout)
}

fn render_recent_users(users: &[ManagedUser]) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("recent-card").build();
    let title = ElementBuilder::new("h2")?.text("Recent Users").build();
    append_child(&card, &title)?;

    for user in users.iter().take(5) {
        let row = ElementBuilder::new("div")?.class("recent-item").build();
        let name = ElementBuilder::new("span")?.text(&user.username).build();
        let date = ElementBuilder::new("span")?
            .class("muted")
            .text(&format_date(&user.created_at))
            .build();
        append_child(&row, &name)?;
        append_child(&row, &date)?;
        append_child(&card, &row)?;
    }
    Ok(card)
}

fn render_recent_links(urls: &[ShortUrl]) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("recent-card").build();
    let title = ElementBuilder::new("h2")?.text("Recent Links").build();
    append_child(&card, &title)?;

    for url in urls.iter().take(5) {
        let row = ElementBuilder::new("div")?.class("recent-item").build();
        let code = ElementBuilder::new("span")?
            .class("short-link")
            .text(&format!("/{}", url.short_code))
            .build();
        let original = ElementBuilder::new("span")?
            .class("muted")
            .text(&truncate_url(&url.original_url, 40))
            .build();
        append_child(&row, &code)?;
        append_child(&row, &original)?;
        append_child(&card, &row)?;
    }
    Ok(card)
}
