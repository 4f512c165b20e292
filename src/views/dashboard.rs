// ============================================================================
// DASHBOARD VIEW - Resumen del usuario + creación de links
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{ElementBuilder, add_class, append_child, on_click, remove_class};
use crate::models::ShortUrl;
use crate::state::AppState;
use crate::viewmodels::links_viewmodel::{link_stats, LinksViewModel};
use crate::views::app::ensure_urls_loaded;
use crate::views::shorten_form::{render_shorten_form, ShortenContext};
use crate::views::sidebar::render_sidebar;
use crate::views::url_card::render_url_card;

pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    ensure_urls_loaded(state);

    let layout = ElementBuilder::new("div")?.class("dashboard-layout").build();
    append_child(&layout, &render_sidebar(state)?)?;

    let main = ElementBuilder::new("main")?.class("dashboard-main").build();

    // Header
    let username = state
        .session
        .current_user()
        .map(|u| u.username)
        .unwrap_or_default();
    let header = ElementBuilder::new("div")?.class("page-header").build();
    let title = ElementBuilder::new("h1")?
        .text(&format!("Welcome back, {}!", username))
        .build();
    let subtitle = ElementBuilder::new("p")?
        .class("muted")
        .text("Here's what's happening with your links.")
        .build();
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;
    append_child(&main, &header)?;

    let urls = state.urls_cache.borrow().clone();

    match urls {
        None => {
            let loading = ElementBuilder::new("div")?
                .class("loading-block muted")
                .text("Loading...")
                .build();
            append_child(&main, &loading)?;
        }
        Some(urls) => {
            // Stats
            let stats = link_stats(&urls);
            let stats_grid = ElementBuilder::new("div")?.class("stats-grid").build();
            let tiles = [
                ("🔗", "Total Links", stats.total_links.to_string()),
                ("🖱", "Total Clicks", stats.total_clicks.to_string()),
                ("📊", "Avg. Clicks", stats.avg_clicks.to_string()),
            ];
            for (icon, label, value) in tiles {
                append_child(&stats_grid, &stat_tile(icon, label, &value, None)?)?;
            }
            append_child(&main, &stats_grid)?;

            // Toggle del formulario de creación
            let create_btn = ElementBuilder::new("button")?
                .attr("type", "button")?
                .class("btn btn-gradient")
                .text("+ Create New Link")
                .build();
            append_child(&main, &create_btn)?;

            let form_panel = ElementBuilder::new("div")?
                .class("create-panel")
                .build();
            let panel_title = ElementBuilder::new("h3")?
                .text("Create a new short link")
                .build();
            append_child(&form_panel, &panel_title)?;
            let form = render_shorten_form(state, ShortenContext::Dashboard)?;
            append_child(&form_panel, &form)?;
            append_child(&main, &form_panel)?;

            {
                let panel = form_panel.clone();
                on_click(&create_btn, move |_| {
                    if panel.class_list().contains("open") {
                        let _ = remove_class(&panel, "open");
                    } else {
                        let _ = add_class(&panel, "open");
                    }
                })?;
            }

            // Lista de links
            let section_title = ElementBuilder::new("h2")?.text("Your Links").build();
            append_child(&main, &section_title)?;

            if urls.is_empty() {
                let empty = ElementBuilder::new("div")?
                    .class("empty-state")
                    .text("🔗 No links yet. Create your first one!")
                    .build();
                append_child(&main, &empty)?;
            } else {
                let list = ElementBuilder::new("div")?.class("url-list").build();
                let on_delete = delete_link_callback(state);
                for url in &urls {
                    let card = render_url_card(state, url, None, false, on_delete.clone())?;
                    append_child(&list, &card)?;
                }
                append_child(&main, &list)?;
            }
        }
    }

    append_child(&layout, &main)?;
    Ok(layout)
}

/// Tarjeta de stat reutilizada por dashboard y admin
pub(crate) fn stat_tile(
    icon: &str,
    label: &str,
    value: &str,
    trend: Option<&str>,
) -> Result<Element, JsValue> {
    let tile = ElementBuilder::new("div")?.class("stat-tile").build();

    let top = ElementBuilder::new("div")?.class("stat-top").build();
    let icon_el = ElementBuilder::new("div")?
        .class("stat-icon")
        .text(icon)
        .build();
    append_child(&top, &icon_el)?;
    if let Some(trend) = trend {
        let trend_el = ElementBuilder::new("span")?
            .class("stat-trend")
            .text(trend)
            .build();
        append_child(&top, &trend_el)?;
    }

    let value_el = ElementBuilder::new("p")?
        .class("stat-value")
        .text(value)
        .build();
    let label_el = ElementBuilder::new("p")?
        .class("stat-label muted")
        .text(label)
        .build();

    append_child(&tile, &top)?;
    append_child(&tile, &value_el)?;
    append_child(&tile, &label_el)?;
    Ok(tile)
}

/// Callback de borrado compartido por las páginas con listas de links
pub(crate) fn delete_link_callback(state: &AppState) -> Rc<dyn Fn(ShortUrl)> {
    let state = state.clone();
    Rc::new(move |url: ShortUrl| {
        let state = state.clone();
        spawn_local(async move {
            let vm = LinksViewModel::new(state.session.clone());
            match vm.delete_link(&url.id).await {
                Ok(()) => {
                    state.invalidate_data();
                    state.toast_success("Link deleted");
                    crate::rerender_app();
                }
                Err(e) => {
                    log::error!("❌ Error eliminando link: {}", e);
                    state.toast_error("Failed to delete link");
                }
            }
        });
    })
}
