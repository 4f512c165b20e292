// ============================================================================
// ADMIN LINKS VIEW - Tabla global de links
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, create_element, input_value, on_click, on_input, set_attribute, set_class_name, set_inner_html};
use crate::models::{filter_urls, ShortUrl};
use crate::state::{AppState, Route};
use crate::utils::format::{format_date, short_url, truncate_url};
use crate::viewmodels::LinksViewModel;
use crate::views::app::ensure_urls_loaded;
use crate::views::sidebar::render_sidebar;

pub fn render_admin_links(state: &AppState) -> Result<Element, JsValue> {
    ensure_urls_loaded(state);

    let layout = ElementBuilder::new("div")?.class("dashboard-layout").build();
    append_child(&layout, &render_sidebar(state)?)?;

    let main = ElementBuilder::new("main")?.class("dashboard-main").build();

    let header = ElementBuilder::new("div")?.class("page-header with-search").build();
    let titles = ElementBuilder::new("div")?.build();
    let title = ElementBuilder::new("h1")?.text("All Links").build();
    let subtitle = ElementBuilder::new("p")?
        .class("muted")
        .text("Manage every shortened link in the system")
        .build();
    append_child(&titles, &title)?;
    append_child(&titles, &subtitle)?;
    append_child(&header, &titles)?;

    let search = Rc::new(RefCell::new(String::new()));
    let search_input = create_element("input")?;
    set_attribute(&search_input, "type", "text")?;
    set_attribute(&search_input, "placeholder", "Search links...")?;
    set_class_name(&search_input, "form-input search-input");
    append_child(&header, &search_input)?;
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
            let table_container = ElementBuilder::new("div")?
                .id("admin-links-table")?
                .class("table-card")
                .build();
            render_links_table(state, &table_container, &urls, "")?;
            append_child(&main, &table_container)?;

            {
                let state = state.clone();
                let search = search.clone();
                let table_container = table_container.clone();
                let urls = urls.clone();
                on_input(&search_input, move |e| {
                    if let Some(value) = input_value(&e) {
                        *search.borrow_mut() = value;
                        let _ = render_links_table(&state, &table_container, &urls, &search.borrow());
                    }
                })?;
            }
        }
    }

    append_child(&layout, &main)?;
    Ok(layout)
}

fn render_links_table(
    state: &AppState,
    container: &Element,
    urls: &[ShortUrl],
    search: &str,
) -> Result<(), JsValue> {
    set_inner_html(container, "");

    let filtered = filter_urls(urls, search);
    if filtered.is_empty() {
        let empty = ElementBuilder::new("div")?
            .class("empty-state")
            .text(if search.trim().is_empty() {
                "🔗 No links yet"
            } else {
                "🔗 No links found matching your search"
            })
            .build();
        append_child(container, &empty)?;
        return Ok(());
    }

    let table = ElementBuilder::new("table")?.class("data-table").build();

    let thead = ElementBuilder::new("thead")?.build();
    let head_row = ElementBuilder::new("tr")?.build();
    for heading in ["Short Link", "Original URL", "Clicks", "Created", "Actions"] {
        let th = ElementBuilder::new("th")?.text(heading).build();
        append_child(&head_row, &th)?;
    }
    append_child(&thead, &head_row)?;
    append_child(&table, &thead)?;

    let tbody = ElementBuilder::new("tbody")?.build();
    for url in &filtered {
        let row = ElementBuilder::new("tr")?.build();

        let full_short_url = short_url(&url.short_code, None);
        let short_cell = ElementBuilder::new("td")?.build();
        let short_link = ElementBuilder::new("a")?
            .attr("href", &full_short_url)?
            .attr("target", "_blank")?
            .attr("rel", "noopener noreferrer")?
            .class("short-link")
            .text(&format!("/{}", url.short_code))
            .build();
        append_child(&short_cell, &short_link)?;

        let original_cell = ElementBuilder::new("td")?
            .class("muted")
            .attr("title", &url.original_url)?
            .text(&truncate_url(&url.original_url, 45))
            .build();

        let clicks_cell = ElementBuilder::new("td")?
            .text(&url.clicks.to_string())
            .build();

        let date_cell = ElementBuilder::new("td")?
            .class("muted")
            .text(&format_date(&url.created_at))
            .build();

        let actions_cell = ElementBuilder::new("td")?.class("table-actions").build();

        let stats_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-ghost")
            .text("📊 Stats")
            .build();
        {
            let state = state.clone();
            let short_code = url.short_code.clone();
            on_click(&stats_btn, move |_| {
                state.route.navigate(&Route::Analytics(short_code.clone()));
            })?;
        }

        let delete_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-ghost btn-danger")
            .text("🗑 Delete")
            .build();
        {
            let state = state.clone();
            let url_id = url.id.clone();
            on_click(&delete_btn, move |_| {
                let confirmed = web_sys::window()
                    .and_then(|w| w.confirm_with_message("Are you sure you want to delete this link?").ok())
                    .unwrap_or(false);
                if !confirmed {
                    return;
                }

                let state = state.clone();
                let url_id = url_id.clone();
                spawn_local(async move {
                    let vm = LinksViewModel::new(state.session.clone());
                    match vm.delete_link(&url_id).await {
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
            })?;
        }

        append_child(&actions_cell, &stats_btn)?;
        append_child(&actions_cell, &delete_btn)?;

        append_child(&row, &short_cell)?;
        append_child(&row, &original_cell)?;
        append_child(&row, &clicks_cell)?;
        append_child(&row, &date_cell)?;
        append_child(&row, &actions_cell)?;
        append_child(&tbody, &row)?;
    }
    append_child(&table, &tbody)?;
    append_child(container, &table)?;
    Ok(())
}
