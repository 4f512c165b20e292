// ============================================================================
// ANALYTICS VIEW - Stats de un short code (desglose simulado)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::models::{LinkAnalytics, NamedCount, ShortUrl};
use crate::state::{AppState, Route};
use crate::utils::format::{format_date, short_url};
use crate::viewmodels::analytics_viewmodel::{avg_daily_clicks, AnalyticsViewModel};
use crate::views::app::ensure_urls_loaded;
use crate::views::dashboard::stat_tile;

pub fn render_analytics(state: &AppState, short_code: &str) -> Result<Element, JsValue> {
    ensure_urls_loaded(state);

    let page = ElementBuilder::new("div")?.class("page analytics").build();

    let urls = state.urls_cache.borrow().clone();
    let Some(urls) = urls else {
        let loading = ElementBuilder::new("div")?
            .class("loading-block muted")
            .text("Loading analytics...")
            .build();
        append_child(&page, &loading)?;
        return Ok(page);
    };

    let Some(url) = urls.iter().find(|u| u.short_code == short_code) else {
        let empty = ElementBuilder::new("div")?.class("empty-state").build();
        let text = ElementBuilder::new("p")?
            .class("muted")
            .text("Link not found")
            .build();
        let home_btn = ElementBuilder::new("a")?
            .attr("href", &Route::Home.to_hash())?
            .class("btn btn-gradient")
            .text("Go Home")
            .build();
        append_child(&empty, &text)?;
        append_child(&empty, &home_btn)?;
        append_child(&page, &empty)?;
        return Ok(page);
    };

    // El desglose se genera una vez por short code y se cachea para que el
    // re-render no cambie los números
    let analytics = {
        let cached = state.analytics_cache.borrow().clone();
        match cached {
            Some((code, analytics)) if code == short_code => analytics,
            _ => {
                let vm = AnalyticsViewModel::new(state.session.clone());
                let analytics = vm.build_analytics(url);
                *state.analytics_cache.borrow_mut() =
                    Some((short_code.to_string(), analytics.clone()));
                analytics
            }
        }
    };

    append_child(&page, &render_header(url)?)?;
    append_child(&page, &render_overview(url)?)?;
    append_child(&page, &render_clicks_chart(&analytics)?)?;

    let breakdown_row = ElementBuilder::new("div")?.class("charts-row").build();
    append_child(&breakdown_row, &render_named_counts("Traffic Sources", &analytics.sources, url.clicks)?)?;
    append_child(&breakdown_row, &render_named_counts("Devices", &analytics.devices, url.clicks)?)?;
    append_child(&page, &breakdown_row)?;

    append_child(&page, &render_named_counts("Top Countries", &analytics.countries, url.clicks)?)?;

    let note = ElementBuilder::new("p")?
        .class("muted fine-print")
        .text("Note: Detailed analytics data is simulated for demonstration purposes.")
        .build();
    append_child(&page, &note)?;

    Ok(page)
}

fn render_header(url: &ShortUrl) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?.class("page-header").build();

    let back = ElementBuilder::new("a")?
        .attr("href", &Route::Home.to_hash())?
        .class("text-link back-link")
        .text("← Back")
        .build();
    let title = ElementBuilder::new("h1")?.text("Link Analytics").build();

    let full_short_url = short_url(&url.short_code, None);
    let link = ElementBuilder::new("a")?
        .attr("href", &full_short_url)?
        .attr("target", "_blank")?
        .attr("rel", "noopener noreferrer")?
        .class("short-link")
        .text(&full_short_url)
        .build();

    append_child(&header, &back)?;
    append_child(&header, &title)?;
    append_child(&header, &link)?;
    Ok(header)
}

fn render_overview(url: &ShortUrl) -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?.class("stats-grid").build();
    append_child(&grid, &stat_tile("🖱", "Total Clicks", &url.clicks.to_string(), None)?)?;
    append_child(
        &grid,
        &stat_tile("📈", "Avg. Daily", &avg_daily_clicks(url.clicks).to_string(), None)?,
    )?;
    append_child(&grid, &stat_tile("📅", "Created", &format_date(&url.created_at), None)?)?;
    Ok(grid)
}

/// Clicks por día como columnas (alto proporcional al máximo)
fn render_clicks_chart(analytics: &LinkAnalytics) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("chart-card").build();
    let title = ElementBuilder::new("h2")?.text("Clicks Over Time").build();
    append_child(&card, &title)?;

    let max = analytics
        .clicks_per_day
        .iter()
        .map(|d| d.clicks)
        .max()
        .unwrap_or(0)
        .max(1);

    let chart = ElementBuilder::new("div")?.class("bar-chart").build();
    for day in &analytics.clicks_per_day {
        let column = ElementBuilder::new("div")?.class("bar-column").build();

        let value = ElementBuilder::new("span")?
            .class("bar-value")
            .text(&day.clicks.to_string())
            .build();

        let height = (day.clicks as f64 / max as f64 * 100.0).round() as u32;
        let bar = ElementBuilder::new("div")?
            .class("bar")
            .attr("style", &format!("height: {}%", height.max(2)))?
            .build();

        let label = ElementBuilder::new("span")?
            .class("bar-label muted")
            .text(&day.date)
            .build();

        append_child(&column, &value)?;
        append_child(&column, &bar)?;
        append_child(&column, &label)?;
        append_child(&chart, &column)?;
    }
    append_child(&card, &chart)?;
    Ok(card)
}

/// Desglose con barras horizontales y porcentaje sobre el total
fn render_named_counts(title: &str, counts: &[NamedCount], total: u64) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("chart-card").build();
    let heading = ElementBuilder::new("h2")?.text(title).build();
    append_child(&card, &heading)?;

    for count in counts {
        let percentage = if total > 0 {
            (count.value as f64 / total as f64 * 100.0).round() as u32
        } else {
            0
        };

        let row = ElementBuilder::new("div")?.class("breakdown-row").build();

        let labels = ElementBuilder::new("div")?.class("breakdown-labels").build();
        let name = ElementBuilder::new("span")?.text(&count.name).build();
        let value = ElementBuilder::new("span")?
            .class("muted")
            .text(&format!("{}%", percentage))
            .build();
        append_child(&labels, &name)?;
        append_child(&labels, &value)?;

        let track = ElementBuilder::new("div")?.class("progress-track").build();
        let fill = ElementBuilder::new("div")?
            .class("progress-fill")
            .attr("style", &format!("width: {}%", percentage))?
            .build();
        append_child(&track, &fill)?;

        append_child(&row, &labels)?;
        append_child(&row, &track)?;
        append_child(&card, &row)?;
    }
    Ok(card)
}
