// ============================================================================
// HOME VIEW - Landing pública con acortador
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::state::{AppState, Route};
use crate::views::shorten_form::{render_shorten_form, ShortenContext};
use crate::views::url_card::render_url_card;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🔗",
        title: "Custom Short Links",
        description: "Create memorable, branded short links that reflect your identity.",
    },
    Feature {
        icon: "📊",
        title: "Advanced Analytics",
        description: "Track clicks, locations, devices, and more in real-time.",
    },
    Feature {
        icon: "▦",
        title: "QR Code Generator",
        description: "Generate QR codes for any link instantly.",
    },
    Feature {
        icon: "🌐",
        title: "Custom Domains",
        description: "Use your own domain for ultimate brand consistency.",
    },
];

pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page home").build();

    append_child(&page, &render_navbar(state)?)?;
    append_child(&page, &render_hero(state)?)?;
    append_child(&page, &render_features()?)?;
    append_child(&page, &render_footer()?)?;

    Ok(page)
}

fn render_navbar(state: &AppState) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?.class("navbar").build();

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
    append_child(&nav, &logo)?;

    let actions = ElementBuilder::new("div")?.class("navbar-actions").build();

    if state.session.is_authenticated() {
        let dashboard_route = if state.session.is_admin() {
            Route::Admin
        } else {
            Route::Dashboard
        };
        let dashboard_btn = ElementBuilder::new("a")?
            .attr("href", &dashboard_route.to_hash())?
            .class("btn btn-gradient")
            .text("Dashboard →")
            .build();
        append_child(&actions, &dashboard_btn)?;
    } else {
        let login_btn = ElementBuilder::new("a")?
            .attr("href", &Route::Login.to_hash())?
            .class("btn btn-ghost-link")
            .text("Login")
            .build();
        let register_btn = ElementBuilder::new("a")?
            .attr("href", &Route::Register.to_hash())?
            .class("btn btn-gradient")
            .text("Get Started →")
            .build();
        append_child(&actions, &login_btn)?;
        append_child(&actions, &register_btn)?;
    }

    append_child(&nav, &actions)?;
    Ok(nav)
}

fn render_hero(state: &AppState) -> Result<Element, JsValue> {
    let hero = ElementBuilder::new("section")?.class("hero").build();

    let badge = ElementBuilder::new("div")?
        .class("hero-badge")
        .text("✨ All features FREE - No credit card required")
        .build();

    let title = ElementBuilder::new("h1")?
        .class("hero-title")
        .html("Make every <span class=\"gradient-text\">connection</span><br>count")
        .build();

    let subtitle = ElementBuilder::new("p")?
        .class("hero-subtitle")
        .text("Create short links, QR codes, and Link-in-bio pages. Share them anywhere. Track what's working and what's not. All for free.")
        .build();

    append_child(&hero, &badge)?;
    append_child(&hero, &title)?;
    append_child(&hero, &subtitle)?;

    let form = render_shorten_form(state, ShortenContext::Landing)?;
    append_child(&hero, &form)?;

    // Links creados en esta visita
    let created = state.created_urls.borrow().clone();
    if !created.is_empty() {
        let section = ElementBuilder::new("div")?.class("created-links").build();
        let heading = ElementBuilder::new("h3")?
            .text("Your shortened links")
            .build();
        append_child(&section, &heading)?;

        let custom_domain = state.custom_domain.borrow().clone();
        let domain = if custom_domain.trim().is_empty() {
            None
        } else {
            Some(custom_domain)
        };

        let on_delete: Rc<dyn Fn(crate::models::ShortUrl)> = {
            let state = state.clone();
            Rc::new(move |url| {
                state.created_urls.borrow_mut().retain(|u| u.id != url.id);
                state.toast_success("Link removed");
                crate::rerender_app();
            })
        };

        for url in &created {
            let card = render_url_card(state, url, domain.as_deref(), false, on_delete.clone())?;
            append_child(&section, &card)?;
        }
        append_child(&hero, &section)?;
    }

    Ok(hero)
}

fn render_features() -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?.class("features").build();

    let heading = ElementBuilder::new("h2")?
        .html("Everything you need, <span class=\"gradient-text\">completely free</span>")
        .build();
    let sub = ElementBuilder::new("p")?
        .class("muted")
        .text("No hidden fees, no premium tiers. Every feature is available to everyone.")
        .build();
    append_child(&section, &heading)?;
    append_child(&section, &sub)?;

    let grid = ElementBuilder::new("div")?.class("features-grid").build();
    for feature in &FEATURES {
        let card = ElementBuilder::new("div")?.class("feature-card").build();
        let icon = ElementBuilder::new("div")?
            .class("feature-icon")
            .text(feature.icon)
            .build();
        let title = ElementBuilder::new("h3")?.text(feature.title).build();
        let description = ElementBuilder::new("p")?
            .class("muted")
            .text(feature.description)
            .build();
        append_child(&card, &icon)?;
        append_child(&card, &title)?;
        append_child(&card, &description)?;
        append_child(&grid, &card)?;
    }
    append_child(&section, &grid)?;

    Ok(section)
}

fn render_footer() -> Result<Element, JsValue> {
    let footer = ElementBuilder::new("footer")?.class("footer").build();
    let brand = ElementBuilder::new("div")?.class("logo-link").build();
    let icon = ElementBuilder::new("div")?.class("logo-icon").text("⚡").build();
    let text = ElementBuilder::new("span")?
        .class("logo-text")
        .text("LinkShort")
        .build();
    append_child(&brand, &icon)?;
    append_child(&brand, &text)?;

    let note = ElementBuilder::new("p")?
        .class("muted")
        .text("© 2026 LinkShort. All features free, forever.")
        .build();

    append_child(&footer, &brand)?;
    append_child(&footer, &note)?;
    Ok(footer)
}
