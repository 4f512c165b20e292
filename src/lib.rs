// ============================================================================
// LINKSHORT - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lógica de negocio
// - Services: Comunicación API + pipeline de auth + session store
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

mod models;
mod services;
mod viewmodels;
mod state;
mod dom;
mod views;
mod utils;
mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_logger::Config;
use crate::app::App;
use crate::services::SESSION_INVALIDATED_EVENT;
use crate::state::{Route, UpdateType};
use std::cell::RefCell;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging en consola
    console_error_panic_hook::set_once();

    wasm_logger::init(Config::default());
    log::info!("🚀 LinkShort - Rust Puro + MVVM");

    // Crear y renderizar app
    let mut app = App::new()?;
    app.render()?;

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Listeners globales: se registran UNA sola vez en init()
    if let Some(win) = web_sys::window() {
        // Navegación por hash
        let on_hashchange = wasm_bindgen::closure::Closure::wrap(Box::new(move |_e: web_sys::Event| {
            APP.with(|app_cell| {
                if let Some(ref app) = *app_cell.borrow() {
                    app.state().route.sync_from_location();
                }
            });
            rerender_app();
        }) as Box<dyn FnMut(web_sys::Event)>);
        win.add_event_listener_with_callback("hashchange", on_hashchange.as_ref().unchecked_ref())?;
        on_hashchange.forget();

        // El pipeline avisa que la sesión murió; el shell navega al login
        let on_invalidated = wasm_bindgen::closure::Closure::wrap(Box::new(move |_e: web_sys::Event| {
            log::warn!("🔒 [MAIN] Evento sessionInvalidated recibido, volviendo al login");
            APP.with(|app_cell| {
                if let Some(ref app) = *app_cell.borrow() {
                    app.state().invalidate_data();
                    app.state().route.navigate(&Route::Login);
                }
            });
            rerender_app();
        }) as Box<dyn FnMut(web_sys::Event)>);
        win.add_event_listener_with_callback(SESSION_INVALIDATED_EVENT, on_invalidated.as_ref().unchecked_ref())?;
        on_invalidated.forget();
    }

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Actualizar la app con tipo específico (incremental con fallback a full)
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        match update_type {
            UpdateType::Incremental(inc_type) => {
                let needs_full_render = {
                    if let Some(ref app) = *app_cell.borrow() {
                        match app.update_incremental(inc_type.clone()) {
                            Ok(()) => false,
                            Err(e) => {
                                // Si el contenedor no existe en esta página,
                                // caer a re-render completo
                                let error_str = format!("{:?}", e);
                                if error_str.contains("needs full render") {
                                    true
                                } else {
                                    log::error!("❌ Error en actualización incremental: {:?}", e);
                                    false
                                }
                            }
                        }
                    } else {
                        log::warn!("⚠️ [UPDATE] App no está inicializada");
                        false
                    }
                };

                if needs_full_render {
                    if let Some(ref mut app_mut) = *app_cell.borrow_mut() {
                        let _ = app_mut.render();
                    }
                }
            }
            UpdateType::FullRender => {
                if let Some(ref mut app_mut) = *app_cell.borrow_mut() {
                    if let Err(e) = app_mut.render() {
                        log::error!("❌ Error re-renderizando: {:?}", e);
                    }
                } else {
                    log::warn!("⚠️ [RERENDER] App no está inicializada");
                }
            }
        }
    });
}
