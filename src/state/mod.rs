// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod route_state;
pub mod app_state;

pub use route_state::{Route, RouteState};
pub use app_state::{AppState, IncrementalUpdate, QrTarget, Toast, ToastKind, UpdateType};
