// ============================================================================
// ROUTE STATE - Routing por hash (#/dashboard, #/analytics/:code, ...)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Rutas de la aplicación
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
    DashboardLinks,
    DashboardProfile,
    Admin,
    AdminUsers,
    AdminLinks,
    Analytics(String),
    NotFound,
}

impl Route {
    /// Parsear el hash de la URL ("#/dashboard/links" → DashboardLinks)
    pub fn parse(hash: &str) -> Route {
        let path = hash.trim_start_matches('#');
        let path = path.trim_start_matches('/');
        let path = path.trim_end_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["dashboard"] => Route::Dashboard,
            ["dashboard", "links"] => Route::DashboardLinks,
            ["dashboard", "profile"] => Route::DashboardProfile,
            ["admin"] => Route::Admin,
            ["admin", "users"] => Route::AdminUsers,
            ["admin", "links"] => Route::AdminLinks,
            ["analytics", code] => Route::Analytics(code.to_string()),
            _ => Route::NotFound,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Login => "#/login".to_string(),
            Route::Register => "#/register".to_string(),
            Route::Dashboard => "#/dashboard".to_string(),
            Route::DashboardLinks => "#/dashboard/links".to_string(),
            Route::DashboardProfile => "#/dashboard/profile".to_string(),
            Route::Admin => "#/admin".to_string(),
            Route::AdminUsers => "#/admin/users".to_string(),
            Route::AdminLinks => "#/admin/links".to_string(),
            Route::Analytics(code) => format!("#/analytics/{}", code),
            Route::NotFound => "#/404".to_string(),
        }
    }

    /// Rutas que exigen sesión de usuario
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Dashboard
                | Route::DashboardLinks
                | Route::DashboardProfile
                | Route::Admin
                | Route::AdminUsers
                | Route::AdminLinks
        )
    }

    /// Rutas que además exigen rol admin
    pub fn requires_admin(&self) -> bool {
        matches!(self, Route::Admin | Route::AdminUsers | Route::AdminLinks)
    }
}

/// Estado de ruta actual
#[derive(Clone)]
pub struct RouteState {
    current: Rc<RefCell<Route>>,
}

impl RouteState {
    pub fn new() -> Self {
        Self {
            current: Rc::new(RefCell::new(Self::route_from_location())),
        }
    }

    fn route_from_location() -> Route {
        let hash = web_sys::window()
            .map(|w| w.location().hash().unwrap_or_default())
            .unwrap_or_default();
        Route::parse(&hash)
    }

    pub fn current(&self) -> Route {
        self.current.borrow().clone()
    }

    /// Releer la ruta desde location.hash (llamado en el listener hashchange)
    pub fn sync_from_location(&self) {
        *self.current.borrow_mut() = Self::route_from_location();
    }

    /// Navegar a una ruta: actualiza el hash del navegador.
    /// El listener hashchange se encarga del re-render.
    pub fn navigate(&self, route: &Route) {
        *self.current.borrow_mut() = route.clone();
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_hash(&route.to_hash());
        }
    }
}

impl Default for RouteState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("#/"), Route::Home);
        assert_eq!(Route::parse("#/login"), Route::Login);
        assert_eq!(Route::parse("#/dashboard/links"), Route::DashboardLinks);
        assert_eq!(Route::parse("#/admin/users"), Route::AdminUsers);
        assert_eq!(
            Route::parse("#/analytics/x1y2"),
            Route::Analytics("x1y2".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_is_not_found() {
        assert_eq!(Route::parse("#/no-existe"), Route::NotFound);
        assert_eq!(Route::parse("#/dashboard/extra/deep"), Route::NotFound);
    }

    #[test]
    fn test_hash_round_trip() {
        let routes = [
            Route::Home,
            Route::Login,
            Route::Register,
            Route::Dashboard,
            Route::DashboardLinks,
            Route::DashboardProfile,
            Route::Admin,
            Route::AdminUsers,
            Route::AdminLinks,
            Route::Analytics("abc".to_string()),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.to_hash()), route);
        }
    }

    #[test]
    fn test_guards() {
        assert!(!Route::Home.requires_auth());
        assert!(!Route::Analytics("x".to_string()).requires_auth());
        assert!(Route::Dashboard.requires_auth());
        assert!(!Route::Dashboard.requires_admin());
        assert!(Route::AdminUsers.requires_auth());
        assert!(Route::AdminUsers.requires_admin());
    }
}
