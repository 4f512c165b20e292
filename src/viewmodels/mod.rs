pub mod auth_viewmodel;
pub mod links_viewmodel;
pub mod admin_viewmodel;
pub mod analytics_viewmodel;

pub use auth_viewmodel::AuthViewModel;
pub use links_viewmodel::LinksViewModel;
pub use admin_viewmodel::AdminViewModel;
pub use analytics_viewmodel::AnalyticsViewModel;
