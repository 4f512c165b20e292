pub mod user;
pub mod auth;
pub mod url;
pub mod analytics;

pub use user::{ApiUserPatch, AuthUser, ManagedUser, Role};
pub use auth::{Session, LoginRequest, LoginResponse, RegisterRequest, RefreshTokenRequest, RefreshTokenResponse};
pub use url::{ShortUrl, filter_urls};
pub use analytics::{LinkAnalytics, DayClicks, NamedCount, generate_analytics};
