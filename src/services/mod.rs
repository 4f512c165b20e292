pub mod http;
pub mod session_store;
pub mod api_client;

pub use http::{ApiError, ApiRequest, HttpClient, HttpMethod, SESSION_INVALIDATED_EVENT};
pub use session_store::SessionStore;
pub use api_client::ApiClient;
