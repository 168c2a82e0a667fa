/*
[INPUT]:  HTTP client configuration, authentication mode and API endpoints
[OUTPUT]: Raw JSON results of OneSignal REST calls
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod app;
pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod user;

pub use error::{OneSignalError, Result};

pub use app::AppClient;
pub use auth::AuthMode;
pub use client::{BASE_URL, ClientConfig, OneSignalClient};
pub use endpoints::{ENDPOINTS, Endpoint};
pub use user::UserClient;
