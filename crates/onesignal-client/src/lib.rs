/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public OneSignal client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    AppClient,
    AuthMode,
    ClientConfig,
    Endpoint,
    OneSignalClient,
    OneSignalError,
    Result,
    UserClient,
};

// HTTP method type used by the client verbs
pub use reqwest::Method;

// Re-export all types
pub use types::*;
