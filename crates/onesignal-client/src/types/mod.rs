/*
[INPUT]:  OneSignal request schemas and serde requirements
[OUTPUT]: Typed request payloads with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod app;
pub mod csv_export;
pub mod notification;

pub use app::AppSettings;
pub use csv_export::{CsvExportRequest, ExtraField};
pub use notification::{
    DEFAULT_LANGUAGE, DEFAULT_SEGMENT, DelayedOption, IosBadgeType, Notification, Target,
};
