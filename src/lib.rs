//! Meeting API Models
//!
//! Typed models for a video-conferencing and telephony vendor's REST API,
//! plus the wire-format adapters needed to read its irregular JSON.
//!
//! # Modules
//!
//! - `adapters`: enum wire values, integer status codes, custom question
//!   flattening and numeric-or-string fields
//! - `pagination`: the envelope shared by all list endpoints
//! - `paginator`: walks every page of a list through a `PageSource`
//! - `config`: pagination options loaded from the environment
//! - `models`: meetings, webinars, registrants, tickets, recordings,
//!   phone call logs and room devices
//!
//! # Transport
//!
//! The crate performs no I/O. An HTTP layer fetches response bodies and
//! hands the parsed JSON to these types, and implements `PageSource` when
//! it wants whole lists walked for it.

pub mod adapters;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod paginator;


// Re-export the main API types for ease of use
pub use adapters::{CodedEnum, CustomQuestionAnswer, WireEnum};
pub use config::PaginationOptions;
pub use error::AdapterError;
pub use pagination::{PageItem, PageRequest, PaginatedResponse, TokenField};
pub use paginator::{collect_all, PageSource};
