//! http_foundation - HTTP vocabulary and request/response primitives.
//!
//! This crate provides the shared foundation for HTTP-handling libraries:
//! the method and status-code vocabularies and the value holders that
//! carry one exchange's data. There is no network I/O and no protocol
//! state machine here; everything is plain in-memory data accessed
//! synchronously.
//!
//! # Features
//!
//! - **Method vocabulary**: the closed set of recognized request methods,
//!   matched case-sensitively
//! - **Status vocabulary**: the status-code registry with canonical reason
//!   phrases and 1xx-5xx classification
//! - **Request holder**: query, form, attribute, cookie and server maps
//!   plus raw body content, with mount-relative path info
//! - **Construction utilities**: query-string and cookie parsing, path
//!   resolution below a mount point
//!
//! # Example
//!
//! ```rust
//! use http_foundation::{Method, Request, StatusClass, StatusCode};
//!
//! let req = Request::from_target("/mysite", "/mysite/about?lang=en");
//! assert_eq!(req.path_info(), "/about");
//! assert_eq!(req.query().get("lang"), Some("en"));
//!
//! assert!(Method::is_known("POST"));
//! assert!(!Method::is_known("post"));
//! assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
//! assert_eq!(StatusClass::of(404), Some(StatusClass::ClientError));
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod method;
pub mod params;
pub mod parse;
pub mod path;
pub mod request;
pub mod response;
pub mod status;

// Re-exports for convenience
pub use error::{Error, Result};
pub use method::Method;
pub use params::Params;
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use status::{StatusClass, StatusCode};
