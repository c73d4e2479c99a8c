//! HTTP response placeholder.

/// Base placeholder for HTTP responses.
///
/// Carries no data of its own; concrete response types embed it and add
/// their status, headers and body on top, drawing the vocabulary from
/// [`StatusCode`](crate::status::StatusCode). It exists so the request
/// and response sides of an exchange share one home even while only the
/// request side carries state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Response;

impl Response {
    /// Create a response placeholder.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}
