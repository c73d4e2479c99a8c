//! HTTP request value holder.

use tracing::debug;

use crate::params::Params;
use crate::parse::parse_query_string;
use crate::path::resolve_path_info;

/// Server metadata key constants (CGI convention).
pub mod server_keys {
    /// Request method name.
    pub const REQUEST_METHOD: &str = "REQUEST_METHOD";
    /// Request target as sent, query string included.
    pub const REQUEST_URI: &str = "REQUEST_URI";
    /// Raw query string, without the leading `?`.
    pub const QUERY_STRING: &str = "QUERY_STRING";
    /// Mount path of the application.
    pub const SCRIPT_NAME: &str = "SCRIPT_NAME";
    /// Path below the mount point.
    pub const PATH_INFO: &str = "PATH_INFO";
}

/// HTTP request value holder.
///
/// Owns six independent pieces of one request: query parameters, form
/// parameters, routing attributes, cookies, server metadata and the raw
/// body content. Each map field has a getter, a mutable getter and a
/// wholesale-replacement setter; the holder itself performs no I/O and
/// no validation.
///
/// Note: Clone is intentionally not derived to prevent expensive copies.
/// Use references or move semantics instead.
#[derive(Debug)]
pub struct Request {
    query: Params,
    request: Params,
    attributes: Params,
    cookies: Params,
    server: Params,
    content: String,
    path_info: String,
}

impl Request {
    /// Create a request from its six fields.
    #[inline]
    pub fn new(
        query: Params,
        request: Params,
        attributes: Params,
        cookies: Params,
        server: Params,
        content: impl Into<String>,
    ) -> Self {
        Self {
            query,
            request,
            attributes,
            cookies,
            server,
            content: content.into(),
            path_info: String::new(),
        }
    }

    /// Create a new request builder.
    #[inline]
    pub fn builder() -> RequestBuilder {
        RequestBuilder::new()
    }

    /// Create a request for a target URL below a mount path.
    ///
    /// The query string is parsed into the query map, CGI-style server
    /// metadata (`REQUEST_URI`, `QUERY_STRING`, `SCRIPT_NAME` and, when
    /// non-empty, `PATH_INFO`) is recorded and the path info is resolved
    /// against the mount path. Fragments never reach a server and are
    /// dropped. The remaining fields start empty.
    pub fn from_target(base_path: &str, target: &str) -> Self {
        let target = match target.find('#') {
            Some(pos) => &target[..pos],
            None => target,
        };
        let query_string = match target.find('?') {
            Some(pos) => &target[pos + 1..],
            None => "",
        };

        let path_info = resolve_path_info(base_path, target);

        let mut server = Params::with_capacity(4);
        server.insert(server_keys::REQUEST_URI, target);
        server.insert(server_keys::QUERY_STRING, query_string);
        server.insert(server_keys::SCRIPT_NAME, base_path);
        if !path_info.is_empty() {
            server.insert(server_keys::PATH_INFO, path_info.as_str());
        }

        debug!(
            "request for {:?} mounted at {:?}: path info {:?}",
            target, base_path, path_info
        );

        Self {
            query: parse_query_string(query_string),
            request: Params::new(),
            attributes: Params::new(),
            cookies: Params::new(),
            server,
            content: String::new(),
            path_info,
        }
    }

    // Getters

    /// Get the query parameters (the URL's `?` pairs).
    #[inline]
    pub fn query(&self) -> &Params {
        &self.query
    }

    /// Get a mutable reference to the query parameters.
    #[inline]
    pub fn query_mut(&mut self) -> &mut Params {
        &mut self.query
    }

    /// Get the form parameters sent in the request body.
    #[inline]
    pub fn request(&self) -> &Params {
        &self.request
    }

    /// Get a mutable reference to the form parameters.
    #[inline]
    pub fn request_mut(&mut self) -> &mut Params {
        &mut self.request
    }

    /// Get the routing attributes attached to this request.
    #[inline]
    pub fn attributes(&self) -> &Params {
        &self.attributes
    }

    /// Get a mutable reference to the routing attributes.
    #[inline]
    pub fn attributes_mut(&mut self) -> &mut Params {
        &mut self.attributes
    }

    /// Get the cookies sent with this request.
    #[inline]
    pub fn cookies(&self) -> &Params {
        &self.cookies
    }

    /// Get a mutable reference to the cookies.
    #[inline]
    pub fn cookies_mut(&mut self) -> &mut Params {
        &mut self.cookies
    }

    /// Get the server metadata (see [`server_keys`]).
    #[inline]
    pub fn server(&self) -> &Params {
        &self.server
    }

    /// Get a mutable reference to the server metadata.
    #[inline]
    pub fn server_mut(&mut self) -> &mut Params {
        &mut self.server
    }

    /// Get the raw body content.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the path being requested, relative to the mount path.
    ///
    /// Always starts with `/` and excludes the query string; empty when
    /// the request path equals the mount path itself. Percent-encoding is
    /// preserved as sent:
    ///
    /// * `http://localhost/mysite` returns an empty string
    /// * `http://localhost/mysite/about` returns `/about`
    /// * `http://localhost/mysite/enco%20ded` returns `/enco%20ded`
    /// * `http://localhost/mysite/about?var=1` returns `/about`
    #[inline]
    pub fn path_info(&self) -> &str {
        &self.path_info
    }

    // Modifiers

    /// Replace the query parameters wholesale.
    #[inline]
    pub fn set_query(&mut self, query: Params) {
        self.query = query;
    }

    /// Replace the form parameters wholesale.
    #[inline]
    pub fn set_request(&mut self, request: Params) {
        self.request = request;
    }

    /// Replace the routing attributes wholesale.
    #[inline]
    pub fn set_attributes(&mut self, attributes: Params) {
        self.attributes = attributes;
    }

    /// Replace the cookies wholesale.
    #[inline]
    pub fn set_cookies(&mut self, cookies: Params) {
        self.cookies = cookies;
    }

    /// Replace the server metadata wholesale.
    #[inline]
    pub fn set_server(&mut self, server: Params) {
        self.server = server;
    }

    /// Replace the raw body content.
    #[inline]
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Set the resolved path info.
    #[inline]
    pub fn set_path_info(&mut self, path_info: impl Into<String>) {
        self.path_info = path_info.into();
    }
}

impl Default for Request {
    fn default() -> Self {
        Self {
            query: Params::new(),
            request: Params::new(),
            attributes: Params::new(),
            cookies: Params::new(),
            server: Params::new(),
            content: String::new(),
            path_info: String::new(),
        }
    }
}

/// Builder for creating requests field by field.
///
/// Fields left unset stay empty.
pub struct RequestBuilder {
    query: Params,
    request: Params,
    attributes: Params,
    cookies: Params,
    server: Params,
    content: String,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    /// Create a new request builder.
    #[inline]
    pub fn new() -> Self {
        Self {
            query: Params::new(),
            request: Params::new(),
            attributes: Params::new(),
            cookies: Params::new(),
            server: Params::new(),
            content: String::new(),
        }
    }

    /// Set the query parameters.
    #[inline]
    pub fn query(mut self, query: Params) -> Self {
        self.query = query;
        self
    }

    /// Set the form parameters.
    #[inline]
    pub fn request(mut self, request: Params) -> Self {
        self.request = request;
        self
    }

    /// Set the routing attributes.
    #[inline]
    pub fn attributes(mut self, attributes: Params) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set the cookies.
    #[inline]
    pub fn cookies(mut self, cookies: Params) -> Self {
        self.cookies = cookies;
        self
    }

    /// Set the server metadata.
    #[inline]
    pub fn server(mut self, server: Params) -> Self {
        self.server = server;
        self
    }

    /// Set the raw body content.
    #[inline]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Build the request.
    #[inline]
    pub fn build(self) -> Request {
        Request {
            query: self.query,
            request: self.request,
            attributes: self.attributes,
            cookies: self.cookies,
            server: self.server,
            content: self.content,
            path_info: String::new(),
        }
    }
}
