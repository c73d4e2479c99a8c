//! HTTP status code vocabulary.
//!
//! The registry is a closed set: every IANA-registered code gets a variant
//! with its canonical reason phrase, and integers outside the registry do
//! not construct. Classification into the five 1xx-5xx classes is by the
//! hundreds digit alone, so [`StatusClass::of`] stays total over the whole
//! 100..=599 range even for unregistered integers.

use std::fmt;

use crate::error::Error;

/// Generates the registry: the enum, the phrase table and the integer
/// lookup come from one listing so they cannot drift apart.
macro_rules! status_codes {
    (
        $(
            $(#[$meta:meta])*
            ($code:literal, $variant:ident, $phrase:literal);
        )+
    ) => {
        /// Recognized HTTP status codes.
        ///
        /// The set is closed over the registry below; use
        /// [`StatusCode::from_u16`] or [`TryFrom<u16>`] to look a code up
        /// and [`StatusCode::reason_phrase`] for the canonical phrase.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum StatusCode {
            $(
                $(#[$meta])*
                $variant = $code,
            )+
        }

        impl StatusCode {
            /// Every registered status code, in ascending order.
            pub const ALL: &'static [StatusCode] = &[
                $(StatusCode::$variant,)+
            ];

            /// Get the canonical reason phrase.
            #[inline]
            pub const fn reason_phrase(&self) -> &'static str {
                match self {
                    $(StatusCode::$variant => $phrase,)+
                }
            }

            /// Look up a registered code by its integer value.
            #[inline]
            pub const fn from_u16(code: u16) -> Option<StatusCode> {
                match code {
                    $($code => Some(StatusCode::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

status_codes! {
    /// The initial part of the request was received; continue.
    (100, Continue, "Continue");
    /// The server is switching protocols as the client asked.
    (101, SwitchingProtocols, "Switching Protocols");
    /// The server has received the request and is working on it.
    (102, Processing, "Processing");
    /// Hints at headers likely to appear in the final response.
    (103, EarlyHints, "Early Hints");
    /// The request succeeded.
    (200, Ok, "OK");
    /// The request succeeded and a new resource was created.
    (201, Created, "Created");
    /// The request was accepted for processing, not yet acted upon.
    (202, Accepted, "Accepted");
    /// Returned metadata comes from a transforming proxy, not the origin.
    (203, NonAuthoritativeInformation, "Non-Authoritative Information");
    /// The request succeeded and there is no content to send.
    (204, NoContent, "No Content");
    /// The request succeeded; the client should reset the document view.
    (205, ResetContent, "Reset Content");
    /// Part of the resource, as described by the Range header.
    (206, PartialContent, "Partial Content");
    /// Multiple independent sub-request statuses follow (WebDAV).
    (207, MultiStatus, "Multi-Status");
    /// Members of a binding were already enumerated earlier (WebDAV).
    (208, AlreadyReported, "Already Reported");
    /// The response expresses the result of instance manipulations.
    (226, ImUsed, "IM Used");
    /// The request has more than one possible response.
    (300, MultipleChoices, "Multiple Choices");
    /// The resource has moved to a new URL permanently.
    (301, MovedPermanently, "Moved Permanently");
    /// The resource has moved to a new URL temporarily.
    (302, Found, "Found");
    /// The response can be found under a different URL via GET.
    (303, SeeOther, "See Other");
    /// The cached response is still valid.
    (304, NotModified, "Not Modified");
    /// The resource must be accessed through a proxy (deprecated).
    (305, UseProxy, "Use Proxy");
    /// Repeat the request against another URL, same method.
    (307, TemporaryRedirect, "Temporary Redirect");
    /// The resource has moved permanently; keep the request method.
    (308, PermanentRedirect, "Permanent Redirect");
    /// The request cannot be processed as sent.
    (400, BadRequest, "Bad Request");
    /// Authentication is required and has failed or is missing.
    (401, Unauthorized, "Unauthorized");
    /// Reserved for future use.
    (402, PaymentRequired, "Payment Required");
    /// The client's identity is known but access is refused.
    (403, Forbidden, "Forbidden");
    /// The server cannot find the requested resource.
    (404, NotFound, "Not Found");
    /// The request method is not supported by the target resource.
    (405, MethodNotAllowed, "Method Not Allowed");
    /// Content negotiation found nothing acceptable to the client.
    (406, NotAcceptable, "Not Acceptable");
    /// Authentication with the proxy is required.
    (407, ProxyAuthenticationRequired, "Proxy Authentication Required");
    /// The server timed out waiting for the request.
    (408, RequestTimeout, "Request Timeout");
    /// The request conflicts with the current state of the resource.
    (409, Conflict, "Conflict");
    /// The resource has been permanently removed.
    (410, Gone, "Gone");
    /// A Content-Length header is required.
    (411, LengthRequired, "Length Required");
    /// A precondition in the request headers does not hold.
    (412, PreconditionFailed, "Precondition Failed");
    /// The request body is larger than the server accepts.
    (413, ContentTooLarge, "Content Too Large");
    /// The request URI is longer than the server accepts.
    (414, UriTooLong, "URI Too Long");
    /// The payload media type is not supported.
    (415, UnsupportedMediaType, "Unsupported Media Type");
    /// The Range header cannot be satisfied.
    (416, RangeNotSatisfiable, "Range Not Satisfiable");
    /// The Expect header cannot be met.
    (417, ExpectationFailed, "Expectation Failed");
    /// The server refuses to brew coffee because it is a teapot.
    (418, ImATeapot, "I'm a teapot");
    /// The request was directed at a server unable to produce a response.
    (421, MisdirectedRequest, "Misdirected Request");
    /// The request is well-formed but semantically erroneous (WebDAV).
    (422, UnprocessableEntity, "Unprocessable Entity");
    /// The resource is locked (WebDAV).
    (423, Locked, "Locked");
    /// A dependency of the request failed (WebDAV).
    (424, FailedDependency, "Failed Dependency");
    /// The server will not risk processing a replayable request yet.
    (425, TooEarly, "Too Early");
    /// The client should switch to the protocol in the Upgrade header.
    (426, UpgradeRequired, "Upgrade Required");
    /// The request must be conditional.
    (428, PreconditionRequired, "Precondition Required");
    /// The client has sent too many requests in a given time.
    (429, TooManyRequests, "Too Many Requests");
    /// The request's header section is too large to process.
    (431, RequestHeaderFieldsTooLarge, "Request Header Fields Too Large");
    /// The resource cannot legally be provided.
    (451, UnavailableForLegalReasons, "Unavailable For Legal Reasons");
    /// The server hit an unexpected condition.
    (500, InternalServerError, "Internal Server Error");
    /// The request method is not supported by the server.
    (501, NotImplemented, "Not Implemented");
    /// An upstream server returned an invalid response.
    (502, BadGateway, "Bad Gateway");
    /// The server is not ready to handle the request.
    (503, ServiceUnavailable, "Service Unavailable");
    /// An upstream server did not respond in time.
    (504, GatewayTimeout, "Gateway Timeout");
    /// The request's HTTP version is not supported.
    (505, HttpVersionNotSupported, "HTTP Version Not Supported");
    /// Transparent content negotiation ended in a circular reference.
    (506, VariantAlsoNegotiates, "Variant Also Negotiates");
    /// The server cannot store what it would need to complete the request.
    (507, InsufficientStorage, "Insufficient Storage");
    /// The server detected an infinite loop while processing (WebDAV).
    (508, LoopDetected, "Loop Detected");
    /// Further extensions are required for the server to fulfill it.
    (510, NotExtended, "Not Extended");
    /// The client must authenticate with the network first.
    (511, NetworkAuthenticationRequired, "Network Authentication Required");
}

impl StatusCode {
    /// Get the numeric code.
    #[inline]
    pub const fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Get the status class for this code.
    #[inline]
    pub const fn class(&self) -> StatusClass {
        // Registered codes span 100..=511, so the hundreds digit is 1-5.
        match self.as_u16() / 100 {
            1 => StatusClass::Informational,
            2 => StatusClass::Successful,
            3 => StatusClass::Redirection,
            4 => StatusClass::ClientError,
            _ => StatusClass::ServerError,
        }
    }

    /// Check if this is an informational code (1xx).
    #[inline]
    pub const fn is_informational(&self) -> bool {
        matches!(self.class(), StatusClass::Informational)
    }

    /// Check if this is a successful code (2xx).
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.class(), StatusClass::Successful)
    }

    /// Check if this is a redirection code (3xx).
    #[inline]
    pub const fn is_redirection(&self) -> bool {
        matches!(self.class(), StatusClass::Redirection)
    }

    /// Check if this is a client error (4xx).
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        matches!(self.class(), StatusClass::ClientError)
    }

    /// Check if this is a server error (5xx).
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        matches!(self.class(), StatusClass::ServerError)
    }

    /// Check if this is an error code (4xx or 5xx).
    #[inline]
    pub const fn is_error(&self) -> bool {
        self.is_client_error() || self.is_server_error()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        StatusCode::from_u16(code).ok_or(Error::UnknownStatus(code))
    }
}

impl From<StatusCode> for u16 {
    fn from(code: StatusCode) -> u16 {
        code.as_u16()
    }
}

/// The five status classes, keyed by the hundreds digit of the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    /// 1xx: the request was received, processing continues.
    Informational,
    /// 2xx: the request was received, understood and accepted.
    Successful,
    /// 3xx: further action is needed to complete the request.
    Redirection,
    /// 4xx: the request is faulty or cannot be fulfilled.
    ClientError,
    /// 5xx: the server failed to fulfill an apparently valid request.
    ServerError,
}

impl StatusClass {
    /// All five classes, in ascending code order.
    pub const ALL: [StatusClass; 5] = [
        StatusClass::Informational,
        StatusClass::Successful,
        StatusClass::Redirection,
        StatusClass::ClientError,
        StatusClass::ServerError,
    ];

    /// Classify an integer by its hundreds digit.
    ///
    /// Total over 100..=599, registered or not; `None` outside that range.
    #[inline]
    pub const fn of(code: u16) -> Option<StatusClass> {
        match code / 100 {
            1 => Some(StatusClass::Informational),
            2 => Some(StatusClass::Successful),
            3 => Some(StatusClass::Redirection),
            4 => Some(StatusClass::ClientError),
            5 => Some(StatusClass::ServerError),
            _ => None,
        }
    }

    /// Get a lowercase label for the class.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            StatusClass::Informational => "informational",
            StatusClass::Successful => "successful",
            StatusClass::Redirection => "redirection",
            StatusClass::ClientError => "client error",
            StatusClass::ServerError => "server error",
        }
    }

    /// Iterate over the registered codes in this class, ascending.
    pub fn codes(self) -> impl Iterator<Item = StatusCode> {
        StatusCode::ALL
            .iter()
            .copied()
            .filter(move |code| code.class() == self)
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
