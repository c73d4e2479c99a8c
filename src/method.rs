//! HTTP method vocabulary.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Recognized HTTP request methods.
///
/// The set is closed: nine standard verbs plus PURGE, the cache-eviction
/// verb used by HTTP caches. Names are matched case-sensitively against
/// their canonical uppercase form; there is no variant for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Transfer a representation of the target resource.
    Get,
    /// Same as GET, but without the response body.
    Head,
    /// Submit an entity to the target resource.
    Post,
    /// Evict the target resource from an intermediary cache.
    Purge,
    /// Replace the target resource with the request payload.
    Put,
    /// Remove the target resource.
    Delete,
    /// Establish a tunnel to the server identified by the target resource.
    Connect,
    /// Describe the communication options for the target resource.
    Options,
    /// Apply partial modifications to the target resource.
    Patch,
    /// Perform a message loop-back test along the request path.
    Trace,
}

impl Method {
    /// Every recognized method, in canonical order.
    pub const ALL: [Method; 10] = [
        Method::Get,
        Method::Head,
        Method::Post,
        Method::Purge,
        Method::Put,
        Method::Delete,
        Method::Connect,
        Method::Options,
        Method::Patch,
        Method::Trace,
    ];

    /// Get the canonical uppercase name.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Purge => "PURGE",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Connect => "CONNECT",
            Method::Options => "OPTIONS",
            Method::Patch => "PATCH",
            Method::Trace => "TRACE",
        }
    }

    /// Check whether a string is a recognized method name.
    ///
    /// Matching is case-sensitive: `"GET"` is recognized, `"get"` is not.
    #[inline]
    pub fn is_known(name: &str) -> bool {
        name.parse::<Method>().is_ok()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::Get),
            "HEAD" => Ok(Method::Head),
            "POST" => Ok(Method::Post),
            "PURGE" => Ok(Method::Purge),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "CONNECT" => Ok(Method::Connect),
            "OPTIONS" => Ok(Method::Options),
            "PATCH" => Ok(Method::Patch),
            "TRACE" => Ok(Method::Trace),
            _ => Err(Error::UnknownMethod(s.to_string())),
        }
    }
}

impl TryFrom<&str> for Method {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_methods_are_known() {
        for method in Method::ALL {
            assert!(Method::is_known(method.as_str()), "{} not known", method);
        }
        assert_eq!(Method::ALL.len(), 10);
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        assert!(Method::is_known("GET"));
        assert!(!Method::is_known("get"));
        assert!(!Method::is_known("Get"));
        assert!(!Method::is_known("gET"));
    }

    #[test]
    fn test_unknown_names_rejected() {
        assert!(!Method::is_known(""));
        assert!(!Method::is_known("FOO"));
        assert!(!Method::is_known("FETCH"));
        assert!(!Method::is_known("GET "));
        assert!(!Method::is_known("G ET"));
    }

    #[test]
    fn test_parse_round_trip() {
        for method in Method::ALL {
            assert_eq!(method.as_str().parse::<Method>(), Ok(method));
        }
    }

    #[test]
    fn test_parse_error_carries_input() {
        let err = "BREW".parse::<Method>().unwrap_err();
        assert_eq!(err, Error::UnknownMethod("BREW".to_string()));
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Method::try_from("PURGE"), Ok(Method::Purge));
        assert!(Method::try_from("purge").is_err());
    }

    #[test]
    fn test_display_matches_canonical_name() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Purge.to_string(), "PURGE");
        assert_eq!(format!("{} /index", Method::Post), "POST /index");
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in Method::ALL.iter().enumerate() {
            for b in &Method::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}
