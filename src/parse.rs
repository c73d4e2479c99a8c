//! Query string and cookie parsing.

use std::borrow::Cow;

use crate::params::Params;

/// Fast percent decode - borrows the input when no decoding is needed.
#[inline]
fn fast_percent_decode(s: &str) -> Cow<'_, str> {
    if s.contains('%') {
        percent_encoding::percent_decode_str(s).decode_utf8_lossy()
    } else {
        Cow::Borrowed(s)
    }
}

/// Parse a query string into a parameter map.
///
/// Pairs are separated by `&` and split at the first `=`; a pair without
/// `=` keeps an empty value. Empty pairs and empty names are skipped.
/// Names and values are percent-decoded; `+` is not treated as a space.
/// Duplicate names keep the last value.
#[inline]
pub fn parse_query_string(query: &str) -> Params {
    let pair_count = query.matches('&').count() + 1;
    let mut params = Params::with_capacity(pair_count.min(16));

    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }

        let (name, value) = match pair.find('=') {
            Some(pos) => (&pair[..pos], &pair[pos + 1..]),
            None => (pair, ""),
        };

        if !name.is_empty() {
            params.insert(fast_percent_decode(name), fast_percent_decode(value));
        }
    }

    params
}

/// Parse a Cookie header into a parameter map.
///
/// Cookies are separated by `;` and split at the first `=`; segments
/// without `=` are skipped. Names and values are trimmed; values are
/// percent-decoded, names are kept as sent.
#[inline]
pub fn parse_cookie_header(header: &str) -> Params {
    let cookie_count = header.matches(';').count() + 1;
    let mut cookies = Params::with_capacity(cookie_count.min(16));

    for cookie in header.split(';') {
        let cookie = cookie.trim();
        if cookie.is_empty() {
            continue;
        }

        let (name, value) = match cookie.find('=') {
            Some(pos) => (cookie[..pos].trim(), cookie[pos + 1..].trim()),
            None => continue,
        };

        if !name.is_empty() {
            cookies.insert(name, fast_percent_decode(value));
        }
    }

    cookies
}
