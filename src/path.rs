//! Mount-relative path resolution.

/// Resolve the part of a request target's path below a mount point.
///
/// The target is cut at the first `?` or `#` before matching. A path
/// below `base_path` yields the remainder with its leading `/`; a path
/// equal to `base_path` yields the empty string. Paths outside the mount
/// point come back unchanged, as does every path when mounting at the
/// root. Percent-encoding is preserved as sent.
#[inline]
pub fn resolve_path_info(base_path: &str, target: &str) -> String {
    let path = strip_query_and_fragment(target);
    let base = base_path.trim_end_matches('/');

    if base.is_empty() {
        return path.to_string();
    }

    match path.strip_prefix(base) {
        Some("") => String::new(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => path.to_string(),
    }
}

/// Cut a request target at the query or fragment delimiter.
#[inline]
fn strip_query_and_fragment(target: &str) -> &str {
    match target.find(|c| c == '?' || c == '#') {
        Some(pos) => &target[..pos],
        None => target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // resolve_path_info tests
    // ========================================

    #[test]
    fn test_path_info_exact_mount_is_empty() {
        assert_eq!(resolve_path_info("/mysite", "/mysite"), "");
    }

    #[test]
    fn test_path_info_below_mount() {
        assert_eq!(resolve_path_info("/mysite", "/mysite/about"), "/about");
    }

    #[test]
    fn test_path_info_nested_below_mount() {
        assert_eq!(resolve_path_info("/mysite", "/mysite/a/b/c"), "/a/b/c");
    }

    #[test]
    fn test_path_info_query_is_stripped() {
        assert_eq!(resolve_path_info("/mysite", "/mysite/about?var=1"), "/about");
        assert_eq!(resolve_path_info("/mysite", "/mysite?var=1"), "");
    }

    #[test]
    fn test_path_info_fragment_is_stripped() {
        assert_eq!(resolve_path_info("/mysite", "/mysite/about#section"), "/about");
    }

    #[test]
    fn test_path_info_query_and_fragment() {
        assert_eq!(
            resolve_path_info("/mysite", "/mysite/about?var=1#section"),
            "/about"
        );
    }

    #[test]
    fn test_path_info_preserves_percent_encoding() {
        assert_eq!(
            resolve_path_info("/mysite", "/mysite/enco%20ded"),
            "/enco%20ded"
        );
        assert_eq!(
            resolve_path_info("/app", "/app/files/na%2Fme?dl=1"),
            "/files/na%2Fme"
        );
    }

    #[test]
    fn test_path_info_trailing_slash_on_path() {
        assert_eq!(resolve_path_info("/mysite", "/mysite/"), "/");
    }

    #[test]
    fn test_path_info_trailing_slash_on_base() {
        // "/mysite/" mounts the same place as "/mysite"
        assert_eq!(resolve_path_info("/mysite/", "/mysite/about"), "/about");
        assert_eq!(resolve_path_info("/mysite/", "/mysite"), "");
    }

    #[test]
    fn test_path_info_root_mount() {
        assert_eq!(resolve_path_info("/", "/about"), "/about");
        assert_eq!(resolve_path_info("", "/about"), "/about");
        assert_eq!(resolve_path_info("/", "/"), "/");
    }

    #[test]
    fn test_path_info_partial_segment_does_not_match() {
        // "/my" is not a mount point of "/mysite"
        assert_eq!(resolve_path_info("/my", "/mysite"), "/mysite");
    }

    #[test]
    fn test_path_info_outside_mount_unchanged() {
        assert_eq!(resolve_path_info("/mysite", "/other/page"), "/other/page");
    }
}
