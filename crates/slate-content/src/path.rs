//! Content path resolution.
//!
//! Logical URLs name pages the way visitors see them (`""`, `"about"`,
//! `"section/"`). Stored documents always carry a file name and extension,
//! so a logical URL is mapped to a storage path before lookup:
//!
//! | Logical path | Storage path |
//! |--------------|--------------|
//! | `""` | `index.html` |
//! | `"section/"` | `section/index.html` |
//! | `"about"` | `about.html` |
//! | `"about.html"` | `about.html` |

/// Document served for directory URLs.
pub const DEFAULT_PAGE_NAME: &str = "index.html";

/// Extension appended to extensionless URLs.
pub const DEFAULT_PAGE_EXTENSION: &str = ".html";

/// Map a logical URL to its storage path.
///
/// # Examples
///
/// ```
/// use slate_content::resolve_path;
///
/// assert_eq!(resolve_path(""), "index.html");
/// assert_eq!(resolve_path("foo/"), "foo/index.html");
/// assert_eq!(resolve_path("foo"), "foo.html");
/// assert_eq!(resolve_path("foo.html"), "foo.html");
/// ```
#[must_use]
pub fn resolve_path(path: &str) -> String {
    if path.is_empty() {
        DEFAULT_PAGE_NAME.to_owned()
    } else if path.ends_with('/') {
        format!("{path}{DEFAULT_PAGE_NAME}")
    } else if has_extension(path) {
        path.to_owned()
    } else {
        format!("{path}{DEFAULT_PAGE_EXTENSION}")
    }
}

/// Storage path to probe when the primary path is not found.
///
/// Only URLs that name neither a directory (trailing `/`) nor a file
/// (explicit extension) are ambiguous: `"section"` may be `section.html`
/// or `section/index.html`. Returns `None` for unambiguous URLs.
///
/// # Examples
///
/// ```
/// use slate_content::fallback_path;
///
/// assert_eq!(fallback_path("section").as_deref(), Some("section/index.html"));
/// assert_eq!(fallback_path("section/"), None);
/// assert_eq!(fallback_path("page.html"), None);
/// ```
#[must_use]
pub fn fallback_path(path: &str) -> Option<String> {
    if path.ends_with('/') || has_extension(path) {
        return None;
    }
    Some(resolve_path(&format!("{path}/")))
}

/// Check whether the last path segment carries an extension.
///
/// A `.` only counts when it occurs after the last `/`, so `v1.2/guide`
/// has no extension.
#[must_use]
pub fn has_extension(path: &str) -> bool {
    match (path.rfind('.'), path.rfind('/')) {
        (Some(dot), Some(slash)) => dot > slash,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_resolve_empty_path() {
        assert_eq!(resolve_path(""), "index.html");
    }

    #[test]
    fn test_resolve_directory_path() {
        assert_eq!(resolve_path("foo/"), "foo/index.html");
        assert_eq!(resolve_path("/"), "/index.html");
        assert_eq!(resolve_path("a/b/"), "a/b/index.html");
    }

    #[test]
    fn test_resolve_extensionless_path() {
        assert_eq!(resolve_path("foo"), "foo.html");
        assert_eq!(resolve_path("/about/team"), "/about/team.html");
        assert_eq!(resolve_path("v1.2/guide"), "v1.2/guide.html");
    }

    #[test]
    fn test_resolve_path_with_extension_is_unchanged() {
        assert_eq!(resolve_path("foo.html"), "foo.html");
        assert_eq!(resolve_path("feed.xml"), "feed.xml");
        assert_eq!(resolve_path("a/b.json"), "a/b.json");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        for path in ["", "foo", "foo/", "foo.html", "a/b/c"] {
            let once = resolve_path(path);
            assert_eq!(resolve_path(&once), once, "path {path:?}");
        }
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension("foo.html"));
        assert!(has_extension("a/b.c"));
        assert!(!has_extension("foo"));
        assert!(!has_extension("a.b/c"));
        assert!(!has_extension(""));
        assert!(!has_extension("foo/"));
    }

    #[test]
    fn test_fallback_path() {
        assert_eq!(fallback_path("section").as_deref(), Some("section/index.html"));
        assert_eq!(fallback_path("a/b").as_deref(), Some("a/b/index.html"));
        assert_eq!(fallback_path("section/"), None);
        assert_eq!(fallback_path("page.html"), None);
    }

    #[test]
    fn test_fallback_path_for_root() {
        assert_eq!(fallback_path("").as_deref(), Some("/index.html"));
    }
}
