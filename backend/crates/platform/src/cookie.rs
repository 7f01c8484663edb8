//! Cookie Management Infrastructure
//!
//! Reading cookies from request headers. This system never sets cookies.

use axum::http::{HeaderMap, header};

/// Extract a cookie value from headers
///
/// Every `Cookie` header is searched; the first pair whose name matches wins.
/// The value is returned verbatim (it may itself contain `=` or `%XX` escapes).
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;

            if key.trim() == name {
                Some(value.trim().trim_matches('"').to_string())
            } else {
                None
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; session=abc123; other=xyz"),
        );

        assert_eq!(
            extract_cookie(&headers, "session"),
            Some("abc123".to_string())
        );
        assert_eq!(extract_cookie(&headers, "foo"), Some("bar".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_extract_cookie_keeps_value_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("better-auth.session_token=abc.d%2Def=="),
        );

        assert_eq!(
            extract_cookie(&headers, "better-auth.session_token"),
            Some("abc.d%2Def==".to_string())
        );
    }

    #[test]
    fn test_extract_cookie_across_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("a=1"));
        headers.append(header::COOKIE, HeaderValue::from_static("session=two"));

        assert_eq!(extract_cookie(&headers, "session"), Some("two".to_string()));
    }

    #[test]
    fn test_extract_cookie_empty_value() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("session="));

        assert_eq!(extract_cookie(&headers, "session"), Some(String::new()));
        assert_eq!(extract_cookie(&HeaderMap::new(), "session"), None);
    }
}
