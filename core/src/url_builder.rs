//! Joins a base URL, a method path and query parameters into one URL string.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped in query keys and values: letters, digits and
/// `-_.!~*'()`. Everything else, space included, becomes `%XX`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build `base_url` + `/` + `method_path` + `?query`.
///
/// A single `/` is appended to `base_url` unless it already ends with one.
/// `method_path` is appended verbatim. No `?` is emitted when `params` is
/// empty. Pure; never fails.
pub fn build_url<K, V>(base_url: &str, method_path: &str, params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut url = String::with_capacity(base_url.len() + method_path.len() + 1);
    url.push_str(base_url);
    if !url.ends_with('/') {
        url.push('/');
    }
    url.push_str(method_path);
    url.push_str(&query_string(params));
    url
}

/// Percent-encode `params` as `?k=v&k2=v2`, or the empty string when there
/// are none.
pub fn query_string<K, V>(params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if params.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = params
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k.as_ref(), QUERY_COMPONENT),
                utf8_percent_encode(v.as_ref(), QUERY_COMPONENT)
            )
        })
        .collect();
    format!("?{}", pairs.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_PARAMS: &[(&str, &str)] = &[];

    #[test]
    fn empty_inputs_yield_single_slash() {
        assert_eq!(build_url("", "", NO_PARAMS), "/");
    }

    #[test]
    fn slash_is_appended_once() {
        assert_eq!(build_url("https://example.com", "", NO_PARAMS), "https://example.com/");
        assert_eq!(build_url("https://example.com/", "", NO_PARAMS), "https://example.com/");
    }

    #[test]
    fn building_twice_is_idempotent() {
        let once = build_url("https://example.com/api", "", NO_PARAMS);
        let twice = build_url(&once, "", NO_PARAMS);
        assert_eq!(once, twice);
    }

    #[test]
    fn method_path_is_kept_verbatim() {
        assert_eq!(build_url("/api", "cat/blog", NO_PARAMS), "/api/cat/blog");
    }

    #[test]
    fn single_param() {
        assert_eq!(
            build_url("https://example.com/API/MyModule", "elevate", &[("page", "1")]),
            "https://example.com/API/MyModule/elevate?page=1"
        );
    }

    #[test]
    fn params_are_percent_encoded_with_space_as_percent_20() {
        assert_eq!(
            build_url(
                "https://example.com/",
                "",
                &[("name", "Brené Brown"), ("type", "one & done")]
            ),
            "https://example.com/?name=Bren%C3%A9%20Brown&type=one%20%26%20done"
        );
    }

    #[test]
    fn reserved_characters_in_keys_are_encoded() {
        assert_eq!(query_string(&[("a=b", "c?d/e")]), "?a%3Db=c%3Fd%2Fe");
    }

    #[test]
    fn unreserved_marks_pass_through() {
        assert_eq!(query_string(&[("q", "a-b_c.d!e~f*g'h(i)")]), "?q=a-b_c.d!e~f*g'h(i)");
    }

    #[test]
    fn owned_strings_are_accepted() {
        let params = vec![("page".to_string(), 2.to_string())];
        assert_eq!(build_url("/x", "y", &params), "/x/y?page=2");
    }
}
