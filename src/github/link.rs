// file: src/github/link.rs
// description: pagination cursor extraction from the Link response header
// reference: https://docs.github.com/en/rest/using-the-rest-api/using-pagination-in-the-rest-api

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // <https://api.github.com/organizations/1/repos?page=2>; rel="next"
    pub static ref LINK_ENTRY: Regex = Regex::new(
        r#"<([^>]*)>\s*;\s*rel="([^"]*)""#
    ).expect("LINK_ENTRY regex is valid");

    pub static ref PAGE_PARAM: Regex = Regex::new(
        r"[?&]page=(\d+)"
    ).expect("PAGE_PARAM regex is valid");
}

/// Page number of the `rel="next"` entry, if any.
pub fn next_page(header: &str) -> Option<u32> {
    LINK_ENTRY
        .captures_iter(header)
        .find(|caps| caps[2].split_whitespace().any(|rel| rel == "next"))
        .and_then(|caps| page_number(&caps[1]))
}

fn page_number(url: &str) -> Option<u32> {
    PAGE_PARAM
        .captures(url)
        .and_then(|caps| caps[1].parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_page_present() {
        let header = r#"<https://api.github.com/organizations/42/repos?type=private&per_page=100&page=2>; rel="next", <https://api.github.com/organizations/42/repos?type=private&per_page=100&page=3>; rel="last""#;
        assert_eq!(next_page(header), Some(2));
    }

    #[test]
    fn test_last_page_has_no_next() {
        let header = r#"<https://api.github.com/organizations/42/repos?page=1>; rel="first", <https://api.github.com/organizations/42/repos?page=2>; rel="prev""#;
        assert_eq!(next_page(header), None);
    }

    #[test]
    fn test_per_page_is_not_mistaken_for_page() {
        let header = r#"<https://api.github.com/orgs/acme/repos?per_page=100&page=7>; rel="next""#;
        assert_eq!(next_page(header), Some(7));

        let header = r#"<https://api.github.com/orgs/acme/repos?per_page=100>; rel="next""#;
        assert_eq!(next_page(header), None);
    }

    #[test]
    fn test_empty_header() {
        assert_eq!(next_page(""), None);
    }
}
