/// Return every keyword contained in `name`, compared case-insensitively.
///
/// `keywords` must already be lower-case; [`CrawlConfig`](crate::CrawlConfig)
/// normalizes them once per crawl. Order follows `keywords`, not position in
/// the name, and each keyword is reported at most once.
///
/// ```rust
/// let keywords = ["sop", "admin", "process"].map(String::from);
/// assert_eq!(
///     kwcrawl::match_keywords("SOP-Admin-Process.md", &keywords),
///     vec!["sop", "admin", "process"],
/// );
/// assert!(kwcrawl::match_keywords("readme.md", &keywords).is_empty());
/// ```
pub fn match_keywords(name: &str, keywords: &[String]) -> Vec<String> {
    if keywords.is_empty() {
        return Vec::new();
    }

    let folded = name.to_lowercase();
    keywords
        .iter()
        .filter(|kw| folded.contains(kw.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn substring_not_whole_token() {
        let keywords = kws(&["sop"]);
        assert_eq!(match_keywords("sop-guide.md", &keywords), vec!["sop"]);
        assert_eq!(match_keywords("mysopfile", &keywords), vec!["sop"]);
        assert!(match_keywords("filesystem.md", &keywords).is_empty());
    }

    #[test]
    fn case_insensitive() {
        let keywords = kws(&["admin"]);
        assert_eq!(match_keywords("ADMIN_notes.TXT", &keywords), vec!["admin"]);
        assert_eq!(match_keywords("SysAdmin", &keywords), vec!["admin"]);
    }

    #[test]
    fn order_follows_keywords_not_name() {
        let keywords = kws(&["sop", "admin", "process"]);
        assert_eq!(
            match_keywords("process-admin-sop.md", &keywords),
            vec!["sop", "admin", "process"]
        );
    }

    #[test]
    fn repeated_occurrences_reported_once() {
        let keywords = kws(&["sop"]);
        assert_eq!(match_keywords("sop-sop-sop", &keywords), vec!["sop"]);
    }

    #[test]
    fn empty_keywords_match_nothing() {
        assert!(match_keywords("sop-guide.md", &[]).is_empty());
    }
}
