/// Decide whether an outgoing request URL is a timeline fetch.
///
/// Interception hosts call this to pick which response bodies get routed
/// through the filtering engine. Matches the provider's home-feed endpoints
/// plus any graphql call with a timeline operation in its path.
#[must_use]
pub fn is_timeline_url(url: &str) -> bool {
    url.contains("HomeTimeline")
        || url.contains("HomeLatestTimeline")
        || (url.contains("graphql") && url.contains("timeline"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_timeline_urls() {
        assert!(is_timeline_url(
            "https://x.com/i/api/graphql/AbC123/HomeTimeline"
        ));
        assert!(is_timeline_url(
            "https://x.com/i/api/graphql/AbC123/HomeLatestTimeline?variables=%7B%7D"
        ));
    }

    #[test]
    fn test_generic_graphql_timeline() {
        assert!(is_timeline_url(
            "https://x.com/i/api/graphql/XyZ/user_timeline_v2"
        ));
    }

    #[test]
    fn test_non_timeline_urls() {
        assert!(!is_timeline_url("https://x.com/i/api/graphql/XyZ/TweetDetail"));
        assert!(!is_timeline_url("https://abs.twimg.com/responsive-web/main.js"));
        assert!(!is_timeline_url(""));
    }
}
