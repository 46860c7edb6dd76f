//! Text front-page rendering.
//!
//! Turns the feed's observable state into the text a terminal user reads:
//! a count header, one card per article in accumulated order, and a footer
//! once the feed is exhausted. An errored feed renders a single generic
//! error line instead.

use crate::models::Article;
use crate::utils::format_published_at;
use std::fmt::Write;

/// Render the accumulated articles as a text front page.
///
/// Pure function over the feed's observable state; owns nothing and
/// performs no I/O.
pub fn render_front_page(articles: &[Article], last_page_reached: bool, has_errored: bool) -> String {
    let mut out = String::new();

    if has_errored {
        writeln!(out, "Error: could not fetch headlines.").unwrap();
        return out;
    }

    writeln!(out, "Articles count: {}", articles.len()).unwrap();

    for article in articles {
        writeln!(out).unwrap();
        writeln!(out, "# {}", article.title.as_deref().unwrap_or("(untitled)")).unwrap();
        if let Some(name) = article.source.name.as_deref() {
            writeln!(out, "Source: {name}").unwrap();
        }
        if let Some(content) = article.content.as_deref() {
            writeln!(out, "{content}").unwrap();
        }
        if let Some(published) = article.publishedAt.as_deref() {
            writeln!(out, "Published: {}", format_published_at(published)).unwrap();
        }
        if let Some(url) = article.url.as_deref() {
            writeln!(out, "Read more: {url}").unwrap();
        }
    }

    if last_page_reached {
        writeln!(out).unwrap();
        writeln!(out, "No more articles.").unwrap();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArticleSource;

    fn article(title: &str) -> Article {
        Article {
            source: ArticleSource {
                id: None,
                name: Some("Example Times".to_string()),
            },
            author: None,
            title: Some(title.to_string()),
            description: None,
            content: Some("Something happened.".to_string()),
            publishedAt: Some("2026-08-07T09:15:00Z".to_string()),
            url: Some("https://example.com/story".to_string()),
            urlToImage: None,
        }
    }

    #[test]
    fn test_render_error_state_only() {
        let page = render_front_page(&[article("Never shown")], false, true);
        assert_eq!(page, "Error: could not fetch headlines.\n");
    }

    #[test]
    fn test_render_count_header_and_cards() {
        let page = render_front_page(&[article("First"), article("Second")], false, false);

        assert!(page.starts_with("Articles count: 2\n"));
        assert!(page.contains("# First"));
        assert!(page.contains("# Second"));
        assert!(page.contains("Source: Example Times"));
        assert!(page.contains("Something happened."));
        assert!(page.contains("Published: August 7, 2026 9:15 AM"));
        assert!(page.contains("Read more: https://example.com/story"));
        assert!(!page.contains("No more articles."));
    }

    #[test]
    fn test_render_footer_when_exhausted() {
        let page = render_front_page(&[article("Only")], true, false);
        assert!(page.ends_with("No more articles.\n"));
    }

    #[test]
    fn test_render_skips_absent_fields() {
        let mut bare = article("Bare");
        bare.source.name = None;
        bare.content = None;
        bare.publishedAt = None;
        bare.url = None;

        let page = render_front_page(&[bare], false, false);
        assert!(page.contains("# Bare"));
        assert!(!page.contains("Source:"));
        assert!(!page.contains("Published:"));
        assert!(!page.contains("Read more:"));
    }

    #[test]
    fn test_render_untitled_placeholder() {
        let mut untitled = article("ignored");
        untitled.title = None;

        let page = render_front_page(&[untitled], false, false);
        assert!(page.contains("# (untitled)"));
    }

    #[test]
    fn test_render_empty_feed() {
        let page = render_front_page(&[], true, false);
        assert!(page.starts_with("Articles count: 0\n"));
        assert!(page.ends_with("No more articles.\n"));
    }
}
