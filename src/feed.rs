//! Paginated headline feed: the state machine that drives fetching.
//!
//! [`HeadlineFeed`] owns the pagination cursor, the accumulated article
//! collection, and the loading/error/exhausted flags. Each call to
//! [`HeadlineFeed::fetch_next_page`] performs at most one request through the
//! [`FetchPage`] boundary, merges the result, and settles into exactly one of
//! three outcomes: more articles accumulated, end of data reached, or a
//! sticky error.
//!
//! Both end states are terminal. There is no reset or retry operation; a
//! consumer that wants a fresh feed builds a new one.

use crate::api::FetchPage;
use crate::models::Article;
use itertools::Itertools;
use tracing::{debug, error, info, warn};

/// Accumulating feed of deduplicated headlines.
///
/// The observable state mirrors what a list view needs to render: the
/// articles in first-seen order, whether a fetch is in flight, whether the
/// feed has errored, and whether the last page was reached.
pub struct HeadlineFeed<F> {
    fetcher: F,
    page_number: u32,
    articles: Vec<Article>,
    loading: bool,
    has_errored: bool,
    last_page_reached: bool,
    in_flight: bool,
}

impl<F: FetchPage> HeadlineFeed<F> {
    /// Create a feed positioned at page 1 with nothing accumulated.
    ///
    /// `loading` starts out `true`: a freshly built feed has its initial
    /// fetch pending, and consumers render the loading state until that
    /// first call settles.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            page_number: 1,
            articles: Vec::new(),
            loading: true,
            has_errored: false,
            last_page_reached: false,
            in_flight: false,
        }
    }

    /// Fetch the next page and merge it into the accumulated collection.
    ///
    /// A no-op when the feed is exhausted, errored, or already fetching.
    /// Otherwise exactly one request is issued:
    /// - non-empty page: articles merged (full-value dedup, first-seen order
    ///   kept), page number advanced
    /// - empty page: `last_page_reached` set, page number unchanged
    /// - any failure: `has_errored` set, page number unchanged, no retry
    ///
    /// Errors never escape this method; they become observable state.
    pub async fn fetch_next_page(&mut self) {
        if self.last_page_reached {
            debug!(page = self.page_number, "Last page already reached; skipping fetch");
            return;
        }
        if self.has_errored {
            debug!(page = self.page_number, "Feed already errored; skipping fetch");
            return;
        }
        // One request at a time.
        if self.in_flight {
            warn!(page = self.page_number, "Fetch already in flight; skipping");
            return;
        }

        self.in_flight = true;
        self.loading = true;

        match self.fetcher.fetch_page(self.page_number).await {
            Ok(fetched) if fetched.is_empty() => {
                info!(page = self.page_number, total = self.articles.len(), "Empty page; end of headlines");
                self.last_page_reached = true;
            }
            Ok(fetched) => {
                let fetched_count = fetched.len();
                let before = self.articles.len();
                self.articles = merge_unique(std::mem::take(&mut self.articles), fetched);
                info!(
                    page = self.page_number,
                    fetched = fetched_count,
                    kept = self.articles.len() - before,
                    total = self.articles.len(),
                    "Merged headlines page"
                );
                self.page_number += 1;
            }
            Err(e) => {
                error!(page = self.page_number, error = %e, "Headlines fetch failed; feed is now errored");
                self.has_errored = true;
            }
        }

        self.loading = false;
        self.in_flight = false;
    }

    /// The accumulated articles, deduplicated, in first-seen order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// The page the next fetch will request (1-based).
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    /// Whether a fetch is pending or in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether a fetch has failed. Sticky; the feed stops fetching for good.
    pub fn has_errored(&self) -> bool {
        self.has_errored
    }

    /// Whether an empty page was seen. Sticky; the feed is exhausted.
    pub fn last_page_reached(&self) -> bool {
        self.last_page_reached
    }
}

/// Merge newly fetched articles into the accumulated collection.
///
/// Keeps the first occurrence of each article and drops every later
/// structural duplicate, whether it duplicates a prior page or an earlier
/// item of the same page. Duplicates are whole-record equal, not merely
/// same-titled.
fn merge_unique(existing: Vec<Article>, fetched: Vec<Article>) -> Vec<Article> {
    existing.into_iter().chain(fetched).unique().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArticleSource;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::error::Error;

    /// Fake fetch boundary that replays a script of page results.
    struct ScriptedFetcher {
        pages: RefCell<VecDeque<Result<Vec<Article>, String>>>,
        requested: RefCell<Vec<u32>>,
    }

    impl ScriptedFetcher {
        fn new(pages: Vec<Result<Vec<Article>, String>>) -> Self {
            Self {
                pages: RefCell::new(pages.into()),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl FetchPage for ScriptedFetcher {
        async fn fetch_page(&self, page: u32) -> Result<Vec<Article>, Box<dyn Error>> {
            self.requested.borrow_mut().push(page);
            match self.pages.borrow_mut().pop_front() {
                Some(Ok(articles)) => Ok(articles),
                Some(Err(message)) => Err(message.into()),
                None => Ok(Vec::new()),
            }
        }
    }

    fn article(title: &str) -> Article {
        Article {
            source: ArticleSource {
                id: None,
                name: Some("Example Times".to_string()),
            },
            author: None,
            title: Some(title.to_string()),
            description: None,
            content: Some(format!("{title} content")),
            publishedAt: Some("2026-08-07T09:15:00Z".to_string()),
            url: Some(format!("https://example.com/{}", title.to_lowercase())),
            urlToImage: None,
        }
    }

    fn titles(feed_articles: &[Article]) -> Vec<&str> {
        feed_articles
            .iter()
            .map(|a| a.title.as_deref().unwrap())
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let feed = HeadlineFeed::new(ScriptedFetcher::new(vec![]));
        assert_eq!(feed.page_number(), 1);
        assert!(feed.articles().is_empty());
        assert!(feed.is_loading());
        assert!(!feed.has_errored());
        assert!(!feed.last_page_reached());
    }

    #[tokio::test]
    async fn test_advances_through_distinct_pages() {
        let fetcher = ScriptedFetcher::new(vec![
            Ok(vec![article("A"), article("B")]),
            Ok(vec![article("C")]),
            Ok(vec![article("D"), article("E"), article("F")]),
        ]);
        let mut feed = HeadlineFeed::new(fetcher);

        for _ in 0..3 {
            feed.fetch_next_page().await;
        }

        assert_eq!(feed.page_number(), 4);
        assert_eq!(feed.articles().len(), 6);
        assert!(!feed.is_loading());
        assert!(!feed.has_errored());
        assert!(!feed.last_page_reached());
        assert_eq!(feed.fetcher.requested.borrow().as_slice(), &[1, 2, 3]);
    }

    #[tokio::test]
    async fn test_dedup_is_idempotent_across_pages() {
        let page = vec![article("A"), article("B")];
        let fetcher = ScriptedFetcher::new(vec![Ok(page.clone()), Ok(page)]);
        let mut feed = HeadlineFeed::new(fetcher);

        feed.fetch_next_page().await;
        feed.fetch_next_page().await;

        assert_eq!(titles(feed.articles()), vec!["A", "B"]);
        // The second page was non-empty, so the cursor still advanced.
        assert_eq!(feed.page_number(), 3);
    }

    #[tokio::test]
    async fn test_dedup_within_a_single_page() {
        let fetcher = ScriptedFetcher::new(vec![Ok(vec![
            article("A"),
            article("A"),
            article("B"),
            article("A"),
        ])]);
        let mut feed = HeadlineFeed::new(fetcher);

        feed.fetch_next_page().await;

        assert_eq!(titles(feed.articles()), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_dedup_compares_whole_records_not_titles() {
        let mut other = article("A");
        other.url = Some("https://example.com/a-syndicated".to_string());

        let fetcher = ScriptedFetcher::new(vec![Ok(vec![article("A"), other])]);
        let mut feed = HeadlineFeed::new(fetcher);

        feed.fetch_next_page().await;

        // Same title, different URL: both survive.
        assert_eq!(feed.articles().len(), 2);
    }

    #[tokio::test]
    async fn test_order_is_first_seen_across_pages() {
        let fetcher = ScriptedFetcher::new(vec![
            Ok(vec![article("B"), article("A")]),
            Ok(vec![article("A"), article("C"), article("B")]),
        ]);
        let mut feed = HeadlineFeed::new(fetcher);

        feed.fetch_next_page().await;
        feed.fetch_next_page().await;

        assert_eq!(titles(feed.articles()), vec!["B", "A", "C"]);
    }

    #[tokio::test]
    async fn test_empty_page_exhausts_the_feed() {
        let fetcher = ScriptedFetcher::new(vec![
            Ok(vec![article("A")]),
            Ok(vec![]),
            Ok(vec![article("never")]),
        ]);
        let mut feed = HeadlineFeed::new(fetcher);

        feed.fetch_next_page().await;
        feed.fetch_next_page().await;

        assert!(feed.last_page_reached());
        assert!(!feed.is_loading());
        assert_eq!(feed.page_number(), 2);
        assert_eq!(titles(feed.articles()), vec!["A"]);

        // Further calls are no-ops: no request goes out, nothing changes.
        feed.fetch_next_page().await;
        feed.fetch_next_page().await;
        assert_eq!(feed.fetcher.requested.borrow().as_slice(), &[1, 2]);
        assert_eq!(feed.page_number(), 2);
        assert_eq!(titles(feed.articles()), vec!["A"]);
    }

    #[tokio::test]
    async fn test_error_is_sticky() {
        let fetcher = ScriptedFetcher::new(vec![
            Ok(vec![article("A")]),
            Err("HTTP 500".to_string()),
            Ok(vec![article("never")]),
        ]);
        let mut feed = HeadlineFeed::new(fetcher);

        feed.fetch_next_page().await;
        feed.fetch_next_page().await;

        assert!(feed.has_errored());
        assert!(!feed.is_loading());
        assert!(!feed.last_page_reached());
        // The failed fetch leaves the cursor and the collection alone.
        assert_eq!(feed.page_number(), 2);
        assert_eq!(titles(feed.articles()), vec!["A"]);

        feed.fetch_next_page().await;
        assert!(feed.has_errored());
        assert!(!feed.is_loading());
        assert_eq!(feed.fetcher.requested.borrow().as_slice(), &[1, 2]);
    }

    #[tokio::test]
    async fn test_error_on_first_page_keeps_collection_empty() {
        let fetcher = ScriptedFetcher::new(vec![Err("connection refused".to_string())]);
        let mut feed = HeadlineFeed::new(fetcher);

        feed.fetch_next_page().await;

        assert!(feed.has_errored());
        assert!(feed.articles().is_empty());
        assert_eq!(feed.page_number(), 1);
    }

    #[tokio::test]
    async fn test_overlapping_scenario_from_three_pages() {
        // Page 1: [A, B]. Page 2: [B, C] with B structurally identical.
        // Page 3: empty.
        let fetcher = ScriptedFetcher::new(vec![
            Ok(vec![article("A"), article("B")]),
            Ok(vec![article("B"), article("C")]),
            Ok(vec![]),
        ]);
        let mut feed = HeadlineFeed::new(fetcher);

        feed.fetch_next_page().await;
        assert_eq!(titles(feed.articles()), vec!["A", "B"]);
        assert_eq!(feed.page_number(), 2);

        feed.fetch_next_page().await;
        assert_eq!(titles(feed.articles()), vec!["A", "B", "C"]);
        assert_eq!(feed.page_number(), 3);

        feed.fetch_next_page().await;
        assert!(feed.last_page_reached());
        assert_eq!(titles(feed.articles()), vec!["A", "B", "C"]);
        assert_eq!(feed.page_number(), 3);
    }

    #[test]
    fn test_merge_unique_keeps_first_occurrence() {
        let merged = merge_unique(
            vec![article("A"), article("B")],
            vec![article("B"), article("C"), article("A")],
        );
        assert_eq!(titles(&merged), vec!["A", "B", "C"]);
    }
}
