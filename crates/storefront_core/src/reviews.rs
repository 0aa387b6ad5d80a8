use shared::domain::Review;

pub const PAGE_SIZE: usize = 5;

/// Profile review history, newest first, five to a page.
#[derive(Debug)]
pub struct ReviewHistory {
    reviews: Vec<Review>,
    page: usize,
}

impl ReviewHistory {
    pub fn new(mut reviews: Vec<Review>) -> Self {
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Self { reviews, page: 1 }
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub fn total(&self) -> usize {
        self.reviews.len()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total().div_ceil(PAGE_SIZE).max(1)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    pub fn visible(&self) -> &[Review] {
        let start = (self.page - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(self.reviews.len());
        &self.reviews[start.min(end)..end]
    }

    /// Pagination controls only appear once a second page exists.
    pub fn shows_pagination(&self) -> bool {
        self.total() > PAGE_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::domain::{ProductId, ReviewId};

    fn review(id: i64, day: u32) -> Review {
        Review {
            id: ReviewId(id),
            product_id: ProductId(1),
            product_name: "Organic Spirulina Powder".to_string(),
            rating: 5,
            comment: format!("Review {id}"),
            created_at: Utc.with_ymd_and_hms(2024, 2, day, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn reviews_are_ordered_newest_first() {
        let history = ReviewHistory::new(vec![review(1, 3), review(2, 20), review(3, 11)]);
        let ids: Vec<i64> = history.visible().iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn pages_hold_five_reviews() {
        let reviews = (1..=13).map(|id| review(id, 1)).collect();
        let mut history = ReviewHistory::new(reviews);

        assert_eq!(history.total_pages(), 3);
        assert_eq!(history.visible().len(), 5);
        assert!(history.shows_pagination());

        history.set_page(3);
        assert_eq!(history.visible().len(), 3);

        history.next_page();
        assert_eq!(history.page(), 3);
        history.set_page(0);
        assert_eq!(history.page(), 1);
    }

    #[test]
    fn a_single_page_hides_pagination() {
        let history = ReviewHistory::new((1..=5).map(|id| review(id, 1)).collect());
        assert!(!history.shows_pagination());
        assert_eq!(history.total_pages(), 1);
    }

    #[test]
    fn an_empty_history_is_still_on_page_one() {
        let history = ReviewHistory::new(Vec::new());
        assert!(history.is_empty());
        assert_eq!(history.page(), 1);
        assert_eq!(history.total_pages(), 1);
        assert!(history.visible().is_empty());
    }
}
