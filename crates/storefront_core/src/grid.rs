use std::cmp::Ordering;
use std::collections::BTreeMap;

use shared::domain::Product;

pub const PAGE_SIZE: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Rating,
    Popularity,
    Date,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Price,
        SortKey::Rating,
        SortKey::Popularity,
        SortKey::Date,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Price => "Price",
            SortKey::Rating => "Rating",
            SortKey::Popularity => "Popularity",
            SortKey::Date => "Date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBand {
    pub min_cents: i64,
    pub max_cents: i64,
}

impl Default for PriceBand {
    fn default() -> Self {
        Self {
            min_cents: 0,
            max_cents: i64::MAX,
        }
    }
}

/// Client-side filter/sort/pagination over the full in-memory product list.
/// Every filter or sort change snaps back to the first page.
#[derive(Debug)]
pub struct ProductGrid {
    products: Vec<Product>,
    categories: BTreeMap<String, bool>,
    price: PriceBand,
    sort: SortKey,
    page: usize,
}

impl ProductGrid {
    pub fn new(products: Vec<Product>) -> Self {
        let mut categories = BTreeMap::new();
        for product in &products {
            categories.entry(product.category.clone()).or_insert(true);
        }
        Self {
            products,
            categories,
            price: PriceBand::default(),
            sort: SortKey::Price,
            page: 1,
        }
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        if self.sort != sort {
            self.sort = sort;
            self.page = 1;
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, bool)> {
        self.categories
            .iter()
            .map(|(name, enabled)| (name.as_str(), *enabled))
    }

    pub fn category_enabled(&self, name: &str) -> bool {
        self.categories.get(name).copied().unwrap_or(false)
    }

    pub fn set_category_enabled(&mut self, name: &str, enabled: bool) {
        if let Some(flag) = self.categories.get_mut(name) {
            if *flag != enabled {
                *flag = enabled;
                self.page = 1;
            }
        }
    }

    pub fn price_band(&self) -> PriceBand {
        self.price
    }

    pub fn set_price_band(&mut self, band: PriceBand) {
        if self.price != band {
            self.price = band;
            self.page = 1;
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_filtered(&self) -> usize {
        self.filtered().len()
    }

    /// At least one page is always shown, even with no matches.
    pub fn total_pages(&self) -> usize {
        self.total_filtered().div_ceil(PAGE_SIZE).max(1)
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

    pub fn visible(&self) -> Vec<&Product> {
        self.filtered()
            .into_iter()
            .skip((self.page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    /// One-based inclusive bounds of the visible slice, None when nothing
    /// matches the filters.
    pub fn visible_range(&self) -> Option<(usize, usize)> {
        let total = self.total_filtered();
        if total == 0 {
            return None;
        }
        let start = (self.page - 1) * PAGE_SIZE + 1;
        let end = (start + PAGE_SIZE - 1).min(total);
        Some((start, end))
    }

    pub fn shows_pagination(&self) -> bool {
        self.total_filtered() > PAGE_SIZE
    }

    pub fn summary_line(&self) -> String {
        let total = self.total_filtered();
        match self.visible_range() {
            Some((start, end)) => {
                format!("Selected Products: {total} (Showing {start}-{end} of {total})")
            }
            None => format!("Selected Products: {total}"),
        }
    }

    fn filtered(&self) -> Vec<&Product> {
        let mut matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| self.category_enabled(&p.category))
            .filter(|p| {
                p.price_cents >= self.price.min_cents && p.price_cents <= self.price.max_cents
            })
            .collect();
        matches.sort_by(|a, b| self.compare(a, b));
        matches
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self.sort {
            SortKey::Price => a.price_cents.cmp(&b.price_cents),
            // Rating and popularity both rank by review volume, most first.
            SortKey::Rating | SortKey::Popularity => b.review_count.cmp(&a.review_count),
            SortKey::Date => a.updated_at.cmp(&b.updated_at),
        }
    }
}

#[cfg(test)]
#[path = "tests/grid_tests.rs"]
mod tests;
