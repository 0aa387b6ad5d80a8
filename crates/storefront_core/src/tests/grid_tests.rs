use super::*;

use chrono::{TimeZone, Utc};
use shared::domain::ProductId;

fn product(id: i64, category: &str, price_cents: i64, review_count: u32, day: u32) -> Product {
    Product {
        id: ProductId(id),
        name: format!("Product {id}"),
        category: category.to_string(),
        description: "Grid test item".to_string(),
        price_cents,
        image_ref: String::new(),
        benefits: Vec::new(),
        review_count,
        updated_at: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
    }
}

fn bulk(n: usize) -> Vec<Product> {
    (0..n as i64)
        .map(|id| product(id, "Superfoods", 1000 + id, 0, 1))
        .collect()
}

#[test]
fn pages_slice_twelve_items_at_a_time() {
    let mut grid = ProductGrid::new(bulk(30));
    assert_eq!(grid.total_pages(), 3);
    assert_eq!(grid.visible().len(), 12);
    assert_eq!(grid.visible_range(), Some((1, 12)));

    grid.next_page();
    assert_eq!(grid.page(), 2);
    assert_eq!(grid.visible_range(), Some((13, 24)));

    grid.set_page(3);
    assert_eq!(grid.visible().len(), 6);
    assert_eq!(grid.visible_range(), Some((25, 30)));

    // Clamped at both ends.
    grid.next_page();
    assert_eq!(grid.page(), 3);
    grid.set_page(0);
    assert_eq!(grid.page(), 1);
}

#[test]
fn disabled_categories_drop_out_of_the_grid() {
    let products = vec![
        product(1, "Superfoods", 1000, 0, 1),
        product(2, "Oils", 2000, 0, 1),
        product(3, "Superfoods", 3000, 0, 1),
    ];
    let mut grid = ProductGrid::new(products);
    assert_eq!(grid.total_filtered(), 3);

    grid.set_category_enabled("Superfoods", false);
    let visible: Vec<i64> = grid.visible().iter().map(|p| p.id.0).collect();
    assert_eq!(visible, vec![2]);

    grid.set_category_enabled("Superfoods", true);
    assert_eq!(grid.total_filtered(), 3);
}

#[test]
fn price_band_is_inclusive_at_both_ends() {
    let products = vec![
        product(1, "Oils", 999, 0, 1),
        product(2, "Oils", 1000, 0, 1),
        product(3, "Oils", 2500, 0, 1),
        product(4, "Oils", 2501, 0, 1),
    ];
    let mut grid = ProductGrid::new(products);
    grid.set_price_band(PriceBand {
        min_cents: 1000,
        max_cents: 2500,
    });

    let visible: Vec<i64> = grid.visible().iter().map(|p| p.id.0).collect();
    assert_eq!(visible, vec![2, 3]);
}

#[test]
fn price_sort_is_ascending() {
    let products = vec![
        product(1, "Oils", 3000, 0, 1),
        product(2, "Oils", 1000, 0, 1),
        product(3, "Oils", 2000, 0, 1),
    ];
    let grid = ProductGrid::new(products);
    let visible: Vec<i64> = grid.visible().iter().map(|p| p.id.0).collect();
    assert_eq!(visible, vec![2, 3, 1]);
}

#[test]
fn rating_and_popularity_rank_by_review_volume() {
    let products = vec![
        product(1, "Oils", 1000, 4, 1),
        product(2, "Oils", 1000, 90, 1),
        product(3, "Oils", 1000, 17, 1),
    ];
    let mut grid = ProductGrid::new(products);

    grid.set_sort(SortKey::Rating);
    let by_rating: Vec<i64> = grid.visible().iter().map(|p| p.id.0).collect();
    assert_eq!(by_rating, vec![2, 3, 1]);

    grid.set_sort(SortKey::Popularity);
    let by_popularity: Vec<i64> = grid.visible().iter().map(|p| p.id.0).collect();
    assert_eq!(by_popularity, vec![2, 3, 1]);
}

#[test]
fn date_sort_is_oldest_first() {
    let products = vec![
        product(1, "Oils", 1000, 0, 20),
        product(2, "Oils", 1000, 0, 5),
        product(3, "Oils", 1000, 0, 12),
    ];
    let mut grid = ProductGrid::new(products);
    grid.set_sort(SortKey::Date);

    let visible: Vec<i64> = grid.visible().iter().map(|p| p.id.0).collect();
    assert_eq!(visible, vec![2, 3, 1]);
}

#[test]
fn equal_sort_keys_keep_catalog_order() {
    let products = vec![
        product(7, "Oils", 1500, 0, 1),
        product(8, "Oils", 1500, 0, 1),
        product(9, "Oils", 1500, 0, 1),
    ];
    let grid = ProductGrid::new(products);
    let visible: Vec<i64> = grid.visible().iter().map(|p| p.id.0).collect();
    assert_eq!(visible, vec![7, 8, 9]);
}

#[test]
fn any_filter_or_sort_change_snaps_back_to_page_one() {
    let mut grid = ProductGrid::new(bulk(30));
    grid.set_page(3);

    grid.set_sort(SortKey::Date);
    assert_eq!(grid.page(), 1);

    grid.set_page(2);
    grid.set_price_band(PriceBand {
        min_cents: 0,
        max_cents: 1010,
    });
    assert_eq!(grid.page(), 1);

    grid.set_page(1);
    grid.set_category_enabled("Superfoods", false);
    assert_eq!(grid.page(), 1);

    // Re-applying the same sort is not a change and keeps the page.
    let mut grid = ProductGrid::new(bulk(30));
    grid.set_page(2);
    grid.set_sort(SortKey::Price);
    assert_eq!(grid.page(), 2);
}

#[test]
fn empty_result_still_reports_one_page() {
    let mut grid = ProductGrid::new(bulk(5));
    grid.set_price_band(PriceBand {
        min_cents: 1,
        max_cents: 2,
    });

    assert_eq!(grid.total_filtered(), 0);
    assert_eq!(grid.total_pages(), 1);
    assert!(grid.visible().is_empty());
    assert_eq!(grid.visible_range(), None);
    assert!(!grid.shows_pagination());
    assert_eq!(grid.summary_line(), "Selected Products: 0");
}

#[test]
fn summary_line_reports_the_visible_slice() {
    let mut grid = ProductGrid::new(bulk(37));
    grid.set_page(2);
    assert_eq!(
        grid.summary_line(),
        "Selected Products: 37 (Showing 13-24 of 37)"
    );
    assert!(grid.shows_pagination());
}
