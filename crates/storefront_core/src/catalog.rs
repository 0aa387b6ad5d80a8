use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use shared::{
    domain::{Benefit, Product, ProductId, Review, ReviewId},
    error::StorefrontError,
};
use tracing::info;

/// Read-only product feed, loaded once at startup. The showcase and grid
/// never see catalog mutations while they are alive.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Product>, StorefrontError>;
}

/// Built-in catalog used whenever no catalog file is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalog;

#[async_trait]
impl CatalogSource for BundledCatalog {
    async fn load(&self) -> Result<Vec<Product>, StorefrontError> {
        Ok(demo_products())
    }
}

/// Catalog read from a JSON file (an array of products, the same shape the
/// seed tool writes).
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Result<Vec<Product>, StorefrontError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            StorefrontError::CatalogUnavailable(format!("{}: {err}", self.path.display()))
        })?;
        let products: Vec<Product> = serde_json::from_str(&raw).map_err(|err| {
            StorefrontError::CatalogUnavailable(format!("{}: {err}", self.path.display()))
        })?;
        if products.is_empty() {
            return Err(StorefrontError::EmptyCatalog);
        }
        info!(
            "catalog: loaded {} products from {}",
            products.len(),
            self.path.display()
        );
        Ok(products)
    }
}

fn day(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, 10, 0, 0).unwrap()
}

fn benefit(title: &str, description: &str) -> Benefit {
    Benefit {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn entry(
    id: i64,
    name: &str,
    category: &str,
    description: &str,
    price_cents: i64,
    image: &str,
    review_count: u32,
    updated_at: DateTime<Utc>,
    benefits: Vec<Benefit>,
) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        price_cents,
        image_ref: image.to_string(),
        benefits,
        review_count,
        updated_at,
    }
}

pub fn demo_products() -> Vec<Product> {
    vec![
        entry(
            1,
            "Organic Spirulina Powder",
            "Superfoods",
            "Nutrient-dense blue-green algae from mineral-rich freshwater ponds, milled fine enough to stir straight into smoothies and juices.",
            2499,
            "assets/products/spirulina.png",
            128,
            day(5, 18),
            vec![
                benefit(
                    "Complete Plant Protein",
                    "Delivers all nine essential amino acids in a highly absorbable form.",
                ),
                benefit(
                    "Antioxidant Rich",
                    "Phycocyanin helps neutralize free radicals before they stress your cells.",
                ),
                benefit(
                    "Natural Energy",
                    "B vitamins and iron support steady energy without a caffeine spike.",
                ),
            ],
        ),
        entry(
            2,
            "Cold-Pressed Flaxseed Oil",
            "Oils",
            "Unrefined golden flaxseed oil pressed below 40°C and bottled in dark glass to keep its delicate omega fats intact.",
            1850,
            "assets/products/flaxseed-oil.png",
            45,
            day(3, 2),
            vec![
                benefit(
                    "Omega-3 Support",
                    "One spoonful covers your daily alpha-linolenic acid needs.",
                ),
                benefit(
                    "Heart Friendly",
                    "Plant omegas help maintain healthy cholesterol levels already in range.",
                ),
                benefit(
                    "Skin and Hair",
                    "Essential fatty acids nourish skin and hair from the inside out.",
                ),
            ],
        ),
        entry(
            3,
            "Ashwagandha Root Capsules",
            "Herbal Supplements",
            "Full-spectrum ashwagandha root extract standardized to 5% withanolides, grown without pesticides and encapsulated without fillers.",
            3200,
            "assets/products/ashwagandha.png",
            210,
            day(6, 25),
            vec![
                benefit(
                    "Stress Balance",
                    "A clinically studied adaptogen that helps the body manage everyday stress.",
                ),
                benefit(
                    "Restful Sleep",
                    "Supports a calm evening wind-down without morning grogginess.",
                ),
                benefit(
                    "Focus and Clarity",
                    "Traditional use and modern trials point to steadier concentration.",
                ),
            ],
        ),
        entry(
            4,
            "Raw Manuka Honey",
            "Pantry",
            "Single-origin New Zealand manuka honey, never heated above hive temperature and independently tested for methylglyoxal activity.",
            4999,
            "assets/products/manuka-honey.png",
            87,
            day(1, 14),
            vec![
                benefit(
                    "Immune Support",
                    "Naturally occurring MGO gives manuka its renowned activity rating.",
                ),
                benefit(
                    "Soothing Comfort",
                    "A spoonful coats and calms a scratchy throat on rough days.",
                ),
                benefit(
                    "Live Enzymes",
                    "Raw and unpasteurized so none of the good stuff is cooked away.",
                ),
            ],
        ),
        entry(
            5,
            "Matcha Green Tea Powder",
            "Teas",
            "Ceremonial-grade matcha from shade-grown first-flush leaves, stone-ground to order in small batches for a naturally sweet cup.",
            2175,
            "assets/products/matcha.png",
            156,
            day(4, 8),
            vec![
                benefit(
                    "Calm Alertness",
                    "L-theanine smooths the caffeine curve for focus without jitters.",
                ),
                benefit(
                    "Catechin Dense",
                    "Whole-leaf powder carries far more EGCG than steeped green tea.",
                ),
                benefit(
                    "Metabolism Boost",
                    "Green tea catechins support a healthy metabolic rate.",
                ),
            ],
        ),
        entry(
            6,
            "Turmeric Curcumin Blend",
            "Herbal Supplements",
            "Golden turmeric root paired with black pepper extract so the curcumin actually reaches where it is needed.",
            2725,
            "assets/products/turmeric.png",
            64,
            day(2, 27),
            vec![
                benefit(
                    "Joint Comfort",
                    "Curcuminoids help ease the everyday stiffness that slows you down.",
                ),
                benefit(
                    "Enhanced Absorption",
                    "Piperine multiplies curcumin uptake compared to turmeric alone.",
                ),
                benefit(
                    "Antioxidant Defense",
                    "Supports the body's own response to oxidative stress.",
                ),
            ],
        ),
        entry(
            7,
            "Whole Chia Seeds",
            "Superfoods",
            "Raw black chia seeds from high-altitude farms, sieved and triple-cleaned, ready for puddings, porridge and baking.",
            1299,
            "assets/products/chia.png",
            33,
            day(5, 30),
            vec![
                benefit(
                    "Fiber Forward",
                    "Ten grams of fiber per serving keeps digestion moving gently.",
                ),
                benefit(
                    "Lasting Fullness",
                    "Seeds swell to form a gel that helps you feel satisfied longer.",
                ),
                benefit(
                    "Plant Omegas",
                    "One of the richest plant sources of alpha-linolenic acid.",
                ),
            ],
        ),
    ]
}

pub fn demo_reviews() -> Vec<Review> {
    let entries: [(i64, i64, &str, u8, &str, u32, u32); 12] = [
        (1, 3, "Ashwagandha Root Capsules", 5, "Two weeks in and my evenings are noticeably calmer.", 6, 2),
        (2, 5, "Matcha Green Tea Powder", 5, "Smooth, grassy, zero bitterness. Best matcha I have ordered online.", 5, 28),
        (3, 1, "Organic Spirulina Powder", 4, "Mixes better than other brands, though the taste takes getting used to.", 5, 21),
        (4, 4, "Raw Manuka Honey", 5, "Thick, creamy and worth every cent during cold season.", 5, 12),
        (5, 2, "Cold-Pressed Flaxseed Oil", 4, "Fresh and nutty. Arrived well before the pressing date on the label.", 4, 30),
        (6, 6, "Turmeric Curcumin Blend", 5, "The only turmeric capsules that made a difference for my knees.", 4, 19),
        (7, 1, "Organic Spirulina Powder", 5, "My morning smoothie staple now. Great resealable pouch.", 4, 6),
        (8, 7, "Whole Chia Seeds", 4, "Clean seeds, no grit. Pudding sets perfectly overnight.", 3, 25),
        (9, 5, "Matcha Green Tea Powder", 4, "Lovely color and froth. A touch pricey for daily drinking.", 3, 11),
        (10, 3, "Ashwagandha Root Capsules", 5, "Sleeping through the night again. Will reorder.", 2, 17),
        (11, 4, "Raw Manuka Honey", 3, "Good honey but the jar arrived with a sticky lid.", 2, 3),
        (12, 6, "Turmeric Curcumin Blend", 4, "No fillers and easy to swallow. Repeat purchase.", 1, 9),
    ];
    entries
        .into_iter()
        .map(
            |(id, product_id, product_name, rating, comment, month, created_day)| Review {
                id: ReviewId(id),
                product_id: ProductId(product_id),
                product_name: product_name.to_string(),
                rating,
                comment: comment.to_string(),
                created_at: day(month, created_day),
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_catalog_path(tag: &str) -> PathBuf {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        std::env::temp_dir().join(format!("storefront_catalog_{tag}_{unique}.json"))
    }

    #[test]
    fn demo_catalog_is_well_formed() {
        let products = demo_products();
        assert!(!products.is_empty());

        let mut ids: Vec<i64> = products.iter().map(|p| p.id.0).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len(), "product ids must be unique");

        for product in &products {
            assert!(product.price_cents > 0);
            assert!(!product.benefits.is_empty());
            assert!(!product.category.is_empty());
        }
    }

    #[test]
    fn demo_reviews_reference_demo_products() {
        let products = demo_products();
        for review in demo_reviews() {
            assert!(
                products.iter().any(|p| p.id == review.product_id),
                "review {} points at a missing product",
                review.id.0
            );
            assert!((1..=5).contains(&review.rating));
        }
    }

    #[tokio::test]
    async fn file_catalog_round_trips_through_json() {
        let path = temp_catalog_path("roundtrip");
        let serialized =
            serde_json::to_string_pretty(&demo_products()).expect("demo catalog serializes");
        std::fs::write(&path, serialized).expect("write temp catalog");

        let loaded = JsonFileCatalog::new(&path)
            .load()
            .await
            .expect("file catalog loads");
        assert_eq!(loaded, demo_products());
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn missing_file_reports_the_path() {
        let path = temp_catalog_path("missing");
        let err = JsonFileCatalog::new(&path)
            .load()
            .await
            .expect_err("missing file must fail");
        match err {
            StorefrontError::CatalogUnavailable(message) => {
                assert!(message.contains("storefront_catalog_missing"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_json_is_unavailable_not_a_panic() {
        let path = temp_catalog_path("malformed");
        std::fs::write(&path, "{ not json").expect("write temp catalog");

        let err = JsonFileCatalog::new(&path)
            .load()
            .await
            .expect_err("malformed file must fail");
        assert!(matches!(err, StorefrontError::CatalogUnavailable(_)));
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn an_empty_catalog_file_is_refused() {
        let path = temp_catalog_path("empty");
        std::fs::write(&path, "[]").expect("write temp catalog");

        let err = JsonFileCatalog::new(&path)
            .load()
            .await
            .expect_err("empty catalog must fail");
        assert!(matches!(err, StorefrontError::EmptyCatalog));
        std::fs::remove_file(&path).ok();
    }
}
