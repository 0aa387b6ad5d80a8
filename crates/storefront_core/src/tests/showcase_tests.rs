use super::*;

use chrono::{TimeZone, Utc};
use shared::domain::{Benefit, ProductId};

fn product(id: i64) -> Product {
    Product {
        id: ProductId(id),
        name: format!("Product {id}"),
        category: "Superfoods".to_string(),
        description: "Showcase test item".to_string(),
        price_cents: 1999,
        image_ref: format!("assets/products/{id}.png"),
        benefits: vec![Benefit {
            title: "Benefit".to_string(),
            description: "Benefit copy".to_string(),
        }],
        review_count: 0,
        updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn controller(n: usize) -> ShowcaseController {
    let items = (0..n as i64).map(product).collect();
    ShowcaseController::new(items).expect("catalog is non-empty")
}

fn settle(controller: &mut ShowcaseController, now: &mut Instant) {
    *now += TRANSITION_DURATION;
    assert!(controller.poll(*now), "expected a pending commit");
}

#[test]
fn empty_catalog_is_refused() {
    let err = ShowcaseController::new(Vec::new()).expect_err("empty catalog must not construct");
    assert!(matches!(err, StorefrontError::EmptyCatalog));
}

#[test]
fn sequenced_next_calls_walk_the_catalog_modulo_len() {
    let mut controller = controller(5);
    let mut now = Instant::now();
    for k in 1..=12usize {
        assert!(controller.request_next(now));
        settle(&mut controller, &mut now);
        assert_eq!(controller.current_index(), k % 5);
        assert_eq!(controller.phase(), Phase::Idle);
    }
}

#[test]
fn previous_is_the_exact_inverse_of_next() {
    let mut controller = controller(5);
    let mut now = Instant::now();

    assert!(controller.request_next(now));
    settle(&mut controller, &mut now);
    assert_eq!(controller.current_index(), 1);

    assert!(controller.request_previous(now));
    settle(&mut controller, &mut now);
    assert_eq!(controller.current_index(), 0);
}

#[test]
fn previous_wraps_from_first_to_last() {
    let mut controller = controller(5);
    let mut now = Instant::now();

    assert!(controller.request_previous(now));
    assert_eq!(controller.incoming_index(), Some(4));
    assert_eq!(controller.direction(), Some(Direction::Backward));
    settle(&mut controller, &mut now);
    assert_eq!(controller.current_index(), 4);
}

#[test]
fn second_next_during_transition_is_dropped() {
    let mut controller = controller(5);
    let mut now = Instant::now();

    assert!(controller.request_next(now));
    now += Duration::from_millis(100);
    assert!(!controller.request_next(now));
    assert!(!controller.request_previous(now));
    assert!(!controller.request_goto(3, now));

    // The in-flight transition is untouched and commits exactly one step.
    assert_eq!(controller.incoming_index(), Some(1));
    assert_eq!(controller.direction(), Some(Direction::Forward));
    now += TRANSITION_DURATION;
    assert!(controller.poll(now));
    assert_eq!(controller.current_index(), 1);
    assert_eq!(controller.phase(), Phase::Idle);
}

#[test]
fn goto_to_the_current_index_is_a_noop_in_any_phase() {
    let mut controller = controller(5);
    let now = Instant::now();

    assert!(!controller.request_goto(0, now));
    assert_eq!(controller.phase(), Phase::Idle);

    assert!(controller.request_goto(2, now));
    assert!(!controller.request_goto(0, now));
    assert_eq!(controller.incoming_index(), Some(2));
}

#[test]
fn forward_transition_commits_only_at_the_deadline() {
    let mut controller = controller(5);
    let start = Instant::now();

    assert!(controller.request_next(start));
    assert_eq!(controller.phase(), Phase::Transitioning);
    assert_eq!(controller.incoming_index(), Some(1));
    assert_eq!(controller.direction(), Some(Direction::Forward));

    assert!(!controller.poll(start + Duration::from_millis(499)));
    assert_eq!(controller.current_index(), 0);
    assert_eq!(controller.phase(), Phase::Transitioning);

    assert!(controller.poll(start + TRANSITION_DURATION));
    assert_eq!(controller.current_index(), 1);
    assert_eq!(controller.phase(), Phase::Idle);
    assert_eq!(controller.incoming_index(), None);
    assert_eq!(controller.direction(), None);
}

#[test]
fn goto_last_from_first_animates_backward() {
    let mut controller = controller(5);
    let mut now = Instant::now();

    assert!(controller.request_goto(4, now));
    assert_eq!(controller.incoming_index(), Some(4));
    assert_eq!(controller.direction(), Some(Direction::Backward));
    settle(&mut controller, &mut now);
    assert_eq!(controller.current_index(), 4);
}

#[test]
fn goto_above_current_animates_forward() {
    let mut controller = controller(5);
    let now = Instant::now();

    assert!(controller.request_goto(2, now));
    assert_eq!(controller.direction(), Some(Direction::Forward));
}

#[test]
fn single_item_catalog_never_transitions() {
    let mut controller = controller(1);
    let now = Instant::now();

    assert!(!controller.request_next(now));
    assert!(!controller.request_previous(now));
    assert!(!controller.request_goto(0, now));
    assert_eq!(controller.phase(), Phase::Idle);
    assert_eq!(controller.current_index(), 0);
    assert!(!controller.poll(now + TRANSITION_DURATION));
}

#[test]
#[should_panic(expected = "out of range")]
fn goto_past_the_catalog_end_panics() {
    let mut controller = controller(3);
    controller.request_goto(3, Instant::now());
}

#[test]
fn progress_tracks_the_deadline() {
    let mut controller = controller(5);
    let start = Instant::now();

    assert_eq!(controller.progress(start), 1.0);
    assert_eq!(controller.time_until_completion(start), None);

    assert!(controller.request_next(start));
    assert_eq!(controller.progress(start), 0.0);
    assert_eq!(
        controller.time_until_completion(start),
        Some(TRANSITION_DURATION)
    );

    let halfway = controller.progress(start + Duration::from_millis(250));
    assert!((halfway - 0.5).abs() < 0.01, "got {halfway}");
    assert_eq!(controller.progress(start + TRANSITION_DURATION), 1.0);
}

#[test]
fn teardown_discards_the_pending_transition() {
    let mut first = controller(5);
    let start = Instant::now();
    assert!(first.request_next(start));
    drop(first);

    // A fresh mount starts settled at index zero; the old deadline passing
    // has no effect on it.
    let mut second = controller(5);
    assert!(!second.poll(start + TRANSITION_DURATION));
    assert_eq!(second.current_index(), 0);
    assert_eq!(second.phase(), Phase::Idle);
}
