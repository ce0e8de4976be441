use super::*;

const WIDTH: f32 = 400.0;

fn layout() -> LayoutMetrics {
    LayoutMetrics::new(WIDTH, 800.0)
}

fn controller(deck_len: usize) -> CardSwipeController {
    CardSwipeController::new(deck_len, layout()).expect("non-empty deck")
}

/// Drives one full gesture: drag to `dx`, release at `t0`, then tick far
/// past any animation end.
fn run_gesture(ctrl: &mut CardSwipeController, dx: f32, t0: f64) -> Option<SwipeDecision> {
    ctrl.begin_drag();
    ctrl.drag_to(DragOffset::new(dx, 0.0));
    let decision = ctrl.release(t0);
    while ctrl.tick(t0 + 10.0) {}
    decision
}

#[test]
fn zero_deck_len_is_rejected() {
    assert!(CardSwipeController::new(0, layout()).is_err());
}

#[test]
fn release_below_threshold_snaps_back() {
    let mut ctrl = controller(3);
    let decision = run_gesture(&mut ctrl, 90.0, 0.0);
    assert_eq!(decision, Some(SwipeDecision::Cancel));
    assert_eq!(ctrl.current_index(), 0);
    assert_eq!(ctrl.offset(), DragOffset::ORIGIN);
    assert_eq!(ctrl.phase(), SwipePhase::Idle);
}

#[test]
fn release_exactly_at_threshold_snaps_back() {
    // threshold = 0.25 * 400 = 100; the comparison is strict.
    let mut ctrl = controller(3);
    assert_eq!(run_gesture(&mut ctrl, 100.0, 0.0), Some(SwipeDecision::Cancel));
    assert_eq!(run_gesture(&mut ctrl, -100.0, 1.0), Some(SwipeDecision::Cancel));
    assert_eq!(ctrl.current_index(), 0);
}

#[test]
fn release_past_threshold_commits_in_drag_direction() {
    let mut ctrl = controller(3);
    assert_eq!(
        run_gesture(&mut ctrl, 101.0, 0.0),
        Some(SwipeDecision::Commit(SwipeDirection::Right))
    );
    assert_eq!(ctrl.current_index(), 1);

    assert_eq!(
        run_gesture(&mut ctrl, -250.0, 1.0),
        Some(SwipeDecision::Commit(SwipeDirection::Left))
    );
    assert_eq!(ctrl.current_index(), 2);
}

#[test]
fn commit_wraps_around_to_first_card() {
    let mut ctrl = controller(3);
    for i in 0..3 {
        run_gesture(&mut ctrl, 200.0, f64::from(i));
    }
    assert_eq!(ctrl.current_index(), 0);
}

#[test]
fn commit_animation_interpolates_toward_offscreen_target() {
    let mut ctrl = controller(3);
    ctrl.begin_drag();
    ctrl.drag_to(DragOffset::new(200.0, 0.0));
    ctrl.release(0.0);

    // Halfway through the 180 ms timing: midway between 200 and +width.
    assert!(ctrl.tick(f64::from(COMMIT_ANIMATION_SECS) / 2.0));
    assert!((ctrl.offset().x - 300.0).abs() < 0.01);
    assert_eq!(ctrl.current_index(), 0);

    assert!(!ctrl.tick(f64::from(COMMIT_ANIMATION_SECS)));
    assert_eq!(ctrl.current_index(), 1);
    assert_eq!(ctrl.offset(), DragOffset::ORIGIN);
}

#[test]
fn duplicate_ticks_after_commit_do_not_advance_twice() {
    let mut ctrl = controller(3);
    ctrl.begin_drag();
    ctrl.drag_to(DragOffset::new(200.0, 0.0));
    ctrl.release(0.0);

    assert!(!ctrl.tick(1.0));
    assert_eq!(ctrl.current_index(), 1);

    // The completion already fired; replaying it is a no-op.
    assert!(!ctrl.tick(1.0));
    assert!(!ctrl.tick(2.0));
    assert_eq!(ctrl.current_index(), 1);
}

#[test]
fn duplicate_release_events_are_dropped() {
    let mut ctrl = controller(3);
    ctrl.begin_drag();
    ctrl.drag_to(DragOffset::new(200.0, 0.0));
    assert!(ctrl.release(0.0).is_some());
    assert_eq!(ctrl.release(0.0), None);
    while ctrl.tick(10.0) {}
    assert_eq!(ctrl.release(10.0), None);
    assert_eq!(ctrl.current_index(), 1);
}

#[test]
fn release_without_move_degrades_to_zero_offset_cancel() {
    let mut ctrl = controller(3);
    ctrl.begin_drag();
    assert_eq!(ctrl.release(0.0), Some(SwipeDecision::Cancel));
    // A zero-displacement spring settles on the first frame.
    assert!(!ctrl.tick(0.0));
    assert_eq!(ctrl.phase(), SwipePhase::Idle);
    assert_eq!(ctrl.current_index(), 0);
}

#[test]
fn new_drag_is_ignored_until_the_animation_settles() {
    let mut ctrl = controller(3);
    ctrl.begin_drag();
    ctrl.drag_to(DragOffset::new(200.0, 0.0));
    ctrl.release(0.0);

    ctrl.begin_drag();
    assert_eq!(ctrl.phase(), SwipePhase::Animating);
    ctrl.drag_to(DragOffset::new(-300.0, 0.0));
    assert_eq!(ctrl.release(0.05), None);

    while ctrl.tick(10.0) {}
    assert_eq!(ctrl.current_index(), 1);

    ctrl.begin_drag();
    assert_eq!(ctrl.phase(), SwipePhase::Dragging);
}

#[test]
fn superseded_commit_never_advances_the_index() {
    let mut ctrl = controller(3);
    ctrl.begin_drag();
    ctrl.drag_to(DragOffset::new(300.0, 0.0));
    ctrl.release(0.0);
    assert!(ctrl.tick(0.05));

    // Snap back mid-flight; the commit run is stale from here on.
    ctrl.reset_position(0.05);
    while ctrl.tick(10.0) {}
    assert_eq!(ctrl.current_index(), 0);
    assert_eq!(ctrl.offset(), DragOffset::ORIGIN);
    assert_eq!(ctrl.phase(), SwipePhase::Idle);
}

#[test]
fn cancel_spring_settles_at_the_origin() {
    let mut ctrl = controller(3);
    ctrl.begin_drag();
    ctrl.drag_to(DragOffset::new(80.0, -30.0));
    ctrl.release(0.0);

    assert!(ctrl.tick(0.05));
    let mid = ctrl.offset();
    assert!(mid.x.abs() < 80.0);
    assert!(mid.y.abs() < 30.0);

    while ctrl.tick(10.0) {}
    assert_eq!(ctrl.offset(), DragOffset::ORIGIN);
    assert_eq!(ctrl.current_index(), 0);
}

#[test]
fn rotation_maps_offset_linearly_and_clamps() {
    assert_eq!(rotation_degrees(0.0, WIDTH), 0.0);
    assert_eq!(rotation_degrees(WIDTH, WIDTH), MAX_ROTATION_DEGREES);
    assert_eq!(rotation_degrees(-WIDTH, WIDTH), -MAX_ROTATION_DEGREES);
    assert_eq!(rotation_degrees(WIDTH / 2.0, WIDTH), MAX_ROTATION_DEGREES / 2.0);
    assert_eq!(rotation_degrees(WIDTH * 2.0, WIDTH), MAX_ROTATION_DEGREES);
    assert_eq!(rotation_degrees(-WIDTH * 3.0, WIDTH), -MAX_ROTATION_DEGREES);
}

#[test]
fn transform_passes_the_offset_through_unmodified() {
    let mut ctrl = controller(3);
    ctrl.begin_drag();
    ctrl.drag_to(DragOffset::new(120.0, 45.0));
    let transform = ctrl.transform();
    assert_eq!(transform.translate_x, 120.0);
    assert_eq!(transform.translate_y, 45.0);
    assert_eq!(transform.rotation_degrees, rotation_degrees(120.0, WIDTH));
}

#[test]
fn layout_update_moves_the_threshold() {
    let mut ctrl = controller(3);
    ctrl.set_layout(LayoutMetrics::new(800.0, 600.0));
    // 150 is past the old threshold (100) but under the new one (200).
    assert_eq!(run_gesture(&mut ctrl, 150.0, 0.0), Some(SwipeDecision::Cancel));
    assert_eq!(ctrl.current_index(), 0);
}

#[test]
fn three_card_deck_scenario_shows_the_second_fact() {
    let deck = shared::domain::FactDeck::new(vec!["A".into(), "B".into(), "C".into()])
        .expect("deck");
    let mut ctrl = CardSwipeController::for_deck(&deck, layout());

    let decision = run_gesture(&mut ctrl, 200.0, 0.0);
    assert_eq!(decision, Some(SwipeDecision::Commit(SwipeDirection::Right)));
    assert_eq!(ctrl.current_index(), 1);
    assert_eq!(deck.fact(ctrl.current_index()), "B");
}

#[test]
fn topic_selection_toggles_membership() {
    let mut selection = TopicSelection::new();
    let science = TopicId::new("science");
    assert!(selection.is_empty());
    assert!(selection.toggle(science.clone()));
    assert!(selection.is_selected(&science));
    assert_eq!(selection.len(), 1);
    assert!(!selection.toggle(science.clone()));
    assert!(selection.is_empty());
}

#[test]
fn topic_selection_ids_come_back_sorted() {
    let selection = TopicSelection::from_ids(
        ["travel", "arts", "space"].into_iter().map(TopicId::new),
    );
    let ids: Vec<String> = selection.sorted_ids().into_iter().map(|id| id.0).collect();
    assert_eq!(ids, vec!["arts", "space", "travel"]);
}
