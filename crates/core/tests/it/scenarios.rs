use std::cell::RefCell;
use std::rc::Rc;

use area_selector_core::{AreaSelector, PinchPhase, Point, Rect, TouchMode};

fn selector() -> AreaSelector {
    AreaSelector::configure(
        Rect::new(0.0, 0.0, 300.0, 300.0),
        Rect::new(50.0, 50.0, 100.0, 100.0),
    )
    .unwrap()
}

#[test]
fn pinch_then_move_drag() {
    let mut selector = selector();

    assert!(selector.on_pinch(PinchPhase::Changed, 2.0));
    assert_eq!(selector.current_selection(), Rect::new(0.0, 0.0, 200.0, 200.0));

    selector.on_pointer_down(Point::new(100.0, 100.0));
    assert_eq!(selector.touch_mode(), TouchMode::Move);
    assert!(selector.on_pointer_move(Point::new(220.0, 220.0)));
    selector.on_pointer_up(Point::new(220.0, 220.0));

    assert_eq!(selector.current_selection(), Rect::new(100.0, 100.0, 200.0, 200.0));
}

#[test]
fn move_clamps_at_both_extremes() {
    let mut selector = selector();
    selector.on_pointer_down(Point::new(100.0, 100.0));

    selector.on_pointer_move(Point::new(-1000.0, -1000.0));
    assert_eq!(selector.current_selection().origin, Point::new(0.0, 0.0));

    selector.on_pointer_move(Point::new(10000.0, 10000.0));
    assert_eq!(selector.current_selection().origin, Point::new(200.0, 200.0));
}

#[test]
fn corner_drag_keeps_the_same_anchor_for_the_whole_session() {
    let mut selector = selector();
    // Grab near the top-left corner; the anchor is the bottom-right (150, 150).
    selector.on_pointer_down(Point::new(52.0, 55.0));
    assert_eq!(selector.touch_mode(), TouchMode::Resize);

    let samples = [
        Point::new(40.0, 40.0),
        Point::new(20.0, 90.0),
        Point::new(95.0, 10.0),
        Point::new(0.0, 0.0),
    ];
    for touch in samples {
        assert!(selector.on_pointer_move(touch), "{touch:?}");
        let selection = selector.current_selection();
        assert_eq!(selection, Rect::from_two_points(Point::new(150.0, 150.0), touch));
    }
    selector.on_pointer_up(Point::new(0.0, 0.0));
    assert_eq!(selector.current_selection(), Rect::new(0.0, 0.0, 150.0, 150.0));
}

#[test]
fn corner_drag_across_the_anchor_flips_sides() {
    let mut selector = selector();
    selector.on_pointer_down(Point::new(150.0, 150.0));
    assert!(selector.on_pointer_move(Point::new(10.0, 200.0)));
    assert_eq!(selector.current_selection(), Rect::new(10.0, 50.0, 40.0, 150.0));
}

#[test]
fn a_new_drag_reclassifies_against_the_latest_selection() {
    let mut selector = selector();

    selector.on_pointer_down(Point::new(150.0, 150.0));
    selector.on_pointer_move(Point::new(290.0, 290.0));
    selector.on_pointer_up(Point::new(290.0, 290.0));
    assert_eq!(selector.current_selection(), Rect::new(50.0, 50.0, 240.0, 240.0));

    // (150, 150) used to be a corner; now it sits in the middle third.
    selector.on_pointer_down(Point::new(150.0, 150.0));
    assert_eq!(selector.touch_mode(), TouchMode::Move);
    assert!(selector.on_pointer_move(Point::new(120.0, 120.0)));
    assert_eq!(selector.current_selection(), Rect::new(0.0, 0.0, 240.0, 240.0));
}

#[test]
fn pinch_and_drag_streams_interleave() {
    let commits = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&commits);
    let mut selector = selector();
    selector.set_commit_listener(move |_| *counter.borrow_mut() += 1);

    selector.on_pointer_down(Point::new(100.0, 100.0));
    selector.on_pinch(PinchPhase::Began, 1.0);
    selector.on_pinch(PinchPhase::Changed, 0.5);
    assert_eq!(selector.current_selection(), Rect::new(75.0, 75.0, 50.0, 50.0));

    // The drag keeps its frozen Move mode and uses the new size.
    selector.on_pointer_move(Point::new(200.0, 200.0));
    assert_eq!(selector.current_selection(), Rect::new(175.0, 175.0, 50.0, 50.0));

    selector.on_pinch(PinchPhase::Cancelled, 0.5);
    selector.on_pointer_up(Point::new(200.0, 200.0));
    assert_eq!(*commits.borrow(), 2);
}
