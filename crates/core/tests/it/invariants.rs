use area_selector_core::{
    AreaSelector, Constraints, GestureScript, InputEvent, PinchPhase, Point, Rect,
    SelectorConfig, Size,
};

const CONTAINER: Size = Size::new(300.0, 300.0);

fn assert_contained(rect: &Rect) {
    for corner in rect.corners() {
        assert!(
            (0.0..=CONTAINER.width).contains(&corner.x)
                && (0.0..=CONTAINER.height).contains(&corner.y),
            "{rect:?} leaves the container"
        );
    }
}

/// A deterministic zig-zag of pointer and pinch input that repeatedly
/// pushes past every edge.
fn stress_events() -> Vec<InputEvent> {
    let mut events = Vec::new();
    let starts = [
        (100.0, 100.0),
        (52.0, 52.0),
        (148.0, 52.0),
        (150.0, 150.0),
        (-20.0, 400.0),
    ];
    for (i, &(x, y)) in starts.iter().enumerate() {
        events.push(InputEvent::PointerDown { x, y });
        for step in 0..40 {
            let t = step as f64;
            let sign = if (step + i) % 2 == 0 { 1.0 } else { -1.0 };
            events.push(InputEvent::PointerMove {
                x: x + sign * t * 13.0,
                y: y - sign * t * 7.0,
            });
        }
        events.push(InputEvent::PointerUp { x, y });

        events.push(InputEvent::Pinch { phase: PinchPhase::Began, scale: 1.0 });
        for factor in [0.1, 0.7, 1.3, 4.0, 1.0, 25.0] {
            events.push(InputEvent::Pinch { phase: PinchPhase::Changed, scale: factor });
        }
        events.push(InputEvent::Pinch { phase: PinchPhase::Ended, scale: 1.1 });
    }
    events
}

#[test]
fn every_commit_stays_inside_the_container() {
    let script = GestureScript {
        container: Rect::from_origin_size(Point::ZERO, CONTAINER),
        selection: Rect::new(50.0, 50.0, 100.0, 100.0),
        events: stress_events(),
    };
    let commits = script.replay(SelectorConfig::default()).unwrap();
    assert!(!commits.is_empty());

    let constraints = Constraints::new(CONTAINER, Size::new(50.0, 50.0));
    for rect in &commits {
        assert_contained(rect);
        assert!(constraints.is_valid(rect), "{rect:?}");
    }
}

#[test]
fn rejected_input_never_changes_the_selection() {
    let mut selector = AreaSelector::configure(
        Rect::from_origin_size(Point::ZERO, CONTAINER),
        Rect::new(50.0, 50.0, 100.0, 100.0),
    )
    .unwrap();
    let before = selector.current_selection();

    selector.on_pointer_down(Point::new(150.0, 150.0));
    assert!(!selector.on_pointer_move(Point::new(f64::NAN, 10.0)));
    assert!(!selector.on_pointer_move(Point::new(400.0, 400.0)));
    assert!(!selector.on_pointer_move(Point::new(55.0, 55.0)));
    selector.on_pointer_up(Point::new(55.0, 55.0));
    assert!(!selector.on_pinch(PinchPhase::Changed, f64::NAN));

    assert_eq!(selector.current_selection(), before);
}

#[test]
fn oversize_check_tolerates_a_single_axis() {
    let constraints = Constraints::new(CONTAINER, Size::new(50.0, 50.0));
    let wide = Rect::new(0.0, 0.0, 320.0, 100.0);
    assert!(!constraints.is_oversize(&wide));
    assert!(constraints.is_out_of_bounds(&wide));
}

#[test]
fn undersize_check_tolerates_a_single_axis() {
    let constraints = Constraints::new(CONTAINER, Size::new(50.0, 50.0));
    let sliver = Rect::new(10.0, 10.0, 30.0, 80.0);
    assert!(!constraints.is_undersize(&sliver));
    assert!(constraints.is_valid(&sliver));
}
