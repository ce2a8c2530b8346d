use super::*;

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
    assert!(!InputState::default().is_drawing());
}

#[test]
fn drawing_state_reports_drawing() {
    let s = InputState::Drawing { last: Point::new(1.0, 2.0) };
    assert!(s.is_drawing());
}

#[test]
fn drawing_states_compare_by_last_point() {
    let a = InputState::Drawing { last: Point::new(1.0, 2.0) };
    let b = InputState::Drawing { last: Point::new(1.0, 2.0) };
    let c = InputState::Drawing { last: Point::new(3.0, 2.0) };
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn end_reasons_distinct() {
    assert_ne!(EndReason::PointerUp, EndReason::PointerLeave);
    assert_ne!(EndReason::PointerLeave, EndReason::TouchEnd);
}
