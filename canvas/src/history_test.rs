use super::*;
use image::{Rgba, RgbaImage};

/// A 1x1 snapshot whose red channel tags it for identification.
fn tagged(tag: u8) -> RasterSnapshot {
    RasterSnapshot::capture(&RgbaImage::from_pixel(1, 1, Rgba([tag, 0, 0, 255])))
}

fn tag_of(snap: &RasterSnapshot) -> u8 {
    snap.pixels().get_pixel(0, 0).0[0]
}

fn tags(stack: &HistoryStack) -> Vec<u8> {
    stack.entries.iter().map(tag_of).collect()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_holds_initial_only() {
    let stack = HistoryStack::new(tagged(0), 10);
    assert_eq!(stack.len(), 1);
    assert!(!stack.is_empty());
    assert_eq!(tag_of(stack.top()), 0);
}

#[test]
fn zero_capacity_is_clamped_to_one() {
    let mut stack = HistoryStack::new(tagged(0), 0);
    assert_eq!(stack.capacity(), 1);
    stack.push(tagged(1));
    assert_eq!(tags(&stack), vec![1]);
}

// =============================================================
// push
// =============================================================

#[test]
fn size_is_min_of_strokes_plus_one_and_capacity() {
    for strokes in 0u8..25 {
        let mut stack = HistoryStack::new(tagged(0), 10);
        for i in 0..strokes {
            stack.push(tagged(i + 1));
        }
        assert_eq!(stack.len(), (usize::from(strokes) + 1).min(10), "after {strokes} strokes");
        assert_eq!(tag_of(stack.top()), strokes);
    }
}

#[test]
fn push_evicts_oldest_first() {
    let mut stack = HistoryStack::new(tagged(0), 3);
    stack.push(tagged(1));
    stack.push(tagged(2));
    stack.push(tagged(3));
    assert_eq!(tags(&stack), vec![1, 2, 3]);
    stack.push(tagged(4));
    assert_eq!(tags(&stack), vec![2, 3, 4]);
}

// =============================================================
// undo
// =============================================================

#[test]
fn undo_at_floor_is_noop() {
    let mut stack = HistoryStack::new(tagged(7), 10);
    assert!(stack.undo().is_none());
    assert_eq!(stack.len(), 1);
    assert_eq!(tag_of(stack.top()), 7);
}

#[test]
fn undo_pops_one_and_returns_prior() {
    let mut stack = HistoryStack::new(tagged(0), 10);
    stack.push(tagged(1));
    stack.push(tagged(2));
    let restored = stack.undo().map(tag_of);
    assert_eq!(restored, Some(1));
    assert_eq!(stack.len(), 2);
    assert_eq!(tag_of(stack.top()), 1);
}

#[test]
fn repeated_undo_stops_at_oldest_retained() {
    let mut stack = HistoryStack::new(tagged(0), 3);
    for i in 1..=5 {
        stack.push(tagged(i));
    }
    assert!(stack.undo().is_some());
    assert!(stack.undo().is_some());
    assert!(stack.undo().is_none());
    // Entries 0..=2 were evicted; 3 is the floor now.
    assert_eq!(tags(&stack), vec![3]);
}

// =============================================================
// reset
// =============================================================

#[test]
fn reset_leaves_single_entry() {
    let mut stack = HistoryStack::new(tagged(0), 10);
    for i in 1..=6 {
        stack.push(tagged(i));
    }
    stack.reset(tagged(99));
    assert_eq!(tags(&stack), vec![99]);
    assert!(stack.undo().is_none());
}
