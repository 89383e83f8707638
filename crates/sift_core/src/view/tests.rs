#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use pretty_assertions::assert_eq;

// === Construction ===

#[test]
fn new_covers_whole_slice() {
    let data = [1, 2, 3];
    let view = View::new(&data);
    assert_eq!(view.size(), 3);
    assert_eq!(view.ssize(), 3);
    assert!(!view.is_empty());
}

#[test]
fn from_bounds_addresses_range() {
    let data = [10, 20, 30, 40];
    let view = View::from_bounds(&data, 1, 3);
    assert_eq!(view, [20, 30]);
}

#[test]
fn from_bounds_empty_at_end() {
    let data = [10, 20];
    let view = View::from_bounds(&data, 2, 2);
    assert!(view.is_empty());
}

#[test]
#[should_panic(expected = "exceeds end")]
fn from_bounds_rejects_inverted_pair() {
    let data = [1, 2, 3];
    let _ = View::from_bounds(&data, 2, 1);
}

#[test]
#[should_panic(expected = "exceeds storage length")]
fn from_bounds_rejects_end_past_storage() {
    let data = [1, 2, 3];
    let _ = View::from_bounds(&data, 0, 4);
}

#[test]
fn from_str_views_bytes() {
    let view = View::from("héllo");
    assert_eq!(view.size(), 6);
    assert_eq!(view.to_str().unwrap(), "héllo");
}

#[test]
fn default_is_empty() {
    let view: View<'_, u16> = View::default();
    assert!(view.is_empty());
}

// === Indexing ===

#[test]
fn index_in_bounds() {
    let data = [7u8, 8, 9];
    let view = View::new(&data);
    assert_eq!(view[0], 7);
    assert_eq!(view[2], 9);
    assert_eq!(view.get(3), None);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn index_out_of_bounds_panics() {
    let data = [7u8, 8, 9];
    let view = View::new(&data);
    let _ = view[3];
}

// === first / last ===

#[test]
fn first_and_last() {
    let data = [1, 2, 3, 4, 5];
    let view = View::new(&data);
    assert_eq!(view.first(2), [1, 2]);
    assert_eq!(view.last(2), [4, 5]);
    assert_eq!(view.first(5), data);
    assert!(view.last(0).is_empty());
}

#[test]
fn checked_first_last_reject_oversize() {
    let data = [1, 2];
    let view = View::new(&data);
    assert!(view.checked_first(3).is_none());
    assert!(view.checked_last(3).is_none());
}

#[test]
#[should_panic(expected = "first(3)")]
fn first_oversize_panics() {
    let data = [1, 2];
    let _ = View::new(&data).first(3);
}

// === subspan ===

#[test]
fn subspan_tail() {
    let data = [1, 2, 3];
    let view = View::new(&data);
    assert_eq!(view.subspan(1), [2, 3]);
    assert!(view.subspan(3).is_empty());
    assert!(view.checked_subspan(4).is_none());
}

#[test]
fn subspan_counted_strictly_inside() {
    let data = [1, 2, 3, 4];
    let view = View::new(&data);
    assert_eq!(view.subspan_n(1, 2), [2, 3]);
    assert_eq!(view.subspan_n(0, 3), [1, 2, 3]);
}

#[test]
fn subspan_counted_reaching_end_is_misuse() {
    let data = [1, 2, 3, 4];
    let view = View::new(&data);
    assert!(view.checked_subspan_n(1, 3).is_none());
    assert!(view.checked_subspan_n(4, 0).is_none());
    assert!(view.checked_subspan_n(usize::MAX, 2).is_none());
}

#[test]
#[should_panic(expected = "subspan(2, 2)")]
fn subspan_counted_panics_at_end() {
    let data = [1, 2, 3, 4];
    let _ = View::new(&data).subspan_n(2, 2);
}

// === Copy semantics and conversions ===

#[test]
fn view_is_copy_for_non_copy_elements() {
    let data = vec![String::from("a"), String::from("b")];
    let view = View::from(&data);
    let copy = view;
    assert_eq!(view.size(), copy.size());
    assert_eq!(copy[1], "b");
}

#[test]
fn mutable_view_converts_to_shared() {
    let mut data = [1, 2, 3];
    let mut view_mut = ViewMut::new(&mut data);
    view_mut.as_mut_slice()[0] = 9;
    assert_eq!(view_mut.as_const(), [9, 2, 3]);
    let shared: View<'_, i32> = view_mut.into();
    assert_eq!(shared.first(1), [9]);
}

mod proptest_bounds {
    use super::super::View;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn counted_subspan_succeeds_iff_strictly_inside(
            len in 0usize..64,
            off in 0usize..80,
            count in 0usize..80,
        ) {
            let data = vec![0u8; len];
            let view = View::new(&data);
            let result = view.checked_subspan_n(off, count);
            if off + count < len {
                let sub = result.unwrap();
                prop_assert_eq!(sub.size(), count);
            } else {
                prop_assert!(result.is_none());
            }
        }

        #[test]
        fn tail_subspan_succeeds_iff_within(len in 0usize..64, off in 0usize..80) {
            let data = vec![0u8; len];
            let view = View::new(&data);
            match view.checked_subspan(off) {
                Some(sub) => prop_assert_eq!(sub.size(), len - off),
                None => prop_assert!(off > len),
            }
        }
    }
}
