use super::*;
use crate::strategy::Bytewise;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::vec::Vec;

const RNG_SEED: u64 = 0x5EED_1157_C0DE_F00D;

fn word(value: u32) -> [u8; 4] {
    value.to_ne_bytes()
}

fn words<I: Index, S: CopyStrategy>(list: &RawList<I, S>) -> Vec<u32> {
    list.iter()
        .map(|bytes| u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        .collect()
}

fn list_of<S: CopyStrategy>(capacity: usize, values: &[u32]) -> RawList<usize, S> {
    let mut list = RawList::create(4, capacity).unwrap();
    for &value in values {
        list.push_back(&word(value)).unwrap();
    }
    list
}

/// `[0, 1, 2, 3, 4]` in an 8-slot buffer, split across the end:
///
/// ```text
///  slot   0 1 2 3 4 5 6 7
///        [2 3 4 . . . 0 1]
///               H     T
/// ```
fn wrapped<S: CopyStrategy>() -> RawList<usize, S> {
    let mut list = list_of(8, &[2, 3, 4]);
    list.push_front(&word(1)).unwrap();
    list.push_front(&word(0)).unwrap();
    assert!(!list.as_slices().1.is_empty());
    assert_eq!(list.capacity(), 8);
    list
}

#[test]
fn any_scenario() {
    macro_rules! test {
        ($strategy:ident) => ({
            let mut list: RawList<usize, $strategy> = RawList::create(4, 4).unwrap();
            list.push_back(&word(1)).unwrap();
            list.push_back(&word(2)).unwrap();
            list.push_back(&word(3)).unwrap();
            assert_eq!(list.len(), 3);
            assert_eq!(list.capacity(), 4);
            assert_eq!(list.at(0), Some(&word(1)[..]));
            assert_eq!(list.at(1), Some(&word(2)[..]));
            assert_eq!(list.at(2), Some(&word(3)[..]));

            // 3 >= capacity - 1: grows before writing
            list.push_back(&word(4)).unwrap();
            assert!(list.capacity() >= 5);
            assert_eq!(list.len(), 4);
            assert_eq!(words(&list), vec![1, 2, 3, 4]);

            assert_eq!(list.pop_front(), Some(&word(1)[..]));
            assert_eq!(list.len(), 3);
            assert_eq!(words(&list), vec![2, 3, 4]);

            let mut subset = list.create_subset(1, 3).unwrap();
            assert_eq!(subset.len(), 2);
            assert_eq!(words(&subset), vec![3, 4]);

            subset.at_mut(0).unwrap().copy_from_slice(&word(7));
            subset.push_back(&word(9)).unwrap();
            assert_eq!(words(&subset), vec![7, 4, 9]);
            assert_eq!(words(&list), vec![2, 3, 4]);
        })
    }

    test!(Bulk);
    test!(Bytewise);
}

fn fifo<S: CopyStrategy>() {
    let mut list: RawList<usize, S> = RawList::create(4, 2).unwrap();
    for i in 0..100 {
        list.push_back(&word(i)).unwrap();
    }
    for i in 0..100 {
        assert_eq!(list.pop_front(), Some(&word(i)[..]));
    }
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
}

#[test]
fn any_fifo() {
    fifo::<Bulk>();
    fifo::<Bytewise>();
}

fn fifo_reversely<S: CopyStrategy>() {
    let mut list: RawList<usize, S> = RawList::create(4, 2).unwrap();
    for i in 0..100 {
        list.push_front(&word(i)).unwrap();
    }
    for i in 0..100 {
        assert_eq!(list.pop_back(), Some(&word(i)[..]));
    }
    assert_eq!(list.pop_back(), None);
}

#[test]
fn any_fifo_reversely() {
    fifo_reversely::<Bulk>();
    fifo_reversely::<Bytewise>();
}

#[test]
fn count_arithmetic() {
    let mut list: RawList = RawList::create(4, 3).unwrap();
    for i in 0..40 {
        if i % 2 == 0 {
            list.push_back(&word(i)).unwrap();
        } else {
            list.push_front(&word(i)).unwrap();
        }
    }
    for popped in 1..=25 {
        if popped % 3 == 0 {
            list.pop_back().unwrap();
        } else {
            list.pop_front().unwrap();
        }
        assert_eq!(list.len(), 40 - popped);
        assert_eq!(list.byte_count(), (40 - popped) * 4);
    }
}

#[test]
fn pop_and_peek_on_empty() {
    let mut list: RawList = RawList::create(4, 4).unwrap();
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.pop_back(), None);
    assert_eq!(list.peek_front(), None);
    assert_eq!(list.peek_back(), None);
    assert_eq!(list.at(0), None);
    assert_eq!(list.len(), 0);
}

#[test]
fn peek_does_not_move() {
    let list: RawList = wrapped();
    assert_eq!(list.peek_front(), Some(&word(0)[..]));
    assert_eq!(list.peek_back(), Some(&word(4)[..]));
    assert_eq!(list.len(), 5);
}

#[test]
fn single_element_round_trip() {
    let mut list: RawList = RawList::create(4, 2).unwrap();
    list.push_front(&word(5)).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.pop_back(), Some(&word(5)[..]));
    assert!(list.is_empty());
}

#[test]
fn at_is_half_open() {
    let list: RawList = wrapped();
    assert_eq!(list.at(4), Some(&word(4)[..]));
    assert_eq!(list.at(5), None);
    assert_eq!(list.at(usize::max_value()), None);
}

fn growth_from_wrapped<S: CopyStrategy>() {
    let mut list: RawList<usize, S> = list_of(4, &[1]);
    list.push_front(&word(0)).unwrap();
    list.push_back(&word(2)).unwrap();
    assert_eq!(list.capacity(), 4);
    assert!(!list.as_slices().1.is_empty());

    list.push_back(&word(3)).unwrap();
    assert_eq!(list.capacity(), 6);
    assert_eq!(words(&list), vec![0, 1, 2, 3]);
    assert!(list.as_slices().1.is_empty());
}

#[test]
fn any_growth_from_wrapped() {
    growth_from_wrapped::<Bulk>();
    growth_from_wrapped::<Bytewise>();
}

#[test]
fn growth_from_tiny_capacity() {
    let mut list: RawList = RawList::create(4, 1).unwrap();
    list.push_front(&word(1)).unwrap();
    assert!(list.capacity() >= 2);
    list.push_front(&word(0)).unwrap();
    assert_eq!(words(&list), vec![0, 1]);
}

#[test]
fn realloc_clamps_to_len() {
    let mut list: RawList = wrapped();
    list.realloc(2).unwrap();
    assert_eq!(list.capacity(), 6);
    assert_eq!(words(&list), vec![0, 1, 2, 3, 4]);
    assert!(list.as_slices().1.is_empty());

    list.realloc(32).unwrap();
    assert_eq!(list.capacity(), 32);
    assert_eq!(words(&list), vec![0, 1, 2, 3, 4]);
}

fn reorder_keeps_contents<S: CopyStrategy>(mut list: RawList<usize, S>) {
    let before = words(&list);
    let bytes = list.byte_count();
    list.reorder().unwrap();
    assert_eq!(words(&list), before);
    assert_eq!(list.byte_count(), bytes);
    assert_eq!(list.as_slices().0.len(), bytes);
    assert!(list.as_slices().1.is_empty());

    list.reorder().unwrap();
    assert_eq!(words(&list), before);
    assert_eq!(list.as_slices().0.len(), bytes);
}

fn reorder_cases<S: CopyStrategy>() {
    // split across the end of the buffer
    reorder_keeps_contents(wrapped::<S>());

    // ends exactly at the last slot
    let mut list: RawList<usize, S> = list_of(5, &[1, 2, 3]);
    list.pop_front();
    list.pop_front();
    list.push_back(&word(4)).unwrap();
    list.push_back(&word(5)).unwrap();
    assert!(list.as_slices().1.is_empty());
    reorder_keeps_contents(list);

    // contiguous, enough free room in front to copy in place
    let mut list: RawList<usize, S> = list_of(8, &[1, 2, 3, 4, 5, 6]);
    for _ in 0..4 {
        list.pop_front();
    }
    reorder_keeps_contents(list);

    // contiguous, overlapping its destination
    let mut list: RawList<usize, S> = list_of(8, &[1, 2, 3, 4, 5]);
    list.pop_front();
    reorder_keeps_contents(list);

    // already at the first slot
    reorder_keeps_contents(list_of::<S>(8, &[1, 2, 3]));
}

#[test]
fn any_reorder() {
    reorder_cases::<Bulk>();
    reorder_cases::<Bytewise>();
}

#[test]
fn reorder_empty_is_noop() {
    let mut list: RawList = list_of(4, &[1]);
    list.pop_front();
    list.reorder().unwrap();
    assert!(list.is_empty());
    list.push_back(&word(2)).unwrap();
    assert_eq!(words(&list), vec![2]);
}

fn append_grows<S: CopyStrategy>() {
    let mut list: RawList<usize, S> = wrapped();
    let other: RawList<usize, S> = list_of(4, &[10, 11, 12, 13]);

    list.append(&other).unwrap();
    assert_eq!(list.len(), 9);
    assert_eq!(list.capacity(), 10);
    assert_eq!(words(&list), vec![0, 1, 2, 3, 4, 10, 11, 12, 13]);
    assert!(list.as_slices().1.is_empty());
    assert_eq!(words(&other), vec![10, 11, 12, 13]);
}

fn append_reorders<S: CopyStrategy>() {
    let mut list: RawList<usize, S> = list_of(16, &[1]);
    list.push_front(&word(0)).unwrap();
    let mut other: RawList<usize, S> = list_of(4, &[11]);
    other.push_front(&word(10)).unwrap();
    assert!(!other.as_slices().1.is_empty());

    list.append(&other).unwrap();
    assert_eq!(list.capacity(), 16);
    assert_eq!(words(&list), vec![0, 1, 10, 11]);
    assert_eq!(list.as_slices().0.len(), 16);
}

#[test]
fn any_append() {
    append_grows::<Bulk>();
    append_grows::<Bytewise>();
    append_reorders::<Bulk>();
    append_reorders::<Bytewise>();
}

#[test]
fn append_keeps_prefix_and_copies_suffix() {
    let mut list: RawList = wrapped();
    let other: RawList = wrapped();
    let d = list.len();

    list.append(&other).unwrap();
    assert_eq!(list.len(), d + other.len());
    for i in 0..d {
        assert_eq!(list.at(i), Some(&word(i as u32)[..]));
    }
    for j in 0..other.len() {
        assert_eq!(list.at(d + j), other.at(j));
    }
}

#[test]
fn append_across_widths_and_strategies() {
    let mut list: RawList<u8, Bytewise> = RawList::create(4, 3).unwrap();
    list.push_back(&word(1)).unwrap();
    let other: RawList = wrapped();

    list.append(&other).unwrap();
    assert_eq!(words(&list), vec![1, 0, 1, 2, 3, 4]);
}

#[test]
fn append_empty_source() {
    let mut list: RawList = wrapped();
    let other: RawList = RawList::create(4, 4).unwrap();
    list.append(&other).unwrap();
    assert_eq!(words(&list), vec![0, 1, 2, 3, 4]);
}

#[test]
fn append_mismatch_leaves_list_alone() {
    let mut list: RawList = wrapped();
    let before = list.clone();
    let other: RawList = RawList::create(8, 4).unwrap();

    assert_eq!(list.append(&other), Err(Error::ItemSizeMismatch { expected: 4, found: 8 }));
    assert_eq!(list, before);
    assert_eq!(list.as_slices(), before.as_slices());
    assert_eq!(list.capacity(), 8);
}

fn remove_ordered_across_seam<S: CopyStrategy>() {
    let mut list: RawList<usize, S> = wrapped();
    list.remove_ordered(1).unwrap();
    assert_eq!(words(&list), vec![0, 2, 3, 4]);
    list.remove_ordered(3).unwrap();
    assert_eq!(words(&list), vec![0, 2, 3]);
    list.remove_ordered(0).unwrap();
    assert_eq!(words(&list), vec![2, 3]);
    assert_eq!(list.len(), 2);
}

#[test]
fn any_remove_ordered() {
    remove_ordered_across_seam::<Bulk>();
    remove_ordered_across_seam::<Bytewise>();
}

#[test]
fn remove_unordered_moves_back_element() {
    let mut list: RawList = wrapped();
    list.remove_unordered(1).unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(words(&list), vec![0, 4, 2, 3]);

    // removing the back element itself
    list.remove_unordered(3).unwrap();
    assert_eq!(words(&list), vec![0, 4, 2]);

    let mut rest = words(&list);
    rest.sort();
    assert_eq!(rest, vec![0, 2, 4]);
}

#[test]
fn remove_out_of_bounds() {
    let mut list: RawList = wrapped();
    assert_eq!(list.remove_ordered(5), Err(Error::OutOfBounds { index: 5, len: 5 }));
    assert_eq!(list.remove_unordered(9), Err(Error::OutOfBounds { index: 9, len: 5 }));
    assert_eq!(words(&list), vec![0, 1, 2, 3, 4]);

    let mut empty: RawList = RawList::create(4, 4).unwrap();
    assert!(empty.remove_ordered(0).is_err());
    assert!(empty.remove_unordered(0).is_err());
}

#[test]
fn set_fills_contiguously() {
    let mut list: RawList = wrapped();
    list.set(&word(7), 3).unwrap();
    assert_eq!(list.capacity(), 8);
    assert_eq!(words(&list), vec![7, 7, 7]);
    assert_eq!(list.as_slices().0.len(), 12);

    list.set(&word(9), 8).unwrap();
    assert_eq!(list.len(), 8);
    assert_eq!(list.capacity(), 12);
    assert!(words(&list).iter().all(|&w| w == 9));

    list.set(&word(1), 0).unwrap();
    assert!(list.is_empty());
    list.push_back(&word(2)).unwrap();
    assert_eq!(words(&list), vec![2]);
}

#[test]
fn set_rejects_wrong_template() {
    let mut list: RawList = wrapped();
    assert_eq!(list.set(&[1, 2], 3), Err(Error::ItemSizeMismatch { expected: 4, found: 2 }));
    assert_eq!(words(&list), vec![0, 1, 2, 3, 4]);
}

#[test]
fn push_rejects_wrong_item() {
    let mut list: RawList = wrapped();
    assert_eq!(list.push_back(&[1, 2, 3]), Err(Error::ItemSizeMismatch { expected: 4, found: 3 }));
    assert_eq!(list.push_front(&[]), Err(Error::ItemSizeMismatch { expected: 4, found: 0 }));
    assert_eq!(list.len(), 5);
}

#[test]
fn contains_scans_front_to_back() {
    let mut list: RawList = wrapped();
    list.push_back(&word(2)).unwrap();
    assert_eq!(list.contains(&word(0)), Some(0));
    assert_eq!(list.contains(&word(2)), Some(2));
    assert_eq!(list.contains(&word(4)), Some(4));
    assert_eq!(list.contains(&word(8)), None);
    assert_eq!(list.contains(&[0, 0]), None);
}

#[test]
fn flatten_wrapped() {
    let list: RawList = wrapped();
    let flat = list.create_array().unwrap();
    let expected: Vec<u8> = (0..5u32).flat_map(|w| word(w).to_vec()).collect();
    assert_eq!(flat, expected);

    let mut dest = vec![0xFFu8; 24];
    assert_eq!(list.copy_to_array(&mut dest), Ok(20));
    assert_eq!(&dest[..20], &expected[..]);
    assert_eq!(&dest[20..], &[0xFFu8; 4]);

    let mut short = vec![0u8; 19];
    assert_eq!(list.copy_to_array(&mut short),
               Err(Error::BufferTooSmall { needed: 20, found: 19 }));
    assert!(short.iter().all(|&b| b == 0));
}

#[test]
fn flatten_empty() {
    let list: RawList = RawList::create(4, 4).unwrap();
    assert!(list.create_array().unwrap().is_empty());
    assert_eq!(list.copy_to_array(&mut [0u8; 0]), Ok(0));
}

fn subset_across_seam<S: CopyStrategy>() {
    let list: RawList<usize, S> = wrapped();
    let subset = list.create_subset(1, 4).unwrap();
    assert_eq!(words(&subset), vec![1, 2, 3]);
    assert_eq!(subset.capacity(), 4);

    for i in 0..subset.len() {
        assert_eq!(subset.at(i), list.at(1 + i));
    }

    let whole = list.subset(..).unwrap();
    assert_eq!(whole, list);
}

#[test]
fn any_subset() {
    subset_across_seam::<Bulk>();
    subset_across_seam::<Bytewise>();
}

#[test]
fn subset_rejects_bad_ranges() {
    let list: RawList = wrapped();
    assert_eq!(list.create_subset(2, 1).err(),
               Some(Error::InvalidRange { start: 2, end: 1, len: 5 }));
    assert!(list.create_subset(0, 0).is_err());
    assert!(list.create_subset(3, 6).is_err());
    assert!(list.create_subset(5, 6).is_err());
    assert!(list.subset(4..9).is_err());

    let empty: RawList = RawList::create(4, 4).unwrap();
    assert!(empty.subset(..).is_err());
}

#[test]
fn subset_is_independent() {
    let mut list: RawList = wrapped();
    let mut subset = list.create_subset(0, 2).unwrap();

    subset.pop_front();
    subset.push_back(&word(42)).unwrap();
    subset.at_mut(0).unwrap().copy_from_slice(&word(41));
    assert_eq!(words(&subset), vec![41, 42]);
    assert_eq!(words(&list), vec![0, 1, 2, 3, 4]);

    list.pop_back();
    assert_eq!(words(&subset), vec![41, 42]);
}

#[test]
fn destroy_twice() {
    let mut list: RawList = wrapped();
    list.destroy();
    list.destroy();
    assert_eq!(list.capacity(), 0);
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.pop_back(), None);
    assert_eq!(list.iter().count(), 0);
    assert_eq!(list.contains(&word(0)), None);
    assert!(list.as_slices().0.is_empty());

    list.push_back(&word(3)).unwrap();
    assert_eq!(words(&list), vec![3]);
}

#[test]
fn create_rejects_bad_arguments() {
    let zero_cap: Result<RawList, Error> = RawList::create(4, 0);
    assert_eq!(zero_cap.err(), Some(Error::ZeroCapacity));

    let zero_size: Result<RawList, Error> = RawList::create(0, 4);
    assert_eq!(zero_size.err(), Some(Error::ZeroItemSize));

    let overflow: Result<RawList, Error> = RawList::create(usize::max_value() / 2, 4);
    assert_eq!(overflow.err(),
               Some(Error::CapacityOverflow { requested: 4, max: usize::max_value() }));

    let narrow: Result<RawList<u8>, Error> = RawList::create(4, 256);
    assert_eq!(narrow.err(), Some(Error::CapacityOverflow { requested: 256, max: 255 }));
}

#[test]
fn create_reports_allocation_failure() {
    let bytes = usize::max_value() / 2;
    let huge: Result<RawList, Error> = RawList::create(1, bytes);
    assert_eq!(huge.err(), Some(Error::AllocFailed { bytes }));
}

#[test]
fn create_zero_fills() {
    let list: RawList = RawList::create(4, 4).unwrap();
    assert!(list.data.iter().all(|&b| b == 0));
    assert_eq!(list.data.len(), 16);
}

#[test]
fn narrow_index_tops_out() {
    let mut list: RawList<u8> = RawList::create(1, 200).unwrap();
    for i in 0..254 {
        list.push_back(&[i as u8]).unwrap();
    }
    assert_eq!(list.capacity(), 255);
    assert_eq!(list.push_back(&[0xEE]),
               Err(Error::CapacityOverflow { requested: 256, max: 255 }));
    assert_eq!(list.push_front(&[0xEE]),
               Err(Error::CapacityOverflow { requested: 256, max: 255 }));
    assert_eq!(list.len(), 254);
    assert_eq!(list.peek_back(), Some(&[253][..]));
    assert_eq!(list.realloc(300), Err(Error::CapacityOverflow { requested: 300, max: 255 }));
    assert_eq!(list.len(), 254);
}

#[test]
fn iter_both_ends() {
    let list: RawList = wrapped();
    let mut iter = list.iter();
    assert_eq!(iter.size_hint(), (5, Some(5)));
    assert_eq!(iter.next(), Some(&word(0)[..]));
    assert_eq!(iter.next_back(), Some(&word(4)[..]));
    assert_eq!(iter.len(), 3);

    let rest: Vec<_> = iter.collect();
    assert_eq!(rest, vec![&word(1)[..], &word(2)[..], &word(3)[..]]);

    let backwards: Vec<_> = list.iter().rev().collect();
    assert_eq!(backwards[0], &word(4)[..]);
    assert_eq!(backwards.len(), 5);
}

#[test]
fn equality_ignores_layout() {
    let list: RawList = wrapped();
    let flat: RawList = list_of(32, &[0, 1, 2, 3, 4]);
    assert_eq!(list, flat);
    assert_ne!(list.as_slices(), flat.as_slices());

    let shorter: RawList = list_of(32, &[0, 1, 2, 3]);
    assert_ne!(list, shorter);
}

#[test]
fn clone_is_deep() {
    let list: RawList = wrapped();
    let mut copy = list.clone();
    copy.at_mut(0).unwrap().copy_from_slice(&word(99));
    assert_eq!(words(&list), vec![0, 1, 2, 3, 4]);
    assert_eq!(words(&copy), vec![99, 1, 2, 3, 4]);
}

#[test]
fn debug_lists_elements() {
    let list: RawList = list_of(4, &[]);
    assert_eq!(format!("{:?}", list), "[]");

    let mut bytes: RawList = RawList::create(2, 4).unwrap();
    bytes.push_back(&[1, 2]).unwrap();
    assert_eq!(format!("{:?}", bytes), "[[1, 2]]");
}

fn against_model<I: Index, S: CopyStrategy>(seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut list: RawList<I, S> = RawList::create(4, 2).unwrap();
    let mut model: VecDeque<u32> = VecDeque::new();

    for step in 0..4000u32 {
        match rng.gen_range(0..10) {
            0 | 1 | 2 => {
                list.push_back(&word(step)).unwrap();
                model.push_back(step);
            }
            3 | 4 => {
                list.push_front(&word(step)).unwrap();
                model.push_front(step);
            }
            5 => {
                assert_eq!(list.pop_front().map(|b| b.to_vec()),
                           model.pop_front().map(|w| word(w).to_vec()));
            }
            6 => {
                assert_eq!(list.pop_back().map(|b| b.to_vec()),
                           model.pop_back().map(|w| word(w).to_vec()));
            }
            7 if !model.is_empty() => {
                let index = rng.gen_range(0..model.len());
                list.remove_ordered(index).unwrap();
                model.remove(index);
            }
            8 if !model.is_empty() => {
                let index = rng.gen_range(0..model.len());
                list.remove_unordered(index).unwrap();
                model.swap_remove_back(index);
            }
            _ => {
                if rng.gen_bool(0.5) {
                    list.reorder().unwrap();
                } else {
                    let capacity = rng.gen_range(0..2 * model.len() + 2);
                    list.realloc(capacity).unwrap();
                }
            }
        }

        assert_eq!(list.len(), model.len());
        assert!(list.len() < list.capacity());
        if step % 97 == 0 {
            assert_eq!(words(&list), model.iter().cloned().collect::<Vec<_>>());
        }
    }
    assert_eq!(words(&list), model.into_iter().collect::<Vec<_>>());
}

#[test]
fn random_operations_match_vec_deque() {
    against_model::<usize, Bulk>(RNG_SEED);
    against_model::<usize, Bytewise>(RNG_SEED);
    against_model::<u16, Bulk>(RNG_SEED ^ 0xFFFF);
    against_model::<u32, Bytewise>(RNG_SEED.rotate_left(17));
}
