//! Container, pair and nesting roundtrip matrix.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

use data_stream::{Decode, Encode, Error, Stream, Tag};
use proptest::prelude::*;

fn roundtrip<T: Encode + Decode>(value: &T) -> T {
    let mut ds = Stream::new();
    ds.write(value);
    let out = ds.read::<T>().unwrap();
    assert!(ds.is_exhausted());
    out
}

fn encoded_len<T: Encode + ?Sized>(value: &T) -> usize {
    let mut ds = Stream::new();
    ds.write(value);
    ds.size()
}

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

#[test]
fn vector_of_primitives() {
    let value = vec![1i32, -2, i32::MAX, i32::MIN];
    assert_eq!(roundtrip(&value), value);
    assert_eq!(encoded_len(&value), 1 + 4 + 4 * 5);
}

#[test]
fn empty_containers() {
    assert_eq!(roundtrip(&Vec::<i32>::new()), Vec::<i32>::new());
    assert_eq!(roundtrip(&BTreeMap::<String, i32>::new()).len(), 0);
    assert_eq!(roundtrip(&BTreeSet::<i64>::new()).len(), 0);
    assert_eq!(encoded_len(&Vec::<String>::new()), 5);
}

#[test]
fn list_of_strings() {
    let value: LinkedList<String> = ["a", "", "longer string"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(roundtrip(&value), value);

    let deque: VecDeque<String> = value.iter().cloned().collect();
    assert_eq!(roundtrip(&deque), deque);
}

#[test]
fn vector_of_lists() {
    let value: Vec<LinkedList<f64>> = vec![
        [1.5, 2.5].into_iter().collect(),
        LinkedList::new(),
        [f64::MAX].into_iter().collect(),
    ];
    assert_eq!(roundtrip(&value), value);

    let mut ds = Stream::new();
    ds.write(&value);
    assert_eq!(ds.as_bytes()[0], Tag::Vector.as_byte());
    assert_eq!(ds.as_bytes()[5], Tag::List.as_byte());
}

#[test]
fn vector_of_bytes_uses_char_elements() {
    let value = b"abc".to_vec();
    assert_eq!(encoded_len(&value), 1 + 4 + 3 * 2);
    assert_eq!(roundtrip(&value), value);
}

// ---------------------------------------------------------------------------
// Maps and sets
// ---------------------------------------------------------------------------

#[test]
fn map_of_string_to_int() {
    let value: BTreeMap<String, i32> = [("one", 1), ("two", 2), ("three", 3)]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v))
        .collect();
    assert_eq!(roundtrip(&value), value);

    let hashed: HashMap<String, i32> = value.clone().into_iter().collect();
    assert_eq!(roundtrip(&hashed), hashed);
}

#[test]
fn map_written_in_key_order() {
    let value: HashMap<i32, bool> = [(3, true), (1, false), (2, true)].into_iter().collect();
    let mut ds = Stream::new();
    ds.write(&value);

    ds.read_tag(Tag::Map).unwrap();
    assert_eq!(ds.read_len(), Ok(3));
    let mut keys = Vec::new();
    for _ in 0..3 {
        keys.push(ds.read::<i32>().unwrap());
        ds.read::<bool>().unwrap();
    }
    assert_eq!(keys, vec![1, 2, 3]);
}

#[test]
fn set_of_ints() {
    let value: BTreeSet<i32> = [5, -3, 12, 0].into_iter().collect();
    assert_eq!(roundtrip(&value), value);

    let hashed: HashSet<i64> = [9, 8, 7].into_iter().collect();
    assert_eq!(roundtrip(&hashed), hashed);
}

#[test]
fn nested_map_of_vectors() {
    let mut value: BTreeMap<String, Vec<BTreeSet<i32>>> = BTreeMap::new();
    value.insert("x".into(), vec![[1, 2].into_iter().collect(), BTreeSet::new()]);
    value.insert("y".into(), Vec::new());
    assert_eq!(roundtrip(&value), value);
}

#[test]
fn map_read_into_merges() {
    let mut ds = Stream::new();
    let incoming: BTreeMap<i32, i32> = [(1, 10), (2, 20)].into_iter().collect();
    ds.write(&incoming);

    let mut existing: BTreeMap<i32, i32> = [(2, 99), (3, 30)].into_iter().collect();
    ds.read_into(&mut existing).unwrap();
    let expected: BTreeMap<i32, i32> = [(1, 10), (2, 99), (3, 30)].into_iter().collect();
    assert_eq!(existing, expected);
}

#[test]
fn set_wrong_element_type_partial() {
    let mut ds = Stream::new();
    ds.write_tag(Tag::Set);
    ds.write_len(2);
    ds.write(&1i32);
    ds.write(&1i64);

    let mut out: BTreeSet<i32> = BTreeSet::new();
    let err = ds.read_into(&mut out).unwrap_err();
    assert!(matches!(
        err,
        Error::TagMismatch {
            expected: Tag::Int32,
            ..
        }
    ));
    assert_eq!(out, BTreeSet::from([1]));
}

// ---------------------------------------------------------------------------
// Pairs and tuples
// ---------------------------------------------------------------------------

#[test]
fn pair_roundtrip() {
    let value = (String::from("key"), 7i64);
    assert_eq!(roundtrip(&value), value);
    assert_eq!(encoded_len(&value), (1 + 4 + 3) + 9);
}

#[test]
fn vector_of_pairs() {
    let value = vec![(1i32, b'a'), (2, b'b')];
    assert_eq!(roundtrip(&value), value);
    assert_eq!(encoded_len(&value), 1 + 4 + 2 * (5 + 2));
}

#[test]
fn pair_needs_both_ends_to_agree() {
    let mut ds = Stream::new();
    ds.write(&(1i32, 2i32));
    assert_eq!(ds.read::<i32>(), Ok(1));
    assert_eq!(ds.read::<i32>(), Ok(2));
}

#[test]
fn six_tuple_roundtrip() {
    let value = (true, b'q', 3i32, 4i64, 5.5f32, String::from("six"));
    assert_eq!(roundtrip(&value), value);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_string_roundtrip_and_size(s in ".*") {
        let mut ds = Stream::new();
        ds.write(&s);
        prop_assert_eq!(ds.size(), 1 + 4 + s.len());
        prop_assert_eq!(ds.read::<String>(), Ok(s));
    }

    #[test]
    fn prop_map_roundtrip(value in proptest::collection::btree_map(".{0,8}", any::<i32>(), 0..16)) {
        let mut ds = Stream::new();
        ds.write(&value);
        prop_assert_eq!(ds.read::<BTreeMap<String, i32>>(), Ok(value));
    }

    #[test]
    fn prop_nested_vectors(value in proptest::collection::vec(proptest::collection::vec(any::<i64>(), 0..8), 0..8)) {
        let expected: usize = 5 + value.iter().map(|inner| 5 + 9 * inner.len()).sum::<usize>();
        let mut ds = Stream::new();
        ds.write(&value);
        prop_assert_eq!(ds.size(), expected);
        prop_assert_eq!(ds.read::<Vec<Vec<i64>>>(), Ok(value));
    }

    #[test]
    fn prop_sequence_size_is_sum(a in any::<bool>(), b in any::<i32>(), c in any::<f64>(), d in ".{0,16}") {
        let mut ds = Stream::new();
        ds.push(&a).push(&b).push(&c).push(&d);
        prop_assert_eq!(ds.size(), 2 + 5 + 9 + (5 + d.len()));
        prop_assert_eq!(ds.read::<bool>(), Ok(a));
        prop_assert_eq!(ds.read::<i32>(), Ok(b));
        prop_assert_eq!(ds.read::<f64>().map(f64::to_bits), Ok(c.to_bits()));
        prop_assert_eq!(ds.read::<String>(), Ok(d));
    }
}
