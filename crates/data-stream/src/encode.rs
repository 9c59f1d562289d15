//! Writing values into a [`Stream`].

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

use crate::{Serializable, Stream, Tag};

/// A value that can append its tagged encoding to a [`Stream`].
///
/// This is the compile-time extension path: any type implementing `Encode`
/// is accepted by [`Stream::write`], by container encodings and by the
/// insertion operator. Aggregates normally get it from
/// [`aggregate!`](crate::aggregate).
pub trait Encode {
    fn encode(&self, stream: &mut Stream);
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, stream: &mut Stream) {
        (**self).encode(stream);
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode(&self, stream: &mut Stream) {
        (**self).encode(stream);
    }
}

impl Encode for dyn Serializable + '_ {
    fn encode(&self, stream: &mut Stream) {
        self.serialize(stream);
    }
}

// ---------------------------------------------------------------- primitives

impl Encode for bool {
    fn encode(&self, stream: &mut Stream) {
        stream.write_bool(*self);
    }
}

/// A single-byte character.
impl Encode for u8 {
    fn encode(&self, stream: &mut Stream) {
        stream.write_char(*self);
    }
}

impl Encode for i8 {
    fn encode(&self, stream: &mut Stream) {
        stream.write_char(*self as u8);
    }
}

impl Encode for i32 {
    fn encode(&self, stream: &mut Stream) {
        stream.write_i32(*self);
    }
}

impl Encode for i64 {
    fn encode(&self, stream: &mut Stream) {
        stream.write_i64(*self);
    }
}

impl Encode for f32 {
    fn encode(&self, stream: &mut Stream) {
        stream.write_f32(*self);
    }
}

impl Encode for f64 {
    fn encode(&self, stream: &mut Stream) {
        stream.write_f64(*self);
    }
}

impl Encode for str {
    fn encode(&self, stream: &mut Stream) {
        stream.write_str(self);
    }
}

impl Encode for String {
    fn encode(&self, stream: &mut Stream) {
        stream.write_str(self);
    }
}

// ---------------------------------------------------------------- containers

fn encode_elements<'a, T, I>(stream: &mut Stream, tag: Tag, len: usize, items: I)
where
    T: Encode + 'a,
    I: IntoIterator<Item = &'a T>,
{
    stream.write_header(tag, len);
    for item in items {
        item.encode(stream);
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, stream: &mut Stream) {
        encode_elements(stream, Tag::Vector, self.len(), self);
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode(&self, stream: &mut Stream) {
        self.as_slice().encode(stream);
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, stream: &mut Stream) {
        self.as_slice().encode(stream);
    }
}

impl<T: Encode> Encode for VecDeque<T> {
    fn encode(&self, stream: &mut Stream) {
        encode_elements(stream, Tag::List, self.len(), self);
    }
}

impl<T: Encode> Encode for LinkedList<T> {
    fn encode(&self, stream: &mut Stream) {
        encode_elements(stream, Tag::List, self.len(), self);
    }
}

/// Elements are written in ascending order.
impl<T: Encode> Encode for BTreeSet<T> {
    fn encode(&self, stream: &mut Stream) {
        encode_elements(stream, Tag::Set, self.len(), self);
    }
}

/// Elements are sorted before writing so equal sets encode identically.
impl<T: Encode + Ord, S> Encode for HashSet<T, S> {
    fn encode(&self, stream: &mut Stream) {
        let mut items: Vec<&T> = self.iter().collect();
        items.sort_unstable();
        stream.write_header(Tag::Set, items.len());
        for item in items {
            item.encode(stream);
        }
    }
}

fn encode_entries<'a, K, V, I>(stream: &mut Stream, len: usize, entries: I)
where
    K: Encode + 'a,
    V: Encode + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    stream.write_header(Tag::Map, len);
    for (key, value) in entries {
        key.encode(stream);
        value.encode(stream);
    }
}

/// Entries are written in ascending key order.
impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
    fn encode(&self, stream: &mut Stream) {
        encode_entries(stream, self.len(), self);
    }
}

/// Entries are sorted by key before writing so equal maps encode identically.
impl<K: Encode + Ord, V: Encode, S> Encode for HashMap<K, V, S> {
    fn encode(&self, stream: &mut Stream) {
        let mut entries: Vec<(&K, &V)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        encode_entries(stream, entries.len(), entries);
    }
}

// ---------------------------------------------------------------- tuples

// Members are written back to back with no tag or count; a 2-tuple is a pair.
macro_rules! tuple_encode {
    ($($idx:tt $name:ident),+) => {
        impl<$($name: Encode),+> Encode for ($($name,)+) {
            fn encode(&self, stream: &mut Stream) {
                $(self.$idx.encode(stream);)+
            }
        }
    };
}

tuple_encode!(0 A, 1 B);
tuple_encode!(0 A, 1 B, 2 C);
tuple_encode!(0 A, 1 B, 2 C, 3 D);
tuple_encode!(0 A, 1 B, 2 C, 3 D, 4 E);
tuple_encode!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
