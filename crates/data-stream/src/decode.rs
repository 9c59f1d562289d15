//! Reading values back out of a [`Stream`].

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::{Result, Stream, Tag};

/// A value that can be read back from its tagged encoding.
///
/// The tag at the cursor must match the type being read; otherwise the read
/// fails with [`Error::TagMismatch`](crate::Error::TagMismatch) and the
/// cursor stays on the tag.
pub trait Decode: Sized {
    fn decode(stream: &mut Stream) -> Result<Self>;

    /// Reads into an existing value.
    ///
    /// The default replaces `self`. Containers override it to extend `self`
    /// with the decoded elements; on failure the elements read so far stay
    /// in `self`.
    fn decode_in_place(&mut self, stream: &mut Stream) -> Result<()> {
        *self = Self::decode(stream)?;
        Ok(())
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode(stream: &mut Stream) -> Result<Self> {
        T::decode(stream).map(Box::new)
    }

    fn decode_in_place(&mut self, stream: &mut Stream) -> Result<()> {
        (**self).decode_in_place(stream)
    }
}

// ---------------------------------------------------------------- primitives

impl Decode for bool {
    fn decode(stream: &mut Stream) -> Result<Self> {
        stream.read_bool()
    }
}

impl Decode for u8 {
    fn decode(stream: &mut Stream) -> Result<Self> {
        stream.read_char()
    }
}

impl Decode for i8 {
    fn decode(stream: &mut Stream) -> Result<Self> {
        stream.read_char().map(|b| b as i8)
    }
}

impl Decode for i32 {
    fn decode(stream: &mut Stream) -> Result<Self> {
        stream.read_i32()
    }
}

impl Decode for i64 {
    fn decode(stream: &mut Stream) -> Result<Self> {
        stream.read_i64()
    }
}

impl Decode for f32 {
    fn decode(stream: &mut Stream) -> Result<Self> {
        stream.read_f32()
    }
}

impl Decode for f64 {
    fn decode(stream: &mut Stream) -> Result<Self> {
        stream.read_f64()
    }
}

impl Decode for String {
    fn decode(stream: &mut Stream) -> Result<Self> {
        stream.read_string()
    }
}

// ---------------------------------------------------------------- containers

macro_rules! sequence_decode {
    ($ty:ident, $tag:expr, $push:ident) => {
        impl<T: Decode> Decode for $ty<T> {
            fn decode(stream: &mut Stream) -> Result<Self> {
                let mut value = Self::new();
                value.decode_in_place(stream)?;
                Ok(value)
            }

            fn decode_in_place(&mut self, stream: &mut Stream) -> Result<()> {
                let len = stream.read_header($tag)?;
                for _ in 0..len {
                    self.$push(stream.read()?);
                }
                Ok(())
            }
        }
    };
}

sequence_decode!(VecDeque, Tag::List, push_back);
sequence_decode!(LinkedList, Tag::List, push_back);

impl<T: Decode> Decode for Vec<T> {
    fn decode(stream: &mut Stream) -> Result<Self> {
        let mut value = Vec::new();
        value.decode_in_place(stream)?;
        Ok(value)
    }

    fn decode_in_place(&mut self, stream: &mut Stream) -> Result<()> {
        let len = stream.read_header(Tag::Vector)?;
        self.reserve(stream.reserve_hint(len));
        for _ in 0..len {
            self.push(stream.read()?);
        }
        Ok(())
    }
}

// `insert` leaves an existing equal element in place, so duplicates keep the
// first occurrence.
impl<T: Decode + Ord> Decode for BTreeSet<T> {
    fn decode(stream: &mut Stream) -> Result<Self> {
        let mut value = BTreeSet::new();
        value.decode_in_place(stream)?;
        Ok(value)
    }

    fn decode_in_place(&mut self, stream: &mut Stream) -> Result<()> {
        let len = stream.read_header(Tag::Set)?;
        for _ in 0..len {
            let item: T = stream.read()?;
            self.insert(item);
        }
        Ok(())
    }
}

impl<T, S> Decode for HashSet<T, S>
where
    T: Decode + Eq + Hash,
    S: BuildHasher + Default,
{
    fn decode(stream: &mut Stream) -> Result<Self> {
        let mut value = HashSet::default();
        value.decode_in_place(stream)?;
        Ok(value)
    }

    fn decode_in_place(&mut self, stream: &mut Stream) -> Result<()> {
        let len = stream.read_header(Tag::Set)?;
        self.reserve(stream.reserve_hint(len));
        for _ in 0..len {
            let item: T = stream.read()?;
            self.insert(item);
        }
        Ok(())
    }
}

// Duplicate keys keep the first value.
impl<K: Decode + Ord, V: Decode> Decode for BTreeMap<K, V> {
    fn decode(stream: &mut Stream) -> Result<Self> {
        let mut value = BTreeMap::new();
        value.decode_in_place(stream)?;
        Ok(value)
    }

    fn decode_in_place(&mut self, stream: &mut Stream) -> Result<()> {
        let len = stream.read_header(Tag::Map)?;
        for _ in 0..len {
            let key: K = stream.read()?;
            let value: V = stream.read()?;
            self.entry(key).or_insert(value);
        }
        Ok(())
    }
}

impl<K, V, S> Decode for HashMap<K, V, S>
where
    K: Decode + Eq + Hash,
    V: Decode,
    S: BuildHasher + Default,
{
    fn decode(stream: &mut Stream) -> Result<Self> {
        let mut value = HashMap::default();
        value.decode_in_place(stream)?;
        Ok(value)
    }

    fn decode_in_place(&mut self, stream: &mut Stream) -> Result<()> {
        let len = stream.read_header(Tag::Map)?;
        self.reserve(stream.reserve_hint(len));
        for _ in 0..len {
            let key: K = stream.read()?;
            let value: V = stream.read()?;
            self.entry(key).or_insert(value);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------- tuples

macro_rules! tuple_decode {
    ($($name:ident),+) => {
        impl<$($name: Decode),+> Decode for ($($name,)+) {
            fn decode(stream: &mut Stream) -> Result<Self> {
                Ok(($(stream.read::<$name>()?,)+))
            }
        }
    };
}

tuple_decode!(A, B);
tuple_decode!(A, B, C);
tuple_decode!(A, B, C, D);
tuple_decode!(A, B, C, D, E);
tuple_decode!(A, B, C, D, E, F);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_vec_in_place_appends() {
        let mut ds = Stream::new();
        ds.write(&vec![3i32, 4]);
        let mut value = vec![1i32, 2];
        ds.read_into(&mut value).unwrap();
        assert_eq!(value, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_partial_fill_on_failure() {
        let mut ds = Stream::new();
        ds.write_header(Tag::Vector, 3);
        ds.write(&1i32);
        ds.write(&2i32);
        ds.write(&true);

        let mut value: Vec<i32> = Vec::new();
        let err = ds.read_into(&mut value).unwrap_err();
        assert!(matches!(
            err,
            Error::TagMismatch {
                expected: Tag::Int32,
                ..
            }
        ));
        assert_eq!(value, vec![1, 2]);
        assert_eq!(ds.peek_tag(), Some(Tag::Bool));
        assert_eq!(ds.read::<bool>(), Ok(true));
    }

    #[test]
    fn test_map_keeps_first_duplicate() {
        let mut ds = Stream::new();
        ds.write_header(Tag::Map, 2);
        ds.write(&(String::from("k"), 1i32));
        ds.write(&(String::from("k"), 2i32));
        let value: BTreeMap<String, i32> = ds.read().unwrap();
        assert_eq!(value.len(), 1);
        assert_eq!(value["k"], 1);
    }

    #[test]
    fn test_huge_count_does_not_allocate() {
        let mut ds = Stream::new();
        ds.write_header(Tag::Vector, i32::MAX as usize);
        let err = ds.read::<Vec<i64>>().unwrap_err();
        assert!(matches!(err, Error::Buffer(_)));
    }

    #[test]
    fn test_vector_and_list_are_distinct() {
        let mut ds = Stream::new();
        ds.write(&vec![1i32]);
        assert!(matches!(
            ds.read::<VecDeque<i32>>(),
            Err(Error::TagMismatch {
                expected: Tag::List,
                ..
            })
        ));
        assert_eq!(ds.read::<Vec<i32>>(), Ok(vec![1]));
    }

    #[test]
    fn test_tuple_reads_in_order() {
        let mut ds = Stream::new();
        ds.write(&(1i32, b'z', String::from("s")));
        let value: (i32, u8, String) = ds.read().unwrap();
        assert_eq!(value, (1, b'z', String::from("s")));
    }
}
