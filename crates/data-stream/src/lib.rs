//! Compact tagged binary serialization.
//!
//! A [`Stream`] is an append-only byte buffer with a forward-only read
//! cursor. Every value written to it is prefixed with a one-byte [`Tag`];
//! reads check that tag before decoding, so reading a value back as the
//! wrong type fails instead of producing garbage.
//!
//! # Wire format
//!
//! ```text
//! Value        := Tag Payload
//! FixedWidth   := 1 byte (BOOL, CHAR) | 4 bytes (INT32, FLOAT) | 8 bytes (INT64, DOUBLE)
//! String       := i32 length, raw bytes
//! Container    := i32 count, Value*          (VECTOR, LIST, SET)
//!               | i32 count, (Value Value)*  (MAP, key then value)
//! Pair/tuple   := Value Value ...            (no tag or count of its own)
//! Aggregate    := Value*                     (after a single CUSTOM tag)
//! ```
//!
//! All numbers use native byte order. Lengths and counts are signed 32-bit
//! values and a negative one is rejected as corruption. Maps and sets are
//! written in ascending order so equal containers encode identically.
//!
//! # Type mapping
//!
//! | Tag      | Rust types                                   |
//! |----------|----------------------------------------------|
//! | `BOOL`   | `bool`                                       |
//! | `CHAR`   | `u8`, `i8`                                   |
//! | `INT32`  | `i32`                                        |
//! | `INT64`  | `i64`                                        |
//! | `FLOAT`  | `f32`                                        |
//! | `DOUBLE` | `f64`                                        |
//! | `STRING` | `str` (write only), `String`                 |
//! | `VECTOR` | `[T]`, `[T; N]` (write only), `Vec<T>`       |
//! | `LIST`   | `VecDeque<T>`, `LinkedList<T>`               |
//! | `MAP`    | `BTreeMap<K, V>`, `HashMap<K, V, S>`         |
//! | `SET`    | `BTreeSet<T>`, `HashSet<T, S>`               |
//! | `CUSTOM` | [`aggregate!`] and [`serializable!`] structs |
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use data_stream::Stream;
//!
//! let mut ages = BTreeMap::new();
//! ages.insert("ann".to_string(), 31);
//! ages.insert("bob".to_string(), 27);
//!
//! let mut ds = Stream::new();
//! ds.push(&ages).push(&vec![1i64, 2, 3]).push(&(true, 'x' as u8));
//!
//! let mut ages_out: BTreeMap<String, i32> = BTreeMap::new();
//! let mut nums: Vec<i64> = Vec::new();
//! let mut pair = (false, 0u8);
//! ds.pull(&mut ages_out)?.pull(&mut nums)?.pull(&mut pair)?;
//!
//! assert_eq!(ages_out, ages);
//! assert_eq!(nums, vec![1, 2, 3]);
//! assert_eq!(pair, (true, b'x'));
//! # Ok::<(), data_stream::Error>(())
//! ```

mod decode;
mod encode;
mod error;
mod serializable;
mod stream;
mod tag;

pub use decode::Decode;
pub use encode::Encode;
pub use error::{Error, Result};
pub use serializable::Serializable;
pub use stream::Stream;
pub use tag::Tag;
