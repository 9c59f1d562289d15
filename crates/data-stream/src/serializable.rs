//! User-defined aggregates.
//!
//! An aggregate is encoded as a single [`Tag::Custom`](crate::Tag::Custom)
//! byte followed by each of its fields, in a fixed declared order, each with
//! its own tag. There are two ways to opt in:
//!
//! - implement [`Serializable`] (usually with [`serializable!`](crate::serializable))
//!   and pass the value around as `&dyn Serializable`; the macro also
//!   bridges the type to `Encode`/`Decode` so it can sit in fields and
//!   containers;
//! - implement [`Encode`](crate::Encode) and [`Decode`](crate::Decode)
//!   (usually with [`aggregate!`](crate::aggregate)) and use it like any
//!   other value, resolved at compile time.
//!
//! Both produce the same bytes for the same fields.
//!
//! ```
//! use data_stream::{aggregate, serializable, Serializable, Stream};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//!     label: String,
//! }
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct PointObject {
//!     x: i32,
//!     y: i32,
//!     label: String,
//! }
//!
//! aggregate!(Point { x, y, label });
//! serializable!(PointObject { x, y, label });
//!
//! let p = Point { x: 1, y: 2, label: "origin".into() };
//! let o = PointObject { x: 1, y: 2, label: "origin".into() };
//!
//! let mut a = Stream::new();
//! a.write(&p);
//! let mut b = Stream::new();
//! b.write_serializable(&o);
//! assert_eq!(a.as_bytes(), b.as_bytes());
//!
//! let mut q = PointObject::default();
//! b.read_serializable(&mut q).unwrap();
//! assert_eq!(q, o);
//! assert_eq!(a.read::<Point>().unwrap(), p);
//! ```

use crate::{Result, Stream};

/// Object-safe aggregate interface.
///
/// `serialize` writes the CUSTOM tag and then every field in declared
/// order. `deserialize` checks the CUSTOM tag and reads the fields back in
/// the same order, overwriting them one by one; if a field fails, the
/// fields before it have already been replaced.
pub trait Serializable {
    fn serialize(&self, stream: &mut Stream);

    fn deserialize(&mut self, stream: &mut Stream) -> Result<()>;
}

/// Implements [`Encode`](crate::Encode) and [`Decode`](crate::Decode) for a
/// struct from a single ordered field list.
///
/// Every listed field must itself implement `Encode` and `Decode`. Fields
/// left out of the list are not written, so the struct must list all of
/// them for `Decode` to construct it.
#[macro_export]
macro_rules! aggregate {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::Encode for $ty {
            fn encode(&self, stream: &mut $crate::Stream) {
                stream.write_tag($crate::Tag::Custom);
                $(stream.write(&self.$field);)+
            }
        }

        impl $crate::Decode for $ty {
            fn decode(stream: &mut $crate::Stream) -> $crate::Result<Self> {
                stream.read_tag($crate::Tag::Custom)?;
                Ok($ty {
                    $($field: stream.read()?,)+
                })
            }
        }
    };
}

/// Implements [`Serializable`] for a struct from a single ordered field
/// list.
///
/// The type also gets [`Encode`](crate::Encode) and
/// [`Decode`](crate::Decode) impls that go through `serialize` and
/// `deserialize`, so it can be a field of another aggregate or a container
/// element. `Decode` starts from `Default::default()`, so the struct must
/// implement `Default`. Do not combine with [`aggregate!`](crate::aggregate)
/// on the same type.
#[macro_export]
macro_rules! serializable {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::Serializable for $ty {
            fn serialize(&self, stream: &mut $crate::Stream) {
                stream.write_tag($crate::Tag::Custom);
                $(stream.write(&self.$field);)+
            }

            fn deserialize(&mut self, stream: &mut $crate::Stream) -> $crate::Result<()> {
                stream.read_tag($crate::Tag::Custom)?;
                $(self.$field = stream.read()?;)+
                Ok(())
            }
        }

        impl $crate::Encode for $ty {
            fn encode(&self, stream: &mut $crate::Stream) {
                $crate::Serializable::serialize(self, stream);
            }
        }

        impl $crate::Decode for $ty {
            fn decode(stream: &mut $crate::Stream) -> $crate::Result<Self> {
                let mut value = <$ty as ::std::default::Default>::default();
                $crate::Serializable::deserialize(&mut value, stream)?;
                Ok(value)
            }
        }
    };
}
