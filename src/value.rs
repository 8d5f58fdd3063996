use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::path::PathBuf;

use crate::{BoxError, ConvertError};

/// A field that can be written from command-line text.
///
/// Implementations must leave `self` untouched when they return an error.
pub trait Value {
    fn set(&mut self, text: &str) -> Result<(), ConvertError>;

    /// Boolean slots are switched on by the flag alone and never take a
    /// default value.
    fn is_bool(&self) -> bool {
        false
    }
}

/// A single value parsed from text, usable as an element of a collection
/// slot.
pub trait Scalar: Sized {
    /// Collections of boolean scalars are switches as well.
    const IS_BOOL: bool = false;

    fn parse(text: &str) -> Result<Self, ConvertError>;
}

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl Scalar for $ty {
            fn parse(text: &str) -> Result<Self, ConvertError> {
                text.parse::<$ty>().map_err(ConvertError::invalid)
            }
        }
    )*};
}

macro_rules! impl_value {
    ($($ty:ty),* $(,)?) => {$(
        impl Value for $ty {
            fn set(&mut self, text: &str) -> Result<(), ConvertError> {
                *self = <$ty as Scalar>::parse(text)?;
                Ok(())
            }
        }
    )*};
}

impl_scalar![
    char, String, PathBuf, OsString, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64,
    u128, usize, f32, f64,
];

impl_value![
    char, String, PathBuf, OsString, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
    usize, f32, f64,
];

impl Scalar for bool {
    const IS_BOOL: bool = true;

    fn parse(text: &str) -> Result<Self, ConvertError> {
        if text.is_empty() {
            return Ok(true);
        }
        text.parse().map_err(ConvertError::invalid)
    }
}

impl Value for bool {
    fn set(&mut self, text: &str) -> Result<(), ConvertError> {
        *self = <bool as Scalar>::parse(text)?;
        Ok(())
    }

    fn is_bool(&self) -> bool {
        true
    }
}

impl<T: ?Sized + Value> Value for &mut T {
    fn set(&mut self, text: &str) -> Result<(), ConvertError> {
        (**self).set(text)
    }

    fn is_bool(&self) -> bool {
        (**self).is_bool()
    }
}

impl<T: Scalar> Value for Option<T> {
    fn set(&mut self, text: &str) -> Result<(), ConvertError> {
        *self = Some(T::parse(text)?);
        Ok(())
    }

    fn is_bool(&self) -> bool {
        T::IS_BOOL
    }
}

impl<T: Scalar> Value for Vec<T> {
    fn set(&mut self, text: &str) -> Result<(), ConvertError> {
        self.push(T::parse(text)?);
        Ok(())
    }

    fn is_bool(&self) -> bool {
        T::IS_BOOL
    }
}

impl<K, V> Value for BTreeMap<K, V>
where
    K: Scalar + Ord,
    V: Scalar,
{
    fn set(&mut self, text: &str) -> Result<(), ConvertError> {
        let (k, v) = parse_pair(text)?;
        self.insert(k, v);
        Ok(())
    }
}

impl<K, V, S> Value for HashMap<K, V, S>
where
    K: Scalar + Eq + Hash,
    V: Scalar,
    S: BuildHasher,
{
    fn set(&mut self, text: &str) -> Result<(), ConvertError> {
        let (k, v) = parse_pair(text)?;
        self.insert(k, v);
        Ok(())
    }
}

fn parse_pair<K: Scalar, V: Scalar>(text: &str) -> Result<(K, V), ConvertError> {
    let (k, v) = text
        .split_once('=')
        .ok_or(ConvertError::MissingSeparator)?;
    Ok((K::parse(k)?, V::parse(v)?))
}

/// A function invoked in place of storing a value.
pub struct Callback {
    f: Box<dyn FnMut(&str) -> Result<(), BoxError>>,
    takes_argument: bool,
}

impl Callback {
    /// Creates a callback receiving the option's value, or `""` if absent.
    pub fn new<F, E>(mut f: F) -> Self
    where
        F: 'static + FnMut(&str) -> Result<(), E>,
        E: Into<BoxError>,
    {
        Self {
            f: Box::new(move |s| f(s).map_err(Into::into)),
            takes_argument: true,
        }
    }

    /// Creates a callback that ignores the option's value.
    pub fn nullary<F, E>(mut f: F) -> Self
    where
        F: 'static + FnMut() -> Result<(), E>,
        E: Into<BoxError>,
    {
        Self {
            f: Box::new(move |_| f().map_err(Into::into)),
            takes_argument: false,
        }
    }

    pub fn takes_argument(&self) -> bool {
        self.takes_argument
    }

    pub fn call(&mut self, text: &str) -> Result<(), BoxError> {
        (self.f)(text)
    }
}

impl Default for Callback {
    fn default() -> Self {
        Self::nullary(|| Ok::<_, BoxError>(()))
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("takes_argument", &self.takes_argument)
            .finish_non_exhaustive()
    }
}

/// Where an option writes to.
pub enum Target<'a> {
    Slot(&'a mut dyn Value),
    Callback(&'a mut Callback),
}

impl fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slot(v) => f
                .debug_struct("Slot")
                .field("is_bool", &v.is_bool())
                .finish_non_exhaustive(),
            Self::Callback(c) => fmt::Debug::fmt(c, f),
        }
    }
}

/// Types a field option can be bound to.
pub trait Bind {
    fn target(&mut self) -> Target<'_>;
}

impl<T: Value> Bind for T {
    fn target(&mut self) -> Target<'_> {
        Target::Slot(self)
    }
}

impl Bind for Callback {
    fn target(&mut self) -> Target<'_> {
        Target::Callback(self)
    }
}
