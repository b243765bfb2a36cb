//! Statically-typed handles for well-known properties
//!
//! A `PropertyKey<T>` names a registered property and fixes the Rust type
//! its value is read and written as:
//!
//! ```ignore
//! pub const RECORD_PLAYTHROUGH_PROBABILITY: PropertyKey<f64> =
//!     PropertyKey::new("record_playthrough_probability");
//!
//! let p: f64 = registry.get(&RECORD_PLAYTHROUGH_PROBABILITY)?;
//! ```

use super::types::PropertyValue;
use std::fmt;
use std::marker::PhantomData;

/// Rust types that can be stored in a property
pub trait PropertyKind: Sized {
    /// Value kind name, matching `PropertyType::kind`
    const KIND: &'static str;

    fn from_value(value: &PropertyValue) -> Option<Self>;

    fn into_value(self) -> PropertyValue;
}

impl PropertyKind for bool {
    const KIND: &'static str = "bool";

    fn from_value(value: &PropertyValue) -> Option<Self> {
        value.as_bool()
    }

    fn into_value(self) -> PropertyValue {
        PropertyValue::Bool(self)
    }
}

impl PropertyKind for i64 {
    const KIND: &'static str = "int";

    fn from_value(value: &PropertyValue) -> Option<Self> {
        value.as_int()
    }

    fn into_value(self) -> PropertyValue {
        PropertyValue::Int(self)
    }
}

impl PropertyKind for u64 {
    const KIND: &'static str = "uint";

    fn from_value(value: &PropertyValue) -> Option<Self> {
        value.as_uint()
    }

    fn into_value(self) -> PropertyValue {
        PropertyValue::UInt(self)
    }
}

impl PropertyKind for f64 {
    const KIND: &'static str = "float";

    fn from_value(value: &PropertyValue) -> Option<Self> {
        value.as_float()
    }

    fn into_value(self) -> PropertyValue {
        PropertyValue::Float(self)
    }
}

impl PropertyKind for String {
    const KIND: &'static str = "string";

    fn from_value(value: &PropertyValue) -> Option<Self> {
        value.as_str().map(str::to_string)
    }

    fn into_value(self) -> PropertyValue {
        PropertyValue::String(self)
    }
}

/// Typed handle to a property by name
pub struct PropertyKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> PropertyKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

// Manual impls so `T` itself need not be Clone/Copy/Debug.
impl<T> Clone for PropertyKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PropertyKey<T> {}

impl<T: PropertyKind> fmt::Debug for PropertyKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertyKey<{}>({})", T::KIND, self.name)
    }
}
