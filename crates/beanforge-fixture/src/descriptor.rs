use std::any::{Any, TypeId};

use crate::errors::Result;
use crate::value::{BeanPropertyMap, PropertyValue};

/// Kind tag driving type-directed random dispatch.
///
/// The set is closed: anything outside the four primitive kinds goes through
/// [`PropertyKind::Custom`] and a generator registered on the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Bool,
    Int,
    Text,
    /// A compiled regular expression; generated from a random string.
    Pattern,
    Custom {
        id: TypeId,
        type_name: &'static str,
    },
}

impl PropertyKind {
    /// Custom kind for an arbitrary property type.
    pub fn custom<T: Any>() -> Self {
        PropertyKind::Custom {
            id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }
}

/// One declared property of a fixture-eligible bean.
pub struct PropertyDescriptor<T> {
    pub name: &'static str,
    pub kind: PropertyKind,
    /// Reads the property's current value off a live instance.
    pub get: fn(&T) -> PropertyValue,
}

/// Statically declared shape of a bean: its properties and its designated
/// constructor. This table replaces runtime reflection; parameter names of
/// the constructor are the property names themselves.
pub struct BeanDescriptor<T> {
    pub name: &'static str,
    pub properties: Vec<PropertyDescriptor<T>>,
    /// Designated constructor: resolves each parameter by name from the map.
    pub construct: fn(&BeanPropertyMap) -> Result<T>,
}

impl<T> BeanDescriptor<T> {
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor<T>> {
        self.properties.iter().find(|property| property.name == name)
    }

    pub fn property_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.properties.iter().map(|property| property.name)
    }
}

/// A data-holder type that can be materialized from a [`BeanPropertyMap`].
pub trait Bean: Sized + 'static {
    fn descriptor() -> BeanDescriptor<Self>;
}
