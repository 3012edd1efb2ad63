use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::errors::{FixtureError, Result};

/// A single generated (or overridden) bean property value.
///
/// The variants mirror the closed set of property kinds; everything outside
/// that set travels as [`PropertyValue::Opaque`].
#[derive(Clone)]
pub enum PropertyValue {
    Bool(bool),
    Int(i32),
    Text(String),
    Pattern(Regex),
    Opaque(OpaqueValue),
}

impl PropertyValue {
    /// Wraps an arbitrary value as an opaque stand-in.
    pub fn opaque<T>(value: T) -> Self
    where
        T: Any + PartialEq + Send + Sync,
    {
        PropertyValue::Opaque(OpaqueValue::new(value))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            PropertyValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_pattern(&self) -> Option<&Regex> {
        match self {
            PropertyValue::Pattern(value) => Some(value),
            _ => None,
        }
    }

    /// Borrows the wrapped value of an opaque entry, if the types line up.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            PropertyValue::Opaque(value) => value.downcast_ref(),
            _ => None,
        }
    }

    /// Short label used in error messages.
    pub fn kind_label(&self) -> &'static str {
        match self {
            PropertyValue::Bool(_) => "a boolean",
            PropertyValue::Int(_) => "an integer",
            PropertyValue::Text(_) => "a string",
            PropertyValue::Pattern(_) => "a pattern",
            PropertyValue::Opaque(value) => value.type_name(),
        }
    }
}

impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropertyValue::Bool(a), PropertyValue::Bool(b)) => a == b,
            (PropertyValue::Int(a), PropertyValue::Int(b)) => a == b,
            (PropertyValue::Text(a), PropertyValue::Text(b)) => a == b,
            // compiled programs are opaque; the source pattern is the identity
            (PropertyValue::Pattern(a), PropertyValue::Pattern(b)) => a.as_str() == b.as_str(),
            (PropertyValue::Opaque(a), PropertyValue::Opaque(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(value) => write!(f, "Bool({value})"),
            PropertyValue::Int(value) => write!(f, "Int({value})"),
            PropertyValue::Text(value) => write!(f, "Text({value:?})"),
            PropertyValue::Pattern(value) => write!(f, "Pattern({:?})", value.as_str()),
            PropertyValue::Opaque(value) => write!(f, "Opaque({})", value.type_name()),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<Regex> for PropertyValue {
    fn from(value: Regex) -> Self {
        PropertyValue::Pattern(value)
    }
}

/// An opaque stand-in for values outside the closed kind set.
///
/// Equality delegates to the wrapped type's `PartialEq` through a
/// monomorphized shim captured at construction, so validation compares
/// custom values deeply rather than by pointer.
#[derive(Clone)]
pub struct OpaqueValue {
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
    eq: fn(&dyn Any, &dyn Any) -> bool,
}

impl OpaqueValue {
    pub fn new<T>(value: T) -> Self
    where
        T: Any + PartialEq + Send + Sync,
    {
        Self {
            type_name: std::any::type_name::<T>(),
            value: Arc::new(value),
            eq: opaque_eq::<T>,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }
}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        (self.eq)(self.value.as_ref(), other.value.as_ref())
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpaqueValue({})", self.type_name)
    }
}

fn opaque_eq<T: Any + PartialEq>(a: &dyn Any, b: &dyn Any) -> bool {
    match (a.downcast_ref::<T>(), b.downcast_ref::<T>()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Property-name-to-value mapping produced for one fixture request.
///
/// Fresh per request; carries no identity beyond its contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeanPropertyMap {
    entries: HashMap<String, PropertyValue>,
}

impl BeanPropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: PropertyValue) {
        self.entries.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a required constructor argument.
    pub fn require(&self, bean: &str, parameter: &str) -> Result<&PropertyValue> {
        self.entries
            .get(parameter)
            .ok_or_else(|| FixtureError::MissingConstructorArgument {
                bean: bean.to_string(),
                parameter: parameter.to_string(),
            })
    }

    pub fn require_bool(&self, bean: &str, parameter: &str) -> Result<bool> {
        let value = self.require(bean, parameter)?;
        value
            .as_bool()
            .ok_or_else(|| mismatch(bean, parameter, "a boolean", value))
    }

    pub fn require_int(&self, bean: &str, parameter: &str) -> Result<i32> {
        let value = self.require(bean, parameter)?;
        value
            .as_int()
            .ok_or_else(|| mismatch(bean, parameter, "an integer", value))
    }

    pub fn require_text(&self, bean: &str, parameter: &str) -> Result<String> {
        let value = self.require(bean, parameter)?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch(bean, parameter, "a string", value))
    }

    pub fn require_pattern(&self, bean: &str, parameter: &str) -> Result<Regex> {
        let value = self.require(bean, parameter)?;
        value
            .as_pattern()
            .cloned()
            .ok_or_else(|| mismatch(bean, parameter, "a pattern", value))
    }

    /// Recovers a clone of an opaque entry's wrapped value.
    pub fn require_custom<T>(&self, bean: &str, parameter: &str) -> Result<T>
    where
        T: Any + Clone,
    {
        let value = self.require(bean, parameter)?;
        value
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| mismatch(bean, parameter, std::any::type_name::<T>(), value))
    }
}

fn mismatch(
    bean: &str,
    parameter: &str,
    expected: &'static str,
    actual: &PropertyValue,
) -> FixtureError {
    FixtureError::MismatchedConstructorArgument {
        bean: bean.to_string(),
        parameter: parameter.to_string(),
        expected,
        actual: actual.kind_label(),
    }
}
