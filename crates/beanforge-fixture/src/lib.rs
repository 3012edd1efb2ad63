//! Bean fixture maps for tests.
//!
//! This crate turns a statically declared bean descriptor into a
//! property-name-to-value map filled with random values from
//! `beanforge-random`, materializes real bean instances from such maps
//! through the bean's designated constructor, and validates instances
//! against a reference map.

pub mod builder;
pub mod descriptor;
pub mod errors;
pub mod validate;
pub mod value;

pub use builder::{CustomGenerator, FixtureBuilder, Overrides, create_bean_from_map};
pub use descriptor::{Bean, BeanDescriptor, PropertyDescriptor, PropertyKind};
pub use errors::{FixtureError, Result};
pub use validate::validate_bean;
pub use value::{BeanPropertyMap, OpaqueValue, PropertyValue};
