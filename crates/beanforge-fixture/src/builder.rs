use std::any::{Any, TypeId};
use std::collections::HashMap;

use rand::rngs::ThreadRng;
use rand::{Rng, RngCore};
use regex::Regex;
use tracing::debug;

use crate::descriptor::{Bean, PropertyKind};
use crate::errors::{FixtureError, Result};
use crate::value::{BeanPropertyMap, PropertyValue};

/// Generator callback for custom-kind properties.
pub type CustomGenerator = Box<dyn Fn(&mut dyn RngCore) -> PropertyValue>;

/// Override callbacks applied after generation, keyed by property name.
///
/// Each callback sees the base (generated) map and may derive its value from
/// other entries. Overrides never see each other's results: evaluation is a
/// single pass over the generated values.
#[derive(Default)]
pub struct Overrides {
    entries: Vec<(String, Box<dyn Fn(&BeanPropertyMap) -> Option<PropertyValue>>)>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an override for one property; chainable.
    pub fn set<F>(mut self, property: impl Into<String>, f: F) -> Self
    where
        F: Fn(&BeanPropertyMap) -> Option<PropertyValue> + 'static,
    {
        self.entries.push((property.into(), Box::new(f)));
        self
    }

    fn iter(
        &self,
    ) -> impl Iterator<Item = (&str, &(dyn Fn(&BeanPropertyMap) -> Option<PropertyValue>))> {
        self.entries
            .iter()
            .map(|(name, f)| (name.as_str(), f.as_ref()))
    }
}

/// Builds fixture maps for bean types.
///
/// Owns the RNG and the registry of custom-type generators. A builder is
/// cheap; tests typically create one per test with a seeded RNG.
pub struct FixtureBuilder<R = ThreadRng> {
    rng: R,
    generators: HashMap<TypeId, CustomGenerator>,
}

impl FixtureBuilder<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for FixtureBuilder<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> FixtureBuilder<R> {
    /// Builder over a caller-supplied RNG, for seeded/replayable runs.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            generators: HashMap::new(),
        }
    }

    /// Registers a generator for properties of custom kind `T`.
    ///
    /// Properties declared with `PropertyKind::custom::<T>()` and no
    /// registered generator fail with [`FixtureError::UnresolvableType`].
    pub fn register<T, F>(&mut self, generator: F) -> &mut Self
    where
        T: Any + PartialEq + Send + Sync,
        F: Fn(&mut dyn RngCore) -> T + 'static,
    {
        self.generators.insert(
            TypeId::of::<T>(),
            Box::new(move |rng| PropertyValue::opaque(generator(rng))),
        );
        self
    }

    /// Produces a map covering every declared property of `T` not listed in
    /// `props_to_ignore`, then applies `overrides` in a single pass over the
    /// generated values.
    pub fn create_bean_map_for_test<T: Bean>(
        &mut self,
        props_to_ignore: &[&str],
        overrides: &Overrides,
    ) -> Result<BeanPropertyMap> {
        let descriptor = T::descriptor();

        let mut base = BeanPropertyMap::new();
        for property in &descriptor.properties {
            if props_to_ignore.contains(&property.name) {
                continue;
            }
            let value = self.random_for_kind(descriptor.name, property.name, property.kind)?;
            base.insert(property.name, value);
        }

        let mut map = base.clone();
        for (name, f) in overrides.iter() {
            // overrides for ignored or undeclared properties are skipped
            if !base.contains(name) {
                continue;
            }
            let value = f(&base).ok_or_else(|| FixtureError::OverrideProducedAbsent {
                bean: descriptor.name.to_string(),
                property: name.to_string(),
            })?;
            map.insert(name, value);
        }

        debug!(
            bean = descriptor.name,
            properties = map.len(),
            "fixture map generated"
        );
        Ok(map)
    }

    fn random_for_kind(
        &mut self,
        bean: &'static str,
        property: &'static str,
        kind: PropertyKind,
    ) -> Result<PropertyValue> {
        match kind {
            PropertyKind::Bool => Ok(PropertyValue::Bool(beanforge_random::random_boolean(
                &mut self.rng,
            ))),
            PropertyKind::Int => Ok(PropertyValue::Int(beanforge_random::random_int(
                &mut self.rng,
            ))),
            PropertyKind::Text => Ok(PropertyValue::Text(beanforge_random::random_string(
                &mut self.rng,
            ))),
            PropertyKind::Pattern => {
                let source = beanforge_random::random_string(&mut self.rng);
                let pattern =
                    Regex::new(&source).map_err(|_| FixtureError::UnresolvableType {
                        bean: bean.to_string(),
                        property: property.to_string(),
                        type_name: "regex::Regex",
                    })?;
                Ok(PropertyValue::Pattern(pattern))
            }
            PropertyKind::Custom { id, type_name } => {
                let generator =
                    self.generators
                        .get(&id)
                        .ok_or_else(|| FixtureError::UnresolvableType {
                            bean: bean.to_string(),
                            property: property.to_string(),
                            type_name,
                        })?;
                Ok(generator(&mut self.rng))
            }
        }
    }
}

/// Materializes a bean from a property map through its designated
/// constructor. Required parameters with no map entry surface as
/// [`FixtureError::MissingConstructorArgument`].
pub fn create_bean_from_map<T: Bean>(map: &BeanPropertyMap) -> Result<T> {
    let descriptor = T::descriptor();
    let bean = (descriptor.construct)(map)?;
    debug!(bean = descriptor.name, "bean materialized from map");
    Ok(bean)
}
