use crate::descriptor::Bean;
use crate::errors::{FixtureError, Result};
use crate::value::BeanPropertyMap;

/// Checks every entry of `map` against the bean's current property values.
///
/// Resolution failures surface as [`FixtureError::MissingProperty`]; the
/// first value mismatch halts validation with
/// [`FixtureError::AssertionMismatch`]. Mismatches are not aggregated.
pub fn validate_bean<T: Bean>(bean: &T, map: &BeanPropertyMap) -> Result<()> {
    let descriptor = T::descriptor();
    for (name, expected) in map.iter() {
        let property =
            descriptor
                .property(name)
                .ok_or_else(|| FixtureError::MissingProperty {
                    bean: descriptor.name.to_string(),
                    property: name.to_string(),
                })?;
        let actual = (property.get)(bean);
        if actual != *expected {
            return Err(FixtureError::AssertionMismatch {
                bean: descriptor.name.to_string(),
                property: name.to_string(),
                actual: format!("{actual:?}"),
                expected: format!("{expected:?}"),
            });
        }
    }
    Ok(())
}
