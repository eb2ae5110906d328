//! Material — what a device's housing is made of.

use serde::Deserialize;

use crate::error::ValidationError;

/// Housing material of a measurement device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    #[default]
    Plastic,
    Metal,
    Glass,
}

impl Material {
    /// Map a 1-based menu code onto a material.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownMaterialCode`] for anything outside `1..=3`.
    pub fn from_code(code: i64) -> Result<Self, ValidationError> {
        match code {
            1 => Ok(Self::Plastic),
            2 => Ok(Self::Metal),
            3 => Ok(Self::Glass),
            other => Err(ValidationError::UnknownMaterialCode(other)),
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plastic => f.write_str("Plastic"),
            Self::Metal => f.write_str("Metal"),
            Self::Glass => f.write_str("Glass"),
        }
    }
}
