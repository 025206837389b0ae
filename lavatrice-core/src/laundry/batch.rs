//! Laundry batch description

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::BuildError;

/// Fabric a batch is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Material {
    Cotton,
    /// Never spun, whatever the configuration asks for
    Delicate,
    Synthetic,
    Jeans,
    Wool,
}

impl Material {
    /// Check if this material must not be spun
    pub fn is_delicate(&self) -> bool {
        matches!(self, Material::Delicate)
    }
}

/// A unit of laundry submitted for washing
///
/// The weight is checked to be a positive, finite number of kilograms.
/// Whether the machine can take it is decided by the controller, not here.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LaundryBatch {
    weight_kg: f32,
    material: Material,
}

impl LaundryBatch {
    /// Create a batch directly
    pub fn new(weight_kg: f32, material: Material) -> Result<Self, BuildError> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(BuildError::InvalidWeight);
        }
        Ok(Self {
            weight_kg,
            material,
        })
    }

    /// Start building a batch
    pub fn builder() -> LaundryBatchBuilder {
        LaundryBatchBuilder::default()
    }

    /// Weight in kilograms
    pub fn weight_kg(&self) -> f32 {
        self.weight_kg
    }

    pub fn material(&self) -> Material {
        self.material
    }
}

/// Builder for [`LaundryBatch`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LaundryBatchBuilder {
    weight_kg: Option<f32>,
    material: Option<Material>,
}

impl LaundryBatchBuilder {
    pub fn with_weight_kg(mut self, weight_kg: f32) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    /// Build the batch
    ///
    /// Fails if either field is missing or the weight is not positive.
    pub fn build(self) -> Result<LaundryBatch, BuildError> {
        let weight_kg = self.weight_kg.ok_or(BuildError::MissingWeight)?;
        let material = self.material.ok_or(BuildError::MissingMaterial)?;
        LaundryBatch::new(weight_kg, material)
    }
}
