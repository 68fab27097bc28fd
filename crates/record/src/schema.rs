//! Dataset schema: ordered field descriptors with kinds and weights.

use crate::error::RecordError;
use crate::weights::Weights;

/// How a field participates in distance computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Real-valued field; contributes a weighted squared difference.
    Continuous,
    /// Discrete field with a fixed, known category set.
    DiscreteFixed,
    /// Discrete field whose category vocabulary was learned from data.
    DiscreteDataDriven,
    /// Field carried in the file but excluded from distance computation.
    Ignore,
}

impl FieldKind {
    /// Decodes the on-disk type code.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidFieldKind`] for an unknown code.
    pub fn from_code(code: i32) -> Result<Self, RecordError> {
        match code {
            0 => Ok(Self::Continuous),
            1 => Ok(Self::DiscreteFixed),
            2 => Ok(Self::DiscreteDataDriven),
            3 => Ok(Self::Ignore),
            _ => Err(RecordError::InvalidFieldKind { code }),
        }
    }

    /// The on-disk type code.
    pub fn code(self) -> i32 {
        match self {
            Self::Continuous => 0,
            Self::DiscreteFixed => 1,
            Self::DiscreteDataDriven => 2,
            Self::Ignore => 3,
        }
    }

    /// True for the two discrete variants.
    pub fn is_discrete(self) -> bool {
        matches!(self, Self::DiscreteFixed | Self::DiscreteDataDriven)
    }
}

/// One field of the dataset: name, kind, distance weight, and (for
/// data-driven discrete fields) the category vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field name.
    name: String,
    /// Participation kind.
    kind: FieldKind,
    /// Distance weight for this field.
    weight: f32,
    /// Category vocabulary, present for data-driven discrete fields.
    values: Option<Vec<String>>,
}

impl FieldDescriptor {
    /// Creates a descriptor from its parts.
    pub fn new(
        name: impl Into<String>,
        kind: FieldKind,
        weight: f32,
        values: Option<Vec<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            weight,
            values,
        }
    }

    /// Convenience constructor for a continuous field.
    pub fn continuous(name: impl Into<String>, weight: f32) -> Self {
        Self::new(name, FieldKind::Continuous, weight, None)
    }

    /// Convenience constructor for a fixed-category discrete field.
    pub fn discrete(name: impl Into<String>, weight: f32) -> Self {
        Self::new(name, FieldKind::DiscreteFixed, weight, None)
    }

    /// Attaches a category vocabulary, marking the field data-driven.
    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.kind = FieldKind::DiscreteDataDriven;
        self.values = Some(values);
        self
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Participation kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Distance weight.
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Category vocabulary, when present.
    pub fn values(&self) -> Option<&[String]> {
        self.values.as_deref()
    }
}

/// Ordered field descriptors for one dataset.
///
/// The schema is identical for every record in a run. `Ignore` fields are
/// listed in the descriptors but belong to neither the real nor the
/// discrete family, so they occupy no slot in a [`Record`].
///
/// [`Record`]: crate::record::Record
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    fields: Vec<FieldDescriptor>,
    real_count: usize,
    discrete_count: usize,
}

impl Schema {
    /// Builds a schema, deriving the real/discrete field counts.
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        let real_count = fields
            .iter()
            .filter(|f| f.kind() == FieldKind::Continuous)
            .count();
        let discrete_count = fields.iter().filter(|f| f.kind().is_discrete()).count();
        Self {
            fields,
            real_count,
            discrete_count,
        }
    }

    /// All field descriptors in order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Number of real-valued fields per record.
    pub fn real_count(&self) -> usize {
        self.real_count
    }

    /// Number of discrete fields per record.
    pub fn discrete_count(&self) -> usize {
        self.discrete_count
    }

    /// Derives the per-field distance weights, aligned by position within
    /// each field family.
    pub fn weights(&self) -> Weights {
        let real = self
            .fields
            .iter()
            .filter(|f| f.kind() == FieldKind::Continuous)
            .map(|f| f64::from(f.weight()))
            .collect();
        let discrete = self
            .fields
            .iter()
            .filter(|f| f.kind().is_discrete())
            .map(|f| f64::from(f.weight()))
            .collect();
        Weights::new(real, discrete)
    }
}
