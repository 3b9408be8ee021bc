// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Datatype section of an OMT module.

use super::{find_named, Annotations, Named};
use crate::cardinality::{self, Cardinality};

/// `<dataTypes>`: independent collections per datatype category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTypes {
    pub basic_data_representations: Vec<BasicData>,
    pub simple_data_types: Vec<SimpleData>,
    pub enumerated_data_types: Vec<EnumeratedData>,
    pub array_data_types: Vec<ArrayData>,
    pub fixed_record_data_types: Vec<FixedRecordData>,
    pub variant_record_data_types: Vec<VariantRecordData>,
    /// Attributes on `<dataTypes>` and on its group elements.
    pub annotations: Annotations,
}

impl DataTypes {
    pub fn basic_data(&self, name: &str) -> Option<&BasicData> {
        find_named(&self.basic_data_representations, name)
    }

    pub fn simple_data(&self, name: &str) -> Option<&SimpleData> {
        find_named(&self.simple_data_types, name)
    }

    pub fn enumerated_data(&self, name: &str) -> Option<&EnumeratedData> {
        find_named(&self.enumerated_data_types, name)
    }

    pub fn array_data(&self, name: &str) -> Option<&ArrayData> {
        find_named(&self.array_data_types, name)
    }

    pub fn fixed_record_data(&self, name: &str) -> Option<&FixedRecordData> {
        find_named(&self.fixed_record_data_types, name)
    }

    pub fn variant_record_data(&self, name: &str) -> Option<&VariantRecordData> {
        find_named(&self.variant_record_data_types, name)
    }

    pub fn is_empty(&self) -> bool {
        self.basic_data_representations.is_empty()
            && self.simple_data_types.is_empty()
            && self.enumerated_data_types.is_empty()
            && self.array_data_types.is_empty()
            && self.fixed_record_data_types.is_empty()
            && self.variant_record_data_types.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Basic data representations
// ---------------------------------------------------------------------------

/// A basic wire encoding (`HLAinteger32BE`, `HLAoctet`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicData {
    pub name: String,
    pub size: Option<String>,
    pub interpretation: Option<String>,
    pub endian: Option<String>,
    pub encoding: Option<String>,
    pub annotations: Annotations,
}

// ---------------------------------------------------------------------------
// Simple
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleData {
    pub name: String,
    pub representation: String,
    pub units: Option<String>,
    pub resolution: Option<String>,
    pub accuracy: Option<String>,
    pub semantics: Option<String>,
    pub annotations: Annotations,
}

impl SimpleData {
    pub fn new(name: impl Into<String>, representation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            representation: representation.into(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Enumerated
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enumerator {
    pub name: String,
    pub values: Vec<String>,
    pub annotations: Annotations,
}

impl Enumerator {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: vec![value.into()],
            annotations: Annotations::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumeratedData {
    pub name: String,
    pub representation: String,
    pub semantics: Option<String>,
    pub enumerators: Vec<Enumerator>,
    pub annotations: Annotations,
}

impl EnumeratedData {
    pub fn new(name: impl Into<String>, representation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            representation: representation.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_enumerator(mut self, enumerator: Enumerator) -> Self {
        self.enumerators.push(enumerator);
        self
    }

    pub fn enumerator(&self, name: &str) -> Option<&Enumerator> {
        self.enumerators.iter().find(|e| e.name == name)
    }
}

// ---------------------------------------------------------------------------
// Array
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayData {
    pub name: String,
    /// Element datatype name.
    pub data_type: String,
    pub cardinality: String,
    pub encoding: String,
    pub semantics: Option<String>,
    pub annotations: Annotations,
}

impl ArrayData {
    pub fn new(
        name: impl Into<String>,
        data_type: impl Into<String>,
        cardinality: impl Into<String>,
        encoding: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            cardinality: cardinality.into(),
            encoding: encoding.into(),
            ..Self::default()
        }
    }

    /// Parsed cardinality of this array.
    pub fn cardinality_range(&self) -> crate::Result<Cardinality> {
        cardinality::parse(&self.cardinality)
    }
}

// ---------------------------------------------------------------------------
// Fixed record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub data_type: String,
    pub semantics: Option<String>,
    pub annotations: Annotations,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedRecordData {
    pub name: String,
    pub encoding: Option<String>,
    pub semantics: Option<String>,
    pub fields: Vec<Field>,
    pub annotations: Annotations,
}

impl FixedRecordData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            encoding: Some(crate::mim::HLA_FIXED_RECORD.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

// ---------------------------------------------------------------------------
// Variant record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alternative {
    /// Discriminant enumerator(s) selecting this alternative.
    pub enumerator: String,
    pub name: String,
    pub data_type: Option<String>,
    pub semantics: Option<String>,
    pub annotations: Annotations,
}

impl Alternative {
    pub fn new(
        enumerator: impl Into<String>,
        name: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        Self {
            enumerator: enumerator.into(),
            name: name.into(),
            data_type: Some(data_type.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantRecordData {
    pub name: String,
    /// Name of the discriminant.
    pub discriminant: String,
    /// Datatype of the discriminant.
    pub data_type: String,
    pub alternatives: Vec<Alternative>,
    pub encoding: Option<String>,
    pub semantics: Option<String>,
    pub annotations: Annotations,
}

impl VariantRecordData {
    pub fn new(
        name: impl Into<String>,
        discriminant: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            discriminant: discriminant.into(),
            data_type: data_type.into(),
            encoding: Some(crate::mim::HLA_VARIANT_RECORD.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_alternative(mut self, alternative: Alternative) -> Self {
        self.alternatives.push(alternative);
        self
    }
}

macro_rules! impl_named {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Named for $ty {
                fn name(&self) -> &str {
                    &self.name
                }
            }
        )*
    };
}

impl_named!(
    BasicData,
    SimpleData,
    EnumeratedData,
    ArrayData,
    FixedRecordData,
    VariantRecordData,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mim;

    #[test]
    fn test_category_lookups_are_independent() {
        let data_types = DataTypes {
            simple_data_types: vec![SimpleData::new("Velocity", mim::HLA_FLOAT64_BE)],
            fixed_record_data_types: vec![FixedRecordData::new("Velocity")],
            ..DataTypes::default()
        };

        assert!(data_types.simple_data("Velocity").is_some());
        assert!(data_types.fixed_record_data("Velocity").is_some());
        assert!(data_types.variant_record_data("Velocity").is_none());
        assert!(data_types.enumerated_data("Velocity").is_none());
    }

    #[test]
    fn test_array_cardinality_range() {
        let fixed = ArrayData::new("Vec3", mim::HLA_FLOAT64_BE, "3", mim::HLA_FIXED_ARRAY);
        let range = fixed.cardinality_range().expect("literal cardinality parses");
        assert_eq!((range.min, range.max), (3, 3));

        let bad = ArrayData::new("Bad", mim::HLA_FLOAT64_BE, "[1..]", mim::HLA_FIXED_ARRAY);
        assert!(bad.cardinality_range().is_err());
    }

    #[test]
    fn test_enumerator_lookup() {
        let boolean = EnumeratedData::new(mim::HLA_BOOLEAN, mim::HLA_INTEGER32_BE)
            .with_enumerator(Enumerator::new(mim::HLA_FALSE, "0"))
            .with_enumerator(Enumerator::new(mim::HLA_TRUE, "1"));

        assert_eq!(
            boolean.enumerator(mim::HLA_TRUE).map(|e| e.values.clone()),
            Some(vec!["1".to_string()])
        );
        assert!(boolean.enumerator("HLAmaybe").is_none());
    }
}
