// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Datatype lookups by category, per module and across a module set.
//!
//! Each category gets three lookups: within one module, first match across
//! a module set, and the module that supplies that first match (for
//! follow-up lookups scoped to that module).

use std::collections::BTreeSet;

use crate::model::{
    ArrayData, BasicData, EnumeratedData, FixedRecordData, Module, SimpleData, VariantRecordData,
};
use crate::module_set::ModuleSet;

macro_rules! datatype_lookups {
    ($($ty:ty => $lookup:ident, $module_lookup:ident;)*) => {
        impl Module {
            $(
                pub fn $lookup(&self, name: &str) -> Option<&$ty> {
                    self.data_types.as_ref().and_then(|dt| dt.$lookup(name))
                }
            )*
        }

        impl<'a> ModuleSet<'a> {
            $(
                pub fn $lookup(&self, name: &str) -> Option<&'a $ty> {
                    self.find_first(|m| m.$lookup(name))
                }

                pub fn $module_lookup(&self, name: &str) -> Option<&'a Module> {
                    self.find_module(|m| m.$lookup(name))
                }
            )*
        }
    };
}

datatype_lookups! {
    BasicData => basic_data, basic_data_module;
    SimpleData => simple_data, simple_data_module;
    EnumeratedData => enumerated_data, enumerated_data_module;
    ArrayData => array_data, array_data_module;
    FixedRecordData => fixed_record_data, fixed_record_data_module;
    VariantRecordData => variant_record_data, variant_record_data_module;
}

impl<'a> ModuleSet<'a> {
    /// Names of every array datatype, in any module, whose encoding is one of
    /// `encodings`.
    pub fn array_datatypes_with_encoding(&self, encodings: &[&str]) -> BTreeSet<&'a str> {
        self.iter()
            .copied()
            .filter_map(|m| m.data_types.as_ref())
            .flat_map(|dt| dt.array_data_types.iter())
            .filter(|array| encodings.contains(&array.encoding.as_str()))
            .map(|array| array.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mim;
    use crate::model::DataTypes;

    fn module_with(data_types: DataTypes) -> Module {
        Module::new().with_data_types(data_types)
    }

    #[test]
    fn test_module_precedence() {
        let m1 = module_with(DataTypes {
            simple_data_types: vec![SimpleData::new("X", mim::HLA_INTEGER32_BE)],
            ..DataTypes::default()
        });
        let m2 = module_with(DataTypes {
            simple_data_types: vec![SimpleData::new("X", mim::HLA_FLOAT64_BE)],
            ..DataTypes::default()
        });

        let set = ModuleSet::from([&m1, &m2]);
        assert_eq!(set.simple_data("X").unwrap().representation, mim::HLA_INTEGER32_BE);
        assert!(std::ptr::eq(set.simple_data_module("X").unwrap(), &m1));

        let set = ModuleSet::from([&m2, &m1]);
        assert_eq!(set.simple_data("X").unwrap().representation, mim::HLA_FLOAT64_BE);
    }

    #[test]
    fn test_missing_section_and_name() {
        let empty = Module::new();
        assert!(empty.simple_data("X").is_none());

        let m = module_with(DataTypes {
            enumerated_data_types: vec![EnumeratedData::new(mim::HLA_BOOLEAN, mim::HLA_INTEGER32_BE)],
            ..DataTypes::default()
        });
        let set = ModuleSet::from([&empty, &m]);
        assert!(set.enumerated_data(mim::HLA_BOOLEAN).is_some());
        assert!(std::ptr::eq(set.enumerated_data_module(mim::HLA_BOOLEAN).unwrap(), &m));
        assert!(set.enumerated_data("RPRboolean").is_none());
        assert!(set.enumerated_data_module("RPRboolean").is_none());
        assert!(set.fixed_record_data(mim::HLA_BOOLEAN).is_none());
    }

    #[test]
    fn test_arrays_by_encoding() {
        let m1 = module_with(DataTypes {
            array_data_types: vec![
                ArrayData::new(mim::HLA_ASCII_STRING, mim::HLA_ASCII_CHAR, "Dynamic", mim::HLA_VARIABLE_ARRAY),
                ArrayData::new("Vec3", mim::HLA_FLOAT64_BE, "3", mim::HLA_FIXED_ARRAY),
            ],
            ..DataTypes::default()
        });
        let m2 = module_with(DataTypes {
            array_data_types: vec![ArrayData::new(
                "Waypoints",
                "Vec3",
                "Dynamic",
                mim::HLA_VARIABLE_ARRAY,
            )],
            ..DataTypes::default()
        });
        let set = ModuleSet::from([&m1, &m2]);

        let variable = set.array_datatypes_with_encoding(&[mim::HLA_VARIABLE_ARRAY]);
        assert_eq!(variable.into_iter().collect::<Vec<_>>(), [mim::HLA_ASCII_STRING, "Waypoints"]);

        let both = set.array_datatypes_with_encoding(&[mim::HLA_VARIABLE_ARRAY, mim::HLA_FIXED_ARRAY]);
        assert_eq!(both.len(), 3);
        assert!(set.array_datatypes_with_encoding(&[]).is_empty());
    }
}
