// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! OMT datatype to host type resolution.
//!
//! A [`ResolverContext`] owns the two mutable tables consulted during
//! resolution: the representation catalogue (basic representation name to
//! host scalar) and the datatype overrides registered by generator tooling.
//! Both sit behind one `RwLock`, so registrations serialize against each
//! other while resolutions proceed concurrently.
//!
//! Resolution order for a datatype name, first hit wins:
//!
//! 1. datatype override
//! 2. simple datatype, through its representation
//! 3. fixed record (name passes through)
//! 4. variant record (name passes through)
//! 5. enumerated datatype (`HLAboolean` becomes the host boolean)
//! 6. array of characters (host string)
//! 7. otherwise [`Error::UnknownDatatype`]

mod host_type;

pub use host_type::{ArrayStyle, Boxing, DatatypeMapping, HostType, ScalarKind, LIST_IMPORT};

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::mim;
use crate::module_set::ModuleSet;

/// Representation catalogue seeded into every new context.
pub const STANDARD_REPRESENTATIONS: [(&str, ScalarKind); 10] = [
    (mim::HLA_OCTET, ScalarKind::Byte),
    (mim::HLA_INTEGER16_BE, ScalarKind::Short),
    (mim::HLA_UNSIGNED_INTEGER16_BE, ScalarKind::Short),
    (mim::HLA_INTEGER32_BE, ScalarKind::Integer),
    (mim::HLA_UNSIGNED_INTEGER32_BE, ScalarKind::Integer),
    (mim::HLA_INTEGER64_BE, ScalarKind::Long),
    (mim::HLA_UNSIGNED_INTEGER64_BE, ScalarKind::Long),
    (mim::HLA_FLOAT32_BE, ScalarKind::Float),
    (mim::HLA_FLOAT64_BE, ScalarKind::Double),
    (mim::HLA_OCTET_PAIR_BE, ScalarKind::Character),
];

#[derive(Debug, Default)]
struct MappingTables {
    representations: HashMap<String, ScalarKind>,
    datatypes: HashMap<String, DatatypeMapping>,
}

/// Mutable resolution tables plus the resolution operations that read them.
#[derive(Debug)]
pub struct ResolverContext {
    tables: RwLock<MappingTables>,
}

impl Default for ResolverContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverContext {
    /// Context seeded with [`STANDARD_REPRESENTATIONS`] and no overrides.
    pub fn new() -> Self {
        let representations = STANDARD_REPRESENTATIONS
            .iter()
            .map(|&(name, kind)| (name.to_string(), kind))
            .collect();
        Self {
            tables: RwLock::new(MappingTables {
                representations,
                datatypes: HashMap::new(),
            }),
        }
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Map a basic representation to a host scalar. Replaces any previous
    /// mapping for `name`.
    pub fn register_representation(&self, name: impl Into<String>, kind: ScalarKind) {
        let name = name.into();
        log::debug!("[omt] register representation {} -> {:?}", name, kind);
        if let Some(previous) = self.tables.write().representations.insert(name, kind) {
            log::trace!("[omt] replaced representation mapping {:?}", previous);
        }
    }

    /// Map a datatype name straight to a host type. Overrides take precedence
    /// over everything the module set declares.
    pub fn register_datatype<I, S>(&self, name: impl Into<String>, type_name: impl Into<String>, imports: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let mapping = DatatypeMapping::new(type_name, imports);
        log::debug!("[omt] register datatype {} -> {}", name, mapping.type_name);
        self.tables.write().datatypes.insert(name, mapping);
    }

    pub fn datatype_override(&self, name: &str) -> Option<DatatypeMapping> {
        self.tables.read().datatypes.get(name).cloned()
    }

    pub fn representation(&self, name: &str) -> Option<ScalarKind> {
        self.tables.read().representations.get(name).copied()
    }

    // -----------------------------------------------------------------------
    // Resolution
    // -----------------------------------------------------------------------

    /// Host scalar for a basic representation name.
    pub fn resolve_representation(&self, name: &str, boxing: Boxing) -> Result<HostType> {
        self.representation(name)
            .map(|kind| HostType::scalar(kind, boxing))
            .ok_or_else(|| Error::UnsupportedRepresentation(name.to_string()))
    }

    /// Host type for an OMT datatype name.
    pub fn resolve(&self, modules: &ModuleSet<'_>, name: &str, boxing: Boxing) -> Result<HostType> {
        if let Some(mapping) = self.datatype_override(name) {
            log::trace!("[omt] {} resolved by override", name);
            return Ok(HostType::Mapped(mapping));
        }

        if let Some(simple) = modules.simple_data(name) {
            log::trace!("[omt] {} is simple over {}", name, simple.representation);
            return self.resolve_representation(&simple.representation, boxing);
        }

        if modules.fixed_record_data(name).is_some() {
            log::trace!("[omt] {} is a fixed record", name);
            return Ok(HostType::Named(name.to_string()));
        }

        if modules.variant_record_data(name).is_some() {
            log::trace!("[omt] {} is a variant record", name);
            return Ok(HostType::Named(name.to_string()));
        }

        if modules.enumerated_data(name).is_some() {
            log::trace!("[omt] {} is enumerated", name);
            return Ok(enumeration_host_type(name, boxing));
        }

        if let Some(array) = modules.array_data(name) {
            log::trace!("[omt] {} is an array of {}", name, array.data_type);
            if mim::CHARACTER_TYPES.contains(&array.data_type.as_str()) {
                return Ok(HostType::String);
            }
            return Err(Error::InvalidArrayComposition {
                array: name.to_string(),
                element: array.data_type.clone(),
            });
        }

        Err(Error::UnknownDatatype(name.to_string()))
    }

    /// Host type for a datatype the caller already knows is enumerated.
    pub fn resolve_enumeration(
        &self,
        modules: &ModuleSet<'_>,
        name: &str,
        boxing: Boxing,
    ) -> Result<HostType> {
        match modules.enumerated_data(name) {
            Some(_) => Ok(enumeration_host_type(name, boxing)),
            None => Err(Error::NotFound {
                kind: "enumerated datatype",
                name: name.to_string(),
            }),
        }
    }

    /// Host type for `dimension` nested arrays of the datatype `name`.
    ///
    /// A dimension of zero is a plain use of `name`. List style wraps the
    /// boxed element type; fixed style suffixes the unboxed one, so `boxing`
    /// only matters for dimension zero.
    pub fn resolve_array(
        &self,
        modules: &ModuleSet<'_>,
        name: &str,
        dimension: usize,
        style: ArrayStyle,
        boxing: Boxing,
    ) -> Result<HostType> {
        if dimension == 0 {
            return self.resolve(modules, name, boxing);
        }
        match style {
            ArrayStyle::List => Ok(self.resolve(modules, name, Boxing::Boxed)?.into_list(dimension)),
            ArrayStyle::Fixed => Ok(self.resolve(modules, name, Boxing::Unboxed)?.into_array(dimension)),
        }
    }
}

fn enumeration_host_type(name: &str, boxing: Boxing) -> HostType {
    if name == mim::HLA_BOOLEAN {
        HostType::scalar(ScalarKind::Boolean, boxing)
    } else {
        HostType::Named(name.to_string())
    }
}
