// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! YAML mapping configuration for a [`ResolverContext`].
//!
//! # Example YAML
//!
//! ```yaml
//! representations:
//!   HLAinteger128BE: long
//!   HLAoctetPairLE: character
//!
//! datatypes:
//!   HLAlogicalTime:
//!     type_name: Instant
//!     imports: [java.time.Instant]
//!   WorldLocationStruct:
//!     type_name: Vector3d
//! ```
//!
//! Applying a configuration performs the same additive, last-writer-wins
//! registrations as calling the registration methods directly.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::resolver::{ResolverContext, ScalarKind};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("representation {representation}: {reason}")]
    UnknownScalarKind { representation: String, reason: String },
}

/// Root YAML document structure.
#[derive(Debug, Deserialize, Default)]
struct YamlMappingDocument {
    #[serde(default)]
    representations: BTreeMap<String, String>,

    #[serde(default)]
    datatypes: BTreeMap<String, YamlDatatype>,
}

#[derive(Debug, Deserialize)]
struct YamlDatatype {
    type_name: String,
    #[serde(default)]
    imports: Vec<String>,
}

/// A datatype override entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatatypeEntry {
    pub type_name: String,
    pub imports: Vec<String>,
}

/// Validated mapping configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingConfig {
    pub representations: BTreeMap<String, ScalarKind>,
    pub datatypes: BTreeMap<String, DatatypeEntry>,
}

impl MappingConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let doc: YamlMappingDocument = serde_yaml::from_str(yaml)?;

        let representations = doc
            .representations
            .into_iter()
            .map(|(representation, kind)| match kind.parse::<ScalarKind>() {
                Ok(kind) => Ok((representation, kind)),
                Err(reason) => Err(ConfigError::UnknownScalarKind {
                    representation,
                    reason,
                }),
            })
            .collect::<Result<_, _>>()?;

        let datatypes = doc
            .datatypes
            .into_iter()
            .map(|(name, entry)| {
                (
                    name,
                    DatatypeEntry {
                        type_name: entry.type_name,
                        imports: entry.imports,
                    },
                )
            })
            .collect();

        Ok(Self {
            representations,
            datatypes,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("[omt] loading mapping config {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn is_empty(&self) -> bool {
        self.representations.is_empty() && self.datatypes.is_empty()
    }
}

impl ResolverContext {
    /// Register every entry of `config`.
    pub fn apply_config(&self, config: &MappingConfig) {
        for (name, &kind) in &config.representations {
            self.register_representation(name.as_str(), kind);
        }
        for (name, entry) in &config.datatypes {
            self.register_datatype(name.as_str(), entry.type_name.as_str(), entry.imports.iter().map(String::as_str));
        }
    }

    /// Context with the standard catalogue plus the entries of a YAML file.
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let config = MappingConfig::from_file(path)?;
        let ctx = Self::new();
        ctx.apply_config(&config);
        Ok(ctx)
    }
}
