// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Host type descriptors produced by datatype resolution.
//!
//! The host is a JVM-style type system: scalars come in an unboxed
//! (`int`) and a boxed (`Integer`) spelling, lists are generic wrappers and
//! fixed arrays carry `[]` suffixes.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Import required by [`HostType::List`].
pub const LIST_IMPORT: &str = "java.util.List";

/// Whether scalar results use the boxed spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boxing {
    #[default]
    Unboxed,
    Boxed,
}

impl Boxing {
    pub const fn is_boxed(self) -> bool {
        matches!(self, Boxing::Boxed)
    }
}

/// How array dimensions are expressed on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayStyle {
    /// Nested generic lists of the boxed element type.
    List,
    /// `[]` suffixes on the unboxed element type.
    Fixed,
}

/// Host scalar kinds a representation can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    Character,
    Boolean,
}

impl ScalarKind {
    // @audit-ok: Simple pattern matching - kind to host spelling table
    pub const fn unboxed_name(self) -> &'static str {
        match self {
            ScalarKind::Byte => "byte",
            ScalarKind::Short => "short",
            ScalarKind::Integer => "int",
            ScalarKind::Long => "long",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
            ScalarKind::Character => "char",
            ScalarKind::Boolean => "boolean",
        }
    }

    pub const fn boxed_name(self) -> &'static str {
        match self {
            ScalarKind::Byte => "Byte",
            ScalarKind::Short => "Short",
            ScalarKind::Integer => "Integer",
            ScalarKind::Long => "Long",
            ScalarKind::Float => "Float",
            ScalarKind::Double => "Double",
            ScalarKind::Character => "Character",
            ScalarKind::Boolean => "Boolean",
        }
    }

    pub const fn name(self, boxing: Boxing) -> &'static str {
        if boxing.is_boxed() {
            self.boxed_name()
        } else {
            self.unboxed_name()
        }
    }
}

impl FromStr for ScalarKind {
    type Err = String;

    /// Case-insensitive; accepts the kind names and the unboxed spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "byte" => Ok(ScalarKind::Byte),
            "short" => Ok(ScalarKind::Short),
            "integer" | "int" => Ok(ScalarKind::Integer),
            "long" => Ok(ScalarKind::Long),
            "float" => Ok(ScalarKind::Float),
            "double" => Ok(ScalarKind::Double),
            "character" | "char" => Ok(ScalarKind::Character),
            "boolean" => Ok(ScalarKind::Boolean),
            other => Err(format!("Invalid scalar kind: {}", other)),
        }
    }
}

/// A host type registered for a specific OMT datatype name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatatypeMapping {
    pub type_name: String,
    pub imports: BTreeSet<String>,
}

impl DatatypeMapping {
    pub fn new<I, S>(type_name: impl Into<String>, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            type_name: type_name.into(),
            imports: imports.into_iter().map(Into::into).collect(),
        }
    }
}

/// Result of resolving an OMT datatype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostType {
    Scalar { kind: ScalarKind, boxing: Boxing },
    /// Character arrays.
    String,
    /// Records and enumerations: the OMT datatype name itself.
    Named(String),
    /// Supplied by an override registration.
    Mapped(DatatypeMapping),
    List(Box<HostType>),
    Array(Box<HostType>),
}

impl HostType {
    pub const fn scalar(kind: ScalarKind, boxing: Boxing) -> Self {
        HostType::Scalar { kind, boxing }
    }

    /// Wrap `self` in `dimension` generic lists.
    #[must_use]
    pub fn into_list(self, dimension: usize) -> Self {
        (0..dimension).fold(self, |inner, _| HostType::List(Box::new(inner)))
    }

    /// Add `dimension` fixed array suffixes to `self`.
    #[must_use]
    pub fn into_array(self, dimension: usize) -> Self {
        (0..dimension).fold(self, |inner, _| HostType::Array(Box::new(inner)))
    }

    /// Imports needed to spell this type.
    pub fn imports(&self) -> BTreeSet<String> {
        let mut imports = BTreeSet::new();
        let mut current = self;
        loop {
            match current {
                HostType::List(inner) => {
                    imports.insert(LIST_IMPORT.to_string());
                    current = inner;
                }
                HostType::Array(inner) => current = inner,
                HostType::Mapped(mapping) => {
                    imports.extend(mapping.imports.iter().cloned());
                    break;
                }
                HostType::Scalar { .. } | HostType::String | HostType::Named(_) => break,
            }
        }
        imports
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostType::Scalar { kind, boxing } => f.write_str(kind.name(*boxing)),
            HostType::String => f.write_str("String"),
            HostType::Named(name) => f.write_str(name),
            HostType::Mapped(mapping) => f.write_str(&mapping.type_name),
            HostType::List(inner) => write!(f, "List<{}>", inner),
            HostType::Array(inner) => write!(f, "{}[]", inner),
        }
    }
}
