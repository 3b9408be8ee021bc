// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! IEEE 1516 (HLA) Object Model Template resolution.
//!
//! Loads FOM modules and answers questions about them across an ordered set
//! of modules: which module declares a class, what attributes an object
//! class inherits, and which host type an OMT datatype maps to.
//!
//! # Features
//!
//! - **Class registry**: dotted-name lookup of object and interaction
//!   classes, hiding scaffolding nodes that only anchor cross-module
//!   extensions
//! - **Member aggregation**: attributes and parameters along the ancestor chain
//! - **Datatype resolution**: OMT datatypes to JVM-style host types, with
//!   runtime overrides
//! - **Identifier codec**: reversible OMT name to host identifier mapping
//! - **XML binding** (`xml` feature): lossless parse and serialize of
//!   IEEE 1516-2010 documents
//! - **Mapping config** (`yaml-config` feature): override tables from YAML
//!
//! # Architecture
//!
//! ```text
//!   XML document --(binding)--> Module ... Module
//!                                  \        /
//!                                  ModuleSet (first match wins)
//!                                 /    |     \
//!                         registry  members  ResolverContext --> HostType
//! ```
//!
//! # Example
//!
//! ```no_run
//! use omt::{Boxing, ModuleSet, ResolverContext};
//!
//! let mim = omt::binding::read_module("HLAstandardMIM.xml")?;
//! let rpr = omt::binding::read_module("RPR-Base_v2.0.xml")?;
//! let modules = ModuleSet::from([&mim, &rpr]);
//!
//! let attrs = modules.object_class_attributes("HLAobjectRoot.BaseEntity");
//! let ctx = ResolverContext::new();
//! let host = ctx.resolve(&modules, "WorldLocationStruct", Boxing::Unboxed)?;
//! # Ok::<(), omt::Error>(())
//! ```

pub mod cardinality;
pub mod datatypes;
pub mod error;
pub mod members;
pub mod mim;
pub mod model;
pub mod module_set;
pub mod naming;
pub mod registry;
pub mod resolver;

#[cfg(feature = "xml")]
pub mod binding;

#[cfg(feature = "yaml-config")]
pub mod config;

pub use cardinality::Cardinality;
pub use error::{DocumentError, Error, Result};
pub use members::inherited_members;
pub use model::{
    Alternative, Annotations, ArrayData, Attribute, BasicData, ClassNode, DataTypes, Element,
    EnumeratedData, Enumerator, Field, FixedRecordData, InteractionClass, Member, Module, Named,
    Namespace, ObjectClass, Parameter, SimpleData, Transportation, VariantRecordData, XmlAttributes,
};
pub use module_set::ModuleSet;
pub use registry::{find_class, Scaffolding};
pub use resolver::{ArrayStyle, Boxing, DatatypeMapping, HostType, ResolverContext, ScalarKind};

#[cfg(feature = "xml")]
pub use binding::{DocumentBinding, XmlBinding};

#[cfg(feature = "yaml-config")]
pub use config::{ConfigError, MappingConfig};
