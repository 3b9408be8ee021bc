// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error taxonomy for OMT resolution and document binding.
//!
//! Lookup-style operations (class registry, attribute aggregation, datatype
//! lookups) signal absence with `Option`. The variants below are reserved for
//! operations where a miss is a caller bug or a malformed FOM: type
//! resolution, cardinality parsing, document I/O and mapping configuration.

use thiserror::Error;

/// Errors returned by OMT operations.
#[derive(Debug, Error)]
pub enum Error {
    // ========================================================================
    // Lookup
    // ========================================================================
    /// A named item of the given kind is absent from every module searched.
    #[error("{kind} not found: {name}")]
    NotFound {
        /// What was looked for ("enumerated datatype", "object class", ...).
        kind: &'static str,
        /// The name that failed to resolve.
        name: String,
    },

    // ========================================================================
    // Datatype resolution
    // ========================================================================
    /// Cardinality text of an array datatype could not be parsed.
    #[error("malformed cardinality: {0:?}")]
    MalformedCardinality(String),

    /// No resolution step matched the datatype name.
    #[error("unknown datatype {0}")]
    UnknownDatatype(String),

    /// Representation name is not in the representation catalogue.
    #[error("unknown representation {0}")]
    UnsupportedRepresentation(String),

    /// An array datatype whose element is not a character type.
    #[error("expected character type for array {array}, but element is {element}")]
    InvalidArrayComposition {
        /// Name of the array datatype.
        array: String,
        /// Name of its element datatype.
        element: String,
    },

    // ========================================================================
    // External collaborators
    // ========================================================================
    /// Document binding failed to parse or serialize a module.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Mapping configuration could not be loaded.
    #[cfg(feature = "yaml-config")]
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}

/// Errors produced by a [`DocumentBinding`](crate::binding::DocumentBinding).
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Reading the source or writing the sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Source bytes are not UTF-8.
    #[error("document is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Source is not well-formed XML.
    #[cfg(feature = "xml")]
    #[error("failed to parse XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Well-formed document that does not have the OMT shape.
    #[error("invalid OMT document: {0}")]
    Structure(String),
}

/// Convenient alias for results using the crate [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_offending_name() {
        let err = Error::UnknownDatatype("Foo".to_string());
        assert_eq!(err.to_string(), "unknown datatype Foo");

        let err = Error::InvalidArrayComposition {
            array: "Vector".to_string(),
            element: "HLAfloat64BE".to_string(),
        };
        assert!(err.to_string().contains("Vector"));
        assert!(err.to_string().contains("HLAfloat64BE"));

        let err = Error::NotFound {
            kind: "enumerated datatype",
            name: "Color".to_string(),
        };
        assert_eq!(err.to_string(), "enumerated datatype not found: Color");
    }

    #[test]
    fn test_document_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.xml");
        let err: Error = DocumentError::from(io).into();
        assert!(matches!(err, Error::Document(DocumentError::Io(_))));
    }
}
