// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Document binding: OMT XML text to and from [`Module`] trees.
//!
//! [`DocumentBinding`] is the seam between the resolution core and the
//! document format. [`XmlBinding`] implements it for IEEE 1516-2010
//! `objectModel` documents; the free functions below go through a shared
//! default instance created on first use.
//!
//! # Example
//!
//! ```no_run
//! let mim = omt::binding::read_module("HLAstandardMIM.xml")?;
//! let xml = omt::binding::module_to_string(&mim, true);
//! # Ok::<(), omt::Error>(())
//! ```

mod reader;
mod writer;

use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{DocumentError, Result};
use crate::model::Module;

/// Default indentation step for pretty output.
pub const DEFAULT_INDENT: usize = 2;

/// Parses and serializes whole modules.
pub trait DocumentBinding: Send + Sync {
    fn parse(&self, source: &[u8]) -> core::result::Result<Module, DocumentError>;

    /// Write `module` to `sink`; `pretty` selects indented output.
    fn serialize(
        &self,
        module: &Module,
        pretty: bool,
        sink: &mut dyn Write,
    ) -> core::result::Result<(), DocumentError>;
}

/// XML binding for IEEE 1516-2010 documents.
#[derive(Debug, Clone)]
pub struct XmlBinding {
    indent: usize,
}

impl Default for XmlBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlBinding {
    pub fn new() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }

    /// Spaces per nesting level in pretty output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn to_xml(&self, module: &Module, pretty: bool) -> String {
        writer::write_module(module, pretty, self.indent)
    }
}

impl DocumentBinding for XmlBinding {
    fn parse(&self, source: &[u8]) -> core::result::Result<Module, DocumentError> {
        let text = std::str::from_utf8(source)?;
        reader::read_module(text)
    }

    fn serialize(
        &self,
        module: &Module,
        pretty: bool,
        sink: &mut dyn Write,
    ) -> core::result::Result<(), DocumentError> {
        let xml = self.to_xml(module, pretty);
        sink.write_all(xml.as_bytes())?;
        sink.flush()?;
        log::debug!(
            "[omt] serialized module {} ({} bytes)",
            module.model_name().unwrap_or("<unnamed>"),
            xml.len()
        );
        Ok(())
    }
}

static DEFAULT_BINDING: OnceLock<XmlBinding> = OnceLock::new();

/// Shared binding used by the convenience functions.
pub fn default_binding() -> &'static XmlBinding {
    DEFAULT_BINDING.get_or_init(|| {
        log::debug!("[omt] initializing default XML binding");
        XmlBinding::new()
    })
}

// ---------------------------------------------------------------------------
// Convenience
// ---------------------------------------------------------------------------

pub fn read_module<P: AsRef<Path>>(path: P) -> Result<Module> {
    let path = path.as_ref();
    log::debug!("[omt] reading module {}", path.display());
    let bytes = fs::read(path).map_err(DocumentError::from)?;
    Ok(default_binding().parse(&bytes)?)
}

pub fn read_module_from<R: Read>(mut reader: R) -> Result<Module> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(DocumentError::from)?;
    Ok(default_binding().parse(&bytes)?)
}

pub fn parse_module(xml: &str) -> Result<Module> {
    Ok(default_binding().parse(xml.as_bytes())?)
}

pub fn write_module<W: Write>(module: &Module, mut sink: W, pretty: bool) -> Result<()> {
    Ok(default_binding().serialize(module, pretty, &mut sink)?)
}

pub fn write_module_to_file<P: AsRef<Path>>(module: &Module, path: P, pretty: bool) -> Result<()> {
    let file = fs::File::create(path.as_ref()).map_err(DocumentError::from)?;
    write_module(module, std::io::BufWriter::new(file), pretty)
}

pub fn module_to_string(module: &Module, pretty: bool) -> String {
    default_binding().to_xml(module, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::mim;
    use crate::model::{Attribute, ObjectClass};

    fn sample() -> Module {
        Module::new().with_objects(
            ObjectClass::new(mim::HLA_OBJECT_ROOT)
                .with_attribute(Attribute::new("HLAprivilegeToDeleteObject", mim::HLA_TOKEN)),
        )
    }

    #[test]
    fn test_default_binding_is_shared() {
        assert!(std::ptr::eq(default_binding(), default_binding()));
    }

    #[test]
    fn test_string_round_trip() {
        let module = sample();
        for pretty in [true, false] {
            let xml = module_to_string(&module, pretty);
            assert_eq!(parse_module(&xml).unwrap(), module);
        }
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.xml");

        write_module_to_file(&sample(), &path, true).unwrap();
        assert_eq!(read_module(&path).unwrap(), sample());

        let bytes = fs::read(&path).unwrap();
        assert_eq!(read_module_from(bytes.as_slice()).unwrap(), sample());
    }

    #[test]
    fn test_custom_indent() {
        let binding = XmlBinding::new().with_indent(4);
        let mut out = Vec::new();
        binding.serialize(&sample(), true, &mut out).unwrap();
        let xml = String::from_utf8(out).unwrap();
        assert!(xml.contains("\n    <objects>"));
        assert_eq!(binding.parse(xml.as_bytes()).unwrap(), sample());
    }

    #[test]
    fn test_errors_surface_as_document_errors() {
        assert!(matches!(
            read_module("/nonexistent/fom.xml"),
            Err(Error::Document(DocumentError::Io(_)))
        ));
        assert!(matches!(
            default_binding().parse(&[0xff, 0xfe]),
            Err(DocumentError::Utf8(_))
        ));
    }
}
