// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! In-memory OMT schema tree.
//!
//! A [`Module`] is one parsed FOM document. Modules are immutable once a
//! binding has produced them; every lookup in this crate is a read-only walk
//! over these types, so they are freely shareable across threads.
//!
//! ```text
//! Module
//!  +-- objects: ObjectClass (HLAobjectRoot)
//!  |     +-- attributes, child ObjectClass ...
//!  +-- interactions: InteractionClass (HLAinteractionRoot)
//!  |     +-- parameters, child InteractionClass ...
//!  +-- transportations: [Transportation]
//!  +-- data_types: DataTypes
//!  |     +-- basic / simple / enumerated / array / fixed record / variant record
//!  +-- sections: [Element]   (unmodeled top-level sections, kept verbatim)
//! ```
//!
//! XML attributes on modeled elements (`notes`, `idtag`, ...) ride along in
//! each node's [`Annotations`] so a document writes back out with them.

use std::collections::BTreeMap;

mod class;
mod datatype;

pub use class::{Attribute, ClassNode, InteractionClass, Member, ObjectClass, Parameter};
pub use datatype::{
    Alternative, ArrayData, BasicData, DataTypes, Enumerator, EnumeratedData, Field,
    FixedRecordData, SimpleData, VariantRecordData,
};

/// Qualified attribute name and value, in document order.
pub type XmlAttributes = Vec<(String, String)>;

/// XML attributes carried by a modeled element and its leaf children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Annotations {
    /// Attributes on the element itself.
    pub element: XmlAttributes,
    /// Attributes on leaf children, keyed by leaf tag and occurrence index.
    pub leaves: BTreeMap<(String, usize), XmlAttributes>,
}

impl Annotations {
    pub fn is_empty(&self) -> bool {
        self.element.is_empty() && self.leaves.is_empty()
    }

    /// Value of an attribute on the element itself.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.element
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// `notes` reference on the element itself.
    pub fn notes(&self) -> Option<&str> {
        self.get("notes")
    }

    /// Attributes on the `index`-th `tag` leaf child.
    pub fn leaf(&self, tag: &str, index: usize) -> &[(String, String)] {
        self.leaves
            .get(&(tag.to_string(), index))
            .map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.element.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_leaf_attribute(
        mut self,
        tag: impl Into<String>,
        index: usize,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.leaves
            .entry((tag.into(), index))
            .or_default()
            .push((name.into(), value.into()));
        self
    }
}

/// Anything addressed by a unique name within its collection.
pub trait Named {
    fn name(&self) -> &str;
}

/// Linear search of a named collection; first match wins.
pub(crate) fn find_named<'a, T: Named>(items: &'a [T], name: &str) -> Option<&'a T> {
    items.iter().find(|item| item.name() == name)
}

// ---------------------------------------------------------------------------
// Module
// ---------------------------------------------------------------------------

/// One parsed OMT document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Module {
    /// Namespace declarations on the root element, in document order.
    pub namespaces: Vec<Namespace>,
    /// Non-namespace attributes on the root element (qualified names).
    pub attributes: XmlAttributes,
    /// Attributes on the `<objects>`, `<interactions>` and `<transportations>`
    /// section elements, keyed by section name.
    pub section_attributes: BTreeMap<String, XmlAttributes>,
    /// Root of the object class tree (`<objects>`).
    pub objects: Option<ObjectClass>,
    /// Root of the interaction class tree (`<interactions>`).
    pub interactions: Option<InteractionClass>,
    /// `<transportations>`; `None` when the section is absent.
    pub transportations: Option<Vec<Transportation>>,
    /// `<dataTypes>`; `None` when the section is absent.
    pub data_types: Option<DataTypes>,
    /// Top-level sections this crate does not model, preserved verbatim.
    pub sections: Vec<Element>,
}

impl Module {
    /// Empty module in the IEEE 1516-2010 namespace.
    pub fn new() -> Self {
        Self {
            namespaces: vec![Namespace::default_ns(crate::mim::OMT_2010_NAMESPACE)],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_objects(mut self, root: ObjectClass) -> Self {
        self.objects = Some(root);
        self
    }

    #[must_use]
    pub fn with_interactions(mut self, root: InteractionClass) -> Self {
        self.interactions = Some(root);
        self
    }

    #[must_use]
    pub fn with_data_types(mut self, data_types: DataTypes) -> Self {
        self.data_types = Some(data_types);
        self
    }

    #[must_use]
    pub fn with_transportation(mut self, transportation: Transportation) -> Self {
        self.transportations
            .get_or_insert_with(Vec::new)
            .push(transportation);
        self
    }

    /// Model identification name, when the module carries one.
    pub fn model_name(&self) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name == "modelIdentification")
            .and_then(|s| s.child("name"))
            .and_then(|n| n.text.as_deref())
    }

    /// Look up a transportation type declared in this module.
    pub fn transportation(&self, name: &str) -> Option<&Transportation> {
        self.transportations
            .as_deref()
            .and_then(|list| find_named(list, name))
    }
}

/// A namespace declaration (`xmlns` or `xmlns:prefix`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub prefix: Option<String>,
    pub uri: String,
}

impl Namespace {
    pub fn default_ns(uri: impl Into<String>) -> Self {
        Self {
            prefix: None,
            uri: uri.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Transportation
// ---------------------------------------------------------------------------

/// A transportation type (`HLAreliable`, `HLAbestEffort`, or user defined).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Transportation {
    pub name: String,
    pub reliable: Option<String>,
    pub semantics: Option<String>,
    pub annotations: Annotations,
}

impl Transportation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Named for Transportation {
    fn name(&self) -> &str {
        &self.name
    }
}

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// Generic XML element, used for sections outside the modeled subset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: XmlAttributes,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }
}
