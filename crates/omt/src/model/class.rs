// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Object and interaction class trees.

use super::{Annotations, Module, Named};

/// A member declared at one class level (attribute or parameter).
pub trait Member: Named + PartialEq + 'static {}

/// Shared shape of object and interaction class nodes.
///
/// The registry walks both trees with the same algorithm; this trait is the
/// seam that lets it do so without duplicating the walk per class kind.
pub trait ClassNode: Sized + 'static {
    type Member: Member;

    /// Human readable kind, used in diagnostics.
    const KIND: &'static str;

    /// Root of this class kind's tree in `module`, if the section exists.
    fn tree_root(module: &Module) -> Option<&Self>;

    fn name(&self) -> &str;
    fn children(&self) -> &[Self];
    fn members(&self) -> &[Self::Member];
    fn semantics(&self) -> Option<&str>;
    fn sharing(&self) -> Option<&str>;

    /// Direct child with the given name.
    fn child(&self, name: &str) -> Option<&Self> {
        self.children().iter().find(|c| c.name() == name)
    }

    /// A placeholder node used only to anchor a cross-module extension:
    /// no members, no semantics and no sharing.
    fn is_scaffolding(&self) -> bool {
        self.members().is_empty() && self.semantics().is_none() && self.sharing().is_none()
    }
}

// ---------------------------------------------------------------------------
// Object classes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub name: String,
    pub data_type: Option<String>,
    pub update_type: Option<String>,
    pub update_condition: Option<String>,
    pub ownership: Option<String>,
    pub sharing: Option<String>,
    pub dimensions: Vec<String>,
    pub transportation: Option<String>,
    pub order: Option<String>,
    pub semantics: Option<String>,
    pub annotations: Annotations,
}

impl Attribute {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: Some(data_type.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_semantics(mut self, semantics: impl Into<String>) -> Self {
        self.semantics = Some(semantics.into());
        self
    }
}

impl Named for Attribute {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Member for Attribute {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectClass {
    pub name: String,
    pub sharing: Option<String>,
    pub semantics: Option<String>,
    pub attributes: Vec<Attribute>,
    pub children: Vec<ObjectClass>,
    pub annotations: Annotations,
}

impl ObjectClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sharing(mut self, sharing: impl Into<String>) -> Self {
        self.sharing = Some(sharing.into());
        self
    }

    #[must_use]
    pub fn with_semantics(mut self, semantics: impl Into<String>) -> Self {
        self.semantics = Some(semantics.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: ObjectClass) -> Self {
        self.children.push(child);
        self
    }
}

impl ClassNode for ObjectClass {
    type Member = Attribute;
    const KIND: &'static str = "object class";

    fn tree_root(module: &Module) -> Option<&Self> {
        module.objects.as_ref()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn members(&self) -> &[Attribute] {
        &self.attributes
    }

    fn semantics(&self) -> Option<&str> {
        self.semantics.as_deref()
    }

    fn sharing(&self) -> Option<&str> {
        self.sharing.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Interaction classes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub name: String,
    pub data_type: Option<String>,
    pub semantics: Option<String>,
    pub annotations: Annotations,
}

impl Parameter {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: Some(data_type.into()),
            ..Self::default()
        }
    }
}

impl Named for Parameter {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Member for Parameter {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionClass {
    pub name: String,
    pub sharing: Option<String>,
    pub dimensions: Vec<String>,
    pub transportation: Option<String>,
    pub order: Option<String>,
    pub semantics: Option<String>,
    pub parameters: Vec<Parameter>,
    pub children: Vec<InteractionClass>,
    pub annotations: Annotations,
}

impl InteractionClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sharing(mut self, sharing: impl Into<String>) -> Self {
        self.sharing = Some(sharing.into());
        self
    }

    #[must_use]
    pub fn with_semantics(mut self, semantics: impl Into<String>) -> Self {
        self.semantics = Some(semantics.into());
        self
    }

    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: InteractionClass) -> Self {
        self.children.push(child);
        self
    }
}

impl ClassNode for InteractionClass {
    type Member = Parameter;
    const KIND: &'static str = "interaction class";

    fn tree_root(module: &Module) -> Option<&Self> {
        module.interactions.as_ref()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn members(&self) -> &[Parameter] {
        &self.parameters
    }

    fn semantics(&self) -> Option<&str> {
        self.semantics.as_deref()
    }

    fn sharing(&self) -> Option<&str> {
        self.sharing.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaffolding_is_derived_from_content() {
        let bare = ObjectClass::new("BaseEntity");
        assert!(bare.is_scaffolding());

        assert!(!ObjectClass::new("A").with_semantics("x").is_scaffolding());
        assert!(!ObjectClass::new("A").with_sharing("PublishSubscribe").is_scaffolding());
        assert!(!ObjectClass::new("A")
            .with_attribute(Attribute::new("x", "HLAinteger32BE"))
            .is_scaffolding());

        // Children alone do not make a class concrete.
        let parent = ObjectClass::new("A").with_child(ObjectClass::new("B").with_semantics("s"));
        assert!(parent.is_scaffolding());
    }

    #[test]
    fn test_interaction_scaffolding() {
        assert!(InteractionClass::new("HLAinteractionRoot").is_scaffolding());
        assert!(!InteractionClass::new("Fire")
            .with_parameter(Parameter::new("EventIdentifier", "EventIdentifierStruct"))
            .is_scaffolding());
    }

    #[test]
    fn test_child_lookup() {
        let root = ObjectClass::new("HLAobjectRoot")
            .with_child(ObjectClass::new("BaseEntity"))
            .with_child(ObjectClass::new("EmbeddedSystem"));
        assert_eq!(root.child("EmbeddedSystem").map(|c| c.name.as_str()), Some("EmbeddedSystem"));
        assert!(root.child("PhysicalEntity").is_none());
    }
}
