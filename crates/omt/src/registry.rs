// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Class registry: fully-qualified class lookup within one module.
//!
//! A fully-qualified name (`HLAobjectRoot.BaseEntity.PhysicalEntity`) is a
//! path from the tree root through uniquely named children. Resolution is an
//! exact walk: the first segment that does not match stops the search, there
//! is no backtracking and no partial-prefix fallback.
//!
//! Cross-module lookups live on [`ModuleSet`](crate::ModuleSet).

use crate::model::{ClassNode, InteractionClass, Module, ObjectClass};

/// Treatment of scaffolding classes found at the end of a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scaffolding {
    /// A scaffolding class resolves to `None`.
    #[default]
    Exclude,
    /// Return the node even when it is only scaffolding.
    Include,
}

/// Resolve `fq_name` in the `C` tree of `module`.
pub fn find_class<'m, C: ClassNode>(
    module: &'m Module,
    fq_name: &str,
    scaffolding: Scaffolding,
) -> Option<&'m C> {
    let root = C::tree_root(module)?;

    let mut segments = fq_name.split('.');
    let first = segments.next().filter(|s| !s.is_empty())?;
    if root.name() != first {
        return None;
    }

    let mut node = root;
    for segment in segments {
        node = node.child(segment)?;
    }

    if scaffolding == Scaffolding::Exclude && node.is_scaffolding() {
        log::trace!("[omt] {} {} is scaffolding, hidden", C::KIND, fq_name);
        return None;
    }
    Some(node)
}

impl Module {
    /// Non-scaffolding object class at `fq_name`.
    pub fn object_class(&self, fq_name: &str) -> Option<&ObjectClass> {
        find_class(self, fq_name, Scaffolding::Exclude)
    }

    pub fn object_class_with(&self, fq_name: &str, scaffolding: Scaffolding) -> Option<&ObjectClass> {
        find_class(self, fq_name, scaffolding)
    }

    /// Non-scaffolding interaction class at `fq_name`.
    pub fn interaction_class(&self, fq_name: &str) -> Option<&InteractionClass> {
        find_class(self, fq_name, Scaffolding::Exclude)
    }

    pub fn interaction_class_with(
        &self,
        fq_name: &str,
        scaffolding: Scaffolding,
    ) -> Option<&InteractionClass> {
        find_class(self, fq_name, scaffolding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Attribute, Parameter};

    fn objects_module() -> Module {
        Module::new().with_objects(
            ObjectClass::new("HLAobjectRoot").with_child(
                ObjectClass::new("BaseEntity")
                    .with_sharing("PublishSubscribe")
                    .with_attribute(Attribute::new("EntityType", "EntityTypeStruct"))
                    .with_child(ObjectClass::new("PhysicalEntity").with_child(
                        ObjectClass::new("Platform").with_semantics("A platform"),
                    )),
            ),
        )
    }

    #[test]
    fn test_walks_full_path() {
        let module = objects_module();
        let platform = module
            .object_class("HLAobjectRoot.BaseEntity.PhysicalEntity.Platform")
            .expect("Platform is declared");
        assert_eq!(platform.name, "Platform");

        let base = module.object_class("HLAobjectRoot.BaseEntity").unwrap();
        assert_eq!(base.attributes.len(), 1);
    }

    #[test]
    fn test_root_mismatch_and_missing_segment() {
        let module = objects_module();
        assert!(module.object_class("BaseEntity").is_none());
        assert!(module.object_class("HLAobjectRoot.Platform").is_none());
        assert!(module.object_class("HLAobjectRoot.BaseEntity.Missing.Platform").is_none());
    }

    #[test]
    fn test_empty_and_degenerate_names() {
        let module = objects_module();
        assert!(module.object_class("").is_none());
        assert!(module.object_class(".").is_none());
        assert!(module.object_class("HLAobjectRoot.BaseEntity.").is_none());
        assert!(module.object_class("HLAobjectRoot..BaseEntity").is_none());
    }

    #[test]
    fn test_scaffolding_filter() {
        let module = objects_module();
        let fq = "HLAobjectRoot.BaseEntity.PhysicalEntity";

        assert!(module.object_class(fq).is_none());
        let raw = module
            .object_class_with(fq, Scaffolding::Include)
            .expect("scaffolding is navigable on request");
        assert!(raw.is_scaffolding());

        // The scaffolding root itself behaves the same way.
        assert!(module.object_class("HLAobjectRoot").is_none());
        assert!(module
            .object_class_with("HLAobjectRoot", Scaffolding::Include)
            .is_some());
    }

    #[test]
    fn test_missing_tree() {
        let module = Module::new();
        assert!(module.object_class("HLAobjectRoot").is_none());
        assert!(module
            .interaction_class_with("HLAinteractionRoot", Scaffolding::Include)
            .is_none());
    }

    #[test]
    fn test_interaction_tree_is_separate() {
        let module = objects_module().with_interactions(
            InteractionClass::new("HLAinteractionRoot").with_child(
                InteractionClass::new("BaseEntity")
                    .with_parameter(Parameter::new("Reason", "HLAunicodeString")),
            ),
        );

        let ic = module
            .interaction_class("HLAinteractionRoot.BaseEntity")
            .expect("interaction declared");
        assert_eq!(ic.parameters.len(), 1);
        assert!(module.interaction_class("HLAobjectRoot.BaseEntity").is_none());
    }
}
