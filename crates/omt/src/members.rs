// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Inherited attribute and parameter aggregation.
//!
//! The members of `A.B.C` are the union of the members declared at `A`,
//! `A.B` and `A.B.C`, each level resolved independently across the module
//! set (so a level may come from a different module than its parent).
//! Members are keyed by name: the declaration closest to the root wins and a
//! later, different redeclaration is reported and dropped.

use std::collections::HashMap;

use crate::model::{Attribute, ClassNode, InteractionClass, Named, ObjectClass, Parameter};
use crate::module_set::ModuleSet;
use crate::registry::Scaffolding;

/// Union of the members along the ancestor chain of `fq_name`, root first.
///
/// `None` when any prefix of `fq_name` fails to resolve to a non-scaffolding
/// class; partial results are never returned.
pub fn inherited_members<'a, C: ClassNode>(
    modules: &ModuleSet<'a>,
    fq_name: &str,
) -> Option<Vec<&'a C::Member>> {
    let mut members: Vec<&'a C::Member> = Vec::new();
    let mut by_name: HashMap<&'a str, usize> = HashMap::new();

    let mut end = 0;
    for segment in fq_name.split('.') {
        end += segment.len();
        let prefix = &fq_name[..end];
        end += 1;

        let Some(class) = modules.class::<C>(prefix, Scaffolding::Exclude) else {
            log::trace!("[omt] {} prefix {} does not resolve", C::KIND, prefix);
            return None;
        };

        for member in class.members() {
            match by_name.get(member.name()) {
                None => {
                    by_name.insert(member.name(), members.len());
                    members.push(member);
                }
                Some(&index) if members[index] == member => {}
                Some(_) => {
                    log::warn!(
                        "[omt] {} {} redeclares member {} with a different definition, keeping the inherited one",
                        C::KIND,
                        prefix,
                        member.name()
                    );
                }
            }
        }
    }

    Some(members)
}

impl<'a> ModuleSet<'a> {
    /// All attributes an instance of the object class carries.
    pub fn object_class_attributes(&self, fq_name: &str) -> Option<Vec<&'a Attribute>> {
        inherited_members::<ObjectClass>(self, fq_name)
    }

    /// All parameters an instance of the interaction class carries.
    pub fn interaction_class_parameters(&self, fq_name: &str) -> Option<Vec<&'a Parameter>> {
        inherited_members::<InteractionClass>(self, fq_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Module;

    fn mim() -> Module {
        Module::new().with_objects(
            ObjectClass::new("HLAobjectRoot")
                .with_attribute(Attribute::new("HLAprivilegeToDeleteObject", "HLAtoken")),
        )
    }

    fn base() -> Module {
        Module::new().with_objects(
            ObjectClass::new("HLAobjectRoot").with_child(
                ObjectClass::new("BaseEntity")
                    .with_attribute(Attribute::new("EntityType", "EntityTypeStruct"))
                    .with_attribute(Attribute::new("Spatial", "SpatialVariantStruct"))
                    .with_child(
                        ObjectClass::new("PhysicalEntity")
                            .with_attribute(Attribute::new("Marking", "MarkingStruct")),
                    ),
            ),
        )
    }

    fn names(members: &[&Attribute]) -> Vec<String> {
        members.iter().map(|a| a.name.clone()).collect()
    }

    #[test]
    fn test_union_along_chain() {
        let (mim, base) = (mim(), base());
        let set = ModuleSet::from([&mim, &base]);

        let attrs = set
            .object_class_attributes("HLAobjectRoot.BaseEntity.PhysicalEntity")
            .expect("whole chain resolves");
        assert_eq!(
            names(&attrs),
            ["HLAprivilegeToDeleteObject", "EntityType", "Spatial", "Marking"]
        );
    }

    #[test]
    fn test_unresolvable_prefix_fails_whole_aggregation() {
        let base = base();
        // Without the MIM the root is scaffolding.
        let set = ModuleSet::from([&base]);
        assert!(set
            .object_class_attributes("HLAobjectRoot.BaseEntity.PhysicalEntity")
            .is_none());

        let mim = mim();
        let set = ModuleSet::from([&mim, &base]);
        assert!(set
            .object_class_attributes("HLAobjectRoot.BaseEntity.Lifeform")
            .is_none());
        assert!(set.object_class_attributes("").is_none());
    }

    #[test]
    fn test_same_named_members_are_keyed_by_name() {
        let mim = mim();
        let module = Module::new().with_objects(
            ObjectClass::new("HLAobjectRoot").with_child(
                ObjectClass::new("Sensor")
                    .with_attribute(Attribute::new("Range", "MeterFloat32"))
                    .with_child(
                        ObjectClass::new("Radar")
                            // Identical redeclaration merges silently.
                            .with_attribute(Attribute::new("Range", "MeterFloat32"))
                            // Conflicting redeclaration keeps the inherited definition.
                            .with_attribute(Attribute::new("HLAprivilegeToDeleteObject", "HLAopaqueData"))
                            .with_attribute(Attribute::new("Band", "HLAunicodeString")),
                    ),
            ),
        );
        let set = ModuleSet::from([&mim, &module]);

        let attrs = set
            .object_class_attributes("HLAobjectRoot.Sensor.Radar")
            .unwrap();
        assert_eq!(names(&attrs), ["HLAprivilegeToDeleteObject", "Range", "Band"]);
        assert_eq!(attrs[0].data_type.as_deref(), Some("HLAtoken"));
    }

    #[test]
    fn test_parameters_across_modules() {
        let mim = Module::new().with_interactions(
            InteractionClass::new("HLAinteractionRoot").with_semantics("root"),
        );
        let ext = Module::new().with_interactions(
            InteractionClass::new("HLAinteractionRoot").with_child(
                InteractionClass::new("WeaponFire")
                    .with_parameter(Parameter::new("EventIdentifier", "EventIdentifierStruct"))
                    .with_parameter(Parameter::new("FireControlSolutionRange", "MeterFloat32")),
            ),
        );
        let set = ModuleSet::from([&ext, &mim]);

        let params = set
            .interaction_class_parameters("HLAinteractionRoot.WeaponFire")
            .unwrap();
        let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["EventIdentifier", "FireControlSolutionRange"]);
    }
}
