// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Ordered, search-only view over several FOM modules.
//!
//! Every lookup visits modules in the order the caller supplied and returns
//! the first hit. Same-name definitions in later modules are shadowed, never
//! merged.

use std::ops::Deref;

use crate::model::{ClassNode, InteractionClass, Module, ObjectClass};
use crate::registry::{find_class, Scaffolding};

/// A caller-assembled search order over borrowed modules.
#[derive(Debug, Clone, Default)]
pub struct ModuleSet<'a> {
    modules: Vec<&'a Module>,
}

impl<'a> ModuleSet<'a> {
    pub fn new<I>(modules: I) -> Self
    where
        I: IntoIterator<Item = &'a Module>,
    {
        Self {
            modules: modules.into_iter().collect(),
        }
    }

    /// Append a module with the lowest precedence so far.
    pub fn push(&mut self, module: &'a Module) {
        self.modules.push(module);
    }

    /// First value produced by `lookup`, in search order.
    pub fn find_first<T: ?Sized + 'a>(
        &self,
        lookup: impl FnMut(&'a Module) -> Option<&'a T>,
    ) -> Option<&'a T> {
        self.modules.iter().copied().find_map(lookup)
    }

    /// First module for which `lookup` produces a value.
    pub fn find_module<T: ?Sized + 'a>(
        &self,
        mut lookup: impl FnMut(&'a Module) -> Option<&'a T>,
    ) -> Option<&'a Module> {
        self.modules.iter().copied().find(|&m| lookup(m).is_some())
    }

    // -----------------------------------------------------------------------
    // Classes
    // -----------------------------------------------------------------------

    pub fn class<C: ClassNode>(&self, fq_name: &str, scaffolding: Scaffolding) -> Option<&'a C> {
        self.find_first(|m| find_class::<C>(m, fq_name, scaffolding))
    }

    pub fn class_module<C: ClassNode>(
        &self,
        fq_name: &str,
        scaffolding: Scaffolding,
    ) -> Option<&'a Module> {
        self.find_module(|m| find_class::<C>(m, fq_name, scaffolding))
    }

    pub fn object_class(&self, fq_name: &str) -> Option<&'a ObjectClass> {
        self.class(fq_name, Scaffolding::Exclude)
    }

    pub fn object_class_with(
        &self,
        fq_name: &str,
        scaffolding: Scaffolding,
    ) -> Option<&'a ObjectClass> {
        self.class(fq_name, scaffolding)
    }

    /// Module that declares the (non-scaffolding) object class.
    pub fn object_class_module(&self, fq_name: &str) -> Option<&'a Module> {
        self.class_module::<ObjectClass>(fq_name, Scaffolding::Exclude)
    }

    pub fn object_class_module_with(
        &self,
        fq_name: &str,
        scaffolding: Scaffolding,
    ) -> Option<&'a Module> {
        self.class_module::<ObjectClass>(fq_name, scaffolding)
    }

    pub fn interaction_class(&self, fq_name: &str) -> Option<&'a InteractionClass> {
        self.class(fq_name, Scaffolding::Exclude)
    }

    pub fn interaction_class_with(
        &self,
        fq_name: &str,
        scaffolding: Scaffolding,
    ) -> Option<&'a InteractionClass> {
        self.class(fq_name, scaffolding)
    }

    /// Module that declares the (non-scaffolding) interaction class.
    pub fn interaction_class_module(&self, fq_name: &str) -> Option<&'a Module> {
        self.class_module::<InteractionClass>(fq_name, Scaffolding::Exclude)
    }

    pub fn interaction_class_module_with(
        &self,
        fq_name: &str,
        scaffolding: Scaffolding,
    ) -> Option<&'a Module> {
        self.class_module::<InteractionClass>(fq_name, scaffolding)
    }
}

impl<'a> Deref for ModuleSet<'a> {
    type Target = [&'a Module];

    fn deref(&self) -> &Self::Target {
        &self.modules
    }
}

impl<'a> From<&'a [Module]> for ModuleSet<'a> {
    fn from(modules: &'a [Module]) -> Self {
        Self::new(modules)
    }
}

impl<'a, const N: usize> From<[&'a Module; N]> for ModuleSet<'a> {
    fn from(modules: [&'a Module; N]) -> Self {
        Self::new(modules)
    }
}

impl<'a> FromIterator<&'a Module> for ModuleSet<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Module>>(iter: I) -> Self {
        Self::new(iter)
    }
}
