//! Shared test fakes for the host capability traits.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so the fakes
//! are available to unit tests here and to dependent crates via the
//! `test-utils` feature.

use crate::{CraftingHost, RecipeData, TechType, TechTypeCatalog};
use std::collections::HashMap;

// ===========================================================================
// Tech type constructors
// ===========================================================================

// Identifiers are arbitrary but distinct; tests only compare them.

pub fn precursor_ion_crystal() -> TechType {
    TechType(0)
}
pub fn advanced_wiring_kit() -> TechType {
    TechType(1)
}
pub fn computer_chip() -> TechType {
    TechType(2)
}
pub fn reactor_rod() -> TechType {
    TechType(3)
}
pub fn kyanite() -> TechType {
    TechType(4)
}

// ===========================================================================
// Catalog stub
// ===========================================================================

/// A [`TechTypeCatalog`] backed by a fixed name-to-identifier map.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    entries: HashMap<String, TechType>,
}

impl StaticCatalog {
    /// Build a catalog from name/identifier pairs.
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, TechType)>,
        S: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(name, tech)| (name.into(), tech))
                .collect(),
        }
    }
}

impl TechTypeCatalog for StaticCatalog {
    fn lookup(&self, name: &str) -> Option<TechType> {
        self.entries.get(name).copied()
    }
}

/// A catalog that knows every name the shipped default recipe uses, plus
/// the craft target.
pub fn default_catalog() -> StaticCatalog {
    StaticCatalog::new([
        ("PrecursorIonCrystal", precursor_ion_crystal()),
        ("AdvancedWiringKit", advanced_wiring_kit()),
        ("ComputerChip", computer_chip()),
        ("ReactorRod", reactor_rod()),
        ("Kyanite", kyanite()),
    ])
}

// ===========================================================================
// Recording host
// ===========================================================================

/// One captured host call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    AddCraftingNode {
        target: TechType,
        path: Vec<String>,
    },
    SetRecipeData {
        target: TechType,
        recipe: RecipeData,
    },
    AddUnlockRequirement {
        target: TechType,
        requirement: TechType,
    },
}

/// A [`CraftingHost`] that records every call in order, so tests can assert
/// the registration sequence and its payloads.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
}

impl CraftingHost for RecordingHost {
    fn add_crafting_node(&mut self, target: TechType, path: &[&str]) {
        self.calls.push(HostCall::AddCraftingNode {
            target,
            path: path.iter().map(|s| s.to_string()).collect(),
        });
    }

    fn set_recipe_data(&mut self, target: TechType, recipe: RecipeData) {
        self.calls.push(HostCall::SetRecipeData { target, recipe });
    }

    fn add_unlock_requirement(&mut self, target: TechType, requirement: TechType) {
        self.calls.push(HostCall::AddUnlockRequirement {
            target,
            requirement,
        });
    }
}

// ===========================================================================
// Tests
// ===========================================================================
