//! Host-facing surface of the Ion Cube Recipe plugin.
//!
//! The game owns the tech-type catalog, the crafting tree, and the unlock
//! system. This crate models the slice of that surface the plugin consumes:
//! the opaque [`TechType`] identifier, the crafting-data structs the host
//! accepts ([`RecipeData`], [`Ingredient`]), and the two capabilities the
//! plugin is handed at startup ([`TechTypeCatalog`], [`CraftingHost`]).
//!
//! Nothing here registers anything on its own. A real game binding
//! implements the traits against the live crafting framework; tests use the
//! fakes in [`test_utils`].

use serde::{Deserialize, Serialize};

// ===========================================================================
// Identifiers
// ===========================================================================

/// Identifies a craftable or ingredient item in the host catalog. Cheap to
/// copy and compare. Minted by [`TechTypeCatalog::lookup`]; the plugin never
/// fabricates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TechType(pub u32);

// ===========================================================================
// Crafting data
// ===========================================================================

/// One resolved crafting input: a validated identifier plus a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub tech_type: TechType,
    pub amount: u32,
}

/// The recipe record the host accepts: how many of the target one craft
/// yields, plus the ordered ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeData {
    pub craft_amount: u32,
    pub ingredients: Vec<Ingredient>,
}

// ===========================================================================
// Capability traits
// ===========================================================================

/// Host-maintained catalog mapping human-readable item names to typed
/// identifiers.
pub trait TechTypeCatalog {
    /// Look up a name, returning its identifier, or `None` when the host
    /// does not know the name.
    fn lookup(&self, name: &str) -> Option<TechType>;
}

/// Adapter turning a plain lookup function into a [`TechTypeCatalog`], so
/// bindings and tests can inject a closure.
pub struct FnCatalog<F>(pub F);

impl<F> TechTypeCatalog for FnCatalog<F>
where
    F: Fn(&str) -> Option<TechType>,
{
    fn lookup(&self, name: &str) -> Option<TechType> {
        (self.0)(name)
    }
}

/// Registration surface of the host crafting framework. The host API has no
/// return codes; these calls cannot fail at this boundary.
pub trait CraftingHost {
    /// Attach a crafting node for `target` under the given category path in
    /// the crafting menu.
    fn add_crafting_node(&mut self, target: TechType, path: &[&str]);

    /// Replace the recipe data for `target`.
    fn set_recipe_data(&mut self, target: TechType, recipe: RecipeData);

    /// Require `requirement` to be acquired before `target` becomes
    /// craftable.
    fn add_unlock_requirement(&mut self, target: TechType, requirement: TechType);
}

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tech_type_equality() {
        let a = TechType(0);
        let b = TechType(0);
        let c = TechType(1);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn tech_types_are_hashable() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(TechType(0), "PrecursorIonCrystal");
        map.insert(TechType(1), "Kyanite");
        assert_eq!(map[&TechType(0)], "PrecursorIonCrystal");
    }

    #[test]
    fn closure_acts_as_catalog() {
        let catalog = FnCatalog(|name: &str| (name == "Kyanite").then_some(TechType(7)));
        assert_eq!(catalog.lookup("Kyanite"), Some(TechType(7)));
        assert_eq!(catalog.lookup("Titanium"), None);
    }
}
