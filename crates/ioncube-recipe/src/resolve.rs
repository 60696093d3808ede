//! Resolution of configured ingredient names against the host catalog.

use ioncube_host::{Ingredient, TechTypeCatalog};
use tracing::warn;

use crate::config::RecipeConfig;

/// Resolve each configured ingredient name through `catalog`, preserving
/// input order. Names the catalog does not know are skipped with a warning,
/// so the result is an order-preserving subsequence of the input -- it can
/// shrink, never grow or reorder.
pub fn resolve_ingredients<C>(config: &RecipeConfig, catalog: &C) -> Vec<Ingredient>
where
    C: TechTypeCatalog,
{
    let mut resolved = Vec::with_capacity(config.ingredients.len());
    for ingredient in &config.ingredients {
        match catalog.lookup(&ingredient.tech_type) {
            Some(tech_type) => resolved.push(Ingredient {
                tech_type,
                amount: ingredient.amount,
            }),
            None => warn!(
                "unknown tech type '{}', skipping ingredient",
                ingredient.tech_type
            ),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IngredientConfig;
    use ioncube_host::test_utils::*;

    fn config_of(names: &[(&str, u32)]) -> RecipeConfig {
        RecipeConfig {
            craft_amount: 1,
            ingredients: names
                .iter()
                .map(|(name, amount)| IngredientConfig {
                    tech_type: name.to_string(),
                    amount: *amount,
                })
                .collect(),
        }
    }

    #[test]
    fn all_names_resolve_in_order() {
        let config = config_of(&[
            ("AdvancedWiringKit", 1),
            ("ComputerChip", 1),
            ("ReactorRod", 2),
            ("Kyanite", 3),
        ]);

        let resolved = resolve_ingredients(&config, &default_catalog());

        assert_eq!(
            resolved,
            [
                Ingredient { tech_type: advanced_wiring_kit(), amount: 1 },
                Ingredient { tech_type: computer_chip(), amount: 1 },
                Ingredient { tech_type: reactor_rod(), amount: 2 },
                Ingredient { tech_type: kyanite(), amount: 3 },
            ]
        );
    }

    #[test]
    fn unknown_name_is_skipped_keeping_relative_order() {
        let config = config_of(&[
            ("AdvancedWiringKit", 1),
            ("Unobtanium", 9),
            ("ReactorRod", 2),
            ("Kyanite", 3),
        ]);

        let resolved = resolve_ingredients(&config, &default_catalog());

        assert_eq!(resolved.len(), 3);
        assert_eq!(
            resolved
                .iter()
                .map(|i| i.tech_type)
                .collect::<Vec<_>>(),
            [advanced_wiring_kit(), reactor_rod(), kyanite()]
        );
    }

    #[test]
    fn nothing_resolves_against_empty_catalog() {
        let config = config_of(&[("AdvancedWiringKit", 1), ("Kyanite", 3)]);
        let catalog = StaticCatalog::default();

        assert!(resolve_ingredients(&config, &catalog).is_empty());
    }

    #[test]
    fn empty_config_resolves_to_nothing() {
        let config = config_of(&[]);
        assert!(resolve_ingredients(&config, &default_catalog()).is_empty());
    }

    #[test]
    fn duplicate_names_are_kept_as_separate_entries() {
        let config = config_of(&[("Kyanite", 1), ("Kyanite", 2)]);

        let resolved = resolve_ingredients(&config, &default_catalog());

        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].amount, 1);
        assert_eq!(resolved[1].amount, 2);
    }

    #[test]
    fn closure_catalog_works() {
        let config = config_of(&[("Kyanite", 3)]);
        let catalog = ioncube_host::FnCatalog(|name: &str| (name == "Kyanite").then_some(kyanite()));

        let resolved = resolve_ingredients(&config, &catalog);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].tech_type, kyanite());
    }
}
