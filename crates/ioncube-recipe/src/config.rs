//! Serde structs for the on-disk recipe description.
//!
//! These types define the file format read from and written back to
//! `IonCubeRecipe.json`. Field names are camelCase in the file and the
//! format is round-trip stable: what [`crate::loader::save`] writes,
//! [`crate::loader::load_or_default`] reads back unchanged.

use serde::{Deserialize, Serialize};

/// A recipe description as it appears in the config file: how many of the
/// target one craft yields, plus the ordered crafting inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeConfig {
    pub craft_amount: u32,
    pub ingredients: Vec<IngredientConfig>,
}

/// One crafting input before its name is resolved against the host catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientConfig {
    pub tech_type: String,
    pub amount: u32,
}

impl IngredientConfig {
    fn new(tech_type: &str, amount: u32) -> Self {
        Self {
            tech_type: tech_type.to_string(),
            amount,
        }
    }
}

impl Default for RecipeConfig {
    /// The shipped ion cube recipe. Compatibility tests pin these exact
    /// values; change them only together with the fixtures.
    fn default() -> Self {
        Self {
            craft_amount: 1,
            ingredients: vec![
                IngredientConfig::new("AdvancedWiringKit", 1),
                IngredientConfig::new("ComputerChip", 1),
                IngredientConfig::new("ReactorRod", 2),
                IngredientConfig::new("Kyanite", 3),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_recipe_literal() {
        let config = RecipeConfig::default();
        assert_eq!(config.craft_amount, 1);
        let ingredients: Vec<(&str, u32)> = config
            .ingredients
            .iter()
            .map(|i| (i.tech_type.as_str(), i.amount))
            .collect();
        assert_eq!(
            ingredients,
            [
                ("AdvancedWiringKit", 1),
                ("ComputerChip", 1),
                ("ReactorRod", 2),
                ("Kyanite", 3),
            ]
        );
    }

    #[test]
    fn file_fields_are_camel_case() {
        let json = serde_json::to_string(&RecipeConfig::default()).unwrap();
        assert!(json.contains("\"craftAmount\""));
        assert!(json.contains("\"techType\""));
        assert!(!json.contains("craft_amount"));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = RecipeConfig {
            craft_amount: 2,
            ingredients: vec![
                IngredientConfig::new("Titanium", 5),
                IngredientConfig::new("Lithium", 1),
            ],
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: RecipeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
