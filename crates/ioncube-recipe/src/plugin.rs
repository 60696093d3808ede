//! Startup glue: load the config, resolve it, and register the recipe with
//! the host crafting framework.

use std::path::Path;
use tracing::info;

use crate::loader::load_or_default;
use crate::resolve::resolve_ingredients;
use ioncube_host::{CraftingHost, RecipeData, TechType, TechTypeCatalog};

// ===========================================================================
// Plugin constants
// ===========================================================================

/// Display name used in log output.
pub const PLUGIN_NAME: &str = "Ion Cube Recipe";

/// Directory under the host's plugin-data root holding our files.
pub const PLUGIN_DIR: &str = "IonCubeRecipe";

/// Config file name inside [`PLUGIN_DIR`].
pub const RECIPE_FILE: &str = "IonCubeRecipe.json";

/// Catalog name of the craft target, the ion cube.
pub const TARGET_TECH_TYPE: &str = "PrecursorIonCrystal";

/// Category path of the crafting node in the fabricator menu.
pub const CRAFT_NODE_PATH: [&str; 2] = ["Resources", "Electronics"];

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that abort startup. Config problems never land here; only a host
/// catalog that cannot name the craft target does.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("tech type '{0}' is not in the host catalog")]
    UnknownTargetTechType(String),
}

// ===========================================================================
// Registration
// ===========================================================================

/// Issue the three host registrations in their fixed order: crafting node,
/// recipe data, self-referential unlock requirement.
pub fn register<H: CraftingHost>(host: &mut H, target: TechType, recipe: RecipeData) {
    host.add_crafting_node(target, &CRAFT_NODE_PATH);
    host.set_recipe_data(target, recipe);
    // Unlock when the player first picks up an ion cube.
    host.add_unlock_requirement(target, target);
}

/// Plugin entry point, called once by the host at game startup.
///
/// Loads (or creates) the recipe config under `plugin_root`, resolves its
/// ingredient names through `catalog`, and registers the resulting recipe
/// with `host`. The only fatal condition is a catalog that does not know
/// [`TARGET_TECH_TYPE`]: without a target identifier there is nothing to
/// register.
pub fn startup<C, H>(plugin_root: &Path, catalog: &C, host: &mut H) -> Result<(), StartupError>
where
    C: TechTypeCatalog,
    H: CraftingHost,
{
    let recipe_path = plugin_root.join(PLUGIN_DIR).join(RECIPE_FILE);
    let config = load_or_default(&recipe_path);

    let target = catalog
        .lookup(TARGET_TECH_TYPE)
        .ok_or_else(|| StartupError::UnknownTargetTechType(TARGET_TECH_TYPE.to_string()))?;

    let recipe = RecipeData {
        craft_amount: config.craft_amount,
        ingredients: resolve_ingredients(&config, catalog),
    };
    register(host, target, recipe);

    info!("{PLUGIN_NAME} loaded");
    Ok(())
}

// ===========================================================================
// Tests
// ===========================================================================
