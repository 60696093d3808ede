//! Ion Cube Recipe -- a crafting-recipe plugin for the host game.
//!
//! At startup the plugin reads `IonCubeRecipe.json` from its directory
//! under the host's plugin-data root, creating the file with a built-in
//! default when it is missing or corrupt. The configured ingredient names
//! are resolved against the host's tech-type catalog, and the resulting
//! recipe is registered with the host crafting framework along with its
//! unlock-on-pickup requirement.
//!
//! The host surface is abstracted by the `ioncube-host` crate; this crate
//! holds the plugin logic and never talks to the game directly. The entry
//! point is [`plugin::startup`].

pub mod config;
pub mod loader;
pub mod plugin;
pub mod resolve;

pub use config::{IngredientConfig, RecipeConfig};
pub use loader::{ConfigError, load_or_default};
pub use plugin::{StartupError, startup};
pub use resolve::resolve_ingredients;
