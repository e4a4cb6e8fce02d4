use crate::preset::RecipePreset;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PresetFile {
    pub schema_version: String,
    pub presets: Vec<RecipePreset>,
}
