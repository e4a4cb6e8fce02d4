use anyhow::{Context, Result};
use flocprep_schemas::{file_formats::PresetFile, preset::RecipePreset};
use std::{collections::HashMap, fs, path::Path};

/// The library of standard operating procedure recipes available to
/// preset-driven runs.
pub struct PresetLibrary {
    pub presets: HashMap<String, RecipePreset>,
}

impl PresetLibrary {
    /// Loads every preset file in the given directory.
    pub fn load(base_path: &Path) -> Result<Self> {
        println!("Loading preset library from '{}'...", base_path.display());

        let mut presets = HashMap::new();
        for entry in fs::read_dir(base_path)
            .with_context(|| format!("Failed to read directory: {}", base_path.display()))?
        {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && path.extension().map_or(false, |s| s == "yaml" || s == "yml") {
                let content = fs::read_to_string(&path)?;
                let file: PresetFile = serde_yaml::from_str(&content)
                    .with_context(|| format!("Failed to parse YAML from {:?}", path))?;

                for preset in file.presets {
                    presets.insert(preset.preset_id.clone(), preset);
                }
            }
        }

        println!("Preset library loaded ({} recipes).", presets.len());
        Ok(Self { presets })
    }

    pub fn get(&self, preset_id: &str) -> Option<&RecipePreset> {
        self.presets.get(preset_id)
    }
}
