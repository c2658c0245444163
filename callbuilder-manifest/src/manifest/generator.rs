use serde::Deserialize;

/// Output configuration from the `[generator]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Name of the generated Rust file
    #[serde(default = "default_file")]
    pub file: String,

    /// `use` paths emitted at the top of the generated file
    #[serde(default)]
    pub uses: Vec<String>,

    /// Add `#[derive(Debug)]` to every builder
    #[serde(default)]
    pub derive_debug: bool,
}

fn default_file() -> String {
    "builders.rs".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            uses: Vec::new(),
            derive_debug: false,
        }
    }
}
