use std::path::Path;

use callbuilder_codegen::{
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::CompilationContext,
};
use callbuilder_core::{GeneratedFile, WriteResult};
use callbuilder_ir::{BuilderSpec, SignatureKey};
use callbuilder_manifest::GeneratorConfig;
use eyre::{Result, bail};
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::{RUST_NAMING, files::BuildersRs};

/// Rust emitter for the builders of one manifest.
pub struct Generator<'a> {
    config: &'a GeneratorConfig,
    builders: &'a [BuilderSpec],
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        let file = self.file()?;
        Ok(vec![PreviewFile {
            path: file.file_name().to_string(),
            content: file.render(),
        }])
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let file = self.file()?;
        let name = file.file_name().to_string();
        let mut result = GenerateResult {
            builders: self.builders.len(),
            ..GenerateResult::default()
        };

        match file.write(output_dir)? {
            WriteResult::Unchanged => {
                debug!(file = %name, "builders unchanged");
                result.unchanged.push(name);
            }
            WriteResult::Written | WriteResult::Skipped => {
                info!(file = %name, builders = result.builders, "wrote builders");
                result.written.push(name);
            }
        }

        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a GeneratorConfig, builders: &'a [BuilderSpec]) -> Self {
        Self { config, builders }
    }

    /// Emit the builders a pipeline run produced.
    pub fn from_context(ctx: &'a CompilationContext) -> Self {
        Self::new(&ctx.manifest.generator, &ctx.builders)
    }

    fn file(&self) -> Result<BuildersRs<'a>> {
        self.check_collisions()?;
        Ok(BuildersRs::new(self.config, self.builders))
    }

    /// Two builders may not end up with the same Rust type name.
    fn check_collisions(&self) -> Result<()> {
        let mut seen: IndexMap<String, &SignatureKey> = IndexMap::new();
        for builder in self.builders {
            let name = RUST_NAMING.type_name(&builder.generated_name);
            if let Some(first) = seen.get(&name) {
                bail!(
                    "builder name '{}' is generated by both {} and {}",
                    name,
                    first,
                    builder.source
                );
            }
            seen.insert(name, &builder.source);
        }
        Ok(())
    }
}
