use std::path::{Path, PathBuf};

use callbuilder_core::{FileRules, GeneratedFile};
use callbuilder_ir::BuilderSpec;
use callbuilder_manifest::GeneratorConfig;

use super::GENERATED_HEADER;
use crate::{RustBuilder, RustFile, Use};

/// The single generated file holding every builder of a manifest.
pub struct BuildersRs<'a> {
    config: &'a GeneratorConfig,
    builders: &'a [BuilderSpec],
}

impl<'a> BuildersRs<'a> {
    pub fn new(config: &'a GeneratorConfig, builders: &'a [BuilderSpec]) -> Self {
        Self { config, builders }
    }

    /// File name relative to the output directory.
    pub fn file_name(&self) -> &str {
        &self.config.file
    }
}

impl GeneratedFile for BuildersRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.config.file)
    }

    fn rules(&self) -> FileRules {
        FileRules::if_changed().with_header(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        self.builders
            .iter()
            .map(|spec| RustBuilder::new(spec).derive_debug(self.config.derive_debug))
            .fold(
                RustFile::new().use_stmts(self.config.uses.iter().map(Use::new)),
                RustFile::add,
            )
            .render_with_header(GENERATED_HEADER)
    }
}
