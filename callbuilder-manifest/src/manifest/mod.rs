//! Manifest types and parsing for callbuilder.toml files.

mod file;
mod generator;
mod impls;
mod parse;
mod validate;

pub use file::ManifestFile;
pub use generator::GeneratorConfig;
pub use impls::{Arg, CallBuilderAttr, FnDecl, ImplBlock, Receiver};
pub use parse::parse_manifest;
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest for callbuilder.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Output settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Impl blocks, in declaration order
    #[serde(default, rename = "impl")]
    pub impls: Vec<ImplBlock>,
}

impl Manifest {
    /// Iterate over every function annotated with `call_builder`, in manifest order.
    pub fn annotated(&self) -> impl Iterator<Item = (&ImplBlock, &FnDecl)> {
        self.impls.iter().flat_map(|block| {
            block
                .fns
                .iter()
                .filter(|f| f.call_builder.is_some())
                .map(move |f| (block, f))
        })
    }

    /// Total number of declared functions, annotated or not.
    pub fn fn_count(&self) -> usize {
        self.impls.iter().map(|block| block.fns.len()).sum()
    }
}
