//! A model whose builders are generated by `build.rs` from `callbuilder.toml`.

pub mod model;

pub mod builders {
    include!(concat!(env!("OUT_DIR"), "/builders.rs"));
}

pub use builders::*;
pub use model::*;
