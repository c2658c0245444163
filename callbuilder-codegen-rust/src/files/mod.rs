//! Files written by the Rust emitter.

mod builders_rs;

pub use builders_rs::BuildersRs;
pub use callbuilder_core::GENERATED_HEADER;
