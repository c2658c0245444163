//! Rust syntax nodes for the generated structs, impls and functions.
//!
//! Each node is [`Renderable`](callbuilder_codegen::builder::Renderable) and
//! is written out through `CodeBuilder`.

mod fns;
mod generics;
mod impls;
mod structs;

pub use fns::{Fn, Param};
pub use generics::{GenericParam, Generics};
pub use impls::Impl;
pub use structs::{Field, Struct};

#[cfg(test)]
fn render(node: &impl callbuilder_codegen::builder::Renderable) -> String {
    let mut builder = callbuilder_codegen::builder::CodeBuilder::new();
    builder.emit(node);
    builder.build()
}
