//! Intermediate representation types for the callbuilder generator.
//!
//! This crate provides the data model shared by every stage of builder
//! generation.
//!
//! # Architecture
//!
//! ```text
//! callbuilder.toml → callbuilder-manifest (parsing) → CallableSpec → BuilderSpec → emitter
//! ```
//!
//! The IR types are designed to be:
//! - Language-neutral in naming (emitters apply their own conventions)
//! - Explicit about generic scoping (owner vs. callable type variables)
//! - Immutable once produced, and serializable for inspection

mod builder;
mod callable;
mod types;

pub use builder::{
    BuilderSpec, FieldSpec, GeneratedTypeVar, InvocationTarget, ReceiverSlot, SetterSpec,
    TerminalInvocation, ZeroValue,
};
pub use callable::{CallableKind, CallableSpec, OwnerType, Param, ReceiverMode, SignatureKey};
pub use types::{GenericArg, Scope, Segment, Type, TypeVar, TypeVarRef};
