//! Manifest parsing from files and strings.

use std::{collections::HashSet, path::Path, str::FromStr};

use callbuilder_core::TypeExpr;

use super::{FnDecl, ImplBlock, Manifest, validate::ParseContext};
use crate::{Error, Result};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "callbuilder.toml")
    }
}

impl Manifest {
    /// Parse a callbuilder.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    validate_manifest(&manifest, &ParseContext::new(content, filename))?;
    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest, ctx: &ParseContext) -> Result<()> {
    for (index, path) in manifest.generator.uses.iter().enumerate() {
        if path.trim().is_empty() {
            return Err(ctx.error_at(format!("generator.uses[{index}] is empty"), path));
        }
    }

    for block in &manifest.impls {
        validate_impl(block, ctx)?;
    }
    Ok(())
}

fn validate_impl(block: &ImplBlock, ctx: &ParseContext) -> Result<()> {
    let owner = match &block.self_ty {
        TypeExpr::Path(path) => path.simple_name().to_string(),
        other => {
            return Err(ctx.error_at(
                format!("impl self type must be a named type, found '{other}'"),
                &other.to_string(),
            ));
        }
    };
    let ctx = ctx.push(&owner);

    let mut seen = HashSet::new();
    for param in &block.generics {
        ctx.validate_name(&param.name, "generic parameter")?;
        if !seen.insert(param.name.as_str()) {
            return Err(ctx.error_at(
                format!(
                    "generic parameter '{}' is declared twice on impl {}",
                    param.name, block.self_ty
                ),
                &param.name,
            ));
        }
    }

    for decl in &block.fns {
        validate_fn(block, decl, &owner, &ctx)?;
    }
    Ok(())
}

fn validate_fn(block: &ImplBlock, decl: &FnDecl, owner: &str, ctx: &ParseContext) -> Result<()> {
    ctx.validate_name(&decl.name, "function")?;
    let ctx = ctx.push(&decl.name);
    let function = ctx.path_string();

    if decl.constructor && decl.receiver.is_some() {
        return Err(ctx.error_at(
            format!("constructor '{function}' cannot take a receiver"),
            &decl.name,
        ));
    }

    let mut seen = HashSet::new();
    for param in &decl.generics {
        ctx.validate_name(&param.name, "generic parameter")?;
        if block.generics.iter().any(|g| g.name == param.name) {
            return Err(ctx.shadowed_generic(&param.name, &function, owner));
        }
        if !seen.insert(param.name.as_str()) {
            return Err(ctx.error_at(
                format!("generic parameter '{}' is declared twice on '{function}'", param.name),
                &param.name,
            ));
        }
    }

    let mut seen = HashSet::new();
    for arg in &decl.args {
        ctx.validate_name(&arg.name, "argument")?;
        if !seen.insert(arg.name.as_str()) {
            return Err(ctx.duplicate_argument(&arg.name, &function));
        }
    }

    if let Some(attr) = &decl.call_builder {
        if let Some(class_name) = &attr.class_name {
            ctx.validate_name(class_name, "builder type")?;
        }
        if let Some(method_name) = &attr.method_name {
            ctx.validate_name(method_name, "terminal method")?;
        }
    }

    Ok(())
}
