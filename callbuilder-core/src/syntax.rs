//! Rust type syntax accepted in manifests.
//!
//! Type strings are parsed with `syn` and lowered into a small, owned tree
//! that only admits the shapes a generated builder can store in a field:
//! paths with generic arguments, tuples and fixed-size arrays.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error produced when a type, bound or parameter string cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("invalid type syntax '{input}': {message}")]
    Parse { input: String, message: String },

    #[error("unsupported {construct} in '{input}'")]
    Unsupported {
        input: String,
        construct: &'static str,
    },

    #[error("expected 'name: Type', found '{input}'")]
    MissingColon { input: String },
}

/// A Rust type as written in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeExpr {
    /// `Vec<T>`, `std::collections::HashMap<K, V>`, `E`, `Self`
    Path(PathExpr),
    /// `(A, B)`; the empty tuple is the unit type
    Tuple(Vec<TypeExpr>),
    /// `[T; N]`
    Array { elem: Box<TypeExpr>, len: String },
}

/// A possibly qualified path with generic arguments on any segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathExpr {
    pub leading_colon: bool,
    pub segments: Vec<SegmentExpr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SegmentExpr {
    pub ident: String,
    pub args: Vec<GenericArgExpr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenericArgExpr {
    Type(TypeExpr),
    /// Associated type binding such as `Item = T`
    Binding { name: String, ty: TypeExpr },
}

/// A generic parameter declaration: `F` or `F: Into<E> + Clone`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeParam {
    pub name: String,
    pub bounds: Vec<PathExpr>,
}

impl TypeExpr {
    /// The unit type `()`.
    pub fn unit() -> Self {
        TypeExpr::Tuple(Vec::new())
    }

    /// A single-segment path without arguments, e.g. `E` or `Self`.
    pub fn ident(name: impl Into<String>) -> Self {
        TypeExpr::Path(PathExpr::ident(name))
    }

    /// Returns the identifier if this is a bare single-segment path.
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            TypeExpr::Path(path) => path.as_ident(),
            _ => None,
        }
    }
}

impl PathExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        Self {
            leading_colon: false,
            segments: vec![SegmentExpr {
                ident: name.into(),
                args: Vec::new(),
            }],
        }
    }

    /// Returns the identifier if this path is a bare single segment.
    pub fn as_ident(&self) -> Option<&str> {
        match self.segments.as_slice() {
            [segment] if !self.leading_colon && segment.args.is_empty() => Some(&segment.ident),
            _ => None,
        }
    }

    /// The last segment's identifier (`HashMap` for `std::collections::HashMap<K, V>`).
    pub fn simple_name(&self) -> &str {
        self.segments
            .last()
            .map(|s| s.ident.as_str())
            .unwrap_or_default()
    }
}

// ============================================================================
// Parsing
// ============================================================================

impl FromStr for TypeExpr {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ty: syn::Type = syn::parse_str(s).map_err(|e| parse_error(s, e))?;
        lower_type(&ty, s)
    }
}

impl FromStr for TypeParam {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let param: syn::TypeParam = syn::parse_str(s).map_err(|e| parse_error(s, e))?;
        if param.default.is_some() {
            return Err(unsupported(s, "default type parameter"));
        }
        let bounds = param
            .bounds
            .iter()
            .map(|bound| match bound {
                syn::TypeParamBound::Trait(t)
                    if matches!(t.modifier, syn::TraitBoundModifier::None)
                        && t.lifetimes.is_none() =>
                {
                    lower_path(&t.path, s)
                }
                syn::TypeParamBound::Trait(_) => Err(unsupported(s, "bound modifier")),
                syn::TypeParamBound::Lifetime(_) => Err(unsupported(s, "lifetime bound")),
                _ => Err(unsupported(s, "bound")),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TypeParam {
            name: param.ident.to_string(),
            bounds,
        })
    }
}

/// Split a `name: Type` parameter declaration.
pub fn split_param(s: &str) -> Result<(String, TypeExpr), SyntaxError> {
    let (name, ty) = s.split_once(':').ok_or_else(|| SyntaxError::MissingColon {
        input: s.to_string(),
    })?;
    Ok((name.trim().to_string(), ty.trim().parse()?))
}

fn parse_error(input: &str, err: syn::Error) -> SyntaxError {
    SyntaxError::Parse {
        input: input.to_string(),
        message: err.to_string(),
    }
}

fn unsupported(input: &str, construct: &'static str) -> SyntaxError {
    SyntaxError::Unsupported {
        input: input.to_string(),
        construct,
    }
}

fn lower_type(ty: &syn::Type, input: &str) -> Result<TypeExpr, SyntaxError> {
    match ty {
        syn::Type::Path(p) if p.qself.is_none() => Ok(TypeExpr::Path(lower_path(&p.path, input)?)),
        syn::Type::Path(_) => Err(unsupported(input, "qualified self type")),
        syn::Type::Tuple(t) => t
            .elems
            .iter()
            .map(|elem| lower_type(elem, input))
            .collect::<Result<Vec<_>, _>>()
            .map(TypeExpr::Tuple),
        syn::Type::Paren(p) => lower_type(&p.elem, input),
        syn::Type::Group(g) => lower_type(&g.elem, input),
        syn::Type::Array(a) => {
            let len = match &a.len {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Int(int),
                    ..
                }) => int.base10_digits().to_string(),
                _ => return Err(unsupported(input, "non-literal array length")),
            };
            Ok(TypeExpr::Array {
                elem: Box::new(lower_type(&a.elem, input)?),
                len,
            })
        }
        syn::Type::Reference(_) => Err(unsupported(input, "reference type")),
        syn::Type::Slice(_) => Err(unsupported(input, "slice type")),
        syn::Type::Ptr(_) => Err(unsupported(input, "raw pointer")),
        syn::Type::BareFn(_) => Err(unsupported(input, "function pointer")),
        syn::Type::TraitObject(_) => Err(unsupported(input, "trait object")),
        syn::Type::ImplTrait(_) => Err(unsupported(input, "impl trait")),
        syn::Type::Infer(_) => Err(unsupported(input, "inferred type")),
        syn::Type::Never(_) => Err(unsupported(input, "never type")),
        _ => Err(unsupported(input, "type")),
    }
}

fn lower_path(path: &syn::Path, input: &str) -> Result<PathExpr, SyntaxError> {
    let segments = path
        .segments
        .iter()
        .map(|segment| {
            let args = match &segment.arguments {
                syn::PathArguments::None => Vec::new(),
                syn::PathArguments::AngleBracketed(angle) => angle
                    .args
                    .iter()
                    .map(|arg| lower_generic_arg(arg, input))
                    .collect::<Result<Vec<_>, _>>()?,
                syn::PathArguments::Parenthesized(_) => {
                    return Err(unsupported(input, "parenthesized arguments"));
                }
            };
            Ok(SegmentExpr {
                ident: segment.ident.to_string(),
                args,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PathExpr {
        leading_colon: path.leading_colon.is_some(),
        segments,
    })
}

fn lower_generic_arg(arg: &syn::GenericArgument, input: &str) -> Result<GenericArgExpr, SyntaxError> {
    match arg {
        syn::GenericArgument::Type(ty) => Ok(GenericArgExpr::Type(lower_type(ty, input)?)),
        syn::GenericArgument::AssocType(assoc) if assoc.generics.is_none() => {
            Ok(GenericArgExpr::Binding {
                name: assoc.ident.to_string(),
                ty: lower_type(&assoc.ty, input)?,
            })
        }
        syn::GenericArgument::Lifetime(_) => Err(unsupported(input, "lifetime argument")),
        syn::GenericArgument::Const(_) => Err(unsupported(input, "const argument")),
        _ => Err(unsupported(input, "generic argument")),
    }
}

// ============================================================================
// Rendering
// ============================================================================

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Path(path) => write!(f, "{}", path),
            TypeExpr::Tuple(elems) if elems.len() == 1 => write!(f, "({},)", elems[0]),
            TypeExpr::Tuple(elems) => {
                f.write_str("(")?;
                write_joined(f, elems)?;
                f.write_str(")")
            }
            TypeExpr::Array { elem, len } => write!(f, "[{}; {}]", elem, len),
        }
    }
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.leading_colon {
            f.write_str("::")?;
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("::")?;
            }
            f.write_str(&segment.ident)?;
            if !segment.args.is_empty() {
                f.write_str("<")?;
                write_joined(f, &segment.args)?;
                f.write_str(">")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for GenericArgExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenericArgExpr::Type(ty) => write!(f, "{}", ty),
            GenericArgExpr::Binding { name, ty } => write!(f, "{} = {}", name, ty),
        }
    }
}

impl fmt::Display for TypeParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for (i, bound) in self.bounds.iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { " + " })?;
            write!(f, "{}", bound)?;
        }
        Ok(())
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

// ============================================================================
// Serde glue
// ============================================================================

impl TryFrom<String> for TypeExpr {
    type Error = SyntaxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeExpr> for String {
    fn from(value: TypeExpr) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for TypeParam {
    type Error = SyntaxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeParam> for String {
    fn from(value: TypeParam) -> Self {
        value.to_string()
    }
}
