//! Resolved type representation.
//!
//! Unlike the manifest's syntactic `TypeExpr`, every type variable here is an
//! explicit [`TypeVarRef`] that records which declaration level (owner or
//! callable) introduced it.

use std::{collections::HashMap, fmt};

use serde::Serialize;

/// The declaration level a type variable belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Declared on the impl block's self type.
    Owner,
    /// Declared on the callable itself.
    Callable,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Owner => "owner",
            Scope::Callable => "callable",
        }
    }
}

/// A reference to a declared type variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeVarRef {
    pub scope: Scope,
    pub name: String,
}

impl TypeVarRef {
    pub fn owner(name: impl Into<String>) -> Self {
        Self {
            scope: Scope::Owner,
            name: name.into(),
        }
    }

    pub fn callable(name: impl Into<String>) -> Self {
        Self {
            scope: Scope::Callable,
            name: name.into(),
        }
    }
}

/// A declared type variable with its upper bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeVar {
    pub name: String,
    pub scope: Scope,
    /// Trait bounds; each is a path type such as `Into<E>`.
    pub bounds: Vec<Type>,
}

impl TypeVar {
    pub fn reference(&self) -> TypeVarRef {
        TypeVarRef {
            scope: self.scope,
            name: self.name.clone(),
        }
    }

    /// Type variables referenced by this variable's bounds, in order of appearance.
    pub fn bound_vars(&self) -> Vec<&TypeVarRef> {
        self.bounds.iter().flat_map(Type::vars).collect()
    }
}

/// A resolved Rust type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Type {
    Var(TypeVarRef),
    Path {
        leading_colon: bool,
        segments: Vec<Segment>,
    },
    Tuple(Vec<Type>),
    Array {
        elem: Box<Type>,
        len: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    pub ident: String,
    pub args: Vec<GenericArg>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenericArg {
    Type(Type),
    Binding { name: String, ty: Type },
}

impl Type {
    pub fn unit() -> Self {
        Type::Tuple(Vec::new())
    }

    /// A plain single-segment path type such as `i32` or `String`.
    pub fn named(ident: impl Into<String>) -> Self {
        Self::generic(ident, Vec::new())
    }

    /// A single-segment path type with type arguments, e.g. `Vec<T>`.
    pub fn generic(ident: impl Into<String>, args: Vec<Type>) -> Self {
        Type::Path {
            leading_colon: false,
            segments: vec![Segment {
                ident: ident.into(),
                args: args.into_iter().map(GenericArg::Type).collect(),
            }],
        }
    }

    pub fn var(var: TypeVarRef) -> Self {
        Type::Var(var)
    }

    /// Every type variable occurring in this type, in order of appearance.
    ///
    /// A variable that occurs more than once is reported more than once.
    pub fn vars(&self) -> Vec<&TypeVarRef> {
        let mut out = Vec::new();
        self.collect_vars(&mut out);
        out
    }

    fn collect_vars<'a>(&'a self, out: &mut Vec<&'a TypeVarRef>) {
        match self {
            Type::Var(var) => out.push(var),
            Type::Path { segments, .. } => {
                for arg in segments.iter().flat_map(|s| &s.args) {
                    match arg {
                        GenericArg::Type(ty) | GenericArg::Binding { ty, .. } => {
                            ty.collect_vars(out)
                        }
                    }
                }
            }
            Type::Tuple(elems) => elems.iter().for_each(|e| e.collect_vars(out)),
            Type::Array { elem, .. } => elem.collect_vars(out),
        }
    }

    /// Whether any type variable occurs in this type.
    pub fn has_vars(&self) -> bool {
        !self.vars().is_empty()
    }

    /// Rename type variables according to `renames`; unmapped variables are kept.
    pub fn rename_vars(&self, renames: &HashMap<TypeVarRef, String>) -> Type {
        self.substitute_vars(&|var: &TypeVarRef| {
            renames.get(var).map(|name| {
                Type::Var(TypeVarRef {
                    scope: var.scope,
                    name: name.clone(),
                })
            })
        })
    }

    /// Replace every type variable for which `replace` returns a type.
    pub fn substitute_vars(&self, replace: &impl Fn(&TypeVarRef) -> Option<Type>) -> Type {
        match self {
            Type::Var(var) => replace(var).unwrap_or_else(|| self.clone()),
            Type::Path {
                leading_colon,
                segments,
            } => Type::Path {
                leading_colon: *leading_colon,
                segments: segments
                    .iter()
                    .map(|segment| Segment {
                        ident: segment.ident.clone(),
                        args: segment
                            .args
                            .iter()
                            .map(|arg| match arg {
                                GenericArg::Type(ty) => GenericArg::Type(ty.substitute_vars(replace)),
                                GenericArg::Binding { name, ty } => GenericArg::Binding {
                                    name: name.clone(),
                                    ty: ty.substitute_vars(replace),
                                },
                            })
                            .collect(),
                    })
                    .collect(),
            },
            Type::Tuple(elems) => {
                Type::Tuple(elems.iter().map(|e| e.substitute_vars(replace)).collect())
            }
            Type::Array { elem, len } => Type::Array {
                elem: Box::new(elem.substitute_vars(replace)),
                len: len.clone(),
            },
        }
    }

    /// Whether this is a path type with generic arguments on any segment.
    pub fn has_args(&self) -> bool {
        match self {
            Type::Path { segments, .. } => segments.iter().any(|s| !s.args.is_empty()),
            _ => false,
        }
    }

    /// The last path segment, if this is a path type.
    pub fn last_segment(&self) -> Option<&Segment> {
        match self {
            Type::Path { segments, .. } => segments.last(),
            _ => None,
        }
    }

    /// The identifier of a bare single-segment path (`i32`, `bool`, `String`).
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Type::Path {
                leading_colon: false,
                segments,
            } => match segments.as_slice() {
                [segment] if segment.args.is_empty() => Some(&segment.ident),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Var(var) => f.write_str(&var.name),
            Type::Path {
                leading_colon,
                segments,
            } => {
                if *leading_colon {
                    f.write_str("::")?;
                }
                for (i, segment) in segments.iter().enumerate() {
                    if i > 0 {
                        f.write_str("::")?;
                    }
                    f.write_str(&segment.ident)?;
                    if !segment.args.is_empty() {
                        f.write_str("<")?;
                        for (j, arg) in segment.args.iter().enumerate() {
                            if j > 0 {
                                f.write_str(", ")?;
                            }
                            match arg {
                                GenericArg::Type(ty) => write!(f, "{}", ty)?,
                                GenericArg::Binding { name, ty } => write!(f, "{} = {}", name, ty)?,
                            }
                        }
                        f.write_str(">")?;
                    }
                }
                Ok(())
            }
            Type::Tuple(elems) if elems.len() == 1 => write!(f, "({},)", elems[0]),
            Type::Tuple(elems) => {
                f.write_str("(")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", elem)?;
                }
                f.write_str(")")
            }
            Type::Array { elem, len } => write!(f, "[{}; {}]", elem, len),
        }
    }
}

impl From<Type> for String {
    fn from(value: Type) -> Self {
        value.to_string()
    }
}
