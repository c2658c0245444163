//! Canonical description of one annotated callable.

use std::fmt;

use serde::Serialize;

use crate::{Type, TypeVar};

/// How an instance method takes its receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiverMode {
    /// `&self`
    Ref,
    /// `&mut self`
    RefMut,
    /// `self`
    Owned,
}

impl ReceiverMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReceiverMode::Ref => "&self",
            ReceiverMode::RefMut => "&mut self",
            ReceiverMode::Owned => "self",
        }
    }
}

/// The kind of callable a builder is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CallableKind {
    /// A method with a `self` receiver.
    InstanceMethod { receiver: ReceiverMode },
    /// An associated function without a receiver.
    StaticMethod,
    /// An associated function that produces the owner type.
    Constructor,
}

impl CallableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallableKind::InstanceMethod { .. } => "instance method",
            CallableKind::StaticMethod => "static method",
            CallableKind::Constructor => "constructor",
        }
    }

    pub fn is_instance(&self) -> bool {
        matches!(self, CallableKind::InstanceMethod { .. })
    }

    pub fn receiver(&self) -> Option<ReceiverMode> {
        match self {
            CallableKind::InstanceMethod { receiver } => Some(*receiver),
            _ => None,
        }
    }
}

/// The type declaring the callable: an impl block's self type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerType {
    /// The self type instantiated with the owner's own type variables (`HasGen<E>`).
    pub self_ty: Type,
    /// Type variables declared on the impl block, in declaration order.
    pub type_vars: Vec<TypeVar>,
}

impl OwnerType {
    /// The simple name of the owner (`HasGen` for `crate::model::HasGen<E>`).
    pub fn simple_name(&self) -> &str {
        self.self_ty
            .last_segment()
            .map(|s| s.ident.as_str())
            .unwrap_or_default()
    }
}

/// A named, typed parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    pub ty: Type,
}

/// Fully-typed identity of a declaration: `Owner::name(T1, T2)`.
///
/// Two declarations sharing a name but differing in parameter types get
/// distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SignatureKey(String);

impl SignatureKey {
    pub fn new(owner: &Type, name: &str, params: &[Param]) -> Self {
        Self::from_parts(owner, name, params.iter().map(|p| &p.ty))
    }

    /// Build a key from anything that renders as Rust types.
    pub fn from_parts<O, P>(owner: O, name: &str, params: impl IntoIterator<Item = P>) -> Self
    where
        O: fmt::Display,
        P: fmt::Display,
    {
        let params = params
            .into_iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self(format!("{}::{}({})", owner, name, params))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SignatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One annotated callable, normalized for generation.
///
/// Created once per discovered declaration and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallableSpec {
    pub kind: CallableKind,
    /// The callable's identifier (`add`, `new`).
    pub name: String,
    pub owner: OwnerType,
    /// Type variables declared on the callable itself, in declaration order.
    pub type_vars: Vec<TypeVar>,
    /// Parameters in declaration order; names are unique.
    pub params: Vec<Param>,
    pub return_type: Type,
    /// Overrides the derived builder type name.
    pub class_name: Option<String>,
    /// Overrides the terminal method name (`build`).
    pub build_method_name: Option<String>,
}

impl CallableSpec {
    pub fn signature_key(&self) -> SignatureKey {
        SignatureKey::new(&self.owner.self_ty, &self.name, &self.params)
    }

    /// Look up a declared type variable by reference.
    pub fn type_var(&self, var: &crate::TypeVarRef) -> Option<&TypeVar> {
        let vars = match var.scope {
            crate::Scope::Owner => &self.owner.type_vars,
            crate::Scope::Callable => &self.type_vars,
        };
        vars.iter().find(|v| v.name == var.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeVarRef;

    #[test]
    fn test_signature_key_includes_param_types() {
        let owner = Type::named("ConfusingSignatures");
        let ints = vec![
            Param {
                name: "x".into(),
                ty: Type::named("i32"),
            },
            Param {
                name: "y".into(),
                ty: Type::named("i32"),
            },
        ];
        let strings = vec![Param {
            name: "left".into(),
            ty: Type::named("String"),
        }];

        let a = SignatureKey::new(&owner, "add", &ints);
        let b = SignatureKey::new(&owner, "add", &strings);
        assert_eq!(a.as_str(), "ConfusingSignatures::add(i32, i32)");
        assert_ne!(a, b);
    }

    #[test]
    fn test_owner_simple_name() {
        let owner = OwnerType {
            self_ty: Type::Path {
                leading_colon: false,
                segments: vec![
                    crate::Segment {
                        ident: "model".into(),
                        args: Vec::new(),
                    },
                    crate::Segment {
                        ident: "HasGen".into(),
                        args: vec![crate::GenericArg::Type(Type::var(TypeVarRef::owner("E")))],
                    },
                ],
            },
            type_vars: Vec::new(),
        };
        assert_eq!(owner.simple_name(), "HasGen");
    }

    #[test]
    fn test_kind_receiver() {
        let kind = CallableKind::InstanceMethod {
            receiver: ReceiverMode::RefMut,
        };
        assert!(kind.is_instance());
        assert_eq!(kind.receiver(), Some(ReceiverMode::RefMut));
        assert_eq!(CallableKind::Constructor.receiver(), None);
        assert_eq!(ReceiverMode::RefMut.as_str(), "&mut self");
    }
}
