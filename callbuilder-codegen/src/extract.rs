//! Declaration model extraction.
//!
//! Turns annotated manifest declarations into [`CallableSpec`]s, resolving
//! every type name against the callable's and the owner's generic scopes.

use callbuilder_core::{GenericArgExpr, PathExpr, TypeExpr, TypeParam};
use callbuilder_ir::{
    CallableKind, CallableSpec, GenericArg, OwnerType, Param, ReceiverMode, Scope, Segment,
    SignatureKey, Type, TypeVar, TypeVarRef,
};
use callbuilder_manifest::{FnDecl, ImplBlock, Manifest, Receiver};

use crate::GenerateError;

/// An annotated function together with the impl block declaring it.
#[derive(Debug, Clone, Copy)]
pub struct RawDeclaration<'a> {
    pub owner: &'a ImplBlock,
    pub decl: &'a FnDecl,
}

impl RawDeclaration<'_> {
    /// Signature key built from the declaration as written.
    ///
    /// Used to identify declarations that fail before their types are resolved.
    pub fn signature(&self) -> SignatureKey {
        SignatureKey::from_parts(
            &self.owner.self_ty,
            &self.decl.name,
            self.decl.args.iter().map(|arg| &arg.ty),
        )
    }
}

/// Collect every annotated declaration, in manifest order.
pub fn discover(manifest: &Manifest) -> Vec<RawDeclaration<'_>> {
    manifest
        .annotated()
        .map(|(owner, decl)| RawDeclaration { owner, decl })
        .collect()
}

/// Normalize one annotated declaration.
pub fn extract(raw: &RawDeclaration<'_>) -> Result<CallableSpec, GenerateError> {
    let RawDeclaration { owner, decl } = *raw;
    let malformed = |reason: String| GenerateError::MalformedDeclaration {
        signature: raw.signature(),
        reason,
    };

    if decl.args.is_empty() {
        return Err(malformed(
            "a builder needs at least one parameter to set".to_string(),
        ));
    }

    let owner_scope = Scopes {
        owner: &owner.generics,
        callable: &[],
        self_ty: None,
    };
    let self_ty = owner_scope.lower(&owner.self_ty).map_err(malformed)?;
    let owner_vars = owner
        .generics
        .iter()
        .map(|param| owner_scope.type_var(param, Scope::Owner))
        .collect::<Result<Vec<_>, _>>()
        .map_err(malformed)?;

    let scopes = Scopes {
        owner: &owner.generics,
        callable: &decl.generics,
        self_ty: Some(&self_ty),
    };
    let type_vars = decl
        .generics
        .iter()
        .map(|param| scopes.type_var(param, Scope::Callable))
        .collect::<Result<Vec<_>, _>>()
        .map_err(malformed)?;
    let params = decl
        .args
        .iter()
        .map(|arg| {
            Ok(Param {
                name: arg.name.clone(),
                ty: scopes.lower(&arg.ty)?,
            })
        })
        .collect::<Result<Vec<_>, String>>()
        .map_err(malformed)?;
    let return_type = scopes.lower(&decl.return_type()).map_err(malformed)?;

    let kind = if decl.constructor {
        CallableKind::Constructor
    } else {
        match decl.receiver {
            Some(receiver) => CallableKind::InstanceMethod {
                receiver: receiver_mode(receiver),
            },
            None => CallableKind::StaticMethod,
        }
    };

    let attr = decl.call_builder.clone().unwrap_or_default();

    Ok(CallableSpec {
        kind,
        name: decl.name.clone(),
        owner: OwnerType {
            self_ty,
            type_vars: owner_vars,
        },
        type_vars,
        params,
        return_type,
        class_name: attr.class_name,
        build_method_name: attr.method_name,
    })
}

fn receiver_mode(receiver: Receiver) -> ReceiverMode {
    match receiver {
        Receiver::Ref => ReceiverMode::Ref,
        Receiver::RefMut => ReceiverMode::RefMut,
        Receiver::Owned => ReceiverMode::Owned,
    }
}

/// Generic names visible at one declaration level.
///
/// Lookup tries the callable's parameters before the owner's.
struct Scopes<'a> {
    owner: &'a [TypeParam],
    callable: &'a [TypeParam],
    /// What `Self` means; absent while lowering the self type itself
    self_ty: Option<&'a Type>,
}

impl Scopes<'_> {
    fn lookup(&self, ident: &str) -> Option<TypeVarRef> {
        if self.callable.iter().any(|p| p.name == ident) {
            Some(TypeVarRef::callable(ident))
        } else if self.owner.iter().any(|p| p.name == ident) {
            Some(TypeVarRef::owner(ident))
        } else {
            None
        }
    }

    fn type_var(&self, param: &TypeParam, scope: Scope) -> Result<TypeVar, String> {
        Ok(TypeVar {
            name: param.name.clone(),
            scope,
            bounds: param
                .bounds
                .iter()
                .map(|bound| self.lower_path(bound))
                .collect::<Result<_, _>>()?,
        })
    }

    fn lower(&self, ty: &TypeExpr) -> Result<Type, String> {
        match ty {
            TypeExpr::Path(path) => self.lower_path(path),
            TypeExpr::Tuple(elems) => Ok(Type::Tuple(
                elems
                    .iter()
                    .map(|elem| self.lower(elem))
                    .collect::<Result<_, _>>()?,
            )),
            TypeExpr::Array { elem, len } => Ok(Type::Array {
                elem: Box::new(self.lower(elem)?),
                len: len.clone(),
            }),
        }
    }

    fn lower_path(&self, path: &PathExpr) -> Result<Type, String> {
        if let Some(ident) = path.as_ident() {
            if ident == "Self" {
                return self
                    .self_ty
                    .cloned()
                    .ok_or_else(|| "'Self' cannot appear in an impl self type".to_string());
            }
            if let Some(var) = self.lookup(ident) {
                return Ok(Type::Var(var));
            }
        }

        if path.segments.first().is_some_and(|s| s.ident == "Self") {
            return Err(format!("associated path '{}' is not supported", path));
        }
        if path.segments.len() == 1
            && let Some(var) = self.lookup(path.simple_name())
        {
            return Err(format!(
                "type variable '{}' cannot take generic arguments",
                var.name
            ));
        }

        let segments = path
            .segments
            .iter()
            .map(|segment| {
                let args = segment
                    .args
                    .iter()
                    .map(|arg| match arg {
                        GenericArgExpr::Type(ty) => self.lower(ty).map(GenericArg::Type),
                        GenericArgExpr::Binding { name, ty } => Ok(GenericArg::Binding {
                            name: name.clone(),
                            ty: self.lower(ty)?,
                        }),
                    })
                    .collect::<Result<Vec<_>, String>>()?;
                Ok(Segment {
                    ident: segment.ident.clone(),
                    args,
                })
            })
            .collect::<Result<Vec<_>, String>>()?;

        Ok(Type::Path {
            leading_colon: path.leading_colon,
            segments,
        })
    }
}

#[cfg(test)]
mod tests {
    use callbuilder_manifest::parse_manifest;

    use super::*;

    fn extract_all(src: &str) -> Vec<Result<CallableSpec, GenerateError>> {
        let manifest = parse_manifest(src, "test.toml").unwrap();
        discover(&manifest).iter().map(extract).collect()
    }

    fn extract_one(src: &str) -> CallableSpec {
        extract_all(src).remove(0).unwrap()
    }

    #[test]
    fn test_discover_skips_unannotated() {
        let manifest = parse_manifest(
            r#"
[[impl]]
self = "Adder"

[[impl.fn]]
name = "add"
receiver = "&self"
args = ["x: i32"]
call_builder = {}

[[impl.fn]]
name = "reset"
receiver = "&mut self"
"#,
            "test.toml",
        )
        .unwrap();

        let found = discover(&manifest);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].decl.name, "add");
    }

    #[test]
    fn test_classifies_kinds() {
        let specs = extract_all(
            r#"
[[impl]]
self = "Name"

[[impl.fn]]
name = "new"
constructor = true
args = ["given: Option<String>"]
call_builder = {}

[[impl.fn]]
name = "greet"
receiver = "&mut self"
args = ["greeting: String"]
call_builder = {}

[[impl.fn]]
name = "parse"
args = ["s: String"]
returns = "Option<Self>"
call_builder = {}
"#,
        );

        let kinds: Vec<_> = specs.into_iter().map(|s| s.unwrap().kind).collect();
        assert_eq!(
            kinds,
            vec![
                CallableKind::Constructor,
                CallableKind::InstanceMethod {
                    receiver: ReceiverMode::RefMut
                },
                CallableKind::StaticMethod,
            ]
        );
    }

    #[test]
    fn test_resolves_scopes() {
        let spec = extract_one(
            r#"
[[impl]]
self = "HasGen<E>"
generics = ["E: Clone"]

[[impl.fn]]
name = "to_iterable"
receiver = "&self"
generics = ["F: Into<E>"]
args = ["first: F", "second: Vec<E>", "third: String"]
returns = "Vec<E>"
call_builder = {}
"#,
        );

        assert_eq!(spec.owner.type_vars.len(), 1);
        assert_eq!(spec.owner.type_vars[0].bounds, vec![Type::named("Clone")]);
        assert_eq!(
            spec.params[0].ty,
            Type::Var(TypeVarRef::callable("F"))
        );
        assert_eq!(
            spec.params[1].ty,
            Type::generic("Vec", vec![Type::Var(TypeVarRef::owner("E"))])
        );
        assert_eq!(spec.params[2].ty, Type::named("String"));
        assert_eq!(
            spec.type_vars[0].bound_vars(),
            vec![&TypeVarRef::owner("E")]
        );
        assert_eq!(
            spec.signature_key().as_str(),
            "HasGen<E>::to_iterable(F, Vec<E>, String)"
        );
    }

    #[test]
    fn test_self_resolves_to_owner() {
        let spec = extract_one(
            r#"
[[impl]]
self = "Container<I>"
generics = ["I"]

[[impl.fn]]
name = "new"
constructor = true
args = ["items: Vec<I>"]
call_builder = {}
"#,
        );

        assert_eq!(spec.return_type, spec.owner.self_ty);
        assert_eq!(spec.return_type.to_string(), "Container<I>");
        assert!(matches!(
            spec.return_type.vars().as_slice(),
            [var] if var.scope == Scope::Owner
        ));
    }

    #[test]
    fn test_static_keeps_owner_vars() {
        let spec = extract_one(
            r#"
[[impl]]
self = "HasGen<E>"
generics = ["E"]

[[impl.fn]]
name = "pick_second"
args = ["first: String", "second: String"]
returns = "String"
call_builder = { class_name = "PickSecond", method_name = "pick" }
"#,
        );

        assert_eq!(spec.kind, CallableKind::StaticMethod);
        assert_eq!(spec.owner.type_vars.len(), 1);
        assert_eq!(spec.class_name.as_deref(), Some("PickSecond"));
        assert_eq!(spec.build_method_name.as_deref(), Some("pick"));
    }

    #[test]
    fn test_zero_parameters_is_malformed() {
        let results = extract_all(
            r#"
[[impl]]
self = "Adder"

[[impl.fn]]
name = "total"
receiver = "&self"
returns = "i32"
call_builder = {}
"#,
        );

        match &results[0] {
            Err(GenerateError::MalformedDeclaration { signature, .. }) => {
                assert_eq!(signature.as_str(), "Adder::total()");
            }
            other => panic!("expected malformed declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_associated_self_path_is_malformed() {
        let results = extract_all(
            r#"
[[impl]]
self = "Parser"

[[impl.fn]]
name = "feed"
receiver = "&mut self"
args = ["item: Self::Item"]
call_builder = {}
"#,
        );

        assert!(matches!(
            &results[0],
            Err(GenerateError::MalformedDeclaration { reason, .. }) if reason.contains("Self::Item")
        ));
    }
}
