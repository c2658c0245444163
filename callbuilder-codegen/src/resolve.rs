//! Type-variable resolution.
//!
//! Decides which generic parameters a builder must declare. A variable is
//! declared when a parameter or the return type mentions it, or when the
//! bound of a declared variable does. Callable variables come first, then
//! owner variables, each group in declaration order.
//!
//! Associated functions are called through their owner, so owner variables
//! such a builder does not declare are instantiated at `()`.

use std::collections::{HashMap, HashSet};

use callbuilder_ir::{
    CallableKind, CallableSpec, GeneratedTypeVar, Scope, Type, TypeVar, TypeVarRef,
};

use crate::GenerateError;

/// The generic surface of one builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Declared variables in output order.
    pub type_vars: Vec<GeneratedTypeVar>,
    /// Declared owner variables the receiver is generic over, in owner order.
    pub receiver_vars: Vec<String>,
    /// Owner variables of an instance method's receiver that nothing references.
    pub erased: Vec<GeneratedTypeVar>,
    renames: HashMap<TypeVarRef, String>,
    instantiated: HashSet<TypeVarRef>,
}

impl Resolution {
    /// Rewrite a source type into the builder's namespace.
    pub fn substitute(&self, ty: &Type) -> Type {
        ty.rename_vars(&self.renames)
    }

    /// The builder-side name of a source variable.
    pub fn name_of<'a>(&'a self, var: &'a TypeVarRef) -> &'a str {
        self.renames
            .get(var)
            .map(String::as_str)
            .unwrap_or(&var.name)
    }

    /// Rewrite a source type into the builder's namespace, with undeclared
    /// owner variables of an associated call replaced by `()`.
    pub fn instantiate(&self, ty: &Type) -> Type {
        self.substitute(&ty.substitute_vars(&|var: &TypeVarRef| {
            self.instantiated.contains(var).then(Type::unit)
        }))
    }
}

/// Traits `()` implements, matched on the bound's last path segment.
const UNIT_TRAITS: &[&str] = &[
    "Clone", "Copy", "Debug", "Default", "PartialEq", "Eq", "PartialOrd", "Ord", "Hash", "Send",
    "Sync", "Unpin", "Sized",
];

fn unit_satisfies(bound: &Type) -> bool {
    bound
        .last_segment()
        .is_some_and(|s| s.args.is_empty() && UNIT_TRAITS.contains(&s.ident.as_str()))
}

/// Compute the ordered type variables a builder for `spec` declares.
pub fn resolve(spec: &CallableSpec) -> Result<Resolution, GenerateError> {
    let is_static = matches!(spec.kind, CallableKind::StaticMethod);
    let unresolved = |context: String, var: &TypeVarRef| GenerateError::UnresolvedBound {
        signature: spec.signature_key(),
        context,
        name: var.name.clone(),
    };

    let sources = spec
        .params
        .iter()
        .map(|p| (format!("parameter '{}'", p.name), &p.ty))
        .chain(std::iter::once(("return type".to_string(), &spec.return_type)));

    let mut admitted: HashSet<TypeVarRef> = HashSet::new();
    let mut pending: Vec<TypeVarRef> = Vec::new();

    for (context, ty) in sources {
        for var in ty.vars() {
            if is_static && var.scope == Scope::Owner {
                return Err(unresolved(context, var));
            }
            if admitted.insert(var.clone()) {
                pending.push(var.clone());
            }
        }
    }

    // Bound closure
    while let Some(var) = pending.pop() {
        let Some(decl) = spec.type_var(&var) else {
            return Err(unresolved("type".to_string(), &var));
        };
        for bound_var in decl.bound_vars() {
            if is_static && bound_var.scope == Scope::Owner {
                return Err(unresolved(format!("bound of '{}'", var.name), bound_var));
            }
            if admitted.insert(bound_var.clone()) {
                pending.push(bound_var.clone());
            }
        }
    }

    let callable: Vec<&TypeVar> = spec
        .type_vars
        .iter()
        .filter(|v| admitted.contains(&v.reference()))
        .collect();
    let (owner, erased): (Vec<&TypeVar>, Vec<&TypeVar>) = spec
        .owner
        .type_vars
        .iter()
        .partition(|v| admitted.contains(&v.reference()));
    let erased = if spec.kind.is_instance() {
        erased
    } else {
        Vec::new()
    };

    let instantiated = if spec.kind.is_instance() {
        HashSet::new()
    } else {
        unit_instantiation(spec, &admitted)?
    };
    let renames = owner_renames(spec, &callable, owner.iter().chain(&erased).copied());

    let mut resolution = Resolution {
        type_vars: Vec::new(),
        receiver_vars: Vec::new(),
        erased: Vec::new(),
        renames,
        instantiated,
    };
    resolution.type_vars = callable
        .iter()
        .chain(&owner)
        .map(|var| generated(&resolution, var))
        .collect();
    resolution.erased = erased.iter().map(|var| generated(&resolution, var)).collect();
    if spec.kind.is_instance() {
        resolution.receiver_vars = owner
            .iter()
            .map(|var| resolution.name_of(&var.reference()).to_string())
            .collect();
    }

    Ok(resolution)
}

/// Owner variables of an associated call the builder leaves undeclared.
fn unit_instantiation(
    spec: &CallableSpec,
    admitted: &HashSet<TypeVarRef>,
) -> Result<HashSet<TypeVarRef>, GenerateError> {
    let mut instantiated = HashSet::new();
    for var in &spec.owner.type_vars {
        let reference = var.reference();
        if admitted.contains(&reference) {
            continue;
        }
        if let Some(bound) = var.bounds.iter().find(|b| !unit_satisfies(b)) {
            return Err(GenerateError::UninstantiableOwner {
                signature: spec.signature_key(),
                name: var.name.clone(),
                bound: bound.to_string(),
            });
        }
        instantiated.insert(reference);
    }
    Ok(instantiated)
}

/// Owner variables whose name is taken by a declared callable variable get
/// a fresh name (`E` becomes `E1`). Manifests reject such shadowing, so only
/// hand-built `CallableSpec`s reach the renaming.
fn owner_renames<'a>(
    spec: &CallableSpec,
    callable: &[&TypeVar],
    owner: impl Iterator<Item = &'a TypeVar>,
) -> HashMap<TypeVarRef, String> {
    let mut taken: HashSet<String> = callable.iter().map(|v| v.name.clone()).collect();
    let all: HashSet<&str> = spec
        .type_vars
        .iter()
        .chain(&spec.owner.type_vars)
        .map(|v| v.name.as_str())
        .collect();

    let mut renames = HashMap::new();
    for var in owner {
        let name = if taken.contains(&var.name) {
            let fresh = (1..)
                .map(|i| format!("{}{}", var.name, i))
                .find(|candidate| !taken.contains(candidate) && !all.contains(candidate.as_str()))
                .unwrap_or_else(|| var.name.clone());
            renames.insert(var.reference(), fresh.clone());
            fresh
        } else {
            var.name.clone()
        };
        taken.insert(name);
    }
    renames
}

fn generated(resolution: &Resolution, var: &TypeVar) -> GeneratedTypeVar {
    GeneratedTypeVar {
        name: resolution.name_of(&var.reference()).to_string(),
        origin: var.scope,
        bounds: var.bounds.iter().map(|b| resolution.substitute(b)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use callbuilder_ir::{OwnerType, Param, ReceiverMode};

    use super::*;

    fn var(name: &str, scope: Scope, bounds: Vec<Type>) -> TypeVar {
        TypeVar {
            name: name.into(),
            scope,
            bounds,
        }
    }

    fn owner_ref(name: &str) -> Type {
        Type::Var(TypeVarRef::owner(name))
    }

    fn callable_ref(name: &str) -> Type {
        Type::Var(TypeVarRef::callable(name))
    }

    fn param(name: &str, ty: Type) -> Param {
        Param {
            name: name.into(),
            ty,
        }
    }

    /// `impl<E, K> HasGen<E, K>`
    fn has_gen(kind: CallableKind, type_vars: Vec<TypeVar>, params: Vec<Param>, ret: Type) -> CallableSpec {
        CallableSpec {
            kind,
            name: "call".into(),
            owner: OwnerType {
                self_ty: Type::generic("HasGen", vec![owner_ref("E"), owner_ref("K")]),
                type_vars: vec![
                    var("E", Scope::Owner, vec![]),
                    var("K", Scope::Owner, vec![Type::named("Ord")]),
                ],
            },
            type_vars,
            params,
            return_type: ret,
            class_name: None,
            build_method_name: None,
        }
    }

    const INSTANCE: CallableKind = CallableKind::InstanceMethod {
        receiver: ReceiverMode::Ref,
    };

    fn names(vars: &[GeneratedTypeVar]) -> Vec<&str> {
        vars.iter().map(|v| v.name.as_str()).collect()
    }

    #[test]
    fn test_static_without_owner_references_is_not_generic() {
        let spec = has_gen(
            CallableKind::StaticMethod,
            vec![],
            vec![
                param("first", Type::named("String")),
                param("second", Type::named("String")),
            ],
            Type::named("String"),
        );

        let resolution = resolve(&spec).unwrap();
        assert!(resolution.type_vars.is_empty());
        assert!(resolution.receiver_vars.is_empty());
        assert!(resolution.erased.is_empty());
    }

    #[test]
    fn test_static_call_instantiates_owner_at_unit() {
        let spec = has_gen(
            CallableKind::StaticMethod,
            vec![],
            vec![param("first", Type::named("i32"))],
            Type::named("i32"),
        );

        let resolution = resolve(&spec).unwrap();
        assert_eq!(
            resolution.instantiate(&spec.owner.self_ty).to_string(),
            "HasGen<(), ()>"
        );
    }

    #[test]
    fn test_static_call_with_foreign_owner_bound_is_rejected() {
        let mut spec = has_gen(CallableKind::StaticMethod, vec![], vec![], Type::unit());
        spec.owner.type_vars[1].bounds = vec![Type::named("Ord"), Type::named("Serialize")];

        match resolve(&spec).unwrap_err() {
            GenerateError::UninstantiableOwner { name, bound, .. } => {
                assert_eq!(name, "K");
                assert_eq!(bound, "Serialize");
            }
            other => panic!("expected uninstantiable owner, got {other:?}"),
        }
    }

    #[test]
    fn test_instance_receiver_is_never_instantiated() {
        let mut spec = has_gen(INSTANCE, vec![], vec![], Type::unit());
        spec.owner.type_vars[1].bounds = vec![Type::named("Serialize")];

        let resolution = resolve(&spec).unwrap();
        assert_eq!(
            resolution.instantiate(&spec.owner.self_ty).to_string(),
            "HasGen<E, K>"
        );
    }

    #[test]
    fn test_static_declares_only_callable_vars() {
        let spec = has_gen(
            CallableKind::StaticMethod,
            vec![var("T", Scope::Callable, vec![Type::named("Clone")])],
            vec![param("items", Type::generic("Vec", vec![callable_ref("T")]))],
            callable_ref("T"),
        );

        let resolution = resolve(&spec).unwrap();
        assert_eq!(names(&resolution.type_vars), vec!["T"]);
        assert!(
            resolution
                .type_vars
                .iter()
                .all(|v| v.origin == Scope::Callable)
        );
    }

    #[test]
    fn test_static_referencing_owner_var_is_unresolved() {
        let spec = has_gen(
            CallableKind::StaticMethod,
            vec![],
            vec![param("item", owner_ref("E"))],
            Type::unit(),
        );

        match resolve(&spec).unwrap_err() {
            GenerateError::UnresolvedBound { context, name, .. } => {
                assert_eq!(context, "parameter 'item'");
                assert_eq!(name, "E");
            }
            other => panic!("expected unresolved bound, got {other:?}"),
        }
    }

    #[test]
    fn test_static_bound_referencing_owner_var_is_unresolved() {
        let spec = has_gen(
            CallableKind::StaticMethod,
            vec![var(
                "F",
                Scope::Callable,
                vec![Type::generic("Into", vec![owner_ref("E")])],
            )],
            vec![param("item", callable_ref("F"))],
            Type::unit(),
        );

        let err = resolve(&spec).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::UnresolvedBound { ref context, .. } if context == "bound of 'F'"
        ));
    }

    #[test]
    fn test_instance_receiver_uses_exactly_referenced_owner_vars() {
        let spec = has_gen(
            INSTANCE,
            vec![],
            vec![param("a", owner_ref("E")), param("b", owner_ref("E"))],
            owner_ref("E"),
        );

        let resolution = resolve(&spec).unwrap();
        assert_eq!(names(&resolution.type_vars), vec!["E"]);
        assert_eq!(resolution.receiver_vars, vec!["E"]);
        assert_eq!(names(&resolution.erased), vec!["K"]);
        assert_eq!(resolution.erased[0].bounds, vec![Type::named("Ord")]);
    }

    #[test]
    fn test_instance_owner_vars_reached_through_bounds() {
        let spec = has_gen(
            INSTANCE,
            vec![var(
                "F",
                Scope::Callable,
                vec![Type::generic("Into", vec![owner_ref("K")])],
            )],
            vec![param("first", callable_ref("F"))],
            Type::unit(),
        );

        let resolution = resolve(&spec).unwrap();
        assert_eq!(names(&resolution.type_vars), vec!["F", "K"]);
        assert_eq!(resolution.receiver_vars, vec!["K"]);
        assert_eq!(names(&resolution.erased), vec!["E"]);
    }

    #[test]
    fn test_instance_without_owner_references() {
        let spec = has_gen(
            INSTANCE,
            vec![],
            vec![param("x", Type::named("i32"))],
            Type::named("i32"),
        );

        let resolution = resolve(&spec).unwrap();
        assert!(resolution.type_vars.is_empty());
        assert!(resolution.receiver_vars.is_empty());
        assert_eq!(names(&resolution.erased), vec!["E", "K"]);
    }

    #[test]
    fn test_order_is_callable_then_owner() {
        let spec = has_gen(
            INSTANCE,
            vec![
                var("B", Scope::Callable, vec![]),
                var("A", Scope::Callable, vec![]),
            ],
            vec![
                param("k", owner_ref("K")),
                param("a", callable_ref("A")),
                param("e", owner_ref("E")),
                param("b", callable_ref("B")),
            ],
            Type::unit(),
        );

        let resolution = resolve(&spec).unwrap();
        assert_eq!(names(&resolution.type_vars), vec!["B", "A", "E", "K"]);
        assert_eq!(resolution.receiver_vars, vec!["E", "K"]);
        assert_eq!(resolve(&spec).unwrap(), resolution);
    }

    #[test]
    fn test_same_named_vars_stay_distinct() {
        let spec = has_gen(
            INSTANCE,
            vec![var("E", Scope::Callable, vec![])],
            vec![param("mine", callable_ref("E")), param("theirs", owner_ref("E"))],
            Type::unit(),
        );

        let resolution = resolve(&spec).unwrap();
        assert_eq!(names(&resolution.type_vars), vec!["E", "E1"]);
        assert_eq!(resolution.receiver_vars, vec!["E1"]);
        assert_eq!(resolution.substitute(&owner_ref("E")).to_string(), "E1");
        assert_eq!(resolution.substitute(&callable_ref("E")).to_string(), "E");
        assert_eq!(
            resolution.substitute(&spec.owner.self_ty).to_string(),
            "HasGen<E1, K>"
        );
    }

    #[test]
    fn test_constructor_declares_owner_vars_from_return_type() {
        let mut spec = has_gen(
            CallableKind::Constructor,
            vec![],
            vec![param("e", owner_ref("E"))],
            Type::unit(),
        );
        spec.return_type = spec.owner.self_ty.clone();

        let resolution = resolve(&spec).unwrap();
        assert_eq!(names(&resolution.type_vars), vec!["E", "K"]);
        assert!(resolution.receiver_vars.is_empty());
        assert!(resolution.erased.is_empty());
        assert_eq!(
            resolution.instantiate(&spec.owner.self_ty).to_string(),
            "HasGen<E, K>"
        );
    }
}
