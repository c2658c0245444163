//! Builder naming.

use callbuilder_core::{capitalize, to_pascal_case};
use callbuilder_ir::{CallableKind, CallableSpec};

/// Suffix appended to derived builder names.
pub const BUILDER_SUFFIX: &str = "Builder";

/// Terminal method name used when the annotation does not set one.
pub const DEFAULT_TERMINAL_NAME: &str = "build";

/// The generated type's name.
///
/// `add` becomes `AddBuilder`; a constructor of `Name` becomes `NameBuilder`.
pub fn builder_name(spec: &CallableSpec) -> String {
    if let Some(name) = &spec.class_name {
        return name.clone();
    }
    match spec.kind {
        CallableKind::Constructor => format!("{}{}", spec.owner.simple_name(), BUILDER_SUFFIX),
        _ => format!("{}{}", to_pascal_case(&spec.name), BUILDER_SUFFIX),
    }
}

pub fn terminal_name(spec: &CallableSpec) -> String {
    spec.build_method_name
        .clone()
        .unwrap_or_else(|| DEFAULT_TERMINAL_NAME.to_string())
}

/// Language-neutral setter name for a field (`family` -> `setFamily`).
pub fn setter_name(field: &str) -> String {
    format!("set{}", capitalize(field))
}

#[cfg(test)]
mod tests {
    use callbuilder_ir::{OwnerType, Param, ReceiverMode, Type};

    use super::*;

    fn spec(kind: CallableKind, name: &str) -> CallableSpec {
        CallableSpec {
            kind,
            name: name.into(),
            owner: OwnerType {
                self_ty: Type::Path {
                    leading_colon: false,
                    segments: vec![
                        callbuilder_ir::Segment {
                            ident: "model".into(),
                            args: vec![],
                        },
                        callbuilder_ir::Segment {
                            ident: "Name".into(),
                            args: vec![],
                        },
                    ],
                },
                type_vars: vec![],
            },
            type_vars: vec![],
            params: vec![Param {
                name: "family".into(),
                ty: Type::named("String"),
            }],
            return_type: Type::unit(),
            class_name: None,
            build_method_name: None,
        }
    }

    #[test]
    fn test_method_name_is_derived() {
        let add = spec(
            CallableKind::InstanceMethod {
                receiver: ReceiverMode::Ref,
            },
            "add",
        );
        assert_eq!(builder_name(&add), "AddBuilder");

        let pick = spec(CallableKind::StaticMethod, "pick_second");
        assert_eq!(builder_name(&pick), "PickSecondBuilder");
    }

    #[test]
    fn test_constructor_uses_owner_name() {
        let ctor = spec(CallableKind::Constructor, "new");
        assert_eq!(builder_name(&ctor), "NameBuilder");
    }

    #[test]
    fn test_explicit_names_win() {
        let mut ctor = spec(CallableKind::Constructor, "new");
        ctor.class_name = Some("PersonName".into());
        ctor.build_method_name = Some("create".into());
        assert_eq!(builder_name(&ctor), "PersonName");
        assert_eq!(terminal_name(&ctor), "create");
    }

    #[test]
    fn test_default_terminal_name() {
        assert_eq!(terminal_name(&spec(CallableKind::StaticMethod, "f")), "build");
    }

    #[test]
    fn test_setter_name() {
        assert_eq!(setter_name("family"), "setFamily");
        assert_eq!(setter_name("x"), "setX");
        assert_eq!(setter_name("first_name"), "setFirst_name");
    }
}
