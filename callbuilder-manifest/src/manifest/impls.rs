//! Impl blocks and the function declarations they contain.

use std::fmt;

use callbuilder_core::{SyntaxError, TypeExpr, TypeParam, split_param};
use serde::Deserialize;

/// An inherent impl block: `impl<generics> SelfTy { fns }`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImplBlock {
    /// The impl's self type, e.g. `HasGen<E>`
    #[serde(rename = "self")]
    pub self_ty: TypeExpr,

    /// Generic parameters declared on the impl block
    #[serde(default)]
    pub generics: Vec<TypeParam>,

    /// Associated functions, annotated or not
    #[serde(default, rename = "fn")]
    pub fns: Vec<FnDecl>,
}

/// The receiver of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Receiver {
    #[serde(rename = "&self")]
    Ref,
    #[serde(rename = "&mut self")]
    RefMut,
    #[serde(rename = "self")]
    Owned,
}

impl Receiver {
    pub fn as_str(&self) -> &'static str {
        match self {
            Receiver::Ref => "&self",
            Receiver::RefMut => "&mut self",
            Receiver::Owned => "self",
        }
    }
}

/// One associated function.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FnDecl {
    pub name: String,

    /// Absent for associated functions without `self`
    pub receiver: Option<Receiver>,

    /// Generic parameters declared on the function
    #[serde(default)]
    pub generics: Vec<TypeParam>,

    /// Parameters as `name: Type`, in order
    #[serde(default)]
    pub args: Vec<Arg>,

    /// Return type; `()` when absent, `Self` for constructors
    pub returns: Option<TypeExpr>,

    /// Marks the function as a constructor of the impl's self type
    #[serde(default)]
    pub constructor: bool,

    /// The builder annotation; functions without it are ignored
    pub call_builder: Option<CallBuilderAttr>,
}

impl FnDecl {
    /// The declared return type with defaults applied.
    pub fn return_type(&self) -> TypeExpr {
        match &self.returns {
            Some(ty) => ty.clone(),
            None if self.constructor => TypeExpr::ident("Self"),
            None => TypeExpr::unit(),
        }
    }
}

/// Options of the `call_builder` annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallBuilderAttr {
    /// Overrides the generated type name
    pub class_name: Option<String>,
    /// Overrides the terminal method name (default `build`)
    pub method_name: Option<String>,
}

/// A function parameter written as `name: Type`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Arg {
    pub name: String,
    pub ty: TypeExpr,
}

impl TryFrom<String> for Arg {
    type Error = SyntaxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let (name, ty) = split_param(&value)?;
        Ok(Arg { name, ty })
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_fn_decl() {
        let decl: FnDecl = toml::from_str(
            r#"
            name = "to_iterable"
            receiver = "&self"
            generics = ["F: Into<E>"]
            args = ["first: F", "second: F"]
            returns = "Vec<E>"
            call_builder = { class_name = "ThreeInIterableBuilder" }
            "#,
        )
        .unwrap();

        assert_eq!(decl.receiver, Some(Receiver::Ref));
        assert_eq!(decl.generics[0].to_string(), "F: Into<E>");
        assert_eq!(decl.args[1].to_string(), "second: F");
        assert_eq!(decl.return_type().to_string(), "Vec<E>");
        assert_eq!(
            decl.call_builder.unwrap().class_name.as_deref(),
            Some("ThreeInIterableBuilder")
        );
    }

    #[test]
    fn test_return_type_defaults() {
        let method: FnDecl = toml::from_str(r#"name = "log""#).unwrap();
        assert_eq!(method.return_type(), TypeExpr::unit());
        assert!(method.call_builder.is_none());

        let ctor: FnDecl = toml::from_str(
            r#"
            name = "new"
            constructor = true
            "#,
        )
        .unwrap();
        assert_eq!(ctor.return_type(), TypeExpr::ident("Self"));
    }

    #[test]
    fn test_receiver_modes() {
        let decl: FnDecl = toml::from_str(
            r#"
            name = "push"
            receiver = "&mut self"
            "#,
        )
        .unwrap();
        assert_eq!(decl.receiver, Some(Receiver::RefMut));
        assert_eq!(Receiver::Owned.as_str(), "self");
    }

    #[test]
    fn test_bad_arg_is_rejected() {
        let result: Result<FnDecl, _> = toml::from_str(
            r#"
            name = "f"
            args = ["x i32"]
            "#,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("expected 'name: Type'"));
    }
}
