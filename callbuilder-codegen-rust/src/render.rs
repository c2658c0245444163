//! Rendering of one `BuilderSpec` as Rust items.

use callbuilder_codegen::builder::{CodeBuilder, CodeFragment, Renderable};
use callbuilder_ir::{BuilderSpec, InvocationTarget, ReceiverMode, Type, ZeroValue};

use crate::{
    RUST_NAMING,
    ast::{Field, Fn, GenericParam, Generics, Impl, Param, Struct},
};

const RECEIVER_FIELD: &str = "receiver";
const MARKER_FIELD: &str = "_marker";

/// A builder struct, its inherent impl and, when it can be constructed
/// without arguments or extra bounds, an `impl Default`.
///
/// # Example
///
/// ```
/// use callbuilder_codegen::generate;
/// use callbuilder_codegen::extract::{discover, extract};
/// use callbuilder_codegen_rust::RustBuilder;
/// use callbuilder_manifest::parse_manifest;
///
/// let manifest = parse_manifest(
///     r#"
/// [[impl]]
/// self = "Adder"
///
/// [[impl.fn]]
/// name = "add"
/// receiver = "&self"
/// args = ["x: i32"]
/// returns = "i32"
/// call_builder = {}
/// "#,
///     "callbuilder.toml",
/// )
/// .unwrap();
/// let callable = extract(&discover(&manifest)[0]).unwrap();
/// let builder = generate(&callable).unwrap();
///
/// let code = RustBuilder::new(&builder).render();
/// assert!(code.contains("pub fn set_x(mut self, x: i32) -> Self {"));
/// assert!(code.contains("self.receiver.add(self.x)"));
/// ```
pub struct RustBuilder<'a> {
    spec: &'a BuilderSpec,
    derive_debug: bool,
    type_name: String,
    receiver_field: String,
    marker_field: String,
}

impl<'a> RustBuilder<'a> {
    pub fn new(spec: &'a BuilderSpec) -> Self {
        let taken: Vec<String> = spec
            .fields
            .iter()
            .map(|f| RUST_NAMING.field_name(&f.name))
            .collect();
        Self {
            spec,
            derive_debug: false,
            type_name: RUST_NAMING.type_name(&spec.generated_name),
            receiver_field: unused_name(RECEIVER_FIELD, &taken),
            marker_field: unused_name(MARKER_FIELD, &taken),
        }
    }

    pub fn derive_debug(mut self, yes: bool) -> Self {
        self.derive_debug = yes;
        self
    }

    /// The Rust type name of the builder.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new();
        builder.emit(self);
        builder.build()
    }

    /// Declared type variables followed by the receiver's erased ones.
    fn generics(&self) -> Generics {
        let erased = self
            .spec
            .receiver
            .iter()
            .flat_map(|receiver| receiver.erased.iter());
        self.spec
            .type_vars
            .iter()
            .chain(erased)
            .map(|var| {
                var.bounds
                    .iter()
                    .fold(GenericParam::new(&var.name), |param, bound| {
                        param.bound(bound.to_string())
                    })
            })
            .collect()
    }

    fn field_name(&self, name: &str) -> String {
        RUST_NAMING.field_name(name)
    }

    fn marker_type(&self) -> Option<String> {
        match self.spec.phantom.as_slice() {
            [] => None,
            [single] => Some(format!("std::marker::PhantomData<fn() -> {}>", single)),
            many => Some(format!(
                "std::marker::PhantomData<fn() -> ({})>",
                many.join(", ")
            )),
        }
    }

    fn to_struct(&self) -> Struct {
        let mut item = Struct::new(&self.type_name)
            .doc(format!("Builder for `{}`.", self.spec.source))
            .generics(self.generics());
        if self.derive_debug {
            item = item.derive("Debug");
        }
        if let Some(receiver) = &self.spec.receiver {
            item = item.field(Field::new(&self.receiver_field, receiver.ty.to_string()));
        }
        for field in &self.spec.fields {
            item = item.field(Field::new(self.field_name(&field.name), field.ty.to_string()));
        }
        if let Some(marker) = self.marker_type() {
            item = item.field(Field::new(&self.marker_field, marker));
        }
        item
    }

    /// `Type: Default` predicates for generic fields that start out as `Default::default()`.
    fn default_bounds(&self) -> Vec<String> {
        let mut predicates: Vec<String> = Vec::new();
        for field in &self.spec.fields {
            if field.default.needs_default() && field.ty.has_vars() {
                let predicate = format!("{}: Default", field.ty);
                if !predicates.contains(&predicate) {
                    predicates.push(predicate);
                }
            }
        }
        predicates
    }

    fn constructor(&self, default_bounds: &[String]) -> Fn {
        let mut ctor = Fn::new("new").returns("Self");
        let mut body = vec!["Self {".to_string()];

        if let Some(receiver) = &self.spec.receiver {
            ctor = ctor
                .doc("Starts a builder for the given instance with every argument at its zero value.")
                .param(Param::new(&self.receiver_field, receiver.ty.to_string()));
            body.push(format!("    {},", self.receiver_field));
        } else {
            ctor = ctor.doc("Starts a builder with every argument at its zero value.");
        }
        for field in &self.spec.fields {
            body.push(format!(
                "    {}: {},",
                self.field_name(&field.name),
                zero_value(field.default)
            ));
        }
        if self.marker_type().is_some() {
            body.push(format!("    {}: std::marker::PhantomData,", self.marker_field));
        }
        body.push("}".to_string());

        for predicate in default_bounds {
            ctor = ctor.where_clause(predicate);
        }
        body.into_iter().fold(ctor, Fn::body_line)
    }

    fn setters(&self) -> Vec<Fn> {
        self.spec
            .setters
            .iter()
            .filter_map(|setter| {
                let field = self.spec.field(&setter.field)?;
                let name = self.field_name(&field.name);
                Some(
                    Fn::new(RUST_NAMING.method_name(&setter.name))
                        .param(Param::receiver("mut self"))
                        .param(Param::new(&name, field.ty.to_string()))
                        .returns("Self")
                        .body_line(format!("self.{} = {};", name, name))
                        .body_line("self"),
                )
            })
            .collect()
    }

    fn terminal(&self) -> Fn {
        let receiver = match self.spec.receiver.as_ref().map(|r| r.mode) {
            Some(ReceiverMode::RefMut) => "mut self",
            _ => "self",
        };
        let args = self
            .spec
            .terminal
            .args
            .iter()
            .map(|arg| format!("self.{}", self.field_name(arg)))
            .collect::<Vec<_>>()
            .join(", ");

        let call = match &self.spec.terminal.target {
            InvocationTarget::Method { method } => {
                format!("self.{}.{}({})", self.receiver_field, method, args)
            }
            InvocationTarget::Associated { owner, function } if owner.has_args() => {
                format!("<{}>::{}({})", owner, function, args)
            }
            InvocationTarget::Associated { owner, function } => {
                format!("{}::{}({})", owner, function, args)
            }
        };

        let result = &self.spec.terminal.result_type;
        let terminal = Fn::new(RUST_NAMING.method_name(&self.spec.terminal_method_name))
            .doc(format!("Calls `{}` with the collected arguments.", self.spec.source))
            .param(Param::receiver(receiver))
            .body_line(call);
        if *result == Type::unit() {
            terminal
        } else {
            terminal.returns(result.to_string())
        }
    }
}

impl Renderable for RustBuilder<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let generics = self.generics();
        let default_bounds = self.default_bounds();

        let methods = std::iter::once(self.constructor(&default_bounds))
            .chain(self.setters())
            .chain(std::iter::once(self.terminal()));
        let inherent = methods.fold(
            Impl::new(&self.type_name).generics(generics.clone()),
            Impl::method,
        );

        let mut fragments = self.to_struct().to_fragments();
        fragments.push(CodeFragment::Blank);
        fragments.extend(inherent.to_fragments());

        if self.spec.receiver.is_none() && default_bounds.is_empty() {
            let default = Impl::new(&self.type_name)
                .generics(generics)
                .for_trait("Default")
                .method(
                    Fn::new("default")
                        .private()
                        .returns("Self")
                        .body_line("Self::new()"),
                );
            fragments.push(CodeFragment::Blank);
            fragments.extend(default.to_fragments());
        }

        fragments
    }
}

fn zero_value(value: ZeroValue) -> &'static str {
    match value {
        ZeroValue::Integer => "0",
        ZeroValue::Float => "0.0",
        ZeroValue::Bool => "false",
        ZeroValue::Char => "'\\0'",
        ZeroValue::Absent => "None",
        ZeroValue::Default => "Default::default()",
    }
}

/// `base`, or `base` with trailing underscores until it is not taken.
fn unused_name(base: &str, taken: &[String]) -> String {
    let mut name = base.to_string();
    while taken.contains(&name) {
        name.push('_');
    }
    name
}
