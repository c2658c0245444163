//! Structural description of a generated builder type.
//!
//! A [`BuilderSpec`] is produced once from a `CallableSpec` and handed whole
//! to an emitter. It carries language-neutral names; emitters apply their own
//! naming conventions when rendering.

use serde::Serialize;

use crate::{ReceiverMode, Scope, SignatureKey, Type};

/// A type variable declared by the generated type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedTypeVar {
    pub name: String,
    /// Declaration level the variable was taken from.
    pub origin: Scope,
    /// Bounds copied from the source declaration, renamed into the generated namespace.
    pub bounds: Vec<Type>,
}

/// The instance an instance-method builder is constructed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiverSlot {
    pub mode: ReceiverMode,
    /// The owner type as stored by the builder.
    pub ty: Type,
    /// Owner type variables the receiver is generic over (all declared by the builder).
    pub type_vars: Vec<String>,
    /// Owner type variables the callable never references.
    ///
    /// They still occur in `ty`; how to express them is the emitter's choice.
    pub erased: Vec<GeneratedTypeVar>,
}

/// The default a field holds until its setter is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroValue {
    /// Integer zero.
    Integer,
    /// Floating point zero.
    Float,
    /// `false`
    Bool,
    /// The NUL character.
    Char,
    /// An absent optional value.
    Absent,
    /// The type's `Default` value.
    Default,
}

const INTEGER_TYPES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

impl ZeroValue {
    /// Classify the zero value of a field type.
    pub fn for_type(ty: &Type) -> ZeroValue {
        if let Some(ident) = ty.as_ident() {
            if INTEGER_TYPES.contains(&ident) {
                return ZeroValue::Integer;
            }
            match ident {
                "f32" | "f64" => return ZeroValue::Float,
                "bool" => return ZeroValue::Bool,
                "char" => return ZeroValue::Char,
                _ => {}
            }
        }

        match ty.last_segment() {
            Some(segment) if segment.ident == "Option" && segment.args.len() == 1 => {
                ZeroValue::Absent
            }
            _ => ZeroValue::Default,
        }
    }

    /// Whether producing this value needs the field type to implement `Default`.
    pub fn needs_default(&self) -> bool {
        matches!(self, ZeroValue::Default)
    }
}

/// One stored argument of the callable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: String,
    pub ty: Type,
    pub default: ZeroValue,
}

/// A fluent setter: overwrites one field and returns the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetterSpec {
    /// Language-neutral setter name (`setFamily`).
    pub name: String,
    /// The field it writes.
    pub field: String,
}

/// What the terminal method calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum InvocationTarget {
    /// `receiver.method(args..)`
    Method { method: String },
    /// `Owner::function(args..)`
    Associated { owner: Type, function: String },
}

/// The terminal method's call of the original callable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalInvocation {
    pub target: InvocationTarget,
    /// Field reads passed positionally, in parameter order.
    pub args: Vec<String>,
    /// The callable's return type in the generated namespace.
    pub result_type: Type,
}

/// The generated builder type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuilderSpec {
    pub generated_name: String,
    /// The declaration this builder was generated from.
    pub source: SignatureKey,
    /// Ordered, de-duplicated type variables the builder declares.
    pub type_vars: Vec<GeneratedTypeVar>,
    pub receiver: Option<ReceiverSlot>,
    /// One field per parameter, in parameter order.
    pub fields: Vec<FieldSpec>,
    /// One setter per field, in field order.
    pub setters: Vec<SetterSpec>,
    pub terminal_method_name: String,
    pub terminal: TerminalInvocation,
    /// Declared type variables carried by no field and not by the receiver.
    pub phantom: Vec<String>,
}

impl BuilderSpec {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn type_var_names(&self) -> Vec<&str> {
        self.type_vars.iter().map(|v| v.name.as_str()).collect()
    }

    pub fn is_generic(&self) -> bool {
        !self.type_vars.is_empty()
    }
}
