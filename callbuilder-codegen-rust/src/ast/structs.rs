//! Builder struct declarations.

use callbuilder_codegen::builder::{CodeFragment, Renderable};

use super::Generics;

/// A private field in a struct.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A public struct, written as a unit struct when it has no fields.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    generics: Generics,
    doc: Option<String>,
    derives: Vec<String>,
    fields: Vec<Field>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generics: Generics::new(),
            doc: None,
            derives: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn generics(mut self, generics: Generics) -> Self {
        self.generics = generics;
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn derive(mut self, derive: impl Into<String>) -> Self {
        self.derives.push(derive.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self.doc.iter().map(CodeFragment::rust_doc).collect();
        if !self.derives.is_empty() {
            fragments.push(CodeFragment::line(format!(
                "#[derive({})]",
                self.derives.join(", ")
            )));
        }

        let head = format!("pub struct {}{}", self.name, self.generics.declaration());
        if self.fields.is_empty() {
            fragments.push(CodeFragment::line(format!("{};", head)));
        } else {
            let fields = self
                .fields
                .iter()
                .map(|f| CodeFragment::line(format!("{}: {},", f.name, f.ty)))
                .collect();
            fragments.push(CodeFragment::braced(format!("{} {{", head), fields));
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{GenericParam, render};

    #[test]
    fn test_builder_without_fields_is_unit_struct() {
        assert_eq!(render(&Struct::new("OffsetBuilder")), "pub struct OffsetBuilder;\n");
    }

    #[test]
    fn test_generic_struct_with_doc_and_derive() {
        let s = Struct::new("PickSomeBuilder")
            .doc("Builder for `HasGen<E>::pick_some(E, E)`.")
            .derive("Debug")
            .generics([GenericParam::new("E").bound("Clone")].into_iter().collect())
            .field(Field::new("receiver", "HasGen<E>"))
            .field(Field::new("a", "E"));

        assert_eq!(
            render(&s),
            "/// Builder for `HasGen<E>::pick_some(E, E)`.\n#[derive(Debug)]\npub struct PickSomeBuilder<E: Clone> {\n    receiver: HasGen<E>,\n    a: E,\n}\n"
        );
    }
}
