//! Functions and their parameters.

use callbuilder_codegen::builder::{CodeFragment, Renderable};

/// A parameter in a Rust function.
///
/// A parameter with an empty type renders as its name alone, which is how
/// receivers (`self`, `mut self`) are written.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn receiver(receiver: impl Into<String>) -> Self {
        Self::new(receiver, "")
    }

    fn render(&self) -> String {
        if self.ty.is_empty() {
            self.name.clone()
        } else {
            format!("{}: {}", self.name, self.ty)
        }
    }
}

/// A function inside an impl block. Public unless made [`Fn::private`].
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    is_public: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    where_clauses: Vec<String>,
    body: Vec<String>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            is_public: true,
            params: Vec::new(),
            return_type: None,
            where_clauses: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Trait impl methods carry no visibility.
    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a `where` predicate such as `T: Default`.
    pub fn where_clause(mut self, predicate: impl Into<String>) -> Self {
        self.where_clauses.push(predicate.into());
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    fn signature(&self) -> String {
        let vis = if self.is_public { "pub " } else { "" };
        let params = self
            .params
            .iter()
            .map(Param::render)
            .collect::<Vec<_>>()
            .join(", ");
        match &self.return_type {
            Some(ret) => format!("{}fn {}({}) -> {}", vis, self.name, params, ret),
            None => format!("{}fn {}({})", vis, self.name, params),
        }
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self.doc.iter().map(CodeFragment::rust_doc).collect();

        let body = self.body.iter().map(CodeFragment::line).collect();
        if self.where_clauses.is_empty() {
            fragments.push(CodeFragment::braced(format!("{} {{", self.signature()), body));
        } else {
            fragments.push(CodeFragment::line(self.signature()));
            fragments.push(CodeFragment::Block {
                header: "where".to_string(),
                body: self
                    .where_clauses
                    .iter()
                    .map(|p| CodeFragment::line(format!("{},", p)))
                    .collect(),
                close: None,
            });
            fragments.push(CodeFragment::braced("{", body));
        }
        fragments
    }
}
