//! List command report data structures.

use super::{
    diagnostics::plural,
    output::{Output, Report},
};

/// Annotated declarations of a manifest.
#[derive(Debug)]
pub struct ListReport {
    pub declarations: Vec<DeclarationInfo>,
    /// All declared functions, annotated or not.
    pub fn_count: usize,
}

#[derive(Debug)]
pub struct DeclarationInfo {
    /// `constructor`, `static` or the receiver as written.
    pub kind: &'static str,
    pub signature: String,
    /// Name of the builder it produces, once extracted.
    pub builder: Option<String>,
    /// Why the declaration cannot be extracted.
    pub problem: Option<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.declarations.is_empty() {
            out.preformatted(&format!(
                "No annotated declarations ({} declared)",
                plural(self.fn_count, "function")
            ));
            return;
        }

        out.section(&format!(
            "Annotated declarations ({} of {})",
            self.declarations.len(),
            plural(self.fn_count, "function")
        ));
        let width = self
            .declarations
            .iter()
            .map(|d| d.kind.len())
            .max()
            .unwrap_or(0);
        for decl in &self.declarations {
            let target = match (&decl.builder, &decl.problem) {
                (Some(builder), _) => builder.clone(),
                (None, Some(problem)) => format!("! {}", problem),
                (None, None) => String::new(),
            };
            out.list_item(&format!(
                "{:<width$}  {}  => {}",
                decl.kind,
                decl.signature,
                target,
                width = width
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_aligns_kinds() {
        let report = ListReport {
            declarations: vec![
                DeclarationInfo {
                    kind: "&self",
                    signature: "ConfusingSignatures::add(i32, i32, i32)".into(),
                    builder: Some("AddBuilder".into()),
                    problem: None,
                },
                DeclarationInfo {
                    kind: "static",
                    signature: "Adder::total()".into(),
                    builder: None,
                    problem: Some("no parameters".into()),
                },
            ],
            fn_count: 3,
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.stdout,
            "Annotated declarations (2 of 3 functions):\n  - &self   ConfusingSignatures::add(i32, i32, i32)  => AddBuilder\n  - static  Adder::total()  => ! no parameters\n"
        );
    }

    #[test]
    fn test_render_empty() {
        let report = ListReport {
            declarations: vec![],
            fn_count: 1,
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(out.stdout, "No annotated declarations (1 function declared)\n");
    }
}
