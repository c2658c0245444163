//! Explain command report data structures.

use callbuilder_ir::{BuilderSpec, GeneratedTypeVar, InvocationTarget, ZeroValue};

use super::output::{Output, Report};

/// The structure of one generated builder.
#[derive(Debug)]
pub struct ExplainReport {
    pub builder: BuilderSpec,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        let builder = &self.builder;

        out.title(&builder.generated_name);
        out.key_value("Source", builder.source.as_str());
        if let Some(receiver) = &builder.receiver {
            out.key_value(
                "Receiver",
                &format!("{} ({})", receiver.ty, receiver.mode.as_str()),
            );
        }

        if !builder.type_vars.is_empty() {
            out.newline();
            out.section("Type variables");
            for var in &builder.type_vars {
                out.list_item(&format!("{} (from {})", type_var(var), var.origin.as_str()));
            }
        }
        if let Some(receiver) = &builder.receiver
            && !receiver.erased.is_empty()
        {
            out.newline();
            out.section("Erased receiver variables");
            for var in &receiver.erased {
                out.list_item(&type_var(var));
            }
        }

        out.newline();
        out.section("Fields");
        for field in &builder.fields {
            let setter = builder
                .setters
                .iter()
                .find(|s| s.field == field.name)
                .map(|s| s.name.as_str())
                .unwrap_or("-");
            out.list_item(&format!(
                "{}: {} = {}, set by {}",
                field.name,
                field.ty,
                zero_value(field.default),
                setter
            ));
        }

        out.newline();
        out.key_value(
            "Terminal",
            &format!(
                "{}() -> {}",
                builder.terminal_method_name, builder.terminal.result_type
            ),
        );
        let args = builder.terminal.args.join(", ");
        let call = match &builder.terminal.target {
            InvocationTarget::Method { method } => format!("receiver.{}({})", method, args),
            InvocationTarget::Associated { owner, function } if owner.has_args() => {
                format!("<{}>::{}({})", owner, function, args)
            }
            InvocationTarget::Associated { owner, function } => {
                format!("{}::{}({})", owner, function, args)
            }
        };
        out.key_value("Calls", &call);
        if !builder.phantom.is_empty() {
            out.key_value("Phantom", &builder.phantom.join(", "));
        }
    }
}

fn type_var(var: &GeneratedTypeVar) -> String {
    if var.bounds.is_empty() {
        return var.name.clone();
    }
    let bounds = var
        .bounds
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" + ");
    format!("{}: {}", var.name, bounds)
}

fn zero_value(value: ZeroValue) -> &'static str {
    match value {
        ZeroValue::Integer => "0",
        ZeroValue::Float => "0.0",
        ZeroValue::Bool => "false",
        ZeroValue::Char => "'\\0'",
        ZeroValue::Absent => "None",
        ZeroValue::Default => "default",
    }
}
