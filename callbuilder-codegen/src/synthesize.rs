//! Builder synthesis: from a [`CallableSpec`] to a [`BuilderSpec`].

use std::collections::HashSet;

use callbuilder_ir::{
    BuilderSpec, CallableSpec, FieldSpec, InvocationTarget, ReceiverSlot, SetterSpec,
    TerminalInvocation, ZeroValue,
};

use crate::{
    GenerateError, naming,
    resolve::{Resolution, resolve},
};

/// Name, resolve and synthesize the builder for one callable.
pub fn generate(spec: &CallableSpec) -> Result<BuilderSpec, GenerateError> {
    let resolution = resolve(spec)?;
    Ok(synthesize(spec, &resolution))
}

/// Assemble a builder from a callable and its resolved type variables.
pub fn synthesize(spec: &CallableSpec, resolution: &Resolution) -> BuilderSpec {
    let fields: Vec<FieldSpec> = spec
        .params
        .iter()
        .map(|param| {
            let ty = resolution.substitute(&param.ty);
            FieldSpec {
                name: param.name.clone(),
                default: ZeroValue::for_type(&ty),
                ty,
            }
        })
        .collect();

    let setters = fields
        .iter()
        .map(|field| SetterSpec {
            name: naming::setter_name(&field.name),
            field: field.name.clone(),
        })
        .collect();

    let receiver = spec.kind.receiver().map(|mode| ReceiverSlot {
        mode,
        ty: resolution.substitute(&spec.owner.self_ty),
        type_vars: resolution.receiver_vars.clone(),
        erased: resolution.erased.clone(),
    });

    let target = if spec.kind.is_instance() {
        InvocationTarget::Method {
            method: spec.name.clone(),
        }
    } else {
        InvocationTarget::Associated {
            owner: resolution.instantiate(&spec.owner.self_ty),
            function: spec.name.clone(),
        }
    };

    let carried: HashSet<&str> = fields
        .iter()
        .map(|f| &f.ty)
        .chain(receiver.as_ref().map(|r| &r.ty))
        .flat_map(|ty| ty.vars())
        .map(|var| var.name.as_str())
        .collect();
    let phantom = resolution
        .type_vars
        .iter()
        .filter(|v| !carried.contains(v.name.as_str()))
        .map(|v| v.name.clone())
        .collect();

    BuilderSpec {
        generated_name: naming::builder_name(spec),
        source: spec.signature_key(),
        type_vars: resolution.type_vars.clone(),
        receiver,
        terminal: TerminalInvocation {
            target,
            args: fields.iter().map(|f| f.name.clone()).collect(),
            result_type: resolution.substitute(&spec.return_type),
        },
        fields,
        setters,
        terminal_method_name: naming::terminal_name(spec),
        phantom,
    }
}
