//! Renders a [`GeneratedUnit`] as Go source text.

mod imports;
mod writer;

pub(crate) use imports::ImportAliases;
use writer::CodeWriter;

use crate::generator::ast::{
  AdapterFunction, AdapterStep, Declaration, ERR_VAR, ErrorPolicy, ErrorTranslation, GeneratedUnit, GoType,
  ServiceWrapper, TRANSPORT_INPUT_VAR, TransformCall, TypeName, UseCaseCall,
};

pub(crate) const GENERATED_CODE_MARKER: &str = "// Code generated by protoc-gen-go-pprpc. DO NOT EDIT.";

pub(crate) fn render(unit: &GeneratedUnit) -> anyhow::Result<String> {
  GoFileRenderer::new(unit).render()
}

struct GoFileRenderer<'a> {
  unit: &'a GeneratedUnit,
  imports: ImportAliases,
}

impl<'a> GoFileRenderer<'a> {
  fn new(unit: &'a GeneratedUnit) -> Self {
    Self {
      unit,
      imports: ImportAliases::allocate(unit),
    }
  }

  fn render(&self) -> anyhow::Result<String> {
    let mut w = CodeWriter::new();

    w.line(GENERATED_CODE_MARKER);
    w.line(format!("// source: {}", self.unit.source));
    w.blank_line();
    w.line(format!("package {}", self.unit.package_name));
    w.blank_line();

    let specs = self.imports.specs();
    if !specs.is_empty() {
      w.line("import (");
      for (path, alias) in specs {
        w.line(format!("\t{alias} {}", go_string(path.as_str())));
      }
      w.line(")");
      w.blank_line();
    }

    for (index, declaration) in self.unit.declarations.iter().enumerate() {
      if index > 0 {
        w.blank_line();
      }
      match declaration {
        Declaration::ServiceWrapper(wrapper) => self.service_wrapper(&mut w, wrapper)?,
        Declaration::AdapterFunction(function) => self.adapter_function(&mut w, function)?,
        Declaration::ErrorTranslation(routine) => self.error_translation(&mut w, routine)?,
      }
    }

    Ok(w.into_inner())
  }

  fn type_expr(&self, ty: &GoType) -> anyhow::Result<String> {
    let name = match &ty.name {
      TypeName::Imported(ident) => self.imports.qualify(ident)?,
      TypeName::Local(name) => name.clone(),
    };
    Ok(if ty.pointer { format!("*{name}") } else { name })
  }

  fn service_wrapper(&self, w: &mut CodeWriter, wrapper: &ServiceWrapper) -> anyhow::Result<()> {
    let use_case = self.imports.qualify(&wrapper.use_case)?;
    w.block(format!("type {} struct", wrapper.name), |w| {
      w.line(format!("{} {use_case}", wrapper.field));
      Ok(())
    })
  }

  fn adapter_function(&self, w: &mut CodeWriter, function: &AdapterFunction) -> anyhow::Result<()> {
    let header = format!(
      "func ({} {}) {}(_ {}, {TRANSPORT_INPUT_VAR} {}) ({}, error)",
      function.receiver,
      function.receiver_type,
      function.name,
      self.imports.qualify(&function.context)?,
      self.type_expr(&function.input)?,
      self.type_expr(&function.output)?,
    );

    w.block(header, |w| {
      for step in &function.steps {
        self.adapter_step(w, step)?;
      }
      Ok(())
    })
  }

  fn adapter_step(&self, w: &mut CodeWriter, step: &AdapterStep) -> anyhow::Result<()> {
    match step {
      AdapterStep::DeclareLocals(locals) => {
        for local in locals {
          w.line(format!("var {} {}", local.name, self.type_expr(&local.ty)?));
        }
        w.blank_line();
      }
      AdapterStep::TransformInput(call) | AdapterStep::TransformOutput(call) => {
        self.transform_call(w, call)?;
        w.blank_line();
      }
      AdapterStep::InvokeUseCase(call) => {
        self.use_case_call(w, call)?;
        w.blank_line();
      }
      AdapterStep::ReturnOutput { output } => w.line(format!("return &{output}, nil")),
    }
    Ok(())
  }

  fn transform_call(&self, w: &mut CodeWriter, call: &TransformCall) -> anyhow::Result<()> {
    let function = self.imports.qualify(&call.function)?;
    w.block(
      format!(
        "if {ERR_VAR} = {function}({}, &{}); {ERR_VAR} != nil",
        call.source, call.target
      ),
      |w| {
        w.line(format!("return nil, {}", returned_error(&call.on_error)));
        Ok(())
      },
    )
  }

  fn use_case_call(&self, w: &mut CodeWriter, call: &UseCaseCall) -> anyhow::Result<()> {
    w.block(
      format!(
        "if {}, {ERR_VAR} = {}.{}.{}({}); {ERR_VAR} != nil",
        call.output, call.receiver, call.field, call.method, call.input
      ),
      |w| {
        w.line(format!("return nil, {}", returned_error(&call.on_error)));
        Ok(())
      },
    )
  }

  fn error_translation(&self, w: &mut CodeWriter, routine: &ErrorTranslation) -> anyhow::Result<()> {
    let transport_error = self.imports.qualify(&routine.transport_error)?;
    let new_error = self.imports.qualify(&routine.new_error)?;
    let internal_code = self.imports.qualify(&routine.internal_code)?;
    let wrap_error = self.imports.qualify(&routine.wrap_error)?;
    let errors_as = self.imports.qualify(&routine.errors_as)?;
    let sprintf = self.imports.qualify(&routine.sprintf)?;
    let domain_error = self.imports.qualify(&routine.domain_error)?;

    w.block(
      format!("func {}({ERR_VAR} error) {transport_error}", routine.name),
      |w| {
        w.line(format!(
          "twerr := {new_error}({internal_code}, {ERR_VAR}.Error())"
        ));
        w.line(format!("var domainErr {domain_error}"));
        w.block(format!("if {errors_as}({ERR_VAR}, &domainErr)"), |w| {
          w.line(format!(
            "twerr = twerr.WithMeta({}, {sprintf}(\"%d\", domainErr.{}))",
            go_string(&routine.meta_key),
            routine.code_field
          ));
          Ok(())
        })?;
        w.line(format!("return {wrap_error}(twerr, {ERR_VAR})"));
        Ok(())
      },
    )
  }
}

fn returned_error(policy: &ErrorPolicy) -> String {
  match policy {
    ErrorPolicy::Propagate => ERR_VAR.to_string(),
    ErrorPolicy::Translate { routine } => format!("{routine}({ERR_VAR})"),
  }
}

/// Interpreted Go string literal.
fn go_string(value: &str) -> String {
  let mut literal = String::with_capacity(value.len() + 2);
  literal.push('"');
  for c in value.chars() {
    match c {
      '"' => literal.push_str("\\\""),
      '\\' => literal.push_str("\\\\"),
      '\n' => literal.push_str("\\n"),
      '\t' => literal.push_str("\\t"),
      c => literal.push(c),
    }
  }
  literal.push('"');
  literal
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_go_string_escapes() {
    assert_eq!(go_string("domainCode"), "\"domainCode\"");
    assert_eq!(go_string("a\"b\\c"), "\"a\\\"b\\\\c\"");
    assert_eq!(go_string("line\nbreak"), "\"line\\nbreak\"");
  }

  #[test]
  fn test_returned_error() {
    assert_eq!(returned_error(&ErrorPolicy::Propagate), "err");
    assert_eq!(
      returned_error(&ErrorPolicy::Translate {
        routine: "transformTwirpError".to_string()
      }),
      "transformTwirpError(err)"
    );
  }
}
