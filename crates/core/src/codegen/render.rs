//! Module Rendering

use jiff::Timestamp;
use serde_json::{Map, Value};

use crate::{
    codegen::{CodegenError, naming::ExportNames},
    records::ProductRecord,
};

/// First line of every generated module.
pub const PRODUCT_IMPORT: &str =
    r#"import type { Product } from "@polar-sh/sdk/models/components/product.js""#;

/// Text following every exported literal.
pub const EXPORT_SUFFIX: &str = "as const satisfies Product";

/// Object keys whose contents are free-form and written verbatim.
pub(crate) const VERBATIM_KEYS: &[&str] = &["metadata", "properties"];

const INDENT: &str = "  ";

/// Renders `records` as a source module with one named export per record,
/// in the given order.
///
/// # Errors
///
/// Returns [`CodegenError::Json`] when a record cannot be serialized.
pub fn render_products_module(records: &[ProductRecord]) -> Result<String, CodegenError> {
    let mut names = ExportNames::default();
    let mut module = String::from(PRODUCT_IMPORT);

    module.push('\n');

    for record in records {
        let literal = camel_case_keys(serde_json::to_value(record)?);

        module.push_str("\nexport const ");
        module.push_str(&names.claim(&record.name));
        module.push_str(" = ");
        write_literal(&mut module, &literal, 0);
        module.push(' ');
        module.push_str(EXPORT_SUFFIX);
        module.push('\n');
    }

    Ok(module)
}

fn camel_case_keys(value: Value) -> Value {
    rename_keys(value, &snake_to_camel)
}

/// Applies `rename` to every object key, leaving the contents of
/// [`VERBATIM_KEYS`] untouched.
pub(crate) fn rename_keys(value: Value, rename: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(object) => Value::Object(
            object
                .into_iter()
                .map(|(key, value)| {
                    let value = if VERBATIM_KEYS.contains(&key.as_str()) {
                        value
                    } else {
                        rename_keys(value, rename)
                    };

                    (rename(&key), value)
                })
                .collect::<Map<_, _>>(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| rename_keys(item, rename))
                .collect(),
        ),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value,
    }
}

fn snake_to_camel(key: &str) -> String {
    let mut camel = String::with_capacity(key.len());

    for (index, part) in key.split('_').enumerate() {
        let mut chars = part.chars();

        if index > 0
            && let Some(first) = chars.next()
        {
            camel.extend(first.to_uppercase());
        }

        camel.push_str(chars.as_str());
    }

    camel
}

fn is_timestamp(value: &str) -> bool {
    value.parse::<Timestamp>().is_ok()
}

// Pretty-prints like `JSON.stringify(value, null, 2)`, wrapping timestamps in
// `new Date(..)`.
fn write_literal(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::String(text) if is_timestamp(text) => {
            out.push_str("new Date(");
            out.push_str(&value.to_string());
            out.push(')');
        }
        Value::Array(items) if !items.is_empty() => {
            out.push('[');

            for (index, item) in items.iter().enumerate() {
                separate(out, index, depth + 1);
                write_literal(out, item, depth + 1);
            }

            newline(out, depth);
            out.push(']');
        }
        Value::Object(object) if !object.is_empty() => {
            out.push('{');

            for (index, (key, item)) in object.iter().enumerate() {
                separate(out, index, depth + 1);
                out.push_str(&Value::from(key.as_str()).to_string());
                out.push_str(": ");
                write_literal(out, item, depth + 1);
            }

            newline(out, depth);
            out.push('}');
        }
        Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::String(_)
        | Value::Array(_)
        | Value::Object(_) => {
            out.push_str(&value.to_string());
        }
    }
}

fn separate(out: &mut String, index: usize, depth: usize) {
    if index > 0 {
        out.push(',');
    }

    newline(out, depth);
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');

    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
