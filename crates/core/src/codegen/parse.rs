//! Module Parsing
//!
//! Reads modules written by [`render_products_module`] back into records.
//! Only the unformatted output is understood.
//!
//! [`render_products_module`]: super::render_products_module

use serde_json::{Deserializer, Value};

use crate::{
    codegen::{
        CodegenError,
        render::{EXPORT_SUFFIX, PRODUCT_IMPORT, rename_keys},
    },
    records::ProductRecord,
};

const EXPORT_PREFIX: &str = "export const ";
const DATE_OPEN: &str = "new Date(";

/// Parses a generated products module.
///
/// # Errors
///
/// Returns [`CodegenError::Parse`] when `source` is not a module in the
/// generated layout, or [`CodegenError::Json`] when a literal is not a valid
/// product.
pub fn parse_products_module(source: &str) -> Result<Vec<ProductRecord>, CodegenError> {
    let body = source
        .trim_start()
        .strip_prefix(PRODUCT_IMPORT)
        .ok_or_else(|| parse_error("missing Product import"))?;

    let unwrapped = unwrap_dates(body)?;
    let mut rest = unwrapped.as_str();
    let mut records = Vec::new();

    loop {
        let trimmed = rest.trim_start();

        if trimmed.is_empty() {
            return Ok(records);
        }

        let (literal, after) = split_export(trimmed)?;

        let record = serde_json::from_value(snake_case_keys(literal))?;

        records.push(record);
        rest = after;
    }
}

fn split_export(source: &str) -> Result<(Value, &str), CodegenError> {
    let declaration = source
        .strip_prefix(EXPORT_PREFIX)
        .ok_or_else(|| parse_error("expected an export"))?;

    let (_, literal) = declaration
        .split_once(" = ")
        .ok_or_else(|| parse_error("expected an export name"))?;

    let mut stream = Deserializer::from_str(literal).into_iter::<Value>();

    let value = stream
        .next()
        .ok_or_else(|| parse_error("expected a product literal"))??;

    let after = literal
        .get(stream.byte_offset()..)
        .unwrap_or_default()
        .trim_start()
        .strip_prefix(EXPORT_SUFFIX)
        .ok_or_else(|| parse_error("expected `as const satisfies Product`"))?;

    Ok((value, after))
}

fn snake_case_keys(value: Value) -> Value {
    rename_keys(value, &camel_to_snake)
}

fn camel_to_snake(key: &str) -> String {
    let mut snake = String::with_capacity(key.len() + 4);

    for c in key.chars() {
        if c.is_uppercase() {
            snake.push('_');
            snake.extend(c.to_lowercase());
        } else {
            snake.push(c);
        }
    }

    snake
}

// Replaces every `new Date("...")` outside string literals with the bare string.
fn unwrap_dates(source: &str) -> Result<String, CodegenError> {
    let mut output = String::with_capacity(source.len());
    let mut rest = source;

    while !rest.is_empty() {
        if let Some(date) = rest.strip_prefix(DATE_OPEN) {
            let (string, after) =
                split_string(date).ok_or_else(|| parse_error("unterminated date"))?;

            output.push_str(string);
            rest = after
                .strip_prefix(')')
                .ok_or_else(|| parse_error("expected `)` after date"))?;
        } else if rest.starts_with('"') {
            let (string, after) =
                split_string(rest).ok_or_else(|| parse_error("unterminated string"))?;

            output.push_str(string);
            rest = after;
        } else {
            let mut chars = rest.chars();

            output.extend(chars.next());
            rest = chars.as_str();
        }
    }

    Ok(output)
}

// Splits a leading JSON string literal, quotes included, from the remainder.
fn split_string(source: &str) -> Option<(&str, &str)> {
    if !source.starts_with('"') {
        return None;
    }

    let mut escaped = false;

    for (index, c) in source.char_indices().skip(1) {
        match c {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => return Some(source.split_at(index + 1)),
            _ => escaped = false,
        }
    }

    None
}

fn parse_error(message: &str) -> CodegenError {
    CodegenError::Parse(message.to_string())
}
