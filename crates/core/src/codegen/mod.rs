//! Catalog Codegen
//!
//! Writes product records out as a TypeScript module with one typed export
//! per product, so the synced catalog can be committed and imported.

use std::{io, path::Path};

use thiserror::Error;
use tracing::{debug, warn};

use crate::records::ProductRecord;

mod format;
mod naming;
mod parse;
mod render;

pub use format::{FormatError, MockSourceFormatter, Prettier, SourceFormatter};
pub use naming::{camel_case, export_name};
pub use parse::parse_products_module;
pub use render::{EXPORT_SUFFIX, PRODUCT_IMPORT, render_products_module};

/// Default location of the generated module.
pub const DEFAULT_OUTPUT_PATH: &str = "store/products.ts";

/// Errors raised while generating or reading a products module.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The module could not be written.
    #[error("failed to write products module: {0}")]
    Io(#[from] io::Error),

    /// A record could not be converted to or from JSON.
    #[error("failed to serialize products: {0}")]
    Json(#[from] serde_json::Error),

    /// The target has no filesystem.
    #[error("writing products to a file is not supported on this target")]
    Unsupported,

    /// The module is not in the generated layout.
    #[error("malformed products module: {0}")]
    Parse(String),
}

/// Renders `records` and writes them to `path`, creating parent directories.
///
/// When a formatter is given its output is written instead; if it fails the
/// unformatted module is written and a warning logged.
///
/// # Errors
///
/// Returns [`CodegenError::Unsupported`] on targets without a filesystem, or
/// any rendering or write error.
pub async fn write_products_to_file(
    records: &[ProductRecord],
    path: &Path,
    formatter: Option<&dyn SourceFormatter>,
) -> Result<(), CodegenError> {
    if cfg!(target_family = "wasm") {
        return Err(CodegenError::Unsupported);
    }

    let mut source = render_products_module(records)?;

    if let Some(formatter) = formatter {
        match formatter.format(&source, path).await {
            Ok(formatted) => source = formatted,
            Err(error) => warn!("formatting failed, writing unformatted output: {error}"),
        }
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    tokio::fs::write(path, source).await?;

    debug!(path = %path.display(), products = records.len(), "wrote products module");

    Ok(())
}
