use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{ExportError, Result};
use crate::models::Product;

/// Pretty-prints the records. serde_json escapes only quotes, backslashes and
/// control characters, so apostrophes and ampersands stay literal.
pub fn to_pretty_json(products: &[Product]) -> Result<String> {
    Ok(serde_json::to_string_pretty(products)?)
}

/// Writes the serialized records to `path`, truncating any existing file.
pub fn save_to_file(products: &[Product], path: &Path) -> Result<()> {
    let json = to_pretty_json(products)?;
    let mut file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(json.as_bytes())
        .map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(())
}
