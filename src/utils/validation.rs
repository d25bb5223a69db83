use crate::utils::error::{CommandsError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(CommandsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CommandsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Rejects an output path that names the same file as the input, which
/// would overwrite the data being read.
pub fn validate_distinct_paths(field_name: &str, input: &str, output: &str) -> Result<()> {
    if normalize(input) == normalize(output) {
        return Err(CommandsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: output.to_string(),
            reason: format!("Output must differ from input '{}'", input),
        });
    }
    Ok(())
}

// Lexical only: "./out/a.json" and "out/a.json" compare equal, symlinks are not followed.
fn normalize(path: &str) -> Vec<String> {
    Path::new(path)
        .components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect()
}
