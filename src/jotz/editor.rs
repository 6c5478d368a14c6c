use crate::error::{JotzError, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    if let Ok(editor) = env::var("EDITOR") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    if let Ok(editor) = env::var("VISUAL") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    // Try common fallbacks
    for fallback in ["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok(fallback.to_string());
        }
    }

    Err(JotzError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|e| JotzError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(JotzError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(JotzError::Io)
}

/// Opens an editor seeded with the given text and returns what was saved.
pub fn edit_text(initial: &str) -> Result<String> {
    let temp_file = env::temp_dir().join("jotz_edit.txt");

    fs::write(&temp_file, initial).map_err(JotzError::Io)?;

    let edited = open_in_editor(&temp_file);

    // Clean up temp file
    let _ = fs::remove_file(&temp_file);

    edited
}
