use anyhow::{Context, Result};
use dialogen_core::dialogue::Dialogue;
use std::path::Path;

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Converts a dialogue between the JSON interchange form and the blob
/// checkpoint form, in either direction, inferred from file extensions.
pub fn run(input: &Path, output: &Path, compact: bool) -> Result<()> {
    let dialogue = if is_json(input) {
        Dialogue::load_from_json(input)
    } else {
        Dialogue::load_from_blob(input)
    }
    .with_context(|| format!("failed to load {}", input.display()))?;

    if is_json(output) {
        dialogue.save_to_json(output, !compact)
    } else {
        dialogue.save_to_blob(output)
    }
    .with_context(|| format!("failed to write {}", output.display()))?;

    println!("Converted {} -> {}", input.display(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_extension_detection_is_case_insensitive() {
        assert!(is_json(Path::new("a.json")));
        assert!(is_json(Path::new("a.JSON")));
        assert!(!is_json(Path::new("a.blob")));
        assert!(!is_json(Path::new("json")));
    }

    #[test]
    fn test_json_to_blob_and_back() {
        let dir = tempdir().unwrap();
        let json_in = dir.path().join("in.json");
        let blob = dir.path().join("mid.blob");
        let json_out = dir.path().join("out.json");

        let dialogue = Dialogue {
            script: Some("outline".to_string()),
            ..Dialogue::new()
        };
        dialogue.save_to_json(&json_in, true).unwrap();

        run(&json_in, &blob, false).unwrap();
        run(&blob, &json_out, true).unwrap();

        assert_eq!(Dialogue::load_from_json(&json_out).unwrap(), dialogue);
    }
}
