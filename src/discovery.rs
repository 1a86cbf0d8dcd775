//! Find candidate images in a directory and resolve user selections.

use std::path::{Path, PathBuf};

use crate::error::ConvertError;

/// Image files in `dir` whose extension matches one of `extensions`
/// (case-insensitive), sorted by file name.
pub fn available_images(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, ConvertError> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if has_extension(&path, extensions) {
            images.push(path);
        }
    }

    images.sort_by(|a, b| display_name(a).cmp(&display_name(b)));
    tracing::debug!(dir = %dir.display(), count = images.len(), "Discovered images");
    Ok(images)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            extensions
                .iter()
                .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// File name shown to the user
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Images whose file name starts with `prefix`
pub fn complete<'a>(prefix: &str, images: &'a [PathBuf]) -> Vec<&'a PathBuf> {
    images
        .iter()
        .filter(|path| display_name(path).starts_with(prefix))
        .collect()
}

/// Map a menu answer to a path.
///
/// A number selects from `images` (1-based). Anything else is a file name,
/// relative to `dir` unless absolute. A name that does not exist but is the
/// prefix of exactly one listed image selects that image. Existence is
/// otherwise checked by the loader.
pub fn resolve_choice(input: &str, images: &[PathBuf], dir: &Path) -> Result<PathBuf, ConvertError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ConvertError::InvalidChoice("No filename provided".to_string()));
    }

    match input.parse::<i64>() {
        Ok(n) if n >= 1 && n as usize <= images.len() => Ok(images[n as usize - 1].clone()),
        Ok(_) => Err(ConvertError::InvalidChoice(format!(
            "Please enter a number between 1 and {}",
            images.len()
        ))),
        Err(_) => {
            let path = dir.join(input);
            if path.is_file() {
                return Ok(path);
            }
            match complete(input, images).as_slice() {
                [only] => {
                    tracing::debug!(prefix = input, path = %only.display(), "Completed image name");
                    Ok((*only).clone())
                }
                _ => Ok(path),
            }
        }
    }
}
