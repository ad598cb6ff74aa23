//! File delivery for exported drawings.

use chrono::Local;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while writing an exported drawing.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to save drawing: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for saving exported drawings.
#[derive(Debug, Clone)]
pub struct SaveConfig {
    /// Directory exported drawings are written to.
    pub directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
    /// Image format extension.
    pub format: String,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            directory: dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
            filename_template: "myDrawing".to_string(),
            format: "png".to_string(),
        }
    }
}

/// Generate a filename based on the template and current time.
///
/// Templates without chrono specifiers come through verbatim, so the default
/// template yields a fixed `myDrawing.png`. A template chrono cannot format
/// (a stray `%` or an unsupported specifier) falls back to the default
/// template instead of failing the save.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
///
/// # Returns
/// Generated filename with extension
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let mut filename = String::new();
    if write!(filename, "{}", now.format(template)).is_err() {
        log::warn!(
            "Invalid filename template '{}', falling back to 'myDrawing'",
            template
        );
        filename.clear();
        filename.push_str("myDrawing");
    }
    format!("{}.{}", filename, format)
}

/// Check whether chrono can format the given filename template.
///
/// Formatting is attempted against the current time; a stray `%` or an
/// unsupported specifier makes it fail.
pub fn template_is_valid(template: &str) -> bool {
    let mut scratch = String::new();
    write!(scratch, "{}", Local::now().format(template)).is_ok()
}

/// Ensure the export directory exists, creating it if necessary.
///
/// # Arguments
/// * `directory` - Path to the directory
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    // Canonicalize to resolve ~ and relative paths
    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save encoded image data to a file.
///
/// # Arguments
/// * `image_data` - Raw image bytes (PNG format)
/// * `config` - Export configuration
///
/// # Returns
/// Path to the saved file
pub fn save_drawing(image_data: &[u8], config: &SaveConfig) -> Result<PathBuf, ExportError> {
    // Ensure directory exists
    let directory = ensure_directory_exists(&config.directory)?;

    // Generate filename
    let filename = generate_filename(&config.filename_template, &config.format);
    let file_path = directory.join(&filename);

    log::info!(
        "Saving drawing to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    // Write file
    fs::write(&file_path, image_data)?;

    // Verify the write
    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    // Set permissions to user read/write only
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&file_path, Permissions::from_mode(0o600))?;
    }

    log::info!("Drawing saved successfully: {}", file_path.display());

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_filename_default_is_stable() {
        let filename = generate_filename("myDrawing", "png");
        assert_eq!(filename, "myDrawing.png");
    }

    #[test]
    fn test_generate_filename_expands_date_specifiers() {
        let filename = generate_filename("drawing_%Y%m%d", "png");
        assert!(filename.starts_with("drawing_"));
        assert!(filename.ends_with(".png"));
        // Check that it contains a valid date (4 digits for year)
        assert!(filename.contains("202")); // Assuming we're in the 2020s
    }

    #[test]
    fn test_generate_filename_with_stray_percent_falls_back() {
        let filename = generate_filename("drawing_100%", "png");
        assert_eq!(filename, "myDrawing.png");
    }

    #[test]
    fn test_generate_filename_with_unknown_specifier_falls_back() {
        let filename = generate_filename("my%Qdrawing", "png");
        assert_eq!(filename, "myDrawing.png");
    }

    #[test]
    fn test_template_validity() {
        assert!(template_is_valid("myDrawing"));
        assert!(template_is_valid("drawing_%Y-%m-%d"));
        assert!(!template_is_valid("drawing_100%"));
        assert!(!template_is_valid("my%Qdrawing"));
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_default_config() {
        let config = SaveConfig::default();
        assert_eq!(config.format, "png");
        assert_eq!(config.filename_template, "myDrawing");
    }

    #[test]
    fn test_save_drawing_writes_default_filename() {
        let temp = TempDir::new().unwrap();
        let config = SaveConfig {
            directory: temp.path().to_path_buf(),
            ..SaveConfig::default()
        };

        let path = save_drawing(b"png-bytes", &config).unwrap();
        assert!(path.ends_with("myDrawing.png"));
        assert_eq!(fs::read(&path).unwrap(), b"png-bytes");
    }

    #[test]
    fn test_save_drawing_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let config = SaveConfig {
            directory: temp.path().join("exports"),
            ..SaveConfig::default()
        };

        let path = save_drawing(b"png-bytes", &config).unwrap();
        assert!(path.exists());
    }
}
