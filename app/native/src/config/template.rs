//! Configuration template generation.
//!
//! Generates a commented configuration template with all available options.

use std::fs;
use std::path::Path;

/// Generates a configuration template with all options commented out.
#[must_use]
pub fn generate_config_template() -> String {
    r#"// Tessera Configuration File
// ===========================
// This file uses JSONC format (JSON with comments).
// All options below are commented out and show their default values.
// Uncomment and modify the options you want to configure.

{
  // ============================================================================
  // Tile Layout
  // ============================================================================
  // "tiling": {
  //   // How the screen splits into master and stack areas.
  //   // Values: "left-to-right", "right-to-left", "top-to-bottom",
  //   //         "bottom-to-top", "monocle"
  //   "layoutAxis": "left-to-right",
  //
  //   // How windows inside the master area are laid out (same values)
  //   "masterAreaAxis": "monocle",
  //
  //   // How windows inside the stack area are laid out (same values)
  //   "stackAreaAxis": "top-to-bottom",
  //
  //   // Fraction of the screen given to the master area (0.0 - 1.0)
  //   "masterAreaFactor": 0.6,
  //
  //   // Number of windows in the master area
  //   "masterAreaWindowsCount": 1,
  //
  //   // Milliseconds to wait for restored windows before re-tiling
  //   "restoreDelayMs": 200
  // }
}
"#
    .to_string()
}

/// Creates a configuration file with the template at the specified path.
///
/// Creates parent directories if they don't exist.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn create_config_file(path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, generate_config_template())
}
