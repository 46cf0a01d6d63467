use crate::error::Result;
use crate::io;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Marker file for a selfmap project root.
pub const CONFIG_FILE: &str = "selfmap.yaml";

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// AuditConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Candidate engine sources for the per-engine checks, relative to
    /// the project root.
    #[serde(default = "default_engine_files")]
    pub engine_files: Vec<String>,
    /// Directory names excluded from tree walks, on top of the built-in
    /// exclusions.
    #[serde(default)]
    pub skip_dirs: Vec<String>,
    #[serde(default = "default_report_path")]
    pub report_path: String,
}

fn default_engine_files() -> Vec<String> {
    [
        "sovereignty-engine.js",
        "archetype-engine.js",
        "manipulation-engine.js",
        "coaching-engine.js",
        "relationship-engine.js",
        "paradigm-engine.js",
        "temperament-engine.js",
        "channels-engine.js",
        "needs-dependency-engine.js",
        "diagnosis-engine.js",
        "character-sheet-engine.js",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_report_path() -> String {
    "RECOMMENDATIONS_STATUS_REPORT.md".to_string()
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            engine_files: default_engine_files(),
            skip_dirs: Vec::new(),
            report_path: default_report_path(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub audit: AuditConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            version: 1,
            audit: AuditConfig::default(),
        }
    }

    pub fn config_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    /// Report destination, resolved against the root.
    pub fn report_path(&self, root: &Path) -> PathBuf {
        root.join(&self.audit.report_path)
    }

    /// Load the config from `selfmap.yaml` under `root`. A missing file
    /// is not an error: the audit runs fine on defaults.
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::config_path(root);
        if !path.exists() {
            return Ok(Self::new());
        }
        io::read_yaml(&path)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        io::write_yaml(&Self::config_path(root), self)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        for file in &self.audit.engine_files {
            if Path::new(file).is_absolute() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "engine file '{file}' is absolute; entries resolve against the project root"
                    ),
                });
            }
        }

        for dir in &self.audit.skip_dirs {
            if dir.contains('/') || dir.contains('\\') {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "skip dir '{dir}' contains a path separator; entries match directory names"
                    ),
                });
            }
        }

        if self.audit.report_path.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "audit.report_path is empty".to_string(),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::new();
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.version, 1);
        assert_eq!(parsed.audit.engine_files.len(), 11);
        assert_eq!(parsed.audit.report_path, "RECOMMENDATIONS_STATUS_REPORT.md");
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.version, 1);
        assert!(cfg.audit.skip_dirs.is_empty());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut cfg = Config::new();
        cfg.audit.skip_dirs.push("vendor".to_string());
        cfg.audit.engine_files = vec!["main-engine.js".to_string()];
        cfg.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.audit.skip_dirs, ["vendor"]);
        assert_eq!(loaded.audit.engine_files, ["main-engine.js"]);
    }

    #[test]
    fn partial_audit_section_keeps_defaults() {
        let yaml = "version: 1\naudit:\n  skip_dirs:\n    - dist\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.audit.skip_dirs, ["dist"]);
        assert_eq!(cfg.audit.engine_files.len(), 11);
        assert_eq!(cfg.audit.report_path, "RECOMMENDATIONS_STATUS_REPORT.md");
    }

    #[test]
    fn config_without_audit_backward_compat() {
        let yaml = "version: 1\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.audit.engine_files.len(), 11);
    }

    #[test]
    fn validate_default_config_no_warnings() {
        assert!(Config::new().validate().is_empty());
    }

    #[test]
    fn validate_absolute_engine_path() {
        let mut cfg = Config::new();
        cfg.audit.engine_files.push("/etc/engine.js".to_string());
        let warnings = cfg.validate();
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("'/etc/engine.js' is absolute")));
    }

    #[test]
    fn validate_skip_dir_with_separator() {
        let mut cfg = Config::new();
        cfg.audit.skip_dirs.push("build/out".to_string());
        let warnings = cfg.validate();
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("path separator")));
        assert!(warnings.iter().all(|w| w.level == WarnLevel::Warning));
    }

    #[test]
    fn validate_empty_report_path_is_an_error() {
        let mut cfg = Config::new();
        cfg.audit.report_path = "  ".to_string();
        let warnings = cfg.validate();
        assert!(warnings
            .iter()
            .any(|w| w.level == WarnLevel::Error && w.message.contains("report_path")));
    }
}
