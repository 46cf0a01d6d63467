//! Content-tree audit: verifies that a selfmap content root implements the
//! recommendations that ship with the library.
//!
//! The audit walks a published quiz-app tree (HTML, CSS, JS engines) and
//! grades fifty checks across twelve categories. Each check uses one of four
//! strategies: look for a file, grep the whole tree, inspect the configured
//! engine sources, or skip because the answer lives in git metadata.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::SelfmapError;

// ---------------------------------------------------------------------------
// Check status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Pass,
    Partial,
    Fail,
    Skip,
}

impl CheckStatus {
    pub fn all() -> [CheckStatus; 4] {
        [
            CheckStatus::Pass,
            CheckStatus::Partial,
            CheckStatus::Fail,
            CheckStatus::Skip,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Partial => "partial",
            CheckStatus::Fail => "fail",
            CheckStatus::Skip => "skip",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "✅",
            CheckStatus::Partial => "⚠️",
            CheckStatus::Fail => "❌",
            CheckStatus::Skip => "⏭️",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CheckStatus {
    type Err = SelfmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pass" => Ok(CheckStatus::Pass),
            "partial" => Ok(CheckStatus::Partial),
            "fail" => Ok(CheckStatus::Fail),
            "skip" => Ok(CheckStatus::Skip),
            _ => Err(SelfmapError::UnknownStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Check definitions
// ---------------------------------------------------------------------------

/// Source inspection applied to each configured engine file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCheck {
    ErrorHandling,
    TryCatch,
    Sanitization,
    JsDoc,
    Duplication,
}

/// How a check decides its status.
#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    /// Ordered candidate paths; the first one that exists decides. With a
    /// pattern, the candidate's content must match it; without, existing is
    /// enough.
    File {
        candidates: &'static [&'static str],
        pattern: Option<&'static str>,
    },
    /// Regex over the content of every file under the root. `negate` inverts
    /// the verdict for patterns that must not appear.
    Tree {
        pattern: &'static str,
        negate: bool,
    },
    /// Per-engine source inspection, rolled up across all configured engines.
    Engine(EngineCheck),
    /// Needs git metadata, which the audit does not read.
    Git,
}

pub struct CheckDef {
    pub id: &'static str,
    pub description: &'static str,
    pub strategy: Strategy,
}

pub struct Category {
    pub name: &'static str,
    pub checks: &'static [CheckDef],
}

pub const CATEGORIES: &[Category] = &[
    Category {
        name: "Repository Structure",
        checks: &[
            CheckDef {
                id: "repo-1",
                description: "Backup files ignored via .gitignore",
                strategy: Strategy::File {
                    candidates: &[".gitignore"],
                    pattern: Some(r"\.backup|\.bak"),
                },
            },
            CheckDef {
                id: "repo-2",
                description: "Backup file policy visible in the tree",
                strategy: Strategy::Tree {
                    pattern: r"\.backup|\.bak",
                    negate: false,
                },
            },
            CheckDef {
                id: "repo-3",
                description: "Python dependencies pinned in requirements.txt",
                strategy: Strategy::File {
                    candidates: &["requirements.txt"],
                    pattern: None,
                },
            },
            CheckDef {
                id: "repo-4",
                description: "CI workflows configured",
                strategy: Strategy::File {
                    candidates: &[".github/workflows"],
                    pattern: None,
                },
            },
            CheckDef {
                id: "repo-5",
                description: "Feature branches tracked in git",
                strategy: Strategy::Git,
            },
        ],
    },
    Category {
        name: "Code Organization",
        checks: &[
            CheckDef {
                id: "code-1",
                description: "Shared module directory present",
                strategy: Strategy::File {
                    candidates: &["shared/"],
                    pattern: None,
                },
            },
            CheckDef {
                id: "code-2",
                description: "Consolidated utilities in shared/utils.js",
                strategy: Strategy::File {
                    candidates: &["shared/utils.js"],
                    pattern: Some("ErrorHandler|DataStore|DOMUtils|ScoringUtils"),
                },
            },
            CheckDef {
                id: "code-3",
                description: "Engines import shared utilities instead of duplicating them",
                strategy: Strategy::Engine(EngineCheck::Duplication),
            },
            CheckDef {
                id: "code-4",
                description: "No stray backup copies in the tree",
                strategy: Strategy::Tree {
                    pattern: r"\.backup|\.bak",
                    negate: true,
                },
            },
        ],
    },
    Category {
        name: "Performance Optimization",
        checks: &[
            CheckDef {
                id: "perf-1",
                description: "Images lazy-loaded",
                strategy: Strategy::Tree {
                    pattern: r#"loading=["']lazy["']|data-src"#,
                    negate: false,
                },
            },
            CheckDef {
                id: "perf-2",
                description: "Data modules loaded on demand",
                strategy: Strategy::Tree {
                    pattern: r"await import\(|loadDataModule",
                    negate: false,
                },
            },
            CheckDef {
                id: "perf-3",
                description: "Scripts deferred or loaded as modules",
                strategy: Strategy::Tree {
                    pattern: r#"defer|async|type=["']module["']"#,
                    negate: false,
                },
            },
            CheckDef {
                id: "perf-4",
                description: "Critical resources preloaded",
                strategy: Strategy::Tree {
                    pattern: r#"rel=["']preload["']|rel=["']preconnect["']"#,
                    negate: false,
                },
            },
            CheckDef {
                id: "perf-5",
                description: "Performance monitoring helper present",
                strategy: Strategy::File {
                    candidates: &["shared/performance-monitor.js"],
                    pattern: None,
                },
            },
            CheckDef {
                id: "perf-6",
                description: "Bundler or minifier configured",
                strategy: Strategy::File {
                    candidates: &["package.json"],
                    pattern: Some("terser|esbuild|rollup"),
                },
            },
        ],
    },
    Category {
        name: "Error Handling",
        checks: &[
            CheckDef {
                id: "error-1",
                description: "Central ErrorHandler utility present",
                strategy: Strategy::File {
                    candidates: &["shared/utils.js"],
                    pattern: Some("ErrorHandler"),
                },
            },
            CheckDef {
                id: "error-2",
                description: "Engines use error handling",
                strategy: Strategy::Engine(EngineCheck::ErrorHandling),
            },
            CheckDef {
                id: "error-3",
                description: "User-facing error messages surfaced",
                strategy: Strategy::Tree {
                    pattern: r"showUserError|ErrorHandler\.showUserError",
                    negate: false,
                },
            },
            CheckDef {
                id: "error-4",
                description: "Engines wrap risky work in try/catch",
                strategy: Strategy::Engine(EngineCheck::TryCatch),
            },
        ],
    },
    Category {
        name: "Accessibility (A11y)",
        checks: &[
            CheckDef {
                id: "a11y-1",
                description: "ARIA labels and roles present",
                strategy: Strategy::Tree {
                    pattern: "aria-label|aria-labelledby|role=",
                    negate: false,
                },
            },
            CheckDef {
                id: "a11y-2",
                description: "Keyboard navigation supported",
                strategy: Strategy::Tree {
                    pattern: "keydown|keyup|tabindex",
                    negate: false,
                },
            },
            CheckDef {
                id: "a11y-3",
                description: "Focus managed programmatically",
                strategy: Strategy::Tree {
                    pattern: r"focusElement|\.focus\(\)",
                    negate: false,
                },
            },
            CheckDef {
                id: "a11y-4",
                description: "Live regions announce updates",
                strategy: Strategy::Tree {
                    pattern: "aria-live",
                    negate: false,
                },
            },
            CheckDef {
                id: "a11y-5",
                description: "Touch targets meet minimum size",
                strategy: Strategy::File {
                    candidates: &["style.css"],
                    pattern: Some("min-height.*44|min-width.*44"),
                },
            },
            CheckDef {
                id: "a11y-6",
                description: "Stylesheet present",
                strategy: Strategy::File {
                    candidates: &["style.css"],
                    pattern: None,
                },
            },
            CheckDef {
                id: "a11y-7",
                description: "Skip-to-content link present",
                strategy: Strategy::Tree {
                    pattern: "skip-link|skip.*main",
                    negate: false,
                },
            },
        ],
    },
    Category {
        name: "Mobile Optimization",
        checks: &[
            CheckDef {
                id: "mobile-1",
                description: "Viewport meta tag configured",
                strategy: Strategy::Tree {
                    pattern: "viewport.*width=device-width",
                    negate: false,
                },
            },
            CheckDef {
                id: "mobile-2",
                description: "Fluid typography via clamp or rem",
                strategy: Strategy::File {
                    candidates: &["style.css"],
                    pattern: Some(r"clamp\(|font-size.*rem"),
                },
            },
            CheckDef {
                id: "mobile-3",
                description: "Comfortable touch spacing",
                strategy: Strategy::File {
                    candidates: &["style.css"],
                    pattern: Some("min-height.*44|padding.*1rem"),
                },
            },
            CheckDef {
                id: "mobile-4",
                description: "Responsive breakpoints defined",
                strategy: Strategy::File {
                    candidates: &["style.css"],
                    pattern: Some("@media.*max-width"),
                },
            },
            CheckDef {
                id: "mobile-5",
                description: "Base font size readable on mobile",
                strategy: Strategy::File {
                    candidates: &["style.css"],
                    pattern: Some("font-size.*16px"),
                },
            },
        ],
    },
    Category {
        name: "Data Management",
        checks: &[
            CheckDef {
                id: "data-1",
                description: "DataStore abstraction present",
                strategy: Strategy::File {
                    candidates: &["shared/utils.js"],
                    pattern: Some("class DataStore|DataStore"),
                },
            },
            CheckDef {
                id: "data-2",
                description: "Stored data versioned and migrated",
                strategy: Strategy::File {
                    candidates: &["shared/utils.js"],
                    pattern: Some("migrate|version"),
                },
            },
            CheckDef {
                id: "data-3",
                description: "Shared data loader present",
                strategy: Strategy::File {
                    candidates: &["shared/data-loader.js"],
                    pattern: None,
                },
            },
            CheckDef {
                id: "data-4",
                description: "Debug reporter present",
                strategy: Strategy::File {
                    candidates: &["shared/debug-reporter.js"],
                    pattern: None,
                },
            },
        ],
    },
    Category {
        name: "Security",
        checks: &[
            CheckDef {
                id: "sec-1",
                description: "HTML sanitization utilities present",
                strategy: Strategy::File {
                    candidates: &["shared/utils.js"],
                    pattern: Some("sanitizeHTML|SecurityUtils"),
                },
            },
            CheckDef {
                id: "sec-2",
                description: "Engines sanitize dynamic HTML",
                strategy: Strategy::Engine(EngineCheck::Sanitization),
            },
            CheckDef {
                id: "sec-3",
                description: "Content Security Policy declared",
                strategy: Strategy::File {
                    candidates: &["index.html"],
                    pattern: Some("Content-Security-Policy"),
                },
            },
        ],
    },
    Category {
        name: "Testing & QA",
        checks: &[
            CheckDef {
                id: "test-1",
                description: "Test runner configured",
                strategy: Strategy::File {
                    candidates: &["package.json"],
                    pattern: Some("jest|mocha|vitest"),
                },
            },
            CheckDef {
                id: "test-2",
                description: "Test files present",
                strategy: Strategy::File {
                    candidates: &["test/", "__tests__/", "*.test.js"],
                    pattern: None,
                },
            },
            CheckDef {
                id: "test-3",
                description: "Linter configured",
                strategy: Strategy::File {
                    candidates: &[".eslintrc", "eslint.config.js"],
                    pattern: None,
                },
            },
        ],
    },
    Category {
        name: "Documentation",
        checks: &[
            CheckDef {
                id: "doc-1",
                description: "Engines carry JSDoc comments",
                strategy: Strategy::Engine(EngineCheck::JsDoc),
            },
            CheckDef {
                id: "doc-2",
                description: "Shared module README present",
                strategy: Strategy::File {
                    candidates: &["shared/README.md"],
                    pattern: None,
                },
            },
            CheckDef {
                id: "doc-3",
                description: "Integration guide present",
                strategy: Strategy::File {
                    candidates: &["ENGINE_INTEGRATION_GUIDE.md", "docs/"],
                    pattern: None,
                },
            },
        ],
    },
    Category {
        name: "Build System",
        checks: &[
            CheckDef {
                id: "build-1",
                description: "Package manifest present",
                strategy: Strategy::File {
                    candidates: &["package.json"],
                    pattern: None,
                },
            },
            CheckDef {
                id: "build-2",
                description: "Build script defined",
                strategy: Strategy::File {
                    candidates: &["package.json"],
                    pattern: Some("dist|build"),
                },
            },
            CheckDef {
                id: "build-3",
                description: "Source maps enabled",
                strategy: Strategy::File {
                    candidates: &["package.json"],
                    pattern: Some("source.*map"),
                },
            },
        ],
    },
    Category {
        name: "PWA Capabilities",
        checks: &[
            CheckDef {
                id: "pwa-1",
                description: "Service worker registered",
                strategy: Strategy::File {
                    candidates: &["service-worker.js", "sw.js"],
                    pattern: None,
                },
            },
            CheckDef {
                id: "pwa-2",
                description: "Web app manifest present",
                strategy: Strategy::File {
                    candidates: &["manifest.json", "site.webmanifest"],
                    pattern: None,
                },
            },
            CheckDef {
                id: "pwa-3",
                description: "Offline caching implemented",
                strategy: Strategy::File {
                    candidates: &["service-worker.js"],
                    pattern: Some("offline|cache"),
                },
            },
        ],
    },
];

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct EngineOutcome {
    pub engine: String,
    pub status: CheckStatus,
    pub note: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub id: &'static str,
    pub description: &'static str,
    pub status: CheckStatus,
    pub note: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<EngineOutcome>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryOutcome {
    pub name: &'static str,
    pub checks: Vec<CheckOutcome>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub pass: usize,
    pub partial: usize,
    pub fail: usize,
    pub skip: usize,
}

impl Summary {
    fn record(&mut self, status: CheckStatus) {
        self.total += 1;
        match status {
            CheckStatus::Pass => self.pass += 1,
            CheckStatus::Partial => self.partial += 1,
            CheckStatus::Fail => self.fail += 1,
            CheckStatus::Skip => self.skip += 1,
        }
    }

    pub fn count(&self, status: CheckStatus) -> usize {
        match status {
            CheckStatus::Pass => self.pass,
            CheckStatus::Partial => self.partial,
            CheckStatus::Fail => self.fail,
            CheckStatus::Skip => self.skip,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub generated_at: DateTime<Utc>,
    pub categories: Vec<CategoryOutcome>,
    pub summary: Summary,
}

// ---------------------------------------------------------------------------
// Running the audit
// ---------------------------------------------------------------------------

/// Grades every check in [`CATEGORIES`] against the tree rooted at `root`.
pub fn run(root: &Path, config: &Config) -> AuditReport {
    let mut categories = Vec::with_capacity(CATEGORIES.len());
    let mut summary = Summary::default();
    for category in CATEGORIES {
        let mut checks = Vec::with_capacity(category.checks.len());
        for check in category.checks {
            let outcome = run_check(root, config, check);
            summary.record(outcome.status);
            checks.push(outcome);
        }
        categories.push(CategoryOutcome {
            name: category.name,
            checks,
        });
    }
    AuditReport {
        generated_at: Utc::now(),
        categories,
        summary,
    }
}

fn run_check(root: &Path, config: &Config, check: &CheckDef) -> CheckOutcome {
    match &check.strategy {
        Strategy::File {
            candidates,
            pattern,
        } => file_check(root, check, candidates, *pattern),
        Strategy::Tree { pattern, negate } => tree_check(root, config, check, pattern, *negate),
        Strategy::Engine(kind) => engine_check(root, config, check, *kind),
        Strategy::Git => outcome(
            check,
            CheckStatus::Skip,
            "Requires the git CLI".to_string(),
        ),
    }
}

fn outcome(check: &CheckDef, status: CheckStatus, note: String) -> CheckOutcome {
    CheckOutcome {
        id: check.id,
        description: check.description,
        status,
        note,
        details: Vec::new(),
    }
}

fn file_check(
    root: &Path,
    check: &CheckDef,
    candidates: &[&'static str],
    pattern: Option<&'static str>,
) -> CheckOutcome {
    for candidate in candidates {
        let path = root.join(candidate);
        if !path.exists() {
            continue;
        }
        let (status, note) = match pattern {
            Some(pattern) => {
                let Ok(re) = Regex::new(pattern) else {
                    return outcome(check, CheckStatus::Fail, "Invalid pattern".to_string());
                };
                if file_contains(&path, &re) {
                    (CheckStatus::Pass, format!("Pattern found in {candidate}"))
                } else {
                    (
                        CheckStatus::Fail,
                        format!("Pattern not found in {candidate}"),
                    )
                }
            }
            None => (CheckStatus::Pass, format!("File exists: {candidate}")),
        };
        return outcome(check, status, note);
    }
    outcome(
        check,
        CheckStatus::Fail,
        format!("Files not found: {}", candidates.join(", ")),
    )
}

fn tree_check(
    root: &Path,
    config: &Config,
    check: &CheckDef,
    pattern: &str,
    negate: bool,
) -> CheckOutcome {
    let Ok(re) = Regex::new(pattern) else {
        return outcome(check, CheckStatus::Fail, "Invalid pattern".to_string());
    };
    let mut files = Vec::new();
    collect_files(root, &config.audit.skip_dirs, &mut files);
    let found = files.iter().any(|file| file_contains(file, &re));
    let (status, note) = match (found, negate) {
        (true, true) => (
            CheckStatus::Fail,
            "Pattern found in files (should not exist)",
        ),
        (true, false) => (CheckStatus::Pass, "Pattern found"),
        (false, true) => (CheckStatus::Pass, "Pattern not found"),
        (false, false) => (CheckStatus::Fail, "Pattern not found"),
    };
    outcome(check, status, note.to_string())
}

fn engine_check(
    root: &Path,
    config: &Config,
    check: &CheckDef,
    kind: EngineCheck,
) -> CheckOutcome {
    let mut details = Vec::with_capacity(config.audit.engine_files.len());
    for engine in &config.audit.engine_files {
        let path = root.join(engine);
        if !path.exists() {
            details.push(EngineOutcome {
                engine: engine.clone(),
                status: CheckStatus::Skip,
                note: "File does not exist".to_string(),
            });
            continue;
        }
        match fs::read_to_string(&path) {
            Ok(content) => details.push(inspect_engine(engine, &content, kind)),
            Err(_) => details.push(EngineOutcome {
                engine: engine.clone(),
                status: CheckStatus::Skip,
                note: "Could not read file".to_string(),
            }),
        }
    }
    let counted = details
        .iter()
        .filter(|d| d.status != CheckStatus::Skip)
        .count();
    let passed = details
        .iter()
        .filter(|d| d.status == CheckStatus::Pass)
        .count();
    let (status, note) = if counted == 0 {
        (CheckStatus::Skip, "No engines to check".to_string())
    } else if passed == counted {
        (CheckStatus::Pass, format!("{passed}/{counted} engines pass"))
    } else if passed > 0 {
        (
            CheckStatus::Partial,
            format!("{passed}/{counted} engines pass"),
        )
    } else {
        (CheckStatus::Fail, format!("0/{counted} engines pass"))
    };
    CheckOutcome {
        id: check.id,
        description: check.description,
        status,
        note,
        details,
    }
}

// ---------------------------------------------------------------------------
// Engine source inspection
// ---------------------------------------------------------------------------

static ERROR_HANDLING_RE: OnceLock<Regex> = OnceLock::new();
static TRY_CATCH_RE: OnceLock<Regex> = OnceLock::new();
static SANITIZE_RE: OnceLock<Regex> = OnceLock::new();
static INNER_HTML_RE: OnceLock<Regex> = OnceLock::new();
static JSDOC_RE: OnceLock<Regex> = OnceLock::new();
static DUPLICATION_RE: OnceLock<Regex> = OnceLock::new();

fn error_handling_re() -> &'static Regex {
    ERROR_HANDLING_RE.get_or_init(|| Regex::new(r"ErrorHandler|try\s*\{|catch\s*\(").unwrap())
}

fn try_catch_re() -> &'static Regex {
    TRY_CATCH_RE.get_or_init(|| Regex::new(r"try\s*\{[\s\S]*?catch\s*\(").unwrap())
}

fn sanitize_re() -> &'static Regex {
    SANITIZE_RE.get_or_init(|| Regex::new("sanitize|SecurityUtils|textContent").unwrap())
}

fn inner_html_re() -> &'static Regex {
    INNER_HTML_RE.get_or_init(|| Regex::new(r"\.innerHTML\s*=").unwrap())
}

fn jsdoc_re() -> &'static Regex {
    JSDOC_RE.get_or_init(|| Regex::new(r"/\*\*[\s\S]*?\*/|@param|@returns|@description").unwrap())
}

fn duplication_re() -> &'static Regex {
    DUPLICATION_RE
        .get_or_init(|| Regex::new(r#"from ['"]\./shared/utils|import.*shared/utils"#).unwrap())
}

fn inspect_engine(engine: &str, content: &str, kind: EngineCheck) -> EngineOutcome {
    let (status, note) = match kind {
        EngineCheck::ErrorHandling => {
            if error_handling_re().is_match(content) {
                (CheckStatus::Pass, "Error handling found")
            } else {
                (CheckStatus::Fail, "No error handling found")
            }
        }
        EngineCheck::TryCatch => {
            if try_catch_re().is_match(content) {
                (CheckStatus::Pass, "Try/catch blocks found")
            } else {
                (CheckStatus::Fail, "No try/catch blocks found")
            }
        }
        EngineCheck::Sanitization => {
            let sanitizes = sanitize_re().is_match(content);
            let sets_inner_html = inner_html_re().is_match(content);
            if sanitizes {
                (CheckStatus::Pass, "Sanitization found")
            } else if sets_inner_html {
                (CheckStatus::Partial, "Uses innerHTML without sanitization")
            } else {
                (CheckStatus::Pass, "No innerHTML usage")
            }
        }
        EngineCheck::JsDoc => {
            if jsdoc_re().is_match(content) {
                (CheckStatus::Pass, "JSDoc comments found")
            } else {
                (CheckStatus::Fail, "No JSDoc comments found")
            }
        }
        EngineCheck::Duplication => {
            if duplication_re().is_match(content) {
                (CheckStatus::Pass, "Imports shared utilities")
            } else {
                (CheckStatus::Fail, "No shared utility imports")
            }
        }
    };
    EngineOutcome {
        engine: engine.to_string(),
        status,
        note: note.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tree walking
// ---------------------------------------------------------------------------

const SKIP_DIRS: &[&str] = &[".git", "node_modules", "target"];

fn collect_files(dir: &Path, extra_skips: &[String], files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if SKIP_DIRS.contains(&name.as_ref()) || extra_skips.iter().any(|s| s == name.as_ref())
            {
                continue;
            }
            collect_files(&path, extra_skips, files);
        } else if path.is_file() {
            files.push(path);
        }
    }
}

fn file_contains(path: &Path, re: &Regex) -> bool {
    // Unreadable and non-UTF-8 files never match.
    fs::read_to_string(path)
        .map(|content| re.is_match(&content))
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Markdown report
// ---------------------------------------------------------------------------

/// Renders the report in the layout the content repos commit as
/// `RECOMMENDATIONS_STATUS_REPORT.md`.
pub fn render_markdown(report: &AuditReport) -> String {
    let mut md = String::new();
    md.push_str("# Recommendations Status Report\n\n");
    md.push_str(&format!(
        "**Generated:** {}\n\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    md.push_str("## Summary\n\n");
    md.push_str("| Status | Count | Percentage |\n");
    md.push_str("|--------|-------|------------|\n");
    for status in CheckStatus::all() {
        let count = report.summary.count(status);
        let pct = 100.0 * count as f64 / report.summary.total as f64;
        md.push_str(&format!(
            "| {} {} | {} | {:.1}% |\n",
            status.icon(),
            label(status),
            count,
            pct
        ));
    }
    md.push_str(&format!(
        "| **Total** | **{}** | **100%** |\n\n",
        report.summary.total
    ));

    for category in &report.categories {
        md.push_str(&format!("### {}\n\n", category.name));
        md.push_str("| ID | Description | Status | Notes |\n");
        md.push_str("|----|-------------|--------|-------|\n");
        for check in &category.checks {
            md.push_str(&format!(
                "| {} | {} | {} {} | {} |\n",
                check.id,
                check.description,
                check.status.icon(),
                check.status.as_str().to_uppercase(),
                check.note
            ));
            if !check.details.is_empty() {
                md.push_str("| | **Engine Details:** | | |\n");
                for detail in &check.details {
                    md.push_str(&format!(
                        "| | - {} | {} | {} |\n",
                        detail.engine,
                        detail.status.icon(),
                        detail.note
                    ));
                }
            }
        }
        md.push('\n');
    }

    md.push_str("---\n\n## Next Steps\n\n");
    let failed: Vec<&CheckOutcome> = report
        .categories
        .iter()
        .flat_map(|c| c.checks.iter())
        .filter(|c| c.status == CheckStatus::Fail)
        .collect();
    if failed.is_empty() {
        md.push_str("All checks pass. Re-run the audit after structural changes.\n");
    } else {
        for check in failed {
            md.push_str(&format!("- {}: {}\n", check.id, check.description));
        }
    }
    md
}

fn label(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "Pass",
        CheckStatus::Partial => "Partial",
        CheckStatus::Fail => "Fail",
        CheckStatus::Skip => "Skip",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn find<'a>(report: &'a AuditReport, id: &str) -> &'a CheckOutcome {
        report
            .categories
            .iter()
            .flat_map(|c| c.checks.iter())
            .find(|c| c.id == id)
            .unwrap()
    }

    #[test]
    fn authored_patterns_compile() {
        for category in CATEGORIES {
            for check in category.checks {
                match &check.strategy {
                    Strategy::File {
                        pattern: Some(p), ..
                    } => {
                        Regex::new(p).unwrap();
                    }
                    Strategy::Tree { pattern, .. } => {
                        Regex::new(pattern).unwrap();
                    }
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn empty_tree_grades_every_check() {
        let dir = TempDir::new().unwrap();
        let report = run(dir.path(), &Config::new());
        assert_eq!(report.summary.total, 50);
        assert_eq!(report.summary.pass, 1); // only the negated backup check
        assert_eq!(report.summary.partial, 0);
        assert_eq!(report.summary.fail, 43);
        assert_eq!(report.summary.skip, 6); // git plus five engine rollups
        assert_eq!(report.categories.len(), CATEGORIES.len());
    }

    #[test]
    fn file_check_first_existing_candidate_decides() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("sw.js"), "noop").unwrap();
        let report = run(dir.path(), &Config::new());
        let pwa = find(&report, "pwa-1");
        assert_eq!(pwa.status, CheckStatus::Pass);
        assert_eq!(pwa.note, "File exists: sw.js");
    }

    #[test]
    fn file_check_pattern_decides_when_present() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"devDependencies":{"terser":"^5"}}"#)
            .unwrap();
        let report = run(dir.path(), &Config::new());
        assert_eq!(find(&report, "perf-6").status, CheckStatus::Pass);
        assert_eq!(find(&report, "test-1").status, CheckStatus::Fail);
        assert_eq!(
            find(&report, "test-1").note,
            "Pattern not found in package.json"
        );
    }

    #[test]
    fn directory_candidates_count_as_existing() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".github/workflows")).unwrap();
        fs::create_dir_all(dir.path().join("shared")).unwrap();
        let report = run(dir.path(), &Config::new());
        assert_eq!(find(&report, "repo-4").status, CheckStatus::Pass);
        assert_eq!(find(&report, "code-1").status, CheckStatus::Pass);
    }

    #[test]
    fn negated_tree_check_fails_when_pattern_appears() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "restored from app.js.backup").unwrap();
        let report = run(dir.path(), &Config::new());
        assert_eq!(find(&report, "code-4").status, CheckStatus::Fail);
        assert_eq!(find(&report, "repo-2").status, CheckStatus::Pass);
    }

    #[test]
    fn tree_check_skips_configured_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("vendor")).unwrap();
        fs::write(dir.path().join("vendor/blob.txt"), "aria-live").unwrap();
        let mut config = Config::new();
        config.audit.skip_dirs = vec!["vendor".to_string()];
        let report = run(dir.path(), &config);
        assert_eq!(find(&report, "a11y-4").status, CheckStatus::Fail);

        let unskipped = run(dir.path(), &Config::new());
        assert_eq!(find(&unskipped, "a11y-4").status, CheckStatus::Pass);
    }

    #[test]
    fn engine_rollup_counts_only_existing_files() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::new();
        config.audit.engine_files = vec!["alpha.js".to_string(), "beta.js".to_string()];

        fs::write(
            dir.path().join("alpha.js"),
            "try { run(); } catch (err) { report(err); }",
        )
        .unwrap();
        let report = run(dir.path(), &config);
        let rollup = find(&report, "error-2");
        assert_eq!(rollup.status, CheckStatus::Pass);
        assert_eq!(rollup.note, "1/1 engines pass");
        assert_eq!(rollup.details.len(), 2);
        assert_eq!(rollup.details[1].status, CheckStatus::Skip);

        fs::write(dir.path().join("beta.js"), "const x = 1;").unwrap();
        let report = run(dir.path(), &config);
        let rollup = find(&report, "error-2");
        assert_eq!(rollup.status, CheckStatus::Partial);
        assert_eq!(rollup.note, "1/2 engines pass");
    }

    #[test]
    fn sanitization_check_flags_raw_inner_html() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::new();
        config.audit.engine_files = vec!["view.js".to_string()];
        fs::write(dir.path().join("view.js"), "el.innerHTML = raw;").unwrap();
        let report = run(dir.path(), &config);
        let rollup = find(&report, "sec-2");
        assert_eq!(rollup.status, CheckStatus::Fail);
        assert_eq!(rollup.details[0].status, CheckStatus::Partial);
        assert_eq!(rollup.details[0].note, "Uses innerHTML without sanitization");

        fs::write(
            dir.path().join("view.js"),
            "el.innerHTML = SecurityUtils.sanitizeHTML(raw);",
        )
        .unwrap();
        let report = run(dir.path(), &config);
        assert_eq!(find(&report, "sec-2").status, CheckStatus::Pass);
    }

    #[test]
    fn empty_engine_list_skips_rollups() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::new();
        config.audit.engine_files = Vec::new();
        let report = run(dir.path(), &config);
        let rollup = find(&report, "doc-1");
        assert_eq!(rollup.status, CheckStatus::Skip);
        assert_eq!(rollup.note, "No engines to check");
    }

    #[test]
    fn git_checks_always_skip() {
        let dir = TempDir::new().unwrap();
        let report = run(dir.path(), &Config::new());
        assert_eq!(find(&report, "repo-5").status, CheckStatus::Skip);
    }

    #[test]
    fn markdown_report_layout() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitignore"), "*.backup\n*.bak\n").unwrap();
        let report = run(dir.path(), &Config::new());
        let md = render_markdown(&report);
        assert!(md.starts_with("# Recommendations Status Report"));
        assert!(md.contains("**Generated:**"));
        assert!(md.contains("| ✅ Pass |"));
        assert!(md.contains("| **Total** | **50** | **100%** |"));
        assert!(md.contains("### Repository Structure"));
        assert!(md.contains("| repo-1 | Backup files ignored via .gitignore | ✅ PASS |"));
        assert!(md.contains("## Next Steps"));
        assert!(md.contains("- repo-3: Python dependencies pinned in requirements.txt"));
    }

    #[test]
    fn status_parse_and_display() {
        assert_eq!("pass".parse::<CheckStatus>().unwrap(), CheckStatus::Pass);
        assert_eq!("PARTIAL".parse::<CheckStatus>().unwrap(), CheckStatus::Partial);
        assert_eq!(CheckStatus::Skip.to_string(), "skip");
        assert_eq!(CheckStatus::Fail.icon(), "❌");
        assert!("done".parse::<CheckStatus>().is_err());
    }
}
