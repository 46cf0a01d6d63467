#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn selfmap(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("selfmap").unwrap();
    cmd.current_dir(dir.path()).env("SELFMAP_ROOT", dir.path());
    cmd
}

/// Run the binary from `cwd` with no explicit root, so the marker walk
/// in `root::resolve_root` decides.
fn selfmap_from(cwd: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("selfmap").unwrap();
    cmd.current_dir(cwd).env_remove("SELFMAP_ROOT");
    cmd
}

// ---------------------------------------------------------------------------
// selfmap needs
// ---------------------------------------------------------------------------

#[test]
fn needs_actions_resolves_free_text() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["needs", "actions", "I need more Safety in my life"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Safety"))
        .stdout(predicate::str::contains("input_contains_key"));
}

#[test]
fn needs_actions_falls_back_on_gibberish() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["needs", "actions", "xyzzynotaneed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acceptance"))
        .stdout(predicate::str::contains("fallback"));
}

#[test]
fn needs_actions_root_table_json() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["needs", "actions", "Belonging", "--table", "root", "-j"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"key\": \"Belonging\""))
        .stdout(predicate::str::contains("\"tier\": \"exact\""));
}

#[test]
fn needs_actions_rejects_unknown_table() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["needs", "actions", "safety", "--table", "middle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown table"));
}

#[test]
fn needs_signature_shows_both_faces() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["needs", "signature", "belonging"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Compulsion:"))
        .stdout(predicate::str::contains("Aversion:"));
}

#[test]
fn needs_signature_miss_fails() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["needs", "signature", "zzz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no signature"));
}

#[test]
fn needs_categories_and_list() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["needs", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Connection"));

    selfmap(&dir)
        .args(["needs", "list", "--category", "connection"])
        .assert()
        .success()
        .stdout(predicate::str::contains("belonging"));

    selfmap(&dir)
        .args(["needs", "list", "--category", "nonsense"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// selfmap vice / pattern
// ---------------------------------------------------------------------------

#[test]
fn vice_list_and_show() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["vice", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Anger"));

    selfmap(&dir)
        .args(["vice", "show", "anger"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chronic needs:"))
        .stdout(predicate::str::contains("Autonomy"));
}

#[test]
fn vice_show_unknown_fails() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["vice", "show", "qqq"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown vice"));
}

#[test]
fn pattern_show_fuzzy() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["pattern", "show", "perfect"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Perfectionism"))
        .stdout(predicate::str::contains("competence"));
}

// ---------------------------------------------------------------------------
// selfmap zodiac / chinese / tzolkin / numerology
// ---------------------------------------------------------------------------

#[test]
fn zodiac_for_date() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["zodiac", "2024-07-26"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Leo"));
}

#[test]
fn zodiac_rejects_malformed_date() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["zodiac", "26/07/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn chinese_for_year() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["chinese", "1924"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rat"))
        .stdout(predicate::str::contains("wood element"));
}

#[test]
fn tzolkin_reference_date_is_kin_one() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["tzolkin", "2024-07-26"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kin 1:"))
        .stdout(predicate::str::contains("Red Dragon"));
}

#[test]
fn numerology_master_number() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["numerology", "22"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Master Builder"))
        .stdout(predicate::str::contains("Reduces to: 4"));
}

#[test]
fn numerology_zero_has_no_profile() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["numerology", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no profile"));
}

// ---------------------------------------------------------------------------
// selfmap chart
// ---------------------------------------------------------------------------

#[test]
fn chart_with_moon_and_rising() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["chart", "2024-07-26", "--moon", "leo", "--rising", "leo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sun:     Leo"))
        .stdout(predicate::str::contains("Moon:    Leo"))
        .stdout(predicate::str::contains("charisma +5"));
}

#[test]
fn chart_rejects_unknown_sign() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["chart", "2024-07-26", "--moon", "ophiuchus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown sign"));
}

#[test]
fn chart_json_shape() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["chart", "2024-07-26", "-j"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sun\""))
        .stdout(predicate::str::contains("\"stats\""));
}

// ---------------------------------------------------------------------------
// selfmap audit
// ---------------------------------------------------------------------------

#[test]
fn audit_empty_root_summarizes() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["audit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50 checks:"))
        .stdout(predicate::str::contains("Repository Structure"));
}

#[test]
fn audit_write_renders_report() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir).args(["audit", "--write"]).assert().success();

    let report = dir.path().join("RECOMMENDATIONS_STATUS_REPORT.md");
    let content = std::fs::read_to_string(report).unwrap();
    assert!(content.starts_with("# Recommendations Status Report"));
    assert!(content.contains("## Next Steps"));
}

#[test]
fn audit_only_filters_display() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["audit", "--only", "pass"])
        .assert()
        .success()
        .stdout(predicate::str::contains("code-4"))
        .stdout(predicate::str::contains("repo-1").not());

    selfmap(&dir)
        .args(["audit", "--only", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown check status"));
}

// ---------------------------------------------------------------------------
// selfmap config
// ---------------------------------------------------------------------------

#[test]
fn config_validate_defaults_are_clean() {
    let dir = TempDir::new().unwrap();
    selfmap(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is valid"));
}

#[test]
fn config_validate_flags_empty_report_path() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("selfmap.yaml"),
        "audit:\n  report_path: \"\"\n",
    )
    .unwrap();
    selfmap(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error]"));
}

// ---------------------------------------------------------------------------
// Root resolution
// ---------------------------------------------------------------------------

#[test]
fn root_walks_up_to_the_config_marker() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("selfmap.yaml"), "version: 1\n").unwrap();
    let nested = dir.path().join("content/decks");
    std::fs::create_dir_all(&nested).unwrap();

    selfmap_from(&nested)
        .args(["audit", "--write"])
        .assert()
        .success();

    // The report lands beside the marker, not in the nested cwd.
    assert!(dir.path().join("RECOMMENDATIONS_STATUS_REPORT.md").is_file());
    assert!(!nested.join("RECOMMENDATIONS_STATUS_REPORT.md").exists());
}

#[test]
fn root_falls_back_to_the_git_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".git")).unwrap();
    let nested = dir.path().join("src");
    std::fs::create_dir_all(&nested).unwrap();

    selfmap_from(&nested)
        .args(["audit", "--write"])
        .assert()
        .success();

    assert!(dir.path().join("RECOMMENDATIONS_STATUS_REPORT.md").is_file());
    assert!(!nested.join("RECOMMENDATIONS_STATUS_REPORT.md").exists());
}
