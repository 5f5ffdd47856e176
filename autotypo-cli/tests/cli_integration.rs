//! Integration tests for the autotypo CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn autotypo() -> Command {
    let mut cmd = Command::cargo_bin("autotypo").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_process_french_text() {
    let mut cmd = autotypo();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("french-sample.txt"));

    cmd.assert()
        .success()
        .stdout(
            "Il m’a dit\u{202F}: «\u{202F}Viens vite\u{202F}!\u{202F}»\n\
             Voir http://scribus.net\u{202F}: c’est bien\u{202F}!\n",
        )
        .stderr(predicate::str::contains("8 replacements have occurred"));
}

#[test]
fn test_process_english_text() {
    let mut cmd = autotypo();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .arg("-l")
        .arg("en");

    cmd.assert()
        .success()
        .stdout("He said “hello, world”. It’s ‘fine’.\n")
        .stderr(predicate::str::contains("5 replacements have occurred"));
}

#[test]
fn test_json_output() {
    let mut cmd = autotypo();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .arg("-l")
        .arg("en")
        .arg("-f")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(value["language"], "en");
    assert_eq!(value["change_count"], 5);
    assert_eq!(value["text"], "He said “hello, world”. It’s ‘fine’.\n");
    assert!(value["warnings"].as_array().unwrap().is_empty());
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    let mut cmd = autotypo();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .arg("-l")
        .arg("en")
        .arg("-o")
        .arg(&output_file);

    cmd.assert().success().stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_file).unwrap();
    assert_eq!(content, "He said “hello, world”. It’s ‘fine’.\n");
}

#[test]
fn test_stdin_input() {
    let mut cmd = autotypo();
    cmd.args(["process", "-i", "-", "-l", "de"])
        .write_stdin("Er sagte: \"Ja\".");

    cmd.assert().success().stdout("Er sagte: „Ja“.");
}

#[test]
fn test_space_style_flag() {
    let test_cases = vec![
        ("none", "«Oui»?"),
        ("1", "«\u{202F}Oui\u{202F}»\u{202F}?"),
        ("nbsp", "«\u{00A0}Oui\u{00A0}»\u{00A0}?"),
        ("3", "«\u{2009}Oui\u{2009}»\u{2009}?"),
    ];

    for (style, expected) in test_cases {
        let mut cmd = autotypo();
        cmd.args(["process", "-i", "-", "-q", "-s", style])
            .write_stdin("\"Oui\"?");
        cmd.assert().success().stdout(expected);
    }
}

#[test]
fn test_invalid_space_style() {
    let mut cmd = autotypo();
    cmd.args(["process", "-i", "-", "-s", "wide"]).write_stdin("x");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid space style"));
}

#[test]
fn test_keep_existing_flag() {
    let mut cmd = autotypo();
    cmd.args(["process", "-i", "-", "--keep-existing"])
        .write_stdin("« Oui » !");

    cmd.assert()
        .success()
        .stdout("« Oui » !")
        .stderr(predicate::str::contains("0 replacements have occurred"));
}

#[test]
fn test_inconsistent_quotes_are_reported() {
    let mut cmd = autotypo();
    cmd.args(["process", "-i", "-", "--keep-existing"])
        .write_stdin("«a «b");

    cmd.assert()
        .success()
        .stdout("«a «b")
        .stderr(predicate::str::contains(
            "closing double quote missing before position 3",
        ));
}

#[test]
fn test_quiet_mode() {
    let mut cmd = autotypo();
    cmd.args(["process", "-i", "-", "-q", "--keep-existing"])
        .write_stdin("«a «b");

    cmd.assert()
        .success()
        .stdout("«a «b")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_pattern_must_match_one_file() {
    let mut cmd = autotypo();
    cmd.arg("process").arg("-i").arg(fixture_path("*.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("must match exactly one file"))
        .stderr(predicate::str::contains("2 text runs selected"));
}

#[test]
fn test_pattern_matching_one_file() {
    let mut cmd = autotypo();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("english-*.txt"))
        .arg("-l")
        .arg("en");

    cmd.assert().success().stdout(predicate::str::contains("“hello, world”"));
}

#[test]
fn test_invalid_file() {
    let mut cmd = autotypo();
    cmd.arg("process").arg("-i").arg("nonexistent.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no text run selected"));
}

#[test]
fn test_unsupported_language_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    let mut cmd = autotypo();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .arg("-l")
        .arg("tlh")
        .arg("-o")
        .arg(&output_file);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("language 'tlh' not supported"));
    assert!(!output_file.exists());
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("autotypo.toml");
    fs::write(
        &config_file,
        r#"
[processing]
default_language = "en"
space_style = "thin"

[output]
default_format = "json"
pretty_json = false
"#,
    )
    .unwrap();

    let mut cmd = autotypo();
    cmd.arg("process")
        .arg("-i")
        .arg("-")
        .arg("-c")
        .arg(&config_file)
        .write_stdin("\"a\"");

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.lines().count(), 1);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["language"], "en");
    assert_eq!(value["text"], "“\u{2009}a\u{2009}”");
}

#[test]
fn test_list_languages() {
    let mut cmd = autotypo();
    cmd.arg("list").arg("languages");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Available languages:"))
        .stdout(predicate::str::contains("fr"))
        .stdout(predicate::str::contains("de-g"))
        .stdout(predicate::str::contains("uk"));
}

#[test]
fn test_list_space_styles() {
    let mut cmd = autotypo();
    cmd.arg("list").arg("space-styles");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("nbthin"))
        .stdout(predicate::str::contains("thin space (U+2009)"));
}

#[test]
fn test_generate_validate_and_use_profile() {
    let temp_dir = TempDir::new().unwrap();
    let profile_path = temp_dir.path().join("fr-ch.toml");

    autotypo()
        .args(["generate-config", "--language-code", "fr-ch", "--output"])
        .arg(&profile_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Profile template generated successfully",
        ));

    let template = fs::read_to_string(&profile_path).unwrap();
    assert!(template.contains("code = \"fr-ch\""));
    fs::write(
        &profile_path,
        template.replace("“", "«").replace("”", "»"),
    )
    .unwrap();

    autotypo()
        .args(["validate", "-c"])
        .arg(&profile_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile is valid"))
        .stdout(predicate::str::contains("Language code: fr-ch"));

    autotypo()
        .args(["process", "-i", "-", "--language-config"])
        .arg(&profile_path)
        .write_stdin("\"Salut\"")
        .assert()
        .success()
        .stdout("«Salut»");
}

#[test]
fn test_validate_invalid_profile() {
    let temp_dir = TempDir::new().unwrap();
    let profile_path = temp_dir.path().join("broken.toml");
    fs::write(
        &profile_path,
        r#"
[metadata]
code = "xx"

[quotes]
lead_double = '"'
trail_double = "”"
lead_single = "‘"
trail_single = "’"
"#,
    )
    .unwrap();

    autotypo()
        .args(["validate", "-c"])
        .arg(&profile_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Profile is invalid"))
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_language_and_profile_are_exclusive() {
    autotypo()
        .args([
            "process",
            "-i",
            "-",
            "-l",
            "fr",
            "--language-config",
            "p.toml",
        ])
        .assert()
        .failure();
}
