//! End-to-end tests for the `emoji-strip` binary.
//!
//! Every test runs inside its own temp directory so no stray
//! `emoji-strip.toml` from the working tree is picked up.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn emoji_strip(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("emoji-strip").expect("binary is built");
    cmd.current_dir(cwd).env_remove("RUST_LOG");
    cmd
}

#[test]
fn strips_rocket_and_reports_processed_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("a.md");
    fs::write(&file, "Hello 🚀 World").unwrap();

    emoji_strip(temp.path())
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Processed: {}\n",
            file.display()
        )))
        .stdout(predicate::str::ends_with("Done removing emojis!\n"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "Hello World");
}

#[test]
fn leaves_non_markdown_files_untouched_and_unmentioned() {
    let temp = TempDir::new().unwrap();
    let other = temp.path().join("b.txt");
    let original = "keep 🚀  these   spaces";
    fs::write(&other, original).unwrap();

    emoji_strip(temp.path())
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("b.txt").not())
        .stdout("Done removing emojis!\n");

    assert_eq!(fs::read_to_string(&other).unwrap(), original);
}

#[test]
fn file_without_emoji_is_still_processed() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("plain.md");
    fs::write(&file, "no  emoji\there\n").unwrap();

    emoji_strip(temp.path())
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Processed: {}",
            file.display()
        )));

    assert_eq!(fs::read_to_string(&file).unwrap(), "no emoji\there\n");
}

#[test]
fn missing_directory_fails_before_any_file_line() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");

    emoji_strip(temp.path())
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Processed").not())
        .stdout(predicate::str::contains("Error processing").not())
        .stdout(predicate::str::contains("Done removing emojis!").not())
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn failing_file_is_reported_and_batch_continues() {
    let temp = TempDir::new().unwrap();
    let broken = temp.path().join("broken.md");
    let good = temp.path().join("good.md");
    fs::create_dir(&broken).unwrap();
    fs::write(&good, "✅ ok").unwrap();

    emoji_strip(temp.path())
        .arg(temp.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains(format!(
            "Error processing {}: ",
            broken.display()
        )))
        .stdout(predicate::str::contains(format!(
            "Processed: {}",
            good.display()
        )))
        .stdout(predicate::str::ends_with("Done removing emojis!\n"));

    assert_eq!(fs::read_to_string(&good).unwrap(), " ok");
}

#[cfg(unix)]
#[test]
fn unreadable_file_reports_permission_error() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let locked = temp.path().join("locked.md");
    fs::write(&locked, "🔒 secret 🚀").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can read regardless of mode bits.
    if fs::read(&locked).is_ok() {
        eprintln!(
            "skipping unreadable_file_reports_permission_error: \
             current user can read mode 000 files"
        );
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
        return;
    }

    emoji_strip(temp.path())
        .arg(temp.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains(format!(
            "Error processing {}: ",
            locked.display()
        )))
        .stdout(predicate::str::ends_with("Done removing emojis!\n"));

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
    assert_eq!(fs::read_to_string(&locked).unwrap(), "🔒 secret 🚀");
}

#[test]
fn invalid_utf8_file_is_a_per_file_error() {
    let temp = TempDir::new().unwrap();
    let latin = temp.path().join("latin.md");
    fs::write(&latin, b"caf\xE9").unwrap();

    emoji_strip(temp.path())
        .arg(temp.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("is not valid UTF-8 text"));

    assert_eq!(fs::read(&latin).unwrap(), b"caf\xE9");
}

#[test]
fn emoji_flag_replaces_default_set() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("notes.md");
    fs::write(&file, "🚀 stays, ★ goes").unwrap();

    emoji_strip(temp.path())
        .arg(temp.path())
        .args(["--emoji", "★"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "🚀 stays, goes");
}

#[test]
fn empty_emoji_set_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("notes.md");
    fs::write(&file, "🚀").unwrap();

    emoji_strip(temp.path())
        .arg(temp.path())
        .args(["--emoji", ","])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&file).unwrap(), "🚀");
}

#[test]
fn config_file_sets_target_directory() {
    let temp = TempDir::new().unwrap();
    let articles = temp.path().join("articles");
    fs::create_dir(&articles).unwrap();
    fs::write(articles.join("k8s.md"), "📦 pods").unwrap();
    fs::write(
        temp.path().join("emoji-strip.toml"),
        "target_directory = \"articles\"\nemoji_set = [\"📦\"]\n",
    )
    .unwrap();

    emoji_strip(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("k8s.md"));

    assert_eq!(
        fs::read_to_string(articles.join("k8s.md")).unwrap(),
        " pods"
    );
}

#[test]
fn json_output_is_one_object_per_line() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.md"), "💡 idea").unwrap();

    let output = emoji_strip(temp.path())
        .arg(temp.path())
        .args(["--output-format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let objects: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let types: Vec<&str> = objects
        .iter()
        .map(|o| o["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["processed", "summary", "done"]);
    assert_eq!(objects[0]["emojis_removed"], 1);
    assert_eq!(objects[1]["files_failed"], 0);
}

#[test]
fn quiet_mode_hides_processed_lines() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.md"), "🚀").unwrap();

    emoji_strip(temp.path())
        .arg(temp.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout("Done removing emojis!\n");
}

#[test]
fn generate_config_writes_sample() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("sample.toml");

    emoji_strip(temp.path())
        .arg("--generate-config")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated sample configuration file"));

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("emoji_set"));
    assert!(content.contains("🚀"));
}
