use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

const TWO_PAIRS: &str = "Alpha\nA1,A2\nBeta\nB1,B2\n";

fn code_words() -> Command {
    let mut cmd = Command::cargo_bin("code-words").unwrap();
    cmd.env_remove("CODEWORDS_FILE").env_remove("CODEWORDS_DEBUG");
    cmd
}

fn write_codex(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_no_flags_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    code_words()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_help_page() {
    code_words()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Introduction to code-words"))
        .stdout(predicate::str::contains("abc123^!@#QWERTY"));
}

#[test]
fn test_list_categories() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_codex(dir.path(), "pairs.txt", TWO_PAIRS);
    code_words()
        .arg("-f")
        .arg(&file)
        .arg("-lc")
        .assert()
        .success()
        .stdout("0 Alpha\n1 Beta\n")
        .stderr(predicate::str::contains("pairs.txt"));
}

#[test]
fn test_list_verbose() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_codex(dir.path(), "pairs.txt", TWO_PAIRS);
    code_words()
        .arg("-f")
        .arg(&file)
        .arg("-lv")
        .assert()
        .success()
        .stdout("\n0 Alpha\nA1, A2\n\n1 Beta\nB1, B2\n");
}

#[test]
fn test_list_flags_are_exclusive() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_codex(dir.path(), "pairs.txt", TWO_PAIRS);
    code_words()
        .arg("-f")
        .arg(&file)
        .args(["-lc", "-lv"])
        .assert()
        .code(2);
}

#[test]
fn test_default_file_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_codex(dir.path(), "codex.txt", TWO_PAIRS);
    code_words()
        .current_dir(dir.path())
        .arg("-lc")
        .assert()
        .success()
        .stdout("0 Alpha\n1 Beta\n");
}

#[test]
fn test_file_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_codex(dir.path(), "env.txt", "Gamma\nG1,G2\n");
    code_words()
        .env("CODEWORDS_FILE", &file)
        .arg("-lc")
        .assert()
        .success()
        .stdout("0 Gamma\n");
}

#[test]
fn test_generate_seeded_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_codex(dir.path(), "pairs.txt", TWO_PAIRS);

    let mut first = code_words();
    first.arg("-f").arg(&file).args(["-g", "0", "1", "-s", "seed1"]);
    let mut second = code_words();
    second.arg("-f").arg(&file).args(["-g", "0", "1", "-s", "seed1"]);

    let a = stdout_of(&mut first);
    let b = stdout_of(&mut second);
    assert_eq!(a, b);

    let words: Vec<&str> = a.split_whitespace().collect();
    assert_eq!(words.len(), 2);
    assert!(["A1", "A2"].contains(&words[0]));
    assert!(["B1", "B2"].contains(&words[1]));
}

#[test]
fn test_generate_word_count_matches_indices() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_codex(dir.path(), "pairs.txt", TWO_PAIRS);
    let out = stdout_of(
        code_words()
            .arg("-f")
            .arg(&file)
            .args(["-g", "1", "0", "1", "1", "0"]),
    );
    assert_eq!(out.lines().count(), 1);
    assert_eq!(out.split(' ').count(), 5);
}

#[test]
fn test_generate_bad_index_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_codex(dir.path(), "pairs.txt", TWO_PAIRS);
    let assert = code_words()
        .arg("-f")
        .arg(&file)
        .args(["-g", "0", "1", "2", "0", "-s", "seed1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid category index [2]"));

    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(out.split_whitespace().count(), 2);
}

#[test]
fn test_generate_negative_index() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_codex(dir.path(), "pairs.txt", TWO_PAIRS);
    code_words()
        .arg("-f")
        .arg(&file)
        .args(["-g", "-1"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Invalid category index [-1]"));
}

#[test]
fn test_generate_huge_index_fails_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_codex(dir.path(), "pairs.txt", TWO_PAIRS);
    let assert = code_words()
        .arg("-f")
        .arg(&file)
        .args(["-g", "0", "99999999999999999999", "1", "-s", "seed1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Invalid category index [99999999999999999999]",
        ));

    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let words: Vec<&str> = out.split_whitespace().collect();
    assert_eq!(words.len(), 1);
    assert!(["A1", "A2"].contains(&words[0]));
}

#[test]
fn test_generate_non_integer_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_codex(dir.path(), "pairs.txt", TWO_PAIRS);
    code_words()
        .arg("-f")
        .arg(&file)
        .args(["-g", "0", "one"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("not an integer"));
}

#[test]
fn test_generate_json() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_codex(dir.path(), "pairs.txt", TWO_PAIRS);
    let out = stdout_of(
        code_words()
            .arg("-f")
            .arg(&file)
            .args(["--json", "-s", "sixteen-chars-ok", "-g", "1", "0"]),
    );
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["seeded"], true);
    assert_eq!(value["words"].as_array().unwrap().len(), 2);
}

#[test]
fn test_odd_line_count_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_codex(dir.path(), "odd.txt", "Alpha\nA1,A2\nBeta\n");
    code_words()
        .arg("-f")
        .arg(&file)
        .arg("-lc")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("incorrect reference file format"))
        .stderr(predicate::str::contains("odd.txt"));
}

#[test]
fn test_missing_file_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    code_words()
        .current_dir(dir.path())
        .args(["-g", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[codex.txt]"));
}

#[test]
fn test_weak_seed_warns() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_codex(dir.path(), "pairs.txt", TWO_PAIRS);
    code_words()
        .arg("-f")
        .arg(&file)
        .args(["-s", "short", "-g", "0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning:"));
}

#[test]
fn test_bundled_codex_is_well_formed() {
    let codex = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../codex.txt");
    code_words()
        .arg("-f")
        .arg(&codex)
        .arg("-lv")
        .assert()
        .success();
}

#[test]
fn test_weak_seed_ignored_when_listing() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_codex(dir.path(), "pairs.txt", TWO_PAIRS);
    code_words()
        .arg("-f")
        .arg(&file)
        .args(["-s", "short", "-lc"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning:").not());
}
