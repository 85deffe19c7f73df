//! Integration tests for the configure, show and preview commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;

mod common;
use common::{print_divider_cmd, workspace};

#[test]
fn test_configure_with_token_flag() {
    let (_temp, config, file) = workspace("a.rs", "");

    print_divider_cmd(&config)
        .arg("configure")
        .arg("--file")
        .arg(&file)
        .arg("--token")
        .arg("=")
        .assert()
        .success()
        .stdout(predicate::str::contains("Divider token set to \"=\"."));

    let content = fs::read_to_string(&config).unwrap();
    assert!(content.contains("token = \"=\""));
    assert!(content.contains("updated"));
    // Configuring never edits the document
    assert_eq!(fs::read_to_string(&file).unwrap(), "");
}

#[test]
fn test_configure_from_stdin() {
    let (_temp, config, file) = workspace("a.rs", "");

    print_divider_cmd(&config)
        .arg("configure")
        .arg("--file")
        .arg(&file)
        .write_stdin("#~\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Enter the token for the divider (e.g., -, =, *) [-]: ",
        ))
        .stdout(predicate::str::contains("Divider token set to \"#~\"."));

    print_divider_cmd(&config)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("token = \"#~\""));
}

#[test]
fn test_configure_empty_line_keeps_current() {
    let (_temp, config, file) = workspace("a.rs", "");
    fs::create_dir_all(config.parent().unwrap()).unwrap();
    fs::write(&config, "token = \"*\"\n").unwrap();

    print_divider_cmd(&config)
        .arg("configure")
        .arg("--file")
        .arg(&file)
        .write_stdin("\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("[*]: "))
        .stdout(predicate::str::contains("Divider token set to \"*\"."));
}

#[test]
fn test_configure_dismissed_prompt_resets_to_default() {
    let (_temp, config, file) = workspace("a.rs", "");
    fs::create_dir_all(config.parent().unwrap()).unwrap();
    fs::write(&config, "token = \"*\"\n").unwrap();

    print_divider_cmd(&config)
        .arg("configure")
        .arg("--file")
        .arg(&file)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Divider token set to \"-\"."));

    assert!(fs::read_to_string(&config)
        .unwrap()
        .contains("token = \"-\""));
}

#[test]
fn test_configure_without_editor_fails() {
    let (_temp, config, _file) = workspace("a.rs", "");

    print_divider_cmd(&config)
        .arg("configure")
        .arg("--token")
        .arg("=")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No active editor found!"))
        .stdout(predicate::str::contains("Divider token set").not());

    assert!(!config.exists());
}

#[test]
fn test_configure_then_insert() {
    let (_temp, config, file) = workspace("Main.java", "");

    print_divider_cmd(&config)
        .args(["configure", "--token", "=-"])
        .arg("--file")
        .arg(&file)
        .assert()
        .success();

    print_divider_cmd(&config)
        .arg("insert")
        .arg("--file")
        .arg(&file)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        format!("System.out.println(\"{}\");", "=-".repeat(40))
    );
}

#[test]
fn test_show_defaults() {
    let (_temp, config, _file) = workspace("a.rs", "");

    print_divider_cmd(&config)
        .arg("show")
        .assert()
        .success()
        .stdout("token = \"-\"\n");
}

#[test]
fn test_preview() {
    let (_temp, config, _file) = workspace("a.rs", "");
    fs::create_dir_all(config.parent().unwrap()).unwrap();
    fs::write(&config, "token = \"*\"\n").unwrap();

    print_divider_cmd(&config)
        .args(["preview", "--language", "php"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "echo \"{}\\n\";\n",
            "*".repeat(80)
        )));

    print_divider_cmd(&config)
        .args(["preview", "--language", "haskell"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", "*".repeat(80))));
}

#[test]
fn test_languages() {
    let (_temp, config, _file) = workspace("a.rs", "");

    print_divider_cmd(&config)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("javascript"))
        .stdout(predicate::str::contains("csharp"))
        .stdout(predicate::str::contains("Console.WriteLine(\"...\");"));
}
