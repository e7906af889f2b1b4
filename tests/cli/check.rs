use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_check_clean_locales() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"title": "Hello", "welcome": "Hi {name}"}"#),
        ("de", r#"{"title": "Hallo", "welcome": "Servus {name}"}"#),
    ])?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "\u{2713} Checked 2 locale files - no issues found\n");
    Ok(())
}

#[test]
fn test_check_reports_every_problem() -> Result<()> {
    let test = CliTest::with_locales(&[
        (
            "en",
            r#"{"title": "Hello", "greeting": "Hi {name}", "nav": {"home": "Home", "about": "About"}}"#,
        ),
        (
            "fr",
            r#"{"title": {"short": "Salut"}, "greeting": "Salut {user}", "nav": {"home": "Accueil"}, "flag": true}"#,
        ),
    ])?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(1));
    assert_eq!(
        out.stdout,
        "error: unexpected boolean value at key \"flag\" in locale fr  unexpected-value\n  \
         = note: only strings, numbers and nested objects are supported\n\
         \n\
         error: key \"nav.about\" is missing in fr  missing-key\n\
         \n\
         error: type mismatch at \"title\": expected text, found group in locale fr  type-mismatch\n\
         \n\
         error: parameter mismatch at \"greeting\" in locale fr  param-mismatch\n  \
         = note: expected (name), found (user)\n\
         \n\
         \u{2718} 4 problems\n"
    );
    Ok(())
}

#[test]
fn test_check_missing_messages_dir() -> Result<()> {
    let test = CliTest::new()?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("does not exist"));
    assert!(out.stderr.contains("messagesRoot"));
    Ok(())
}

#[test]
fn test_check_fails_on_invalid_json() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "1"}"#), ("de", "{ not json")])?;

    let out = run(test.check_command())?;
    assert_eq!(out.code, Some(1));
    assert_eq!(out.stdout, "");
    assert!(
        out.stderr
            .contains("error: 1 locale file(s) could not be parsed (use -v for details)")
    );

    let mut cmd = test.check_command();
    cmd.arg("--verbose");
    let out = run(cmd)?;
    assert!(out.stderr.contains("de.json"));
    assert!(out.stderr.contains("  en: 1 message\n"));
    Ok(())
}

#[test]
fn test_check_uses_config_messages_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glotgenrc.json", r#"{ "messagesRoot": "./locales" }"#)?;
    test.write_file("locales/en.json", r#"{"a": "1"}"#)?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "\u{2713} Checked 1 locale file - no issues found\n");
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("gen"));
    assert!(out.stdout.contains("check"));
    assert!(out.stdout.contains("init"));
    Ok(())
}
