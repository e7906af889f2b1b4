use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const EN: &str = r#"{
  "title": "Hello",
  "welcome": "Welcome, {name}!",
  "nav": { "home": "Home" }
}"#;

const DE: &str = r#"{
  "title": "Hallo",
  "welcome": "Willkommen, {name}!",
  "nav": { "home": "Start" }
}"#;

#[test]
fn test_gen_default_provider() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN), ("de", DE)])?;

    let out = run(test.gen_command())?;

    assert_eq!(out.code, Some(0));
    assert_eq!(
        out.stdout,
        "\u{2713} Generated 1 file from 2 locale files:\n  src/i18n/messages.ts\n"
    );

    let generated = test.read_file("src/i18n/messages.ts")?;
    // Files are scanned in name order, so "de" comes first.
    assert!(generated.contains("export type Locale = \"de\" | \"en\";"));
    assert!(generated.contains(
        "export type Messages = {\n  title: string;\n  welcome: (args: { name: Param }) => string;\n  nav: {\n    home: string;\n  };\n};"
    ));
    assert!(generated.contains("    welcome: (args) => `Welcome, ${args.name}!`,"));
    assert!(generated.contains("export const defaultLocale: Locale = \"de\";"));
    Ok(())
}

#[test]
fn test_gen_lazy_writes_side_modules() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN), ("de", DE)])?;

    let mut cmd = test.gen_command();
    cmd.args(["--lazy", "--default-locale", "en", "--out-dir", "generated"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert_eq!(
        out.stdout,
        "\u{2713} Generated 2 files from 2 locale files:\n  generated/messages.ts\n  generated/messages.de.ts\n"
    );

    let main = test.read_file("generated/messages.ts")?;
    assert!(main.contains("export type Locale = \"en\" | \"de\";"));
    assert!(main.contains("  \"de\": () => import(\"./messages.de\"),"));
    assert!(!main.contains("Willkommen"));

    let side = test.read_file("generated/messages.de.ts")?;
    assert!(side.contains("import type { Messages } from \"./messages\";"));
    assert!(side.contains("    home: \"Start\","));
    Ok(())
}

#[test]
fn test_gen_no_lazy_overrides_config() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN), ("de", DE)])?;
    test.write_file(".glotgenrc.json", r#"{ "lazy": true }"#)?;

    let mut cmd = test.gen_command();
    cmd.arg("--no-lazy");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert_eq!(
        out.stdout,
        "\u{2713} Generated 1 file from 2 locale files:\n  src/i18n/messages.ts\n"
    );
    assert!(!test.root().join("src/i18n/messages.de.ts").exists());
    assert!(test.read_file("src/i18n/messages.ts")?.contains("Willkommen"));
    Ok(())
}

#[test]
fn test_gen_type_output_from_config() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN)])?;
    test.write_file(
        ".glotgenrc.json",
        r#"{ "output": "type", "outDir": "./types", "moduleName": "i18n" }"#,
    )?;

    let out = run(test.gen_command())?;

    assert_eq!(out.code, Some(0));
    let generated = test.read_file("types/i18n.ts")?;
    assert!(generated.ends_with(
        "export type MessagesLoader = (locale: Locale) => Promise<Messages>;\n"
    ));
    assert!(!generated.contains("\"Hello\""));
    Ok(())
}

#[test]
fn test_gen_fails_closed() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", EN),
        ("de", r#"{"title": "Hallo", "welcome": "Willkommen, {user}!"}"#),
    ])?;

    let out = run(test.gen_command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("error: key \"nav\" is missing in de  missing-key"));
    assert!(out.stdout.contains("error: key \"nav.home\" is missing in de  missing-key"));
    assert!(out.stdout.contains("\u{2718} 3 problems"));
    assert!(!test.root().join("src/i18n/messages.ts").exists());
    Ok(())
}

#[test]
fn test_gen_writes_nothing_when_a_locale_file_is_invalid() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN), ("de", "{ \"title\": ")])?;

    let out = run(test.gen_command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains("could not be parsed"));
    assert!(!out.stdout.contains("Generated"));
    assert!(!test.root().join("src/i18n/messages.ts").exists());
    Ok(())
}

#[test]
fn test_gen_rejects_unknown_default_locale() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN)])?;

    let mut cmd = test.gen_command();
    cmd.args(["--default-locale", "ja"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("Default locale 'ja'"));
    Ok(())
}
