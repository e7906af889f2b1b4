use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "\u{2713} Created .glotgenrc.json\n");

    let config = test.read_file(".glotgenrc.json")?;
    assert!(config.contains("\"messagesRoot\": \"./messages\""));
    assert!(config.contains("\"output\": \"provider\""));
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glotgenrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains(".glotgenrc.json already exists"));
    assert_eq!(test.read_file(".glotgenrc.json")?, "{}");
    Ok(())
}
