use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, stdout, _) = run(&mut cmd)?;
    assert_eq!(code, 0, "{}", stdout);

    let content = test.read_file(".tdlintrc.json")?;
    assert!(content.contains("allowedTextDomains"), "{}", content);
    assert!(content.contains("allowDefault"), "{}", content);
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".tdlintrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, _, stderr) = run(&mut cmd)?;
    assert_eq!(code, 2, "{}", stderr);
    assert!(stderr.contains("already exists"), "{}", stderr);

    assert_eq!(test.read_file(".tdlintrc.json")?, "{}");
    Ok(())
}
