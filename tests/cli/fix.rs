use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

fn setup_config(test: &CliTest) -> Result<()> {
    test.write_file(
        ".tdlintrc.json",
        r#"{
            "includes": ["src"],
            "allowedTextDomains": ["my-plugin"]
        }"#,
    )
}

#[test]
fn test_fix_dry_run_leaves_files_untouched() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    let source = "const label = __('Hello');\n";
    test.write_file("src/plugin.js", source)?;

    let (code, stdout, _) = run(&mut test.fix_command())?;
    assert_eq!(code, 1, "{}", stdout);
    assert!(stdout.contains("Would apply 1 fix(es)"), "{}", stdout);
    assert!(stdout.contains("--apply"), "{}", stdout);
    assert_eq!(test.read_file("src/plugin.js")?, source);
    Ok(())
}

#[test]
fn test_fix_apply_inserts_missing_domain() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("src/plugin.js", "const label = __('Hello');\n")?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let (code, stdout, _) = run(&mut cmd)?;
    assert_eq!(code, 0, "{}", stdout);
    assert!(stdout.contains("Applied 1 fix(es)"), "{}", stdout);
    assert_eq!(
        test.read_file("src/plugin.js")?,
        "const label = __('Hello', 'my-plugin');\n"
    );
    Ok(())
}

#[test]
fn test_fix_apply_replaces_invalid_domain() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file(
        "src/plugin.js",
        "const label = _x('Hello', 'greeting', 'other-plugin');\n",
    )?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let (code, stdout, _) = run(&mut cmd)?;
    assert_eq!(code, 0, "{}", stdout);
    assert_eq!(
        test.read_file("src/plugin.js")?,
        "const label = _x('Hello', 'greeting', 'my-plugin');\n"
    );
    Ok(())
}

#[test]
fn test_fix_apply_removes_unnecessary_default() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".tdlintrc.json",
        r#"{
            "includes": ["src"],
            "allowDefault": true,
            "allowedTextDomains": ["my-plugin"]
        }"#,
    )?;
    test.write_file("src/plugin.js", "const label = __('Hello', 'default');\n")?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let (code, stdout, _) = run(&mut cmd)?;
    assert_eq!(code, 0, "{}", stdout);
    assert_eq!(
        test.read_file("src/plugin.js")?,
        "const label = __('Hello');\n"
    );
    Ok(())
}

#[test]
fn test_fix_skips_issues_without_safe_fix() -> Result<()> {
    let test = CliTest::new()?;
    // Two allowed domains: insertion and replacement are ambiguous.
    test.write_file(
        ".tdlintrc.json",
        r#"{
            "includes": ["src"],
            "allowedTextDomains": ["plugin-a", "plugin-b"]
        }"#,
    )?;
    let source = "const label = __('Hello');\n";
    test.write_file("src/plugin.js", source)?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let (code, stdout, _) = run(&mut cmd)?;
    assert_eq!(code, 0, "{}", stdout);
    assert!(stdout.contains("skipped: 1 issue(s)"), "{}", stdout);
    assert_eq!(test.read_file("src/plugin.js")?, source);
    Ok(())
}

#[test]
fn test_fix_apply_rewrites_multiple_calls() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file(
        "src/plugin.js",
        "__('a');\n__('b', 'wrong');\n__('c', 'my-plugin');\n",
    )?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let (code, stdout, _) = run(&mut cmd)?;
    assert_eq!(code, 0, "{}", stdout);
    assert_eq!(
        test.read_file("src/plugin.js")?,
        "__('a', 'my-plugin');\n__('b', 'my-plugin');\n__('c', 'my-plugin');\n"
    );

    // A second run finds nothing left to fix.
    let (code, stdout, _) = run(&mut test.fix_command())?;
    assert_eq!(code, 0, "{}", stdout);
    assert!(stdout.contains("No text domain issues"), "{}", stdout);
    Ok(())
}
