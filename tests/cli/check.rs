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
fn test_check_clean_project() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file(
        "src/plugin.js",
        "export const label = __('Hello', 'my-plugin');\n",
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;
    assert_eq!(code, 0, "{}", stdout);
    assert!(stdout.contains("No text domain issues"), "{}", stdout);
    Ok(())
}

#[test]
fn test_check_missing_domain() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("src/plugin.js", "const label = __('Hello');\n")?;

    let (code, stdout, _) = run(&mut test.check_command())?;
    assert_eq!(code, 1, "{}", stdout);
    assert!(stdout.contains("Missing text domain"), "{}", stdout);
    assert!(stdout.contains("src/plugin.js:1:15"), "{}", stdout);
    Ok(())
}

#[test]
fn test_check_invalid_domain_reports_value() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file(
        "src/plugin.js",
        "const label = __('Hello', 'other-plugin');\n",
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;
    assert_eq!(code, 1, "{}", stdout);
    assert!(
        stdout.contains("Invalid text domain 'other-plugin'"),
        "{}",
        stdout
    );
    Ok(())
}

#[test]
fn test_check_non_literal_domain() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("src/plugin.js", "const label = __('Hello', domainVar);\n")?;

    let (code, stdout, _) = run(&mut test.check_command())?;
    assert_eq!(code, 1, "{}", stdout);
    assert!(
        stdout.contains("Text domain is not a string literal"),
        "{}",
        stdout
    );
    Ok(())
}

#[test]
fn test_check_allow_default_accepts_omission() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".tdlintrc.json",
        r#"{
            "includes": ["src"],
            "allowDefault": true,
            "allowedTextDomains": ["my-plugin"]
        }"#,
    )?;
    test.write_file("src/plugin.js", "const label = __('Hello');\n")?;

    let (code, stdout, _) = run(&mut test.check_command())?;
    assert_eq!(code, 0, "{}", stdout);
    Ok(())
}

#[test]
fn test_check_unnecessary_default_is_warning() -> Result<()> {
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

    let (code, stdout, _) = run(&mut test.check_command())?;
    // Warnings are reported but do not fail the run.
    assert_eq!(code, 0, "{}", stdout);
    assert!(
        stdout.contains("Unnecessary default text domain"),
        "{}",
        stdout
    );
    assert!(stdout.contains("warning"), "{}", stdout);
    Ok(())
}

#[test]
fn test_check_parse_error_exits_with_error() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("src/broken.js", "const = ;\n")?;

    let (code, stdout, _) = run(&mut test.check_command())?;
    assert_eq!(code, 2, "{}", stdout);
    assert!(stdout.contains("Failed to parse"), "{}", stdout);
    Ok(())
}

#[test]
fn test_check_duplicate_allowed_domains_rejected() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".tdlintrc.json",
        r#"{ "allowedTextDomains": ["a", "a"] }"#,
    )?;

    let (code, _, stderr) = run(&mut test.check_command())?;
    assert_eq!(code, 2, "{}", stderr);
    assert!(stderr.contains("allowedTextDomains"), "{}", stderr);
    Ok(())
}

#[test]
fn test_check_cli_overrides_config() -> Result<()> {
    let test = CliTest::with_file("src/plugin.js", "const l = __('Hi', 'cli-domain');\n")?;
    test.write_file(".tdlintrc.json", r#"{ "allowedTextDomains": ["my-plugin"] }"#)?;

    let mut cmd = test.check_command();
    cmd.args(["--allowed-text-domain", "cli-domain"]);
    let (code, stdout, _) = run(&mut cmd)?;
    assert_eq!(code, 0, "{}", stdout);
    Ok(())
}

#[test]
fn test_check_reports_all_forms() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file(
        "src/plugin.js",
        concat!(
            "__('a');\n",
            "_x('b', 'ctx');\n",
            "_n('one', 'many', n);\n",
            "_nx('one', 'many', n, 'ctx');\n",
        ),
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;
    assert_eq!(code, 1, "{}", stdout);
    assert_eq!(stdout.matches("Missing text domain").count(), 4, "{}", stdout);
    Ok(())
}

#[test]
fn test_check_skips_test_files_by_default() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("src/plugin.test.js", "__('Hello');\n")?;
    test.write_file(
        "src/plugin.js",
        "export const l = __('Hello', 'my-plugin');\n",
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;
    assert_eq!(code, 0, "{}", stdout);
    Ok(())
}
