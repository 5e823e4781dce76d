use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn init_writes_the_default_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&["init"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains(".tatawurc.json"));
    assert!(test.root().join(".tatawurc.json").exists());

    // The generated file parses back with defaults.
    let content = std::fs::read_to_string(test.root().join(".tatawurc.json"))?;
    let json: serde_json::Value = serde_json::from_str(&content)?;
    assert_eq!(json["defaultLanguage"], "ar");
    assert_eq!(json["pageSize"], 10);
    Ok(())
}

#[test]
fn init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;

    test.run_stdout(&["init"])?;
    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("already exists"));
    Ok(())
}

#[test]
fn configured_default_language_applies_without_a_stored_preference() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tatawurc.json", r#"{ "defaultLanguage": "en" }"#)?;

    let (code, stdout) = test.run_stdout(&["lang"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Language: en (ltr)"));
    Ok(())
}

#[test]
fn invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tatawurc.json", r#"{ "pageSize": 0 }"#)?;

    let output = test.run(&["lang"])?;
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}
