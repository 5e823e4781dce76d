use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn default_language_is_arabic_rtl() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&["lang"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("اللغة: ar (rtl)"));
    Ok(())
}

#[test]
fn switching_persists_and_flips_direction() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&["lang", "set", "en"])?;
    assert_eq!(code, 0);
    // The confirmation already speaks the new language.
    assert!(stdout.contains("Language switched to en. Direction is now ltr."));

    // A separate invocation sees the stored preference.
    let (code, stdout) = test.run_stdout(&["lang"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Language: en (ltr)"));

    // Subsequent resolutions use the new dictionary.
    let (code, stdout) = test.run_stdout(&["opportunities", "list"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Title"));
    assert!(!stdout.contains("العنوان"));

    // And back.
    let (code, stdout) = test.run_stdout(&["lang", "set", "ar"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("تم تغيير اللغة إلى ar. الاتجاه الآن rtl."));
    Ok(())
}

#[test]
fn lang_flag_overrides_without_persisting() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&["lang", "--lang", "en"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Language: ar (rtl)"));

    // The override spoke English but stored nothing.
    let (code, stdout) = test.run_stdout(&["lang"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("اللغة: ar (rtl)"));
    Ok(())
}

#[test]
fn locale_files_on_disk_win_over_builtins() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "locales/en.json",
        r#"{ "lang": { "current": "Custom language line: {language}" } }"#,
    )?;
    test.write_file("locales/ar.json", r#"{}"#)?;

    let (code, stdout) = test.run_stdout(&["lang", "--lang", "en"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Custom language line: en"));
    Ok(())
}

#[test]
fn missing_key_degrades_to_the_raw_key() -> Result<()> {
    let test = CliTest::new()?;
    // Neither locale defines the lang section: the resolver hands the
    // keys back unchanged instead of failing.
    test.write_file("locales/en.json", r#"{}"#)?;
    test.write_file("locales/ar.json", r#"{}"#)?;

    let (code, stdout) = test.run_stdout(&["lang"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("lang.current"));
    Ok(())
}
