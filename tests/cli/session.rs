use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn whoami_before_login_fails() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&["whoami", "--lang", "en"])?;
    assert_eq!(code, 1);
    assert!(stdout.contains("Not signed in."));
    Ok(())
}

#[test]
fn login_persists_a_session_across_invocations() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&["login", "--lang", "en"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Signed in as Volunteer User (User)"));

    let (code, stdout) = test.run_stdout(&["whoami", "--lang", "en"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Signed in as Volunteer User (User)"));
    Ok(())
}

#[test]
fn admin_login_uses_the_admin_fixture_account() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&[
        "login",
        "--role",
        "admin",
        "--lang",
        "en",
    ])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Signed in as Admin User (Admin)"));
    Ok(())
}

#[test]
fn custom_name_and_email_are_respected() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&[
        "login",
        "--role",
        "super-admin",
        "--name",
        "Abdullah Al-Sheikh",
        "--email",
        "abdullah@haramainvolunteers.org",
        "--lang",
        "en",
    ])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Signed in as Abdullah Al-Sheikh (Super admin)"));
    Ok(())
}

#[test]
fn logout_clears_the_stored_session() -> Result<()> {
    let test = CliTest::new()?;

    test.run_stdout(&["login", "--role", "admin"])?;
    let (code, stdout) = test.run_stdout(&["logout", "--lang", "en"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Signed out."));

    let (code, _) = test.run_stdout(&["whoami", "--lang", "en"])?;
    assert_eq!(code, 1);
    Ok(())
}

#[test]
fn session_messages_localize_to_arabic() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&["login", "--role", "admin"])?;
    assert_eq!(code, 0);
    // Default language is Arabic; the role name localizes too.
    assert!(stdout.contains("تم تسجيل الدخول باسم Admin User (مشرف)"));

    let (code, stdout) = test.run_stdout(&["logout"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("تم تسجيل الخروج."));
    Ok(())
}
