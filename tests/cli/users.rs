use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

fn login_as(test: &CliTest, role: &str) -> Result<()> {
    let (code, _) = test.run_stdout(&["login", "--role", role])?;
    assert_eq!(code, 0);
    Ok(())
}

#[test]
fn listing_requires_a_session() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&["users", "list", "--lang", "en"])?;
    assert_eq!(code, 1);
    assert!(stdout.contains("Not signed in."));
    Ok(())
}

#[test]
fn listing_requires_the_admin_role() -> Result<()> {
    let test = CliTest::new()?;
    login_as(&test, "user")?;

    let (code, stdout) = test.run_stdout(&["users", "list", "--lang", "en"])?;
    assert_eq!(code, 1);
    assert!(stdout.contains("This action requires an admin session."));
    Ok(())
}

#[test]
fn admin_lists_users_with_status_filter() -> Result<()> {
    let test = CliTest::new()?;
    login_as(&test, "admin")?;

    let (code, stdout) = test.run_stdout(&[
        "users",
        "list",
        "--lang",
        "en",
        "--status",
        "pending",
    ])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Ahmed Mohammed"));
    assert!(stdout.contains("Fatima Ali"));
    assert!(stdout.contains("Omar Abdullah"));
    assert!(!stdout.contains("msaleh@example.com"));
    assert!(stdout.contains("Page 1 of 1 (3 items)"));
    Ok(())
}

#[test]
fn role_filter_uses_exact_match() -> Result<()> {
    let test = CliTest::new()?;
    login_as(&test, "admin")?;

    let (code, stdout) = test.run_stdout(&[
        "users",
        "list",
        "--lang",
        "en",
        "--role",
        "super-admin",
    ])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Abdullah Al-Sheikh"));
    // Plain admins are a different role, not a substring match.
    assert!(!stdout.contains("Saud Al-Qahtani"));
    Ok(())
}

#[test]
fn search_matches_name_email_and_phone() -> Result<()> {
    let test = CliTest::new()?;
    login_as(&test, "admin")?;

    let (code, stdout) = test.run_stdout(&[
        "users",
        "list",
        "--lang",
        "en",
        "--search",
        "aisha@example.com",
    ])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Aisha Rahman"));
    assert!(stdout.contains("Page 1 of 1 (1 items)"));
    Ok(())
}

#[test]
fn show_displays_a_localized_record() -> Result<()> {
    let test = CliTest::new()?;
    login_as(&test, "admin")?;

    let (code, stdout) = test.run_stdout(&["users", "show", "p1", "--lang", "en"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Ahmed Mohammed"));
    assert!(stdout.contains("ahmed@example.com"));
    assert!(stdout.contains("Pending"));

    // The same record renders with Arabic labels too.
    let (code, stdout) = test.run_stdout(&["users", "show", "p1", "--lang", "ar"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("قيد المراجعة"));
    Ok(())
}

#[test]
fn admit_activates_a_pending_volunteer() -> Result<()> {
    let test = CliTest::new()?;
    login_as(&test, "admin")?;

    let (code, stdout) = test.run_stdout(&["users", "admit", "p1", "--lang", "en"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("User admitted successfully"));
    assert!(stdout.contains("Active"));
    Ok(())
}

#[test]
fn moderation_requires_a_session() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&["users", "block", "a1", "--lang", "en"])?;
    assert_eq!(code, 1);
    assert!(stdout.contains("Not signed in."));
    Ok(())
}

#[test]
fn promote_needs_a_super_admin_session() -> Result<()> {
    let test = CliTest::new()?;
    login_as(&test, "admin")?;

    let (code, stdout) = test.run_stdout(&["users", "promote", "a1", "--lang", "en"])?;
    assert_eq!(code, 1);
    assert!(stdout.contains("Promoting a user requires a super admin session."));

    login_as(&test, "super-admin")?;
    let (code, stdout) = test.run_stdout(&["users", "promote", "a1", "--lang", "en"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("User promoted successfully"));
    assert!(stdout.contains("Admin"));
    Ok(())
}

#[test]
fn unknown_user_action_fails_cleanly() -> Result<()> {
    let test = CliTest::new()?;
    login_as(&test, "admin")?;

    let (code, stdout) = test.run_stdout(&["users", "delete", "ghost", "--lang", "en"])?;
    assert_eq!(code, 1);
    assert!(stdout.contains("Action failed: User not found"));
    Ok(())
}
