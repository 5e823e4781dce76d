use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn summary_requires_an_admin_session() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&["summary", "--lang", "en"])?;
    assert_eq!(code, 1);
    assert!(stdout.contains("Not signed in."));
    Ok(())
}

#[test]
fn dashboard_counters_and_recent_feed() -> Result<()> {
    let test = CliTest::new()?;
    test.run_stdout(&["login", "--role", "admin"])?;

    let (code, stdout) = test.run_stdout(&["summary", "--lang", "en"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Admin Dashboard"));
    assert!(stdout.contains("Pending volunteers"));
    assert!(stdout.contains("243"));
    assert!(stdout.contains("5238"));
    assert!(stdout.contains("Recent applications"));
    assert!(stdout.contains("Ahmed Mohammed applied to Translation Services at Grand Mosque"));
    Ok(())
}

#[test]
fn arabic_dashboard() -> Result<()> {
    let test = CliTest::new()?;
    test.run_stdout(&["login", "--role", "admin"])?;

    let (code, stdout) = test.run_stdout(&["summary"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("لوحة الإشراف"));
    assert!(stdout.contains("إجمالي ساعات التطوع"));
    Ok(())
}

#[test]
fn json_summary_is_machine_readable() -> Result<()> {
    let test = CliTest::new()?;
    test.run_stdout(&["login", "--role", "admin"])?;

    let (code, stdout) = test.run_stdout(&["summary", "--format", "json"])?;
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["activeVolunteers"], 243);
    assert_eq!(json["recentApplications"].as_array().unwrap().len(), 5);
    assert_eq!(json["recentApplications"][0]["status"], "pending");
    Ok(())
}
