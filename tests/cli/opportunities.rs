use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn list_defaults_to_arabic() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&["opportunities", "list"])?;
    assert_eq!(code, 0);
    // Arabic table headers; the seeded data itself is English.
    assert!(stdout.contains("العنوان"));
    assert!(stdout.contains("Translation Services at Grand Mosque"));
    Ok(())
}

#[test]
fn list_in_english_shows_all_six_on_one_page() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&[
        "opportunities",
        "list",
        "--lang",
        "en",
        "--page-size",
        "6",
    ])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Title"));
    assert!(stdout.contains("Lost and Found Services"));
    assert!(stdout.contains("Page 1 of 1 (6 items)"));
    Ok(())
}

#[test]
fn search_narrows_to_the_matching_record() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&[
        "opportunities",
        "list",
        "--lang",
        "en",
        "--search",
        "Translation",
    ])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Translation Services at Grand Mosque"));
    assert!(!stdout.contains("Visitor Guidance"));
    assert!(stdout.contains("Page 1 of 1 (1 items)"));
    Ok(())
}

#[test]
fn equality_filters_combine() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&[
        "opportunities",
        "list",
        "--lang",
        "en",
        "--location",
        "Makkah",
        "--category",
        "Services",
    ])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Water Distribution Team"));
    assert!(!stdout.contains("Lost and Found Services"));
    assert!(!stdout.contains("Translation Services"));
    Ok(())
}

#[test]
fn date_range_filter_is_inclusive() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&[
        "opportunities",
        "list",
        "--lang",
        "en",
        "--date-from",
        "2025-04-25",
        "--date-to",
        "2025-05-05",
    ])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Elderly Assistance Program"));
    assert!(stdout.contains("Water Distribution Team"));
    assert!(stdout.contains("Lost and Found Services"));
    assert!(!stdout.contains("Educational Tours Guide"));
    Ok(())
}

#[test]
fn unparsable_date_bound_filters_nothing() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&[
        "opportunities",
        "list",
        "--lang",
        "en",
        "--date-from",
        "next-week",
        "--page-size",
        "6",
    ])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Page 1 of 1 (6 items)"));
    Ok(())
}

#[test]
fn second_page_of_two() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&[
        "opportunities",
        "list",
        "--lang",
        "en",
        "--sort-by",
        "date",
        "--page",
        "2",
        "--page-size",
        "4",
    ])?;
    assert_eq!(code, 0);
    // Dates sort ascending; the last two land on page 2.
    assert!(stdout.contains("Visitor Guidance in Prophet's Mosque"));
    assert!(stdout.contains("Educational Tours Guide"));
    assert!(!stdout.contains("Translation Services"));
    assert!(stdout.contains("Page 2 of 2 (6 items)"));
    Ok(())
}

#[test]
fn json_format_exposes_the_query_result() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&[
        "opportunities",
        "list",
        "--lang",
        "en",
        "--format",
        "json",
        "--page-size",
        "4",
    ])?;
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["totalPages"], 2);
    assert_eq!(json["totalItems"], 6);
    assert_eq!(json["items"].as_array().unwrap().len(), 4);
    assert_eq!(json["items"][0]["title"], "Translation Services at Grand Mosque");
    Ok(())
}

#[test]
fn show_renders_the_full_detail() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&["opportunities", "show", "1", "--lang", "en"])?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Translation Services at Grand Mosque"));
    assert!(stdout.contains("Requirements"));
    assert!(stdout.contains("Fluency in Arabic and at least one other language"));
    assert!(stdout.contains("Application deadline"));
    assert!(stdout.contains("2025-04-30"));
    Ok(())
}

#[test]
fn show_unknown_id_fails_with_a_message() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = test.run_stdout(&["opportunities", "show", "999", "--lang", "en"])?;
    assert_eq!(code, 1);
    assert!(stdout.contains("No opportunity with id 999."));
    Ok(())
}
