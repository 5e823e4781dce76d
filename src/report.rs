//! Localized rendering for CLI output.
//!
//! This module is separate from the domain logic so the crate can be
//! used as a library without printing side effects. Tables are aligned
//! by display width, not char count; Arabic cells would drift otherwise.

use std::fmt::Write as _;

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::{
    admin::Denial,
    i18n::Translator,
    model::{ActionResponse, AdminSummary, ManagedUser, Opportunity, OpportunityDetail, UserAction},
    query::QueryResult,
};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Render one page of opportunities as an aligned table.
pub fn opportunity_table(t: &Translator, result: &QueryResult<Opportunity>) -> String {
    if result.items.is_empty() {
        return format!("{}\n", t.resolve("opportunities.empty"));
    }
    let headers = vec![
        t.resolve("opportunities.table.id"),
        t.resolve("opportunities.table.title"),
        t.resolve("opportunities.table.location"),
        t.resolve("opportunities.table.date"),
        t.resolve("opportunities.table.spots"),
        t.resolve("opportunities.table.category"),
        t.resolve("opportunities.table.featured"),
    ];
    let rows: Vec<Vec<String>> = result
        .items
        .iter()
        .map(|o| {
            vec![
                o.id.clone(),
                o.title.clone(),
                o.location.clone(),
                o.date.clone(),
                o.spots.to_string(),
                o.category.clone(),
                if o.featured {
                    t.resolve("common.yes")
                } else {
                    String::new()
                },
            ]
        })
        .collect();
    render_table(&headers, &rows)
}

/// Render one page of managed users as an aligned table.
pub fn user_table(t: &Translator, result: &QueryResult<ManagedUser>) -> String {
    if result.items.is_empty() {
        return format!("{}\n", t.resolve("users.empty"));
    }
    let headers = vec![
        t.resolve("users.table.id"),
        t.resolve("users.table.name"),
        t.resolve("users.table.email"),
        t.resolve("users.table.status"),
        t.resolve("users.table.role"),
        t.resolve("users.table.joined"),
    ];
    let rows: Vec<Vec<String>> = result
        .items
        .iter()
        .map(|u| {
            vec![
                u.id.clone(),
                u.name.clone(),
                u.email.clone(),
                t.resolve(&format!("users.status.{}", u.status)),
                t.resolve(&format!("users.role.{}", u.role)),
                u.joined_at.clone(),
            ]
        })
        .collect();
    render_table(&headers, &rows)
}

/// The `Page X of Y` footer printed under tables.
pub fn page_footer<T>(t: &Translator, page: u32, result: &QueryResult<T>) -> String {
    t.resolve_with(
        "pagination.pageOf",
        &[
            ("page", &page),
            ("total", &result.total_pages),
            ("items", &result.total_items),
        ],
    )
}

/// Full detail view for one opportunity.
pub fn opportunity_detail(t: &Translator, detail: &OpportunityDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", detail.listing.title.bold());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", detail.long_description.trim());
    let _ = writeln!(out);

    let status = t.resolve(&format!("opportunities.status.{}", detail.status));
    let fields: Vec<(String, String)> = vec![
        (
            t.resolve("opportunities.table.location"),
            detail.listing.location.clone(),
        ),
        (
            t.resolve("opportunities.table.date"),
            detail.listing.date.clone(),
        ),
        (
            t.resolve("opportunities.table.category"),
            detail.listing.category.clone(),
        ),
        (
            t.resolve("opportunities.detail.spots"),
            detail.listing.spots.to_string(),
        ),
        (t.resolve("opportunities.detail.status"), status),
        (
            t.resolve("opportunities.detail.deadline"),
            detail.application_deadline.clone(),
        ),
        (
            t.resolve("opportunities.detail.timeCommitment"),
            detail.time_commitment.clone(),
        ),
        (
            t.resolve("opportunities.detail.contact"),
            format!("{} <{}>", detail.contact_person, detail.contact_email),
        ),
        (
            t.resolve("opportunities.detail.address"),
            detail.address.clone(),
        ),
    ];
    write_fields(&mut out, &fields);

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", t.resolve("opportunities.detail.requirements").bold());
    for requirement in &detail.requirements {
        let _ = writeln!(out, "  - {}", requirement);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", t.resolve("opportunities.detail.skills").bold());
    for skill in &detail.skills {
        let _ = writeln!(out, "  - {}", skill);
    }
    out
}

/// Full detail view for one managed user.
pub fn user_detail(t: &Translator, user: &ManagedUser) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", user.name.bold());
    let _ = writeln!(out);

    let dash = t.resolve("common.notAvailable");
    let yes = t.resolve("common.yes");
    let no = t.resolve("common.no");
    let mut fields: Vec<(String, String)> = vec![
        (t.resolve("users.table.id"), user.id.clone()),
        (t.resolve("users.table.email"), user.email.clone()),
        (
            t.resolve("users.detail.phone"),
            user.phone.clone().unwrap_or_else(|| dash.clone()),
        ),
        (
            t.resolve("users.table.status"),
            t.resolve(&format!("users.status.{}", user.status)),
        ),
        (
            t.resolve("users.table.role"),
            t.resolve(&format!("users.role.{}", user.role)),
        ),
        (t.resolve("users.table.joined"), user.joined_at.clone()),
        (
            t.resolve("users.detail.lastActive"),
            user.last_active.clone().unwrap_or_else(|| dash.clone()),
        ),
        (
            t.resolve("users.detail.verified"),
            if user.national_id_verified { yes } else { no },
        ),
    ];
    if let Some(completed) = user.completed_opportunities {
        fields.push((t.resolve("users.detail.completed"), completed.to_string()));
    }
    if let Some(hours) = user.total_hours {
        fields.push((t.resolve("users.detail.hours"), hours.to_string()));
    }
    if let Some(documents) = &user.documents {
        if let Some(national_id) = &documents.national_id {
            fields.push((t.resolve("users.detail.nationalId"), national_id.clone()));
        }
        if let Some(selfie) = &documents.selfie {
            fields.push((t.resolve("users.detail.selfie"), selfie.clone()));
        }
    }
    if let Some(notes) = &user.notes {
        fields.push((t.resolve("users.detail.notes"), notes.clone()));
    }
    write_fields(&mut out, &fields);
    out
}

/// Dashboard counters plus the recent application feed.
pub fn summary_view(t: &Translator, summary: &AdminSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", t.resolve("summary.title").bold());
    let _ = writeln!(out);

    let fields: Vec<(String, String)> = vec![
        (
            t.resolve("summary.pendingVolunteers"),
            summary.pending_volunteers.to_string(),
        ),
        (
            t.resolve("summary.activeVolunteers"),
            summary.active_volunteers.to_string(),
        ),
        (
            t.resolve("summary.pendingOpportunities"),
            summary.pending_opportunities.to_string(),
        ),
        (
            t.resolve("summary.activeOpportunities"),
            summary.active_opportunities.to_string(),
        ),
        (
            t.resolve("summary.completedOpportunities"),
            summary.completed_opportunities.to_string(),
        ),
        (
            t.resolve("summary.totalHours"),
            summary.total_volunteer_hours.to_string(),
        ),
    ];
    write_fields(&mut out, &fields);

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", t.resolve("summary.recent").bold());
    for application in &summary.recent_applications {
        let _ = writeln!(
            out,
            "  - {}  ({})",
            t.resolve_with(
                "summary.appliedTo",
                &[
                    ("name", &application.volunteer_name),
                    ("title", &application.opportunity_title),
                ],
            ),
            application.applied_at
        );
    }
    out
}

/// One-line outcome of a moderation action.
pub fn action_line(t: &Translator, action: UserAction, response: &ActionResponse) -> String {
    if response.success {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            t.resolve_with(
                "users.action.applied",
                &[("action", &action), ("message", &response.message)],
            )
        )
    } else {
        format!(
            "{} {}",
            FAILURE_MARK.red(),
            t.resolve_with("users.action.failed", &[("message", &response.message)])
        )
    }
}

/// Localized explanation for a refused back-office call.
pub fn denial_line(t: &Translator, denial: Denial) -> String {
    let key = match denial {
        Denial::SignedOut => "auth.notSignedIn",
        Denial::NotAdmin => "auth.adminRequired",
        Denial::SuperAdminRequired => "auth.superAdminRequired",
    };
    format!("{} {}", FAILURE_MARK.red(), t.resolve(key))
}

// ============================================================
// Internal Functions
// ============================================================

/// Append `label: value` lines with display-width-aligned labels.
fn write_fields(out: &mut String, fields: &[(String, String)]) {
    let label_width = fields
        .iter()
        .map(|(label, _)| UnicodeWidthStr::width(label.as_str()))
        .max()
        .unwrap_or(0);
    for (label, value) in fields {
        let _ = writeln!(out, "{}  {}", pad(label, label_width), value);
    }
}

fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", render_row(headers, &widths));
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", render_row(&separator, &widths));
    for row in rows {
        let _ = writeln!(out, "{}", render_row(row, &widths));
    }
    out
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Pad to a display width, not a char count.
fn pad(text: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(current)))
}
