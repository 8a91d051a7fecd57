//! Brief derivation: the pure function from a raw `Brief` record and a
//! reference date to the view model the dashboard renders.
//!
//! No clock access and no I/O here. `today` is an explicit parameter so the
//! whole derivation is deterministic and testable with a fixed date.

use chrono::NaiveDate;

use crate::types::{Brief, BriefView, ChurnRisk, ContentItem, Grant, Membership, Sponsor, Task};
use crate::util::{normalize_status, parse_day};

/// Cap on the combined overdue + due-today task list.
const TASK_FOCUS_LIMIT: usize = 10;
/// Cap on the churn risk list.
const CHURN_LIMIT: usize = 10;
/// Grants surface when the deadline is within this many days (inclusive).
const GRANT_WINDOW_DAYS: i64 = 21;
/// Sponsor deals below this contract value stay off the watch list.
const SPONSOR_WATCH_MIN_VALUE: f64 = 1000.0;

/// Derive the full view model for one brief.
///
/// Pure and stateless: the same `(brief, today)` pair always produces the
/// same view, so concurrent render requests may share one `Brief` freely.
pub fn derive(brief: &Brief, today: NaiveDate) -> BriefView {
    let today_iso = today.format("%Y-%m-%d").to_string();

    BriefView {
        task_focus: task_focus(&brief.tasks, &today_iso),
        content_today: unpublished_content_today(&brief.content, &today_iso),
        sponsor_watch: sponsor_watch(&brief.sponsors),
        grants_due_soon: grants_due_soon(&brief.grants, today),
        churn_risks: churn_risks(&brief.memberships),
        kpis: brief.kpis.clone(),
        donations_today: brief.donations_today,
        mrr: brief.mrr,
    }
}

/// Overdue tasks first, then tasks due today, capped at ten.
///
/// "Done" tasks and tasks without a due date never surface. Dates compare
/// lexicographically as ISO date strings, which orders correctly for
/// well-formed values and degrades harmlessly for junk.
fn task_focus(tasks: &[Task], today_iso: &str) -> Vec<Task> {
    let mut overdue: Vec<Task> = Vec::new();
    let mut due_today: Vec<Task> = Vec::new();

    for task in tasks {
        if normalize_status(task.status.as_deref()) == "done" {
            continue;
        }
        let due = match task.due_date.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => d,
            _ => continue,
        };
        if due < today_iso {
            overdue.push(task.clone());
        } else if due == today_iso {
            due_today.push(task.clone());
        }
    }

    overdue.extend(due_today);
    overdue.truncate(TASK_FOCUS_LIMIT);
    overdue
}

/// Content scheduled for today that has not been published yet. Input
/// order preserved, no cap.
fn unpublished_content_today(content: &[ContentItem], today_iso: &str) -> Vec<ContentItem> {
    content
        .iter()
        .filter(|c| {
            c.publish_date.as_deref().map(str::trim) == Some(today_iso)
                && normalize_status(c.status.as_deref()) != "published"
        })
        .cloned()
        .collect()
}

/// Open sponsor deals at or above the watch floor, highest value first.
/// Stable sort: ties keep input order.
fn sponsor_watch(sponsors: &[Sponsor]) -> Vec<Sponsor> {
    let mut watch: Vec<Sponsor> = sponsors
        .iter()
        .filter(|s| {
            normalize_status(s.status.as_deref()) != "won"
                && s.contract_value >= SPONSOR_WATCH_MIN_VALUE
        })
        .cloned()
        .collect();

    watch.sort_by(|a, b| {
        b.contract_value
            .partial_cmp(&a.contract_value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    watch
}

/// Grants whose deadline falls within the next `GRANT_WINDOW_DAYS` whole
/// days, today inclusive. Date-only arithmetic; time-of-day is stripped.
fn grants_due_soon(grants: &[Grant], today: NaiveDate) -> Vec<Grant> {
    grants
        .iter()
        .filter(|g| {
            g.deadline
                .as_deref()
                .and_then(parse_day)
                .map(|deadline| {
                    let delta = (deadline - today).num_days();
                    (0..=GRANT_WINDOW_DAYS).contains(&delta)
                })
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Memberships flagged "at-risk" or with failed payments, worst first,
/// capped at ten, each with an outreach suggestion.
fn churn_risks(memberships: &[Membership]) -> Vec<ChurnRisk> {
    let mut flagged: Vec<&Membership> = memberships
        .iter()
        .filter(|m| {
            normalize_status(m.status.as_deref()) == "at-risk" || m.failed_payment_count > 0
        })
        .collect();

    flagged.sort_by(|a, b| b.failed_payment_count.cmp(&a.failed_payment_count));
    flagged.truncate(CHURN_LIMIT);

    flagged
        .into_iter()
        .map(|m| ChurnRisk {
            member: m.member.clone(),
            status: m.status.clone(),
            fails: m.failed_payment_count,
            fee: m.monthly_fee,
            suggestion: churn_suggestion(m.failed_payment_count).to_string(),
        })
        .collect()
}

fn churn_suggestion(fails: u32) -> &'static str {
    match fails {
        3.. => "Call + 1-month grace",
        2 => "Personal email + retry link",
        _ => "Friendly reminder to update card",
    }
}
