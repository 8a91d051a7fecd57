//! Plain-text presentation of the derived views.
//!
//! Pure string builders: the deriver owns the data rules, this module owns
//! card layout, labels, placeholders, and empty-state copy. Anything shown
//! here that looks like a rule (the top-3 sponsor names, for instance) is a
//! display prefix over an already-derived list, not a derivation.

use chrono::NaiveDate;

use crate::types::{BriefView, LandingPage};

const EMPTY_TASKS: &str = "Nothing due right now.";
const EMPTY_CONTENT: &str = "No scheduled content today.";
const EMPTY_GRANTS: &str = "No deadlines in the next 21 days.";
const EMPTY_CHURN: &str = "No risks flagged.";

/// Render the morning brief as terminal text.
pub fn render_brief(view: &BriefView, today: NaiveDate) -> String {
    let mut out = String::with_capacity(2048);

    out.push_str("B1 HQ — Morning Executive Brief\n");
    out.push_str(&format!("{}\n", today.format("%a %b %d %Y")));

    card(&mut out, "Overdue + Today's Tasks (Top 10)");
    if view.task_focus.is_empty() {
        line(&mut out, EMPTY_TASKS);
    } else {
        for task in &view.task_focus {
            line(
                &mut out,
                &format!(
                    "{} — {} • {} • {}",
                    task.title.as_deref().unwrap_or("Untitled"),
                    task.priority.as_deref().unwrap_or("medium"),
                    task.assignee.as_deref().unwrap_or("—"),
                    task.due_date.as_deref().unwrap_or("—"),
                ),
            );
        }
    }

    card(&mut out, "Content Scheduled Today (Unpublished)");
    if view.content_today.is_empty() {
        line(&mut out, EMPTY_CONTENT);
    } else {
        for item in &view.content_today {
            line(
                &mut out,
                &format!(
                    "{} → {} ({})",
                    item.title.as_deref().unwrap_or("Untitled"),
                    item.platform.as_deref().unwrap_or("—"),
                    item.status.as_deref().unwrap_or("draft"),
                ),
            );
        }
    }

    card(&mut out, "Donations (today)");
    line(&mut out, &money(view.donations_today));

    card(&mut out, "MRR");
    line(&mut out, &money(view.mrr));

    card(&mut out, "Top Sponsor Watch (≥ $1k)");
    line(&mut out, &view.sponsor_watch.len().to_string());
    let top_names: Vec<&str> = view
        .sponsor_watch
        .iter()
        .take(3)
        .filter_map(|s| s.name.as_deref())
        .collect();
    if top_names.is_empty() {
        line(&mut out, "—");
    } else {
        line(&mut out, &top_names.join(" • "));
    }

    card(&mut out, "Grants (≤ 21 days)");
    if view.grants_due_soon.is_empty() {
        line(&mut out, EMPTY_GRANTS);
    } else {
        for grant in &view.grants_due_soon {
            line(
                &mut out,
                &format!(
                    "{} — due {} • owner: {} • next: {}",
                    grant.name.as_deref().unwrap_or_default(),
                    grant.deadline.as_deref().unwrap_or("—"),
                    grant.owner.as_deref().unwrap_or("—"),
                    grant.next_action.as_deref().unwrap_or("—"),
                ),
            );
        }
    }

    card(&mut out, "KPI Pulse vs 7-day Avg");
    line(&mut out, &format!("Web: {}%", view.kpis.web_delta));
    line(&mut out, &format!("Social: {}%", view.kpis.social_delta));
    line(&mut out, &format!("Email: {}%", view.kpis.email_delta));
    line(&mut out, &format!("Leads: {}%", view.kpis.leads_delta));

    card(&mut out, "Membership Churn Risks (Top 10)");
    if view.churn_risks.is_empty() {
        line(&mut out, EMPTY_CHURN);
    } else {
        for risk in &view.churn_risks {
            line(
                &mut out,
                &format!(
                    "{} — {} • fails: {} • fee: {} — {}",
                    risk.member.as_deref().unwrap_or("Member"),
                    risk.status.as_deref().unwrap_or("—"),
                    risk.fails,
                    money(risk.fee),
                    risk.suggestion,
                ),
            );
        }
    }

    out.push_str("\nB1 HQ • branded dashboard • v0.4\n");
    out
}

/// Render the landing document as terminal text.
pub fn render_landing(page: &LandingPage) -> String {
    let mut out = String::with_capacity(1024);

    let brand = page.brand.as_ref();
    let brand_name = brand.and_then(|b| b.name.as_deref()).unwrap_or("Be One");
    let tagline = brand.and_then(|b| b.tagline.as_deref()).unwrap_or_default();

    // Hero headline falls back to "<brand> — <tagline>".
    let fallback = format!("{brand_name} — {tagline}");
    let headline = page.hero.headline.as_deref().unwrap_or(&fallback);
    out.push_str(&format!("{headline}\n"));
    if let Some(sub) = page.hero.sub.as_deref() {
        out.push_str(&format!("{sub}\n"));
    }
    if let (Some(text), Some(link)) = (
        page.hero.cta_text.as_deref(),
        page.hero.cta_link.as_deref(),
    ) {
        line(&mut out, &format!("{text}: {link}"));
    }
    if let (Some(text), Some(link)) = (
        page.hero.secondary_text.as_deref(),
        page.hero.secondary_link.as_deref(),
    ) {
        line(&mut out, &format!("{text}: {link}"));
    }

    if !page.value_props.is_empty() {
        out.push('\n');
        for prop in &page.value_props {
            line(
                &mut out,
                &format!(
                    "{} — {}",
                    prop.title.as_deref().unwrap_or_default(),
                    prop.desc.as_deref().unwrap_or_default(),
                ),
            );
        }
    }

    if !page.sponsors.is_empty() {
        card(&mut out, "Sponsors & Partners");
        for sponsor in &page.sponsors {
            line(
                &mut out,
                &format!(
                    "{} — {}",
                    sponsor.name.as_deref().unwrap_or_default(),
                    sponsor.tier.as_deref().unwrap_or("—"),
                ),
            );
        }
    }

    if !page.testimonials.is_empty() {
        card(&mut out, "What people say");
        for t in &page.testimonials {
            line(
                &mut out,
                &format!(
                    "\u{201c}{}\u{201d} — {}",
                    t.quote.as_deref().unwrap_or_default(),
                    t.name.as_deref().unwrap_or_default(),
                ),
            );
        }
    }

    if let Some(newsletter) = page.newsletter.as_ref().filter(|n| n.enabled) {
        card(&mut out, "Stay in the loop");
        line(
            &mut out,
            &format!(
                "{}: {}",
                newsletter.button.as_deref().unwrap_or("Subscribe"),
                newsletter.endpoint.as_deref().unwrap_or("—"),
            ),
        );
    }

    let footer = page
        .footer
        .as_ref()
        .and_then(|f| f.note.clone())
        .unwrap_or_else(|| format!("© {brand_name}"));
    out.push_str(&format!("\n{footer}\n"));

    out
}

fn card(out: &mut String, title: &str) {
    out.push_str(&format!("\n{title}\n"));
    out.push_str(&format!("{}\n", "-".repeat(title.chars().count())));
}

fn line(out: &mut String, text: &str) {
    out.push_str(&format!("  {text}\n"));
}

/// Format a money value: `$` plus a thousands-grouped amount, cents shown
/// only when fractional.
fn money(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if frac == 0 {
        format!("${sign}{grouped}")
    } else {
        format!("${sign}{grouped}.{frac:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::brief::derive;
    use crate::types::{Brief, Membership, Sponsor, Task};

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(0.0), "$0");
        assert_eq!(money(950.0), "$950");
        assert_eq!(money(1500.0), "$1,500");
        assert_eq!(money(1234567.0), "$1,234,567");
        assert_eq!(money(29.5), "$29.50");
        assert_eq!(money(-5000.0), "$-5,000");
    }

    #[test]
    fn empty_view_renders_every_empty_state() {
        let view = derive(&Brief::default(), day("2024-06-01"));
        let text = render_brief(&view, day("2024-06-01"));

        assert!(text.contains("B1 HQ — Morning Executive Brief"));
        assert!(text.contains(EMPTY_TASKS));
        assert!(text.contains(EMPTY_CONTENT));
        assert!(text.contains(EMPTY_GRANTS));
        assert!(text.contains(EMPTY_CHURN));
        assert!(text.contains("Web: 0%"));
        assert!(text.contains("$0"));
    }

    #[test]
    fn populated_view_renders_rows_with_placeholders() {
        let brief = Brief {
            tasks: vec![Task {
                title: None,
                status: Some("open".to_string()),
                priority: None,
                assignee: None,
                due_date: Some("2024-05-01".to_string()),
            }],
            sponsors: vec![
                Sponsor {
                    name: Some("Acme".to_string()),
                    status: Some("open".to_string()),
                    contract_value: 4000.0,
                },
                Sponsor {
                    name: Some("Globex".to_string()),
                    status: Some("open".to_string()),
                    contract_value: 2000.0,
                },
            ],
            memberships: vec![Membership {
                member: Some("X".to_string()),
                status: None,
                failed_payment_count: 2,
                monthly_fee: 29.0,
            }],
            ..Brief::default()
        };
        let view = derive(&brief, day("2024-06-01"));
        let text = render_brief(&view, day("2024-06-01"));

        assert!(text.contains("Untitled — medium • — • 2024-05-01"));
        assert!(text.contains("Acme • Globex"));
        assert!(text.contains("X — — • fails: 2 • fee: $29 — Personal email + retry link"));
    }

    #[test]
    fn landing_headline_falls_back_to_brand() {
        let page: LandingPage = serde_json::from_str(
            r#"{"brand": {"name": "Be One", "tagline": "One team"}, "hero": {}}"#,
        )
        .unwrap();
        let text = render_landing(&page);
        assert!(text.starts_with("Be One — One team\n"));
        assert!(text.contains("© Be One"));
    }

    #[test]
    fn landing_renders_sections_only_when_present() {
        let page: LandingPage = serde_json::from_str(
            r#"{
                "hero": {"headline": "Welcome"},
                "sponsors": [{"name": "Acme", "tier": "Gold"}],
                "newsletter": {"enabled": false}
            }"#,
        )
        .unwrap();
        let text = render_landing(&page);
        assert!(text.contains("Acme — Gold"));
        assert!(!text.contains("Stay in the loop"));
        assert!(!text.contains("What people say"));
    }
}
