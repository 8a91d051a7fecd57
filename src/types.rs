//! Shared data model: the raw `Brief` wire document, the derived
//! `BriefView`, and the landing document.
//!
//! Wire format rules the dashboard relies on:
//! - record fields are snake_case; top-level metrics and KPI deltas are
//!   camelCase (`donationsToday`, `webDelta`, ...)
//! - every field is optional; absence means an empty list, zero, or `None`
//! - numeric fields tolerate numeric strings ("1500"); any other shape
//!   coerces to 0 rather than failing the document

use serde::{Deserialize, Serialize};

use crate::util;

/// The raw brief record for one reporting period, as read from
/// `public/brief.json`. All fields optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Brief {
    pub tasks: Vec<Task>,
    pub content: Vec<ContentItem>,
    pub sponsors: Vec<Sponsor>,
    pub grants: Vec<Grant>,
    pub memberships: Vec<Membership>,
    pub kpis: Kpis,
    #[serde(deserialize_with = "util::de_f64")]
    pub donations_today: f64,
    #[serde(deserialize_with = "util::de_f64")]
    pub mrr: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    #[serde(
        deserialize_with = "util::de_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        deserialize_with = "util::de_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
    #[serde(
        deserialize_with = "util::de_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<String>,
    #[serde(
        deserialize_with = "util::de_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub assignee: Option<String>,
    #[serde(
        deserialize_with = "util::de_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentItem {
    #[serde(
        deserialize_with = "util::de_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        deserialize_with = "util::de_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub platform: Option<String>,
    #[serde(
        deserialize_with = "util::de_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
    #[serde(
        deserialize_with = "util::de_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub publish_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sponsor {
    #[serde(
        deserialize_with = "util::de_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        deserialize_with = "util::de_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
    /// Missing or malformed values read as 0 and fall below the watch floor.
    #[serde(deserialize_with = "util::de_f64")]
    pub contract_value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grant {
    #[serde(
        deserialize_with = "util::de_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        deserialize_with = "util::de_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub deadline: Option<String>,
    #[serde(
        deserialize_with = "util::de_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub owner: Option<String>,
    #[serde(
        deserialize_with = "util::de_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_action: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Membership {
    #[serde(
        deserialize_with = "util::de_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub member: Option<String>,
    #[serde(
        deserialize_with = "util::de_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
    #[serde(deserialize_with = "util::de_count")]
    pub failed_payment_count: u32,
    #[serde(deserialize_with = "util::de_f64")]
    pub monthly_fee: f64,
}

/// Percent deltas vs the 7-day average. Missing fields read as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Kpis {
    #[serde(deserialize_with = "util::de_f64")]
    pub web_delta: f64,
    #[serde(deserialize_with = "util::de_f64")]
    pub social_delta: f64,
    #[serde(deserialize_with = "util::de_f64")]
    pub email_delta: f64,
    #[serde(deserialize_with = "util::de_f64")]
    pub leads_delta: f64,
}

/// A membership flagged for churn, with the deterministic outreach
/// suggestion attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChurnRisk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub fails: u32,
    pub fee: f64,
    pub suggestion: String,
}

/// The derived view model consumed by presentation. Recomputed fresh from
/// the immutable `Brief` on every render; serializes camelCase.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefView {
    pub task_focus: Vec<Task>,
    pub content_today: Vec<ContentItem>,
    pub sponsor_watch: Vec<Sponsor>,
    pub grants_due_soon: Vec<Grant>,
    pub churn_risks: Vec<ChurnRisk>,
    pub kpis: Kpis,
    pub donations_today: f64,
    pub mrr: f64,
}

// =============================================================================
// Landing document (public/landing.json)
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LandingPage {
    pub brand: Option<Brand>,
    pub hero: Hero,
    pub value_props: Vec<ValueProp>,
    pub sponsors: Vec<LandingSponsor>,
    pub testimonials: Vec<Testimonial>,
    pub newsletter: Option<Newsletter>,
    pub footer: Option<Footer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub name: Option<String>,
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hero {
    pub headline: Option<String>,
    pub sub: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub secondary_text: Option<String>,
    pub secondary_link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueProp {
    pub title: Option<String>,
    pub desc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingSponsor {
    pub name: Option<String>,
    pub tier: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub quote: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Newsletter {
    pub enabled: bool,
    pub endpoint: Option<String>,
    pub placeholder: Option<String>,
    pub button: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_all_defaults() {
        let brief: Brief = serde_json::from_str("{}").unwrap();
        assert_eq!(brief, Brief::default());
        assert_eq!(brief.kpis.web_delta, 0.0);
        assert_eq!(brief.donations_today, 0.0);
    }

    #[test]
    fn numeric_strings_coerce() {
        let brief: Brief = serde_json::from_str(
            r#"{
                "sponsors": [{"name": "Acme", "contract_value": "1500"}],
                "memberships": [{"member": "X", "failed_payment_count": "3"}],
                "donationsToday": "240",
                "mrr": 1200.5
            }"#,
        )
        .unwrap();
        assert_eq!(brief.sponsors[0].contract_value, 1500.0);
        assert_eq!(brief.memberships[0].failed_payment_count, 3);
        assert_eq!(brief.donations_today, 240.0);
        assert_eq!(brief.mrr, 1200.5);
    }

    #[test]
    fn malformed_scalars_neutralize_not_fail() {
        let brief: Brief = serde_json::from_str(
            r#"{
                "sponsors": [{"name": 7, "status": null, "contract_value": {}}],
                "memberships": [{"member": "Y", "failed_payment_count": -4}],
                "mrr": [1, 2],
                "kpis": {"webDelta": "2.5", "socialDelta": "oops"}
            }"#,
        )
        .unwrap();
        assert_eq!(brief.sponsors[0].name.as_deref(), Some("7"));
        assert_eq!(brief.sponsors[0].status, None);
        assert_eq!(brief.sponsors[0].contract_value, 0.0);
        assert_eq!(brief.memberships[0].failed_payment_count, 0);
        assert_eq!(brief.mrr, 0.0);
        assert_eq!(brief.kpis.web_delta, 2.5);
        assert_eq!(brief.kpis.social_delta, 0.0);
    }

    #[test]
    fn wrong_document_shape_is_an_error() {
        assert!(serde_json::from_str::<Brief>("[]").is_err());
        assert!(serde_json::from_str::<Brief>(r#"{"tasks": {"a": 1}}"#).is_err());
    }

    #[test]
    fn landing_document_parses_with_partial_fields() {
        let page: LandingPage = serde_json::from_str(
            r#"{
                "brand": {"name": "Be One", "tagline": "One team"},
                "hero": {"ctaText": "Join", "ctaLink": "/join"},
                "valueProps": [{"title": "Clarity", "desc": "One brief a day"}],
                "newsletter": {"enabled": true, "endpoint": "/subscribe"}
            }"#,
        )
        .unwrap();
        assert_eq!(page.hero.cta_text.as_deref(), Some("Join"));
        assert_eq!(page.value_props.len(), 1);
        assert!(page.newsletter.unwrap().enabled);
        assert!(page.footer.is_none());
    }
}
