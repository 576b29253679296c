use chrono::{DateTime, Utc};

use crate::deadline::{days_until_deadline, DeadlineLabel};
use crate::markdown::render_details;
use crate::model::listing::Listing;

use super::DETAIL_PLACEHOLDER;

const NO_DESCRIPTION: &str = "No detailed description available for this scholarship.";
const NOT_SPECIFIED: &str = "Not specified";

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub image_src: String,
    pub title: String,
    pub category: String,
    pub deadline: DeadlineLabel,
    /// Bootstrap contextual colour of the deadline badge.
    pub deadline_class: &'static str,
    /// Raw deadline for locale formatting by the page.
    pub deadline_raw: Option<String>,
    pub host_university: String,
    pub host_country: String,
    /// Rendered HTML of the main body.
    pub body_html: String,
    /// Short description, only when a separate long-form body exists.
    pub summary: Option<String>,
    pub apply_href: String,
    pub document_title: String,
}

impl DetailView {
    pub fn build(listing: &Listing, now: DateTime<Utc>) -> Self {
        let deadline = days_until_deadline(listing.deadline.as_deref(), now);
        let title = listing.title().unwrap_or_default().to_string();

        let body_html = match listing.details().or(listing.description()) {
            Some(text) => render_details(text),
            None => format!("<p>{}</p>\n", NO_DESCRIPTION),
        };
        let summary = match (listing.details(), listing.description()) {
            (Some(_), Some(description)) => Some(description.to_string()),
            _ => None,
        };

        Self {
            image_src: listing.image_url().unwrap_or(DETAIL_PLACEHOLDER).to_string(),
            category: listing.category().unwrap_or("General").to_string(),
            deadline,
            deadline_class: if deadline.is_passed() { "danger" } else { "success" },
            deadline_raw: listing.deadline.clone(),
            host_university: listing.host_university().unwrap_or(NOT_SPECIFIED).to_string(),
            host_country: listing.host_country().unwrap_or(NOT_SPECIFIED).to_string(),
            body_html,
            summary,
            apply_href: listing.apply_link().unwrap_or("#").to_string(),
            document_title: format!("{} - Scholarships Hub", title),
            title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::listing::ListingId;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap()
    }

    fn listing() -> Listing {
        Listing {
            id: ListingId::Number(1),
            title: Some("Chevening".into()),
            category: None,
            host_university: None,
            host_country: Some("UK".into()),
            deadline: Some("2025-05-01T00:00:00+00:00".into()),
            apply_link: None,
            image_url: Some("https://img.example/c.png".into()),
            description: Some("Fully funded masters".into()),
            details: Some("Line one\nLine two".into()),
            created_at: None,
        }
    }

    #[test]
    fn details_win_and_description_becomes_summary() {
        let view = DetailView::build(&listing(), now());
        assert!(view.body_html.contains("Line one<br />"));
        assert_eq!(view.summary.as_deref(), Some("Fully funded masters"));
        assert_eq!(view.document_title, "Chevening - Scholarships Hub");
        assert_eq!(view.image_src, "https://img.example/c.png");
    }

    #[test]
    fn description_alone_is_the_body_without_summary() {
        let mut only_description = listing();
        only_description.details = Some("   ".into());
        let view = DetailView::build(&only_description, now());
        assert_eq!(view.body_html, "<p>Fully funded masters</p>\n");
        assert!(view.summary.is_none());
    }

    #[test]
    fn nothing_to_show_uses_the_fallback_text() {
        let mut empty = listing();
        empty.details = None;
        empty.description = None;
        let view = DetailView::build(&empty, now());
        assert!(view.body_html.contains(NO_DESCRIPTION));
        assert!(view.summary.is_none());
    }

    #[test]
    fn fallbacks_and_passed_deadline_badge() {
        let view = DetailView::build(&listing(), now());
        assert_eq!(view.category, "General");
        assert_eq!(view.host_university, "Not specified");
        assert_eq!(view.host_country, "UK");
        assert_eq!(view.deadline.to_string(), "Deadline Passed");
        assert_eq!(view.deadline_class, "danger");
        assert_eq!(view.apply_href, "#");
    }
}
