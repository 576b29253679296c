use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary key assigned by the remote store. Depending on how the table was
/// created it is an integer or a text/uuid column, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingId {
    Number(i64),
    Text(String),
}

impl ListingId {
    /// Reads an id coming from a URL or a DOM attribute.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Some(match raw.parse::<i64>() {
            Ok(number) => ListingId::Number(number),
            Err(_) => ListingId::Text(raw.to_string()),
        })
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingId::Number(number) => write!(f, "{}", number),
            ListingId::Text(text) => f.write_str(text),
        }
    }
}

/// A scholarship, fellowship, internship or course row of the remote table.
///
/// Only `id` is mandatory at the boundary; every other column may be `null`
/// or absent. Accessors treat empty strings as missing so display fallbacks
/// kick in for both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub host_university: Option<String>,
    #[serde(default)]
    pub host_country: Option<String>,
    /// Kept as received; parsed lazily by the deadline helpers.
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub apply_link: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl Listing {
    pub fn title(&self) -> Option<&str> {
        present(&self.title)
    }

    pub fn category(&self) -> Option<&str> {
        present(&self.category)
    }

    pub fn host_university(&self) -> Option<&str> {
        present(&self.host_university)
    }

    pub fn host_country(&self) -> Option<&str> {
        present(&self.host_country)
    }

    pub fn apply_link(&self) -> Option<&str> {
        present(&self.apply_link)
    }

    pub fn image_url(&self) -> Option<&str> {
        present(&self.image_url)
    }

    pub fn description(&self) -> Option<&str> {
        present(&self.description)
    }

    pub fn details(&self) -> Option<&str> {
        present(&self.details)
    }
}

/// Payload for insert and update calls. Field names match the table columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub category: String,
    pub host_university: String,
    pub host_country: String,
    pub apply_link: String,
    /// ISO-8601 instant.
    pub deadline: String,
    pub image_url: String,
    pub description: String,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Row shape of a `select=category` query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryRow {
    #[serde(default)]
    pub category: Option<String>,
}

/// Sorted, de-duplicated category values; `null` shows up as `"(none)"`.
pub fn distinct_categories(rows: &[CategoryRow]) -> Vec<String> {
    let mut names: Vec<String> = rows
        .iter()
        .map(|row| row.category.clone().unwrap_or_else(|| "(none)".to_string()))
        .collect();
    names.sort();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_category_values() {
        let rows: Vec<CategoryRow> = serde_json::from_str(
            r#"[{"category":"udemy"},{"category":null},{"category":"Coursera"},{"category":"udemy"}]"#,
        )
        .unwrap();
        assert_eq!(distinct_categories(&rows), vec!["(none)", "Coursera", "udemy"]);
    }

    #[test]
    fn decodes_full_row_with_numeric_id() {
        let row = r#"{
            "id": 42,
            "created_at": "2025-01-02T10:00:00+00:00",
            "title": "Global Fellows",
            "category": "fellowship",
            "host_university": "ETH Zurich",
            "host_country": "Switzerland",
            "deadline": "2025-04-01T00:00:00+00:00",
            "apply_link": "https://example.org/apply",
            "image_url": null,
            "description": "",
            "details": "Long form"
        }"#;
        let listing: Listing = serde_json::from_str(row).unwrap();
        assert_eq!(listing.id, ListingId::Number(42));
        assert_eq!(listing.title(), Some("Global Fellows"));
        assert_eq!(listing.image_url(), None);
        assert_eq!(listing.description(), None);
        assert_eq!(listing.details(), Some("Long form"));
    }

    #[test]
    fn decodes_sparse_row_with_text_id() {
        let listing: Listing =
            serde_json::from_str(r#"{"id":"8d0c3c9e-0000-4000-8000-000000000001"}"#).unwrap();
        assert_eq!(
            listing.id.to_string(),
            "8d0c3c9e-0000-4000-8000-000000000001"
        );
        assert_eq!(listing.title(), None);
        assert_eq!(listing.category(), None);
    }

    #[test]
    fn row_without_id_is_rejected() {
        assert!(serde_json::from_str::<Listing>(r#"{"title":"x"}"#).is_err());
    }

    #[test]
    fn id_parsing_from_text() {
        assert_eq!(ListingId::parse(" 7 "), Some(ListingId::Number(7)));
        assert_eq!(ListingId::parse("abc"), Some(ListingId::Text("abc".into())));
        assert_eq!(ListingId::parse("   "), None);
    }

    #[test]
    fn draft_omits_created_at_unless_stamped() {
        let mut draft = ListingDraft {
            title: "t".into(),
            category: "internship".into(),
            host_university: String::new(),
            host_country: String::new(),
            apply_link: String::new(),
            deadline: "2025-04-01T00:00:00.000Z".into(),
            image_url: String::new(),
            description: String::new(),
            details: String::new(),
            created_at: None,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("created_at").is_none());
        assert_eq!(json["image_url"], "");

        draft.created_at = Some("2025-03-01T00:00:00.000Z".into());
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["created_at"], "2025-03-01T00:00:00.000Z");
    }
}
