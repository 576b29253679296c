use crate::config::Settings;
use crate::error::RemoteError;
use crate::model::listing::{ListingDraft, ListingId};

use super::filter::CategoryFilter;
use super::{encode_query, Method, RestRequest};

/// Every column a listing page renders.
pub const LISTING_COLUMNS: &str = "id,created_at,title,host_university,host_country,deadline,apply_link,image_url,category,description,details";

const NEWEST_FIRST: &str = "created_at.desc";
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Builds PostgREST requests for the listings table.
pub struct TableRequests<'a> {
    settings: &'a Settings,
    bearer: &'a str,
}

impl<'a> TableRequests<'a> {
    /// `access_token` is the signed-in user's token; anonymous calls fall
    /// back to the anon key.
    pub fn new(settings: &'a Settings, access_token: Option<&'a str>) -> Self {
        Self {
            settings,
            bearer: access_token.unwrap_or(&settings.anon_key),
        }
    }

    fn request(&self, method: Method, query: String) -> RestRequest {
        let url = if query.is_empty() {
            self.settings.rest_url()
        } else {
            format!("{}?{}", self.settings.rest_url(), query)
        };
        RestRequest::new(method, url).authorized(&self.settings.anon_key, self.bearer)
    }

    /// All listings matching `filter`, newest first.
    pub fn list(&self, filter: &CategoryFilter) -> RestRequest {
        let mut pairs = vec![("select".to_string(), LISTING_COLUMNS.to_string())];
        pairs.extend(filter.query_pair());
        pairs.push(("order".to_string(), NEWEST_FIRST.to_string()));
        self.request(Method::Get, encode_query(pairs))
    }

    /// Only the category column of every row.
    pub fn list_categories(&self) -> RestRequest {
        self.request(Method::Get, encode_query([("select", "category")]))
    }

    /// Exactly one row; the remote store answers 406 when no row matches.
    pub fn fetch_one(&self, id: &ListingId) -> RestRequest {
        self.request(
            Method::Get,
            encode_query([("select", "*".to_string()), ("id", format!("eq.{}", id))]),
        )
        .header("Accept", SINGLE_OBJECT)
    }

    pub fn insert(&self, draft: &ListingDraft) -> Result<RestRequest, RemoteError> {
        self.request(Method::Post, String::new())
            .header("Prefer", "return=minimal")
            .json(&[draft])
    }

    pub fn update(&self, id: &ListingId, draft: &ListingDraft) -> Result<RestRequest, RemoteError> {
        self.request(Method::Patch, encode_query([("id", format!("eq.{}", id))]))
            .header("Prefer", "return=minimal")
            .json(draft)
    }

    pub fn delete(&self, id: &ListingId) -> RestRequest {
        self.request(Method::Delete, encode_query([("id", format!("eq.{}", id))]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            supabase_url: "https://demo.supabase.co".into(),
            anon_key: "anon".into(),
            table: "scholarships".into(),
            base_path: "/".into(),
            log_level: log::LevelFilter::Info,
        }
    }

    fn draft() -> ListingDraft {
        ListingDraft {
            title: "Rhodes".into(),
            category: "undergraduate".into(),
            host_university: "Oxford".into(),
            host_country: "UK".into(),
            apply_link: "https://example.org".into(),
            deadline: "2025-05-01T00:00:00.000Z".into(),
            image_url: String::new(),
            description: String::new(),
            details: String::new(),
            created_at: None,
        }
    }

    #[test]
    fn list_without_filter_orders_newest_first() {
        let s = settings();
        let req = TableRequests::new(&s, None).list(&CategoryFilter::Any);
        assert_eq!(req.method, Method::Get);
        assert!(req.url.starts_with("https://demo.supabase.co/rest/v1/scholarships?select=id%2Ccreated_at"));
        assert!(req.url.ends_with("&order=created_at.desc"));
        assert_eq!(req.header_value("apikey"), Some("anon"));
        assert_eq!(req.header_value("authorization"), Some("Bearer anon"));
        assert!(req.body.is_none());
    }

    #[test]
    fn list_with_exact_filter() {
        let s = settings();
        let req = TableRequests::new(&s, None).list(&CategoryFilter::exact("fellowship"));
        assert!(req.url.contains("&category=eq.fellowship&order=created_at.desc"));
    }

    #[test]
    fn list_with_course_keywords_encodes_or_clause() {
        let s = settings();
        let req = TableRequests::new(&s, None).list(&CategoryFilter::online_courses());
        assert!(req.url.contains("&or=%28category.ilike.*online+course*%2Ccategory.ilike.*online-course*"));
    }

    #[test]
    fn fetch_one_asks_for_a_single_object() {
        let s = settings();
        let req = TableRequests::new(&s, Some("user-token")).fetch_one(&ListingId::Number(9));
        assert_eq!(
            req.url,
            "https://demo.supabase.co/rest/v1/scholarships?select=*&id=eq.9"
        );
        assert_eq!(req.header_value("accept"), Some("application/vnd.pgrst.object+json"));
        assert_eq!(req.header_value("authorization"), Some("Bearer user-token"));
    }

    #[test]
    fn mutations_target_one_id() {
        let s = settings();
        let table = TableRequests::new(&s, Some("t"));

        let insert = table.insert(&draft()).unwrap();
        assert_eq!(insert.method, Method::Post);
        assert_eq!(insert.url, "https://demo.supabase.co/rest/v1/scholarships");
        assert!(insert.body.as_deref().unwrap().starts_with("[{\"title\":\"Rhodes\""));
        assert_eq!(insert.header_value("content-type"), Some("application/json"));

        let id = ListingId::Text("abc".into());
        let update = table.update(&id, &draft()).unwrap();
        assert_eq!(update.method, Method::Patch);
        assert!(update.url.ends_with("?id=eq.abc"));
        assert!(update.body.as_deref().unwrap().starts_with('{'));

        let delete = table.delete(&id);
        assert_eq!(delete.method, Method::Delete);
        assert!(delete.url.ends_with("?id=eq.abc"));
        assert!(delete.body.is_none());
    }
}
