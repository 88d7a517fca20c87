use serde::Deserialize;

/// Raw movie record as returned by the search service.
///
/// Every field except `id` is optional: third-party payloads are not
/// trusted to carry the full shape.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRecord {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// Normalized search result. Ephemeral: owned by the search session and
/// discarded on the next query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub id: i64,
    pub title: String,
    /// Four-digit year taken from the raw release date, when present.
    pub release_year: Option<String>,
    /// Vote average on a 0-10 scale, when present.
    pub rating: Option<f64>,
    pub overview: String,
    /// Full poster URL (image base + poster path), when a poster exists.
    pub poster_url: Option<String>,
}

impl SearchResult {
    pub fn from_record(record: MovieRecord, image_base_url: &str) -> Self {
        let release_year = record
            .release_date
            .as_deref()
            .and_then(|d| d.get(..4))
            .map(str::to_string);
        let poster_url = record
            .poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("{image_base_url}{p}"));
        Self {
            id: record.id,
            title: record.title.unwrap_or_default(),
            release_year,
            rating: record.vote_average,
            overview: record.overview.unwrap_or_default(),
            poster_url,
        }
    }

    /// Year for display, "N/A" when unknown.
    pub fn year_display(&self) -> &str {
        self.release_year.as_deref().unwrap_or("N/A")
    }

    /// Rating for display with one decimal, "N/A" when unknown.
    pub fn rating_display(&self) -> String {
        match self.rating {
            Some(r) => format!("{r:.1}"),
            None => "N/A".to_string(),
        }
    }
}
