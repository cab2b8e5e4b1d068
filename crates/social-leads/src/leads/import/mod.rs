mod normalizer;
mod parser;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use super::domain::SocialPost;

pub use parser::parse_timestamp;

#[derive(Debug)]
pub enum LeadImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    InvalidRecord { line: u64, reason: String },
    DuplicateId(String),
}

impl std::fmt::Display for LeadImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadImportError::Io(err) => write!(f, "failed to read lead dataset: {}", err),
            LeadImportError::Csv(err) => write!(f, "invalid lead CSV data: {}", err),
            LeadImportError::Json(err) => write!(f, "invalid lead JSON data: {}", err),
            LeadImportError::InvalidRecord { line, reason } => {
                write!(f, "invalid lead record on line {}: {}", line, reason)
            }
            LeadImportError::DuplicateId(id) => write!(f, "duplicate lead id '{}'", id),
        }
    }
}

impl std::error::Error for LeadImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LeadImportError::Io(err) => Some(err),
            LeadImportError::Csv(err) => Some(err),
            LeadImportError::Json(err) => Some(err),
            LeadImportError::InvalidRecord { .. } | LeadImportError::DuplicateId(_) => None,
        }
    }
}

impl From<std::io::Error> for LeadImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for LeadImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for LeadImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Loads scraped posts from CSV exports or JSON arrays.
pub struct LeadImporter;

impl LeadImporter {
    /// Dispatches on the file extension: `.json` is read as JSON, anything else as CSV.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<SocialPost>, LeadImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let posts = if is_json {
            Self::from_json_reader(file)?
        } else {
            Self::from_csv_reader(file)?
        };
        tracing::info!(path = %path.display(), posts = posts.len(), "lead dataset loaded");
        Ok(posts)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<SocialPost>, LeadImportError> {
        let posts = parser::parse_csv(reader)?;
        ensure_unique_ids(&posts)?;
        Ok(posts)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<SocialPost>, LeadImportError> {
        let rows: Vec<parser::LeadRow> = serde_json::from_reader(reader)?;
        let posts = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| row.into_post(index as u64 + 1))
            .collect::<Result<Vec<_>, _>>()?;
        ensure_unique_ids(&posts)?;
        Ok(posts)
    }
}

fn ensure_unique_ids(posts: &[SocialPost]) -> Result<(), LeadImportError> {
    let mut seen = HashSet::new();
    for post in posts {
        if !seen.insert(&post.id) {
            return Err(LeadImportError::DuplicateId(post.id.0.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,username,platform,content,engagement,location,profile_url,timestamp,post_kind\n";

    #[test]
    fn duplicate_ids_are_rejected() {
        let csv = format!(
            "{HEADER}1,a,Twitter,hiring now,10,,https://x.com/a,2024-01-15,post\n\
1,b,Reddit,maybe later,3,,https://reddit.com/u/b,2024-01-15,post\n"
        );

        match LeadImporter::from_csv_reader(csv.as_bytes()) {
            Err(LeadImportError::DuplicateId(id)) => assert_eq!(id, "1"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn json_arrays_import_in_order() {
        let json = r#"[
            {"id": "a", "username": "first", "platform": "Twitter", "content": "urgent",
             "engagement": 12, "profile_url": "https://x.com/first",
             "timestamp": "2024-01-15T10:00:00Z"},
            {"id": "b", "username": "second", "platform": "Reddit", "content": "someday",
             "engagement": 3.7, "profile_url": "https://reddit.com/u/second",
             "timestamp": "2024-01-15T11:00:00Z", "post_kind": "comment"}
        ]"#;

        let posts = LeadImporter::from_json_reader(json.as_bytes()).expect("json imports");
        let usernames: Vec<_> = posts.iter().map(|post| post.username.as_str()).collect();
        assert_eq!(usernames, ["first", "second"]);
        assert_eq!(posts[1].engagement_count, 3);
    }

    #[test]
    fn json_records_follow_csv_cell_rules() {
        let json = r#"[
            {"id": " c ", "username": "ops_lead", "platform": "LinkedIn",
             "postContent": "Need a CRM asap", "engagement": "1,204", "location": "",
             "profileUrl": "https://linkedin.com/in/ops-lead", "timestamp": "2024-01-15",
             "postType": "Comment"}
        ]"#;
        let csv = format!(
            "{HEADER}c,ops_lead,LinkedIn,Need a CRM asap,\"1,204\",,https://linkedin.com/in/ops-lead,2024-01-15,comment\n"
        );

        let from_json = LeadImporter::from_json_reader(json.as_bytes()).expect("json imports");
        let from_csv = LeadImporter::from_csv_reader(csv.as_bytes()).expect("csv imports");
        assert_eq!(from_json, from_csv);

        let post = &from_json[0];
        assert_eq!(post.id.0, "c");
        assert!(post.location.is_none());
        assert_eq!(post.engagement_count, 1204);
        assert_eq!(post.timestamp.to_rfc3339(), "2024-01-15T00:00:00+00:00");
    }

    #[test]
    fn invalid_json_record_reports_its_position() {
        let json = r#"[
            {"id": "a", "username": "first", "platform": "Twitter", "content": "urgent",
             "profile_url": "https://x.com/first", "timestamp": "2024-01-15"},
            {"id": "b", "username": "second", "platform": "Reddit", "content": "someday",
             "profile_url": "https://reddit.com/u/second", "timestamp": "last week"}
        ]"#;

        match LeadImporter::from_json_reader(json.as_bytes()) {
            Err(LeadImportError::InvalidRecord { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("last week"));
            }
            other => panic!("expected invalid record, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        match LeadImporter::from_path("/nonexistent/leads.csv") {
            Err(LeadImportError::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
