use std::io::Read;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

use super::super::domain::{deserialize_engagement, PostId, PostKind, SocialPost};
use super::normalizer::{normalize_field, strip_invisible};
use super::LeadImportError;

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<SocialPost>, LeadImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut posts = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|position| position.line()).unwrap_or(0);
        let row: LeadRow = record.deserialize(Some(&headers))?;
        posts.push(row.into_post(line)?);
    }

    Ok(posts)
}

#[derive(Debug, Deserialize)]
pub(crate) struct LeadRow {
    id: String,
    username: String,
    platform: String,
    #[serde(default, alias = "postContent")]
    content: String,
    #[serde(
        default,
        alias = "engagement_count",
        deserialize_with = "deserialize_engagement"
    )]
    engagement: u64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    location: Option<String>,
    #[serde(alias = "profileUrl")]
    profile_url: String,
    timestamp: String,
    #[serde(
        default,
        alias = "post_type",
        alias = "postType",
        deserialize_with = "empty_string_as_none"
    )]
    post_kind: Option<String>,
}

impl LeadRow {
    pub(crate) fn into_post(self, line: u64) -> Result<SocialPost, LeadImportError> {
        let invalid = |reason: String| LeadImportError::InvalidRecord { line, reason };

        let id = normalize_field(&self.id);
        if id.is_empty() {
            return Err(invalid("missing id".to_string()));
        }

        let timestamp = parse_timestamp(&self.timestamp)
            .ok_or_else(|| invalid(format!("unparseable timestamp '{}'", self.timestamp)))?;

        let post_kind = match self.post_kind.as_deref().map(str::to_ascii_lowercase) {
            None => PostKind::Post,
            Some(kind) if kind == "post" => PostKind::Post,
            Some(kind) if kind == "comment" => PostKind::Comment,
            Some(other) => return Err(invalid(format!("unknown post kind '{other}'"))),
        };

        Ok(SocialPost {
            id: PostId(id),
            username: normalize_field(&self.username),
            platform: normalize_field(&self.platform),
            content: strip_invisible(&self.content),
            engagement_count: self.engagement,
            location: self.location.map(|location| normalize_field(&location)),
            profile_url: self.profile_url,
            timestamp,
            post_kind,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_accept_rfc3339_and_plain_dates() {
        let full = parse_timestamp("2024-01-15T14:30:00+02:00").expect("rfc3339 parses");
        assert_eq!(full.to_rfc3339(), "2024-01-15T12:30:00+00:00");

        let day = parse_timestamp("2024-01-15").expect("date parses");
        assert_eq!(day.to_rfc3339(), "2024-01-15T00:00:00+00:00");

        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("  ").is_none());
    }

    #[test]
    fn csv_rows_accept_dashboard_style_headers() {
        let csv = "id,username,platform,postContent,engagement,location,profileUrl,timestamp,postType\n\
7,ops_lead,LinkedIn,Researching CRM vendors,-5,,https://linkedin.com/in/ops-lead,2024-01-15,comment\n";

        let posts = parse_csv(csv.as_bytes()).expect("csv parses");
        assert_eq!(posts.len(), 1);
        let post = &posts[0];
        assert_eq!(post.content, "Researching CRM vendors");
        assert_eq!(post.engagement_count, 0);
        assert!(post.location.is_none());
        assert_eq!(post.post_kind, PostKind::Comment);
    }

    #[test]
    fn unknown_post_kind_reports_the_line() {
        let csv = "id,username,platform,content,engagement,location,profile_url,timestamp,post_kind\n\
1,a,Twitter,hello,1,,https://x.com/a,2024-01-15,story\n";

        match parse_csv(csv.as_bytes()) {
            Err(LeadImportError::InvalidRecord { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("story"));
            }
            other => panic!("expected invalid record, got {other:?}"),
        }
    }
}
