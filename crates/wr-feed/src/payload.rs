//! Retrieval payload shapes and their normalization into candidates.
//!
//! Recognized shapes:
//! - REST title search: `{"pages": [{"id", "title", "excerpt"}]}`
//! - REST related pages: `{"pages": [{"pageid", "title", "description", "extract"}]}`
//! - Action API search: `{"query": {"search": [{"pageid", "title", "snippet"}]}}`
//! - Action API extracts: `{"query": {"pages": {"<pageid>": {"pageid", "title", "extract"}}}}`,
//!   read in key order, skipping entries marked `missing`
//! - Page summary: `{"pageid", "title", "description", "extract"}`
//! - A bare array of records in any of the above record shapes
//!
//! Every record becomes a [`Candidate`]: the id is `id`, then `pageid`, then the title;
//! the excerpt is `excerpt`, `snippet` or `description` with HTML removed; the summary
//! is `summary` or `extract`.

use std::{collections::BTreeMap, fmt};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace};
use wr_rank::Candidate;

use crate::{FeedError, html::collapse_whitespace, strip_html};

/// Label used in errors for payloads not read from a file.
pub const INPUT_ORIGIN: &str = "<input>";

/// Identifier as found in a payload: numeric page ids or string keys.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawId {
    /// Numeric id.
    Number(i64),
    /// String id.
    Text(String),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One result record in any supported shape.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawRecord {
    /// REST search id or a caller-provided id.
    id: Option<RawId>,
    /// Page id from the action API and related pages.
    pageid: Option<RawId>,
    /// Page title.
    title: Option<String>,
    /// REST search excerpt (may contain highlight markup).
    excerpt: Option<String>,
    /// Action API snippet (contains highlight markup).
    snippet: Option<String>,
    /// Short page description.
    description: Option<String>,
    /// Caller-provided summary.
    summary: Option<String>,
    /// Lead section text.
    extract: Option<String>,
    /// Set by the action API for titles that do not exist.
    missing: Option<Value>,
}

/// Summary object with a mandatory title.
#[derive(Debug, Clone, Deserialize)]
struct RawSummary {
    /// Page id.
    pageid: Option<RawId>,
    /// Page title.
    title: String,
    /// Short page description.
    description: Option<String>,
    /// Lead section text.
    extract: Option<String>,
}

/// `query` block of an action API response.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum QueryBlock {
    /// `list=search` hits.
    Search {
        /// Search hits.
        search: Vec<RawRecord>,
    },
    /// `prop=extracts` pages keyed by page id.
    Pages {
        /// Pages by id.
        pages: BTreeMap<String, RawRecord>,
    },
}

/// Top-level payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Payload {
    /// REST search or related pages.
    Pages {
        /// Result pages.
        pages: Vec<RawRecord>,
    },
    /// Action API search or extracts.
    Query {
        /// Query block.
        query: QueryBlock,
    },
    /// Bare array of records.
    Records(Vec<RawRecord>),
    /// Single page summary.
    Summary(RawSummary),
}

impl Payload {
    /// Flattens the payload into its records.
    fn into_records(self) -> Vec<RawRecord> {
        match self {
            Self::Pages { pages } => pages,
            Self::Query {
                query: QueryBlock::Search { search },
            } => search,
            Self::Query {
                query: QueryBlock::Pages { pages },
            } => pages.into_values().collect(),
            Self::Records(records) => records,
            Self::Summary(summary) => vec![RawRecord {
                pageid: summary.pageid,
                title: Some(summary.title),
                description: summary.description,
                extract: summary.extract,
                ..RawRecord::default()
            }],
        }
    }
}

/// Returns the first non-empty text after cleanup.
fn first_text<'a>(
    fields: impl IntoIterator<Item = Option<&'a String>>,
    clean: fn(&str) -> String,
) -> Option<String> {
    fields
        .into_iter()
        .flatten()
        .map(|s| clean(s))
        .find(|s| !s.is_empty())
}

impl RawRecord {
    /// Converts the record into a candidate, or `None` if it has no usable title or
    /// names a missing page.
    fn into_candidate(self) -> Option<Candidate> {
        if self.missing.is_some() {
            return None;
        }
        let title = collapse_whitespace(self.title.as_deref()?);
        if title.is_empty() {
            return None;
        }

        let id = self
            .id
            .as_ref()
            .or(self.pageid.as_ref())
            .map_or_else(|| title.clone(), ToString::to_string);

        let excerpt = first_text(
            [
                self.excerpt.as_ref(),
                self.snippet.as_ref(),
                self.description.as_ref(),
            ],
            strip_html,
        );
        let summary = first_text(
            [self.summary.as_ref(), self.extract.as_ref()],
            collapse_whitespace,
        );

        Some(Candidate {
            id,
            title,
            excerpt,
            summary,
        })
    }
}

/// Parses a payload into candidates, in payload order.
///
/// Records without a title are skipped.
pub fn parse_payload(json: &str) -> Result<Vec<Candidate>, FeedError> {
    parse_payload_from(json, INPUT_ORIGIN)
}

/// Parses a payload, naming `origin` in errors.
pub fn parse_payload_from(json: &str, origin: &str) -> Result<Vec<Candidate>, FeedError> {
    let value: Value = serde_json::from_str(json).map_err(|source| FeedError::Json {
        origin: origin.to_string(),
        source,
    })?;
    let payload = Payload::deserialize(value).map_err(|_| FeedError::UnknownShape {
        origin: origin.to_string(),
    })?;

    let records = payload.into_records();
    let total = records.len();
    let candidates: Vec<Candidate> = records
        .into_iter()
        .filter_map(|record| {
            let candidate = record.into_candidate();
            if candidate.is_none() {
                trace!(origin, "skipping record without title");
            }
            candidate
        })
        .collect();

    debug!(origin, total, kept = candidates.len(), "parsed payload");
    Ok(candidates)
}
