//! wr: a personalized reader's ranking tool.
//!
//! wr ranks candidate articles fetched from search and related-page endpoints
//! against a reader's evolving interests and their current query, then diversifies
//! the ordering so near-duplicates do not crowd the top. Interests are learned from
//! the documents the reader reports as consumed and persist between invocations in
//! a small JSON state file.

#![warn(missing_docs)]

pub mod cli;
