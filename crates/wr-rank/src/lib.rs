//! Personalized ranking of short documents.
//!
//! `wr-rank` orders a transient set of candidates against a reader's evolving interests
//! and their current query. It combines:
//!
//! 1. **Tokenization**: lowercase, diacritic-free tokens with per-language stopwords
//! 2. **TF-IDF vectors**: IDF is recomputed over the candidates of every pass
//! 3. **Interest profiles**: a slow long-term and a fast short-term profile, each
//!    decayed and pruned on every consumed document
//! 4. **Scoring**: profile affinity, query affinity and a novelty signal
//! 5. **Diversification**: Maximal Marginal Relevance over the scored candidates
//!
//! Everything here is a pure function of its inputs. Profiles and history are owned by
//! the caller and threaded through [`Ranker::rank`] and [`Ranker::consume`], which
//! return new values instead of mutating.

#![warn(missing_docs)]

mod candidate;
mod error;
mod history;
mod idf;
mod language;
mod mmr;
mod profile;
mod rank;
mod score;
mod stopwords;
mod tokenize;
mod vector;

pub use candidate::Candidate;
pub use error::RankError;
pub use history::{History, HistoryEntry};
pub use idf::{IdfProvider, IdfTable, apply_idf, compute_idf};
pub use language::Language;
pub use mmr::mmr_order;
pub use profile::{Profile, ProfilePair, Pruning};
pub use rank::{RankedResult, Ranker, RankingContext, consume, rank};
pub use score::{ExploitWeight, Novelty, affinity, base_score};
pub use stopwords::Stopwords;
pub use tokenize::{MIN_TOKEN_CHARS, Tokenizer, fold, tokenize};
pub use vector::{TermVector, cosine, term_frequency};
