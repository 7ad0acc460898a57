//! Integration tests for wr-rank.
//!
//! Exercises full ranking passes and profile evolution through the public API.

// Integration tests live outside cfg(test)
#![allow(clippy::tests_outside_test_module)]

use wr_config::{Config, ProfileSettings};
use wr_rank::{
    Candidate, ExploitWeight, History, HistoryEntry, ProfilePair, RankedResult, Ranker,
    RankingContext, TermVector, consume, rank,
};

/// A small mixed corpus about philosophy and physics.
fn corpus() -> Vec<Candidate> {
    vec![
        Candidate::new("kant", "Immanuel Kant")
            .with_excerpt("Philosoph der Aufklärung")
            .with_summary("Kant begründete die kritische Philosophie und die Ethik der Pflicht."),
        Candidate::new("kritik", "Kritik der reinen Vernunft")
            .with_excerpt("Hauptwerk von Kant")
            .with_summary("Die Kritik untersucht Vernunft und Erkenntnis bei Kant."),
        Candidate::new("quanten", "Quantenmechanik")
            .with_excerpt("Physikalische Theorie")
            .with_summary("Die Quantenmechanik beschreibt Materie und Energie auf atomarer Ebene."),
        Candidate::new("relativ", "Relativitätstheorie")
            .with_excerpt("Physikalische Theorie von Einstein")
            .with_summary("Raum und Zeit bilden eine Raumzeit, beschrieben von Einstein."),
    ]
}

/// Ranks with the given state and returns ids in output order.
fn ranked_ids(
    candidates: &[Candidate],
    query: &str,
    exploit: f64,
    profiles: &ProfilePair,
    history: &History,
) -> Vec<String> {
    let context = RankingContext {
        query,
        language: "de",
        exploit: ExploitWeight::new(exploit).unwrap(),
        profiles,
        history,
        limit: None,
    };
    rank(candidates, &context)
        .unwrap()
        .into_iter()
        .map(|result: RankedResult| result.candidate.id)
        .collect()
}

#[test]
fn query_drives_order_without_profile() {
    let ids = ranked_ids(
        &corpus(),
        "Quantenmechanik Materie",
        0.0,
        &ProfilePair::default(),
        &History::default(),
    );
    assert_eq!(ids[0], "quanten");
    assert_eq!(ids.len(), 4);
}

#[test]
fn consumed_documents_shift_the_ranking() {
    let candidates = corpus();
    let mut profiles = ProfilePair::default();
    let mut history = History::default();

    for id in ["quanten", "relativ"] {
        let doc = candidates.iter().find(|c| c.id == id).unwrap();
        let (next, entry) = consume(&profiles, doc, "de");
        profiles = next;
        history = history.record(entry);
    }

    let ids = ranked_ids(&candidates, "", 1.0, &profiles, &history);
    let top_two: Vec<&str> = ids[..2].iter().map(String::as_str).collect();

    // Physics dominates the profile; both physics articles beat philosophy even
    // though both were just read.
    assert!(top_two.contains(&"quanten"));
    assert!(top_two.contains(&"relativ"));
}

#[test]
fn recently_read_title_loses_a_tie() {
    let candidates = vec![
        Candidate::new("a", "Kant"),
        Candidate::new("b", "Hegel"),
    ];
    let profiles = ProfilePair::default();
    let history = History::default().record(HistoryEntry::now("Kant", "de"));

    let ids = ranked_ids(&candidates, "", 0.7, &profiles, &history);
    assert_eq!(ids, vec!["b", "a"]);

    let context = RankingContext {
        query: "",
        language: "de",
        exploit: ExploitWeight::new(0.7).unwrap(),
        profiles: &profiles,
        history: &history,
        limit: None,
    };
    let results = rank(&candidates, &context).unwrap();
    let score_of = |id: &str| {
        results
            .iter()
            .find(|result| result.candidate.id == id)
            .map(|result| result.score)
            .unwrap()
    };
    // Empty profile and query leave only the novelty adjustment.
    assert!((score_of("a") + 0.05).abs() < 1e-12);
    assert!((score_of("b") - 0.05).abs() < 1e-12);
}

#[test]
fn ranking_is_deterministic() {
    let candidates = corpus();
    let (profiles, entry) = consume(&ProfilePair::default(), &candidates[0], "de");
    let history = History::default().record(entry);

    let first = ranked_ids(&candidates, "Vernunft", 0.5, &profiles, &history);
    let second = ranked_ids(&candidates, "Vernunft", 0.5, &profiles, &history);
    assert_eq!(first, second);
}

#[test]
fn ranking_does_not_mutate_inputs() {
    let candidates = corpus();
    let (profiles, _) = consume(&ProfilePair::default(), &candidates[1], "de");
    let snapshot = profiles.clone();

    ranked_ids(&candidates, "Kant", 0.7, &profiles, &History::default());
    assert_eq!(profiles, snapshot);
}

#[test]
fn profile_stays_bounded_over_many_updates() {
    let settings = ProfileSettings {
        max_terms: 10,
        ..ProfileSettings::default()
    };
    let mut profiles = ProfilePair::new(&settings).unwrap();
    for doc in corpus().iter().cycle().take(20) {
        profiles = consume(&profiles, doc, "de").0;
    }

    assert!(profiles.long_term.terms().len() <= 10);
    assert!(profiles.short_term.terms().len() <= 10);
    assert!(
        profiles
            .short_term
            .terms()
            .iter()
            .all(|(_, weight)| weight > settings.epsilon)
    );
}

#[test]
fn restored_profiles_rank_like_live_ones() {
    let candidates = corpus();
    let (live, _) = consume(&ProfilePair::default(), &candidates[2], "de");

    let long: TermVector = live.long_term.terms().clone();
    let short: TermVector = live.short_term.terms().clone();
    let restored = ProfilePair::with_terms(long, short, &ProfileSettings::default()).unwrap();

    let history = History::default();
    assert_eq!(
        ranked_ids(&candidates, "", 0.9, &live, &history),
        ranked_ids(&candidates, "", 0.9, &restored, &history)
    );
}

#[test]
fn configured_ranker_uses_novelty_settings() {
    let mut config = Config::default();
    config.ranking.novelty = 0.0;
    let ranker = Ranker::from_config(&config).unwrap();

    let candidates = vec![Candidate::new("a", "Kant")];
    let profiles = ProfilePair::default();
    let history = History::default();
    let context = RankingContext {
        query: "",
        language: "de",
        exploit: ExploitWeight::default(),
        profiles: &profiles,
        history: &history,
        limit: None,
    };

    let results = ranker.rank(&candidates, &context).unwrap();
    assert_eq!(results[0].score, 0.0);
}
