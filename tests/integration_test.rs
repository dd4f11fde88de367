// Integration tests for prefx
use prefx::prelude::*;
use prefx::{round_score, top_matches_par};
use std::io::Write;

fn critics() -> Dataset {
    Dataset::from_json_str(
        r#"{
            "Lisa Rose": {"Lady in the Water": 2.5, "Snakes on a Plane": 3.5, "Just My Luck": 3.0,
                          "Superman Returns": 3.5, "You, Me and Dupree": 2.5, "The Night Listener": 3.0},
            "Gene Seymour": {"Lady in the Water": 3.0, "Snakes on a Plane": 3.5, "Just My Luck": 1.5,
                             "Superman Returns": 5.0, "The Night Listener": 3.0, "You, Me and Dupree": 3.5},
            "Michael Phillips": {"Lady in the Water": 2.5, "Snakes on a Plane": 3.0,
                                 "Superman Returns": 3.5, "The Night Listener": 4.0},
            "Claudia Puig": {"Snakes on a Plane": 3.5, "Just My Luck": 3.0, "The Night Listener": 4.5,
                             "Superman Returns": 4.0, "You, Me and Dupree": 2.5},
            "Mick LaSalle": {"Lady in the Water": 3.0, "Snakes on a Plane": 4.0, "Just My Luck": 2.0,
                             "Superman Returns": 3.0, "The Night Listener": 3.0, "You, Me and Dupree": 2.0},
            "Jack Matthews": {"Lady in the Water": 3.0, "Snakes on a Plane": 4.0, "The Night Listener": 3.0,
                              "Superman Returns": 5.0, "You, Me and Dupree": 3.5},
            "Toby": {"Snakes on a Plane": 4.5, "You, Me and Dupree": 1.0, "Superman Returns": 4.0}
        }"#,
    )
    .unwrap()
}

fn scenario() -> Dataset {
    Dataset::from_json_str(
        r#"{
            "A": {"x": 3.0, "y": 4.0},
            "B": {"x": 3.0, "y": 4.0},
            "C": {"x": 1.0, "y": 5.0}
        }"#,
    )
    .unwrap()
}

#[test]
fn test_scenario_similarity() {
    let dataset = scenario();
    let ab = sim_pearson(&dataset, "A", "B").unwrap();
    assert!((ab - 1.0).abs() < 1e-9);

    // Two shared points always lie on a line: both rise from x to y
    let ac = sim_pearson(&dataset, "A", "C").unwrap();
    assert!((ac - 1.0).abs() < 1e-9);
}

#[test]
fn test_scenario_ranking() {
    let dataset = scenario();
    let matches = top_matches(&dataset, "A", 2, &Pearson).unwrap();

    // Tied at 1.0, so the larger identifier comes first
    let pairs: Vec<(f64, String)> = matches.into_iter().map(Match::into_pair).collect();
    assert_eq!(pairs, vec![(1.0, "C".to_string()), (1.0, "B".to_string())]);
}

#[test]
fn test_critics_top_matches() {
    let dataset = critics();
    let matches = top_matches(&dataset, "Toby", 3, &Pearson).unwrap();

    let pairs: Vec<(f64, String)> = matches.into_iter().map(Match::into_pair).collect();
    assert_eq!(
        pairs,
        vec![
            (0.99, "Lisa Rose".to_string()),
            (0.92, "Mick LaSalle".to_string()),
            (0.89, "Claudia Puig".to_string()),
        ]
    );
}

#[test]
fn test_output_properties() {
    let dataset = critics();
    let others = dataset.len() - 1;

    for reference in dataset.entities() {
        for n in [0, 1, 3, others, others + 5] {
            let matches = top_matches(&dataset, reference, n, &Pearson).unwrap();

            assert_eq!(matches.len(), n.min(others));
            assert!(matches.iter().all(|m| m.entity != reference));
            assert!(matches.iter().all(|m| round_score(m.score) == m.score));

            for pair in matches.windows(2) {
                assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    assert!(pair[0].entity >= pair[1].entity);
                }
            }
        }
    }
}

#[test]
fn test_similarity_is_symmetric() {
    let dataset = critics();
    let names: Vec<&str> = dataset.entities().collect();
    for a in &names {
        for b in &names {
            let ab = sim_pearson(&dataset, a, b).unwrap();
            let ba = sim_pearson(&dataset, b, a).unwrap();
            assert!((ab - ba).abs() < 1e-9);
        }
    }
}

#[test]
fn test_missing_identifiers() {
    let dataset = critics();
    assert!(matches!(
        sim_pearson(&dataset, "Lisa Rose", "Nobody"),
        Err(Error::EntityNotFound(ref id)) if id == "Nobody"
    ));
    assert!(matches!(
        top_matches(&dataset, "Nobody", 3, &Pearson),
        Err(Error::EntityNotFound(ref id)) if id == "Nobody"
    ));
    assert!(top_matches_par(&dataset, "Nobody", 3, &Pearson).is_err());
}

#[test]
fn test_dataset_not_mutated() {
    let dataset = critics();
    let before = dataset.clone();

    top_matches(&dataset, "Lisa Rose", 10, &Pearson).unwrap();
    top_matches_par(&dataset, "Toby", 10, &Pearson).unwrap();
    sim_pearson(&dataset, "Toby", "Gene Seymour").unwrap();

    assert_eq!(dataset, before);
}

#[test]
fn test_item_similarity_via_transpose() {
    let items = critics().transpose();
    let matches = top_matches(&items, "Superman Returns", 3, &Pearson).unwrap();

    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0].entity, "You, Me and Dupree");
    assert_eq!(matches[0].score, 0.66);
}

#[test]
fn test_ranker_with_config() {
    let dataset = critics();
    let ranker = Ranker::with_config(Pearson, MatchConfig { limit: 5 });
    let matches = ranker.top_matches(&dataset, "Lisa Rose").unwrap();
    assert_eq!(matches.len(), 5);
    assert_eq!(top_matches_default(&dataset, "Lisa Rose").unwrap(), matches[..3].to_vec());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&critics()).unwrap().as_bytes())
        .unwrap();

    let loaded = Dataset::from_json_file(file.path()).unwrap();
    assert_eq!(loaded, critics());
}

#[test]
fn test_load_rejects_non_finite() {
    // serde_json cannot express NaN, so build it in memory and validate
    let mut dataset = critics();
    dataset.rate("Toby", "Just My Luck", f64::INFINITY);
    assert!(matches!(
        dataset.validate(),
        Err(Error::InvalidRating { .. })
    ));
}

#[test]
fn test_round_score_matches_half_even() {
    let cases = [
        (0.125, 0.12),
        (0.625, 0.62),
        (-0.125, -0.12),
        (0.7949999999999999, 0.79),
    ];
    for (raw, rounded) in cases {
        assert_eq!(round_score(raw), rounded, "round_score({})", raw);
    }
}
