use leetmetric_engine::{present_empty, present_error, present_stats};
use leetmetric_types::{LookupError, ProfileStats, Tier};

fn labels(stats: &ProfileStats) -> Vec<String> {
    let display = present_stats(stats);
    Tier::ALL
        .iter()
        .map(|&tier| display.tier(tier).percent_label.clone())
        .collect()
}

#[test]
fn test_two_tier_split() {
    let display = present_stats(&ProfileStats::with_counts(10, 5, 0));

    assert_eq!(display.total_solved, 15);
    assert_eq!(labels(&ProfileStats::with_counts(10, 5, 0)), ["66.7%", "33.3%", "0.0%"]);
    assert_eq!(display.tier(Tier::Easy).percent, 66.7);
    assert_eq!(display.tier(Tier::Hard).solved, 0);
}

#[test]
fn test_zero_total_shows_plain_zero_percent() {
    let display = present_stats(&ProfileStats::with_counts(0, 0, 0));

    assert_eq!(display.total_solved, 0);
    assert_eq!(labels(&ProfileStats::default()), ["0%", "0%", "0%"]);
    for tier in &display.tiers {
        assert_eq!(tier.percent, 0.0);
    }
}

#[test]
fn test_three_tier_split() {
    let stats = ProfileStats::with_counts(12, 8, 1);
    let display = present_stats(&stats);

    assert_eq!(display.total_solved, 21);
    assert_eq!(labels(&stats), ["57.1%", "38.1%", "4.8%"]);
}

#[test]
fn test_rank_and_acceptance_labels() {
    let stats = ProfileStats {
        acceptance_rate: Some(61.25),
        ranking: Some(1_234_567),
        ..ProfileStats::with_counts(1, 1, 1)
    };
    let display = present_stats(&stats);

    assert_eq!(display.acceptance_label, "61.25%");
    assert_eq!(display.ranking_label, "#1,234,567");
    assert_eq!(display.ranking, Some(1_234_567));
}

#[test]
fn test_whole_acceptance_rate_has_no_decimal() {
    let stats = ProfileStats {
        acceptance_rate: Some(65.0),
        ..ProfileStats::default()
    };
    assert_eq!(present_stats(&stats).acceptance_label, "65%");
}

#[test]
fn test_absent_or_zero_rank_and_acceptance_are_not_available() {
    let absent = present_stats(&ProfileStats::default());
    assert_eq!(absent.acceptance_label, "N/A");
    assert_eq!(absent.ranking_label, "N/A");

    let zero = present_stats(&ProfileStats {
        acceptance_rate: Some(0.0),
        ranking: Some(0),
        ..ProfileStats::default()
    });
    assert_eq!(zero.acceptance_label, "N/A");
    assert_eq!(zero.ranking_label, "N/A");
    assert_eq!(zero.ranking, None);
}

#[test]
fn test_available_totals_pass_through() {
    let stats = ProfileStats {
        total_easy: Some(830),
        total_hard: Some(740),
        ..ProfileStats::with_counts(3, 0, 1)
    };
    let display = present_stats(&stats);

    assert_eq!(display.tier(Tier::Easy).available, Some(830));
    assert_eq!(display.tier(Tier::Medium).available, None);
    assert_eq!(display.tier(Tier::Hard).available, Some(740));
}

#[test]
fn test_empty_and_error_models_are_cleared() {
    let empty = present_empty();
    assert!(empty.is_cleared());
    assert_eq!(empty.failure, None);

    let failed = present_error(LookupError::UserNotFound);
    assert!(failed.is_cleared());
    assert_eq!(failed.failure, Some(LookupError::UserNotFound));
    assert_eq!(failed.ranking_label, "N/A");
}

#[test]
fn test_display_serializes_raw_numbers() {
    let value = serde_json::to_value(present_stats(&ProfileStats::with_counts(10, 5, 0))).unwrap();

    assert_eq!(value["total_solved"], 15);
    assert_eq!(value["tiers"][0]["tier"], "easy");
    assert_eq!(value["tiers"][0]["percent"], 66.7);
    assert_eq!(value["tiers"][2]["percent_label"], "0.0%");
    assert!(value.get("failure").is_none());
    assert!(value.get("ranking").is_none());
}
