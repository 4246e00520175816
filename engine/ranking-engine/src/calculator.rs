use player_scraper::PlayerRecord;

use crate::weights::WeightTable;

/// Composite score of one record under one weight table.
///
/// Sums `value * weight` over the table's metrics that are present on the
/// record and divides by the sum of those same weights, not the full table's.
/// A record carrying only `fantasyPPG` therefore scores exactly its PPG.
/// NaN values count as 0. Returns 0 when no weighted metric is present.
pub fn composite_score(record: &PlayerRecord, table: &WeightTable) -> f64 {
    let mut score = 0.0;
    let mut total_weight = 0.0;

    for (metric, weight) in table.iter() {
        if let Some(value) = record.metric(metric) {
            let value = if value.is_nan() { 0.0 } else { value };
            score += value * weight;
            total_weight += weight;
        }
    }

    if total_weight > 0.0 {
        score / total_weight
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::WeightTables;
    use player_scraper::{Metric, Position};

    fn qb(name: &str) -> PlayerRecord {
        PlayerRecord::new(name, "BUF", Position::Qb)
    }

    #[test]
    fn test_single_metric_scores_its_raw_value() {
        let tables = WeightTables::standard();
        let record = qb("josh allen").with(Metric::FantasyPpg, 24.8);

        assert!((composite_score(&record, &tables.qb) - 24.8).abs() < 1e-9);
    }

    #[test]
    fn test_divides_by_present_weight_only() {
        let tables = WeightTables::standard();
        // passTds 0.20, rushTds 0.10: (30*0.2 + 6*0.1) / 0.3 = 22
        let record = qb("test").with(Metric::PassTds, 30.0).with(Metric::RushTds, 6.0);

        assert!((composite_score(&record, &tables.qb) - 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_stat_line() {
        let tables = WeightTables::standard();
        let record = qb("josh allen")
            .with(Metric::PassAttempts, 565.0)
            .with(Metric::CompletionPercentage, 63.3)
            .with(Metric::YardsPerAttempt, 7.6)
            .with(Metric::PassTds, 35.0)
            .with(Metric::RushYards, 762.0)
            .with(Metric::RushTds, 15.0)
            .with(Metric::FantasyPpg, 24.8);

        assert!((composite_score(&record, &tables.qb) - 218.74).abs() < 1e-9);
    }

    #[test]
    fn test_metrics_outside_the_table_are_ignored() {
        let tables = WeightTables::standard();
        let record = qb("test").with(Metric::PassYards, 5000.0).with(Metric::FantasyPoints, 400.0);

        assert_eq!(composite_score(&record, &tables.qb), 0.0);
    }

    #[test]
    fn test_empty_record_scores_zero() {
        let tables = WeightTables::standard();
        for position in Position::ALL {
            let record = PlayerRecord::new("nobody", "FA", position);
            assert_eq!(composite_score(&record, tables.for_position(position)), 0.0);
        }
    }

    #[test]
    fn test_present_zero_still_counts_toward_weight() {
        let tables = WeightTables::standard();
        // fantasyPPG 20 (0.15) and a present-but-zero passTds (0.20): 3 / 0.35
        let record = qb("test").with(Metric::FantasyPpg, 20.0).with(Metric::PassTds, 0.0);

        assert!((composite_score(&record, &tables.qb) - 3.0 / 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_non_numeric_value_coerces_to_zero() {
        let tables = WeightTables::standard();
        let record: PlayerRecord = serde_json::from_str(
            r#"{"name":"test","team":"BUF","position":"QB","fantasyPPG":"n/a","passTds":30}"#,
        )
        .unwrap();

        // fantasyPPG present as 0: (0*0.15 + 30*0.2) / 0.35
        assert!((composite_score(&record, &tables.qb) - 6.0 / 0.35).abs() < 1e-9);

        let nan = qb("test").with(Metric::FantasyPpg, f64::NAN);
        assert_eq!(composite_score(&nan, &tables.qb), 0.0);
    }
}
