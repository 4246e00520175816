use player_scraper::{Metric, Position};

/// Relative metric weights for one position.
///
/// Weights are not required to sum to 1; the calculator divides by the
/// weights of the metrics actually present on a record.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    position: Position,
    weights: Vec<(Metric, f64)>,
}

impl WeightTable {
    pub fn new(position: Position, weights: Vec<(Metric, f64)>) -> Self {
        Self { position, weights }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        self.weights.iter().copied()
    }

    pub fn weight(&self, metric: Metric) -> Option<f64> {
        self.weights.iter().find(|(m, _)| *m == metric).map(|(_, w)| *w)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.weights.iter().map(|(_, w)| w).sum()
    }
}

/// The four position tables, built once and shared read-only
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTables {
    pub qb: WeightTable,
    pub rb: WeightTable,
    pub wr: WeightTable,
    pub te: WeightTable,
}

impl Default for WeightTables {
    fn default() -> Self {
        Self::standard()
    }
}

impl WeightTables {
    pub fn standard() -> Self {
        Self {
            qb: WeightTable::new(
                Position::Qb,
                vec![
                    (Metric::PassAttempts, 0.15),         // Volume
                    (Metric::CompletionPercentage, 0.10), // Efficiency
                    (Metric::YardsPerAttempt, 0.15),      // Efficiency
                    (Metric::PassTds, 0.20),              // Scoring
                    (Metric::RushYards, 0.15),            // Rushing upside
                    (Metric::RushTds, 0.10),              // Rushing scoring
                    (Metric::FantasyPpg, 0.15),           // Overall production
                ],
            ),
            rb: WeightTable::new(
                Position::Rb,
                vec![
                    (Metric::RushAttempts, 0.20),
                    (Metric::YardsPerRush, 0.15),
                    (Metric::RushTds, 0.20),
                    (Metric::Targets, 0.15),
                    (Metric::CatchRate, 0.10),
                    (Metric::FantasyPpg, 0.20),
                ],
            ),
            wr: receiver_table(Position::Wr),
            te: receiver_table(Position::Te),
        }
    }

    pub fn for_position(&self, position: Position) -> &WeightTable {
        match position {
            Position::Qb => &self.qb,
            Position::Rb => &self.rb,
            Position::Wr => &self.wr,
            Position::Te => &self.te,
        }
    }
}

/// WR and TE share one weighting
fn receiver_table(position: Position) -> WeightTable {
    WeightTable::new(
        position,
        vec![
            (Metric::Targets, 0.20),
            (Metric::Receptions, 0.15),
            (Metric::YardsPerReception, 0.15),
            (Metric::RecTds, 0.20),
            (Metric::CatchRate, 0.10),
            (Metric::FantasyPpg, 0.20),
        ],
    )
}
