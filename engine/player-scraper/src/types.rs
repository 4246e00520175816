use chrono::{DateTime, Utc};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Fantasy position. Rankings are always computed per position, never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    #[serde(alias = "qb")]
    Qb,
    #[serde(alias = "rb")]
    Rb,
    #[serde(alias = "wr")]
    Wr,
    #[serde(alias = "te")]
    Te,
}

impl Position {
    pub const ALL: [Position; 4] = [Position::Qb, Position::Rb, Position::Wr, Position::Te];

    /// Upper-case code (e.g., "QB")
    pub fn code(self) -> &'static str {
        match self {
            Position::Qb => "QB",
            Position::Rb => "RB",
            Position::Wr => "WR",
            Position::Te => "TE",
        }
    }

    /// Lower-case form used in URLs and file names (e.g., "qb")
    pub fn slug(self) -> &'static str {
        match self {
            Position::Qb => "qb",
            Position::Rb => "rb",
            Position::Wr => "wr",
            Position::Te => "te",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a string does not name one of the four positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPosition(pub String);

impl fmt::Display for UnknownPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid position: {}", self.0)
    }
}

impl std::error::Error for UnknownPosition {}

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "QB" => Ok(Position::Qb),
            "RB" => Ok(Position::Rb),
            "WR" => Ok(Position::Wr),
            "TE" => Ok(Position::Te),
            _ => Err(UnknownPosition(s.to_string())),
        }
    }
}

/// Every statistic a data source can attach to a player record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    PassAttempts,
    PassCompletions,
    PassYards,
    PassTds,
    PassInts,
    Sacks,
    SackYards,
    CompletionPercentage,
    YardsPerAttempt,
    RushAttempts,
    RushYards,
    RushTds,
    RushFirstDowns,
    RushLong,
    YardsPerRush,
    Targets,
    Receptions,
    RecYards,
    RecTds,
    RecFirstDowns,
    RecLong,
    YardsPerReception,
    CatchRate,
    FantasyPoints,
    FantasyPpg,
}

impl Metric {
    pub const COUNT: usize = 25;

    pub const ALL: [Metric; Metric::COUNT] = [
        Metric::PassAttempts,
        Metric::PassCompletions,
        Metric::PassYards,
        Metric::PassTds,
        Metric::PassInts,
        Metric::Sacks,
        Metric::SackYards,
        Metric::CompletionPercentage,
        Metric::YardsPerAttempt,
        Metric::RushAttempts,
        Metric::RushYards,
        Metric::RushTds,
        Metric::RushFirstDowns,
        Metric::RushLong,
        Metric::YardsPerRush,
        Metric::Targets,
        Metric::Receptions,
        Metric::RecYards,
        Metric::RecTds,
        Metric::RecFirstDowns,
        Metric::RecLong,
        Metric::YardsPerReception,
        Metric::CatchRate,
        Metric::FantasyPoints,
        Metric::FantasyPpg,
    ];

    /// JSON / CSV column name
    pub fn wire_name(self) -> &'static str {
        match self {
            Metric::PassAttempts => "passAttempts",
            Metric::PassCompletions => "passCompletions",
            Metric::PassYards => "passYards",
            Metric::PassTds => "passTds",
            Metric::PassInts => "passInts",
            Metric::Sacks => "sacks",
            Metric::SackYards => "sackYards",
            Metric::CompletionPercentage => "completionPercentage",
            Metric::YardsPerAttempt => "yardsPerAttempt",
            Metric::RushAttempts => "rushAttempts",
            Metric::RushYards => "rushYards",
            Metric::RushTds => "rushTds",
            Metric::RushFirstDowns => "rushFirstDowns",
            Metric::RushLong => "rushLong",
            Metric::YardsPerRush => "yardsPerRush",
            Metric::Targets => "targets",
            Metric::Receptions => "receptions",
            Metric::RecYards => "recYards",
            Metric::RecTds => "recTds",
            Metric::RecFirstDowns => "recFirstDowns",
            Metric::RecLong => "recLong",
            Metric::YardsPerReception => "yardsPerReception",
            Metric::CatchRate => "catchRate",
            Metric::FantasyPoints => "fantasyPoints",
            Metric::FantasyPpg => "fantasyPPG",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Metric> {
        Metric::ALL.iter().copied().find(|metric| metric.wire_name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Statistics attached to one player record.
///
/// Each metric is either present or absent; absence is distinct from a
/// present zero and the composite score depends on that distinction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerStats {
    values: [Option<f64>; Metric::COUNT],
}

impl PlayerStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.values[metric.index()]
    }

    pub fn set(&mut self, metric: Metric, value: f64) {
        self.values[metric.index()] = Some(value);
    }

    pub fn clear(&mut self, metric: Metric) {
        self.values[metric.index()] = None;
    }

    /// Builder-style setter
    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        self.set(metric, value);
        self
    }

    /// Present metrics in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.iter().filter_map(move |metric| self.get(*metric).map(|value| (*metric, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}

impl Serialize for PlayerStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present = self.values.iter().filter(|value| value.is_some()).count();
        let mut map = serializer.serialize_map(Some(present))?;
        for (metric, value) in self.iter() {
            map.serialize_entry(metric.wire_name(), &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PlayerStats {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PlayerStatsVisitor)
    }
}

struct PlayerStatsVisitor;

impl<'de> Visitor<'de> for PlayerStatsVisitor {
    type Value = PlayerStats;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of metric names to numbers")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut stats = PlayerStats::new();
        while let Some(key) = access.next_key::<String>()? {
            match Metric::from_wire_name(&key) {
                Some(metric) => {
                    if let LenientNumber(Some(value)) = access.next_value()? {
                        stats.set(metric, value);
                    }
                }
                None => {
                    access.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(stats)
    }
}

/// A metric value as it may appear in a cache file.
///
/// Numbers decode as-is, numeric strings (older caches stored rounded values
/// as text) are parsed, any other string or boolean coerces to 0 and null
/// means the metric is absent.
struct LenientNumber(Option<f64>);

impl<'de> Deserialize<'de> for LenientNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LenientNumberVisitor)
    }
}

struct LenientNumberVisitor;

impl<'de> Visitor<'de> for LenientNumberVisitor {
    type Value = LenientNumber;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, a numeric string or null")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(LenientNumber(Some(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(LenientNumber(Some(v as f64)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(LenientNumber(Some(v as f64)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(LenientNumber(Some(parse_number_or_zero(v))))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
        Ok(LenientNumber(Some(0.0)))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(LenientNumber(None))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(LenientNumber(None))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        LenientNumber::deserialize(deserializer)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(LenientNumber(Some(0.0)))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(LenientNumber(Some(0.0)))
    }
}

/// Parse a numeric cell, treating anything unparsable (or NaN) as 0
pub fn parse_number_or_zero(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => 0.0,
    }
}

/// One player's season statistics for one position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Player name, normalized by the scraper (e.g., "josh allen")
    pub name: String,
    /// Team abbreviation (e.g., "BUF"), or the raw team name when unknown
    pub team: String,
    pub position: Position,
    #[serde(flatten)]
    pub stats: PlayerStats,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, team: impl Into<String>, position: Position) -> Self {
        Self { name: name.into(), team: team.into(), position, stats: PlayerStats::new() }
    }

    /// Builder-style metric setter
    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        self.stats.set(metric, value);
        self
    }

    pub fn metric(&self, metric: Metric) -> Option<f64> {
        self.stats.get(metric)
    }
}

/// Raw records for every position, as returned by a stats provider.
///
/// When decoding, the array a record sits in decides its position. Older
/// cache files carry the raw source `position` ("FB", "") or omit the team,
/// and those records still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BundleData")]
pub struct PositionData {
    #[serde(rename = "QB", default)]
    pub qb: Vec<PlayerRecord>,
    #[serde(rename = "RB", default)]
    pub rb: Vec<PlayerRecord>,
    #[serde(rename = "WR", default)]
    pub wr: Vec<PlayerRecord>,
    #[serde(rename = "TE", default)]
    pub te: Vec<PlayerRecord>,
    /// When the bundle was assembled; absent in older cache files
    #[serde(rename = "lastUpdated", default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

/// A record as stored in a bundle array
#[derive(Deserialize)]
struct BundleRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    team: String,
    #[serde(rename = "position", default)]
    _position: IgnoredAny,
    #[serde(flatten)]
    stats: PlayerStats,
}

impl BundleRecord {
    fn into_record(self, position: Position) -> PlayerRecord {
        PlayerRecord { name: self.name, team: self.team, position, stats: self.stats }
    }
}

#[derive(Deserialize)]
struct BundleData {
    #[serde(rename = "QB", default)]
    qb: Vec<BundleRecord>,
    #[serde(rename = "RB", default)]
    rb: Vec<BundleRecord>,
    #[serde(rename = "WR", default)]
    wr: Vec<BundleRecord>,
    #[serde(rename = "TE", default)]
    te: Vec<BundleRecord>,
    #[serde(rename = "lastUpdated", default)]
    last_updated: Option<DateTime<Utc>>,
}

impl From<BundleData> for PositionData {
    fn from(bundle: BundleData) -> Self {
        let slot = |records: Vec<BundleRecord>, position: Position| -> Vec<PlayerRecord> {
            records.into_iter().map(|r| r.into_record(position)).collect()
        };

        Self {
            qb: slot(bundle.qb, Position::Qb),
            rb: slot(bundle.rb, Position::Rb),
            wr: slot(bundle.wr, Position::Wr),
            te: slot(bundle.te, Position::Te),
            last_updated: bundle.last_updated,
        }
    }
}

impl PositionData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self, position: Position) -> &[PlayerRecord] {
        match position {
            Position::Qb => &self.qb,
            Position::Rb => &self.rb,
            Position::Wr => &self.wr,
            Position::Te => &self.te,
        }
    }

    pub fn players_mut(&mut self, position: Position) -> &mut Vec<PlayerRecord> {
        match position {
            Position::Qb => &mut self.qb,
            Position::Rb => &mut self.rb,
            Position::Wr => &mut self.wr,
            Position::Te => &mut self.te,
        }
    }

    pub fn total_players(&self) -> usize {
        Position::ALL.iter().map(|position| self.players(*position).len()).sum()
    }

    /// Stamp the bundle with the current time
    pub fn touch(&mut self) {
        self.last_updated = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_parsing() {
        assert_eq!("qb".parse::<Position>().unwrap(), Position::Qb);
        assert_eq!(" TE ".parse::<Position>().unwrap(), Position::Te);
        assert!("k".parse::<Position>().is_err());
        assert_eq!(Position::Wr.to_string(), "WR");
        assert_eq!(Position::Rb.slug(), "rb");
    }

    #[test]
    fn test_metric_wire_names_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_wire_name(metric.wire_name()), Some(metric));
        }
        assert_eq!(Metric::FantasyPpg.wire_name(), "fantasyPPG");
        assert_eq!(Metric::from_wire_name("compositeScore"), None);
    }

    #[test]
    fn test_record_serializes_flat_and_omits_absent_metrics() {
        let record = PlayerRecord::new("josh allen", "BUF", Position::Qb)
            .with(Metric::PassAttempts, 565.0)
            .with(Metric::FantasyPpg, 24.8);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["name"], "josh allen");
        assert_eq!(value["position"], "QB");
        assert_eq!(value["passAttempts"], 565.0);
        assert_eq!(value["fantasyPPG"], 24.8);
        assert!(value.get("rushYards").is_none());
    }

    #[test]
    fn test_lenient_metric_decoding() {
        let json = r#"{
            "name": "josh allen",
            "team": "BUF",
            "position": "qb",
            "completionPercentage": "63.3",
            "yardsPerAttempt": "n/a",
            "passTds": null,
            "rushYards": 762,
            "someUnknownField": [1, 2, 3]
        }"#;

        let record: PlayerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.position, Position::Qb);
        assert_eq!(record.metric(Metric::CompletionPercentage), Some(63.3));
        assert_eq!(record.metric(Metric::YardsPerAttempt), Some(0.0));
        assert_eq!(record.metric(Metric::PassTds), None);
        assert_eq!(record.metric(Metric::RushYards), Some(762.0));
    }

    #[test]
    fn test_bundle_slot_decides_position() {
        let json = r#"{
            "RB": [
                {"name": "kyle juszczyk", "team": "SFO", "position": "FB", "rushAttempts": 21},
                {"name": "depth back", "position": "", "rushAttempts": "4"}
            ],
            "TE": [{"name": "travis kelce", "team": "KC", "position": null, "targets": 121}]
        }"#;

        let data: PositionData = serde_json::from_str(json).unwrap();
        assert_eq!(data.rb.len(), 2);
        assert_eq!(data.rb[0].position, Position::Rb);
        assert_eq!(data.rb[0].metric(Metric::RushAttempts), Some(21.0));
        assert_eq!(data.rb[1].team, "");
        assert_eq!(data.rb[1].metric(Metric::RushAttempts), Some(4.0));
        assert_eq!(data.te[0].position, Position::Te);
        assert!(data.rb[0].metric(Metric::PassAttempts).is_none());
    }

    #[test]
    fn test_position_data_missing_keys_default_to_empty() {
        let data: PositionData = serde_json::from_str(r#"{"QB": []}"#).unwrap();
        assert!(data.players(Position::Rb).is_empty());
        assert_eq!(data.total_players(), 0);
        assert!(data.last_updated.is_none());
    }
}
