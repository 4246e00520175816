//! Name and team normalization shared by every data source

/// Normalize a player name so the same player matches across sources.
///
/// Lower-cases, drops everything except ASCII letters and whitespace, then
/// collapses whitespace runs ("A.J. Brown" -> "aj brown").
pub fn normalize_player_name(name: &str) -> String {
    let filtered: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();

    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapse whitespace runs but keep capitalization and punctuation
pub fn clean_display_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

const TEAMS: [(&str, &str); 32] = [
    ("Arizona Cardinals", "ARI"),
    ("Atlanta Falcons", "ATL"),
    ("Baltimore Ravens", "BAL"),
    ("Buffalo Bills", "BUF"),
    ("Carolina Panthers", "CAR"),
    ("Chicago Bears", "CHI"),
    ("Cincinnati Bengals", "CIN"),
    ("Cleveland Browns", "CLE"),
    ("Dallas Cowboys", "DAL"),
    ("Denver Broncos", "DEN"),
    ("Detroit Lions", "DET"),
    ("Green Bay Packers", "GB"),
    ("Houston Texans", "HOU"),
    ("Indianapolis Colts", "IND"),
    ("Jacksonville Jaguars", "JAX"),
    ("Kansas City Chiefs", "KC"),
    ("Las Vegas Raiders", "LV"),
    ("Los Angeles Chargers", "LAC"),
    ("Los Angeles Rams", "LAR"),
    ("Miami Dolphins", "MIA"),
    ("Minnesota Vikings", "MIN"),
    ("New England Patriots", "NE"),
    ("New Orleans Saints", "NO"),
    ("New York Giants", "NYG"),
    ("New York Jets", "NYJ"),
    ("Philadelphia Eagles", "PHI"),
    ("Pittsburgh Steelers", "PIT"),
    ("San Francisco 49ers", "SF"),
    ("Seattle Seahawks", "SEA"),
    ("Tampa Bay Buccaneers", "TB"),
    ("Tennessee Titans", "TEN"),
    ("Washington Commanders", "WAS"),
];

/// Map a franchise name to its abbreviation.
///
/// Known abbreviations map to themselves; anything unrecognized is returned
/// with whitespace collapsed but otherwise unchanged.
pub fn team_abbreviation(team: &str) -> String {
    let cleaned = clean_display_name(team);

    TEAMS
        .iter()
        .find(|(full, abbr)| *full == cleaned || *abbr == cleaned)
        .map(|(_, abbr)| (*abbr).to_string())
        .unwrap_or(cleaned)
}
