use serde::{Deserialize, Serialize};

/// Sport category attached to every match. Serialized lowercase; note
/// `basket` (not `basketball`) is the wire tag the site filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Football,
    Hockey,
    Basket,
    Esports,
    Tennis,
    Volleyball,
    Mma,
}

impl Sport {
    pub fn as_str(self) -> &'static str {
        match self {
            Sport::Football => "football",
            Sport::Hockey => "hockey",
            Sport::Basket => "basket",
            Sport::Esports => "esports",
            Sport::Tennis => "tennis",
            Sport::Volleyball => "volleyball",
            Sport::Mma => "mma",
        }
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized spreadsheet row. `date`/`time` stay as display strings
/// and the odds stay as decimal strings — numeric validation is the
/// display layer's problem, not ingestion's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub sport: Sport,
    pub league: String,
    pub id: String,
    pub date: String,
    pub time: String,
    pub team1: String,
    pub team2: String,
    pub p1: String,
    pub x: String,
    pub p2: String,
    pub p1x: String,
    pub p12: String,
    pub px2: String,
}

/// The wire document: generation timestamp plus the full match list.
/// Built fresh per ingestion run and never mutated, only replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedDocument {
    pub last_update: Option<String>,
    #[serde(default)]
    pub matches: Vec<Match>,
}

impl FeedDocument {
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Error variant of the wire document, returned with a 502 when an
/// ingestion run fails as a whole. Same field shape the site expects:
/// a null timestamp and an empty match list, never a partial one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedFailure {
    pub error: String,
    pub message: String,
    pub last_update: Option<String>,
    pub matches: Vec<Match>,
}

impl FeedFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: "Failed to fetch data".to_string(),
            message: message.into(),
            last_update: None,
            matches: Vec::new(),
        }
    }
}
