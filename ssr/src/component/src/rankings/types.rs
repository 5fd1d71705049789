use serde::{Deserialize, Serialize};

/// Placeholder shown when a match has no recorded type.
pub const MATCH_TYPE_FALLBACK: &str = "—";

/// One leaderboard row as returned by `GET /elo/top`. The position in the
/// returned sequence is the rank; the service owns the ordering.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct RankingEntry {
    #[serde(rename = "wrestler")]
    pub name: String,
    #[serde(rename = "elo")]
    pub score: f64,
}

impl RankingEntry {
    pub fn display_score(&self) -> String {
        format!("{:.1}", self.score)
    }

    pub fn profile_href(&self) -> String {
        format!("/entity/{}", urlencoding::encode(&self.name))
    }
}

/// One match row as returned by `GET /matches`. `winners` and `losers`
/// are comma-separated name lists; the backend row carries extra columns
/// (ple, time, title_change, ...) which are ignored here.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct MatchRecord {
    pub id: i64,
    pub date: String,
    pub show: String,
    #[serde(default)]
    pub match_type: Option<String>,
    pub winners: String,
    pub losers: String,
    pub finish: String,
}

impl MatchRecord {
    pub fn type_label(&self) -> String {
        match self.match_type.as_deref() {
            None | Some("") => MATCH_TYPE_FALLBACK.to_string(),
            Some(t) => t.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchRole {
    Won,
    Other,
}

/// Infers the viewed wrestler's side by substring membership against the
/// serialized `winners` list. A wrestler named in neither field lands in
/// `Other` as well; that mirrors the upstream display behavior.
pub fn role_of(name: &str, record: &MatchRecord) -> MatchRole {
    if record.winners.contains(name) {
        MatchRole::Won
    } else {
        MatchRole::Other
    }
}

/// What the Opponents column shows for one record.
#[derive(Clone, Debug, PartialEq)]
pub enum OpponentsDisplay {
    /// The viewed wrestler won: emphasize the losers, don't echo winners.
    Defeated { losers: String },
    /// Everything else: winners first, losers emphasized.
    LostTo { winners: String, losers: String },
}

pub fn opponents_display(name: &str, record: &MatchRecord) -> OpponentsDisplay {
    match role_of(name, record) {
        MatchRole::Won => OpponentsDisplay::Defeated {
            losers: record.losers.clone(),
        },
        MatchRole::Other => OpponentsDisplay::LostTo {
            winners: record.winners.clone(),
            losers: record.losers.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(winners: &str, losers: &str) -> MatchRecord {
        MatchRecord {
            id: 1,
            date: "2020-01-01".into(),
            show: "Raw".into(),
            match_type: Some("".into()),
            winners: winners.into(),
            losers: losers.into(),
            finish: "Pinfall".into(),
        }
    }

    #[test]
    fn ranking_entry_deserializes_wire_names() {
        let entry: RankingEntry = serde_json::from_str(r#"{"wrestler":"X","elo":1500.0}"#).unwrap();
        assert_eq!(entry.name, "X");
        assert_eq!(entry.display_score(), "1500.0");
        assert_eq!(entry.profile_href(), "/entity/X");
    }

    #[test]
    fn ranking_order_is_preserved() {
        let entries: Vec<RankingEntry> = serde_json::from_str(
            r#"[{"wrestler":"B","elo":1600.5},{"wrestler":"A","elo":1580.25}]"#,
        )
        .unwrap();
        // position is the rank: the view never re-sorts
        assert_eq!(entries[0].name, "B");
        assert_eq!(entries[1].name, "A");
        assert_eq!(entries[1].display_score(), "1580.2");
    }

    #[test]
    fn profile_href_encodes_spaces() {
        let entry = RankingEntry {
            name: "Stone Cold".into(),
            score: 1500.0,
        };
        assert_eq!(entry.profile_href(), "/entity/Stone%20Cold");
    }

    #[test]
    fn match_record_ignores_extra_backend_columns() {
        let raw = r#"{
            "id": 42, "date": "2020-01-01", "show": "Raw", "ple": false,
            "match_type": "Tables", "winners": "X", "losers": "Y",
            "time": "12:30", "finish": "Pinfall", "title_change": false,
            "multi_man": false, "stipulation": true, "category": null
        }"#;
        let m: MatchRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(m.id, 42);
        assert_eq!(m.type_label(), "Tables");
    }

    #[test]
    fn missing_or_empty_match_type_renders_fallback() {
        let m: MatchRecord = serde_json::from_str(
            r#"{"id":1,"date":"2020-01-01","show":"Raw","winners":"X","losers":"Y","finish":"Pinfall"}"#,
        )
        .unwrap();
        assert_eq!(m.match_type, None);
        assert_eq!(m.type_label(), MATCH_TYPE_FALLBACK);

        assert_eq!(record("X", "Y").type_label(), MATCH_TYPE_FALLBACK);
    }

    #[test]
    fn winner_side_emphasizes_losers_only() {
        let m = record("X", "Y");
        assert_eq!(role_of("X", &m), MatchRole::Won);
        assert_eq!(
            opponents_display("X", &m),
            OpponentsDisplay::Defeated { losers: "Y".into() }
        );
    }

    #[test]
    fn loser_side_renders_winners_then_emphasized_losers() {
        let m = record("Y", "X");
        assert_eq!(role_of("X", &m), MatchRole::Other);
        assert_eq!(
            opponents_display("X", &m),
            OpponentsDisplay::LostTo {
                winners: "Y".into(),
                losers: "X".into(),
            }
        );
    }

    #[test]
    fn absent_from_both_sides_falls_into_other() {
        // deliberate reproduction of the upstream two-branch rule
        let m = record("A", "B");
        assert_eq!(role_of("X", &m), MatchRole::Other);
        assert_eq!(
            opponents_display("X", &m),
            OpponentsDisplay::LostTo {
                winners: "A".into(),
                losers: "B".into(),
            }
        );
    }

    #[test]
    fn zero_matches_is_an_empty_history_not_an_error() {
        use crate::fetch_state::FetchState;

        let records: Vec<MatchRecord> = serde_json::from_str("[]").unwrap();
        assert!(records.is_empty());

        // an empty snapshot commits as Ready, so the view renders an
        // empty table body rather than the error branch
        let state: FetchState<Vec<MatchRecord>> = Ok(records).into();
        assert_eq!(state, FetchState::Ready(Vec::new()));
    }

    #[test]
    fn derived_display_is_idempotent() {
        let m = record("X, Z", "Y");
        assert_eq!(opponents_display("X", &m), opponents_display("X", &m));
        assert_eq!(m.type_label(), m.type_label());
    }
}
