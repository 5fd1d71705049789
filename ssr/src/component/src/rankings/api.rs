use consts::ELO_SERVICE_URL;
use reqwest::Url;

use crate::fetch_state::FetchError;

use super::types::{MatchRecord, RankingEntry};

pub fn top_rankings_url(limit: u32) -> Result<Url, FetchError> {
    let mut url = ELO_SERVICE_URL
        .join("elo/top")
        .map_err(|e| FetchError(format!("failed to build URL: {e}")))?;
    url.query_pairs_mut()
        .append_pair("limit", &limit.to_string());
    Ok(url)
}

pub fn match_history_url(wrestler: &str, limit: u32) -> Result<Url, FetchError> {
    let mut url = ELO_SERVICE_URL
        .join("matches")
        .map_err(|e| FetchError(format!("failed to build URL: {e}")))?;
    url.query_pairs_mut()
        .append_pair("wrestler", wrestler)
        .append_pair("limit", &limit.to_string());
    Ok(url)
}

// Client-side function to fetch the top-N leaderboard snapshot
pub async fn fetch_top_rankings(limit: u32) -> Result<Vec<RankingEntry>, FetchError> {
    let url = top_rankings_url(limit)?;

    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError(format!("request failed: {e}")))?;

    if response.status().is_success() {
        response
            .json()
            .await
            .map_err(|e| FetchError(format!("failed to parse response: {e}")))
    } else {
        let status = response.status();
        Err(FetchError(format!("service returned {status}")))
    }
}

// Client-side function to fetch one wrestler's match records
pub async fn fetch_match_history(
    wrestler: &str,
    limit: u32,
) -> Result<Vec<MatchRecord>, FetchError> {
    let url = match_history_url(wrestler, limit)?;

    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError(format!("request failed: {e}")))?;

    if response.status().is_success() {
        response
            .json()
            .await
            .map_err(|e| FetchError(format!("failed to parse response: {e}")))
    } else {
        let status = response.status();
        Err(FetchError(format!("service returned {status}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_rankings_url_carries_limit() {
        let url = top_rankings_url(50).unwrap();
        assert!(url.path().ends_with("/elo/top"));
        assert_eq!(url.query(), Some("limit=50"));
    }

    #[test]
    fn match_history_url_encodes_the_name() {
        let url = match_history_url("Stone Cold", 1000).unwrap();
        assert!(url.path().ends_with("/matches"));
        assert_eq!(url.query(), Some("wrestler=Stone+Cold&limit=1000"));
    }
}
