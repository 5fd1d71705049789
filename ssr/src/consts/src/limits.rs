/// How many leaderboard entries the rankings page requests.
pub const TOP_RANKINGS_LIMIT: u32 = 50;

/// Cap on match records requested for a single wrestler.
pub const MATCH_HISTORY_LIMIT: u32 = 1000;
