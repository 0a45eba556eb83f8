//! All-time standings aggregated from recorded competition winners.

use std::collections::HashMap;

/// Wins and summed winning gain of one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnerTotal {
    pub player_name: String,
    pub wins: u32,
    pub total_gain: i64,
}

/// Largest gain recorded by a single competition winner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleGain {
    pub player_name: String,
    pub competition_id: i64,
    pub metric_gain: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllTimeStandings {
    /// Highest SOTW totals first
    pub sotw: Vec<WinnerTotal>,
    /// Highest BOTW totals first
    pub botw: Vec<WinnerTotal>,
    /// Player with the highest combined total over both tracks
    pub overall: Option<WinnerTotal>,
    pub highest_single: Option<SingleGain>,
}

/// Sums `winners` per player, highest total first with ties broken by name.
pub fn winner_totals(winners: &[entity::competition_winner::Model]) -> Vec<WinnerTotal> {
    let mut by_player: HashMap<&str, WinnerTotal> = HashMap::new();
    for winner in winners {
        let total = by_player
            .entry(winner.player_name.as_str())
            .or_insert_with(|| WinnerTotal {
                player_name: winner.player_name.clone(),
                wins: 0,
                total_gain: 0,
            });
        total.wins += 1;
        total.total_gain = total.total_gain.saturating_add(winner.metric_gain);
    }

    let mut totals: Vec<WinnerTotal> = by_player.into_values().collect();
    totals.sort_by(|a, b| {
        b.total_gain
            .cmp(&a.total_gain)
            .then_with(|| a.player_name.cmp(&b.player_name))
    });
    totals
}

/// Winner with the largest single gain; the earlier competition wins a tie.
pub fn highest_single_gain(winners: &[entity::competition_winner::Model]) -> Option<SingleGain> {
    winners
        .iter()
        .max_by(|a, b| {
            a.metric_gain
                .cmp(&b.metric_gain)
                .then_with(|| b.competition_id.cmp(&a.competition_id))
        })
        .map(|winner| SingleGain {
            player_name: winner.player_name.clone(),
            competition_id: winner.competition_id,
            metric_gain: winner.metric_gain,
        })
}
