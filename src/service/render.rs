//! Discord message rendering for announcements and leaderboards.
//!
//! Rendering is pure: the same competition, options and counts always produce the same
//! [`MessageContent`], which is what makes [`signature`] usable for change detection.

use entity::sea_orm_active_enums::Track;
use num_format::{Locale, ToFormattedString};

use crate::{
    error::Error,
    model::{
        discord::{
            ActionRow, Embed, EmbedField, EmbedFooter, MessageContent, SelectMenu, SelectOption,
            ACTION_ROW, MAX_SELECT_OPTIONS, STRING_SELECT,
        },
        hall_of_fame::{AllTimeStandings, WinnerTotal},
        wom::Standing,
    },
};

/// Number of participants shown on a leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;

const WOM_COMPETITION_URL: &str = "https://wiseoldman.net/competitions";

const SOTW_COLOR: u32 = 0x2E_CC_71;
const BOTW_COLOR: u32 = 0xE7_4C_3C;
const HALL_OF_FAME_COLOR: u32 = 0xF1_C4_0F;

fn track_color(track: Track) -> u32 {
    match track {
        Track::Sotw => SOTW_COLOR,
        Track::Botw => BOTW_COLOR,
    }
}

/// Select menu id for a track's vote; the vote handler routes on it.
pub fn vote_menu_id(track: Track) -> String {
    format!("{}_vote", track.label().to_lowercase())
}

/// Human readable metric name, `"chambers_of_xeric"` becomes `"Chambers Of Xeric"`.
pub fn metric_label(metric: &str) -> String {
    metric
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Competition title, e.g. `"ZULRAH BOTW"`.
pub fn competition_title(track: Track, metric: &str) -> String {
    format!("{} {}", metric.replace('_', " ").to_uppercase(), track.label())
}

/// Formats a progress amount with thousands separators, `1234567.0` becomes `"1,234,567"`.
pub fn format_amount(amount: f64) -> String {
    (amount.round() as i64).to_formatted_string(&Locale::en)
}

fn discord_timestamp(at: chrono::NaiveDateTime) -> String {
    format!("<t:{}:F>", at.and_utc().timestamp())
}

fn competition_url(competition_id: i64) -> String {
    format!("{}/{}", WOM_COMPETITION_URL, competition_id)
}

/// Announcement for a scheduled or active competition with the vote menu for the next one.
///
/// `counts` holds votes per choice; options without votes show zero.
pub fn announcement(
    competition: &entity::competition::Model,
    options: &[String],
    counts: &[(String, i64)],
) -> MessageContent {
    let count_of = |metric: &str| {
        counts
            .iter()
            .find(|(choice, _)| choice == metric)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    };

    let mut fields = vec![
        EmbedField {
            name: "Metric".to_string(),
            value: metric_label(&competition.metric),
            inline: true,
        },
        EmbedField {
            name: "Starts".to_string(),
            value: discord_timestamp(competition.starts_at),
            inline: true,
        },
        EmbedField {
            name: "Ends".to_string(),
            value: discord_timestamp(competition.ends_at),
            inline: true,
        },
    ];

    let mut voted: Vec<&(String, i64)> = counts.iter().filter(|(_, count)| *count > 0).collect();
    voted.truncate(5);
    if !voted.is_empty() {
        let lines: Vec<String> = voted
            .iter()
            .map(|(choice, count)| format!("{}: **{}**", metric_label(choice), count))
            .collect();
        fields.push(EmbedField {
            name: "Leading votes".to_string(),
            value: lines.join("\n"),
            inline: false,
        });
    }

    let select_options: Vec<SelectOption> = options
        .iter()
        .take(MAX_SELECT_OPTIONS)
        .map(|metric| SelectOption {
            label: metric_label(metric),
            value: metric.clone(),
            description: Some(format!("{} vote(s)", count_of(metric))),
        })
        .collect();

    let components = if select_options.is_empty() {
        Vec::new()
    } else {
        vec![ActionRow {
            kind: ACTION_ROW,
            components: vec![SelectMenu {
                kind: STRING_SELECT,
                custom_id: vote_menu_id(competition.track),
                placeholder: "Vote for the next metric".to_string(),
                options: select_options,
            }],
        }]
    };

    MessageContent {
        content: None,
        embeds: vec![Embed {
            title: competition.title.clone(),
            description: Some(format!(
                "Compete in **{}** and vote below for next week's {}.",
                metric_label(&competition.metric),
                competition.track.label()
            )),
            url: Some(competition_url(competition.id)),
            color: track_color(competition.track),
            fields,
            footer: Some(EmbedFooter {
                text: format!("Competition #{}", competition.id),
            }),
        }],
        components,
    }
}

fn standings_lines(standings: &[Standing]) -> Vec<String> {
    standings
        .iter()
        .take(LEADERBOARD_SIZE)
        .enumerate()
        .map(|(i, standing)| {
            format!(
                "{}. **{}** - {}",
                i + 1,
                standing.player_name,
                format_amount(standing.gained)
            )
        })
        .collect()
}

/// Live leaderboard of an active competition; `standings` must already be sorted.
pub fn leaderboard(
    competition: &entity::competition::Model,
    standings: &[Standing],
) -> MessageContent {
    let lines = standings_lines(standings);
    let description = if lines.is_empty() {
        "No participants yet.".to_string()
    } else {
        lines.join("\n")
    };

    MessageContent {
        content: None,
        embeds: vec![Embed {
            title: format!("{} Leaderboard", competition.title),
            description: Some(description),
            url: Some(competition_url(competition.id)),
            color: track_color(competition.track),
            fields: Vec::new(),
            footer: Some(EmbedFooter {
                text: format!("Ends {}", discord_timestamp(competition.ends_at)),
            }),
        }],
        components: Vec::new(),
    }
}

/// Final results of an ended competition, listing only participants who gained progress.
pub fn final_results(
    competition: &entity::competition::Model,
    standings: &[Standing],
) -> MessageContent {
    let gained: Vec<Standing> = standings
        .iter()
        .filter(|standing| standing.gained > 0.0)
        .cloned()
        .collect();
    let lines = standings_lines(&gained);

    let description = match gained.first() {
        Some(winner) => format!(
            "Congratulations to **{}** for winning {}!\n\n{}",
            winner.player_name,
            metric_label(&competition.metric),
            lines.join("\n")
        ),
        None => "Nobody gained progress this week.".to_string(),
    };

    MessageContent {
        content: None,
        embeds: vec![Embed {
            title: format!("{} Final Results", competition.title),
            description: Some(description),
            url: Some(competition_url(competition.id)),
            color: HALL_OF_FAME_COLOR,
            fields: Vec::new(),
            footer: None,
        }],
        components: Vec::new(),
    }
}

fn winner_total_lines(totals: &[WinnerTotal]) -> String {
    if totals.is_empty() {
        return "No winners yet.".to_string();
    }

    totals
        .iter()
        .take(LEADERBOARD_SIZE)
        .enumerate()
        .map(|(i, total)| {
            format!(
                "{}. **{}** - {} ({} {})",
                i + 1,
                total.player_name,
                total.total_gain.to_formatted_string(&Locale::en),
                total.wins,
                if total.wins == 1 { "win" } else { "wins" }
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// All-time hall of fame built from every recorded competition winner.
pub fn all_time_leaderboard(standings: &AllTimeStandings) -> MessageContent {
    let overall = match &standings.overall {
        Some(total) => format!(
            "**{}** gained {} in total",
            total.player_name,
            total.total_gain.to_formatted_string(&Locale::en)
        ),
        None => "No winners yet.".to_string(),
    };
    let highest_single = match &standings.highest_single {
        Some(best) => format!(
            "**{}** gained {} in competition #{}",
            best.player_name,
            best.metric_gain.to_formatted_string(&Locale::en),
            best.competition_id
        ),
        None => "No winners yet.".to_string(),
    };

    MessageContent {
        content: None,
        embeds: vec![Embed {
            title: "All-Time Top 10 SOTW & BOTW Players".to_string(),
            description: None,
            url: None,
            color: HALL_OF_FAME_COLOR,
            fields: vec![
                EmbedField {
                    name: "Top 10 SOTW (XP gained)".to_string(),
                    value: winner_total_lines(&standings.sotw),
                    inline: false,
                },
                EmbedField {
                    name: "Top 10 BOTW (kills)".to_string(),
                    value: winner_total_lines(&standings.botw),
                    inline: false,
                },
                EmbedField {
                    name: "Biggest overall gainer".to_string(),
                    value: overall,
                    inline: false,
                },
                EmbedField {
                    name: "Highest single competition gain".to_string(),
                    value: highest_single,
                    inline: false,
                },
            ],
            footer: Some(EmbedFooter {
                text: "Updated after each competition".to_string(),
            }),
        }],
        components: Vec::new(),
    }
}

/// Content signature used to skip edits that would not change a message.
pub fn signature(content: &MessageContent) -> Result<String, Error> {
    serde_json::to_string(content)
        .map_err(|e| Error::InternalError(format!("Failed to serialize message content: {}", e)))
}
