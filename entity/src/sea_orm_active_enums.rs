use sea_orm::entity::prelude::*;

/// The two weekly competition tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(4))")]
pub enum Track {
    /// Skill of the week
    #[sea_orm(string_value = "SOTW")]
    Sotw,
    /// Boss of the week
    #[sea_orm(string_value = "BOTW")]
    Botw,
}

impl Track {
    pub const ALL: [Track; 2] = [Track::Sotw, Track::Botw];

    /// Short label appended to competition titles, e.g. `"ZULRAH BOTW"`.
    pub fn label(self) -> &'static str {
        match self {
            Track::Sotw => "SOTW",
            Track::Botw => "BOTW",
        }
    }

    /// Catalog kind competed on by this track.
    pub fn metric_kind(self) -> MetricKind {
        match self {
            Track::Sotw => MetricKind::Skill,
            Track::Botw => MetricKind::Boss,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(5))")]
pub enum MetricKind {
    #[sea_orm(string_value = "Skill")]
    Skill,
    #[sea_orm(string_value = "Boss")]
    Boss,
}

impl MetricKind {
    pub fn label(self) -> &'static str {
        match self {
            MetricKind::Skill => "Skill",
            MetricKind::Boss => "Boss",
        }
    }

    /// Track competing on this kind.
    pub fn track(self) -> Track {
        match self {
            MetricKind::Skill => Track::Sotw,
            MetricKind::Boss => Track::Botw,
        }
    }
}
