use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Track;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "competition")]
pub struct Model {
    /// Identifier assigned by Wise Old Man
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub title: String,
    pub metric: String,
    #[sea_orm(indexed)]
    pub track: Track,
    pub starts_at: DateTime,
    pub ends_at: DateTime,
    pub verification_secret: String,
    pub announcement_message_id: Option<String>,
    pub leaderboard_message_id: Option<String>,
    pub final_leaderboard_sent: bool,
    /// Boss chunk shown in the vote menu, always 0 for skill competitions
    pub rotation_index: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::competition_vote::Entity")]
    CompetitionVote,
    #[sea_orm(has_one = "super::competition_winner::Entity")]
    CompetitionWinner,
}

impl Related<super::competition_vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompetitionVote.def()
    }
}

impl Related<super::competition_winner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompetitionWinner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
