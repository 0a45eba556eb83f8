use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Track;

/// Requested metric waiting for the next rotation of its track.
///
/// Skill and boss names never collide, so the metric alone identifies a queue entry.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "competition_queue")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub metric: String,
    #[sea_orm(indexed)]
    pub track: Track,
    pub queued_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
