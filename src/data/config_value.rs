use sea_orm::{sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

/// Persisted index of the next boss chunk shown in the vote menu.
pub const BOSS_ROTATION_INDEX: &str = "boss_rotation_index";
/// Rotation period in weeks requested by moderators.
pub const ROTATION_PERIOD_WEEKS: &str = "rotation_period_weeks";
/// Discord message id of the all-time leaderboard in the hall of fame channel.
pub const ALL_TIME_LEADERBOARD_MESSAGE: &str = "all_time_leaderboard_message_id";

pub struct ConfigValueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConfigValueRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, DbErr> {
        let value = entity::prelude::ConfigValue::find_by_id(key.to_string())
            .one(self.db)
            .await?;

        Ok(value.map(|v| v.value))
    }

    /// Inserts or overwrites the value stored under `key`.
    pub async fn set(&self, key: &str, value: String) -> Result<(), DbErr> {
        let model = entity::config_value::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value),
        };

        entity::prelude::ConfigValue::insert(model)
            .on_conflict(
                OnConflict::column(entity::config_value::Column::Key)
                    .update_column(entity::config_value::Column::Value)
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
