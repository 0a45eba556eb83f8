use chrono::Utc;
use entity::sea_orm_active_enums::Track;
use varietyz_test_utils::prelude::*;

use crate::data::winner::*;

mod upsert;
