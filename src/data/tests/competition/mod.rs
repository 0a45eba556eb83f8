use chrono::{Duration, TimeZone, Utc};
use entity::sea_orm_active_enums::Track;
use varietyz_test_utils::prelude::*;

use crate::data::competition::*;

mod find_current;
mod update;
