use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::Track;
use varietyz_test_utils::prelude::*;

use crate::data::{is_unique_violation, queue::*};

mod peek;
