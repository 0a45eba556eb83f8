use varietyz_test_utils::prelude::*;

use crate::data::config_value::*;
