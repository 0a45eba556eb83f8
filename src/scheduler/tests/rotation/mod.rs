use super::*;

use crate::data::{competition::CompetitionRepository, queue::QueueRepository};
