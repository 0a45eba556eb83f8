pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::*,
        fixtures::{competition::mock_title, wom::factory as wom_body},
        test_setup_with_tables, TestBuilder, TestError, TestSetup,
    };
}
