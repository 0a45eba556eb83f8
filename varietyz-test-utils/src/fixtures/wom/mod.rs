use crate::TestSetup;

pub mod factory;
pub mod mockito;

impl TestSetup {
    pub fn wom<'a>(&'a mut self) -> WomFixtures<'a> {
        WomFixtures { setup: self }
    }
}

pub struct WomFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
