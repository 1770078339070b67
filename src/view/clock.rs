//! Time source for refresh timestamps

use chrono::{DateTime, Local};

#[cfg(test)]
use mockall::automock;

/// Trait for reading the wall clock - allows refresh timing to be mocked in tests
#[cfg_attr(test, automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
