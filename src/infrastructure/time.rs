use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall clock in UTC; tests substitute a fixed one.
#[derive(Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
