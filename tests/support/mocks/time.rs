// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, Utc};
use clinic_cms::application::ports::time::Clock;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};

/// テスト用の固定タイムスタンプ
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// 呼び出すたびに1分進む時計。`n` 回目の呼び出しは `fixed_now() + n 分` を返す。
#[derive(Debug, Default)]
pub struct TickingClock {
    ticks: AtomicI64,
}

impl TickingClock {
    /// 最後に返した時刻
    pub fn last(&self) -> DateTime<Utc> {
        fixed_now() + Duration::minutes(self.ticks.load(Ordering::SeqCst) - 1)
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::minutes(tick)
    }
}
