use serde::Serialize;
use std::ops::AddAssign;

/// Minute totals of one pay week, split by pay rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WeekBucket {
    pub basic: i64,
    pub ot15: i64,
    pub ot20: i64,
}

impl WeekBucket {
    pub fn new(basic: i64, ot15: i64, ot20: i64) -> Self {
        Self { basic, ot15, ot20 }
    }

    /// Saturates instead of overflowing on absurd hour values.
    pub fn total(&self) -> i64 {
        self.basic.saturating_add(self.ot15).saturating_add(self.ot20)
    }
}

impl AddAssign for WeekBucket {
    fn add_assign(&mut self, rhs: Self) {
        self.basic = self.basic.saturating_add(rhs.basic);
        self.ot15 = self.ot15.saturating_add(rhs.ot15);
        self.ot20 = self.ot20.saturating_add(rhs.ot20);
    }
}
