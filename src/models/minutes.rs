use serde::Serialize;

/// Outcome of parsing one time/duration text field.
///
/// `Zero` means "nothing entered" and is distinct from `Invalid`: an empty
/// duration counts as zero minutes, a malformed one is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Parsed {
    Zero,
    Value(i64),
    Invalid,
}

impl Parsed {
    /// Minutes when the field resolved (including the empty default).
    pub fn minutes(&self) -> Option<i64> {
        match self {
            Parsed::Zero => Some(0),
            Parsed::Value(m) => Some(*m),
            Parsed::Invalid => None,
        }
    }

    /// Value used when summing: an invalid field contributes nothing.
    pub fn or_zero(&self) -> i64 {
        self.minutes().unwrap_or(0)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Parsed::Invalid)
    }
}
