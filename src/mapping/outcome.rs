use strum_macros::{Display, EnumIter};

/// Why an event left the store untouched.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    UnknownPair,
    MissingToken,
    MissingFactory,
    MissingBundle,
    PairExists,
    OutOfOrder,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HandlerOutcome {
    Applied,
    Skipped(SkipReason),
}

impl HandlerOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, HandlerOutcome::Applied)
    }
}

impl From<SkipReason> for HandlerOutcome {
    fn from(reason: SkipReason) -> Self {
        HandlerOutcome::Skipped(reason)
    }
}
