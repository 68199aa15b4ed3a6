use std::fmt;

use impl_helper::ImplHelper;
use serde::{Deserialize, Serialize};

/// 1-based
pub type PageNumber = usize;

/// Pages strictly between `start` and `finish` are hidden. Bounds may be
/// negative or cross each other, in which case nothing is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ImplHelper)]
pub struct HiddenRange {
    #[helper(copy)]
    start: i64,

    #[helper(copy)]
    finish: i64,
}

impl HiddenRange {
    pub fn new(start: i64, finish: i64) -> Self {
        Self { start, finish }
    }

    pub fn contains(&self, page_number: PageNumber) -> bool {
        let Ok(number) = i64::try_from(page_number) else {
            return false;
        };

        self.start < number && number < self.finish
    }

    pub fn is_empty(&self) -> bool {
        self.finish <= self.start.saturating_add(1)
    }
}

impl fmt::Display for HiddenRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}..{})", self.start, self.finish)
    }
}
