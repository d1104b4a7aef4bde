use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a pointing device, used to tell concurrent pointers apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerId(pub u64);

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pointer-{}", self.0)
    }
}
