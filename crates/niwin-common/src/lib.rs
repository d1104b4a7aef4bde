pub mod errors;
pub mod types;

pub use errors::{ConfigError, HostError, NiwinError};
pub use types::{CursorPoint, PointerId, WindowBounds, Zone};

pub type Result<T> = std::result::Result<T, NiwinError>;
