pub mod size;
pub mod types;

pub use size::{Size, SizeParseError};
pub use types::{ContentKind, FileLayout, TablespaceState};
