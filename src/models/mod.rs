mod summary;

pub use summary::{FetchStatus, SummaryNote};
