mod dispatch;
mod types;

pub use dispatch::execute;
pub use types::{QueryKind, ResultItem, ResultSet, SearchQuery};
