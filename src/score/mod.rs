//! Score persistence across sessions.

mod record;
mod store;

pub use record::ScoreRecord;
pub use store::{ScoreStore, StoreError};
