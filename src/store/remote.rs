//! Remote persistence capability.
//!
//! The hosted backend is opaque to the core: all it has to offer is a bulk
//! insert of entry-shaped records bound to a pet and a user. The SQLite
//! implementation lives in `crate::db`.

use crate::errors::AppResult;
use crate::models::ActivityEntry;

pub trait RemoteStore {
    /// Insert the batch, returning how many records were written.
    fn insert_many(
        &mut self,
        pet: &str,
        user: &str,
        entries: &[ActivityEntry],
    ) -> AppResult<usize>;
}
