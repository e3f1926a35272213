//! Dashboard identifier generation

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of generated dashboard ids
pub const ID_LENGTH: usize = 8;

/// Generate a random alphanumeric id.
///
/// Ids are drawn uniformly from `[a-zA-Z0-9]` using the thread-local RNG.
/// Nothing here checks the result against existing records.
pub fn generate_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LENGTH)
        .map(char::from)
        .collect()
}
