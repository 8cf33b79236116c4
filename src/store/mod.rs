pub mod file;
pub mod memory;
mod records;
mod session;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use records::{TipBoard, UserDirectory};
pub use session::SessionTracker;

use anyhow::Result;
use std::future::Future;

/// Key holding the login → record directory.
pub const USERS_KEY: &str = "users";
/// Key holding the tip list.
pub const TIPS_KEY: &str = "tips";
/// Key holding the login of the signed-in user.
pub const SESSION_KEY: &str = "sessionUser";

/// String key-value storage the site persists through.
///
/// Reads fail soft: a missing key and a failed read both come back as
/// `None`. Writes and removals report their errors.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl Future<Output = Option<String>>;
    fn put(&self, key: &str, value: String) -> impl Future<Output = Result<()>>;
    fn remove(&self, key: &str) -> impl Future<Output = Result<()>>;
}
