use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// A single input file staged for embedding, consumed once while its table
/// entry is written.
#[derive(Debug)]
pub struct Asset<R> {
    pub path: PathBuf,
    pub mod_time: SystemTime,
    pub data: R,
}

impl<R> Asset<R> {
    /// Map key for this asset: the source path with `prefix` removed when it
    /// is a literal prefix of it, the full path otherwise.
    pub fn key(&self, prefix: &str) -> String {
        let path = self.path.to_string_lossy();
        match path.strip_prefix(prefix) {
            Some(stripped) => stripped.to_owned(),
            None => path.into_owned(),
        }
    }

    /// Modification time as whole seconds since the Unix epoch.
    pub fn unix_mod_time(&self) -> i64 {
        match self.mod_time.duration_since(UNIX_EPOCH) {
            Ok(since) => since.as_secs() as i64,
            Err(before) => -(before.duration().as_secs() as i64),
        }
    }
}
