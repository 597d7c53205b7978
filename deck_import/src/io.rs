use crate::error::Result;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Read a decklist from `path`, or from stdin when `path` is `None` or `-`
pub async fn read_decklist(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            log::debug!("Reading decklist from {}", path.display());
            Ok(tokio::fs::read_to_string(path).await?)
        }
        _ => {
            log::debug!("Reading decklist from stdin");
            let mut decklist = String::new();
            tokio::io::stdin().read_to_string(&mut decklist).await?;
            Ok(decklist)
        }
    }
}
