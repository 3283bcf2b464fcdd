use crate::content::ContentTable;
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

/// Reads a content table override, falling back to the built-in table when
/// the file is missing or unusable.
pub async fn load_content(path: Option<&Path>) -> ContentTable {
    let Some(path) = path else {
        return ContentTable::builtin();
    };

    let table = match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<ContentTable>(&bytes) {
            Ok(table) => table,
            Err(err) => {
                error!("failed to parse content file {}: {err}", path.display());
                return ContentTable::builtin();
            }
        },
        Err(err) => {
            error!("failed to read content file {}: {err}", path.display());
            return ContentTable::builtin();
        }
    };

    match table.normalized() {
        Ok(table) => {
            info!(
                "loaded {} categories from {}",
                table.categories.len(),
                path.display()
            );
            table
        }
        Err(reason) => {
            error!("invalid content file {}: {reason}", path.display());
            ContentTable::builtin()
        }
    }
}
