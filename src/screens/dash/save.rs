//! Best-score persistence for Track Dash.
//!
//! Versioning: `SAVE_VERSION` is the current blob format; blobs older than
//! `MIN_COMPATIBLE_VERSION` (or unreadable ones) fall back to a zero best
//! score rather than erroring — losing a decorative high score is fine,
//! breaking the page is not.

#[cfg(any(target_arch = "wasm32", test))]
use serde::{Deserialize, Serialize};

/// Current save blob format version.
#[cfg(any(target_arch = "wasm32", test))]
const SAVE_VERSION: u32 = 1;

/// Oldest version this build still reads.
#[cfg(any(target_arch = "wasm32", test))]
const MIN_COMPATIBLE_VERSION: u32 = 1;

/// localStorage key.
#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "bday_verse_dash_best";

/// Write-out interval: 10 ticks/sec x 30 seconds = 300 ticks.
pub const AUTOSAVE_INTERVAL: u32 = 300;

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Serialize, Deserialize)]
struct SaveData {
    version: u32,
    best_score: u64,
}

#[cfg(any(target_arch = "wasm32", test))]
fn encode(best_score: u64) -> Option<String> {
    serde_json::to_string(&SaveData {
        version: SAVE_VERSION,
        best_score,
    })
    .ok()
}

#[cfg(any(target_arch = "wasm32", test))]
fn decode(raw: &str) -> Option<u64> {
    let data: SaveData = serde_json::from_str(raw).ok()?;
    if data.version < MIN_COMPATIBLE_VERSION || data.version > SAVE_VERSION {
        return None;
    }
    Some(data.best_score)
}

/// Persist the best score. Storage errors are swallowed; the score only
/// matters for bragging rights.
#[cfg(target_arch = "wasm32")]
pub fn save_best(best_score: u64) {
    let Some(blob) = encode(best_score) else {
        return;
    };
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if let Some(storage) = storage {
        let _ = storage.set_item(STORAGE_KEY, &blob);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_best(_best_score: u64) {}

/// Load the persisted best score, or 0 when absent/invalid.
#[cfg(target_arch = "wasm32")]
pub fn load_best() -> u64 {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .and_then(|raw| decode(&raw))
        .unwrap_or(0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_best() -> u64 {
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let blob = encode(1234).unwrap();
        assert_eq!(decode(&blob), Some(1234));
    }

    #[test]
    fn rejects_future_version() {
        let blob = format!(r#"{{"version":{},"best_score":5}}"#, SAVE_VERSION + 1);
        assert_eq!(decode(&blob), None);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(decode("not json"), None);
        assert_eq!(decode("{}"), None);
    }

    #[test]
    fn blob_carries_current_version() {
        let blob = encode(0).unwrap();
        assert!(blob.contains(&format!("\"version\":{}", SAVE_VERSION)));
    }
}
