//! ULID-suffixed test data for columns with unique indexes.

use ulid::Ulid;

/// Drink title unique across tests and runs, e.g. `"House Blend 01J9..."`.
///
/// The result stays well under the 80-character title limit for short bases.
pub fn unique_title(base: &str) -> String {
    format!("{base} {}", Ulid::new())
}
