//! Field matching for document objects decoded onto pre-filled values.
//!
//! Keys match field names case-insensitively, a repeated key overwrites the
//! earlier value, `null` leaves the field untouched and unknown keys are
//! skipped.

use serde::Deserialize;
use serde::de::{IgnoredAny, MapAccess};

/// Folds a document key for comparison with a lowercase ASCII field name.
pub(super) fn fold_key(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            'ſ' => 's',
            '\u{212A}' => 'k',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Reads the next value into `slot`; `null` keeps the current value.
pub(super) fn overlay_value<'de, A, T>(map: &mut A, slot: &mut T) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
    T: Deserialize<'de>,
{
    if let Some(value) = map.next_value::<Option<T>>()? {
        *slot = value;
    }
    Ok(())
}

pub(super) fn skip_value<'de, A>(map: &mut A) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
{
    map.next_value::<IgnoredAny>().map(|_| ())
}
