#[cfg(test)]
#[path = "choice_test.rs"]
mod tests;

use strum::IntoEnumIterator;

/// Steps through the variants of an enumerated choice, wrapping around at
/// both ends. Used by selectors in the UI (level, AI content type).
pub fn cycle<T: IntoEnumIterator + PartialEq + Copy>(current: T, forward: bool) -> T {
    let variants = T::iter().collect::<Vec<T>>();
    let len = variants.len();
    let idx = variants
        .iter()
        .position(|e| return *e == current)
        .unwrap_or(0);

    if forward {
        return variants[(idx + 1) % len];
    }

    return variants[(idx + len - 1) % len];
}
