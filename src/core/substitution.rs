/// Positional placeholders recognized in string values.
const SUBSTITUTION_MARKERS: [&str; 4] = ["%1", "%2", "%3", "%4"];

/// Count how many distinct placeholders `%1`..`%4` appear in `value`.
///
/// Only presence is counted: `"%1 and %1"` counts as one.
pub fn count_substitutions(value: &str) -> usize {
    SUBSTITUTION_MARKERS
        .iter()
        .filter(|marker| value.contains(**marker))
        .count()
}
