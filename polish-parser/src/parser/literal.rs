/// Converts a run of digits and dots into a number.
///
/// Only the leading `digits[.digits]` part of the run is converted; anything from the second dot
/// onwards is ignored, so `1.2.3` is `1.2`. A run with no digits in that part, such as `.`, is
/// `0`.
pub fn number_value(lexeme: &str) -> f64 {
    let end = lexeme
        .match_indices('.')
        .nth(1)
        .map_or(lexeme.len(), |(index, _)| index);
    lexeme[..end].parse().unwrap_or(0.0)
}
