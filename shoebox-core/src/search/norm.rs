use regex::Regex;
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^ ]+").expect("token pattern is valid"));

/// Field-length norm: values with more words count for less
///
/// `1 / token_count^(weight / 2)`, rounded to three decimals.
pub fn field_norm(value: &str, weight: f64) -> f64 {
    let tokens = TOKEN.find_iter(value).count().max(1);
    let norm = 1.0 / (tokens as f64).powf(0.5 * weight);
    (norm * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word() {
        assert_eq!(field_norm("Alden", 1.0), 1.0);
    }

    #[test]
    fn test_multiple_words() {
        assert_eq!(field_norm("plain toe blucher", 1.0), 0.577);
        assert_eq!(field_norm("a  b", 1.0), 0.707);
    }

    #[test]
    fn test_zero_weight_disables_norm() {
        assert_eq!(field_norm("many words in this value", 0.0), 1.0);
    }
}
