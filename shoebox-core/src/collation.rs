use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Key used to order facet option values for display
///
/// NFD decomposition places accented letters next to their base letter;
/// comparison is otherwise by code point, so case is significant and
/// upper-case values sort before lower-case ones.
pub fn collation_key(s: &str) -> String {
    s.nfd().collect()
}

/// Compare two display values by collation key, falling back to the raw
/// strings so distinct values never compare equal
pub fn compare_display(a: &str, b: &str) -> Ordering {
    match collation_key(a).cmp(&collation_key(b)) {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

/// Sort display values in place
pub fn sort_display(values: &mut [String]) {
    values.sort_by(|a, b| compare_display(a, b));
}

/// Case folding used for every facet comparison
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive equality
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || fold_case(a) == fold_case(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_sensitive_order() {
        let mut values = vec!["adidas".to_string(), "Nike".to_string(), "Asics".to_string()];
        sort_display(&mut values);
        assert_eq!(values, vec!["Asics", "Nike", "adidas"]);
    }

    #[test]
    fn test_accents_sort_with_base_letter() {
        let mut values = vec!["Ecco".to_string(), "F".to_string(), "École".to_string()];
        sort_display(&mut values);
        assert_eq!(values, vec!["Ecco", "École", "F"]);
    }

    #[test]
    fn test_precomposed_and_decomposed_are_distinct_but_adjacent() {
        let precomposed = "caf\u{e9}";
        let decomposed = "cafe\u{301}";
        assert_eq!(collation_key(precomposed), collation_key(decomposed));
        assert_ne!(compare_display(precomposed, decomposed), Ordering::Equal);
    }

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("Nike", "nIKE"));
        assert!(!eq_ignore_case("Nike", "Nik"));
    }
}
