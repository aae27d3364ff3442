use crate::models::ItemRecord;
use std::collections::HashSet;

/// Validate catalog-wide invariants on item records
/// Returns Ok(()) if valid, or Err(Vec<String>) with every problem found
pub fn validate_items(items: &[ItemRecord]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for (idx, item) in items.iter().enumerate() {
        let item_ref = format!("Item #{} ('{}')", idx + 1, item.label);

        if item.id.trim().is_empty() {
            errors.push(format!("{}: id cannot be empty", item_ref));
            continue;
        }

        if !seen_ids.insert(item.id.as_str()) {
            errors.push(format!("{}: duplicate id '{}'", item_ref, item.id));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids_pass() {
        let items = vec![ItemRecord::new("a", "A"), ItemRecord::new("b", "B")];
        assert!(validate_items(&items).is_ok());
    }

    #[test]
    fn test_all_problems_are_collected() {
        let items = vec![
            ItemRecord::new("a", "A"),
            ItemRecord::new("  ", "Blank"),
            ItemRecord::new("a", "Again"),
            ItemRecord::new("", "Empty"),
        ];

        let errors = validate_items(&items).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("Item #2"));
        assert!(errors[1].contains("duplicate id 'a'"));
    }
}
