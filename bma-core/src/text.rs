/// Case-insensitive substring match over a row's display fields.
///
/// This is the whole search feature: it only filters the rows that are
/// already in memory and is never pushed to the remote store.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_query("", &["Espresso Bar"]));
        assert!(matches_query("   ", &[]));
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(matches_query("espresso", &["Espresso Bar", "Berlin"]));
        assert!(matches_query("BERLIN", &["Espresso Bar", "Berlin"]));
        assert!(!matches_query("latte", &["Espresso Bar", "Berlin"]));
    }

    #[test]
    fn any_field_may_match() {
        assert!(matches_query("doe", &["Jane Doe", "jane@example.com"]));
        assert!(matches_query("example.com", &["Jane Doe", "jane@example.com"]));
    }
}
