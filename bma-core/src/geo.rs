//! Helpers around the public geocoding service.

/// The service is asked for at most this many suggestions.
pub const MAX_SUGGESTIONS: usize = 5;

/// Suggestions are only requested for queries of at least this length.
pub const MIN_QUERY_LEN: usize = 3;

/// Label used wherever a reverse-geocode lookup fails or returns no
/// address: the bare coordinates with fixed precision.
pub fn coords_label(lat: f64, lon: f64) -> String {
    format!("{lat:.4}, {lon:.4}")
}

pub fn is_searchable(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_LEN
}

/// Coordinate pair from the free-text latitude/longitude form fields.
pub fn parse_coords(lat: &str, lon: &str) -> Option<(f64, f64)> {
    let lat = lat.trim().parse().ok()?;
    let lon = lon.trim().parse().ok()?;
    Some((lat, lon))
}

/// Guard against racing search-as-you-type requests.
///
/// Each request takes a ticket before it is sent; when the response
/// arrives, it is only applied if no newer ticket has been issued in the
/// meantime. Superseded responses are discarded instead of overwriting
/// fresher ones.
#[derive(Debug, Default)]
pub struct QuerySequence {
    issued: u64,
}

impl QuerySequence {
    pub fn next_ticket(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub const fn is_current(&self, ticket: u64) -> bool {
        ticket == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_label_has_four_decimal_places() {
        assert_eq!(coords_label(52.52001, 13.404954), "52.5200, 13.4050");
        assert_eq!(coords_label(0.0, 0.0), "0.0000, 0.0000");
        assert_eq!(coords_label(-33.9, 151.2), "-33.9000, 151.2000");
    }

    #[test]
    fn short_queries_are_not_searchable() {
        assert!(!is_searchable(""));
        assert!(!is_searchable("be"));
        assert!(is_searchable("ber"));
    }

    #[test]
    fn query_length_counts_characters_not_bytes() {
        assert!(!is_searchable("東京"));
        assert!(is_searchable("東京都"));
    }

    #[test]
    fn coords_parse_from_trimmed_form_input() {
        assert_eq!(parse_coords(" 52.52 ", "13.405"), Some((52.52, 13.405)));
        assert_eq!(parse_coords("-33.9", " 151.2"), Some((-33.9, 151.2)));
        assert_eq!(parse_coords("", "13.405"), None);
        assert_eq!(parse_coords("52,52", "13.405"), None);
    }

    #[test]
    fn superseded_tickets_are_discarded() {
        let mut seq = QuerySequence::default();
        let first = seq.next_ticket();
        let second = seq.next_ticket();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
