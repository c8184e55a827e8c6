use bma_entities::time::Timestamp;

use super::prelude::*;

/// Form state of the event overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub event_name: String,
    pub description: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub cafe_name: String,
    pub cafe_address: String,
    pub cafe_latitude: Option<f64>,
    pub cafe_longitude: Option<f64>,
    pub event_date: Option<Timestamp>,
    pub max_attendees: u32,
    pub image_url: Option<String>,
}

pub fn validate_event(draft: &EventDraft) -> Result<()> {
    if draft.event_name.trim().is_empty() {
        return Err(Error::MissingField);
    }
    if draft.event_date.is_none() {
        return Err(Error::MissingEventDate);
    }
    if draft.max_attendees == 0 {
        return Err(Error::MaxAttendees);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> EventDraft {
        EventDraft {
            event_name: "Latte Art Throwdown".into(),
            event_date: Some(Timestamp::from_milliseconds(1_700_000_000_000)),
            max_attendees: 20,
            ..Default::default()
        }
    }

    #[test]
    fn accept_valid_event() {
        assert!(validate_event(&valid_draft()).is_ok());
    }

    #[test]
    fn reject_event_without_date() {
        let draft = EventDraft {
            event_date: None,
            ..valid_draft()
        };
        assert_eq!(validate_event(&draft), Err(Error::MissingEventDate));
    }

    #[test]
    fn reject_event_without_capacity() {
        let draft = EventDraft {
            max_attendees: 0,
            ..valid_draft()
        };
        assert_eq!(validate_event(&draft), Err(Error::MaxAttendees));
    }
}
