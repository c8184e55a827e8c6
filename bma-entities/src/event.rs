use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id              : Id,
    pub event_name      : String,
    pub description     : Option<String>,
    pub location        : Option<String>,
    pub latitude        : Option<f64>,
    pub longitude       : Option<f64>,
    pub cafe            : Option<CafeSnapshot>,
    pub event_date      : Timestamp,
    pub max_attendees   : u32,
    pub attendees_count : u32,
    pub image_url       : Option<String>,
    pub created_by      : String,
    pub created_at      : Option<Timestamp>,
    pub updated_at      : Option<Timestamp>,
}

/// Point-in-time copy of the hosting cafe, not a live join.
///
/// If the referenced coffee shop changes later, this copy stays
/// as it was when the event was created.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct CafeSnapshot {
    pub name      : String,
    pub address   : String,
    pub latitude  : Option<f64>,
    pub longitude : Option<f64>,
}

impl Event {
    pub fn is_full(&self) -> bool {
        self.max_attendees > 0 && self.attendees_count >= self.max_attendees
    }
}

#[cfg(test)]
mod tests {
    use crate::builders::*;

    #[test]
    fn full_event() {
        let event = super::Event::build().max_attendees(2).finish();
        assert!(!event.is_full());
        let mut event = event;
        event.attendees_count = 2;
        assert!(event.is_full());
    }

    #[test]
    fn unlimited_event_is_never_full() {
        let mut event = super::Event::build().max_attendees(0).finish();
        event.attendees_count = 1000;
        assert!(!event.is_full());
    }
}
