use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interest {
    pub id         : Id,
    /// No uniqueness is enforced on the name, neither locally
    /// nor by the remote store.
    pub name       : String,
    /// Human-readable display string, not a timestamp.
    pub date_added : String,
    pub created_at : Option<Timestamp>,
}
