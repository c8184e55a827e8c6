use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id          : Id,
    /// Reviewer name.
    pub name        : String,
    pub country     : String,
    /// 1-5 stars. The range is only checked client-side before
    /// submission; out-of-band writers can store any value.
    pub rating      : u8,
    pub review_text : String,
    pub created_at  : Option<Timestamp>,
    pub updated_at  : Option<Timestamp>,
}
