use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Please fill in all fields")]
    MissingField,
    #[error("Invalid email address")]
    Email,
    #[error("Please select at least 1 star")]
    RatingTooLow,
    #[error("The rating must not exceed 5 stars")]
    RatingTooHigh,
    #[error("Please upload at least one picture")]
    MissingPicture,
    #[error("A user can pick at most 5 interests")]
    TooManyInterests,
    #[error("Please pick an event date")]
    MissingEventDate,
    #[error("The maximum number of attendees must be at least 1")]
    MaxAttendees,
}
