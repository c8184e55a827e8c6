//! UI-independent behavior of the BrewMate admin panel.
//!
//! Everything in this crate runs without a browser: the list-screen state
//! machine, the session state machine, client-side validation and the
//! helpers around the public geocoding service. The browser app drives
//! these from its event handlers; the HTTP clients live in
//! `bma-frontend-api`.

pub mod collection;
pub mod geo;
pub mod session;
pub mod text;
pub mod usecases;
