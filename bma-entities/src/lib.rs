#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # bma-entities
//!
//! Reusable, agnostic domain entities for the BrewMate admin panel.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic. All records mirror documents of the
//! hosted store: flat, loosely typed and keyed by an opaque string id that is
//! assigned remotely at creation time.

pub mod event;
pub mod id;
pub mod interest;
pub mod review;
pub mod shop;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
