//! State machine of an entity list screen.
//!
//! Every screen fetches its full collection once on mount and afterwards
//! patches the local rows in place: a successful create prepends, a
//! successful update replaces the row with the matching id, a successful
//! delete removes it. There is no re-fetch after a mutation and no
//! reconciliation protocol; a failed mutation leaves the rows untouched.

use std::mem;

use bma_entities::{event::Event, id::Id, interest::Interest, review::Review, shop::CoffeeShop, user::User};

/// Row types of a list screen.
pub trait HasId {
    fn id(&self) -> &Id;
}

macro_rules! impl_has_id {
    ($($t:ty),* $(,)?) => {
        $(impl HasId for $t {
            fn id(&self) -> &Id {
                &self.id
            }
        })*
    };
}

impl_has_id!(User, CoffeeShop, Interest, Review, Event);

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CollectionState<T> {
    Idle,
    /// Initial fetch in flight.
    Loading,
    Loaded(Vec<T>),
    /// A create/update/delete is in flight; the rows stay visible.
    Mutating(Vec<T>),
    /// The initial fetch failed. The screen shows the message and
    /// offers a retry instead of silently rendering an empty list.
    Failed(String),
}

impl<T: HasId> CollectionState<T> {
    pub fn begin_load(&mut self) {
        *self = Self::Loading;
    }

    pub fn finish_load(&mut self, rows: Vec<T>) {
        *self = Self::Loaded(rows);
    }

    pub fn fail_load(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("Unable to load collection: {message}");
        *self = Self::Failed(message);
    }

    pub fn begin_mutation(&mut self) {
        if let Self::Loaded(rows) = mem::take(self) {
            *self = Self::Mutating(rows);
        }
    }

    /// A mutation came back with an error: the optimistic patch was
    /// never applied, so the previous rows are restored unchanged.
    pub fn fail_mutation(&mut self) {
        if let Self::Mutating(rows) = mem::take(self) {
            *self = Self::Loaded(rows);
        }
    }

    pub fn finish_create(&mut self, row: T) {
        let mut rows = mem::take(self).into_rows();
        rows.insert(0, row);
        *self = Self::Loaded(rows);
    }

    pub fn finish_update(&mut self, row: T) {
        let mut rows = mem::take(self).into_rows();
        if let Some(slot) = rows.iter_mut().find(|r| r.id() == row.id()) {
            *slot = row;
        }
        *self = Self::Loaded(rows);
    }

    pub fn finish_delete(&mut self, id: &Id) {
        let rows = mem::take(self)
            .into_rows()
            .into_iter()
            .filter(|r| r.id() != id)
            .collect();
        *self = Self::Loaded(rows);
    }

    pub fn rows(&self) -> Option<&[T]> {
        match self {
            Self::Loaded(rows) | Self::Mutating(rows) => Some(rows),
            Self::Idle | Self::Loading | Self::Failed(_) => None,
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn is_mutating(&self) -> bool {
        matches!(self, Self::Mutating(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    fn into_rows(self) -> Vec<T> {
        match self {
            Self::Loaded(rows) | Self::Mutating(rows) => rows,
            Self::Idle | Self::Loading | Self::Failed(_) => Vec::new(),
        }
    }
}

impl<T: HasId> CollectionState<T>
where
    T: Clone,
{
    /// Rows matching a client-side search, in stored order.
    pub fn filtered<F>(&self, filter: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.rows()
            .map(|rows| rows.iter().filter(|r| filter(r)).cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bma_entities::builders::*;

    fn loaded_reviews(ids: &[&str]) -> CollectionState<Review> {
        let rows = ids
            .iter()
            .map(|id| Review::build().id(id).name(id).rating(3).finish())
            .collect();
        let mut state = CollectionState::default();
        state.begin_load();
        state.finish_load(rows);
        state
    }

    #[test]
    fn load_failure_is_an_explicit_error_state() {
        let mut state = CollectionState::<Review>::default();
        state.begin_load();
        assert!(state.is_loading());
        state.fail_load("remote unavailable");
        assert_eq!(state.error(), Some("remote unavailable"));
        assert!(state.rows().is_none());
    }

    #[test]
    fn same_rows_loaded_twice_yield_the_same_id_set() {
        let a = loaded_reviews(&["r1", "r2", "r3"]);
        let b = loaded_reviews(&["r1", "r2", "r3"]);
        let ids = |s: &CollectionState<Review>| -> Vec<String> {
            s.rows()
                .unwrap()
                .iter()
                .map(|r| r.id.to_string())
                .collect()
        };
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn create_prepends_exactly_once() {
        let mut state = loaded_reviews(&["r1", "r2"]);
        state.begin_mutation();
        assert!(state.is_mutating());
        state.finish_create(Review::build().id("r3").finish());
        let rows = state.rows().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].id.as_str(), "r3");
        assert_eq!(
            rows.iter().filter(|r| r.id.as_str() == "r3").count(),
            1
        );
    }

    #[test]
    fn update_replaces_matching_row_and_keeps_the_rest() {
        let mut state = loaded_reviews(&["r1", "r2", "r3"]);
        state.begin_mutation();
        state.finish_update(Review::build().id("r2").name("changed").rating(5).finish());
        let rows = state.rows().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].name, "changed");
        assert_eq!(rows[1].rating, 5);
        assert_eq!(rows[0].name, "r1");
        assert_eq!(rows[2].name, "r3");
    }

    #[test]
    fn delete_removes_matching_row() {
        let mut state = loaded_reviews(&["r1", "r2", "r3"]);
        state.begin_mutation();
        state.finish_delete(&"r2".into());
        let rows = state.rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.id.as_str() != "r2"));
    }

    #[test]
    fn failed_mutation_restores_previous_rows() {
        let mut state = loaded_reviews(&["r1", "r2"]);
        state.begin_mutation();
        state.fail_mutation();
        assert_eq!(state.rows().unwrap().len(), 2);
        assert!(!state.is_mutating());
    }
}
