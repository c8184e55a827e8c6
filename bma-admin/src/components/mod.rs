mod forms;
mod navbar;
mod overlay;
mod place_search;

pub use self::{forms::*, navbar::*, overlay::*, place_search::*};
