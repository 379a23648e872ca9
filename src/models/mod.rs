pub mod items;

pub use items::{Item, ItemChanges, NewItem};
