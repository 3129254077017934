mod entity;

pub use entity::{Entity, UnknownEntity};
