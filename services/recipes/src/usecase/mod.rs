pub mod about;
pub mod rating;
pub mod recipe;
pub mod tag;
