//! sea-orm entities for the recipes service.

pub mod recipes;
pub mod recipes_tags;
pub mod tags;
pub mod user_ratings;
pub mod users;
