//! Per-user favorites

mod api;
mod commands;
mod models;

pub use commands::{add, list, remove};
pub use models::{Favorite, FavoriteKind};
pub(crate) use models::FavoritesResponse;
