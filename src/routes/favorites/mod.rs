mod handler;
mod model;

pub use handler::{
    create_favorite_people, create_favorite_planet, delete_favorite_people, delete_favorite_planet,
    list_favorites,
};
pub use model::{CreateFavoriteRequest, DeleteFavoriteResponse, Favorite, FavoriteTarget};
