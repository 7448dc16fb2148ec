use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

pub mod favorites;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod user;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sitemap::sitemap))
        // user routes
        .route("/user", get(user::list_users).post(user::create_user))
        .route("/user/favorites", get(favorites::list_favorites))
        // people routes
        .route("/people", get(people::list_people).post(people::create_person))
        .route("/people/{id}", get(people::get_person))
        // planet routes
        .route("/planets", get(planets::list_planets).post(planets::create_planet))
        .route("/planets/{id}", get(planets::get_planet))
        // favorite routes
        .route(
            "/favorites/people/{id}",
            post(favorites::create_favorite_people).delete(favorites::delete_favorite_people),
        )
        .route(
            "/favorites/planets/{id}",
            post(favorites::create_favorite_planet).delete(favorites::delete_favorite_planet),
        )
}
