mod handler;
mod model;

pub use handler::{create_person, get_person, list_people};
pub use model::{CreatePersonRequest, Person};
