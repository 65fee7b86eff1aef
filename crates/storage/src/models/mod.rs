mod menu_item;
mod rating;
mod restaurant;
mod user;

pub use menu_item::MenuItem;
pub use rating::{BeenVisit, RatedVisit, RatingStatus};
pub use restaurant::Restaurant;
pub use user::User;
