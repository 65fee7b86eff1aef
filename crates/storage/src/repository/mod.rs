pub mod menu;
pub mod rating;
pub mod restaurant;
pub mod user;
