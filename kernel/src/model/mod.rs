pub mod auth;
pub mod booking;
pub mod geography;
pub mod id;
pub mod listing;
pub mod rating;
pub mod user;
