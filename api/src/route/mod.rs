pub mod auth;
pub mod booking;
pub mod geography;
pub mod health;
pub mod listing;
pub mod rating;
pub mod v1;
