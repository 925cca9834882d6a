use crate::model::id::UserId;

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub is_host: bool,
}

/// Listing-owner projection embedded into listing views.
#[derive(Debug, Clone)]
pub struct ListingOwner {
    pub owner_id: UserId,
    pub owner_name: String,
}

/// Guest projection embedded into booking views.
#[derive(Debug, Clone)]
pub struct BookingGuest {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
}
