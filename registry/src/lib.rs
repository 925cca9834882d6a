use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::redis::RedisClient;
use adapter::repository::{
    auth::AuthRepositoryImpl, booking::BookingRepositoryImpl, geography::GeographyRepositoryImpl,
    health::HealthCheckRepositoryImpl, image::ListingImageRepositoryImpl,
    listing::ListingRepositoryImpl, rating::RatingRepositoryImpl, user::UserRepositoryImpl,
};
use kernel::repository::{
    auth::AuthRepository, booking::BookingRepository, geography::GeographyRepository,
    health::HealthCheckRepository, image::ListingImageRepository, listing::ListingRepository,
    rating::RatingRepository, user::UserRepository,
};
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    listing_repository: Arc<dyn ListingRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    rating_repository: Arc<dyn RatingRepository>,
    geography_repository: Arc<dyn GeographyRepository>,
    listing_image_repository: Arc<dyn ListingImageRepository>,
    user_repository: Arc<dyn UserRepository>,
    auth_repository: Arc<dyn AuthRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, redis_client: Arc<RedisClient>, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let listing_repository = Arc::new(ListingRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let rating_repository = Arc::new(RatingRepositoryImpl::new(pool.clone()));
        let geography_repository = Arc::new(GeographyRepositoryImpl::new(pool.clone()));
        let listing_image_repository = Arc::new(ListingImageRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        Self {
            health_check_repository,
            listing_repository,
            booking_repository,
            rating_repository,
            geography_repository,
            listing_image_repository,
            user_repository,
            auth_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn listing_repository(&self) -> Arc<dyn ListingRepository> {
        self.listing_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn rating_repository(&self) -> Arc<dyn RatingRepository> {
        self.rating_repository.clone()
    }

    pub fn geography_repository(&self) -> Arc<dyn GeographyRepository> {
        self.geography_repository.clone()
    }

    pub fn listing_image_repository(&self) -> Arc<dyn ListingImageRepository> {
        self.listing_image_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }
}
