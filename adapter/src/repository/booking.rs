use std::str::FromStr;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{CancelBooking, CreateBooking},
        can_cancel, Booking, BookingStatus,
    },
    id::{BookingId, UserId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::booking::{BookingRow, BookingStateRow},
    ConnectionPool,
};

const BOOKING_VIEW_SELECT: &str = r#"
    SELECT
        b.booking_id,
        b.listing_id,
        l.title AS listing_title,
        l.location_desc AS listing_location,
        l.owned_by AS listing_owned_by,
        b.guest_id,
        u.user_name AS guest_name,
        u.email AS guest_email,
        b.check_in_date,
        b.check_out_date,
        b.number_of_guests,
        b.total_price,
        b.status,
        b.created_at,
        b.updated_at
    FROM bookings AS b
    INNER JOIN listings AS l ON b.listing_id = l.listing_id
    INNER JOIN users AS u ON b.guest_id = u.user_id
"#;

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        // The listing must still exist at write time; the handler's earlier
        // read happened outside this transaction.
        let listing: Option<(UserId,)> =
            sqlx::query_as("SELECT owned_by FROM listings WHERE listing_id = $1")
                .bind(event.listing_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

        if listing.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "listing ({}) not found",
                event.listing_id
            )));
        }

        // Creation is a single atomic insert; a caller timeout can never
        // observe a half-applied booking.
        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (booking_id, listing_id, guest_id, check_in_date, check_out_date,
                 number_of_guests, total_price, status)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(booking_id)
        .bind(event.listing_id)
        .bind(event.guest)
        .bind(event.check_in_date)
        .bind(event.check_out_date)
        .bind(event.number_of_guests)
        .bind(event.total_price)
        .bind(event.status.as_ref())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no booking record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }

    async fn cancel(&self, event: CancelBooking) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        // Row lock on the booking so concurrent cancel/update operations on
        // the same entity serialize.
        let state: Option<BookingStateRow> = sqlx::query_as(
            r#"
                SELECT
                    b.booking_id,
                    b.guest_id,
                    l.owned_by AS listing_owned_by,
                    b.status
                FROM bookings AS b
                INNER JOIN listings AS l ON b.listing_id = l.listing_id
                WHERE b.booking_id = $1
                FOR UPDATE OF b
            "#,
        )
        .bind(event.booking_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(state) = state else {
            return Err(AppError::EntityNotFound(format!(
                "booking ({}) not found",
                event.booking_id
            )));
        };

        if !can_cancel(event.requested_by, state.guest_id, state.listing_owned_by) {
            return Err(AppError::ForbiddenOperation);
        }

        let status = BookingStatus::from_str(&state.status).map_err(|_| {
            AppError::ConversionEntityError(format!("unknown booking status: {}", state.status))
        })?;

        // Cancelled is terminal. Re-cancelling succeeds without touching
        // the row, so updated_at keeps the original cancellation time.
        if status.is_terminal() {
            tx.commit().await.map_err(AppError::TransactionError)?;
            return Ok(());
        }

        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET status = $1, updated_at = now()
                WHERE booking_id = $2 AND status <> $1
            "#,
        )
        .bind(BookingStatus::Cancelled.as_ref())
        .bind(event.booking_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no booking record has been cancelled".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Booking> {
        let row: Option<BookingRow> =
            sqlx::query_as(&format!("{BOOKING_VIEW_SELECT} WHERE b.booking_id = $1"))
                .bind(booking_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        match row {
            Some(row) => Booking::try_from(row),
            None => Err(AppError::EntityNotFound(format!(
                "booking ({booking_id}) not found"
            ))),
        }
    }

    async fn find_by_guest(&self, guest_id: UserId) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(&format!(
            "{BOOKING_VIEW_SELECT} WHERE b.guest_id = $1 ORDER BY b.created_at DESC"
        ))
        .bind(guest_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn find_by_host(&self, host_id: UserId) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(&format!(
            "{BOOKING_VIEW_SELECT} WHERE l.owned_by = $1 ORDER BY b.created_at DESC"
        ))
        .bind(host_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use kernel::model::{listing::event::CreateListing, user::event::CreateUser};
    use kernel::repository::{
        geography::GeographyRepository, listing::ListingRepository, user::UserRepository,
    };
    use rust_decimal::Decimal;

    use crate::repository::{
        geography::GeographyRepositoryImpl, listing::ListingRepositoryImpl,
        user::UserRepositoryImpl,
    };

    async fn seed_booking(pool: &sqlx::PgPool) -> anyhow::Result<(UserId, UserId, BookingId)> {
        let db = ConnectionPool::new(pool.clone());
        let users = UserRepositoryImpl::new(db.clone());

        let host = users
            .create(CreateUser::new(
                "host".into(),
                "host@example.com".into(),
                "secret".into(),
            ))
            .await?;
        let guest = users
            .create(CreateUser::new(
                "guest".into(),
                "guest@example.com".into(),
                "secret".into(),
            ))
            .await?;

        let municipality = GeographyRepositoryImpl::new(db.clone())
            .find_by_name("Medellín")
            .await?
            .unwrap();

        let listing_id = ListingRepositoryImpl::new(db.clone())
            .create(CreateListing::new(
                "Loft in El Poblado".into(),
                "Bright loft near the metro".into(),
                "El Poblado, Medellín".into(),
                Decimal::from(100000),
                1,
                1,
                4,
                municipality.municipality_id,
                host.user_id,
            ))
            .await?;

        let booking_id = BookingRepositoryImpl::new(db)
            .create(CreateBooking::new(
                listing_id,
                guest.user_id,
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
                2,
                Decimal::from(400000),
                BookingStatus::Confirmed,
            ))
            .await?;

        Ok((guest.user_id, host.user_id, booking_id))
    }

    #[sqlx::test]
    async fn second_cancel_succeeds_without_restamping(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (guest, _host, booking_id) = seed_booking(&pool).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        repo.cancel(CancelBooking::new(booking_id, guest)).await?;
        let cancelled = repo.find_by_id(booking_id).await?;
        assert_eq!(cancelled.status, BookingStatus::Cancelled);

        repo.cancel(CancelBooking::new(booking_id, guest)).await?;
        let again = repo.find_by_id(booking_id).await?;
        assert_eq!(again.status, BookingStatus::Cancelled);
        assert_eq!(again.updated_at, cancelled.updated_at);
        Ok(())
    }

    #[sqlx::test]
    async fn guest_and_host_views_are_independent(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (guest, host, booking_id) = seed_booking(&pool).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let by_guest = repo.find_by_guest(guest).await?;
        assert_eq!(by_guest.len(), 1);
        assert_eq!(by_guest[0].booking_id, booking_id);

        let by_host = repo.find_by_host(host).await?;
        assert_eq!(by_host.len(), 1);
        assert_eq!(by_host[0].booking_id, booking_id);

        // The host made no bookings and the guest owns no listings.
        assert!(repo.find_by_guest(host).await?.is_empty());
        assert!(repo.find_by_host(guest).await?.is_empty());
        Ok(())
    }

    #[sqlx::test]
    async fn owner_may_cancel_but_a_stranger_may_not(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (_guest, host, booking_id) = seed_booking(&pool).await?;
        let db = ConnectionPool::new(pool);
        let stranger = UserRepositoryImpl::new(db.clone())
            .create(CreateUser::new(
                "stranger".into(),
                "stranger@example.com".into(),
                "secret".into(),
            ))
            .await?;
        let repo = BookingRepositoryImpl::new(db);

        let res = repo
            .cancel(CancelBooking::new(booking_id, stranger.user_id))
            .await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation)));

        repo.cancel(CancelBooking::new(booking_id, host)).await?;
        let booking = repo.find_by_id(booking_id).await?;
        assert_eq!(booking.status, BookingStatus::Cancelled);
        Ok(())
    }
}
