//! Appointment Repository

use std::collections::HashSet;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::models::AppointmentStatus;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{
    Appointment, AppointmentDetail, AppointmentId, BarbershopId, ServiceId, StaffId, UserId,
};

const DETAIL_FETCH: &str = "FETCH barbershop, service, staff, staff.user, customer";

#[derive(Clone)]
pub struct AppointmentRepository {
    base: BaseRepository,
}

impl AppointmentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find appointment by id (raw links)
    pub async fn find_by_id(&self, id: &AppointmentId) -> RepoResult<Option<Appointment>> {
        let appt: Option<Appointment> = self.base.db().select(id.clone()).await?;
        Ok(appt)
    }

    /// Find appointment by id with display fields resolved
    pub async fn find_detail_by_id(
        &self,
        id: &AppointmentId,
    ) -> RepoResult<Option<AppointmentDetail>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM appointment WHERE id = $id {DETAIL_FETCH}"
            ))
            .bind(("id", id.clone()))
            .await?;
        let appts: Vec<AppointmentDetail> = result.take(0)?;
        Ok(appts.into_iter().next())
    }

    /// Appointments across a set of shops (the caller's visibility set)
    pub async fn find_detail_by_shops(
        &self,
        shops: &HashSet<BarbershopId>,
    ) -> RepoResult<Vec<AppointmentDetail>> {
        if shops.is_empty() {
            return Ok(Vec::new());
        }
        let shop_vec: Vec<BarbershopId> = shops.iter().cloned().collect();
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM appointment WHERE barbershop IN $shops \
                 ORDER BY scheduled_at {DETAIL_FETCH}"
            ))
            .bind(("shops", shop_vec))
            .await?;
        let appts: Vec<AppointmentDetail> = result.take(0)?;
        Ok(appts)
    }

    /// A customer's own bookings
    pub async fn find_detail_by_customer(
        &self,
        customer: &UserId,
    ) -> RepoResult<Vec<AppointmentDetail>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM appointment WHERE customer = $customer \
                 ORDER BY scheduled_at {DETAIL_FETCH}"
            ))
            .bind(("customer", customer.clone()))
            .await?;
        let appts: Vec<AppointmentDetail> = result.take(0)?;
        Ok(appts)
    }

    /// Create a booking; every new appointment starts out pending
    pub async fn create(
        &self,
        barbershop: &BarbershopId,
        service: &ServiceId,
        staff: &StaffId,
        customer: &UserId,
        scheduled_at: i64,
    ) -> RepoResult<AppointmentDetail> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE ONLY appointment SET
                    barbershop = $barbershop,
                    service = $service,
                    staff = $staff,
                    customer = $customer,
                    scheduled_at = $scheduled_at,
                    status = $status,
                    created_at = time::unix(time::now()),
                    updated_at = time::unix(time::now())
                RETURN AFTER"#,
            )
            .bind(("barbershop", barbershop.clone()))
            .bind(("service", service.clone()))
            .bind(("staff", staff.clone()))
            .bind(("customer", customer.clone()))
            .bind(("scheduled_at", scheduled_at))
            .bind(("status", AppointmentStatus::Pending))
            .await?;

        let created: Option<Appointment> = result.take(0)?;
        let created =
            created.ok_or_else(|| RepoError::Database("Failed to create appointment".to_string()))?;
        let id = created
            .id
            .ok_or_else(|| RepoError::Database("Created appointment missing id".to_string()))?;

        self.find_detail_by_id(&id)
            .await?
            .ok_or_else(|| RepoError::Database("Created appointment not found".to_string()))
    }

    /// Write a new lifecycle status
    ///
    /// Transition legality is the caller's concern (`booking::lifecycle`);
    /// this only persists the result.
    pub async fn update_status(
        &self,
        id: &AppointmentId,
        status: AppointmentStatus,
    ) -> RepoResult<AppointmentDetail> {
        self.base
            .db()
            .query(
                r#"UPDATE $appt SET
                    status = $status,
                    updated_at = time::unix(time::now())"#,
            )
            .bind(("appt", id.clone()))
            .bind(("status", status))
            .await?;

        self.find_detail_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Appointment {id} not found")))
    }
}
