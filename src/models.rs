use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use serde::Deserialize;
use sqlx::FromRow;

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub cookie_key: Key,
    pub flash_ttl_minutes: i64,
}

// SignedCookieJar pulls its key out of the shared state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.cookie_key.clone()
    }
}

/* -------------------------
   Form DTOs
--------------------------*/

/// Field set submitted by both the registration and the edit form.
/// Everything arrives as text; the stored routines cast internally, so a
/// malformed value surfaces as a database error rather than a local one.
#[derive(Debug, Deserialize)]
pub struct PatientForm {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub age: String,
    pub insurance_number: String,
    pub insurer_id: String,
    pub insurance_type: String,
}

/* -------------------------
   DB Row Models
--------------------------*/

#[derive(Debug, Clone, FromRow)]
pub struct PatientRow {
    pub patient_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub age: i32,
    pub insurance_id: i32,
    pub insurance_number: String,
    pub insurer_id: i32,
    pub insurance_type: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct InsurerRow {
    pub insurer_id: i32,
    pub insurer_name: String,
}

/// One row of the appointment listing, joined with patient data DB-side.
#[derive(Debug, Clone, FromRow)]
pub struct VisitRow {
    pub appointment_id: i32,
    pub patient_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub visit_date: chrono::NaiveDate,
    pub visit_time: chrono::NaiveTime,
    pub reason: Option<String>,
}

/// Identifiers reserved by the database during patient registration.
/// The application never invents these.
#[derive(Debug, Clone, Copy)]
pub struct NewPatientIds {
    pub patient_id: i32,
    pub insurance_id: i32,
}
