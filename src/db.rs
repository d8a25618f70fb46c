// src/db.rs
//
// Data access gateway. All reads and writes go through stored routines in
// the database; this module only marshals bound parameters in and rows out.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::models::{InsurerRow, NewPatientIds, PatientForm, PatientRow, VisitRow};

pub async fn connect_pg(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn list_patients(pool: &PgPool) -> Result<Vec<PatientRow>, sqlx::Error> {
    sqlx::query_as::<_, PatientRow>(
        r#"
        SELECT patient_id, first_name, last_name, address, age,
               insurance_id, insurance_number, insurer_id, insurance_type
        FROM get_patient_details()
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_patient(
    pool: &PgPool,
    patient_id: i32,
) -> Result<Option<PatientRow>, sqlx::Error> {
    sqlx::query_as::<_, PatientRow>(
        r#"
        SELECT patient_id, first_name, last_name, address, age,
               insurance_id, insurance_number, insurer_id, insurance_type
        FROM get_patient_information_by_id($1)
        "#,
    )
    .bind(patient_id)
    .fetch_optional(pool)
    .await
}

pub async fn list_insurers(pool: &PgPool) -> Result<Vec<InsurerRow>, sqlx::Error> {
    sqlx::query_as::<_, InsurerRow>(
        r#"
        SELECT insurer_id, insurer_name
        FROM get_insurer_details()
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn list_visits(pool: &PgPool) -> Result<Vec<VisitRow>, sqlx::Error> {
    sqlx::query_as::<_, VisitRow>(
        r#"
        SELECT appointment_id, patient_id, first_name, last_name,
               visit_date, visit_time, reason
        FROM get_list_of_all_appointments()
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Registers a patient: reserves the next insurance identifier and the next
/// patient identifier, then persists the record. All three routine calls
/// share one transaction, so a failure after allocation rolls the reserved
/// identifiers back instead of leaking them.
pub async fn create_patient(
    pool: &PgPool,
    form: &PatientForm,
) -> Result<NewPatientIds, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let insurance_id: i32 = sqlx::query_scalar("SELECT generate_next_insurance_number()")
        .fetch_one(&mut *tx)
        .await?;

    let patient_id: i32 = sqlx::query_scalar("SELECT get_next_patient_details_number()")
        .fetch_one(&mut *tx)
        .await?;

    sqlx::query("CALL enter_patient_details($1, $2, $3, $4, $5, $6, $7, $8, $9)")
        .bind(patient_id)
        .bind(&form.first_name)
        .bind(&form.last_name)
        .bind(&form.address)
        .bind(&form.age)
        .bind(insurance_id)
        .bind(&form.insurance_number)
        .bind(&form.insurer_id)
        .bind(&form.insurance_type)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(NewPatientIds {
        patient_id,
        insurance_id,
    })
}

pub async fn update_patient(
    pool: &PgPool,
    patient_id: i32,
    form: &PatientForm,
) -> Result<(), sqlx::Error> {
    sqlx::query("CALL update_patient_details($1, $2, $3, $4, $5, $6, $7, $8)")
        .bind(patient_id)
        .bind(&form.first_name)
        .bind(&form.last_name)
        .bind(&form.address)
        .bind(&form.age)
        .bind(&form.insurance_number)
        .bind(&form.insurer_id)
        .bind(&form.insurance_type)
        .execute(pool)
        .await?;
    Ok(())
}
