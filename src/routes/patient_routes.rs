// src/routes/patient_routes.rs

use askama::Template;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    routing::get,
    Form, Router,
};
use axum_extra::extract::SignedCookieJar;

use crate::db;
use crate::error::AppError;
use crate::flash::{self, Notice};
use crate::models::{AppState, InsurerRow, PatientForm, PatientRow};
use crate::routes::render;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/create-new-patient",
            get(new_patient_form).post(create_patient),
        )
        .route("/view-patient-details", get(list_patients))
        .route(
            "/edit-patient-details/{patient_id}",
            get(edit_patient_form).put(update_patient),
        )
}

/* -------------------------
   Views
--------------------------*/

#[derive(Template)]
#[template(path = "patients.html")]
struct PatientsTemplate {
    notice: Option<Notice>,
    patients: Vec<PatientRow>,
}

#[derive(Template)]
#[template(path = "new_patient.html")]
struct NewPatientTemplate {
    notice: Option<Notice>,
    insurers: Vec<InsurerRow>,
}

#[derive(Template)]
#[template(path = "edit_patient.html")]
struct EditPatientTemplate {
    notice: Option<Notice>,
    patient: PatientRow,
    insurers: Vec<InsurerRow>,
}

/* -------------------------
   Handlers
--------------------------*/

pub async fn list_patients(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<impl IntoResponse, AppError> {
    let (jar, notice) = flash::take(jar);

    let mut patients = db::list_patients(&state.db).await?;
    // the backing routine does not guarantee an order
    sort_patients(&mut patients);

    Ok((jar, render(PatientsTemplate { notice, patients })?))
}

fn sort_patients(patients: &mut [PatientRow]) {
    patients.sort_by_key(|p| p.patient_id);
}

pub async fn new_patient_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<impl IntoResponse, AppError> {
    let (jar, notice) = flash::take(jar);
    let insurers = db::list_insurers(&state.db).await?;
    Ok((jar, render(NewPatientTemplate { notice, insurers })?))
}

pub async fn create_patient(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<PatientForm>,
) -> Result<impl IntoResponse, AppError> {
    let ids = db::create_patient(&state.db, &form).await?;
    tracing::info!(
        patient_id = ids.patient_id,
        insurance_id = ids.insurance_id,
        "patient registered"
    );

    let jar = flash::push(
        jar,
        Notice::success("Patient added successfully..!"),
        state.flash_ttl_minutes,
    );
    Ok((jar, Redirect::to("/view-patient-details")))
}

pub async fn edit_patient_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(patient_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (jar, notice) = flash::take(jar);

    let patient = db::get_patient(&state.db, patient_id).await?.ok_or_else(|| {
        AppError::NotFound(format!("No patient with id {patient_id} found to update."))
    })?;
    let insurers = db::list_insurers(&state.db).await?;

    Ok((
        jar,
        render(EditPatientTemplate {
            notice,
            patient,
            insurers,
        })?,
    ))
}

pub async fn update_patient(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(patient_id): Path<i32>,
    Form(form): Form<PatientForm>,
) -> Result<impl IntoResponse, AppError> {
    db::update_patient(&state.db, patient_id, &form).await?;
    tracing::info!(patient_id, "patient updated");

    let jar = flash::push(
        jar,
        Notice::success("Patient details updated successfully..!"),
        state.flash_ttl_minutes,
    );
    Ok((jar, Redirect::to("/view-patient-details")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(patient_id: i32, first_name: &str) -> PatientRow {
        PatientRow {
            patient_id,
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            address: "12 High Street".to_string(),
            age: 40,
            insurance_id: 500 + patient_id,
            insurance_number: format!("POL-{patient_id:04}"),
            insurer_id: 1,
            insurance_type: "Private".to_string(),
        }
    }

    #[test]
    fn listing_is_sorted_by_id_ascending() {
        let mut patients = vec![patient(7, "Carol"), patient(2, "Alice"), patient(5, "Bob")];
        sort_patients(&mut patients);

        let ids: Vec<i32> = patients.iter().map(|p| p.patient_id).collect();
        assert_eq!(ids, vec![2, 5, 7]);
    }

    #[test]
    fn listing_template_renders_rows_in_order() {
        let page = PatientsTemplate {
            notice: None,
            patients: vec![patient(2, "Alice"), patient(5, "Bob")],
        };
        let html = page.render().unwrap();

        let alice = html.find("Alice").unwrap();
        let bob = html.find("Bob").unwrap();
        assert!(alice < bob);
    }

    #[test]
    fn empty_listing_renders_zero_rows_not_an_error() {
        let page = PatientsTemplate {
            notice: None,
            patients: Vec::new(),
        };
        let html = page.render().unwrap();
        assert!(html.contains("No patients have been registered yet."));
    }

    #[test]
    fn listing_shows_flash_notice() {
        let page = PatientsTemplate {
            notice: Some(Notice::success("Patient added successfully..!")),
            patients: Vec::new(),
        };
        let html = page.render().unwrap();
        assert!(html.contains("Patient added successfully..!"));
    }

    #[test]
    fn edit_form_is_prefilled_with_patient_and_insurers() {
        let page = EditPatientTemplate {
            notice: None,
            patient: patient(7, "Carol"),
            insurers: vec![
                InsurerRow {
                    insurer_id: 1,
                    insurer_name: "Acme Health".to_string(),
                },
                InsurerRow {
                    insurer_id: 2,
                    insurer_name: "Omega Mutual".to_string(),
                },
            ],
        };
        let html = page.render().unwrap();

        assert!(html.contains(r#"value="Carol""#));
        assert!(html.contains("Acme Health"));
        assert!(html.contains("Omega Mutual"));
        assert!(html.contains("/edit-patient-details/7?_method=PUT"));
    }
}
