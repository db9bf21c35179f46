use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::*;

use super::specialization::find_or_create_specialization;

/// Joined row as read from SQLite, before enum columns are parsed.
struct AppointmentRow {
    appointment_code: String,
    patient_name: String,
    age: u32,
    gender: String,
    phone: String,
    symptom_text: String,
    predicted_disease: String,
    probability: f64,
    urgency_level: i64,
    urgency_reason: String,
    doctor_name: String,
    specialization: String,
    appointment_date: NaiveDate,
    appointment_time: NaiveTime,
    status: String,
    mode: String,
}

impl TryFrom<AppointmentRow> for AppointmentRecord {
    type Error = DatabaseError;

    fn try_from(row: AppointmentRow) -> Result<Self, Self::Error> {
        Ok(AppointmentRecord {
            appointment_code: row.appointment_code,
            patient_name: row.patient_name,
            age: row.age,
            gender: row.gender,
            phone: row.phone,
            symptom_text: row.symptom_text,
            predicted_disease: row.predicted_disease,
            probability: row.probability,
            urgency_level: row.urgency_level,
            urgency_reason: row.urgency_reason,
            doctor_name: row.doctor_name,
            specialization: row.specialization,
            appointment_date: row.appointment_date,
            appointment_time: row.appointment_time,
            status: AppointmentStatus::from_str(&row.status)?,
            mode: ConsultationMode::from_str(&row.mode)?,
        })
    }
}

/// Fetches queued appointments (see [`AppointmentStatus::QUEUED`]) joined
/// across patients, symptoms, predictions, doctors and specializations.
///
/// `date` and `specialization` narrow the result in SQL when given.
/// Rows come back most urgent first, then by date.
pub fn fetch_appointments(
    conn: &Connection,
    date: Option<NaiveDate>,
    specialization: Option<&str>,
) -> Result<Vec<AppointmentRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT a.appointment_code, p.full_name, p.age, p.gender, p.phone,
                s.symptom_text, pred.predicted_disease, pred.probability,
                a.urgency_level, pred.urgency_reason,
                d.name, spec.spec_name,
                a.appointment_date, a.appointment_time, a.status, a.mode
         FROM appointments a
         INNER JOIN patients p ON a.patient_id = p.patient_id
         INNER JOIN symptoms s ON a.symptom_id = s.symptom_id
         INNER JOIN predictions pred ON s.symptom_id = pred.symptom_id
         INNER JOIN doctors d ON a.doctor_id = d.doctor_id
         INNER JOIN specializations spec ON d.spec_id = spec.spec_id
         WHERE a.status IN (?3, ?4)
           AND (?1 IS NULL OR a.appointment_date = ?1)
           AND (?2 IS NULL OR spec.spec_name = ?2)
         ORDER BY a.urgency_level DESC, a.appointment_date ASC, a.appointment_id ASC",
    )?;

    let [first, second] = AppointmentStatus::QUEUED.map(|s| s.as_str());
    let rows = stmt.query_map(params![date, specialization, first, second], |row| {
        Ok(AppointmentRow {
            appointment_code: row.get(0)?,
            patient_name: row.get(1)?,
            age: row.get(2)?,
            gender: row.get(3)?,
            phone: row.get(4)?,
            symptom_text: row.get(5)?,
            predicted_disease: row.get(6)?,
            probability: row.get(7)?,
            urgency_level: row.get(8)?,
            urgency_reason: row.get(9)?,
            doctor_name: row.get(10)?,
            specialization: row.get(11)?,
            appointment_date: row.get(12)?,
            appointment_time: row.get(13)?,
            status: row.get(14)?,
            mode: row.get(15)?,
        })
    })?;

    let mut records = Vec::new();
    for row in rows {
        records.push(AppointmentRecord::try_from(row?)?);
    }
    Ok(records)
}

/// Returns the doctor id for `name` within a specialization, creating
/// the doctor (and specialization) when missing.
pub fn find_or_create_doctor(
    conn: &Connection,
    name: &str,
    specialization: &str,
) -> Result<i64, DatabaseError> {
    let spec_id = find_or_create_specialization(conn, specialization)?;

    let existing: Option<i64> = conn
        .query_row(
            "SELECT doctor_id FROM doctors WHERE name = ?1 AND spec_id = ?2 LIMIT 1",
            params![name, spec_id],
            |row| row.get(0),
        )
        .optional()?;

    match existing {
        Some(id) => Ok(id),
        None => {
            conn.execute(
                "INSERT INTO doctors (name, spec_id) VALUES (?1, ?2)",
                params![name, spec_id],
            )?;
            Ok(conn.last_insert_rowid())
        }
    }
}

/// Writes a fully joined record back as its patient, symptom,
/// prediction and appointment rows. Used for seeding and fixtures.
pub fn insert_record(conn: &Connection, record: &AppointmentRecord) -> Result<(), DatabaseError> {
    let tx = conn.unchecked_transaction()?;

    let doctor_id = find_or_create_doctor(&tx, &record.doctor_name, &record.specialization)?;

    tx.execute(
        "INSERT INTO patients (full_name, age, gender, phone) VALUES (?1, ?2, ?3, ?4)",
        params![record.patient_name, record.age, record.gender, record.phone],
    )?;
    let patient_id = tx.last_insert_rowid();

    tx.execute(
        "INSERT INTO symptoms (patient_id, symptom_text) VALUES (?1, ?2)",
        params![patient_id, record.symptom_text],
    )?;
    let symptom_id = tx.last_insert_rowid();

    tx.execute(
        "INSERT INTO predictions (symptom_id, predicted_disease, probability, urgency_level, urgency_reason)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            symptom_id,
            record.predicted_disease,
            record.probability,
            record.urgency_level,
            record.urgency_reason,
        ],
    )?;

    tx.execute(
        "INSERT INTO appointments (appointment_code, patient_id, doctor_id, symptom_id,
         appointment_date, appointment_time, urgency_level, status, mode)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            record.appointment_code,
            patient_id,
            doctor_id,
            symptom_id,
            record.appointment_date,
            record.appointment_time.format("%H:%M:%S").to_string(),
            record.urgency_level,
            record.status.as_str(),
            record.mode.as_str(),
        ],
    )?;

    tx.commit()?;
    Ok(())
}
