//! Read-only JSON endpoints.
//!
//! These exist for the follow-up dashboard the staff run elsewhere: the
//! active program catalog and the latest leads. Both are plain arrays with
//! stable field names; enums serialize as their stored string literals.

use crate::core::{contacto, programa};
use crate::entities::{
    Estado, Modalidad, NivelAcademico, contacto as contacto_entity, programa as programa_entity,
};
use crate::errors::Error;
use crate::web::AppState;
use axum::{Json, extract::State, http::StatusCode};
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use tracing::error;

/// How many leads `/api/contactos` returns at most.
const LIMITE_CONTACTOS: u64 = 50;

/// One program as exposed by `/api/programas`.
#[derive(Debug, Serialize)]
pub struct ProgramaDto {
    /// Stored program id
    pub id: i32,
    /// Program name as shown on the site
    pub nombre: String,
    /// Marketing description
    pub descripcion: Option<String>,
    /// Monthly price as a JSON number, null when the program has none
    pub precio_mensual: Option<f64>,
    /// Program length in months
    pub duracion_meses: Option<i32>,
    /// Delivery modality, serialized as its stored literal
    pub modalidad: Modalidad,
    /// Target academic level, serialized as its stored literal
    pub nivel_academico: NivelAcademico,
}

/// One lead as exposed by `/api/contactos`.
#[derive(Debug, Serialize)]
pub struct ContactoDto {
    /// Stored lead id
    pub id: i32,
    /// Name the visitor gave
    pub nombres: String,
    /// Phone number as typed
    pub telefono: Option<String>,
    /// Program the visitor asked about
    pub programa_interes: Option<String>,
    /// Free-text message
    pub mensaje: Option<String>,
    /// Pipeline status, serialized as its stored literal
    pub estado: Estado,
    /// RFC 3339 timestamp, null for legacy rows without one
    pub fecha_contacto: Option<String>,
}

/// Flat error body both endpoints return on a store failure.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Human-readable description of what failed
    pub error: String,
}

/// GET `/api/programas` - every active program.
pub async fn programas(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProgramaDto>>, (StatusCode, Json<ApiError>)> {
    let programas = programa::get_programas_activos(&state.db)
        .await
        .map_err(|err| error_interno("list programs", &err))?;

    Ok(Json(programas.into_iter().map(programa_to_dto).collect()))
}

/// GET `/api/contactos` - the most recent leads, newest first.
pub async fn contactos(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactoDto>>, (StatusCode, Json<ApiError>)> {
    let contactos = contacto::get_contactos_recientes(&state.db, LIMITE_CONTACTOS)
        .await
        .map_err(|err| error_interno("list contacts", &err))?;

    Ok(Json(contactos.into_iter().map(contacto_to_dto).collect()))
}

fn error_interno(operacion: &str, err: &Error) -> (StatusCode, Json<ApiError>) {
    // Operators get the detail; clients only learn that the query failed.
    error!("Failed to {operacion}: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError {
            error: "Error interno del servidor".to_string(),
        }),
    )
}

fn programa_to_dto(programa: programa_entity::Model) -> ProgramaDto {
    ProgramaDto {
        id: programa.id,
        nombre: programa.nombre,
        descripcion: programa.descripcion,
        precio_mensual: programa.precio_mensual.and_then(|p| p.to_f64()),
        duracion_meses: programa.duracion_meses,
        modalidad: programa.modalidad,
        nivel_academico: programa.nivel_academico,
    }
}

fn contacto_to_dto(contacto: contacto_entity::Model) -> ContactoDto {
    ContactoDto {
        id: contacto.id,
        nombres: contacto.nombres,
        telefono: contacto.telefono,
        programa_interes: contacto.programa_interes,
        mensaje: contacto.mensaje,
        estado: contacto.estado,
        fecha_contacto: contacto.fecha_contacto.map(|f| f.to_rfc3339()),
    }
}
