//! Student registration and lookups.

use crate::core::non_blank;
use crate::entities::{Estudiante, EstudianteColumn, estudiante};
use crate::errors::{Error, Result};
use sea_orm::{Set, prelude::*};

/// Arguments for registering a student. Grouped in a struct because the
/// enrolment form carries a long tail of optional location fields.
#[derive(Debug, Default)]
pub struct NuevoEstudiante<'a> {
    /// First names, required
    pub nombres: &'a str,
    /// Last names, required
    pub apellidos: &'a str,
    /// Contact email, unique across students when present
    pub email: Option<&'a str>,
    /// Phone number
    pub telefono: Option<&'a str>,
    /// WhatsApp number when it differs from the phone
    pub whatsapp: Option<&'a str>,
    /// Date of birth
    pub fecha_nacimiento: Option<Date>,
    /// Current grade (e.g., "4° Secundaria")
    pub grado_estudio: Option<&'a str>,
    /// School the student attends
    pub institucion_educativa: Option<&'a str>,
    /// Street address
    pub direccion: Option<&'a str>,
    /// District
    pub distrito: Option<&'a str>,
    /// Province
    pub provincia: Option<&'a str>,
    /// Department (region)
    pub departamento: Option<&'a str>,
}

/// Register a student. The row starts active with the registration
/// timestamp stamped here; a duplicate email surfaces as
/// [`Error::Constraint`] via the unique index.
pub async fn create_estudiante(
    db: &DatabaseConnection,
    datos: &NuevoEstudiante<'_>,
) -> Result<estudiante::Model> {
    let nombres = datos.nombres.trim();
    let apellidos = datos.apellidos.trim();
    if nombres.is_empty() || apellidos.is_empty() {
        return Err(Error::Validation {
            message: "Nombres y apellidos son obligatorios".to_string(),
        });
    }

    let estudiante = estudiante::ActiveModel {
        nombres: Set(nombres.to_string()),
        apellidos: Set(apellidos.to_string()),
        email: Set(non_blank(datos.email)),
        telefono: Set(non_blank(datos.telefono)),
        whatsapp: Set(non_blank(datos.whatsapp)),
        fecha_nacimiento: Set(datos.fecha_nacimiento),
        grado_estudio: Set(non_blank(datos.grado_estudio)),
        institucion_educativa: Set(non_blank(datos.institucion_educativa)),
        direccion: Set(non_blank(datos.direccion)),
        distrito: Set(non_blank(datos.distrito)),
        provincia: Set(non_blank(datos.provincia)),
        departamento: Set(non_blank(datos.departamento)),
        activo: Set(true),
        fecha_registro: Set(Some(chrono::Utc::now())),
        ..Default::default()
    };

    let estudiante = estudiante.insert(db).await?;
    Ok(estudiante)
}

/// Look up a student by id.
pub async fn get_estudiante_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<estudiante::Model>> {
    let estudiante = Estudiante::find_by_id(id).one(db).await?;
    Ok(estudiante)
}

/// Look up a student by email, exact match.
pub async fn get_estudiante_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<estudiante::Model>> {
    let estudiante = Estudiante::find()
        .filter(EstudianteColumn::Email.eq(email))
        .one(db)
        .await?;
    Ok(estudiante)
}
