//! Teaching staff records.

use crate::core::non_blank;
use crate::entities::{Profesor, profesor};
use crate::errors::{Error, Result};
use sea_orm::{Set, prelude::*};

/// Arguments for adding a teacher to the roster.
#[derive(Debug, Default)]
pub struct NuevoProfesor<'a> {
    /// First names, required
    pub nombres: &'a str,
    /// Last names, required
    pub apellidos: &'a str,
    /// Contact email, unique across teachers when present
    pub email: Option<&'a str>,
    /// Phone number
    pub telefono: Option<&'a str>,
    /// Subject specialty (e.g., "Matemáticas y Física")
    pub especialidad: Option<&'a str>,
    /// Years of teaching experience
    pub experiencia_anos: Option<i32>,
    /// Academic degree
    pub grado_academico: Option<&'a str>,
    /// Short biography for the site
    pub biografia: Option<&'a str>,
    /// Portrait URL for the site
    pub foto_url: Option<&'a str>,
}

/// Add a teacher to the staff roster, active by default.
pub async fn create_profesor(
    db: &DatabaseConnection,
    datos: &NuevoProfesor<'_>,
) -> Result<profesor::Model> {
    let nombres = datos.nombres.trim();
    let apellidos = datos.apellidos.trim();
    if nombres.is_empty() || apellidos.is_empty() {
        return Err(Error::Validation {
            message: "Nombres y apellidos son obligatorios".to_string(),
        });
    }

    let profesor = profesor::ActiveModel {
        nombres: Set(nombres.to_string()),
        apellidos: Set(apellidos.to_string()),
        email: Set(non_blank(datos.email)),
        telefono: Set(non_blank(datos.telefono)),
        especialidad: Set(non_blank(datos.especialidad)),
        experiencia_anos: Set(datos.experiencia_anos),
        grado_academico: Set(non_blank(datos.grado_academico)),
        biografia: Set(non_blank(datos.biografia)),
        foto_url: Set(non_blank(datos.foto_url)),
        activo: Set(true),
        fecha_registro: Set(Some(chrono::Utc::now())),
        ..Default::default()
    };

    let profesor = profesor.insert(db).await?;
    Ok(profesor)
}

/// Look up a teacher by id.
pub async fn get_profesor_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<profesor::Model>> {
    let profesor = Profesor::find_by_id(id).one(db).await?;
    Ok(profesor)
}
