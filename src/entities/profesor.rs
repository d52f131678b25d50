//! Profesor entity - Represents a teacher on staff.
//!
//! Teachers are presentational data for the site (specialty, degree, bio,
//! photo). Managed by administrative tooling outside this application; the
//! web layer never writes this table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Teacher database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profesores")]
pub struct Model {
    /// Unique identifier for the teacher
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Given name(s)
    pub nombres: String,
    /// Family name(s)
    pub apellidos: String,
    /// Contact email, unique across teachers when present
    #[sea_orm(unique)]
    pub email: Option<String>,
    /// Phone number
    pub telefono: Option<String>,
    /// Subject specialty (e.g., "Matemáticas y Física")
    pub especialidad: Option<String>,
    /// Years of teaching experience
    pub experiencia_anos: Option<i32>,
    /// Academic degree held
    pub grado_academico: Option<String>,
    /// Free-text biography shown on the site
    #[sea_orm(column_type = "Text", nullable)]
    pub biografia: Option<String>,
    /// URL of the profile photo
    pub foto_url: Option<String>,
    /// Whether the teacher is on active staff
    pub activo: bool,
    /// When the teacher was registered, assigned at creation
    pub fecha_registro: Option<DateTimeUtc>,
}

/// Profesor has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
