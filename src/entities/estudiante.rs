//! Estudiante entity - Represents an enrolled or prospective student.
//!
//! Students carry personal and schooling data plus the Peruvian address
//! triple (distrito/provincia/departamento). The table stands alone: no
//! foreign keys to other entities. Rows are never hard-deleted; `activo`
//! expresses deactivation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Student database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "estudiantes")]
pub struct Model {
    /// Unique identifier for the student
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Given name(s)
    pub nombres: String,
    /// Family name(s)
    pub apellidos: String,
    /// Contact email, unique across students when present
    #[sea_orm(unique)]
    pub email: Option<String>,
    /// Phone number
    pub telefono: Option<String>,
    /// WhatsApp contact number
    pub whatsapp: Option<String>,
    /// Birth date
    pub fecha_nacimiento: Option<Date>,
    /// Current study grade (e.g., "3° Secundaria")
    pub grado_estudio: Option<String>,
    /// School the student attends
    pub institucion_educativa: Option<String>,
    /// Free-text street address
    #[sea_orm(column_type = "Text", nullable)]
    pub direccion: Option<String>,
    /// District
    pub distrito: Option<String>,
    /// Province
    pub provincia: Option<String>,
    /// Department
    pub departamento: Option<String>,
    /// When the student was registered, assigned at creation
    pub fecha_registro: Option<DateTimeUtc>,
    /// Whether the student is active; deactivation never deletes the row
    pub activo: bool,
}

/// Estudiante has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
