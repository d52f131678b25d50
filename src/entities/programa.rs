//! Programa entity - Represents a tutoring program in the catalog.
//!
//! Programs are what the academy sells: a name, a monthly price and a
//! delivery modality at a given academic level. The active subset of this
//! table is what `/api/programas` serves. The catalog is seeded at first
//! startup (see `core::programa::seed_programas_iniciales`).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Delivery modality of a program.
///
/// Stored as a lowercase string column; any other value is rejected when
/// mapping back into this closed enum.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum Modalidad {
    /// Remote classes
    #[sea_orm(string_value = "virtual")]
    Virtual,
    /// In-person classes
    #[sea_orm(string_value = "presencial")]
    Presencial,
    /// Mixed remote/in-person
    #[sea_orm(string_value = "hibrida")]
    Hibrida,
}

/// Academic level a program targets. Required on every program, no default.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum NivelAcademico {
    /// Primary school
    #[sea_orm(string_value = "primaria")]
    Primaria,
    /// Secondary school
    #[sea_orm(string_value = "secundaria")]
    Secundaria,
    /// University-entrance preparation
    #[sea_orm(string_value = "preuniversitario")]
    Preuniversitario,
    /// University level
    #[sea_orm(string_value = "universitario")]
    Universitario,
}

/// Program database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "programas")]
pub struct Model {
    /// Unique identifier for the program
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Program name as marketed (e.g., "PREUNIVERSITARIO")
    pub nombre: String,
    /// Marketing description
    #[sea_orm(column_type = "Text", nullable)]
    pub descripcion: Option<String>,
    /// Monthly price in soles, two fraction digits
    #[sea_orm(column_type = "Decimal(Some((8, 2)))", nullable)]
    pub precio_mensual: Option<Decimal>,
    /// Program duration in months
    pub duracion_meses: Option<i32>,
    /// Delivery modality, defaults to `virtual` at creation
    pub modalidad: Modalidad,
    /// Academic level the program targets
    pub nivel_academico: NivelAcademico,
    /// Whether the program is offered; inactive rows stay in the table
    pub activo: bool,
    /// When the program was created, assigned at creation
    pub fecha_creacion: Option<DateTimeUtc>,
}

/// Programa has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
