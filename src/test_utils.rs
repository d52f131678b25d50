//! Shared test utilities for `EulerWeb`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating records with sensible defaults.

use crate::{
    core::{contacto, programa},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;
use sea_orm::prelude::Decimal;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates an in-memory database with the initial program catalog seeded,
/// matching what a fresh deployment looks like after startup.
pub async fn setup_seeded_db() -> Result<DatabaseConnection> {
    let db = setup_test_db().await?;
    programa::seed_programas_iniciales(&db).await?;
    Ok(db)
}

/// Creates a test contact with sensible defaults.
///
/// # Arguments
/// * `db` - Database connection
/// * `nombres` - Contact name
///
/// # Defaults
/// * `telefono`: "987654321"
/// * `programa_interes`: "PREUNIVERSITARIO"
/// * `mensaje`: "Mensaje de prueba"
pub async fn create_test_contacto(
    db: &DatabaseConnection,
    nombres: &str,
) -> Result<entities::contacto::Model> {
    contacto::create_contacto(
        db,
        nombres,
        Some("987654321"),
        Some("PREUNIVERSITARIO"),
        Some("Mensaje de prueba"),
    )
    .await
}

/// Creates a test program with sensible defaults.
///
/// # Arguments
/// * `db` - Database connection
/// * `nombre` - Program name
///
/// # Defaults
/// * `precio_mensual`: 100.00
/// * `duracion_meses`: 6
/// * `modalidad`: virtual
/// * `nivel_academico`: secundaria
pub async fn create_test_programa(
    db: &DatabaseConnection,
    nombre: &str,
) -> Result<entities::programa::Model> {
    programa::create_programa(
        db,
        nombre,
        Some("Programa de prueba"),
        Some(Decimal::new(10000, 2)),
        Some(6),
        entities::Modalidad::Virtual,
        entities::NivelAcademico::Secundaria,
    )
    .await
}
