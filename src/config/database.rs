//! Database connection and table creation using `SeaORM`.
//!
//! The schema is derived from the entity definitions with
//! `Schema::create_table_from_entity`, so the tables always match the Rust
//! structs without hand-written SQL. Creation is `IF NOT EXISTS`: restarting
//! against an already-provisioned database is a no-op, which is what lets
//! startup treat schema setup as best-effort.

use crate::entities::{Contacto, Estudiante, Profesor, Programa};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Establishes a connection to the database behind the given URL.
///
/// Accepts any backend `SeaORM` was built with; deployments use MySQL while
/// local development and tests run on `SQLite`. For a file-backed `SQLite`
/// URL the parent directory is created first, so the default
/// `sqlite://data/...` path works on a fresh checkout.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection> {
    if let Some(file) = database_url.strip_prefix("sqlite://") {
        let file = file.split('?').next().unwrap_or(file);
        if let Some(parent) = std::path::Path::new(file).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the four tables from the entity definitions.
///
/// Idempotent: every statement carries `IF NOT EXISTS`, so calling this on a
/// provisioned database changes nothing. Columns added to an entity after a
/// table exists are not reconciled here; that is an operator migration.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut estudiantes = schema.create_table_from_entity(Estudiante);
    let mut programas = schema.create_table_from_entity(Programa);
    let mut contactos = schema.create_table_from_entity(Contacto);
    let mut profesores = schema.create_table_from_entity(Profesor);

    db.execute(builder.build(estudiantes.if_not_exists())).await?;
    db.execute(builder.build(programas.if_not_exists())).await?;
    db.execute(builder.build(contactos.if_not_exists())).await?;
    db.execute(builder.build(profesores.if_not_exists())).await?;

    Ok(())
}
