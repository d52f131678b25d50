//! Program catalog logic: lookups for the public pages and API, plus the
//! startup seeding that guarantees a fresh deployment has offerings to show.

use crate::entities::{Modalidad, NivelAcademico, Programa, ProgramaColumn, programa};
use crate::errors::{Error, Result};
use sea_orm::{Set, TransactionTrait, prelude::*};
use tracing::{debug, info};

/// Create a program.
pub async fn create_programa(
    db: &DatabaseConnection,
    nombre: &str,
    descripcion: Option<&str>,
    precio_mensual: Option<Decimal>,
    duracion_meses: Option<i32>,
    modalidad: Modalidad,
    nivel_academico: NivelAcademico,
) -> Result<programa::Model> {
    let nombre = nombre.trim();
    if nombre.is_empty() {
        return Err(Error::Validation {
            message: "El nombre del programa es obligatorio".to_string(),
        });
    }

    let programa = programa::ActiveModel {
        nombre: Set(nombre.to_string()),
        descripcion: Set(descripcion.map(str::to_string)),
        precio_mensual: Set(precio_mensual),
        duracion_meses: Set(duracion_meses),
        modalidad: Set(modalidad),
        nivel_academico: Set(nivel_academico),
        activo: Set(true),
        fecha_creacion: Set(Some(chrono::Utc::now())),
        ..Default::default()
    };

    let programa = programa.insert(db).await?;
    Ok(programa)
}

/// Look up a program by id.
pub async fn get_programa_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<programa::Model>> {
    let programa = Programa::find_by_id(id).one(db).await?;
    Ok(programa)
}

/// All programs currently offered, in table order.
pub async fn get_programas_activos(db: &DatabaseConnection) -> Result<Vec<programa::Model>> {
    let programas = Programa::find()
        .filter(ProgramaColumn::Activo.eq(true))
        .all(db)
        .await?;
    Ok(programas)
}

/// Number of programs in the catalog, active or not.
pub async fn count_programas(db: &DatabaseConnection) -> Result<u64> {
    let count = Programa::find().count(db).await?;
    Ok(count)
}

/// Seed the initial program catalog if the table is empty.
///
/// Runs once at startup. Any rows at all (seeded or operator-created) make
/// this a no-op, so existing deployments are never touched. The whole batch
/// goes in inside a single transaction.
pub async fn seed_programas_iniciales(db: &DatabaseConnection) -> Result<()> {
    let existing = count_programas(db).await?;
    if existing > 0 {
        debug!("Program catalog already has {existing} rows, skipping seed");
        return Ok(());
    }

    let catalogo = catalogo_inicial();
    let total = catalogo.len();

    let txn = db.begin().await?;
    Programa::insert_many(catalogo).exec(&txn).await?;
    txn.commit().await?;

    info!("Seeded {total} initial programs");
    Ok(())
}

/// The catalog a brand-new deployment starts with.
fn catalogo_inicial() -> Vec<programa::ActiveModel> {
    let ahora = chrono::Utc::now();
    vec![
        programa_inicial(
            "MATECERO (Primaria)",
            "Programa de matemáticas para estudiantes de primaria",
            Decimal::new(8000, 2),
            12,
            NivelAcademico::Primaria,
            ahora,
        ),
        programa_inicial(
            "BÁSICO (1° - 2° Secundaria)",
            "Programa integral para estudiantes de 1° y 2° de secundaria",
            Decimal::new(10000, 2),
            12,
            NivelAcademico::Secundaria,
            ahora,
        ),
        programa_inicial(
            "INTERMEDIO (3° - 4° Secundaria)",
            "Programa avanzado para estudiantes de 3° y 4° de secundaria",
            Decimal::new(12000, 2),
            12,
            NivelAcademico::Secundaria,
            ahora,
        ),
        programa_inicial(
            "PREUNIVERSITARIO",
            "Preparación intensiva para el ingreso a universidades",
            Decimal::new(15000, 2),
            10,
            NivelAcademico::Preuniversitario,
            ahora,
        ),
        programa_inicial(
            "BECA 18",
            "Programa especializado para postular a la Beca 18",
            Decimal::new(13000, 2),
            8,
            NivelAcademico::Preuniversitario,
            ahora,
        ),
        programa_inicial(
            "MATEMÁTICAS",
            "Curso especializado en matemáticas para todos los niveles",
            Decimal::new(9000, 2),
            6,
            NivelAcademico::Secundaria,
            ahora,
        ),
        programa_inicial(
            "CIENCIAS",
            "Programa integral de ciencias: física, química y biología",
            Decimal::new(11000, 2),
            12,
            NivelAcademico::Secundaria,
            ahora,
        ),
    ]
}

fn programa_inicial(
    nombre: &str,
    descripcion: &str,
    precio_mensual: Decimal,
    duracion_meses: i32,
    nivel_academico: NivelAcademico,
    ahora: DateTimeUtc,
) -> programa::ActiveModel {
    programa::ActiveModel {
        nombre: Set(nombre.to_string()),
        descripcion: Set(Some(descripcion.to_string())),
        precio_mensual: Set(Some(precio_mensual)),
        duracion_meses: Set(Some(duracion_meses)),
        modalidad: Set(Modalidad::Virtual),
        nivel_academico: Set(nivel_academico),
        activo: Set(true),
        fecha_creacion: Set(Some(ahora)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    use super::*;
    use crate::test_utils::{create_test_programa, setup_seeded_db, setup_test_db};

    #[tokio::test]
    async fn seeding_a_fresh_database_inserts_the_full_catalog() {
        let db = setup_test_db().await.unwrap();

        seed_programas_iniciales(&db).await.unwrap();

        let programas = Programa::find().all(&db).await.unwrap();
        let resumen: Vec<(&str, Option<Decimal>, Option<i32>, NivelAcademico)> = programas
            .iter()
            .map(|p| {
                (
                    p.nombre.as_str(),
                    p.precio_mensual,
                    p.duracion_meses,
                    p.nivel_academico.clone(),
                )
            })
            .collect();
        assert_eq!(
            resumen,
            [
                (
                    "MATECERO (Primaria)",
                    Some(Decimal::new(8000, 2)),
                    Some(12),
                    NivelAcademico::Primaria,
                ),
                (
                    "BÁSICO (1° - 2° Secundaria)",
                    Some(Decimal::new(10000, 2)),
                    Some(12),
                    NivelAcademico::Secundaria,
                ),
                (
                    "INTERMEDIO (3° - 4° Secundaria)",
                    Some(Decimal::new(12000, 2)),
                    Some(12),
                    NivelAcademico::Secundaria,
                ),
                (
                    "PREUNIVERSITARIO",
                    Some(Decimal::new(15000, 2)),
                    Some(10),
                    NivelAcademico::Preuniversitario,
                ),
                (
                    "BECA 18",
                    Some(Decimal::new(13000, 2)),
                    Some(8),
                    NivelAcademico::Preuniversitario,
                ),
                (
                    "MATEMÁTICAS",
                    Some(Decimal::new(9000, 2)),
                    Some(6),
                    NivelAcademico::Secundaria,
                ),
                (
                    "CIENCIAS",
                    Some(Decimal::new(11000, 2)),
                    Some(12),
                    NivelAcademico::Secundaria,
                ),
            ]
        );

        let preuniversitario = Programa::find()
            .filter(ProgramaColumn::Nombre.eq("PREUNIVERSITARIO"))
            .one(&db)
            .await
            .unwrap()
            .expect("seeded program should exist");
        assert_eq!(
            preuniversitario.descripcion.as_deref(),
            Some("Preparación intensiva para el ingreso a universidades")
        );
        assert_eq!(preuniversitario.precio_mensual, Some(Decimal::new(15000, 2)));
        assert_eq!(preuniversitario.duracion_meses, Some(10));
        assert_eq!(preuniversitario.modalidad, Modalidad::Virtual);
        assert_eq!(
            preuniversitario.nivel_academico,
            NivelAcademico::Preuniversitario
        );
        assert!(preuniversitario.activo);
        assert!(preuniversitario.fecha_creacion.is_some());
    }

    #[tokio::test]
    async fn seeding_twice_leaves_the_catalog_untouched() {
        let db = setup_test_db().await.unwrap();

        seed_programas_iniciales(&db).await.unwrap();
        let before = Programa::find().all(&db).await.unwrap();

        seed_programas_iniciales(&db).await.unwrap();
        let after = Programa::find().all(&db).await.unwrap();

        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn seeding_skips_a_partially_populated_catalog() {
        let db = setup_test_db().await.unwrap();

        create_test_programa(&db, "REFORZAMIENTO").await.unwrap();

        seed_programas_iniciales(&db).await.unwrap();

        let programas = Programa::find().all(&db).await.unwrap();
        assert_eq!(programas.len(), 1);
        assert_eq!(programas[0].nombre, "REFORZAMIENTO");
    }

    #[tokio::test]
    async fn active_listing_excludes_deactivated_programs() {
        let db = setup_seeded_db().await.unwrap();

        let beca = Programa::find()
            .filter(ProgramaColumn::Nombre.eq("BECA 18"))
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        let mut beca: programa::ActiveModel = beca.into();
        beca.activo = Set(false);
        beca.update(&db).await.unwrap();

        let activos = get_programas_activos(&db).await.unwrap();
        assert_eq!(activos.len(), 6);
        assert!(activos.iter().all(|p| p.nombre != "BECA 18"));
        assert!(activos.iter().all(|p| p.activo));
    }

    #[tokio::test]
    async fn monthly_price_survives_a_round_trip() {
        let db = setup_test_db().await.unwrap();

        let creado = create_programa(
            &db,
            "VERANO",
            None,
            Some(Decimal::new(10000, 2)),
            Some(2),
            Modalidad::Hibrida,
            NivelAcademico::Secundaria,
        )
        .await
        .unwrap();

        let leido = get_programa_by_id(&db, creado.id)
            .await
            .unwrap()
            .expect("program should be readable back");
        assert_eq!(leido.precio_mensual, Some(Decimal::new(10000, 2)));
    }

    #[tokio::test]
    async fn create_rejects_a_blank_name() {
        let db = setup_test_db().await.unwrap();

        let result = create_programa(
            &db,
            "   ",
            None,
            None,
            None,
            Modalidad::Virtual,
            NivelAcademico::Primaria,
        )
        .await;

        assert!(matches!(result, Err(Error::Validation { .. })));
        assert_eq!(count_programas(&db).await.unwrap(), 0);
    }
}
