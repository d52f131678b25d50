//! Lead intake and follow-up queries for the contact form.

use crate::core::non_blank;
use crate::entities::{Contacto, ContactoColumn, Estado, Origen, contacto};
use crate::errors::{Error, Result};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};

/// Record a new lead from the public contact form.
///
/// Callers only supply what the visitor typed. Origin and state are fixed
/// here (`formulario_web` / `nuevo`) so a crafted request cannot inject a
/// different pipeline position, and the contact timestamp is stamped at
/// insert time. Optional fields that arrive blank are stored as NULL.
pub async fn create_contacto(
    db: &DatabaseConnection,
    nombres: &str,
    telefono: Option<&str>,
    programa_interes: Option<&str>,
    mensaje: Option<&str>,
) -> Result<contacto::Model> {
    let nombres = nombres.trim();
    if nombres.is_empty() {
        return Err(Error::Validation {
            message: "El nombre es obligatorio".to_string(),
        });
    }

    let contacto = contacto::ActiveModel {
        nombres: Set(nombres.to_string()),
        telefono: Set(non_blank(telefono)),
        programa_interes: Set(non_blank(programa_interes)),
        mensaje: Set(non_blank(mensaje)),
        origen: Set(Origen::FormularioWeb),
        estado: Set(Estado::Nuevo),
        fecha_contacto: Set(Some(chrono::Utc::now())),
        ..Default::default()
    };

    let contacto = contacto.insert(db).await?;
    Ok(contacto)
}

/// Look up a lead by id.
pub async fn get_contacto_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<contacto::Model>> {
    let contacto = Contacto::find_by_id(id).one(db).await?;
    Ok(contacto)
}

/// The most recent leads, newest first. Ties on the contact timestamp fall
/// back to the insertion id so the order stays deterministic.
pub async fn get_contactos_recientes(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<contacto::Model>> {
    let contactos = Contacto::find()
        .order_by_desc(ContactoColumn::FechaContacto)
        .order_by_desc(ContactoColumn::Id)
        .limit(limit)
        .all(db)
        .await?;
    Ok(contactos)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_contacto, setup_test_db};

    async fn insert_with_fecha(
        db: &DatabaseConnection,
        nombres: &str,
        fecha_contacto: Option<DateTimeUtc>,
    ) -> contacto::Model {
        contacto::ActiveModel {
            nombres: Set(nombres.to_string()),
            origen: Set(Origen::FormularioWeb),
            estado: Set(Estado::Nuevo),
            fecha_contacto: Set(fecha_contacto),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn intake_fixes_origin_state_and_timestamp() {
        let db = setup_test_db().await.unwrap();

        let contacto = create_contacto(
            &db,
            "María Quispe",
            Some("999888777"),
            Some("PREUNIVERSITARIO"),
            Some("Quisiera más información"),
        )
        .await
        .unwrap();

        assert_eq!(contacto.origen, Origen::FormularioWeb);
        assert_eq!(contacto.estado, Estado::Nuevo);
        assert!(contacto.fecha_contacto.is_some());
        assert_eq!(contacto.telefono.as_deref(), Some("999888777"));
        assert_eq!(contacto.programa_interes.as_deref(), Some("PREUNIVERSITARIO"));

        let guardado = get_contacto_by_id(&db, contacto.id).await.unwrap().unwrap();
        assert_eq!(guardado, contacto);
    }

    #[tokio::test]
    async fn intake_rejects_a_blank_name() {
        let db = setup_test_db().await.unwrap();

        for nombres in ["", "   ", "\t\n"] {
            let result = create_contacto(&db, nombres, None, None, None).await;
            assert!(matches!(result, Err(Error::Validation { .. })));
        }

        assert_eq!(Contacto::find().all(&db).await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn intake_trims_the_name_and_nulls_blank_fields() {
        let db = setup_test_db().await.unwrap();

        let contacto = create_contacto(&db, "  José Flores  ", Some(""), Some("   "), None)
            .await
            .unwrap();

        assert_eq!(contacto.nombres, "José Flores");
        assert_eq!(contacto.telefono, None);
        assert_eq!(contacto.programa_interes, None);
        assert_eq!(contacto.mensaje, None);
    }

    #[tokio::test]
    async fn recent_listing_returns_newest_first() {
        let db = setup_test_db().await.unwrap();
        let ahora = chrono::Utc::now();

        insert_with_fecha(&db, "antiguo", Some(ahora - chrono::Duration::days(2))).await;
        insert_with_fecha(&db, "reciente", Some(ahora)).await;
        insert_with_fecha(&db, "intermedio", Some(ahora - chrono::Duration::hours(3))).await;

        let contactos = get_contactos_recientes(&db, 50).await.unwrap();
        let nombres: Vec<&str> = contactos.iter().map(|c| c.nombres.as_str()).collect();
        assert_eq!(nombres, ["reciente", "intermedio", "antiguo"]);
    }

    #[tokio::test]
    async fn recent_listing_breaks_timestamp_ties_by_id() {
        let db = setup_test_db().await.unwrap();
        let ahora = chrono::Utc::now();

        let primero = insert_with_fecha(&db, "primero", Some(ahora)).await;
        let segundo = insert_with_fecha(&db, "segundo", Some(ahora)).await;
        assert!(segundo.id > primero.id);

        let contactos = get_contactos_recientes(&db, 50).await.unwrap();
        assert_eq!(contactos[0].id, segundo.id);
        assert_eq!(contactos[1].id, primero.id);
    }

    #[tokio::test]
    async fn recent_listing_honours_the_limit() {
        let db = setup_test_db().await.unwrap();

        for i in 0..5 {
            create_test_contacto(&db, &format!("lead {i}")).await.unwrap();
        }

        let contactos = get_contactos_recientes(&db, 3).await.unwrap();
        assert_eq!(contactos.len(), 3);
    }
}
