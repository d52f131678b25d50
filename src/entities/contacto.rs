//! Contacto entity - Represents a lead captured from the contact form.
//!
//! A contact is a raw lead: who wrote, how to reach them, which program they
//! asked about, and where the lead came from. `estado` tracks the lead down
//! the follow-up pipeline. Rows are only ever created through the intake
//! workflow; there is no update or delete path in this application.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Channel a lead arrived through.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum Origen {
    /// The website contact form; the only value the intake handler sets
    #[sea_orm(string_value = "formulario_web")]
    FormularioWeb,
    /// Direct WhatsApp message
    #[sea_orm(string_value = "whatsapp")]
    Whatsapp,
    /// Facebook page
    #[sea_orm(string_value = "facebook")]
    Facebook,
    /// Instagram profile
    #[sea_orm(string_value = "instagram")]
    Instagram,
    /// Referred by another student or parent
    #[sea_orm(string_value = "referido")]
    Referido,
}

/// Follow-up pipeline status of a lead.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum Estado {
    /// Just arrived, nobody has reached out yet
    #[sea_orm(string_value = "nuevo")]
    Nuevo,
    /// The academy reached out
    #[sea_orm(string_value = "contactado")]
    Contactado,
    /// The lead showed interest
    #[sea_orm(string_value = "interesado")]
    Interesado,
    /// The lead enrolled
    #[sea_orm(string_value = "inscrito")]
    Inscrito,
    /// The lead declined
    #[sea_orm(string_value = "no_interesado")]
    NoInteresado,
}

/// Contact (lead) database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contactos")]
pub struct Model {
    /// Unique identifier for the contact
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Name the visitor gave; the only required field of the form
    pub nombres: String,
    /// Phone number as typed by the visitor
    pub telefono: Option<String>,
    /// Free-text program the visitor asked about
    pub programa_interes: Option<String>,
    /// Free-text message
    #[sea_orm(column_type = "Text", nullable)]
    pub mensaje: Option<String>,
    /// Where the lead came from, defaults to `formulario_web`
    pub origen: Origen,
    /// Pipeline status, defaults to `nuevo`
    pub estado: Estado,
    /// When the lead arrived, assigned at creation
    pub fecha_contacto: Option<DateTimeUtc>,
    /// When to follow up, set later by whoever works the lead
    pub fecha_seguimiento: Option<DateTimeUtc>,
    /// Free-text notes from follow-up calls
    #[sea_orm(column_type = "Text", nullable)]
    pub observaciones: Option<String>,
}

/// Contacto has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
