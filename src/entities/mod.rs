//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the four independent tables of the academy site
//! (no foreign keys between them). Each entity has a Model struct for data
//! and an Entity struct for operations; the enumerated columns are closed
//! `ActiveEnum`s so unknown literal values are rejected at the boundary.

pub mod contacto;
pub mod estudiante;
pub mod profesor;
pub mod programa;

// Re-export specific types to avoid conflicts
pub use contacto::{
    Column as ContactoColumn, Entity as Contacto, Estado, Model as ContactoModel, Origen,
};
pub use estudiante::{Column as EstudianteColumn, Entity as Estudiante, Model as EstudianteModel};
pub use profesor::{Column as ProfesorColumn, Entity as Profesor, Model as ProfesorModel};
pub use programa::{
    Column as ProgramaColumn, Entity as Programa, Modalidad, Model as ProgramaModel, NivelAcademico,
};
