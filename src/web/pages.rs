//! Marketing pages and the contact form.
//!
//! Every page is server-rendered from a small HTML shell. The contact form
//! follows the post/redirect/get shape: the POST never renders anything
//! itself, it stores the lead and bounces back to `/contacto` with a
//! `?enviado=1` or `?error=1` marker that the GET turns into a notice.

use crate::web::AppState;
use axum::{
    extract::{Form, Query, State},
    response::{Html, Redirect},
};
use chrono::Datelike;
use serde::Deserialize;
use tracing::{error, info};

/// Notice shown after a successful form submission.
const MENSAJE_EXITO: &str = "¡Gracias por contactarnos! Te responderemos pronto por WhatsApp.";
/// Notice shown when the submission could not be stored.
const MENSAJE_ERROR: &str = "Hubo un error al enviar tu mensaje. Por favor intenta de nuevo.";

const FORMULARIO_CONTACTO: &str = r#"    <form method="post" action="/contacto">
      <label>Nombres <input name="nombres" required></label>
      <label>Teléfono / WhatsApp <input name="telefono"></label>
      <label>Programa de interés <input name="programa_interes"></label>
      <label>Mensaje <textarea name="mensaje"></textarea></label>
      <button type="submit">Enviar</button>
    </form>
"#;

/// GET `/`
pub async fn inicio() -> Html<String> {
    render_page(
        "Inicio",
        "    <p>Academia preuniversitaria EULER: preparación en matemáticas y ciencias.</p>",
    )
}

/// GET `/programas/beca18`
pub async fn beca18() -> Html<String> {
    render_page(
        "BECA 18",
        "    <p>Programa especializado para postular a la Beca 18.</p>",
    )
}

/// GET `/programas/preuniversitario`
pub async fn preuniversitario() -> Html<String> {
    render_page(
        "Preuniversitario",
        "    <p>Preparación intensiva para el ingreso a universidades.</p>",
    )
}

/// GET `/programas/matematicas`
pub async fn matematicas() -> Html<String> {
    render_page(
        "Matemáticas",
        "    <p>Curso especializado en matemáticas para todos los niveles.</p>",
    )
}

/// GET `/programas/ciencias`
pub async fn ciencias() -> Html<String> {
    render_page(
        "Ciencias",
        "    <p>Programa integral de ciencias: física, química y biología.</p>",
    )
}

/// GET `/horarios`
pub async fn horarios() -> Html<String> {
    render_page("Horarios", "    <p>Horarios de clases por programa.</p>")
}

/// GET `/inscripciones`
pub async fn inscripciones() -> Html<String> {
    render_page(
        "Inscripciones",
        "    <p>Proceso de inscripción y requisitos.</p>",
    )
}

/// GET `/nosotros`
pub async fn nosotros() -> Html<String> {
    render_page("Nosotros", "    <p>Conoce a nuestro equipo docente.</p>")
}

/// Markers left by the POST redirect.
#[derive(Debug, Deserialize)]
pub struct AvisoParams {
    /// Present after a stored submission
    pub enviado: Option<String>,
    /// Present after a failed submission
    pub error: Option<String>,
}

/// GET `/contacto` - the form, with an outcome notice when redirected back.
pub async fn contacto(Query(params): Query<AvisoParams>) -> Html<String> {
    let mut cuerpo = String::new();
    if params.enviado.is_some() {
        cuerpo.push_str(&format!("    <p class=\"aviso exito\">{MENSAJE_EXITO}</p>\n"));
    } else if params.error.is_some() {
        cuerpo.push_str(&format!("    <p class=\"aviso error\">{MENSAJE_ERROR}</p>\n"));
    }
    cuerpo.push_str(FORMULARIO_CONTACTO);
    render_page("Contacto", &cuerpo)
}

/// Fields posted by the contact form. Missing fields deserialize to empty
/// strings so a hand-built request cannot produce a 422 instead of the
/// normal validation path.
#[derive(Debug, Deserialize)]
pub struct ContactoForm {
    /// Visitor's name, the only required field
    #[serde(default)]
    pub nombres: String,
    /// Phone number
    #[serde(default)]
    pub telefono: String,
    /// Program the visitor is interested in
    #[serde(default)]
    pub programa_interes: String,
    /// Free-text message
    #[serde(default)]
    pub mensaje: String,
}

/// POST `/contacto` - store the lead and redirect.
///
/// Failures of any kind land on the same generic notice; the details only
/// go to the log, never to the visitor.
pub async fn contacto_enviar(
    State(state): State<AppState>,
    Form(datos): Form<ContactoForm>,
) -> Redirect {
    match crate::core::contacto::create_contacto(
        &state.db,
        &datos.nombres,
        Some(&datos.telefono),
        Some(&datos.programa_interes),
        Some(&datos.mensaje),
    )
    .await
    {
        Ok(registro) => {
            info!(id = registro.id, "Stored new contact lead");
            Redirect::to("/contacto?enviado=1")
        }
        Err(err) => {
            error!("Failed to store contact lead: {err}");
            Redirect::to("/contacto?error=1")
        }
    }
}

fn render_page(titulo: &str, contenido: &str) -> Html<String> {
    let anio = chrono::Utc::now().year();
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{titulo} - Academia EULER</title>
</head>
<body>
  <header><h1>Academia EULER</h1></header>
  <main>
    <h2>{titulo}</h2>
{contenido}
  </main>
  <footer>© {anio} Academia EULER</footer>
</body>
</html>
"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_page_carries_its_own_title() {
        let casos: [(&str, Html<String>); 8] = [
            ("Inicio", inicio().await),
            ("BECA 18", beca18().await),
            ("Preuniversitario", preuniversitario().await),
            ("Matemáticas", matematicas().await),
            ("Ciencias", ciencias().await),
            ("Horarios", horarios().await),
            ("Inscripciones", inscripciones().await),
            ("Nosotros", nosotros().await),
        ];

        for (titulo, Html(pagina)) in casos {
            assert!(
                pagina.contains(&format!("<h2>{titulo}</h2>")),
                "page body should carry the heading {titulo}"
            );
            assert!(pagina.contains("<footer>©"), "shared shell on {titulo}");
        }
    }

    #[tokio::test]
    async fn contact_page_shows_the_form_without_a_notice() {
        let Html(pagina) = contacto(Query(AvisoParams {
            enviado: None,
            error: None,
        }))
        .await;

        assert!(pagina.contains("form method=\"post\""));
        assert!(!pagina.contains(MENSAJE_EXITO));
        assert!(!pagina.contains(MENSAJE_ERROR));
    }

    #[tokio::test]
    async fn redirect_markers_select_the_notice() {
        let Html(exito) = contacto(Query(AvisoParams {
            enviado: Some("1".to_string()),
            error: None,
        }))
        .await;
        assert!(exito.contains(MENSAJE_EXITO));

        let Html(fallo) = contacto(Query(AvisoParams {
            enviado: None,
            error: Some("1".to_string()),
        }))
        .await;
        assert!(fallo.contains(MENSAJE_ERROR));
        assert!(!fallo.contains(MENSAJE_EXITO));
    }
}
