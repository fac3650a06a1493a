//! # Predict Route
//!
//! Ce module gère l'évaluation des dommages à partir d'une image uploadée.
//!
//! ## Workflow
//! 1. Lecture du champ `file` du formulaire multipart (avec limite de taille)
//! 2. Décodage, redimensionnement et normalisation de l'image
//! 3. Passage avant du classifieur
//! 4. Arg-max, libellé de classe et coût forfaitaire
//! 5. Retour JSON `{"predicted_class": ..., "repair_cost": ...}`
//!
//! ## Erreurs
//! - Champ `file` absent → 400 `{"error": "No file part"}`
//! - Nom de fichier vide → 400 `{"error": "No selected file"}`
//! - Upload au-delà de la limite configurée → 413
//! - Échec de décodage ou d'inférence → 500, message assaini

use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse};
use futures_util::TryStreamExt;
use tracing::info;

use crate::core::PredictionService;
use crate::domain::PredictionResponse;
use crate::infrastructure::error::{AppError, AppResult};
use crate::utils::Config;

#[post("/predict")]
pub async fn predict(
    payload: Multipart,
    service: web::Data<PredictionService>,
    config: web::Data<Config>,
) -> AppResult<HttpResponse> {
    // 1. Extraire le fichier uploadé
    let image = read_image_field(payload, config.max_upload_bytes()).await?;

    info!("📁 Image reçue: {} octets", image.len());

    // 2. Évaluer le dommage
    let assessment = service.assess(&image)?;

    info!(
        "🔍 Classe prédite: {} (coût estimé: {})",
        assessment.class, assessment.repair_cost
    );

    Ok(HttpResponse::Ok().json(PredictionResponse::from(assessment)))
}

/// Extrait le contenu du champ `file` du formulaire multipart.
///
/// Le premier champ nommé `file` gagne; les autres champs sont drainés et
/// ignorés. La lecture s'arrête dès que la limite de taille est dépassée.
async fn read_image_field(mut payload: Multipart, max_bytes: usize) -> AppResult<Vec<u8>> {
    while let Some(mut field) = payload.try_next().await? {
        if field.name() != "file" {
            // Drainer le champ avant de passer au suivant
            while field.try_next().await?.is_some() {}
            continue;
        }

        match field.content_disposition().get_filename() {
            None | Some("") => return Err(AppError::NoSelectedFile),
            Some(_) => {}
        }

        let mut buffer = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            if buffer.len() + chunk.len() > max_bytes {
                return Err(AppError::PayloadTooLarge(format!(
                    "upload exceeds the {} byte limit",
                    max_bytes
                )));
            }
            buffer.extend_from_slice(&chunk);
        }

        return Ok(buffer);
    }

    Err(AppError::MissingFilePart)
}
