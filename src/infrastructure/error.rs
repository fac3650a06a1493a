use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use tracing::error;

/// Type de résultat standard pour l'application
pub type AppResult<T> = Result<T, AppError>;

/// Erreurs principales de l'application
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Aucun champ `file` dans le formulaire multipart (400 Bad Request)
    #[error("No file part")]
    MissingFilePart,

    /// Champ `file` présent mais sans nom de fichier (400 Bad Request)
    #[error("No selected file")]
    NoSelectedFile,

    /// Flux multipart mal formé (400 Bad Request)
    #[error("Malformed multipart request: {0}")]
    Multipart(String),

    /// Payload trop lourd (413 Payload Too Large)
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Décodage de l'image impossible (500 Internal Server Error)
    #[error("Image decoding failed: {0}")]
    ImageDecode(String),

    /// Échec du passage avant du modèle (500 Internal Server Error)
    #[error("Inference failed: {0}")]
    Inference(String),

    /// Erreur de configuration, uniquement au démarrage
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Erreur interne du serveur (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Convertit l'erreur en code HTTP approprié
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFilePart => StatusCode::BAD_REQUEST,
            AppError::NoSelectedFile => StatusCode::BAD_REQUEST,
            AppError::Multipart(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::ImageDecode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Inference(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message destiné au client (à utiliser pour les réponses, pas pour le logging).
    /// Les erreurs 5xx renvoient un message fixe; le détail reste côté serveur.
    pub fn client_message(&self) -> String {
        match self {
            AppError::MissingFilePart => "No file part".to_string(),
            AppError::NoSelectedFile => "No selected file".to_string(),
            AppError::Multipart(detail) => format!("Malformed multipart request: {}", detail),
            AppError::PayloadTooLarge(detail) => format!("Payload too large: {}", detail),
            AppError::ImageDecode(_)
            | AppError::Inference(_)
            | AppError::Configuration(_)
            | AppError::Internal(_) => {
                "Internal error while processing the image".to_string()
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            error!("💥 Erreur de traitement: {}", self);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.client_message(),
        })
    }
}

/// Structure de réponse d'erreur standardisée
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

// Implémentations From pour les conversions automatiques

impl From<actix_multipart::MultipartError> for AppError {
    fn from(error: actix_multipart::MultipartError) -> Self {
        AppError::Multipart(error.to_string())
    }
}

impl From<image::ImageError> for AppError {
    fn from(error: image::ImageError) -> Self {
        AppError::ImageDecode(error.to_string())
    }
}

impl From<ort::OrtError> for AppError {
    fn from(error: ort::OrtError) -> Self {
        AppError::Inference(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_keep_fixed_messages() {
        assert_eq!(AppError::MissingFilePart.client_message(), "No file part");
        assert_eq!(AppError::NoSelectedFile.client_message(), "No selected file");
        assert_eq!(AppError::MissingFilePart.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NoSelectedFile.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_server_errors_are_sanitized() {
        let err = AppError::ImageDecode("invalid PNG signature".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        // Le détail interne ne doit jamais atteindre le client
        assert!(!err.client_message().contains("PNG"));

        let err = AppError::Inference("ort session failure".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.client_message().contains("ort"));
    }

    #[test]
    fn test_payload_too_large_status() {
        let err = AppError::PayloadTooLarge("10 MB max".to_string());
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
