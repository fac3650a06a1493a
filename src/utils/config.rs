// utils/config.rs
use dotenv::dotenv;
use serde::Deserialize;
use std::env;

use crate::infrastructure::error::{AppError, AppResult};

/// Configuration de l'application, chargée une fois au démarrage
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Environnement et serveur
    pub run_mode: String,
    pub server_host: String,
    pub server_port: u16,
    pub workers: usize,
    pub log_level: String,
    pub log_format: String,

    // Modèle
    pub model_path: String,

    // Limites
    pub max_upload_size_mb: u64,
}

impl Config {
    /// Charger la configuration depuis les variables d'environnement
    pub fn from_env() -> AppResult<Self> {
        // Charger le fichier .env si présent
        let _ = dotenv().ok();

        let config = Config {
            // Environnement et serveur
            run_mode: env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("SERVER_PORT must be a number".to_string()))?,
            workers: env::var("WORKERS")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("WORKERS must be a number".to_string()))?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string()),

            // Modèle
            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| "models/vehicle_damage.onnx".to_string()),

            // Limites
            max_upload_size_mb: env::var("MAX_UPLOAD_SIZE_MB")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("MAX_UPLOAD_SIZE_MB must be a number".to_string())
                })?,
        };

        Ok(config)
    }

    /// Limite d'upload en octets
    pub fn max_upload_bytes(&self) -> usize {
        (self.max_upload_size_mb as usize) * 1024 * 1024
    }

    /// Vérifier si on est en production
    pub fn is_production(&self) -> bool {
        self.run_mode == "production"
    }
}
