use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use damage_assessment_api::api;
use damage_assessment_api::core::PredictionService;
use damage_assessment_api::infrastructure::engine::OnnxEngine;
use damage_assessment_api::utils::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Chargement de la configuration
    let config = Config::from_env().expect("❌ Impossible de charger la configuration");

    // Initialisation du logging
    setup_tracing(&config);
    info!("🚀 Démarrage de Damage Assessment API");
    info!("🔧 Mode: {}", config.run_mode);

    // Chargement du modèle: le processus s'arrête si l'artefact est absent
    // ou invalide
    let engine = OnnxEngine::load(&config.model_path)
        .expect("❌ Impossible de charger le modèle de classification");
    let service = PredictionService::new(Arc::new(engine));

    let app_service = web::Data::new(service);
    let app_config = web::Data::new(config.clone());

    // Configuration du serveur Actix-Web
    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(app_service.clone())
            .app_data(app_config.clone())
            .configure(api::config)
    })
    .bind(format!("{}:{}", config.server_host, config.server_port))?
    .workers(config.workers);

    info!("✅ Backend démarré avec succès!");
    info!(
        "🔗 API disponible sur http://{}:{}",
        config.server_host, config.server_port
    );

    server.run().await
}

/// Configure le tracing pour le logging structuré
fn setup_tracing(config: &Config) {
    let log_level: tracing::Level = config.log_level.parse().unwrap_or(tracing::Level::INFO);

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(if config.log_format == "json" {
            Box::new(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_span_list(true),
            ) as Box<dyn tracing_subscriber::Layer<_> + Send + Sync>
        } else {
            Box::new(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_line_number(true)
                    .with_file(true),
            ) as Box<dyn tracing_subscriber::Layer<_> + Send + Sync>
        });

    subscriber.init();
}
