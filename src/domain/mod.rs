//! # Domain Models Module
//!
//! Ce module contient les modèles de données principaux de l'application.
//!
//! ## Structure
//! - `damage.rs`: classes de dommages et barème de réparation
//! - `prediction.rs`: résultat d'évaluation et corps de réponse de l'API
//!
//! ## Conventions
//! - Les types exposés sur l'API implémentent `serde::Serialize`
//! - Les énumérations utilisent des variants explicites, jamais d'indices nus
//! - Aucune entité ne survit à la requête qui l'a créée

pub mod damage;
pub mod prediction;

// Ré-export des types principaux pour une utilisation facile
pub use damage::DamageClass;
pub use prediction::{DamageAssessment, PredictionResponse};
