//! # Runtime de modèle
//!
//! Abstraction du collaborateur externe qui exécute le passage avant du
//! classifieur. L'implémentation de production s'appuie sur ONNX Runtime
//! (`onnx.rs`); les tests substituent un modèle à scores fixes.

pub mod onnx;

pub use onnx::OnnxEngine;

use ndarray::Array4;

use crate::infrastructure::error::AppResult;

/// Capacité d'inférence: un tenseur d'entrée, un vecteur de scores par classe.
///
/// Les implémentations doivent être sans état entre deux appels: le même
/// tenseur produit toujours les mêmes scores.
pub trait ScoreModel: Send + Sync {
    /// Nom du runtime, pour le logging
    fn name(&self) -> &str;

    /// Exécute un passage avant synchrone et renvoie les scores par classe
    fn infer(&self, input: Array4<f32>) -> AppResult<Vec<f32>>;
}
