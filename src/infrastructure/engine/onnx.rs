use ndarray::{Array4, CowArray};
use ort::tensor::OrtOwnedTensor;
use ort::{Environment, GraphOptimizationLevel, SessionBuilder};
use tracing::info;

use super::ScoreModel;
use crate::infrastructure::error::{AppError, AppResult};

/// Runtime ONNX: une session construite une seule fois au démarrage,
/// partagée en lecture seule entre toutes les requêtes.
pub struct OnnxEngine {
    session: ort::Session,
}

impl OnnxEngine {
    /// Charge l'artefact de modèle depuis le disque.
    ///
    /// Échoue si le fichier est absent ou n'est pas un modèle ONNX valide;
    /// l'appelant décide quoi en faire (au démarrage: arrêt du processus).
    pub fn load(model_path: &str) -> AppResult<Self> {
        let environment = Environment::builder()
            .with_name("damage-assessment")
            .build()?
            .into_arc();

        let session = SessionBuilder::new(&environment)?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_model_from_file(model_path)?;

        info!("✅ Modèle ONNX chargé: {}", model_path);

        Ok(Self { session })
    }
}

impl ScoreModel for OnnxEngine {
    fn name(&self) -> &str {
        "onnx-runtime"
    }

    fn infer(&self, input: Array4<f32>) -> AppResult<Vec<f32>> {
        let input = CowArray::from(input.into_dyn());
        let outputs = self
            .session
            .run(vec![ort::Value::from_array(self.session.allocator(), &input)?])?;

        let output: OrtOwnedTensor<f32, _> = outputs
            .first()
            .ok_or_else(|| AppError::Inference("model produced no output tensor".to_string()))?
            .try_extract()?;

        // Le lot vaut toujours 1: on aplatit le tenseur en scores par classe
        Ok(output.view().iter().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_missing_artifact_fails() {
        let result = OnnxEngine::load("does/not/exist.onnx");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_artifact_fails() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not an onnx model").unwrap();

        let result = OnnxEngine::load(file.path().to_str().unwrap());
        assert!(result.is_err());
    }
}
