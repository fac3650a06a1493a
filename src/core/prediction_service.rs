use std::sync::Arc;

use tracing::debug;

use crate::core::preprocess;
use crate::domain::{DamageAssessment, DamageClass};
use crate::infrastructure::engine::ScoreModel;
use crate::infrastructure::error::{AppError, AppResult};

/// Pipeline d'évaluation: prétraitement, passage avant, arg-max, barème.
///
/// Sans état entre deux requêtes; le même buffer d'image produit toujours
/// la même évaluation. Partageable tel quel entre les workers HTTP.
#[derive(Clone)]
pub struct PredictionService {
    model: Arc<dyn ScoreModel>,
}

impl PredictionService {
    pub fn new(model: Arc<dyn ScoreModel>) -> Self {
        Self { model }
    }

    /// Évalue un buffer d'image et renvoie la classe prédite avec son coût
    pub fn assess(&self, image: &[u8]) -> AppResult<DamageAssessment> {
        let tensor = preprocess::to_input_tensor(image)?;
        let scores = self.model.infer(tensor)?;

        debug!("🔍 Scores du modèle [{}]: {:?}", self.model.name(), scores);

        let class = DamageClass::from_scores(&scores).ok_or_else(|| {
            AppError::Inference(format!(
                "model returned {} scores for {} damage classes",
                scores.len(),
                DamageClass::ALL.len()
            ))
        })?;

        Ok(DamageAssessment::new(class))
    }
}
