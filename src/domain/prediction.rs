use serde::{Deserialize, Serialize};

use super::damage::DamageClass;

/// Résultat d'une évaluation de dommage: la classe prédite et son coût
/// forfaitaire. Vit le temps d'une requête.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageAssessment {
    pub class: DamageClass,
    pub repair_cost: u32,
}

impl DamageAssessment {
    pub fn new(class: DamageClass) -> Self {
        Self {
            class,
            repair_cost: class.repair_cost(),
        }
    }
}

/// Corps de réponse de `POST /predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_class: String,
    pub repair_cost: u32,
}

impl From<DamageAssessment> for PredictionResponse {
    fn from(assessment: DamageAssessment) -> Self {
        Self {
            predicted_class: assessment.class.label().to_string(),
            repair_cost: assessment.repair_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_carries_table_cost() {
        let assessment = DamageAssessment::new(DamageClass::Scratch);
        assert_eq!(assessment.repair_cost, 150);
    }

    #[test]
    fn test_response_serialization() {
        let response = PredictionResponse::from(DamageAssessment::new(DamageClass::LampBroken));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"predicted_class": "lamp broken", "repair_cost": 200})
        );
    }
}
