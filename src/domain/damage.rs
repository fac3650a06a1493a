use serde::{Deserialize, Serialize};
use std::fmt;

/// Catégories de dommages reconnues par le classifieur.
///
/// L'ordre des variants est figé: il correspond à l'ordre des indices de
/// sortie du modèle. Ne pas réordonner sans ré-entraîner l'artefact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageClass {
    #[serde(rename = "crack")]
    Crack,
    #[serde(rename = "dent")]
    Dent,
    #[serde(rename = "glass shatter")]
    GlassShatter,
    #[serde(rename = "lamp broken")]
    LampBroken,
    #[serde(rename = "scratch")]
    Scratch,
    #[serde(rename = "tire flat")]
    TireFlat,
}

impl DamageClass {
    /// Toutes les classes, dans l'ordre des indices du modèle
    pub const ALL: [DamageClass; 6] = [
        DamageClass::Crack,
        DamageClass::Dent,
        DamageClass::GlassShatter,
        DamageClass::LampBroken,
        DamageClass::Scratch,
        DamageClass::TireFlat,
    ];

    /// Libellé exposé dans les réponses de l'API
    pub fn label(&self) -> &'static str {
        match self {
            DamageClass::Crack => "crack",
            DamageClass::Dent => "dent",
            DamageClass::GlassShatter => "glass shatter",
            DamageClass::LampBroken => "lamp broken",
            DamageClass::Scratch => "scratch",
            DamageClass::TireFlat => "tire flat",
        }
    }

    /// Coût de réparation forfaitaire associé à la classe.
    ///
    /// Barème fixe pour la durée de vie du processus.
    pub fn repair_cost(&self) -> u32 {
        match self {
            DamageClass::Crack => 300,
            DamageClass::Dent => 500,
            DamageClass::GlassShatter => 400,
            DamageClass::LampBroken => 200,
            DamageClass::Scratch => 150,
            DamageClass::TireFlat => 100,
        }
    }

    /// Classe correspondant à un indice de sortie du modèle
    pub fn from_index(index: usize) -> Option<DamageClass> {
        Self::ALL.get(index).copied()
    }

    /// Arg-max sur le vecteur de scores du modèle.
    ///
    /// Renvoie `None` si le vecteur n'a pas exactement une entrée par
    /// classe. En cas d'égalité, le premier indice gagne.
    pub fn from_scores(scores: &[f32]) -> Option<DamageClass> {
        if scores.len() != Self::ALL.len() {
            return None;
        }

        let mut best_index = 0;
        let mut best_score = scores[0];
        for (index, &score) in scores.iter().enumerate().skip(1) {
            if score > best_score {
                best_score = score;
                best_index = index;
            }
        }

        Self::from_index(best_index)
    }
}

impl fmt::Display for DamageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_table() {
        assert_eq!(DamageClass::Crack.repair_cost(), 300);
        assert_eq!(DamageClass::Dent.repair_cost(), 500);
        assert_eq!(DamageClass::GlassShatter.repair_cost(), 400);
        assert_eq!(DamageClass::LampBroken.repair_cost(), 200);
        assert_eq!(DamageClass::Scratch.repair_cost(), 150);
        assert_eq!(DamageClass::TireFlat.repair_cost(), 100);
    }

    #[test]
    fn test_labels_match_model_index_order() {
        let labels: Vec<&str> = DamageClass::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["crack", "dent", "glass shatter", "lamp broken", "scratch", "tire flat"]
        );
    }

    #[test]
    fn test_from_scores_picks_highest() {
        let scores = [0.1, 0.05, 0.6, 0.1, 0.1, 0.05];
        assert_eq!(DamageClass::from_scores(&scores), Some(DamageClass::GlassShatter));
    }

    #[test]
    fn test_from_scores_tie_takes_first_index() {
        let scores = [0.3, 0.3, 0.1, 0.1, 0.1, 0.1];
        assert_eq!(DamageClass::from_scores(&scores), Some(DamageClass::Crack));
    }

    #[test]
    fn test_from_scores_rejects_wrong_length() {
        assert_eq!(DamageClass::from_scores(&[]), None);
        assert_eq!(DamageClass::from_scores(&[0.5, 0.5]), None);
        assert_eq!(DamageClass::from_scores(&[0.0; 10]), None);
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&DamageClass::GlassShatter).unwrap();
        assert_eq!(json, "\"glass shatter\"");

        let back: DamageClass = serde_json::from_str("\"tire flat\"").unwrap();
        assert_eq!(back, DamageClass::TireFlat);
    }
}
