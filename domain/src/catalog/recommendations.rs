use crate::core::language::LocalizedText;
use crate::recommendation::rule::{CostTier, RecommendationCategory, RecommendationRule};
use crate::recommendation::trigger::Trigger;

/// Recommendation rules; earlier rules are higher priority
pub fn recommendations() -> Vec<RecommendationRule> {
    vec![
        RecommendationRule::new(
            "remove_rugs",
            LocalizedText::new("Remove Throw Rugs", "Retire las alfombras sueltas"),
            LocalizedText::new(
                "Loose rugs are a top cause of falls. Remove them or secure them with double-sided tape.",
                "Las alfombras sueltas son una de las principales causas de caídas. Retírelas o asegúrelas con cinta adhesiva de doble cara.",
            ),
            RecommendationCategory::Diy,
            CostTier::Low,
            Trigger::is_true("flooring"),
        ),
        RecommendationRule::new(
            "night_lights",
            LocalizedText::new("Install Night Lights", "Instale luces nocturnas"),
            LocalizedText::new(
                "Add plug-in night lights in hallways and bathrooms to improve visibility at night.",
                "Agregue luces nocturnas enchufables en pasillos y baños para mejorar la visibilidad por la noche.",
            ),
            RecommendationCategory::Diy,
            CostTier::Low,
            Trigger::is_true("lighting"),
        ),
        RecommendationRule::new(
            "grab_bars",
            LocalizedText::new("Install Grab Bars", "Instale barras de apoyo"),
            LocalizedText::new(
                "Install grab bars in the shower and near the toilet. Do not rely on towel racks.",
                "Instale barras de apoyo en la ducha y cerca del inodoro. No confíe en los toalleros.",
            ),
            RecommendationCategory::Professional,
            CostTier::Medium,
            Trigger::any([
                Trigger::equals("bathroom", "tub_shower"),
                Trigger::equals("bathroom", "walk_in_shower"),
                Trigger::is_true("falls"),
            ]),
        ),
        RecommendationRule::new(
            "handrails",
            LocalizedText::new("Add Dual Handrails", "Agregue pasamanos dobles"),
            LocalizedText::new(
                "Ensure stairs have sturdy handrails on BOTH sides for maximum stability.",
                "Asegúrese de que las escaleras tengan pasamanos resistentes en AMBOS lados para una máxima estabilidad.",
            ),
            RecommendationCategory::Professional,
            CostTier::Medium,
            Trigger::is_true("stairs"),
        ),
        RecommendationRule::new(
            "entry_ramp",
            LocalizedText::new("Consider an Entry Ramp", "Considere una rampa de entrada"),
            LocalizedText::new(
                "If steps are a barrier, a modular ramp can make entering your home much safer.",
                "Si los escalones son una barrera, una rampa modular puede hacer que entrar a su casa sea mucho más seguro.",
            ),
            RecommendationCategory::Professional,
            CostTier::High,
            Trigger::is_true("entryway"),
        ),
        RecommendationRule::new(
            "shower_chair",
            LocalizedText::new("Use a Shower Chair", "Use una silla de ducha"),
            LocalizedText::new(
                "A shower chair allows you to bathe safely while seated, reducing fatigue and fall risk.",
                "Una silla de ducha le permite bañarse de forma segura mientras está sentado, reduciendo la fatiga y el riesgo de caídas.",
            ),
            RecommendationCategory::LowCost,
            CostTier::Low,
            Trigger::any([
                Trigger::is_true("falls"),
                Trigger::not_equals("bathroom", "roll_in_shower"),
            ]),
        ),
    ]
}

/// The goal statement printed at the top of an action plan
pub fn plan_goal() -> LocalizedText {
    LocalizedText::new(
        "To create a safer, more comfortable home environment that supports independence.",
        "Crear un ambiente hogareño más seguro y cómodo que apoye la independencia.",
    )
}
