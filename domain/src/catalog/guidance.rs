use crate::core::language::{LocalizedList, LocalizedText};
use crate::guidance::ProfessionalGuidance;

/// Professionals worth consulting, in display order
pub fn professional_guidance() -> Vec<ProfessionalGuidance> {
    vec![
        ProfessionalGuidance {
            id: "ot".to_string(),
            role: LocalizedText::new("Occupational Therapist (OT)", "Terapeuta Ocupacional (OT)"),
            description: LocalizedText::new(
                "OTs assess how you function in your home and recommend changes to improve safety and independence.",
                "Los OT evalúan cómo funciona usted en su hogar y recomiendan cambios para mejorar la seguridad y la independencia.",
            ),
            when_to_call: LocalizedText::new(
                "If you've had a fall, have a new medical condition, or find daily tasks difficult.",
                "Si ha tenido una caída, tiene una nueva condición médica o encuentra difíciles las tareas diarias.",
            ),
            what_to_ask: LocalizedList::new(
                [
                    "Can you do a home safety evaluation?",
                    "Do you have experience with aging in place modifications?",
                ],
                [
                    "¿Puede hacer una evaluación de seguridad en el hogar?",
                    "¿Tiene experiencia con modificaciones para envejecer en casa?",
                ],
            ),
        },
        ProfessionalGuidance {
            id: "caps".to_string(),
            role: LocalizedText::new(
                "Certified Aging-in-Place Specialist (CAPS)",
                "Especialista Certificado en Envejecimiento en el Lugar (CAPS)",
            ),
            description: LocalizedText::new(
                "Contractors or designers trained specifically in the unique needs of older adults.",
                "Contratistas o diseñadores capacitados específicamente en las necesidades únicas de los adultos mayores.",
            ),
            when_to_call: LocalizedText::new(
                "When you are planning a remodel or need significant structural changes.",
                "Cuando esté planeando una remodelación o necesite cambios estructurales significativos.",
            ),
            what_to_ask: LocalizedList::new(
                [
                    "Are you CAPS certified?",
                    "Can you provide references from past projects?",
                ],
                [
                    "¿Está certificado por CAPS?",
                    "¿Puede proporcionar referencias de proyectos anteriores?",
                ],
            ),
        },
    ]
}
