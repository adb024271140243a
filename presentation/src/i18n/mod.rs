//! UI string table
//!
//! Every fixed piece of text the CLI prints, in English and Spanish.
//! Catalog content (questions, recommendations, guidance) carries its own
//! translations and is not listed here.

use aah_domain::Language;

/// (key, English, Spanish)
const UI_TRANSLATIONS: &[(&str, &str, &str)] = &[
    ("app.title", "Aging at Home Hub", "Centro de Envejecimiento en Casa"),
    ("nav.home", "Home", "Inicio"),
    ("nav.quiz", "Safety Quiz", "Cuestionario"),
    ("nav.resources", "Resources", "Recursos"),
    ("nav.plan", "My Plan", "Mi Plan"),
    ("btn.start", "Get Started", "Comenzar"),
    ("btn.next", "Next", "Siguiente"),
    ("btn.back", "Back", "Atrás"),
    ("btn.submit", "Submit", "Enviar"),
    ("btn.retake", "Retake Quiz", "Repetir Cuestionario"),
    ("btn.print", "Print Plan", "Imprimir Plan"),
    ("footer.privacy", "Privacy Policy", "Política de Privacidad"),
    ("footer.contact", "Contact Us", "Contáctenos"),
    // Quiz
    ("quiz.question", "Question", "Pregunta"),
    ("quiz.of", "of", "de"),
    ("quiz.yes", "Yes", "Sí"),
    ("quiz.no", "No", "No"),
    ("quiz.see_results", "See Results", "Ver Resultados"),
    ("quiz.current", "Current answer", "Respuesta actual"),
    ("quiz.unanswered", "(not answered)", "(sin respuesta)"),
    (
        "quiz.help",
        "Answer with y/n, an option number or value (comma-separated for several). Commands: skip, back, help, quit",
        "Responda con s/n, un número u opción (separados por comas si son varias). Comandos: skip, back, help, quit",
    ),
    ("quiz.invalid", "Invalid answer", "Respuesta no válida"),
    ("quiz.exited", "Quiz closed. Your answers are saved.", "Cuestionario cerrado. Sus respuestas están guardadas."),
    ("quiz.paused", "Quiz paused. Run it again to continue.", "Cuestionario en pausa. Ejecútelo de nuevo para continuar."),
    ("quiz.saved", "Answer saved", "Respuesta guardada"),
    ("quiz.reset", "All quiz answers were cleared.", "Se borraron todas las respuestas."),
    // Report
    ("report.title", "Your Safety Report", "Su Informe de Seguridad"),
    ("report.answered", "Questions answered", "Preguntas respondidas"),
    ("report.find_help", "Find Help", "Buscar Ayuda"),
    ("report.great_news", "Great news!", "¡Buenas noticias!"),
    (
        "report.no_recommendations",
        "Based on your answers, we don't have any specific high-priority recommendations. However, it's always good to stay proactive.",
        "Según sus respuestas, no tenemos recomendaciones específicas de alta prioridad. Sin embargo, siempre es bueno ser proactivo.",
    ),
    ("report.who_to_ask", "Who to Ask & What to Ask", "A Quién Preguntar y Qué Preguntar"),
    ("report.when_to_call", "When to call:", "Cuándo llamar:"),
    ("report.key_questions", "Key questions:", "Preguntas clave:"),
    ("report.next_step", "Ready to take the next step?", "¿Listo para dar el siguiente paso?"),
    ("report.create_plan", "Create My Plan", "Crear Mi Plan"),
    // Plan
    ("plan.title", "My Home Plan", "Mi Plan del Hogar"),
    ("plan.subtitle", "Your personalized guide to action.", "Su guía personalizada para la acción."),
    ("plan.priority", "Priority Actions", "Acciones Prioritarias"),
    (
        "plan.empty",
        "No specific high-priority actions identified based on your answers.",
        "No se identificaron acciones específicas de alta prioridad basadas en sus respuestas.",
    ),
    ("plan.goal", "Goal:", "Meta:"),
    ("plan.cost", "Estimated Cost:", "Costo Estimado:"),
    ("plan.contacts", "Who to Contact", "A Quién Contactar"),
    ("plan.ask", "Ask:", "Pregunte:"),
    // Resources
    ("resources.title", "Trusted Resources", "Recursos Confiables"),
    ("resources.verified", "Verified", "Verificado"),
    ("resources.serves", "Serves:", "Sirve:"),
    (
        "resources.none",
        "No resources found matching your criteria.",
        "No se encontraron recursos que coincidan con sus criterios.",
    ),
    ("resources.phone", "Phone", "Teléfono"),
    ("resources.email", "Email", "Correo"),
    ("resources.website", "Website", "Sitio Web"),
    ("resources.address", "Address", "Dirección"),
    // Language
    ("lang.current", "Language", "Idioma"),
    ("lang.changed", "Language set to", "Idioma cambiado a"),
];

/// Look up a UI string. Unknown keys are returned unchanged.
pub fn t(key: &str, language: Language) -> &str {
    UI_TRANSLATIONS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, en, es)| match language {
            Language::En => *en,
            Language::Es => *es,
        })
        .unwrap_or(key)
}
