use crate::core::language::LocalizedText;
use crate::quiz::question::{ChoiceOption, QuizQuestion};

/// The home-safety quiz, in asking order
pub fn quiz_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::boolean(
            "stairs",
            LocalizedText::new(
                "Do you have stairs inside or outside your home that you use regularly?",
                "¿Tiene escaleras dentro o fuera de su casa que usa regularmente?",
            ),
        ),
        QuizQuestion::boolean(
            "falls",
            LocalizedText::new(
                "Have you or a loved one had a fall in the past year, or do you worry about falling?",
                "¿Usted o un ser querido ha tenido una caída en el último año, o le preocupa caerse?",
            ),
        ),
        QuizQuestion::single_choice(
            "bathroom",
            LocalizedText::new(
                "Which of these best describes your bathroom setup?",
                "¿Cuál de estas opciones describe mejor su baño?",
            ),
            vec![
                ChoiceOption::new(
                    "tub_shower",
                    LocalizedText::new("Tub/Shower Combo", "Combinación de bañera y ducha"),
                ),
                ChoiceOption::new(
                    "walk_in_shower",
                    LocalizedText::new("Walk-in Shower with Step", "Ducha con escalón"),
                ),
                ChoiceOption::new(
                    "roll_in_shower",
                    LocalizedText::new("Roll-in Shower (No Step)", "Ducha sin escalón (accesible)"),
                ),
            ],
        ),
        QuizQuestion::boolean(
            "lighting",
            LocalizedText::new(
                "Are there areas in your home that feel dim or hard to see in at night?",
                "¿Hay áreas en su casa que se sienten oscuras o difíciles de ver por la noche?",
            ),
        ),
        QuizQuestion::boolean(
            "flooring",
            LocalizedText::new(
                "Do you have throw rugs or loose carpets in your hallways or living areas?",
                "¿Tiene alfombras sueltas o tapetes en sus pasillos o áreas de estar?",
            ),
        ),
        QuizQuestion::boolean(
            "entryway",
            LocalizedText::new(
                "Is it difficult to get in and out of your front door (e.g., heavy door, steps, no railing)?",
                "¿Es difícil entrar y salir de su puerta principal (ej. puerta pesada, escalones, sin barandilla)?",
            ),
        ),
    ]
}
