//! Coach persona and prompt construction.

use bloomfit_domain::Workout;

/// How many archived workouts are embedded into each consultation.
const HISTORY_WINDOW: usize = 10;

pub const SYSTEM_INSTRUCTION: &str = "\
Eres BloomFit AI, una inteligencia especializada exclusivamente en entrenamiento de alto rendimiento, hipertrofia, acondicionamiento militar y movilidad.
Tu única misión es actuar como un \"Head Coach\" dedicado que analiza los datos de entrenamiento del usuario para maximizar sus resultados.

Directrices estrictas:
1. Análisis Técnico: Comenta sobre el volumen total, la selección de ejercicios y la frecuencia.
2. Sobrecarga Progresiva: Si el usuario ha repetido pesos en sesiones anteriores, motívalo a subir 1-2kg o añadir una repetición extra.
3. Enfoque en Objetivos: Diferencia claramente entre consejos para Hipertrofia (6-12 reps, control), Militar (resistencia mental, explosividad) y Flexibilidad (recuperación, rango de movimiento).
4. Terminología: Usa los nombres de los ejercicios en inglés (como aparecen en el catálogo) para mantener la consistencia técnica, pero explica los conceptos en español.
5. Datos: Usa el historial proporcionado para dar feedback real. No inventes ejercicios que no estén en su historial a menos que te pregunten por sugerencias.

Tono: Profesional, directo, motivador y basado en evidencia científica. Tu personalidad es la de un mentor exigente pero que celebra cada pequeño avance (\"florecimiento\" de fuerza).";

/// Wraps the athlete's question together with the recent workout history.
/// At most the last [`HISTORY_WINDOW`] workouts are embedded, serialized as
/// the same JSON documents the archive stores.
pub fn context_prompt(message: &str, history: &[Workout]) -> String {
    let skip = history.len().saturating_sub(HISTORY_WINDOW);
    let recent = serde_json::to_string(&history[skip..]).unwrap_or_else(|_| "[]".to_string());
    format!(
        "DATOS DEL USUARIO:\n\
         Historial Reciente: {recent}\n\
         Consulta del Atleta: \"{message}\"\n\
         \n\
         Instrucción: Responde como su entrenador personal basándote en estos datos."
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use bloomfit_domain::WorkoutID;

    use super::*;

    fn workout(title: &str) -> Workout {
        Workout {
            id: WorkoutID::new(),
            date: Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap(),
            title: title.to_string(),
            exercises: vec![],
            calories_burned: 100,
            duration: 3600,
        }
    }

    #[test]
    fn test_context_prompt_embeds_message_and_history() {
        let prompt = context_prompt("¿Subo peso en el jalón?", &[workout("Tirón")]);
        assert!(prompt.contains("Consulta del Atleta: \"¿Subo peso en el jalón?\""));
        assert!(prompt.contains("\"title\":\"Tirón\""));
        assert!(prompt.contains("Responde como su entrenador personal"));
    }

    #[test]
    fn test_context_prompt_limits_history_to_last_ten() {
        let history = (0..12)
            .map(|i| workout(&format!("Sesión {i:02}")))
            .collect::<Vec<_>>();
        let prompt = context_prompt("hola", &history);
        assert!(!prompt.contains("Sesión 00"));
        assert!(!prompt.contains("Sesión 01"));
        assert!(prompt.contains("Sesión 02"));
        assert!(prompt.contains("Sesión 11"));
    }

    #[test]
    fn test_context_prompt_empty_history() {
        let prompt = context_prompt("hola", &[]);
        assert!(prompt.contains("Historial Reciente: []"));
    }

    #[test]
    fn test_system_instruction_persona() {
        assert!(SYSTEM_INSTRUCTION.starts_with("Eres BloomFit AI"));
        assert!(SYSTEM_INSTRUCTION.contains("Sobrecarga Progresiva"));
        assert_eq!(SYSTEM_INSTRUCTION.lines().count(), 11);
    }
}
