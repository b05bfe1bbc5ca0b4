//! Message catalogs
//!
//! Fixed at build time and never mutated.

/// Warnings shown while the No button is being chased. Index 0 is never
/// displayed since the counter advances before the lookup.
pub const WARNINGS: [&str; 8] = [
    "¿No estás segura?",
    "Piénsalo mejor...",
    "¿De verdad?",
    "Dame una oportunidad 💕",
    "Vamos, di que sí...",
    "No seas así 🥺",
    "Última oportunidad...",
    "Ya, no insistas más 💔",
];

/// Love notes for the card screen
pub const LOVE_MESSAGES: [&str; 10] = [
    "Estar contigo me inspira a ser mejor cada día",
    "Tu sonrisa ilumina hasta mis días más oscuros",
    "Contigo, cada momento se vuelve especial",
    "Eres la razón de mi felicidad",
    "Tu amor es el regalo más valioso que he recibido",
    "Me haces sentir completo",
    "Cada día a tu lado es una aventura maravillosa",
    "Eres mi persona favorita en todo el mundo",
    "Tu presencia hace que todo tenga sentido",
    "Gracias por existir y estar en mi vida",
];

/// Highest reachable evasion count
pub const MAX_ATTEMPTS: u32 = (WARNINGS.len() - 1) as u32;

/// Petal control label while roses are falling
pub const PETALS_STOP_LABEL: &str = "Detener rosas 🌹";
/// Petal control label while idle
pub const PETALS_START_LABEL: &str = "Revivir rosas 🌹";

/// Glyph rendered for each petal
pub const PETAL_GLYPH: &str = "🌹";

/// Label for the petal control in the given state
pub fn petal_label(active: bool) -> &'static str {
    if active {
        PETALS_STOP_LABEL
    } else {
        PETALS_START_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_attempts_is_last_warning() {
        assert_eq!(MAX_ATTEMPTS, 7);
        assert_eq!(WARNINGS[MAX_ATTEMPTS as usize], "Ya, no insistas más 💔");
    }

    #[test]
    fn test_catalogs_have_no_blank_entries() {
        assert!(WARNINGS.iter().all(|w| !w.trim().is_empty()));
        assert!(LOVE_MESSAGES.iter().all(|m| !m.trim().is_empty()));
    }

    #[test]
    fn test_petal_label() {
        assert_eq!(petal_label(true), PETALS_STOP_LABEL);
        assert_eq!(petal_label(false), PETALS_START_LABEL);
    }
}
