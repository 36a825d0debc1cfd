//! Simulation result and its text/JSON rendering.

use serde::Serialize;

/// Forecast of a fight. Rates are percentages in `[0, 100]`.
///
/// The default value has `has_outcome == false`: nothing to show.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub win_rate: f64,
    pub loss_rate: f64,
    /// Chance the next beast strike kills the adventurer outright.
    pub otk_rate: f64,
    pub mode_rounds: u32,
    pub mode_damage_dealt: u32,
    pub mode_damage_taken: u32,
    /// Longest fight any outcome reaches. `<= 1` means the next attack ends it.
    pub max_rounds: u32,
    pub has_outcome: bool,
}

impl SimulationResult {
    /// The beast is already at zero health.
    pub fn already_won() -> Self {
        Self {
            win_rate: 100.0,
            has_outcome: true,
            ..Default::default()
        }
    }

    /// Probability mass that neither won nor lost within the round cap.
    pub fn stalemate_rate(&self) -> f64 {
        (100.0 - self.win_rate - self.loss_rate).clamp(0.0, 100.0)
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        if !self.has_outcome {
            return "No combat outcome to forecast.\n".to_string();
        }

        let mut report = String::new();
        report.push_str("═══════════════════════════════════════════════\n");
        report.push_str("                COMBAT FORECAST\n");
        report.push_str("═══════════════════════════════════════════════\n\n");

        report.push_str("── OUTCOME ────────────────────────────────────\n");
        report.push_str(&format!("  Win:             {:>6.2}%\n", self.win_rate));
        report.push_str(&format!("  Loss:            {:>6.2}%\n", self.loss_rate));
        let stalemate = self.stalemate_rate();
        if stalemate > 0.005 {
            report.push_str(&format!("  Stalemate:       {:>6.2}%\n", stalemate));
        }
        report.push_str(&format!("  One-turn kill:   {:>6.2}%\n\n", self.otk_rate));

        report.push_str("── MOST LIKELY FIGHT ──────────────────────────\n");
        report.push_str(&format!("  Rounds:          {}\n", self.mode_rounds));
        report.push_str(&format!("  Damage dealt:    {}\n", self.mode_damage_dealt));
        report.push_str(&format!("  Damage taken:    {}\n", self.mode_damage_taken));
        report.push_str(&format!("  Longest fight:   {} rounds\n", self.max_rounds));

        report
    }

    /// Generate a JSON report.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_outcome() {
        let result = SimulationResult::default();
        assert!(!result.has_outcome);
        assert_eq!(result.to_text(), "No combat outcome to forecast.\n");
    }

    #[test]
    fn test_already_won() {
        let result = SimulationResult::already_won();
        assert_eq!(result.win_rate, 100.0);
        assert!(result.has_outcome);
        assert_eq!(result.mode_rounds, 0);
        assert_eq!(result.stalemate_rate(), 0.0);
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = SimulationResult::already_won().to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["winRate"], 100.0);
        assert_eq!(value["hasOutcome"], true);
        assert!(value.get("otkRate").is_some());
        assert!(value.get("modeDamageTaken").is_some());
    }

    #[test]
    fn test_text_shows_stalemate_only_when_present() {
        let mut result = SimulationResult {
            win_rate: 60.0,
            loss_rate: 40.0,
            has_outcome: true,
            ..Default::default()
        };
        assert!(!result.to_text().contains("Stalemate"));
        result.loss_rate = 30.0;
        assert!(result.to_text().contains("Stalemate"));
    }
}
