//! Terminal rendering shared by commands.

use combat_core::{DamageModifier, DamageOutcome};
use console::style;

/// One-line description of how the differential changed the hit.
pub fn modifier_label(modifier: &DamageModifier) -> String {
    match modifier {
        DamageModifier::None => "even match".to_string(),
        DamageModifier::Bonus { percent, amount } => format!("+{} ({} bonus)", amount, percent),
        DamageModifier::Reduction { percent, amount } => {
            format!("-{} ({} reduction)", amount, percent)
        }
    }
}

/// Print the breakdown of a resolved hit, indented under a header line.
pub fn print_outcome(outcome: &DamageOutcome) {
    let breakdown = &outcome.breakdown;
    println!(
        "  base {}  {}  → {}",
        breakdown.base,
        style(modifier_label(&breakdown.modifier)).yellow(),
        style(breakdown.total).bold()
    );
    let hp_after = if outcome.is_lethal() {
        style(outcome.hp_after.to_string()).red().bold()
    } else {
        style(outcome.hp_after.to_string()).green()
    };
    println!("  hp {} → {}", outcome.hp_before, hp_after);
}

#[cfg(test)]
mod tests {
    use combat_core::Percentage;

    use super::*;

    #[test]
    fn even_match_label() {
        assert_eq!(modifier_label(&DamageModifier::None), "even match");
    }

    #[test]
    fn bonus_label_keeps_one_decimal() {
        let modifier = DamageModifier::Bonus {
            percent: Percentage::of_excess(15, 40),
            amount: 38,
        };
        assert_eq!(modifier_label(&modifier), "+38 (37.5% bonus)");
    }

    #[test]
    fn reduction_label_drops_whole_decimal() {
        let modifier = DamageModifier::Reduction {
            percent: Percentage::of_excess(20, 80),
            amount: 25,
        };
        assert_eq!(modifier_label(&modifier), "-25 (25% reduction)");
    }

    #[test]
    fn saturated_bonus_label() {
        let modifier = DamageModifier::Bonus {
            percent: Percentage::SATURATED,
            amount: 99,
        };
        assert_eq!(modifier_label(&modifier), "+99 (99% bonus)");
    }
}
