//! The magnitude tier table.
//!
//! Short-scale suffixes from thousand (`K`) up to nonillion (`No`), in
//! steps of a thousand. The table is sorted by descending exponent so a
//! forward scan finds the largest tier not exceeding a value's decimal
//! exponent.

/// One entry in the magnitude tier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    /// Power-of-ten threshold at which the suffix starts to apply.
    pub exponent: i32,
    /// Display suffix, one or two letters.
    pub suffix: &'static str,
}

/// Suffix tiers from nonillion down to thousand.
pub const TIERS: [Tier; 10] = [
    Tier { exponent: 30, suffix: "No" },
    Tier { exponent: 27, suffix: "Oc" },
    Tier { exponent: 24, suffix: "Sp" },
    Tier { exponent: 21, suffix: "Sx" },
    Tier { exponent: 18, suffix: "Qi" },
    Tier { exponent: 15, suffix: "Qa" },
    Tier { exponent: 12, suffix: "T" },
    Tier { exponent: 9, suffix: "B" },
    Tier { exponent: 6, suffix: "M" },
    Tier { exponent: 3, suffix: "K" },
];

/// Exponent of the smallest tier. Values with a smaller decimal exponent
/// render unscaled.
pub const MIN_TIER_EXPONENT: i32 = TIERS[TIERS.len() - 1].exponent;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_descends_in_steps_of_three() {
        for pair in TIERS.windows(2) {
            assert_eq!(pair[0].exponent - pair[1].exponent, 3);
        }
        assert_eq!(TIERS[0].exponent, 30);
        assert_eq!(MIN_TIER_EXPONENT, 3);
    }

    #[test]
    fn suffixes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for tier in TIERS {
            assert!(seen.insert(tier.suffix), "duplicate suffix {}", tier.suffix);
        }
    }
}
