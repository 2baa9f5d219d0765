//! Budget portion representation
//!
//! A portion is a budget category allocated within exactly one period.

use serde::{Deserialize, Serialize};

use super::ids::{PeriodId, PortionId};
use super::money::Rupiah;

/// A budget category scoped to one period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portion {
    /// Unique, immutable identifier
    pub id: PortionId,

    /// The period this portion belongs to
    pub period_id: PeriodId,

    /// Display name (e.g. "Makanan")
    pub name: String,

    /// Amount budgeted for this category in its period
    pub budget_amount: Rupiah,

    /// Optional free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Portion {
    /// Create a new portion with a fresh ID
    pub fn new(
        period_id: PeriodId,
        name: impl Into<String>,
        budget_amount: Rupiah,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: PortionId::new(),
            period_id,
            name: name.into(),
            budget_amount,
            notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_portion() {
        let period_id = PeriodId::new();
        let portion = Portion::new(period_id, "Makanan", Rupiah::new(3_000_000), None);

        assert_eq!(portion.period_id, period_id);
        assert_eq!(portion.name, "Makanan");
        assert_eq!(portion.budget_amount.amount(), 3_000_000);
        assert!(portion.notes.is_none());
    }

    #[test]
    fn test_notes_omitted_when_absent() {
        let portion = Portion::new(PeriodId::new(), "Transportasi", Rupiah::new(500_000), None);
        let json = serde_json::to_string(&portion).unwrap();
        assert!(!json.contains("notes"));

        let with_notes = Portion::new(
            PeriodId::new(),
            "Tabungan",
            Rupiah::new(1_000_000),
            Some("darurat".into()),
        );
        let json = serde_json::to_string(&with_notes).unwrap();
        assert!(json.contains("\"notes\":\"darurat\""));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let portion = Portion::new(PeriodId::new(), "Hiburan", Rupiah::new(400_000), None);
        let json = serde_json::to_string(&portion).unwrap();
        let deserialized: Portion = serde_json::from_str(&json).unwrap();
        assert_eq!(portion, deserialized);
    }
}
