use crate::types::Category;

/// Type-label prefixes as the bank writes them, checked in this order.
const DEFAULT_RULES: &[(&str, Category)] = &[
    ("Převod", Category::Transfer),
    ("Platba", Category::Transfer),
    ("Jednorázová platba", Category::Transfer),
    ("Příchozí platba", Category::Credit),
    ("Trvalý převod", Category::RecurringPayment),
    ("Trvalá platba", Category::RecurringPayment),
    ("Kladný úrok", Category::Interest),
    ("Záporný úrok", Category::Interest),
    ("Inkaso", Category::DirectDebit),
    ("Srážka daně", Category::Debit),
    ("Daň z úroků", Category::Debit),
    ("Správa účtu", Category::Fee),
    ("Jiný trans.", Category::Fee),
    ("Poplatek", Category::Fee),
    ("Směna", Category::Fee),
    ("Zpráva", Category::Fee),
];

#[derive(Debug, Clone, PartialEq)]
pub struct TypeRule {
    pub prefix: String,
    pub category: Category
}

/// Assigns a category from the free-text transaction type label.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<TypeRule>
}

impl Classifier {
    pub fn new(rules: Vec<TypeRule>) -> Self {
        Self { rules }
    }

    /// Category of the first rule whose prefix starts `label`, or `Other`.
    ///
    /// Matching is case-sensitive and runs on the label exactly as read.
    pub fn classify(&self, label: &str) -> Category {
        self.rules
            .iter()
            .find(|rule| label.starts_with(&rule.prefix))
            .map(|rule| rule.category)
            .unwrap_or_default()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(
            DEFAULT_RULES
                .iter()
                .map(|(prefix, category)| TypeRule { prefix: prefix.to_string(), category: *category })
                .collect()
        )
    }
}
