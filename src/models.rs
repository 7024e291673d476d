use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Categories offered by the expense form. An empty choice lets the
/// server categorize the expense itself.
pub const EXPENSE_CATEGORIES: [&str; 6] = [
    "Food",
    "Transportation",
    "Entertainment",
    "Shopping",
    "Bills",
    "Other",
];

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub amount: f64,
    pub description: String,
    /// Empty while the server has not categorized the expense.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub category: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub category: String,
    pub amount: f64,
    pub month: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_spent: f64,
    #[serde(default)]
    pub transaction_count: u64,
    #[serde(default)]
    pub spending_by_category: CategoryTotals,
    #[serde(default)]
    pub recent_expenses: Vec<Expense>,
}

/// Spending per category, kept in the order the server sent it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryTotals(Vec<(String, f64)>);

impl CategoryTotals {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, amount)| (name.as_str(), *amount))
    }
}

impl FromIterator<(String, f64)> for CategoryTotals {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for CategoryTotals {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TotalsVisitor;

        impl<'de> Visitor<'de> for TotalsVisitor {
            type Value = CategoryTotals;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category name to amount")
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(CategoryTotals::default())
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(CategoryTotals::default())
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
                d.deserialize_map(self)
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, amount)) = access.next_entry::<String, f64>()? {
                    entries.push((name, amount));
                }
                Ok(CategoryTotals(entries))
            }
        }

        deserializer.deserialize_option(TotalsVisitor)
    }
}

/// One question/answer pair in the session's chat log.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatExchange {
    pub message: String,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewExpense {
    pub amount: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewBudget {
    pub category: String,
    pub amount: f64,
    pub month: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Raw text of the add-expense form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseDraft {
    pub amount: String,
    pub description: String,
    pub category: String,
}

impl ExpenseDraft {
    pub fn validate(&self) -> Result<NewExpense, ValidationError> {
        let amount = self.amount.trim();
        if amount.is_empty() {
            return Err(ValidationError::MissingAmount);
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        let category = self.category.trim();

        Ok(NewExpense {
            amount: parse_amount(amount)?,
            description: description.to_string(),
            category: (!category.is_empty()).then(|| category.to_string()),
        })
    }
}

/// Raw text of the add-budget form.
#[derive(Clone, Debug, PartialEq)]
pub struct BudgetDraft {
    pub category: String,
    pub amount: String,
    pub month: String,
}

impl BudgetDraft {
    pub fn for_month(today: NaiveDate) -> Self {
        Self {
            category: String::new(),
            amount: String::new(),
            month: today.format("%Y-%m").to_string(),
        }
    }

    pub fn validate(&self) -> Result<NewBudget, ValidationError> {
        let category = self.category.trim();
        if category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        let amount = self.amount.trim();
        if amount.is_empty() {
            return Err(ValidationError::MissingAmount);
        }
        let amount = parse_amount(amount)?;
        let month = normalize_month(&self.month).ok_or(ValidationError::InvalidMonth)?;

        Ok(NewBudget {
            category: category.to_string(),
            amount,
            month,
        })
    }
}

fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ValidationError::InvalidAmount),
    }
}

/// `2024-8` and `2024-08` both become `2024-08`.
fn normalize_month(raw: &str) -> Option<String> {
    let (year, month) = raw.trim().split_once('-')?;
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if year.len() != 4 || !(1..=2).contains(&month.len()) || !digits(year) || !digits(month) {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1).map(|first| first.format("%Y-%m").to_string())
}

/// Accepts plain dates and full timestamps; only the calendar date is kept.
pub fn parse_date_any(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y/%m/%d"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            raw.get(..10)
                .filter(|_| matches!(raw.as_bytes().get(10), Some(b'T' | b' ')))
                .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
        })
}

fn deserialize_nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_date_any(&raw).ok_or_else(|| de::Error::custom(format!("unrecognized date `{raw}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_totals_keep_wire_order() {
        let totals: CategoryTotals =
            serde_json::from_str(r#"{"Food": 120.5, "Bills": 60, "Auto": 3.25}"#).unwrap();
        let names: Vec<&str> = totals.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Food", "Bills", "Auto"]);
        assert_eq!(totals.iter().nth(1), Some(("Bills", 60.0)));
    }

    #[test]
    fn summary_tolerates_missing_and_null_fields() {
        let summary: DashboardSummary =
            serde_json::from_str(r#"{"total_spent": 12.5, "spending_by_category": null}"#).unwrap();
        assert_eq!(summary.total_spent, 12.5);
        assert_eq!(summary.transaction_count, 0);
        assert!(summary.spending_by_category.is_empty());
        assert!(summary.recent_expenses.is_empty());
    }

    #[test]
    fn expense_dates_accept_timestamps() {
        let json = r#"[
            {"id": 1, "amount": 4.5, "description": "Coffee", "category": "Food", "date": "2024-08-03"},
            {"id": 2, "amount": 30, "description": "Taxi", "category": "Transportation", "date": "2024-08-04T18:22:10.512331"},
            {"id": 3, "amount": 9.99, "description": "Film", "category": "Entertainment", "date": "2024-08-05T09:00:00Z"}
        ]"#;
        let expenses: Vec<Expense> = serde_json::from_str(json).unwrap();
        let dates: Vec<String> = expenses.iter().map(|e| e.date.to_string()).collect();
        assert_eq!(dates, ["2024-08-03", "2024-08-04", "2024-08-05"]);
    }

    #[test]
    fn uncategorized_expenses_still_decode() {
        let json = r#"[
            {"id": 1, "amount": 2, "description": "Parking", "category": null, "date": "2024-08-01"},
            {"id": 2, "amount": 8, "description": "Snacks", "date": "2024-08-02"}
        ]"#;
        let expenses: Vec<Expense> = serde_json::from_str(json).unwrap();
        assert_eq!(expenses.len(), 2);
        assert!(expenses.iter().all(|e| e.category.is_empty()));

        let summary: DashboardSummary = serde_json::from_str(&format!(r#"{{"recent_expenses": {json}}}"#)).unwrap();
        assert_eq!(summary.recent_expenses, expenses);
    }

    #[test]
    fn unparseable_expense_date_is_a_decode_error() {
        let json = r#"{"id": 1, "amount": 1, "description": "x", "category": "Food", "date": "yesterday"}"#;
        assert!(serde_json::from_str::<Expense>(json).is_err());
    }

    #[test]
    fn new_expense_omits_category_when_auto() {
        let draft = ExpenseDraft {
            amount: "12.40".into(),
            description: " Lunch ".into(),
            category: String::new(),
        };
        let body = serde_json::to_value(draft.validate().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"amount": 12.4, "description": "Lunch"}));
    }

    #[test]
    fn expense_draft_rejects_missing_fields() {
        let mut draft = ExpenseDraft {
            amount: String::new(),
            description: "Groceries".into(),
            category: "Food".into(),
        };
        assert_eq!(draft.validate(), Err(ValidationError::MissingAmount));

        draft.amount = "20".into();
        draft.description = "   ".into();
        assert_eq!(draft.validate(), Err(ValidationError::MissingDescription));

        draft.description = "Groceries".into();
        draft.amount = "-3".into();
        assert_eq!(draft.validate(), Err(ValidationError::InvalidAmount));

        draft.amount = "abc".into();
        assert_eq!(draft.validate(), Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn budget_draft_checks_month() {
        let today = NaiveDate::from_ymd_opt(2024, 8, 19).unwrap();
        let mut draft = BudgetDraft::for_month(today);
        assert_eq!(draft.month, "2024-08");

        draft.category = "Food".into();
        draft.amount = "400".into();
        assert_eq!(
            draft.validate(),
            Ok(NewBudget { category: "Food".into(), amount: 400.0, month: "2024-08".into() })
        );

        draft.month = " 2024-8 ".into();
        assert_eq!(draft.validate().map(|b| b.month), Ok("2024-08".to_string()));

        draft.month = "2024-13".into();
        assert_eq!(draft.validate(), Err(ValidationError::InvalidMonth));
        draft.month = "August".into();
        assert_eq!(draft.validate(), Err(ValidationError::InvalidMonth));
        draft.month = "24-08".into();
        assert_eq!(draft.validate(), Err(ValidationError::InvalidMonth));

        draft.category.clear();
        assert_eq!(draft.validate(), Err(ValidationError::MissingCategory));
    }
}
