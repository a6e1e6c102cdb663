//! Client-side checks run before a form is submitted.

use crate::error::ValidationError;
use crate::models::{Category, NewTransaction, TransactionType};

/// Raw input values of the add-transaction form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionForm {
    pub amount: String,
    pub category_id: String,
    pub transaction_type: String,
    pub description: String,
}

impl TransactionForm {
    pub fn validate(&self, categories: &[Category]) -> Result<NewTransaction, ValidationError> {
        let amount_raw = self.amount.trim();
        let category_raw = self.category_id.trim();
        let type_raw = self.transaction_type.trim();
        if amount_raw.is_empty() || category_raw.is_empty() || type_raw.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let category_id = category_raw
            .parse::<i64>()
            .map_err(|_| ValidationError::MissingFields)?;
        let transaction_type =
            TransactionType::parse(type_raw).ok_or(ValidationError::MissingFields)?;

        let amount = amount_raw
            .parse::<f64>()
            .map_err(|_| ValidationError::InvalidAmount)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidAmount);
        }

        let category = categories
            .iter()
            .find(|c| c.id == category_id)
            .map(|c| c.name.clone())
            .unwrap_or_default();

        Ok(NewTransaction {
            amount,
            category_id,
            category,
            transaction_type,
            description: self.description.trim().to_string(),
        })
    }
}

pub fn validate_category_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        Err(ValidationError::MissingCategoryName)
    } else {
        Ok(name.to_string())
    }
}

pub fn validate_pdf_name(file_name: Option<&str>) -> Result<(), ValidationError> {
    let name = file_name
        .filter(|n| !n.is_empty())
        .ok_or(ValidationError::MissingFile)?;
    match name.rsplit_once('.') {
        Some((_, ext)) if ext.eq_ignore_ascii_case("pdf") => Ok(()),
        _ => Err(ValidationError::NotPdf),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![
            Category {
                id: 1,
                name: "Food".into(),
                is_default: true,
            },
            Category {
                id: 4,
                name: "Travel".into(),
                is_default: false,
            },
        ]
    }

    fn form(amount: &str, category_id: &str, kind: &str) -> TransactionForm {
        TransactionForm {
            amount: amount.into(),
            category_id: category_id.into(),
            transaction_type: kind.into(),
            description: "  lunch ".into(),
        }
    }

    #[test]
    fn complete_form_builds_request() {
        let tx = form("12.50", "4", "expense").validate(&categories()).unwrap();
        assert_eq!(tx.amount, 12.5);
        assert_eq!(tx.category_id, 4);
        assert_eq!(tx.category, "Travel");
        assert_eq!(tx.transaction_type, TransactionType::Expense);
        assert_eq!(tx.description, "lunch");
    }

    #[test]
    fn missing_fields_are_rejected() {
        assert_eq!(form("", "1", "income").validate(&categories()), Err(ValidationError::MissingFields));
        assert_eq!(form("5", "", "income").validate(&categories()), Err(ValidationError::MissingFields));
        assert_eq!(form("5", "1", "").validate(&categories()), Err(ValidationError::MissingFields));
    }

    #[test]
    fn amount_must_be_positive_number() {
        assert_eq!(form("0", "1", "income").validate(&categories()), Err(ValidationError::InvalidAmount));
        assert_eq!(form("-3", "1", "income").validate(&categories()), Err(ValidationError::InvalidAmount));
        assert_eq!(form("abc", "1", "income").validate(&categories()), Err(ValidationError::InvalidAmount));
        assert_eq!(form("NaN", "1", "income").validate(&categories()), Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn category_name_is_trimmed() {
        assert_eq!(validate_category_name("  Pets "), Ok("Pets".to_string()));
        assert_eq!(validate_category_name("   "), Err(ValidationError::MissingCategoryName));
    }

    #[test]
    fn only_pdf_uploads_pass() {
        assert_eq!(validate_pdf_name(Some("statement.PDF")), Ok(()));
        assert_eq!(validate_pdf_name(Some("statement.csv")), Err(ValidationError::NotPdf));
        assert_eq!(validate_pdf_name(Some("pdf")), Err(ValidationError::NotPdf));
        assert_eq!(validate_pdf_name(None), Err(ValidationError::MissingFile));
        assert_eq!(validate_pdf_name(Some("")), Err(ValidationError::MissingFile));
    }
}
