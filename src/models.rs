//! Wire types exchanged with the backend.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "income" => Some(TransactionType::Income),
            "expense" => Some(TransactionType::Expense),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    pub amount: f64,
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Body of `POST /transactions/add_transaction`.
///
/// Both the id and the name of the category go out; older backends key on
/// the name, newer ones on the id.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTransaction {
    pub amount: f64,
    pub category_id: i64,
    pub category: String,
    pub transaction_type: TransactionType,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UploadOutcome {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub transactions_added: Option<u32>,
    #[serde(default)]
    pub transactions: Option<Vec<Transaction>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl UploadOutcome {
    pub fn added_count(&self) -> usize {
        self.transactions_added
            .map(|n| n as usize)
            .or_else(|| self.transactions.as_ref().map(Vec::len))
            .unwrap_or(0)
    }
}

/// A `{ key: amount }` JSON object that keeps the order the keys arrived in.
///
/// Entries that are not numbers (a `null` total, say) read as zero.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct AmountMap(Map<String, Value>);

impl AmountMap {
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        entries.into_iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_f64().unwrap_or(0.0)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for AmountMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        AmountMap(iter.into_iter().map(|(k, v)| (k.into(), Value::from(v))).collect())
    }
}

/// Reads an explicit `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response of `GET /transactions/get_summary`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SummaryPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_income: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_expenses: f64,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub transactions: Vec<Transaction>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub by_category: AmountMap,
    #[serde(default, deserialize_with = "null_as_default")]
    pub monthly_summary: AmountMap,
}

impl SummaryPayload {
    pub fn balance(&self) -> f64 {
        self.balance
            .unwrap_or(self.total_income - self.total_expenses)
    }
}
