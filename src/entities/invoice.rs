//! Invoice entity

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Invoice row as persisted in `invoices(id, customer_id, amount, status, date)`.
///
/// `amount` is stored as integer cents; `date` is the calendar date the
/// invoice was issued, set once at creation and never touched by updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

impl Invoice {
    /// Create a new invoice dated today.
    pub fn new(customer_id: Uuid, amount: i64, status: InvoiceStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            amount,
            status,
            date: Utc::now().date_naive(),
        }
    }
}

/// The two-value invoice status enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub const ALLOWED: &'static [&'static str] = &["pending", "paid"];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            other => Err(format!("unknown invoice status: {other}")),
        }
    }
}

/// Coerce a decimal currency string to integer cents.
///
/// `"49.99"` → `4999`. Returns `None` for non-numeric input; sign and
/// positivity are the validator's concern, so `"0"` and `"-5"` still parse.
///
/// Digits are parsed directly rather than through a float, so exponent
/// notation and magnitudes that would overflow the cent count are rejected
/// as non-numeric instead of saturating. The third fractional digit rounds
/// half-up; anything past it is ignored.
pub fn parse_amount_cents(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().ok()?
    };

    let mut digits = frac.bytes().map(|b| i64::from(b - b'0'));
    let tens = digits.next().unwrap_or(0);
    let units = digits.next().unwrap_or(0);
    let round_up = digits.next().is_some_and(|d| d >= 5);
    let frac_cents = tens * 10 + units + i64::from(round_up);

    let cents = whole.checked_mul(100)?.checked_add(frac_cents)?;
    Some(if negative { -cents } else { cents })
}
