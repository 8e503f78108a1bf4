//! Monthly payment plan model
//!
//! Tracks bills with due dates and paid/unpaid status, independent of the
//! budget plan's expense items. Due-date status is derived at read time,
//! never stored.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{PaymentId, PaymentPlanId};
use super::money::Money;
use super::month::PlanMonth;

/// Derived urgency of a payment relative to a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Overdue,
    Urgent,
    Soon,
    Normal,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paid => write!(f, "paid"),
            Self::Overdue => write!(f, "overdue"),
            Self::Urgent => write!(f, "urgent"),
            Self::Soon => write!(f, "soon"),
            Self::Normal => write!(f, "normal"),
        }
    }
}

/// A single tracked bill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentItem {
    pub id: PaymentId,
    pub name: String,
    pub amount: Money,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub notes: String,
}

impl PaymentItem {
    pub fn new(name: impl Into<String>, amount: Money, due_date: NaiveDate) -> Self {
        Self {
            id: PaymentId::new(),
            name: name.into(),
            amount,
            due_date,
            is_paid: false,
            notes: String::new(),
        }
    }

    /// Derive the status of this payment as of `today`
    ///
    /// `urgent_days` and `soon_days` are the window sizes (inclusive) for
    /// the urgent and soon buckets.
    pub fn status_on(&self, today: NaiveDate, urgent_days: i64, soon_days: i64) -> PaymentStatus {
        if self.is_paid {
            return PaymentStatus::Paid;
        }
        if self.due_date < today {
            return PaymentStatus::Overdue;
        }
        if self.due_date <= today + Duration::days(urgent_days) {
            return PaymentStatus::Urgent;
        }
        if self.due_date <= today + Duration::days(soon_days) {
            return PaymentStatus::Soon;
        }
        PaymentStatus::Normal
    }
}

/// All tracked bills for one month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyPaymentPlan {
    pub id: PaymentPlanId,
    pub month: PlanMonth,
    #[serde(default)]
    pub items: Vec<PaymentItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MonthlyPaymentPlan {
    pub fn new(month: PlanMonth) -> Self {
        let now = Utc::now();
        Self {
            id: PaymentPlanId::new(),
            month,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn find_item_mut(&mut self, id: PaymentId) -> Option<&mut PaymentItem> {
        self.items.iter_mut().find(|p| p.id == id)
    }

    /// Mark the plan as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
