//! Monthly payment operations
//!
//! Adds, removes, and toggles bills on a month's payment plan, and derives
//! due-date statuses using the configured urgency windows.

use chrono::{Local, NaiveDate};

use crate::config::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, MonthlyPaymentPlan, PaymentId, PaymentItem, PaymentStatus, PlanMonth};
use crate::storage::Storage;

/// A payment item paired with its derived status
#[derive(Debug, Clone)]
pub struct PaymentWithStatus {
    pub item: PaymentItem,
    pub status: PaymentStatus,
}

/// Service for the monthly payment plan
pub struct PaymentService<'a> {
    storage: &'a Storage,
    urgent_days: i64,
    soon_days: i64,
}

impl<'a> PaymentService<'a> {
    pub fn new(storage: &'a Storage, settings: &Settings) -> Self {
        Self {
            storage,
            urgent_days: settings.payment_urgent_days,
            soon_days: settings.payment_soon_days,
        }
    }

    /// Fetch the payment plan for a month, or fail if none exists
    pub fn get_plan(&self, month: PlanMonth) -> FintrackResult<MonthlyPaymentPlan> {
        self.storage
            .payments
            .get(month)?
            .ok_or_else(|| FintrackError::payment_plan_not_found(month.to_string()))
    }

    /// Fetch the payment plan for a month, creating an empty one if needed
    pub fn get_or_create_plan(&self, month: PlanMonth) -> FintrackResult<MonthlyPaymentPlan> {
        match self.storage.payments.get(month)? {
            Some(plan) => Ok(plan),
            None => {
                let plan = MonthlyPaymentPlan::new(month);
                self.persist(plan.clone())?;
                Ok(plan)
            }
        }
    }

    /// Add a bill to a month's plan
    pub fn add_payment(
        &self,
        month: PlanMonth,
        name: &str,
        amount: Money,
        due_date: NaiveDate,
        notes: &str,
    ) -> FintrackResult<PaymentId> {
        if name.trim().is_empty() {
            return Err(FintrackError::Validation("Payment name cannot be empty".into()));
        }
        if amount.is_negative() {
            return Err(FintrackError::Validation(
                "Payment amount cannot be negative".into(),
            ));
        }
        let mut plan = self.get_or_create_plan(month)?;
        let mut item = PaymentItem::new(name, amount, due_date);
        item.notes = notes.to_string();
        let id = item.id;
        plan.items.push(item);
        self.persist(plan)?;
        Ok(id)
    }

    /// Remove a bill by id
    pub fn remove_payment(&self, month: PlanMonth, id: PaymentId) -> FintrackResult<()> {
        let mut plan = self.get_plan(month)?;
        let before = plan.items.len();
        plan.items.retain(|p| p.id != id);
        if plan.items.len() == before {
            return Err(FintrackError::payment_not_found(id.to_string()));
        }
        self.persist(plan)
    }

    /// Mark a bill paid
    pub fn mark_paid(&self, month: PlanMonth, id: PaymentId) -> FintrackResult<()> {
        self.set_paid(month, id, true)
    }

    /// Mark a bill unpaid again
    pub fn mark_unpaid(&self, month: PlanMonth, id: PaymentId) -> FintrackResult<()> {
        self.set_paid(month, id, false)
    }

    fn set_paid(&self, month: PlanMonth, id: PaymentId, paid: bool) -> FintrackResult<()> {
        let mut plan = self.get_plan(month)?;
        match plan.find_item_mut(id) {
            Some(item) => item.is_paid = paid,
            None => return Err(FintrackError::payment_not_found(id.to_string())),
        }
        self.persist(plan)
    }

    /// All bills for a month with their status as of today
    pub fn payments_with_status(&self, month: PlanMonth) -> FintrackResult<Vec<PaymentWithStatus>> {
        self.payments_with_status_on(month, Local::now().date_naive())
    }

    /// All bills for a month with their status as of a given date
    pub fn payments_with_status_on(
        &self,
        month: PlanMonth,
        today: NaiveDate,
    ) -> FintrackResult<Vec<PaymentWithStatus>> {
        let plan = self.get_plan(month)?;
        let mut items: Vec<PaymentWithStatus> = plan
            .items
            .into_iter()
            .map(|item| PaymentWithStatus {
                status: item.status_on(today, self.urgent_days, self.soon_days),
                item,
            })
            .collect();
        items.sort_by_key(|p| p.item.due_date);
        Ok(items)
    }

    /// Unpaid bills needing attention: overdue, urgent, or soon
    pub fn due_payments(&self, month: PlanMonth) -> FintrackResult<Vec<PaymentWithStatus>> {
        let mut items = self.payments_with_status(month)?;
        items.retain(|p| {
            matches!(
                p.status,
                PaymentStatus::Overdue | PaymentStatus::Urgent | PaymentStatus::Soon
            )
        });
        Ok(items)
    }

    fn persist(&self, mut plan: MonthlyPaymentPlan) -> FintrackResult<()> {
        plan.touch();
        self.storage.payments.upsert(plan)?;
        self.storage.payments.save()
    }
}
