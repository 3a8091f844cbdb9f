use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{QuoteError, Result};
use crate::payments::amortization::{compute_monthly_payment, LoanQuoteInput};

/// one row of the amortization table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPayment {
    pub payment_number: u32,
    pub due_date: Option<NaiveDate>,
    pub beginning_balance: Money,
    pub payment_amount: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub ending_balance: Money,
    pub cumulative_interest: Money,
    pub cumulative_principal: Money,
}

/// principal and interest repaid in one 12-installment block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySummary {
    pub year: u32,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub closing_balance: Money,
}

/// full month-by-month schedule for a loan quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
    pub monthly_payment: Money,
    pub payments: Vec<ScheduledPayment>,
    pub total_interest: Money,
    pub total_payment: Money,
}

impl AmortizationSchedule {
    /// generate an undated schedule
    pub fn generate(input: &LoanQuoteInput) -> Self {
        let payments = equal_installments(
            input.principal(),
            input.annual_rate(),
            input.term_months(),
        );
        Self::from_payments(input, payments)
    }

    /// generate a schedule whose first installment falls due on `first_due`
    pub fn generate_dated(input: &LoanQuoteInput, first_due: NaiveDate) -> Result<Self> {
        let mut payments = equal_installments(
            input.principal(),
            input.annual_rate(),
            input.term_months(),
        );

        for payment in payments.iter_mut() {
            let offset = Months::new(payment.payment_number - 1);
            let due = first_due
                .checked_add_months(offset)
                .ok_or_else(|| QuoteError::InvalidDate {
                    message: format!(
                        "installment {} falls outside the calendar",
                        payment.payment_number
                    ),
                })?;
            payment.due_date = Some(due);
        }

        Ok(Self::from_payments(input, payments))
    }

    fn from_payments(input: &LoanQuoteInput, payments: Vec<ScheduledPayment>) -> Self {
        let total_interest = payments
            .iter()
            .map(|p| p.interest_portion)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_payment = payments
            .iter()
            .map(|p| p.payment_amount)
            .fold(Money::ZERO, |acc, x| acc + x);

        Self {
            principal: input.principal(),
            annual_rate: input.annual_rate(),
            term_months: input.term_months(),
            monthly_payment: payments.first().map(|p| p.payment_amount).unwrap_or_default(),
            payments,
            total_interest,
            total_payment,
        }
    }

    /// get payment for specific period, numbered from 1
    pub fn get_payment(&self, payment_number: u32) -> Option<&ScheduledPayment> {
        let index = payment_number.checked_sub(1)?;
        self.payments.get(index as usize)
    }

    /// outstanding balance after the given installment
    pub fn balance_after_payment(&self, payment_number: u32) -> Money {
        self.get_payment(payment_number)
            .map(|p| p.ending_balance)
            .unwrap_or(self.principal)
    }

    /// roll the schedule up into loan years
    pub fn yearly_summary(&self) -> Vec<YearlySummary> {
        self.payments
            .chunks(12)
            .zip(1..)
            .map(|(rows, year)| YearlySummary {
                year,
                principal_paid: rows
                    .iter()
                    .fold(Money::ZERO, |acc, p| acc + p.principal_portion),
                interest_paid: rows
                    .iter()
                    .fold(Money::ZERO, |acc, p| acc + p.interest_portion),
                closing_balance: rows.last().map(|p| p.ending_balance).unwrap_or_default(),
            })
            .collect()
    }
}

fn equal_installments(principal: Money, annual_rate: Rate, term_months: u32) -> Vec<ScheduledPayment> {
    let monthly_rate = annual_rate.monthly_rate();
    let emi = compute_monthly_payment(principal, annual_rate, term_months);

    let mut payments = Vec::with_capacity(term_months as usize);
    let mut balance = principal;
    let mut cumulative_interest = Money::ZERO;
    let mut cumulative_principal = Money::ZERO;

    for i in 1..=term_months {
        let interest_portion = Money::from_decimal(balance.as_decimal() * monthly_rate);
        let principal_portion = emi - interest_portion;

        cumulative_interest += interest_portion;
        cumulative_principal += principal_portion;

        let ending_balance = (balance - principal_portion).max(Money::ZERO);

        payments.push(ScheduledPayment {
            payment_number: i,
            due_date: None,
            beginning_balance: balance,
            payment_amount: emi,
            principal_portion,
            interest_portion,
            ending_balance,
            cumulative_interest,
            cumulative_principal,
        });

        balance = ending_balance;
    }

    // final installment retires exactly the remaining balance
    if let Some(last) = payments.last_mut() {
        let repaid_before = last.cumulative_principal - last.principal_portion;
        last.principal_portion = last.beginning_balance;
        last.payment_amount = last.beginning_balance + last.interest_portion;
        last.cumulative_principal = repaid_before + last.beginning_balance;
        last.ending_balance = Money::ZERO;
    }

    payments
}
