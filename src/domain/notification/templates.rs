//! Plain-text email templates.

use chrono::NaiveDate;

/// Subject and body of an outgoing email, without a recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub body: String,
}

impl EmailContent {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }
}

const FALLBACK_BILL_NAME: &str = "your bill";

fn rupees(amount: f64) -> String {
    format!("₹{}", amount)
}

/// " of ₹X" when an amount is known, empty otherwise.
fn amount_clause(amount: Option<f64>) -> String {
    amount.map(|a| format!(" of {}", rupees(a))).unwrap_or_default()
}

/// Zero amounts are omitted along with absent ones.
fn nonzero(amount: Option<f64>) -> Option<f64> {
    amount.filter(|a| *a != 0.0)
}

/// Formats a due date as shown to users, e.g. `7 Mar 2024`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Email sent by the due-reminder sweep.
pub fn due_reminder(bill_name: &str, due_on: NaiveDate, amount: Option<f64>) -> EmailContent {
    let amount_text = amount.map(rupees).unwrap_or_else(|| "Not specified".to_string());

    EmailContent::new(
        format!("Reminder: {} is due soon", bill_name),
        format!(
            "Hi! 👋\n\n\
             This is a reminder from Payble.\n\n\
             Your bill \"{}\" is due on {}.\n\n\
             Amount: {}.\n\n\
             Please pay before the due date to avoid penalties.\n\n\
             Thanks,\n\
             Team Payble",
            bill_name,
            display_date(due_on),
            amount_text
        ),
    )
}

/// Confirmation for a gateway-verified payment.
pub fn payment_succeeded(bill_name: Option<&str>, amount: Option<f64>) -> EmailContent {
    EmailContent::new(
        "Payment successful",
        format!(
            "Hi,\n\nYour payment for \"{}\"{} was successful.\n\nThank you!\n- Payble Team",
            bill_name.unwrap_or(FALLBACK_BILL_NAME),
            amount_clause(amount)
        ),
    )
}

/// Confirmation for a payment marked successful without the gateway.
pub fn demo_payment_succeeded(bill_name: Option<&str>, amount: Option<f64>) -> EmailContent {
    EmailContent::new(
        "Payment successful",
        format!(
            "Your payment for \"{}\"{} was marked as successful. Thank you!",
            bill_name.unwrap_or(FALLBACK_BILL_NAME),
            amount_clause(nonzero(amount))
        ),
    )
}

/// Notice for a payment whose signature did not verify.
pub fn payment_failed(bill_name: Option<&str>, amount: Option<f64>) -> EmailContent {
    EmailContent::new(
        "Payment failed",
        format!(
            "Your payment for \"{}\"{} failed. Please try again.",
            bill_name.unwrap_or(FALLBACK_BILL_NAME),
            amount_clause(nonzero(amount))
        ),
    )
}

/// Fixed message used to check email delivery end to end.
pub fn test_email() -> EmailContent {
    EmailContent::new(
        "Test from Payble",
        "If you see this email, Payble's email notifications are working ✅",
    )
}
