//! Rupee amounts and their paise wire form.
//!
//! The payment gateway takes amounts in minor currency units (rupees x 100).
//! Conversion is integer arithmetic on the digits of the input, so
//! two-decimal amounts like `19.99` map to exactly `1999` with no
//! floating-point drift at the boundary.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Paise per rupee.
const PAISE_PER_RUPEE: u64 = 100;

/// Convert a whole rupee amount to paise.
///
/// # Errors
///
/// Returns an error when the amount is zero or overflows.
pub fn rupees_to_paise(rupees: u64) -> Result<u64, &'static str> {
    if rupees == 0 {
        return Err("amount must be greater than zero");
    }
    rupees.checked_mul(PAISE_PER_RUPEE).ok_or("amount is too large")
}

/// Parse a user-entered rupee amount ("10", "19.99", "0.50") into paise.
///
/// Accepts at most two decimal places; anything else is rejected rather than
/// rounded.
///
/// # Errors
///
/// Returns a message suitable for inline display when the input is empty,
/// malformed, zero, negative, or more precise than one paisa.
pub fn parse_rupees_to_paise(input: &str) -> Result<u64, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("enter an amount");
    }
    if trimmed.starts_with('-') || trimmed.starts_with('+') {
        return Err("enter a plain positive amount");
    }

    let (whole, frac) = match trimmed.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (trimmed, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err("enter a valid amount");
    }
    if frac.len() > 2 {
        return Err("amounts are precise to one paisa");
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err("enter a valid amount");
    }

    let rupees: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| "amount is too large")?
    };
    // "19.9" means 90 paise, not 9.
    let paise_frac: u64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<u64>().map_err(|_| "enter a valid amount")? * 10,
        _ => frac.parse().map_err(|_| "enter a valid amount")?,
    };

    let total = rupees
        .checked_mul(PAISE_PER_RUPEE)
        .and_then(|p| p.checked_add(paise_frac))
        .ok_or("amount is too large")?;
    if total == 0 {
        return Err("amount must be greater than zero");
    }
    Ok(total)
}

/// Render a paise amount back to a rupee string for display.
pub fn format_paise(paise: u64) -> String {
    let rupees = paise / PAISE_PER_RUPEE;
    let rem = paise % PAISE_PER_RUPEE;
    if rem == 0 {
        format!("\u{20b9}{rupees}")
    } else {
        format!("\u{20b9}{rupees}.{rem:02}")
    }
}
