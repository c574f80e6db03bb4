//! Pricing-period toggle
//!
//! A single switch flips every pricing card between its monthly and yearly
//! price label

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Monthly,
    Yearly,
}

impl Period {
    /// Map the toggle's checked state to a period (checked = yearly).
    pub fn from_toggle(checked: bool) -> Self {
        if checked {
            Period::Yearly
        } else {
            Period::Monthly
        }
    }
}

/// One pricing card's two labels.
#[derive(Debug, Clone)]
pub struct PriceCard {
    pub monthly: String,
    pub yearly: String,
}

impl PriceCard {
    pub fn label(&self, period: Period) -> &str {
        match period {
            Period::Monthly => &self.monthly,
            Period::Yearly => &self.yearly,
        }
    }
}
