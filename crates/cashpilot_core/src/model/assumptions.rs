//! Assumption definitions - the levers a scenario pulls on the projection
//!
//! Each assumption pairs a category (what part of the business it touches)
//! with a kind (how it mutates the working state). The wire format is the
//! stored row shape: a snake_case `assumption_type` tag plus a free-form
//! `parameters` map. Decoding is deliberately permissive: rows persisted by
//! older or newer builds must never fail to load, so unknown type strings
//! land in [`AssumptionKind::Unrecognized`] and missing numeric parameters
//! default to zero. The engine skips unrecognized kinds with a warning at
//! apply time.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// What part of the business an assumption targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssumptionCategory {
    Revenue,
    Expense,
    Salaries,
    SocialCharges,
    Investment,
    Equipment,
    Pricing,
    ExpenseReduction,
    PaymentTerms,
    WorkingCapital,
}

/// How an assumption mutates the working state, one variant per known
/// `assumption_type`. Unknown stored type strings decode into
/// `Unrecognized` rather than failing; they are skipped at apply time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireKind", into = "WireKind")]
pub enum AssumptionKind {
    /// Monthly compounding revenue growth, in percent
    GrowthRate { rate: f64 },
    /// Recurring monthly amount added to salaries or fixed expenses
    FixedAmount { amount: f64 },
    /// Same effect as `FixedAmount`; kept as a distinct stored type
    Recurring { amount: f64 },
    /// Single cash outflow in the calendar month of `date`
    OneTime { amount: f64, date: Option<Date> },
    /// Percent change applied to pricing or fixed expenses
    PercentageChange { rate: f64 },
    /// Overwrites customer/supplier payment-term day counts
    PaymentTerms {
        customer_days: Option<f64>,
        supplier_days: Option<f64>,
    },
    /// A stored type this build does not know about. Carried verbatim so
    /// round-tripping a row never loses data.
    Unrecognized {
        assumption_type: String,
        parameters: serde_json::Value,
    },
}

impl AssumptionKind {
    /// The stored `assumption_type` tag for this kind.
    pub fn type_tag(&self) -> &str {
        match self {
            AssumptionKind::GrowthRate { .. } => "growth_rate",
            AssumptionKind::FixedAmount { .. } => "fixed_amount",
            AssumptionKind::Recurring { .. } => "recurring",
            AssumptionKind::OneTime { .. } => "one_time",
            AssumptionKind::PercentageChange { .. } => "percentage_change",
            AssumptionKind::PaymentTerms { .. } => "payment_terms",
            AssumptionKind::Unrecognized {
                assumption_type, ..
            } => assumption_type,
        }
    }

    /// Whether two kinds are the same stored type, ignoring parameters.
    pub fn same_type(&self, other: &AssumptionKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
            && self.type_tag() == other.type_tag()
    }
}

// === Wire format ===

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireKind {
    assumption_type: String,
    #[serde(default)]
    parameters: serde_json::Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RateParams {
    rate: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AmountParams {
    amount: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OneTimeParams {
    amount: f64,
    date: Option<Date>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PaymentTermsParams {
    customer_days: Option<f64>,
    supplier_days: Option<f64>,
}

fn decode<T: Default + for<'de> Deserialize<'de>>(params: &serde_json::Value) -> T {
    // Malformed parameter maps decode as defaults, never as load failures
    T::deserialize(params.clone()).unwrap_or_default()
}

impl From<WireKind> for AssumptionKind {
    fn from(wire: WireKind) -> Self {
        match wire.assumption_type.as_str() {
            "growth_rate" => {
                let p: RateParams = decode(&wire.parameters);
                AssumptionKind::GrowthRate { rate: p.rate }
            }
            "fixed_amount" => {
                let p: AmountParams = decode(&wire.parameters);
                AssumptionKind::FixedAmount { amount: p.amount }
            }
            "recurring" => {
                let p: AmountParams = decode(&wire.parameters);
                AssumptionKind::Recurring { amount: p.amount }
            }
            "one_time" => {
                let p: OneTimeParams = decode(&wire.parameters);
                AssumptionKind::OneTime {
                    amount: p.amount,
                    date: p.date,
                }
            }
            "percentage_change" => {
                let p: RateParams = decode(&wire.parameters);
                AssumptionKind::PercentageChange { rate: p.rate }
            }
            "payment_terms" => {
                let p: PaymentTermsParams = decode(&wire.parameters);
                AssumptionKind::PaymentTerms {
                    customer_days: p.customer_days,
                    supplier_days: p.supplier_days,
                }
            }
            _ => AssumptionKind::Unrecognized {
                assumption_type: wire.assumption_type,
                parameters: wire.parameters,
            },
        }
    }
}

impl From<AssumptionKind> for WireKind {
    fn from(kind: AssumptionKind) -> Self {
        use serde_json::json;
        match kind {
            AssumptionKind::GrowthRate { rate } => WireKind {
                assumption_type: "growth_rate".into(),
                parameters: json!({ "rate": rate }),
            },
            AssumptionKind::FixedAmount { amount } => WireKind {
                assumption_type: "fixed_amount".into(),
                parameters: json!({ "amount": amount }),
            },
            AssumptionKind::Recurring { amount } => WireKind {
                assumption_type: "recurring".into(),
                parameters: json!({ "amount": amount }),
            },
            AssumptionKind::OneTime { amount, date } => WireKind {
                assumption_type: "one_time".into(),
                parameters: json!({ "amount": amount, "date": date }),
            },
            AssumptionKind::PercentageChange { rate } => WireKind {
                assumption_type: "percentage_change".into(),
                parameters: json!({ "rate": rate }),
            },
            AssumptionKind::PaymentTerms {
                customer_days,
                supplier_days,
            } => WireKind {
                assumption_type: "payment_terms".into(),
                parameters: json!({
                    "customer_days": customer_days,
                    "supplier_days": supplier_days,
                }),
            },
            AssumptionKind::Unrecognized {
                assumption_type,
                parameters,
            } => WireKind {
                assumption_type,
                parameters,
            },
        }
    }
}

/// A single scenario assumption. List order is significant: within a
/// month, later assumptions see the state as mutated by earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumption {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: AssumptionCategory,
    #[serde(flatten)]
    pub kind: AssumptionKind,
    /// First month the assumption applies to (inclusive); absent = from
    /// the start of the scenario horizon
    #[serde(default)]
    pub start_date: Option<Date>,
    /// Last month the assumption applies to (inclusive); absent = through
    /// the end of the scenario horizon
    #[serde(default)]
    pub end_date: Option<Date>,
}

impl Assumption {
    pub fn new(name: impl Into<String>, category: AssumptionCategory, kind: AssumptionKind) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category,
            kind,
            start_date: None,
            end_date: None,
        }
    }

    /// Restrict the assumption to an inclusive date window.
    pub fn between(mut self, start: Date, end: Date) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Whether this assumption applies to the month containing `date`.
    /// Open-ended window sides are unrestricted.
    pub fn applies_on(&self, date: Date) -> bool {
        if let Some(start) = self.start_date
            && date < start
        {
            return false;
        }
        if let Some(end) = self.end_date
            && date > end
        {
            return false;
        }
        true
    }
}
