//! Signup submissions: a single-shot, role-tagged form echo.
//!
//! Nothing here is persisted. A submission exists only long enough to
//! produce its confirmation message, which the HTTP adapter flashes back to
//! the visitor before discarding the data.

use serde::Deserialize;

/// Raw signup form fields as posted by the browser.
///
/// Every field defaults to an empty string so a partial submission decodes
/// instead of failing; classification decides what the fields mean.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub buyer_interest: String,
    #[serde(default)]
    pub buyer_budget: String,
    #[serde(default)]
    pub seller_product: String,
    #[serde(default)]
    pub seller_description: String,
    #[serde(default)]
    pub seller_price: String,
}

/// A classified signup submission.
///
/// ## Invariants
/// - Exactly one of the buyer/seller field groups is meaningful, selected by
///   the posted `role`; anything else is `Invalid`.
/// - Submissions are transient — no variant outlives the request that
///   produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupSubmission {
    /// A prospective buyer and what they are shopping for.
    Buyer {
        name: String,
        email: String,
        interest: String,
        budget: String,
    },
    /// A prospective seller and the listing they describe. The description
    /// is collected but not echoed in the confirmation.
    Seller {
        name: String,
        email: String,
        product: String,
        description: String,
        price: String,
    },
    /// The posted role was missing or unrecognised.
    Invalid,
}

impl From<SignupForm> for SignupSubmission {
    fn from(form: SignupForm) -> Self {
        match form.role.as_str() {
            "buyer" => Self::Buyer {
                name: form.name,
                email: form.email,
                interest: form.buyer_interest,
                budget: form.buyer_budget,
            },
            "seller" => Self::Seller {
                name: form.name,
                email: form.email,
                product: form.seller_product,
                description: form.seller_description,
                price: form.seller_price,
            },
            _ => Self::Invalid,
        }
    }
}

impl SignupSubmission {
    /// Role tag for logging.
    pub fn role_label(&self) -> &'static str {
        match self {
            Self::Buyer { .. } => "buyer",
            Self::Seller { .. } => "seller",
            Self::Invalid => "invalid",
        }
    }

    /// Compose the one-shot confirmation message for this submission.
    ///
    /// Field values are embedded verbatim; the seller description is
    /// deliberately omitted.
    pub fn confirmation(&self) -> String {
        match self {
            Self::Buyer {
                name,
                interest,
                budget,
                ..
            } => format!(
                "Thank you {name}, you have signed up as a buyer interested in {interest} \
                 with a budget of {budget}."
            ),
            Self::Seller {
                name,
                product,
                price,
                ..
            } => format!(
                "Thank you {name}, you have signed up as a seller listing {product} for {price}."
            ),
            Self::Invalid => "Please select a valid role.".to_owned(),
        }
    }
}
