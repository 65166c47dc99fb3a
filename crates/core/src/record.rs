//! The startup feature record accepted by the prediction service.
//!
//! The service's input model is a flat object of 31 numeric fields:
//! two encoded categorical codes, funding metrics, and a block of 0/1
//! indicator flags. Field names on the wire keep the service's casing
//! (`is_CA`, `has_VC`, ...), so the non-snake-case ones carry explicit
//! serde renames.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One startup's feature vector, as POSTed to `/predict`.
///
/// All fields are required by the service; the indicator flags and
/// `labels` must be 0 or 1. `labels` is part of the service's declared
/// input model even though it looks like a ground-truth label, so it is
/// kept in the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StartupRecord {
    /// Label-encoded state code.
    pub state_code: i32,
    /// Label-encoded category code.
    pub category_code: i32,
    /// Company age (years) at first funding round.
    pub age_first_funding_year: f64,
    /// Company age (years) at last funding round.
    pub age_last_funding_year: f64,
    /// Number of key relationships (founders, advisors, investors).
    pub relationships: i32,
    /// Number of funding rounds raised.
    pub funding_rounds: i32,
    /// Total funding raised, in USD.
    pub funding_total_usd: i64,
    /// Number of milestones reached.
    pub milestones: i32,

    // -- Location flags --
    #[serde(rename = "is_CA")]
    #[validate(range(min = 0, max = 1))]
    pub is_ca: i32,
    #[serde(rename = "is_NY")]
    #[validate(range(min = 0, max = 1))]
    pub is_ny: i32,
    #[serde(rename = "is_MA")]
    #[validate(range(min = 0, max = 1))]
    pub is_ma: i32,
    #[serde(rename = "is_TX")]
    #[validate(range(min = 0, max = 1))]
    pub is_tx: i32,
    #[validate(range(min = 0, max = 1))]
    pub is_otherstate: i32,

    // -- Sector flags --
    #[validate(range(min = 0, max = 1))]
    pub is_software: i32,
    #[validate(range(min = 0, max = 1))]
    pub is_web: i32,
    #[validate(range(min = 0, max = 1))]
    pub is_mobile: i32,
    #[validate(range(min = 0, max = 1))]
    pub is_enterprise: i32,
    #[validate(range(min = 0, max = 1))]
    pub is_advertising: i32,
    #[validate(range(min = 0, max = 1))]
    pub is_gamesvideo: i32,
    #[validate(range(min = 0, max = 1))]
    pub is_ecommerce: i32,
    #[validate(range(min = 0, max = 1))]
    pub is_biotech: i32,
    #[validate(range(min = 0, max = 1))]
    pub is_consulting: i32,
    #[validate(range(min = 0, max = 1))]
    pub is_othercategory: i32,

    // -- Funding source flags --
    #[serde(rename = "has_VC")]
    #[validate(range(min = 0, max = 1))]
    pub has_vc: i32,
    #[validate(range(min = 0, max = 1))]
    pub has_angel: i32,
    #[serde(rename = "has_roundA")]
    #[validate(range(min = 0, max = 1))]
    pub has_round_a: i32,
    #[serde(rename = "has_roundB")]
    #[validate(range(min = 0, max = 1))]
    pub has_round_b: i32,
    #[serde(rename = "has_roundC")]
    #[validate(range(min = 0, max = 1))]
    pub has_round_c: i32,
    #[serde(rename = "has_roundD")]
    #[validate(range(min = 0, max = 1))]
    pub has_round_d: i32,

    /// Average number of participants per funding round.
    pub avg_participants: f64,
    #[validate(range(min = 0, max = 1))]
    pub is_top500: i32,
    #[validate(range(min = 0, max = 1))]
    pub labels: i32,
}

impl StartupRecord {
    /// The canonical sample record sent by the CLI.
    ///
    /// A California software/web/e-commerce startup with four funding
    /// rounds and $15M raised. Values match the fixture the service was
    /// exercised with during development.
    pub fn sample() -> Self {
        Self {
            state_code: 0,
            category_code: 8,
            age_first_funding_year: 2.0,
            age_last_funding_year: 6.0,
            relationships: 3,
            funding_rounds: 4,
            funding_total_usd: 15_000_000,
            milestones: 2,
            is_ca: 1,
            is_ny: 0,
            is_ma: 0,
            is_tx: 0,
            is_otherstate: 0,
            is_software: 1,
            is_web: 1,
            is_mobile: 0,
            is_enterprise: 0,
            is_advertising: 0,
            is_gamesvideo: 0,
            is_ecommerce: 1,
            is_biotech: 0,
            is_consulting: 0,
            is_othercategory: 0,
            has_vc: 1,
            has_angel: 1,
            has_round_a: 1,
            has_round_b: 0,
            has_round_c: 0,
            has_round_d: 0,
            avg_participants: 1.5,
            is_top500: 1,
            labels: 1,
        }
    }
}
