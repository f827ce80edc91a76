//! # Types
//!
//! Shared data structures used across all modules of the fund registry.
//!
//! ## Design decisions
//!
//! ### One-way states as enums
//!
//! KYC verification and campaign funding are irreversible in this protocol:
//! there is no un-verify and no un-fund. Both are modeled as forward-only
//! enums rather than booleans so the irreversibility is explicit:
//!
//! ```text
//! KycStatus:      Pending ──► Verified
//! CampaignStatus: Active  ──► Funded
//! ```
//!
//! A `Funded` campaign is closed to further funding; there is no path back
//! to `Active`.
//!
//! ### Roles are data, not gates
//!
//! [`UserRole`] is a closed enumeration recorded on the [`User`] at
//! registration. No operation is gated on it — authorization is by the
//! single admin identity, by party leadership, and by KYC status — but
//! keeping it closed prevents arbitrary role strings from entering storage.

use soroban_sdk::{contracttype, Address, String};

/// Self-declared role of a registered user.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UserRole {
    Donor,
    Politician,
    Auditor,
}

/// KYC attestation state. Verification is admin-only and one-way.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KycStatus {
    /// Registered but not yet attested; may not donate or create campaigns.
    Pending,
    /// Attested by the admin; full access to payment-bearing operations.
    Verified,
}

/// Lifecycle state of a fundraising campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CampaignStatus {
    /// Accepting funding.
    Active,
    /// Goal reached; permanently closed to further funding.
    Funded,
}

/// A registered political party eligible to receive donations.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Party {
    /// Auto-incremented unique ID, starting at 1.
    pub id: u32,
    pub name: String,
    pub leader_name: String,
    /// External registration number. Uniqueness is a caller-side concern;
    /// the registry does not enforce it.
    pub registration_number: String,
    /// Address authorized to withdraw this party's accumulated funds.
    pub leader: Address,
    /// Toggleable by the admin; inactive parties accept no donations or
    /// new campaigns.
    pub is_active: bool,
    /// Accumulated balance in token base units: direct donations plus all
    /// campaign funding attributed to this party. Reset to zero on
    /// withdrawal.
    pub total_donations: i128,
}

/// A registered user, keyed by address (one record per address).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    pub full_name: String,
    pub role: UserRole,
    pub kyc: KycStatus,
    pub is_active: bool,
}

impl User {
    pub fn is_verified(&self) -> bool {
        self.kyc == KycStatus::Verified
    }
}

/// A time-boxed fundraising goal scoped to one party.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Auto-incremented unique ID, starting at 0.
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Funding target in token base units. Always positive.
    pub goal: i128,
    /// Total funded so far. May exceed `goal` in the crossing call.
    pub raised: i128,
    /// Ledger timestamp derived from the creation-time duration. Checked by
    /// callers for display only; funding is not blocked on expiry.
    pub deadline: u64,
    /// Owning party; must be active at creation time.
    pub party_id: u32,
    pub creator: Address,
    pub status: CampaignStatus,
}

impl Campaign {
    pub fn is_active(&self) -> bool {
        self.status == CampaignStatus::Active
    }

    pub fn is_funded(&self) -> bool {
        self.status == CampaignStatus::Funded
    }
}

/// Append-only donation record. Attached to a party (direct donations) or
/// to a campaign (funding); never mutated or deleted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Donation {
    pub donor: Address,
    pub amount: i128,
    pub message: String,
    pub timestamp: u64,
}
