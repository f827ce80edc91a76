//! # Fund Registry Contract
//!
//! This is the root crate of the **political party fund registry**. It
//! exposes the single Soroban contract `FundRegistry` whose entry points
//! cover the full donation lifecycle:
//!
//! | Phase        | Entry Point(s)                                   |
//! |--------------|--------------------------------------------------|
//! | Bootstrap    | [`FundRegistry::init`]                           |
//! | Parties      | `register_party`, `toggle_party_status`          |
//! | Users / KYC  | `register_user`, `verify_kyc`                    |
//! | Donations    | [`FundRegistry::make_donation`]                  |
//! | Campaigns    | `create_campaign`, [`FundRegistry::fund_campaign`] |
//! | Custody      | [`FundRegistry::withdraw_funds`]                 |
//! | Queries      | `get_party`, `get_campaign`, `get_user`, `get_party_donations`, counters |
//!
//! ## Architecture
//!
//! Authorization is fully delegated to [`access`]. Storage access is fully
//! delegated to [`storage`]. This file contains **only** the public entry
//! points, precondition ordering, and event emissions.
//!
//! Every mutating entry point takes its caller as an explicit `Address`
//! argument and calls `require_auth()` on it; nothing is derived from
//! ambient context. All monetary amounts are `i128` base units of the
//! funding token configured at [`FundRegistry::init`] — the contract never
//! touches floating point.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env, String, Vec,
};

pub mod access;
pub mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use types::{Campaign, CampaignStatus, Donation, KycStatus, Party, User, UserRole};

/// Campaign durations are expressed in whole days at creation time.
const SECONDS_PER_DAY: u64 = 86_400;

/// Inclusive bounds on `duration_days` for `create_campaign`.
const MIN_DURATION_DAYS: u32 = 1;
const MAX_DURATION_DAYS: u32 = 365;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    PartyNotFound = 4,
    CampaignNotFound = 5,
    UserNotFound = 6,
    UserAlreadyRegistered = 7,
    UserNotVerified = 8,
    PartyNotActive = 9,
    CampaignNotActive = 10,
    InvalidAmount = 11,
    InvalidGoal = 12,
    InvalidDuration = 13,
    NothingToWithdraw = 14,
    Overflow = 15,
}

#[contract]
pub struct FundRegistry;

#[contractimpl]
impl FundRegistry {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract, fixing the admin identity and the funding
    /// token.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    ///
    /// - `admin` is the only address that may register parties, toggle
    ///   party status, and verify KYC. There is no rotation mechanism.
    /// - `token` is the asset all donations and withdrawals move in.
    pub fn init(env: Env, admin: Address, token: Address) {
        admin.require_auth();
        access::init_admin(&env, &admin);
        storage::set_funding_token(&env, &token);
    }

    // ─────────────────────────────────────────────────────────
    // Party lifecycle
    // ─────────────────────────────────────────────────────────

    /// Register a new party. Admin only.
    ///
    /// Party ids are assigned sequentially starting at 1. The party starts
    /// active with a zero balance. `registration_number` uniqueness is not
    /// enforced here; it is a caller-side pre-check.
    pub fn register_party(
        env: Env,
        caller: Address,
        name: String,
        leader_name: String,
        registration_number: String,
        leader: Address,
    ) -> Party {
        caller.require_auth();
        access::require_admin(&env, &caller);

        let id = storage::next_party_id(&env);
        let party = Party {
            id,
            name,
            leader_name,
            registration_number,
            leader: leader.clone(),
            is_active: true,
            total_donations: 0,
        };
        storage::save_party(&env, &party);

        events::emit_party_registered(&env, id, leader, caller);
        party
    }

    /// Flip a party's active flag. Admin only.
    ///
    /// Returns the new flag value. Inactive parties accept no donations
    /// and no new campaigns; existing campaigns keep running.
    pub fn toggle_party_status(env: Env, caller: Address, party_id: u32) -> bool {
        caller.require_auth();
        access::require_admin(&env, &caller);

        let mut party = storage::load_party(&env, party_id);
        party.is_active = !party.is_active;
        storage::save_party(&env, &party);

        events::emit_party_status_toggled(&env, party_id, party.is_active);
        party.is_active
    }

    // ─────────────────────────────────────────────────────────
    // Users and KYC
    // ─────────────────────────────────────────────────────────

    /// Register the caller as a user. One record per address.
    ///
    /// The new user starts unverified and may not donate or create
    /// campaigns until the admin calls [`FundRegistry::verify_kyc`].
    pub fn register_user(env: Env, caller: Address, full_name: String, role: UserRole) -> User {
        caller.require_auth();

        if storage::has_user(&env, &caller) {
            panic_with_error!(&env, Error::UserAlreadyRegistered);
        }

        let user = User {
            full_name,
            role: role.clone(),
            kyc: KycStatus::Pending,
            is_active: true,
        };
        storage::save_new_user(&env, &caller, &user);

        events::emit_user_registered(&env, caller, role);
        user
    }

    /// Mark `user` as KYC-verified. Admin only.
    ///
    /// Verification is one-way; calling it again on a verified user is a
    /// harmless rewrite of the same state.
    pub fn verify_kyc(env: Env, caller: Address, user: Address) {
        caller.require_auth();
        access::require_admin(&env, &caller);

        let mut record = storage::load_user(&env, &user);
        record.kyc = KycStatus::Verified;
        storage::save_user(&env, &user, &record);

        events::emit_kyc_verified(&env, user, caller);
    }

    // ─────────────────────────────────────────────────────────
    // Donations
    // ─────────────────────────────────────────────────────────

    /// Donate `amount` of the funding token directly to a party.
    ///
    /// `donor` must be a registered, KYC-verified user and the party must
    /// be active. The amount moves donor → contract, the party's balance
    /// is credited, and an append-only donation record is kept.
    pub fn make_donation(env: Env, donor: Address, party_id: u32, message: String, amount: i128) {
        donor.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        access::require_verified_user(&env, &donor);

        let mut party = storage::load_party(&env, party_id);
        if !party.is_active {
            panic_with_error!(&env, Error::PartyNotActive);
        }

        let token_client = token::Client::new(&env, &storage::funding_token(&env));
        token_client.transfer(&donor, &env.current_contract_address(), &amount);

        party.total_donations = storage::checked_credit(&env, party.total_donations, amount);
        storage::save_party(&env, &party);

        let donation = Donation {
            donor: donor.clone(),
            amount,
            message,
            timestamp: env.ledger().timestamp(),
        };
        storage::push_party_donation(&env, party_id, &donation);

        events::emit_donation_made(&env, party_id, donor, amount);
    }

    // ─────────────────────────────────────────────────────────
    // Campaigns
    // ─────────────────────────────────────────────────────────

    /// Create a fundraising campaign scoped to an active party.
    ///
    /// `creator` must be a registered, KYC-verified user. `duration_days`
    /// must be within `[1, 365]`; the deadline is fixed at creation and is
    /// informational — funding is gated on status, not on time.
    ///
    /// Campaign ids are assigned sequentially starting at 0.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        name: String,
        description: String,
        goal: i128,
        duration_days: u32,
        party_id: u32,
    ) -> Campaign {
        creator.require_auth();
        access::require_verified_user(&env, &creator);

        let party = storage::load_party(&env, party_id);
        if !party.is_active {
            panic_with_error!(&env, Error::PartyNotActive);
        }
        if goal <= 0 {
            panic_with_error!(&env, Error::InvalidGoal);
        }
        if !(MIN_DURATION_DAYS..=MAX_DURATION_DAYS).contains(&duration_days) {
            panic_with_error!(&env, Error::InvalidDuration);
        }

        let id = storage::next_campaign_id(&env);
        let campaign = Campaign {
            id,
            name,
            description,
            goal,
            raised: 0,
            deadline: env.ledger().timestamp() + u64::from(duration_days) * SECONDS_PER_DAY,
            party_id,
            creator: creator.clone(),
            status: CampaignStatus::Active,
        };
        storage::save_campaign(&env, &campaign);

        events::emit_campaign_created(&env, id, party_id, creator, goal);
        campaign
    }

    /// Fund an active campaign with `amount` of the funding token.
    ///
    /// The amount is added to `raised` first and the updated total is
    /// compared against the goal with `>=`; on the crossing call the
    /// campaign transitions to `Funded` in the same state write that
    /// records the contribution, so there is no window in which a closed
    /// campaign can still be funded. Over-funding past the goal within the
    /// crossing call is accepted.
    ///
    /// The owning party's balance is credited by the same amount.
    pub fn fund_campaign(env: Env, donor: Address, campaign_id: u32, amount: i128) {
        donor.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        access::require_verified_user(&env, &donor);

        let mut campaign = storage::load_campaign(&env, campaign_id);
        if !campaign.is_active() {
            panic_with_error!(&env, Error::CampaignNotActive);
        }

        let token_client = token::Client::new(&env, &storage::funding_token(&env));
        token_client.transfer(&donor, &env.current_contract_address(), &amount);

        campaign.raised = storage::checked_credit(&env, campaign.raised, amount);
        let goal_reached = campaign.raised >= campaign.goal;
        if goal_reached {
            campaign.status = CampaignStatus::Funded;
        }
        storage::save_campaign(&env, &campaign);

        let mut party = storage::load_party(&env, campaign.party_id);
        party.total_donations = storage::checked_credit(&env, party.total_donations, amount);
        storage::save_party(&env, &party);

        let donation = Donation {
            donor: donor.clone(),
            amount,
            message: String::from_str(&env, ""),
            timestamp: env.ledger().timestamp(),
        };
        storage::push_campaign_donation(&env, campaign_id, &donation);

        events::emit_campaign_funded(&env, campaign_id, donor, amount, goal_reached);
    }

    // ─────────────────────────────────────────────────────────
    // Fund custody
    // ─────────────────────────────────────────────────────────

    /// Withdraw a party's entire accumulated balance to its leader.
    ///
    /// Only the party's leader may call this. The full `total_donations`
    /// balance moves contract → leader and the balance resets to zero.
    /// Returns the amount withdrawn.
    pub fn withdraw_funds(env: Env, caller: Address, party_id: u32) -> i128 {
        caller.require_auth();

        let mut party = storage::load_party(&env, party_id);
        access::require_party_leader(&env, &party, &caller);

        let amount = party.total_donations;
        if amount <= 0 {
            panic_with_error!(&env, Error::NothingToWithdraw);
        }

        let token_client = token::Client::new(&env, &storage::funding_token(&env));
        token_client.transfer(&env.current_contract_address(), &caller, &amount);

        party.total_donations = 0;
        storage::save_party(&env, &party);

        events::emit_funds_withdrawn(&env, party_id, caller, amount);
        amount
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Return the admin address, or `None` before init.
    pub fn get_admin(env: Env) -> Option<Address> {
        access::get_admin(&env)
    }

    /// Return the funding-token address.
    pub fn get_funding_token(env: Env) -> Address {
        storage::funding_token(&env)
    }

    pub fn get_party(env: Env, party_id: u32) -> Party {
        storage::load_party(&env, party_id)
    }

    pub fn get_campaign(env: Env, campaign_id: u32) -> Campaign {
        storage::load_campaign(&env, campaign_id)
    }

    pub fn get_user(env: Env, address: Address) -> User {
        storage::load_user(&env, &address)
    }

    /// Direct donations made to a party, oldest first.
    pub fn get_party_donations(env: Env, party_id: u32) -> Vec<Donation> {
        // Existence check first so an unknown id fails with PartyNotFound
        // rather than an empty list.
        storage::load_party(&env, party_id);
        storage::party_donations(&env, party_id)
    }

    /// Funding records of a campaign, oldest first.
    pub fn get_campaign_donations(env: Env, campaign_id: u32) -> Vec<Donation> {
        storage::load_campaign(&env, campaign_id);
        storage::campaign_donations(&env, campaign_id)
    }

    /// Number of registered parties; also the highest assigned party id.
    pub fn party_count(env: Env) -> u32 {
        storage::party_count(&env)
    }

    /// Number of created campaigns; ids run from 0 to `count - 1`.
    pub fn campaign_count(env: Env) -> u32 {
        storage::campaign_count(&env)
    }

    /// Number of registered users.
    pub fn user_count(env: Env) -> u32 {
        storage::user_count(&env)
    }

    /// Address of the user registered at `index` (0-based registration
    /// order). Lets frontends enumerate users without an off-chain index.
    pub fn get_user_address(env: Env, index: u32) -> Address {
        storage::user_address_by_index(&env, index)
    }
}
