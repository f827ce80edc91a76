//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers used by the registry:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type      | Description                          |
//! |-----------------|-----------|--------------------------------------|
//! | `FundingToken`  | `Address` | SAC token all payments are made in   |
//! | `PartyCount`    | `u32`     | Number of registered parties         |
//! | `CampaignCount` | `u32`     | Number of created campaigns          |
//! | `UserCount`     | `u32`     | Number of registered users           |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day
//! remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                    | Type            | Description                 |
//! |------------------------|-----------------|-----------------------------|
//! | `Party(id)`            | `Party`         | Party record, 1-based ids   |
//! | `Campaign(id)`         | `Campaign`      | Campaign record, 0-based ids|
//! | `User(addr)`           | `User`          | User record per address     |
//! | `UserByIndex(i)`       | `Address`       | Enumeration index → address |
//! | `PartyDonations(id)`   | `Vec<Donation>` | Direct donations to a party |
//! | `CampaignDonations(id)`| `Vec<Donation>` | Funding records of a campaign |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining.
//!
//! ## ID assignment
//!
//! Party ids are 1-based (`next_party_id` increments, then assigns) while
//! campaign ids are 0-based (`next_campaign_id` assigns, then increments).
//! The asymmetry is part of the protocol's observable numbering and must
//! not be "fixed".

use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};

use crate::types::{Campaign, Donation, Party, User};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All registry storage keys.
///
/// Instance-tier keys (token, counters) live as long as the contract and
/// are extended together. Persistent-tier keys hold per-entity data with
/// independent TTLs. The admin identity lives in [`crate::access`].
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Token address all donations and withdrawals are denominated in (Instance).
    FundingToken,
    /// Count of registered parties; the highest assigned 1-based id (Instance).
    PartyCount,
    /// Count of created campaigns; the next 0-based id (Instance).
    CampaignCount,
    /// Count of registered users; the next enumeration index (Instance).
    UserCount,
    /// Party record keyed by 1-based id (Persistent).
    Party(u32),
    /// Campaign record keyed by 0-based id (Persistent).
    Campaign(u32),
    /// User record keyed by address (Persistent).
    User(Address),
    /// Registered user address keyed by 0-based registration index (Persistent).
    UserByIndex(u32),
    /// Direct donations made to a party (Persistent).
    PartyDonations(u32),
    /// Funding records of a campaign (Persistent).
    CampaignDonations(u32),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Store the funding-token address. Called once from `init`.
pub fn set_funding_token(env: &Env, token: &Address) {
    bump_instance(env);
    env.storage().instance().set(&DataKey::FundingToken, token);
}

/// Read the funding-token address, panicking before `init`.
pub fn funding_token(env: &Env) -> Address {
    bump_instance(env);
    match env.storage().instance().get(&DataKey::FundingToken) {
        Some(token) => token,
        None => panic_with_error!(env, Error::NotInitialized),
    }
}

fn counter(env: &Env, key: &DataKey) -> u32 {
    env.storage().instance().get(key).unwrap_or(0)
}

/// Number of registered parties.
pub fn party_count(env: &Env) -> u32 {
    bump_instance(env);
    counter(env, &DataKey::PartyCount)
}

/// Number of created campaigns.
pub fn campaign_count(env: &Env) -> u32 {
    bump_instance(env);
    counter(env, &DataKey::CampaignCount)
}

/// Number of registered users.
pub fn user_count(env: &Env) -> u32 {
    bump_instance(env);
    counter(env, &DataKey::UserCount)
}

/// Increment the party counter and return the new value, which is the
/// 1-based id of the party being registered.
pub fn next_party_id(env: &Env) -> u32 {
    bump_instance(env);
    let id = counter(env, &DataKey::PartyCount) + 1;
    env.storage().instance().set(&DataKey::PartyCount, &id);
    id
}

/// Return the current campaign counter as the 0-based id of the campaign
/// being created, then increment it.
pub fn next_campaign_id(env: &Env) -> u32 {
    bump_instance(env);
    let id = counter(env, &DataKey::CampaignCount);
    env.storage().instance().set(&DataKey::CampaignCount, &(id + 1));
    id
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Save (create or overwrite) a party record.
pub fn save_party(env: &Env, party: &Party) {
    let key = DataKey::Party(party.id);
    env.storage().persistent().set(&key, party);
    bump_persistent(env, &key);
}

/// Load a party by id, panicking with `PartyNotFound` if absent.
pub fn load_party(env: &Env, id: u32) -> Party {
    let key = DataKey::Party(id);
    match env.storage().persistent().get(&key) {
        Some(party) => {
            bump_persistent(env, &key);
            party
        }
        None => panic_with_error!(env, Error::PartyNotFound),
    }
}

/// Save (create or overwrite) a campaign record.
pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = DataKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    bump_persistent(env, &key);
}

/// Load a campaign by id, panicking with `CampaignNotFound` if absent.
pub fn load_campaign(env: &Env, id: u32) -> Campaign {
    let key = DataKey::Campaign(id);
    match env.storage().persistent().get(&key) {
        Some(campaign) => {
            bump_persistent(env, &key);
            campaign
        }
        None => panic_with_error!(env, Error::CampaignNotFound),
    }
}

/// Return true if `address` already has a user record.
pub fn has_user(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::User(address.clone()))
}

/// Save a user record and, on first registration, append the address to
/// the enumeration index.
pub fn save_new_user(env: &Env, address: &Address, user: &User) {
    let key = DataKey::User(address.clone());
    env.storage().persistent().set(&key, user);
    bump_persistent(env, &key);

    let index = user_count(env);
    let index_key = DataKey::UserByIndex(index);
    env.storage().persistent().set(&index_key, address);
    bump_persistent(env, &index_key);
    env.storage()
        .instance()
        .set(&DataKey::UserCount, &(index + 1));
}

/// Overwrite an existing user record.
pub fn save_user(env: &Env, address: &Address, user: &User) {
    let key = DataKey::User(address.clone());
    env.storage().persistent().set(&key, user);
    bump_persistent(env, &key);
}

/// Load a user by address, panicking with `UserNotFound` if absent.
pub fn load_user(env: &Env, address: &Address) -> User {
    let key = DataKey::User(address.clone());
    match env.storage().persistent().get(&key) {
        Some(user) => {
            bump_persistent(env, &key);
            user
        }
        None => panic_with_error!(env, Error::UserNotFound),
    }
}

/// Look up the address registered at enumeration `index`, panicking with
/// `UserNotFound` if the index was never assigned.
pub fn user_address_by_index(env: &Env, index: u32) -> Address {
    let key = DataKey::UserByIndex(index);
    match env.storage().persistent().get(&key) {
        Some(address) => {
            bump_persistent(env, &key);
            address
        }
        None => panic_with_error!(env, Error::UserNotFound),
    }
}

/// Read the direct-donation list of a party (empty before the first one).
pub fn party_donations(env: &Env, party_id: u32) -> Vec<Donation> {
    donations(env, &DataKey::PartyDonations(party_id))
}

/// Append a direct donation to a party's list.
pub fn push_party_donation(env: &Env, party_id: u32, donation: &Donation) {
    push_donation(env, &DataKey::PartyDonations(party_id), donation);
}

/// Read the funding-record list of a campaign (empty before the first one).
pub fn campaign_donations(env: &Env, campaign_id: u32) -> Vec<Donation> {
    donations(env, &DataKey::CampaignDonations(campaign_id))
}

/// Append a funding record to a campaign's list.
pub fn push_campaign_donation(env: &Env, campaign_id: u32, donation: &Donation) {
    push_donation(env, &DataKey::CampaignDonations(campaign_id), donation);
}

fn donations(env: &Env, key: &DataKey) -> Vec<Donation> {
    match env.storage().persistent().get(key) {
        Some(list) => {
            bump_persistent(env, key);
            list
        }
        None => Vec::new(env),
    }
}

fn push_donation(env: &Env, key: &DataKey, donation: &Donation) {
    let mut list = donations(env, key);
    list.push_back(donation.clone());
    env.storage().persistent().set(key, &list);
    bump_persistent(env, key);
}

// ── Accounting Helpers ───────────────────────────────────────────────

/// Checked i128 addition for donation accumulators. Panics with
/// `Error::Overflow` instead of wrapping.
pub fn checked_credit(env: &Env, balance: i128, amount: i128) -> i128 {
    match balance.checked_add(amount) {
        Some(new_balance) => new_balance,
        None => panic_with_error!(env, Error::Overflow),
    }
}
