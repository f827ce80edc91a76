//! # Access control
//!
//! Gates every privileged operation of the registry. There are exactly
//! three kinds of authority, none of them hierarchical:
//!
//! | Authority      | Held by                          | Gates |
//! |----------------|----------------------------------|-------|
//! | Admin          | the single address set at `init` | `register_party`, `toggle_party_status`, `verify_kyc` |
//! | Party leader   | `Party.leader`, per party        | `withdraw_funds` |
//! | Verified user  | any KYC-verified registered user | `make_donation`, `create_campaign`, `fund_campaign` |
//!
//! ## Storage layout
//!
//! - `AccessKey::Admin` → `Address` — the one and only admin, written once.
//!
//! There is no admin rotation: the protocol has no transfer-of-ownership
//! operation, so the address set at `init` is final.
//!
//! Every guard panics with a specific [`Error`] kind before any state is
//! written, so a failed authorization never leaves partial effects.

use soroban_sdk::{contracttype, panic_with_error, symbol_short, Address, Env};

use crate::storage::load_user;
use crate::types::{Party, User};
use crate::Error;

// ─────────────────────────────────────────────────────────
// Storage keys
// ─────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AccessKey {
    /// The one and only admin address.
    Admin,
}

// ─────────────────────────────────────────────────────────
// Initialisation
// ─────────────────────────────────────────────────────────

/// Set the admin identity. Must be called exactly once (during contract
/// initialisation). Panics with `Error::AlreadyInitialized` if called again.
///
/// Emits an `adm_set` event so indexers can pick up the privileged identity.
pub fn init_admin(env: &Env, admin: &Address) {
    if env.storage().instance().has(&AccessKey::Admin) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
    env.storage().instance().set(&AccessKey::Admin, admin);
    env.events()
        .publish((symbol_short!("adm_set"),), admin.clone());
}

/// Read the admin address, returning `None` before init.
pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&AccessKey::Admin)
}

// ─────────────────────────────────────────────────────────
// Guards (called from lib.rs handlers)
// ─────────────────────────────────────────────────────────

/// Assert that `caller` is the admin.
///
/// Panics with `Error::NotAuthorized` for any other address and with
/// `Error::NotInitialized` before `init`.
pub fn require_admin(env: &Env, caller: &Address) {
    match get_admin(env) {
        Some(ref admin) if admin == caller => {}
        Some(_) => panic_with_error!(env, Error::NotAuthorized),
        None => panic_with_error!(env, Error::NotInitialized),
    }
}

/// Assert that `address` has a user record and is KYC-verified, returning
/// the record.
///
/// Panics with `Error::UserNotFound` if unregistered and
/// `Error::UserNotVerified` if registered but not yet attested.
pub fn require_verified_user(env: &Env, address: &Address) -> User {
    let user = load_user(env, address);
    if !user.is_verified() {
        panic_with_error!(env, Error::UserNotVerified);
    }
    user
}

/// Assert that `caller` is the leader of `party`.
/// Panics with `Error::NotAuthorized` on failure.
pub fn require_party_leader(env: &Env, party: &Party, caller: &Address) {
    if &party.leader != caller {
        panic_with_error!(env, Error::NotAuthorized);
    }
}
