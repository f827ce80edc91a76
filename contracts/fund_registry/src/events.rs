//! Event structs and emission helpers, one per successful mutation.
//!
//! Topics are `(symbol, entity_id)` pairs so indexers can filter by entity
//! without decoding payloads; the payload is the full event struct.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::UserRole;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartyRegistered {
    pub party_id: u32,
    pub leader: Address,
    pub admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartyStatusToggled {
    pub party_id: u32,
    pub is_active: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserRegistered {
    pub user: Address,
    pub role: UserRole,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KycVerified {
    pub user: Address,
    pub admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationMade {
    pub party_id: u32,
    pub donor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: u32,
    pub party_id: u32,
    pub creator: Address,
    pub goal: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignFunded {
    pub campaign_id: u32,
    pub donor: Address,
    pub amount: i128,
    /// True on the call that crossed the goal and closed the campaign.
    pub goal_reached: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub party_id: u32,
    pub leader: Address,
    pub amount: i128,
}

pub fn emit_party_registered(env: &Env, party_id: u32, leader: Address, admin: Address) {
    let topics = (symbol_short!("pty_reg"), party_id);
    let data = PartyRegistered {
        party_id,
        leader,
        admin,
    };
    env.events().publish(topics, data);
}

pub fn emit_party_status_toggled(env: &Env, party_id: u32, is_active: bool) {
    let topics = (symbol_short!("pty_tgl"), party_id);
    let data = PartyStatusToggled {
        party_id,
        is_active,
    };
    env.events().publish(topics, data);
}

pub fn emit_user_registered(env: &Env, user: Address, role: UserRole) {
    let topics = (symbol_short!("usr_reg"), user.clone());
    let data = UserRegistered { user, role };
    env.events().publish(topics, data);
}

pub fn emit_kyc_verified(env: &Env, user: Address, admin: Address) {
    let topics = (symbol_short!("kyc_ok"), user.clone());
    let data = KycVerified { user, admin };
    env.events().publish(topics, data);
}

pub fn emit_donation_made(env: &Env, party_id: u32, donor: Address, amount: i128) {
    let topics = (symbol_short!("donated"), party_id);
    let data = DonationMade {
        party_id,
        donor,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_campaign_created(env: &Env, campaign_id: u32, party_id: u32, creator: Address, goal: i128) {
    let topics = (symbol_short!("cmp_new"), campaign_id);
    let data = CampaignCreated {
        campaign_id,
        party_id,
        creator,
        goal,
    };
    env.events().publish(topics, data);
}

pub fn emit_campaign_funded(env: &Env, campaign_id: u32, donor: Address, amount: i128, goal_reached: bool) {
    let topics = (symbol_short!("cmp_fund"), campaign_id);
    let data = CampaignFunded {
        campaign_id,
        donor,
        amount,
        goal_reached,
    };
    env.events().publish(topics, data);
}

pub fn emit_funds_withdrawn(env: &Env, party_id: u32, leader: Address, amount: i128) {
    let topics = (symbol_short!("withdraw"), party_id);
    let data = FundsWithdrawn {
        party_id,
        leader,
        amount,
    };
    env.events().publish(topics, data);
}
