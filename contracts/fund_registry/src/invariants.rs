#![allow(dead_code)]

extern crate std;

use crate::types::{Campaign, CampaignStatus, KycStatus, Party};

/// INV-1: A party's accumulated balance must never be negative.
pub fn assert_party_balance_non_negative(party: &Party) {
    assert!(
        party.total_donations >= 0,
        "INV-1 violated: party {} has negative balance ({})",
        party.id,
        party.total_donations
    );
}

/// INV-2: A campaign's goal must always be positive and its raised total
/// non-negative.
pub fn assert_campaign_amounts_valid(campaign: &Campaign) {
    assert!(
        campaign.goal > 0,
        "INV-2 violated: campaign {} has non-positive goal ({})",
        campaign.id,
        campaign.goal
    );
    assert!(
        campaign.raised >= 0,
        "INV-2 violated: campaign {} has negative raised total ({})",
        campaign.id,
        campaign.raised
    );
}

/// INV-3: A campaign is `Funded` if and only if its raised total reached
/// the goal. Active campaigns are strictly below goal because the crossing
/// call closes them.
pub fn assert_funded_iff_goal_reached(campaign: &Campaign) {
    match campaign.status {
        CampaignStatus::Funded => assert!(
            campaign.raised >= campaign.goal,
            "INV-3 violated: campaign {} is Funded below goal ({} < {})",
            campaign.id,
            campaign.raised,
            campaign.goal
        ),
        CampaignStatus::Active => assert!(
            campaign.raised < campaign.goal,
            "INV-3 violated: campaign {} is Active at or above goal ({} >= {})",
            campaign.id,
            campaign.raised,
            campaign.goal
        ),
    }
}

/// INV-4: Credit invariant — after crediting `amount`, an accumulator must
/// grow by exactly `amount`.
pub fn assert_credit_invariant(before: i128, after: i128, amount: i128) {
    assert_eq!(
        after,
        before + amount,
        "INV-4 violated: credit invariant broken: {} + {} != {}",
        before,
        amount,
        after
    );
}

/// INV-5: Campaign status only moves forward: `Active -> Funded`.
pub fn assert_valid_campaign_transition(from: &CampaignStatus, to: &CampaignStatus) {
    let valid = from == to || matches!((from, to), (CampaignStatus::Active, CampaignStatus::Funded));
    assert!(
        valid,
        "INV-5 violated: invalid campaign transition from {:?} to {:?}",
        from, to
    );
}

/// INV-6: KYC status only moves forward: `Pending -> Verified`.
pub fn assert_valid_kyc_transition(from: &KycStatus, to: &KycStatus) {
    let valid = from == to || matches!((from, to), (KycStatus::Pending, KycStatus::Verified));
    assert!(
        valid,
        "INV-6 violated: invalid KYC transition from {:?} to {:?}",
        from, to
    );
}

/// INV-7: Party ids are sequential starting from 1.
pub fn assert_sequential_party_ids(parties: &[Party]) {
    for (i, party) in parties.iter().enumerate() {
        assert_eq!(
            party.id,
            i as u32 + 1,
            "INV-7 violated: expected party id {}, got {}",
            i + 1,
            party.id
        );
    }
}

/// INV-8: Campaign ids are sequential starting from 0.
pub fn assert_sequential_campaign_ids(campaigns: &[Campaign]) {
    for (i, campaign) in campaigns.iter().enumerate() {
        assert_eq!(
            campaign.id, i as u32,
            "INV-8 violated: expected campaign id {}, got {}",
            i, campaign.id
        );
    }
}

/// INV-9: Immutable party fields (id, leader, registration data) must not
/// change across mutations.
pub fn assert_party_immutable_fields(original: &Party, current: &Party) {
    assert_eq!(original.id, current.id, "INV-9 violated: party id changed");
    assert_eq!(
        original.name, current.name,
        "INV-9 violated: party name changed"
    );
    assert_eq!(
        original.leader_name, current.leader_name,
        "INV-9 violated: party leader_name changed"
    );
    assert_eq!(
        original.registration_number, current.registration_number,
        "INV-9 violated: party registration_number changed"
    );
    assert_eq!(
        original.leader, current.leader,
        "INV-9 violated: party leader changed"
    );
}

/// Run all stateless campaign invariants.
pub fn assert_all_campaign_invariants(campaign: &Campaign) {
    assert_campaign_amounts_valid(campaign);
    assert_funded_iff_goal_reached(campaign);
}
