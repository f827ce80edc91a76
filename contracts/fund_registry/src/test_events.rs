extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{
    CampaignCreated, CampaignFunded, DonationMade, FundsWithdrawn, KycVerified, PartyRegistered,
    PartyStatusToggled, UserRegistered,
};
use crate::{FundRegistry, FundRegistryClient, UserRole};

const UNIT: i128 = 1_000_000_000_000_000_000;

fn setup<'a>() -> (
    Env,
    FundRegistryClient<'static>,
    Address,
    token::StellarAssetClient<'a>,
) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(FundRegistry, ());
    let client = FundRegistryClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(token_admin);
    let sac_client = token::StellarAssetClient::new(&env, &sac.address());

    client.init(&admin, &sac.address());
    (env, client, admin, sac_client)
}

fn register_party(env: &Env, client: &FundRegistryClient, admin: &Address, leader: &Address) -> u32 {
    client
        .register_party(
            admin,
            &String::from_str(env, "Party"),
            &String::from_str(env, "Leader"),
            &String::from_str(env, "REG-1"),
            leader,
        )
        .id
}

fn register_verified(env: &Env, client: &FundRegistryClient, admin: &Address, user: &Address) {
    client.register_user(user, &String::from_str(env, "Someone"), &UserRole::Donor);
    client.verify_kyc(admin, user);
}

#[test]
fn test_party_registered_event() {
    let (env, client, admin, _) = setup();
    let leader = Address::generate(&env);

    let party_id = register_party(&env, &client, &admin, &leader);

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("pty_reg").into_val(&env),
        party_id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: PartyRegistered = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        PartyRegistered {
            party_id,
            leader: leader.clone(),
            admin: admin.clone(),
        }
    );
}

#[test]
fn test_party_status_toggled_event() {
    let (env, client, admin, _) = setup();
    let leader = Address::generate(&env);
    let party_id = register_party(&env, &client, &admin, &leader);

    client.toggle_party_status(&admin, &party_id);

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("pty_tgl").into_val(&env),
        party_id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: PartyStatusToggled = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        PartyStatusToggled {
            party_id,
            is_active: false,
        }
    );
}

#[test]
fn test_user_registered_event() {
    let (env, client, _admin, _) = setup();
    let user = Address::generate(&env);

    client.register_user(&user, &String::from_str(&env, "Someone"), &UserRole::Donor);

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("usr_reg").into_val(&env),
        user.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: UserRegistered = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        UserRegistered {
            user: user.clone(),
            role: UserRole::Donor,
        }
    );
}

#[test]
fn test_kyc_verified_event() {
    let (env, client, admin, _) = setup();
    let user = Address::generate(&env);
    client.register_user(&user, &String::from_str(&env, "Someone"), &UserRole::Donor);

    client.verify_kyc(&admin, &user);

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("kyc_ok").into_val(&env),
        user.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: KycVerified = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        KycVerified {
            user: user.clone(),
            admin: admin.clone(),
        }
    );
}

#[test]
fn test_donation_made_event() {
    let (env, client, admin, sac) = setup();
    let leader = Address::generate(&env);
    let donor = Address::generate(&env);
    let party_id = register_party(&env, &client, &admin, &leader);
    register_verified(&env, &client, &admin, &donor);
    sac.mint(&donor, &UNIT);

    client.make_donation(&donor, &party_id, &String::from_str(&env, "hello"), &UNIT);

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("donated").into_val(&env),
        party_id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: DonationMade = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        DonationMade {
            party_id,
            donor: donor.clone(),
            amount: UNIT,
        }
    );
}

#[test]
fn test_campaign_created_event() {
    let (env, client, admin, _) = setup();
    let leader = Address::generate(&env);
    let creator = Address::generate(&env);
    let party_id = register_party(&env, &client, &admin, &leader);
    register_verified(&env, &client, &admin, &creator);

    let goal = 10 * UNIT;
    let campaign = client.create_campaign(
        &creator,
        &String::from_str(&env, "Campaign"),
        &String::from_str(&env, "Desc"),
        &goal,
        &30,
        &party_id,
    );

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("cmp_new").into_val(&env),
        campaign.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignCreated {
            campaign_id: campaign.id,
            party_id,
            creator: creator.clone(),
            goal,
        }
    );
}

#[test]
fn test_campaign_funded_event_reports_goal_crossing() {
    let (env, client, admin, sac) = setup();
    let leader = Address::generate(&env);
    let creator = Address::generate(&env);
    let donor = Address::generate(&env);
    let party_id = register_party(&env, &client, &admin, &leader);
    register_verified(&env, &client, &admin, &creator);
    register_verified(&env, &client, &admin, &donor);

    let goal = 10 * UNIT;
    let campaign = client.create_campaign(
        &creator,
        &String::from_str(&env, "Campaign"),
        &String::from_str(&env, "Desc"),
        &goal,
        &30,
        &party_id,
    );
    sac.mint(&donor, &goal);

    client.fund_campaign(&donor, &campaign.id, &(goal / 2));
    let partial: CampaignFunded = env
        .events()
        .all()
        .last()
        .expect("No events found")
        .2
        .try_into_val(&env)
        .unwrap();
    assert!(!partial.goal_reached);

    client.fund_campaign(&donor, &campaign.id, &(goal / 2));
    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("cmp_fund").into_val(&env),
        campaign.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let crossing: CampaignFunded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        crossing,
        CampaignFunded {
            campaign_id: campaign.id,
            donor: donor.clone(),
            amount: goal / 2,
            goal_reached: true,
        }
    );
}

#[test]
fn test_funds_withdrawn_event() {
    let (env, client, admin, sac) = setup();
    let leader = Address::generate(&env);
    let donor = Address::generate(&env);
    let party_id = register_party(&env, &client, &admin, &leader);
    register_verified(&env, &client, &admin, &donor);
    sac.mint(&donor, &UNIT);
    client.make_donation(&donor, &party_id, &String::from_str(&env, "hi"), &UNIT);

    client.withdraw_funds(&leader, &party_id);

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("withdraw").into_val(&env),
        party_id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundsWithdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FundsWithdrawn {
            party_id,
            leader: leader.clone(),
            amount: UNIT,
        }
    );
}
