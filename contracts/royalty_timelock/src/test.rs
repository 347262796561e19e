#![cfg(test)]

use crate::{CallPayload, Error, RoyaltyTimelock, RoyaltyTimelockClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{
    contract, contracterror, contractimpl, symbol_short, vec, Address, Env, IntoVal, Symbol, Vec,
};

const DELAY: u64 = 48 * 60 * 60;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TargetError {
    Refused = 1,
}

#[contract]
pub struct SettingsTarget;

#[contractimpl]
impl SettingsTarget {
    pub fn set_bips(env: Env, bips: u32) {
        env.storage().instance().set(&symbol_short!("bips"), &bips);
    }

    pub fn bips(env: Env) -> Option<u32> {
        env.storage().instance().get(&symbol_short!("bips"))
    }

    pub fn refuse(_env: Env) -> Result<(), TargetError> {
        Err(TargetError::Refused)
    }
}

struct Fixture<'a> {
    admin: Address,
    proposer: Address,
    executor: Address,
    timelock: RoyaltyTimelockClient<'a>,
    target: Address,
    target_client: SettingsTargetClient<'a>,
}

fn setup(env: &Env) -> Fixture<'_> {
    env.mock_all_auths();
    let admin = Address::generate(env);
    let proposer = Address::generate(env);
    let executor = Address::generate(env);

    let id = env.register(RoyaltyTimelock, ());
    let timelock = RoyaltyTimelockClient::new(env, &id);
    timelock.initialize(
        &admin,
        &DELAY,
        &vec![env, proposer.clone()],
        &vec![env, executor.clone()],
    );

    let target = env.register(SettingsTarget, ());
    let target_client = SettingsTargetClient::new(env, &target);

    Fixture {
        admin,
        proposer,
        executor,
        timelock,
        target,
        target_client,
    }
}

fn set_bips_payload(env: &Env, bips: u32) -> CallPayload {
    CallPayload {
        function: Symbol::new(env, "set_bips"),
        args: vec![env, bips.into_val(env)],
    }
}

fn advance_time(env: &Env, by: u64) {
    env.ledger().with_mut(|info| info.timestamp += by);
}

#[test]
fn test_initialize_seeds_roles() {
    let env = Env::default();
    let f = setup(&env);

    assert!(f
        .timelock
        .has_role(&Symbol::new(&env, "TIMELOCK_ADMIN"), &f.admin));
    assert!(f.timelock.has_role(&Symbol::new(&env, "PROPOSER"), &f.proposer));
    assert!(f.timelock.has_role(&Symbol::new(&env, "EXECUTOR"), &f.executor));
    assert!(!f.timelock.has_role(&Symbol::new(&env, "EXECUTOR"), &f.proposer));
    assert_eq!(f.timelock.get_delay(), DELAY);
    assert_eq!(f.timelock.get_operation_count(), 0);

    assert_eq!(
        f.timelock.try_initialize(
            &f.admin,
            &DELAY,
            &Vec::new(&env),
            &Vec::new(&env)
        ),
        Err(Ok(Error::AlreadyInitialized))
    );
}

#[test]
fn test_delayed_execution_lands_exactly_once() {
    let env = Env::default();
    let f = setup(&env);

    let id = f
        .timelock
        .propose(&f.proposer, &f.target, &set_bips_payload(&env, 1500));
    assert_eq!(id, 0);
    let op = f.timelock.get_operation(&id);
    assert_eq!(op.ready_timestamp, env.ledger().timestamp() + DELAY);
    assert!(!op.executed);
    assert!(!f.timelock.is_ready(&id));

    // Too early, even one second short.
    assert_eq!(
        f.timelock.try_execute(&f.executor, &id),
        Err(Ok(Error::NotReady))
    );
    advance_time(&env, DELAY - 1);
    assert_eq!(
        f.timelock.try_execute(&f.executor, &id),
        Err(Ok(Error::NotReady))
    );
    assert_eq!(f.target_client.bips(), None);

    advance_time(&env, 1);
    assert!(f.timelock.is_ready(&id));
    f.timelock.execute(&f.executor, &id);
    assert_eq!(f.target_client.bips(), Some(1500));
    assert!(f.timelock.get_operation(&id).executed);
    assert!(!f.timelock.is_ready(&id));

    assert_eq!(
        f.timelock.try_execute(&f.executor, &id),
        Err(Ok(Error::AlreadyExecuted))
    );
}

#[test]
fn test_operations_never_expire() {
    let env = Env::default();
    let f = setup(&env);

    let id = f
        .timelock
        .propose(&f.proposer, &f.target, &set_bips_payload(&env, 250));
    // A year later it is still executable.
    advance_time(&env, 365 * 24 * 60 * 60);
    f.timelock.execute(&f.executor, &id);
    assert_eq!(f.target_client.bips(), Some(250));
}

#[test]
fn test_role_gates() {
    let env = Env::default();
    let f = setup(&env);
    let stranger = Address::generate(&env);

    assert_eq!(
        f.timelock
            .try_propose(&stranger, &f.target, &set_bips_payload(&env, 1)),
        Err(Ok(Error::Unauthorized))
    );
    // Executors cannot propose, proposers cannot execute.
    assert_eq!(
        f.timelock
            .try_propose(&f.executor, &f.target, &set_bips_payload(&env, 1)),
        Err(Ok(Error::Unauthorized))
    );
    let id = f
        .timelock
        .propose(&f.proposer, &f.target, &set_bips_payload(&env, 1));
    advance_time(&env, DELAY);
    assert_eq!(
        f.timelock.try_execute(&f.proposer, &id),
        Err(Ok(Error::Unauthorized))
    );

    assert_eq!(
        f.timelock.try_execute(&f.executor, &404),
        Err(Ok(Error::NotFound))
    );
}

#[test]
fn test_failed_inner_call_reverts() {
    let env = Env::default();
    let f = setup(&env);

    let refuse = CallPayload {
        function: Symbol::new(&env, "refuse"),
        args: Vec::new(&env),
    };
    let id = f.timelock.propose(&f.proposer, &f.target, &refuse);
    advance_time(&env, DELAY);

    assert_eq!(
        f.timelock.try_execute(&f.executor, &id),
        Err(Ok(Error::CallFailed))
    );
    // The operation is untouched and stays ready.
    assert!(!f.timelock.get_operation(&id).executed);
    assert!(f.timelock.is_ready(&id));
}

#[test]
fn test_admin_manages_membership_and_delay() {
    let env = Env::default();
    let f = setup(&env);
    let newcomer = Address::generate(&env);
    let executor_role = Symbol::new(&env, "EXECUTOR");

    f.timelock.grant_role(&f.admin, &executor_role, &newcomer);
    assert!(f.timelock.has_role(&executor_role, &newcomer));
    // Idempotent both ways.
    f.timelock.grant_role(&f.admin, &executor_role, &newcomer);
    f.timelock.revoke_role(&f.admin, &executor_role, &newcomer);
    f.timelock.revoke_role(&f.admin, &executor_role, &newcomer);
    assert!(!f.timelock.has_role(&executor_role, &newcomer));

    assert_eq!(
        f.timelock
            .try_grant_role(&f.proposer, &executor_role, &newcomer),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(
        f.timelock
            .try_revoke_role(&f.proposer, &executor_role, &f.executor),
        Err(Ok(Error::Unauthorized))
    );

    f.timelock.set_delay(&f.admin, &60);
    assert_eq!(f.timelock.get_delay(), 60);
    assert_eq!(
        f.timelock.try_set_delay(&f.proposer, &DELAY),
        Err(Ok(Error::Unauthorized))
    );

    // The new delay applies to subsequent proposals only.
    let id = f
        .timelock
        .propose(&f.proposer, &f.target, &set_bips_payload(&env, 9));
    advance_time(&env, 60);
    f.timelock.execute(&f.executor, &id);
    assert_eq!(f.target_client.bips(), Some(9));
}

#[test]
fn test_revoked_executor_cannot_execute() {
    let env = Env::default();
    let f = setup(&env);

    let id = f
        .timelock
        .propose(&f.proposer, &f.target, &set_bips_payload(&env, 5));
    advance_time(&env, DELAY);

    f.timelock
        .revoke_role(&f.admin, &Symbol::new(&env, "EXECUTOR"), &f.executor);
    assert_eq!(
        f.timelock.try_execute(&f.executor, &id),
        Err(Ok(Error::Unauthorized))
    );
}
