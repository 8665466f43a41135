//! Shared fixtures for the scenario tests: account names, contract paths and
//! deploy helpers for the registries and the collaborator mocks.

use multiversx_sc_scenario::imports::*;

use complaint_registry::complaint_registry_proxy::ComplaintRegistryProxy;
use deposit_custody_mock::deposit_custody_mock_proxy::DepositCustodyMockProxy;
use shared_types::{Complaint, Fingerprint, Sla, FINGERPRINT_LEN};
use sla_registry::sla_registry_proxy::SlaRegistryProxy;
use sla_source_mock::sla_source_mock_proxy::SlaSourceMockProxy;

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const PROVIDER: TestAddress = TestAddress::new("provider");
pub const CUSTOMER: TestAddress = TestAddress::new("customer");
pub const OUTSIDER: TestAddress = TestAddress::new("outsider");

pub const SLA_REGISTRY: TestSCAddress = TestSCAddress::new("sla-registry");
pub const COMPLAINT_REGISTRY: TestSCAddress = TestSCAddress::new("complaint-registry");
pub const DEPOSIT_CUSTODY: TestSCAddress = TestSCAddress::new("deposit-custody");
pub const SLA_SOURCE: TestSCAddress = TestSCAddress::new("sla-source");

pub const SLA_REGISTRY_CODE: MxscPath = MxscPath::new("../sla-registry/output/sla-registry.mxsc.json");
pub const COMPLAINT_REGISTRY_CODE: MxscPath =
    MxscPath::new("../complaint-registry/output/complaint-registry.mxsc.json");
pub const DEPOSIT_CUSTODY_CODE: MxscPath =
    MxscPath::new("../test-mocks/deposit-custody-mock/output/deposit-custody-mock.mxsc.json");
pub const SLA_SOURCE_CODE: MxscPath =
    MxscPath::new("../test-mocks/sla-source-mock/output/sla-source-mock.mxsc.json");

pub const START_TS: u64 = 10_000;
pub const RESOLUTION_WINDOW: u64 = 1_440;
pub const PENALTY_RATE: u64 = 10;
pub const MAX_PENALTIES: u64 = 3;
pub const DEPOSIT: u64 = 1_000;

pub fn world() -> ScenarioWorld {
    let mut world = ScenarioWorld::new();
    world.register_contract(SLA_REGISTRY_CODE, sla_registry::ContractBuilder);
    world.register_contract(COMPLAINT_REGISTRY_CODE, complaint_registry::ContractBuilder);
    world.register_contract(DEPOSIT_CUSTODY_CODE, deposit_custody_mock::ContractBuilder);
    world.register_contract(SLA_SOURCE_CODE, sla_source_mock::ContractBuilder);

    world.account(OWNER).nonce(1);
    world.account(PROVIDER).nonce(1);
    world.account(CUSTOMER).nonce(1);
    world.account(OUTSIDER).nonce(1);
    world.current_block().block_timestamp(START_TS);
    world
}

pub fn buf(value: &str) -> ManagedBuffer<StaticApi> {
    ManagedBuffer::from(value)
}

pub fn big(value: u64) -> BigUint<StaticApi> {
    BigUint::from(value)
}

pub fn fingerprint(fill: u8) -> Fingerprint<StaticApi> {
    ManagedByteArray::new_from_bytes(&[fill; FINGERPRINT_LEN])
}

pub fn address(account: TestAddress) -> ManagedAddress<StaticApi> {
    account.to_managed_address()
}

pub fn sc_address(contract: TestSCAddress) -> ManagedAddress<StaticApi> {
    contract.to_managed_address()
}

pub fn set_timestamp(world: &mut ScenarioWorld, timestamp: u64) {
    world.current_block().block_timestamp(timestamp);
}

pub fn deploy_sla_registry(world: &mut ScenarioWorld) {
    world
        .tx()
        .from(OWNER)
        .typed(SlaRegistryProxy)
        .init()
        .code(SLA_REGISTRY_CODE)
        .new_address(SLA_REGISTRY)
        .run();
}

pub fn deploy_deposit_custody(world: &mut ScenarioWorld) {
    world
        .tx()
        .from(OWNER)
        .typed(DepositCustodyMockProxy)
        .init()
        .code(DEPOSIT_CUSTODY_CODE)
        .new_address(DEPOSIT_CUSTODY)
        .run();
}

pub fn deploy_sla_source(world: &mut ScenarioWorld) {
    world
        .tx()
        .from(OWNER)
        .typed(SlaSourceMockProxy)
        .init()
        .code(SLA_SOURCE_CODE)
        .new_address(SLA_SOURCE)
        .run();
}

/// Deploys the complaint registry reading SLAs from `sla_source`.
pub fn deploy_complaint_registry(world: &mut ScenarioWorld, sla_source: TestSCAddress) {
    world
        .tx()
        .from(OWNER)
        .typed(ComplaintRegistryProxy)
        .init(sc_address(sla_source), sc_address(DEPOSIT_CUSTODY))
        .code(COMPLAINT_REGISTRY_CODE)
        .new_address(COMPLAINT_REGISTRY)
        .run();
}

pub fn fund_deposit(world: &mut ScenarioWorld, account: TestAddress, amount: u64) {
    world
        .tx()
        .from(OWNER)
        .to(DEPOSIT_CUSTODY)
        .typed(DepositCustodyMockProxy)
        .set_available(address(account), big(amount))
        .run();
}

pub fn create_default_sla(world: &mut ScenarioWorld, sla_id: &str) {
    world
        .tx()
        .from(PROVIDER)
        .to(SLA_REGISTRY)
        .typed(SlaRegistryProxy)
        .create_sla(
            buf(sla_id),
            address(PROVIDER),
            address(CUSTOMER),
            RESOLUTION_WINDOW,
            PENALTY_RATE,
            MAX_PENALTIES,
            big(DEPOSIT),
            fingerprint(0xAA),
            buf("99.9% uptime, 24h response"),
        )
        .run();
}

pub fn query_sla(world: &mut ScenarioWorld, sla_id: &str) -> Option<Sla<StaticApi>> {
    let result = world
        .query()
        .to(SLA_REGISTRY)
        .typed(SlaRegistryProxy)
        .get_sla(buf(sla_id))
        .returns(ReturnsResult)
        .run();
    result.into_option()
}

pub fn query_complaint(
    world: &mut ScenarioWorld,
    complaint_id: &str,
    sla_id: &str,
) -> Option<Complaint<StaticApi>> {
    let result = world
        .query()
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .get_complaint(buf(complaint_id), buf(sla_id))
        .returns(ReturnsResult)
        .run();
    result.into_option()
}

pub fn query_locked(world: &mut ScenarioWorld, account: TestAddress) -> BigUint<StaticApi> {
    world
        .query()
        .to(DEPOSIT_CUSTODY)
        .typed(DepositCustodyMockProxy)
        .get_locked(address(account))
        .returns(ReturnsResult)
        .run()
}
