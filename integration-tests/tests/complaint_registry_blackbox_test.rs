use multiversx_sc_scenario::imports::*;

use complaint_registry::complaint_registry_proxy::ComplaintRegistryProxy;
use integration_tests::*;
use shared_types::{AmendmentTerms, ComplaintStatus, StatusRecord, MAX_PAGE_SIZE};
use sla_registry::sla_registry_proxy::SlaRegistryProxy;
use sla_source_mock::sla_source_mock_proxy::SlaSourceMockProxy;

fn setup() -> ScenarioWorld {
    let mut world = world();
    deploy_sla_registry(&mut world);
    deploy_deposit_custody(&mut world);
    deploy_complaint_registry(&mut world, SLA_REGISTRY);
    create_default_sla(&mut world, "s1");
    fund_deposit(&mut world, CUSTOMER, DEPOSIT);
    world
}

fn file(world: &mut ScenarioWorld, from: TestAddress, complaint_id: &str) {
    world
        .tx()
        .from(from)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .file_complaint(buf(complaint_id), buf("s1"), buf("api down for 3h"), fingerprint(0x01))
        .run();
}

fn update(
    world: &mut ScenarioWorld,
    from: TestAddress,
    requested: ComplaintStatus,
) -> ComplaintStatus {
    world
        .tx()
        .from(from)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .update_status(buf("c1"), buf("s1"), requested, buf("looking into it"))
        .returns(ReturnsResult)
        .run()
}

fn history(world: &mut ScenarioWorld) -> Vec<StatusRecord<StaticApi>> {
    world
        .query()
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .get_status_history(buf("c1"), buf("s1"), 0u64, 100u64)
        .returns(ReturnsResult)
        .run()
        .into_iter()
        .collect()
}

#[test]
fn filing_locks_deposit_and_fixes_deadline() {
    let mut world = setup();
    file(&mut world, CUSTOMER, "c1");

    let complaint = query_complaint(&mut world, "c1", "s1").expect("complaint stored");
    assert!(complaint.filer == address(CUSTOMER));
    assert_eq!(complaint.status, ComplaintStatus::Filed);
    assert_eq!(complaint.filed_at, START_TS);
    assert_eq!(complaint.resolution_deadline, START_TS + RESOLUTION_WINDOW);
    assert!(complaint.deposit == big(DEPOSIT));
    assert!(complaint.evidence_hash == fingerprint(0x01));
    assert!(query_locked(&mut world, CUSTOMER) == big(DEPOSIT));

    let records = history(&mut world);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].previous_status, None);
    assert_eq!(records[0].new_status, ComplaintStatus::Filed);
    assert!(records[0].updated_by == address(CUSTOMER));

    world
        .tx()
        .from(CUSTOMER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .file_complaint(buf("c1"), buf("s1"), buf("again"), fingerprint(0x02))
        .returns(ExpectError(4, "ERR_ALREADY_EXISTS"))
        .run();
}

#[test]
fn update_before_deadline_keeps_requested_status() {
    let mut world = setup();
    file(&mut world, CUSTOMER, "c1");

    set_timestamp(&mut world, START_TS + 100);
    assert_eq!(
        update(&mut world, PROVIDER, ComplaintStatus::InProgress),
        ComplaintStatus::InProgress
    );

    // The deadline instant itself still counts as on time.
    set_timestamp(&mut world, START_TS + RESOLUTION_WINDOW);
    assert_eq!(
        update(&mut world, PROVIDER, ComplaintStatus::InProgress),
        ComplaintStatus::InProgress
    );

    let complaint = query_complaint(&mut world, "c1", "s1").expect("complaint stored");
    assert_eq!(complaint.status, ComplaintStatus::InProgress);
    assert_eq!(complaint.updated_at, START_TS + RESOLUTION_WINDOW);
}

#[test]
fn update_after_deadline_escalates() {
    let mut world = setup();
    file(&mut world, CUSTOMER, "c1");

    set_timestamp(&mut world, START_TS + 100);
    update(&mut world, PROVIDER, ComplaintStatus::InProgress);

    set_timestamp(&mut world, START_TS + RESOLUTION_WINDOW + 1);
    assert_eq!(
        update(&mut world, PROVIDER, ComplaintStatus::Resolved),
        ComplaintStatus::Escalated
    );

    let complaint = query_complaint(&mut world, "c1", "s1").expect("complaint stored");
    assert_eq!(complaint.status, ComplaintStatus::Escalated);

    let records = history(&mut world);
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].previous_status, Some(ComplaintStatus::InProgress));
    assert_eq!(records[2].new_status, ComplaintStatus::Escalated);
    assert!(records[2].updated_by == address(PROVIDER));

    // An escalated complaint cannot be closed.
    world
        .tx()
        .from(PROVIDER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .close_complaint(buf("c1"), buf("s1"))
        .returns(ExpectError(4, "ERR_INVALID_STATUS"))
        .run();

    let stats = world
        .query()
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .get_complaint_stats()
        .returns(ReturnsResult)
        .run();
    assert_eq!(stats.total_filed, 1);
    assert_eq!(stats.open_complaints, 1);
    assert_eq!(stats.escalated, 1);
    assert_eq!(stats.closed, 0);
}

#[test]
fn deadline_survives_window_amendment() {
    let mut world = setup();
    file(&mut world, CUSTOMER, "c1");

    world
        .tx()
        .from(PROVIDER)
        .to(SLA_REGISTRY)
        .typed(SlaRegistryProxy)
        .propose_amendment(
            buf("s1"),
            buf("a1"),
            AmendmentTerms {
                resolution_window: Some(10_000),
                penalty_rate: None,
                max_penalties: None,
                deposit_required: None,
            },
            buf("longer window"),
        )
        .run();
    world
        .tx()
        .from(CUSTOMER)
        .to(SLA_REGISTRY)
        .typed(SlaRegistryProxy)
        .approve_amendment(buf("s1"), buf("a1"))
        .run();

    let complaint = query_complaint(&mut world, "c1", "s1").expect("complaint stored");
    assert_eq!(complaint.resolution_deadline, START_TS + RESOLUTION_WINDOW);

    set_timestamp(&mut world, START_TS + RESOLUTION_WINDOW + 1);
    assert_eq!(
        update(&mut world, PROVIDER, ComplaintStatus::InProgress),
        ComplaintStatus::Escalated
    );
}

#[test]
fn only_provider_updates_status() {
    let mut world = setup();
    file(&mut world, CUSTOMER, "c1");

    world
        .tx()
        .from(CUSTOMER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .update_status(buf("c1"), buf("s1"), ComplaintStatus::Resolved, buf(""))
        .returns(ExpectError(4, "ERR_UNAUTHORIZED"))
        .run();

    world
        .tx()
        .from(PROVIDER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .update_status(buf("c1"), buf("s1"), ComplaintStatus::Filed, buf(""))
        .returns(ExpectError(4, "ERR_INVALID_STATUS"))
        .run();

    world
        .tx()
        .from(PROVIDER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .update_status(buf("c9"), buf("s1"), ComplaintStatus::Resolved, buf(""))
        .returns(ExpectError(4, "ERR_INVALID_REFERENCE"))
        .run();

    let long_notes = "n".repeat(257);
    world
        .tx()
        .from(PROVIDER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .update_status(buf("c1"), buf("s1"), ComplaintStatus::Resolved, buf(&long_notes))
        .returns(ExpectError(4, "ERR_EVIDENCE_TOO_LONG"))
        .run();

    let complaint = query_complaint(&mut world, "c1", "s1").expect("complaint stored");
    assert_eq!(complaint.status, ComplaintStatus::Filed);
    assert_eq!(history(&mut world).len(), 1);
}

#[test]
fn close_releases_deposit_and_keeps_history() {
    let mut world = setup();
    file(&mut world, CUSTOMER, "c1");

    world
        .tx()
        .from(PROVIDER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .close_complaint(buf("c1"), buf("s1"))
        .returns(ExpectError(4, "ERR_INVALID_STATUS"))
        .run();

    set_timestamp(&mut world, START_TS + 200);
    update(&mut world, PROVIDER, ComplaintStatus::Resolved);

    world
        .tx()
        .from(CUSTOMER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .close_complaint(buf("c1"), buf("s1"))
        .returns(ExpectError(4, "ERR_UNAUTHORIZED"))
        .run();

    world
        .tx()
        .from(PROVIDER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .close_complaint(buf("c1"), buf("s1"))
        .run();

    assert!(query_complaint(&mut world, "c1", "s1").is_none());
    assert!(query_locked(&mut world, CUSTOMER) == big(0));
    assert_eq!(history(&mut world).len(), 2);

    let stats = world
        .query()
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .get_complaint_stats()
        .returns(ReturnsResult)
        .run();
    assert_eq!(stats.open_complaints, 0);
    assert_eq!(stats.closed, 1);

    // The released deposit funds a fresh complaint under the same id.
    file(&mut world, CUSTOMER, "c1");
    let complaint = query_complaint(&mut world, "c1", "s1").expect("complaint stored");
    assert_eq!(complaint.status, ComplaintStatus::Filed);
    assert_eq!(history(&mut world).len(), 3);
}

#[test]
fn insufficient_deposit_leaves_no_trace() {
    let mut world = setup();
    fund_deposit(&mut world, OUTSIDER, DEPOSIT - 1);

    world
        .tx()
        .from(OUTSIDER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .file_complaint(buf("c1"), buf("s1"), buf("underfunded"), fingerprint(0x01))
        .returns(ExpectError(4, "ERR_INSUFFICIENT_DEPOSIT"))
        .run();

    assert!(query_complaint(&mut world, "c1", "s1").is_none());
    assert!(history(&mut world).is_empty());
    assert!(query_locked(&mut world, OUTSIDER) == big(0));
}

#[test]
fn filing_requires_active_sla() {
    let mut world = setup();

    world
        .tx()
        .from(CUSTOMER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .file_complaint(buf("c1"), buf("missing"), buf("no such sla"), fingerprint(0x01))
        .returns(ExpectError(4, "ERR_INVALID_REFERENCE"))
        .run();

    world
        .tx()
        .from(PROVIDER)
        .to(SLA_REGISTRY)
        .typed(SlaRegistryProxy)
        .terminate(buf("s1"))
        .run();

    world
        .tx()
        .from(CUSTOMER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .file_complaint(buf("c1"), buf("s1"), buf("after termination"), fingerprint(0x01))
        .returns(ExpectError(4, "ERR_INVALID_REFERENCE"))
        .run();

    let long_description = "d".repeat(257);
    world
        .tx()
        .from(CUSTOMER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .file_complaint(buf(""), buf("s1"), buf(&long_description), fingerprint(0x01))
        .returns(ExpectError(4, "ERR_INVALID_REFERENCE"))
        .run();

    assert!(query_locked(&mut world, CUSTOMER) == big(0));
}

#[test]
fn stub_sla_source_drives_cross_validation() {
    let mut world = world();
    deploy_deposit_custody(&mut world);
    deploy_sla_source(&mut world);
    deploy_complaint_registry(&mut world, SLA_SOURCE);
    fund_deposit(&mut world, CUSTOMER, 500);

    world
        .tx()
        .from(OWNER)
        .to(SLA_SOURCE)
        .typed(SlaSourceMockProxy)
        .set_sla(buf("s1"), address(PROVIDER), address(CUSTOMER), 60u64, big(500), true)
        .run();
    world
        .tx()
        .from(OWNER)
        .to(SLA_SOURCE)
        .typed(SlaSourceMockProxy)
        .set_sla(buf("s2"), address(PROVIDER), address(CUSTOMER), 60u64, big(500), false)
        .run();

    world
        .tx()
        .from(CUSTOMER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .file_complaint(buf("c1"), buf("s2"), buf("inactive"), fingerprint(0x01))
        .returns(ExpectError(4, "ERR_INVALID_REFERENCE"))
        .run();

    file_against(&mut world, "s1");
    let complaint = query_complaint(&mut world, "c1", "s1").expect("complaint stored");
    assert_eq!(complaint.resolution_deadline, START_TS + 60);
    assert!(complaint.deposit == big(500));
    assert!(query_locked(&mut world, CUSTOMER) == big(500));
}

fn file_against(world: &mut ScenarioWorld, sla_id: &str) {
    world
        .tx()
        .from(CUSTOMER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .file_complaint(buf("c1"), buf(sla_id), buf("slow responses"), fingerprint(0x01))
        .run();
}

#[test]
fn evidence_from_filer_or_provider() {
    let mut world = setup();
    file(&mut world, CUSTOMER, "c1");

    set_timestamp(&mut world, START_TS + 5);
    world
        .tx()
        .from(CUSTOMER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .add_evidence(buf("c1"), buf("s1"), fingerprint(0x02), buf("screenshot"))
        .run();
    world
        .tx()
        .from(PROVIDER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .add_evidence(buf("c1"), buf("s1"), fingerprint(0x03), buf("server logs"))
        .run();

    world
        .tx()
        .from(OUTSIDER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .add_evidence(buf("c1"), buf("s1"), fingerprint(0x04), buf(""))
        .returns(ExpectError(4, "ERR_UNAUTHORIZED"))
        .run();

    let long_notes = "e".repeat(129);
    world
        .tx()
        .from(CUSTOMER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .add_evidence(buf("c1"), buf("s1"), fingerprint(0x05), buf(&long_notes))
        .returns(ExpectError(4, "ERR_EVIDENCE_TOO_LONG"))
        .run();

    let complaint = query_complaint(&mut world, "c1", "s1").expect("complaint stored");
    assert!(complaint.evidence_hash == fingerprint(0x03));
    assert_eq!(complaint.updated_at, START_TS + 5);
    assert_eq!(complaint.status, ComplaintStatus::Filed);
    assert_eq!(history(&mut world).len(), 1);
}

#[test]
fn poller_escalates_only_after_deadline() {
    let mut world = setup();
    file(&mut world, CUSTOMER, "c1");

    world
        .tx()
        .from(OUTSIDER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .escalate_overdue(buf("c1"), buf("s1"))
        .returns(ExpectError(4, "ERR_DEADLINE_NOT_REACHED"))
        .run();

    set_timestamp(&mut world, START_TS + RESOLUTION_WINDOW + 1);
    let overdue: bool = world
        .query()
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .is_deadline_missed(buf("c1"), buf("s1"))
        .returns(ReturnsResult)
        .run();
    assert!(overdue);

    world
        .tx()
        .from(OUTSIDER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .escalate_overdue(buf("c1"), buf("s1"))
        .run();

    let complaint = query_complaint(&mut world, "c1", "s1").expect("complaint stored");
    assert_eq!(complaint.status, ComplaintStatus::Escalated);

    let records = history(&mut world);
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].previous_status, Some(ComplaintStatus::Filed));
    assert_eq!(records[1].new_status, ComplaintStatus::Escalated);
    assert!(records[1].updated_by == address(OUTSIDER));

    world
        .tx()
        .from(OUTSIDER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .escalate_overdue(buf("c1"), buf("s1"))
        .returns(ExpectError(4, "ERR_INVALID_STATUS"))
        .run();

    let stats = world
        .query()
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .get_complaint_stats()
        .returns(ReturnsResult)
        .run();
    assert_eq!(stats.escalated, 1);
}

#[test]
fn config_reports_collaborators_and_bounds() {
    let mut world = setup();
    let config = world
        .query()
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .get_config()
        .returns(ReturnsResult)
        .run();

    assert!(config.sla_registry == sc_address(SLA_REGISTRY));
    assert!(config.deposit_custody == sc_address(DEPOSIT_CUSTODY));
    assert_eq!(config.max_description_len, 256);
    assert_eq!(config.max_status_notes_len, 256);
    assert_eq!(config.max_evidence_notes_len, 128);
}

fn history_page(world: &mut ScenarioWorld, from: u64, size: u64) -> Vec<StatusRecord<StaticApi>> {
    world
        .query()
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .get_status_history(buf("c1"), buf("s1"), from, size)
        .returns(ReturnsResult)
        .run()
        .into_iter()
        .collect()
}

fn escalated_total(world: &mut ScenarioWorld) -> u64 {
    world
        .query()
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .get_complaint_stats()
        .returns(ReturnsResult)
        .run()
        .escalated
}

#[test]
fn escalated_complaint_can_recover_before_deadline() {
    let mut world = setup();
    file(&mut world, CUSTOMER, "c1");

    set_timestamp(&mut world, START_TS + 10);
    assert_eq!(
        update(&mut world, PROVIDER, ComplaintStatus::Escalated),
        ComplaintStatus::Escalated
    );
    set_timestamp(&mut world, START_TS + 20);
    assert_eq!(
        update(&mut world, PROVIDER, ComplaintStatus::InProgress),
        ComplaintStatus::InProgress
    );
    set_timestamp(&mut world, START_TS + 30);
    assert_eq!(
        update(&mut world, PROVIDER, ComplaintStatus::Escalated),
        ComplaintStatus::Escalated
    );
    assert_eq!(escalated_total(&mut world), 1);

    set_timestamp(&mut world, START_TS + 40);
    update(&mut world, PROVIDER, ComplaintStatus::InProgress);
    set_timestamp(&mut world, START_TS + RESOLUTION_WINDOW + 1);
    assert_eq!(
        update(&mut world, PROVIDER, ComplaintStatus::InProgress),
        ComplaintStatus::Escalated
    );
    assert_eq!(escalated_total(&mut world), 1);
    assert_eq!(history(&mut world).len(), 6);
}

#[test]
fn resolved_complaint_escalates_after_deadline() {
    let mut world = setup();
    file(&mut world, CUSTOMER, "c1");

    set_timestamp(&mut world, START_TS + 100);
    assert_eq!(
        update(&mut world, PROVIDER, ComplaintStatus::Resolved),
        ComplaintStatus::Resolved
    );

    set_timestamp(&mut world, START_TS + RESOLUTION_WINDOW + 1);
    assert_eq!(
        update(&mut world, PROVIDER, ComplaintStatus::Resolved),
        ComplaintStatus::Escalated
    );

    let records = history(&mut world);
    assert_eq!(records[2].previous_status, Some(ComplaintStatus::Resolved));
    assert_eq!(records[2].new_status, ComplaintStatus::Escalated);

    world
        .tx()
        .from(PROVIDER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .close_complaint(buf("c1"), buf("s1"))
        .returns(ExpectError(4, "ERR_INVALID_STATUS"))
        .run();
    assert!(query_locked(&mut world, CUSTOMER) == big(DEPOSIT));
}

#[test]
fn in_progress_complaint_cannot_be_closed() {
    let mut world = setup();
    file(&mut world, CUSTOMER, "c1");
    update(&mut world, PROVIDER, ComplaintStatus::InProgress);

    world
        .tx()
        .from(PROVIDER)
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .close_complaint(buf("c1"), buf("s1"))
        .returns(ExpectError(4, "ERR_INVALID_STATUS"))
        .run();

    let complaint = query_complaint(&mut world, "c1", "s1").expect("complaint stored");
    assert_eq!(complaint.status, ComplaintStatus::InProgress);
    assert!(query_locked(&mut world, CUSTOMER) == big(DEPOSIT));
}

#[test]
fn status_history_pages_from_cursor() {
    let mut world = setup();
    file(&mut world, CUSTOMER, "c1");
    set_timestamp(&mut world, START_TS + 1);
    update(&mut world, PROVIDER, ComplaintStatus::InProgress);
    set_timestamp(&mut world, START_TS + 2);
    update(&mut world, PROVIDER, ComplaintStatus::Resolved);

    let page = history_page(&mut world, 1, 1);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].new_status, ComplaintStatus::InProgress);
    assert_eq!(page[0].timestamp, START_TS + 1);

    let tail = history_page(&mut world, 1, 1_000);
    assert_eq!(tail.len(), 2);
    assert_eq!(tail[1].new_status, ComplaintStatus::Resolved);

    assert_eq!(history_page(&mut world, 0, 1_000).len(), 3);
    assert!(history_page(&mut world, 3, 10).is_empty());
    assert!(history_page(&mut world, u64::MAX, 10).is_empty());

    let count: u64 = world
        .query()
        .to(COMPLAINT_REGISTRY)
        .typed(ComplaintRegistryProxy)
        .get_status_history_count(buf("c1"), buf("s1"))
        .returns(ReturnsResult)
        .run();
    assert_eq!(count, 3);
}

#[test]
fn status_history_page_is_capped() {
    let mut world = setup();
    file(&mut world, CUSTOMER, "c1");
    for _ in 0..MAX_PAGE_SIZE {
        update(&mut world, PROVIDER, ComplaintStatus::InProgress);
    }

    let page = history_page(&mut world, 0, MAX_PAGE_SIZE * 2);
    assert_eq!(page.len() as u64, MAX_PAGE_SIZE);
    assert_eq!(page[0].new_status, ComplaintStatus::Filed);

    let tail = history_page(&mut world, MAX_PAGE_SIZE, MAX_PAGE_SIZE * 2);
    assert_eq!(tail.len(), 1);
    assert_eq!(tail[0].new_status, ComplaintStatus::InProgress);
}
