#![no_std]

multiversx_sc_wasm_adapter::allocator!();
multiversx_sc_wasm_adapter::panic_handler!();

multiversx_sc_wasm_adapter::endpoints! {
    sla_registry
    (
        init => init
        upgrade => upgrade
        createSla => create_sla
        updateDescription => update_description
        proposeAmendment => propose_amendment
        approveAmendment => approve_amendment
        terminate => terminate
        getSla => get_sla
        isActive => is_active
        getParties => get_parties
        verifyParty => verify_party
        getAmendment => get_amendment
        getAmendmentApprovers => get_amendment_approvers
        getAmendmentIds => get_amendment_ids
        getEvents => get_events
        getEventCount => get_event_count
        getSlaIdsByParty => get_sla_ids_by_party
        getRegistryStats => get_registry_stats
    )
}

multiversx_sc_wasm_adapter::async_callback_empty! {}
