#![no_std]

multiversx_sc_wasm_adapter::allocator!();
multiversx_sc_wasm_adapter::panic_handler!();

multiversx_sc_wasm_adapter::endpoints! {
    complaint_registry
    (
        init => init
        upgrade => upgrade
        fileComplaint => file_complaint
        updateStatus => update_status
        escalateOverdue => escalate_overdue
        addEvidence => add_evidence
        closeComplaint => close_complaint
        getComplaint => get_complaint
        getStatusHistory => get_status_history
        getStatusHistoryCount => get_status_history_count
        isDeadlineMissed => is_complaint_overdue
        getComplaintStats => get_complaint_stats
        getConfig => get_config
    )
}

multiversx_sc_wasm_adapter::async_callback_empty! {}
