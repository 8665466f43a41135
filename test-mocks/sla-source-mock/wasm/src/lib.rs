#![no_std]

multiversx_sc_wasm_adapter::allocator!();
multiversx_sc_wasm_adapter::panic_handler!();

multiversx_sc_wasm_adapter::endpoints! {
    sla_source_mock
    (
        init => init
        upgrade => upgrade
        setSla => set_sla
        isActive => is_active
        getSla => get_sla
    )
}

multiversx_sc_wasm_adapter::async_callback_empty! {}
