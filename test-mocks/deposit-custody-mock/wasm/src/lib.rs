#![no_std]

multiversx_sc_wasm_adapter::allocator!();
multiversx_sc_wasm_adapter::panic_handler!();

multiversx_sc_wasm_adapter::endpoints! {
    deposit_custody_mock
    (
        init => init
        upgrade => upgrade
        setAvailable => set_available
        lockDeposit => lock_deposit
        releaseDeposit => release_deposit
        getAvailable => get_available
        getLocked => get_locked
    )
}

multiversx_sc_wasm_adapter::async_callback_empty! {}
