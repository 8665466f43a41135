fn main() {
    multiversx_sc_meta_lib::cli_main::<sla_source_mock::AbiProvider>();
}
