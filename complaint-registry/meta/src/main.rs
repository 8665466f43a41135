fn main() {
    multiversx_sc_meta_lib::cli_main::<complaint_registry::AbiProvider>();
}
