fn main() {
    multiversx_sc_meta_lib::cli_main::<deposit_custody_mock::AbiProvider>();
}
