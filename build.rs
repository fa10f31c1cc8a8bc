fn main() {
    // ESP-IDF link settings are only relevant for device builds; host
    // test builds (no `espidf` feature) must not require the toolchain.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
