//! Endpoint overrides are baked in at compile time, so rebuild when they change

fn main() {
    for var in [
        "HEXADMIN_API_BASE_URL",
        "HEXADMIN_API_PATH",
        "HEXADMIN_COOKIE_NAME",
    ] {
        println!("cargo:rerun-if-env-changed={var}");
    }
}
