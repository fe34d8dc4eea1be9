#![allow(non_snake_case)]

#[unsafe(no_mangle)]
pub extern "C" fn impAnswer() -> f64 {
    42.0
}

#[unsafe(no_mangle)]
pub extern "C" fn impHalf() -> f64 {
    0.5
}

/// Exported without the import prefix, so it is never callable.
#[unsafe(no_mangle)]
pub extern "C" fn Secret() -> f64 {
    7.0
}
