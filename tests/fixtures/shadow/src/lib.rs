#![allow(non_snake_case)]

#[unsafe(no_mangle)]
pub extern "C" fn impAnswer() -> f64 {
    1.0
}

#[unsafe(no_mangle)]
pub extern "C" fn impShadow() -> f64 {
    2.0
}
