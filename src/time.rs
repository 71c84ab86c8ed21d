#[cfg(not(feature = "wasm"))]
use std::time::Instant;
#[cfg(not(feature = "wasm"))]
pub fn now() -> Instant {
    Instant::now()
}
#[cfg(not(feature = "wasm"))]
pub fn until_now(t: Instant) -> f64 {
    t.elapsed().as_secs_f64()
}
#[cfg(feature = "wasm")]
pub fn now() -> f64 {
    web_sys::window()
        .expect("should have a Window")
        .performance()
        .expect("should have a Performance")
        .now()
}
#[cfg(feature = "wasm")]
pub fn until_now(t: f64) -> f64 {
    (now() - t) / 1000.0
}
