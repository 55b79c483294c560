/// The runtime value type.
///
/// Defines [`Value`](core::Value), the closed set of values a mini-PL
/// program can compute: numbers, booleans, strings and null.
pub mod core;
