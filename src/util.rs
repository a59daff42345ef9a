/// Floating-point comparison helpers.
///
/// Provides tolerance-based equality for results that went through inexact
/// arithmetic or a text round trip.
pub mod num;
