// The greeting itself.

/// The fixed greeting text.
pub const GREETING: &str = "Hello World";

/// Return the greeting.
///
/// Always `"Hello World"`. Pure and infallible, so it is safe to call from
/// any thread at any time.
pub const fn get_greeting() -> &'static str {
    GREETING
}
