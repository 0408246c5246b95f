pub mod client;
pub mod specs;

/// Invoke `$mac!(module::name)` for every smoke spec.
///
/// This is the **single source of truth** for the spec list. Adding a
/// new spec here automatically registers it in `tests/deployed.rs` and
/// `tests/local.rs`.
#[macro_export]
macro_rules! for_each_spec {
    ($mac:ident) => {
        $mac!(hello::returns_greeting);
    };
}
