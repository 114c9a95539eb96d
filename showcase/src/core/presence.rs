//! Present/absent values with a lazily evaluated fallback.

/// Source of the demo value. Always absent.
pub fn some_string() -> Option<String> {
    None
}

/// Run `action` only when a value is present.
pub fn if_present<T, E>(
    value: Option<&T>,
    action: impl FnOnce(&T) -> Result<(), E>,
) -> Result<(), E> {
    match value {
        Some(inner) => action(inner),
        None => Ok(()),
    }
}

/// Return the present value, or the fallback computed by `supplier`.
///
/// `supplier` is `FnOnce`: it runs at most once, and only on the absent path.
pub fn or_else_get<T>(value: Option<T>, supplier: impl FnOnce() -> T) -> T {
    value.unwrap_or_else(supplier)
}
