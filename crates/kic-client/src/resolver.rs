//! Subject resolution seam.
//!
//! When a caller passes no explicit subject identifier, the client asks an
//! injected resolver for the current session's one (in the host this is the
//! decrypted national ID of the logged-in citizen). The core ships no
//! implementation: session handling and decryption belong to the host.

/// Provides the current session's subject identifier, if any.
pub trait SubjectResolver: Send + Sync {
    /// The subject identifier of the current session, or `None` when no
    /// subject is logged in. Returning `None` makes field operations degrade
    /// to empty reads and no-op writes.
    fn current_subject(&self) -> Option<String>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<String>);

    impl SubjectResolver for Fixed {
        fn current_subject(&self) -> Option<String> {
            self.0.clone()
        }
    }

    #[test]
    fn resolver_is_object_safe() {
        let resolver: Box<dyn SubjectResolver> = Box::new(Fixed(Some("999990011".into())));
        assert_eq!(resolver.current_subject().as_deref(), Some("999990011"));
    }
}
