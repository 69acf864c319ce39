//! Principal capability: something that can log in and be permission-checked.

pub trait Principal {
    /// Value of the login field.
    fn identifier(&self) -> &str;

    /// Inactive principals must not be allowed to log in.
    fn is_active(&self) -> bool;

    /// Whether the principal holds the named permission.
    fn has_permission(&self, permission: &str) -> bool;

    /// Whether the principal can see anything in the named module.
    fn has_module_permission(&self, module: &str) -> bool;

    /// True when every listed permission is held. An empty list is always held.
    fn has_permissions(&self, permissions: &[&str]) -> bool {
        permissions.iter().all(|p| self.has_permission(p))
    }
}
