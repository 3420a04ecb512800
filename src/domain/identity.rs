//! Project identity and the template guard
//!
//! A freshly cloned template carries `"scheme": "template-scheme"` in its
//! package manifest. Setup only runs while that exact sentinel is present;
//! any other value, or no `scheme` at all, means the project has already
//! been personalized.

use serde::Serialize;

use super::Slug;

/// Sentinel value marking an unconfigured template
pub const TEMPLATE_SCHEME: &str = "template-scheme";

/// Name and slug written into the app manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectIdentity {
    pub name: String,
    pub slug: Slug,
}

impl ProjectIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = Slug::from_name(&name);
        Self { name, slug }
    }
}

/// Decides whether a package manifest still needs setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateGuard {
    sentinel: String,
}

impl TemplateGuard {
    pub fn new(sentinel: impl Into<String>) -> Self {
        Self {
            sentinel: sentinel.into(),
        }
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    /// Returns true only when `scheme` is present and equals the sentinel
    pub fn needs_setup(&self, scheme: Option<&str>) -> bool {
        scheme == Some(self.sentinel.as_str())
    }
}

impl Default for TemplateGuard {
    fn default() -> Self {
        Self::new(TEMPLATE_SCHEME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_derives_slug() {
        let identity = ProjectIdentity::new("Cool-Project");
        assert_eq!(identity.name, "Cool-Project");
        assert_eq!(identity.slug.as_str(), "cool-project");
    }

    #[test]
    fn guard_passes_on_sentinel() {
        let guard = TemplateGuard::default();
        assert!(guard.needs_setup(Some("template-scheme")));
    }

    #[test]
    fn guard_skips_missing_scheme() {
        let guard = TemplateGuard::default();
        assert!(!guard.needs_setup(None));
    }

    #[test]
    fn guard_skips_other_scheme() {
        let guard = TemplateGuard::default();
        assert!(!guard.needs_setup(Some("my-app")));
        assert!(!guard.needs_setup(Some("")));
        assert!(!guard.needs_setup(Some("Template-Scheme")));
    }

    #[test]
    fn guard_uses_custom_sentinel() {
        let guard = TemplateGuard::new("starter");
        assert!(guard.needs_setup(Some("starter")));
        assert!(!guard.needs_setup(Some(TEMPLATE_SCHEME)));
    }
}
