//! Site navigation with role-gated links.
//!
//! The gate only decides what to show. Routes enforce access on their own.

use serde::Serialize;
use utoipa::ToSchema;

use domain::{permits, UserProfile, UserRole};

/// A navigation entry, optionally restricted to one role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    pub required_role: Option<UserRole>,
}

/// A link the current visitor may see
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RenderedLink {
    pub href: String,
    pub label: String,
    /// Whether the current path is this link or below it
    pub active: bool,
}

impl NavLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            required_role: None,
        }
    }

    pub fn requires(mut self, role: UserRole) -> Self {
        self.required_role = Some(role);
        self
    }

    /// Render for `profile` at `path`, or `None` if the link is hidden.
    pub fn render(&self, profile: Option<&UserProfile>, path: &str) -> Option<RenderedLink> {
        if !permits(profile.map(|p| p.role), self.required_role) {
            return None;
        }

        Some(RenderedLink {
            href: self.href.clone(),
            label: self.label.clone(),
            active: is_active(path, &self.href),
        })
    }
}

/// `path` is `href` itself or a descendant of it.
pub fn is_active(path: &str, href: &str) -> bool {
    path == href
        || path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Main site navigation
pub fn site_links() -> Vec<NavLink> {
    vec![
        NavLink::new("/", "Home"),
        NavLink::new("/villas", "Villas"),
        NavLink::new("/account", "My account").requires(UserRole::Customer),
        NavLink::new("/admin", "Admin").requires(UserRole::Admin),
    ]
}

/// Links from [`site_links`] visible to `profile`
pub fn render_site_links(profile: Option<&UserProfile>, path: &str) -> Vec<RenderedLink> {
    site_links()
        .iter()
        .filter_map(|link| link.render(profile, path))
        .collect()
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    const ROLES: [Option<UserRole>; 3] = [None, Some(UserRole::Customer), Some(UserRole::Admin)];

    fn profile(role: UserRole) -> UserProfile {
        let mut profile = UserProfile::new(Uuid::new_v4(), "ana@example.com");
        profile.role = role;
        profile
    }

    #[test]
    fn renders_iff_unrestricted_or_role_matches() {
        for required in ROLES {
            for actual in ROLES {
                let link = NavLink {
                    href: "/x".to_string(),
                    label: "X".to_string(),
                    required_role: required,
                };
                let viewer = actual.map(profile);
                let rendered = link.render(viewer.as_ref(), "/").is_some();

                let expected = match required {
                    None => true,
                    Some(role) => viewer.as_ref().is_some_and(|p| p.role == role),
                };
                assert_eq!(rendered, expected, "required {:?}, actual {:?}", required, actual);
            }
        }
    }

    #[test]
    fn customer_does_not_see_admin_link() {
        let link = NavLink::new("/admin", "Admin").requires(UserRole::Admin);
        assert_eq!(link.render(Some(&profile(UserRole::Customer)), "/admin"), None);
    }

    #[test]
    fn admin_link_is_active_below_its_path() {
        let link = NavLink::new("/admin", "Admin").requires(UserRole::Admin);
        let rendered = link
            .render(Some(&profile(UserRole::Admin)), "/admin/tags")
            .unwrap();
        assert!(rendered.active);
        assert_eq!(rendered.href, "/admin");
    }

    #[test]
    fn active_requires_segment_boundary() {
        assert!(is_active("/villas", "/villas"));
        assert!(is_active("/villas/123", "/villas"));
        assert!(!is_active("/villas-new", "/villas"));
        assert!(!is_active("/vil", "/villas"));
    }

    #[test]
    fn active_matches_prefix_rule_for_any_pair() {
        let paths = ["/", "/a", "/a/", "/a/b", "/ab", "/b", ""];
        for path in paths {
            for href in paths {
                let expected = path == href || path.starts_with(&format!("{}/", href));
                assert_eq!(is_active(path, href), expected, "path {:?}, href {:?}", path, href);
            }
        }
    }

    #[test]
    fn anonymous_visitor_sees_public_links_only() {
        let labels: Vec<_> = render_site_links(None, "/villas/42")
            .into_iter()
            .map(|l| (l.label, l.active))
            .collect();
        assert_eq!(
            labels,
            vec![("Home".to_string(), false), ("Villas".to_string(), true)]
        );
    }
}
