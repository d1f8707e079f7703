/// Path prefixes exempt from authentication at the perimeter.
///
/// Covers the login endpoint plus discovery/health/docs surfaces; everything
/// else requires an identity by the time the authorization stage runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicPaths {
    prefixes: Vec<String>,
}

impl PublicPaths {
    /// Deployment defaults: login, API docs, discovery, health.
    pub fn defaults() -> Self {
        Self::new(
            [
                "/auth",
                "/health",
                "/swagger-ui",
                "/swagger-ui.html",
                "/v3/api-docs",
                "/webjars",
                "/actuator",
            ]
            .map(String::from),
        )
    }

    pub fn new(prefixes: impl IntoIterator<Item = String>) -> Self {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(|p| normalize(&p))
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Segment-aware prefix match: `/auth` covers `/auth` and `/auth/login`
    /// but not `/authors`.
    pub fn is_public(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| {
            path == prefix
                || path
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

fn normalize(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.is_empty() || trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_login_and_health() {
        let paths = PublicPaths::defaults();

        assert!(paths.is_public("/auth/login"));
        assert!(paths.is_public("/health"));
        assert!(paths.is_public("/v3/api-docs/swagger-config"));
    }

    #[test]
    fn docs_landing_page_is_public_alongside_its_assets() {
        let paths = PublicPaths::defaults();

        // `.html` does not open a new segment, so the landing page needs its
        // own entry next to the `/swagger-ui` asset prefix.
        assert!(paths.is_public("/swagger-ui.html"));
        assert!(paths.is_public("/swagger-ui/index.css"));
    }

    #[test]
    fn matching_is_segment_aware() {
        let paths = PublicPaths::new(["/auth".to_string()]);

        assert!(paths.is_public("/auth"));
        assert!(paths.is_public("/auth/login"));
        assert!(!paths.is_public("/authors"));
        assert!(!paths.is_public("/whoami"));
    }

    #[test]
    fn prefixes_are_normalized() {
        let paths = PublicPaths::new([" auth/ ".to_string(), "/docs/".to_string()]);

        assert!(paths.is_public("/auth/login"));
        assert!(paths.is_public("/docs/index.html"));
        assert_eq!(paths.prefixes(), ["/auth", "/docs"]);
    }
}
