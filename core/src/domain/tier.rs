use std::fmt;

/// Site codes that carry an environment marker right after them.
pub const SITE_PREFIXES: [&str; 4] = ["df", "lv", "dub", "lon"];

/// Which family of configuration-management environments a host belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvironmentTier {
    Dev,
    Sandbox,
    Prod,
}

impl EnvironmentTier {
    /// Classifies a hostname by its site prefix and the marker after it.
    ///
    /// `lvdev42` is [`Dev`](Self::Dev), `lonsb07` is
    /// [`Sandbox`](Self::Sandbox), anything else (`dubweb01`, `db01`) is
    /// [`Prod`](Self::Prod). Matching is case-sensitive and the dev rule wins
    /// over the sandbox rule.
    pub fn classify(hostname: &str) -> Self {
        let after_site = || {
            SITE_PREFIXES
                .iter()
                .filter_map(move |site| hostname.strip_prefix(site))
        };

        if after_site().any(|rest| rest.starts_with("dev")) {
            EnvironmentTier::Dev
        } else if after_site().any(|rest| rest.starts_with("sb")) {
            EnvironmentTier::Sandbox
        } else {
            EnvironmentTier::Prod
        }
    }

    /// Suffix environment names of this tier end with.
    pub fn suffix(self) -> &'static str {
        match self {
            EnvironmentTier::Dev => "dev",
            EnvironmentTier::Sandbox => "sbx",
            EnvironmentTier::Prod => "prod",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EnvironmentTier::Dev => "dev",
            EnvironmentTier::Sandbox => "sandbox",
            EnvironmentTier::Prod => "prod",
        }
    }
}

impl fmt::Display for EnvironmentTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
