//! URL rewrite rule type.

use crate::core::constants::FORGE_USER;

/// The access forms of a repository URL that get rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlForm {
    /// `https://<host>/<repo>`
    Https,
    /// `ssh://git@<host>/<repo>`
    Ssh,
    /// `git@<host>:<repo>`
    Shorthand,
}

impl UrlForm {
    /// Every form, in registration order.
    pub const ALL: [UrlForm; 3] = [UrlForm::Https, UrlForm::Ssh, UrlForm::Shorthand];

    /// Render the URL prefix this form matches.
    pub fn render(&self, host: &str, repository: &str) -> String {
        match self {
            Self::Https => format!("https://{}/{}", host, repository),
            Self::Ssh => format!("ssh://{}@{}/{}", FORGE_USER, host, repository),
            Self::Shorthand => format!("{}@{}:{}", FORGE_USER, host, repository),
        }
    }
}

/// One `url.<target>.insteadOf = <pattern>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    form: UrlForm,
    pattern: String,
    target: String,
}

impl RewriteRule {
    /// Build the rule routing `form` of `repository` through `alias`.
    pub fn new(form: UrlForm, host: &str, alias: &str, repository: &str) -> Self {
        Self {
            form,
            pattern: form.render(host, repository),
            target: format!("{}@{}:{}", FORGE_USER, alias, repository),
        }
    }

    pub fn form(&self) -> UrlForm {
        self.form
    }

    /// URL prefix being replaced.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Aliased URL prefix used instead.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Configuration key the pattern is appended under.
    pub fn config_key(&self) -> String {
        format!("url.{}.insteadOf", self.target)
    }
}
