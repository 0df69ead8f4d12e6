//! Placeholder substitution for the `root`, `version_file` and `command` options.
//!
//! Two placeholders are recognized:
//!  - `{pwd}`: the working directory
//!  - `{root}`: the resolved project root (not available inside the root template itself)
//!
//! After substitution, every `/` is rewritten to the platform path separator.
//! Any other brace sequence is left untouched.

pub const PWD: &str = "{pwd}";
pub const ROOT: &str = "{root}";


/// Values available for substitution.
#[derive(Debug, Clone)]
pub struct Substitutions {
    pwd: String,
    root: Option<String>,
    separator: char,
}

impl Substitutions {
    /// Substitutions with only `{pwd}` available, used to resolve the root itself.
    pub fn new(pwd: impl Into<String>, separator: char) -> Self {
        Substitutions { pwd: pwd.into(), root: None, separator }
    }

    pub fn with_root(self, root: impl Into<String>) -> Self {
        Substitutions { root: Some(root.into()), ..self }
    }

    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Expand the placeholders in `template` and normalize its path separators.
    ///
    /// # Example
    /// ```
    /// # use vcver::template::Substitutions;
    /// let subs = Substitutions::new("/home/me", ':').with_root("/src/proj");
    /// assert_eq!(subs.expand("{root}/.git"), ":src:proj:.git");
    /// assert_eq!(subs.expand("{pwd}"), ":home:me");
    /// ```
    pub fn expand(&self, template: &str) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        // single pass: substituted values are never scanned for placeholders
        while let Some(start) = rest.find('{') {
            result.push_str(&rest[..start]);
            let tail = &rest[start..];
            match self.lookup(tail) {
                Some((placeholder, value)) => {
                    result.push_str(value);
                    rest = &tail[placeholder.len()..];
                },
                None => {
                    result.push('{');
                    rest = &tail[1..];
                },
            }
        }
        result.push_str(rest);

        fix_path(&result, self.separator)
    }

    /// Return the placeholder `s` starts with, and its value.
    fn lookup(&self, s: &str) -> Option<(&'static str, &str)> {
        if s.starts_with(PWD) {
            Some((PWD, self.pwd.as_str()))
        }
        else if s.starts_with(ROOT) {
            self.root.as_deref().map(|root| (ROOT, root))
        }
        else {
            None
        }
    }
}

/// Translate `/`s into the given path separator.
pub fn fix_path(s: &str, separator: char) -> String {
    if separator == '/' {
        return s.to_string();
    }
    s.replace('/', separator.encode_utf8(&mut [0; 4]))
}
