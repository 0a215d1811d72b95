//! `%(key)s` command templates.
//!
//! Benchmark commands are written against a placeholder for the suite
//! checkout (`%(source_dir)s/aes/aes/aes-aes-gem5-accel`). Expansion binds
//! placeholders to concrete values; `%%` is a literal percent sign and any
//! other `%` directive is an error.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use rustc_hash::FxHashMap;

use crate::{CatalogError, Result};

/// Placeholder bound to the suite checkout root.
pub const SOURCE_DIR_KEY: &str = "source_dir";

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%\((?P<key>[A-Za-z_][A-Za-z0-9_]*)\)s|%%|%").expect("directive regex is valid")
});

/// Values for template placeholders.
#[derive(Debug, Clone, Default)]
pub struct TemplateVars {
    values: FxHashMap<String, String>,
}

impl TemplateVars {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Variables with only `source_dir` bound.
    #[must_use]
    pub fn with_source_dir(source_dir: &Path) -> Self {
        Self::new().with(SOURCE_DIR_KEY, source_dir.display().to_string())
    }

    /// Bind a placeholder.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Expand every directive in `template`.
///
/// # Errors
///
/// Returns [`CatalogError::UnknownPlaceholder`] for a key with no binding and
/// [`CatalogError::MalformedTemplate`] for a `%` that starts no valid
/// directive.
pub fn expand(template: &str, vars: &TemplateVars) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for caps in DIRECTIVE.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&template[last..whole.start()]);
        out.push_str(resolve(template, &caps, whole.start(), vars)?);
        last = whole.end();
    }
    out.push_str(&template[last..]);
    Ok(out)
}

fn resolve<'a>(
    template: &str,
    caps: &Captures<'_>,
    offset: usize,
    vars: &'a TemplateVars,
) -> Result<&'a str> {
    if let Some(key) = caps.name("key") {
        return vars
            .get(key.as_str())
            .ok_or_else(|| CatalogError::UnknownPlaceholder(key.as_str().to_string()));
    }
    match &caps[0] {
        "%%" => Ok("%"),
        _ => Err(CatalogError::MalformedTemplate {
            template: template.to_string(),
            offset,
        }),
    }
}

/// A fully resolved simulator command line. Never spawned by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Simulation binary.
    pub program: PathBuf,
    /// Arguments, one per whitespace-separated template token.
    pub args: Vec<String>,
}

impl Invocation {
    /// Expand an exec command and argument template pair.
    ///
    /// `run_args` is split before expansion, so a substituted value containing
    /// whitespace stays a single argument.
    ///
    /// # Errors
    ///
    /// Propagates template expansion errors.
    pub fn expand(exec_cmd: &str, run_args: &str, vars: &TemplateVars) -> Result<Self> {
        let program = PathBuf::from(expand(exec_cmd, vars)?);
        let args = run_args
            .split_whitespace()
            .map(|token| expand(token, vars))
            .collect::<Result<_>>()?;
        Ok(Self { program, args })
    }

    /// The reference output file the consumer compares against, if listed.
    #[must_use]
    pub fn check_data(&self) -> Option<&Path> {
        self.args
            .iter()
            .rev()
            .map(Path::new)
            .find(|p| p.file_name().is_some_and(|n| n == "check.data"))
    }

    /// Build (but do not spawn) a process command.
    #[must_use]
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

/// Single-quote a word for a POSIX shell if it needs it.
fn shell_quote(word: &str) -> String {
    if !word.is_empty() && !word.contains(|c: char| c.is_whitespace() || c == '\'') {
        return word.to_string();
    }
    format!("'{}'", word.replace('\'', r"'\''"))
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&shell_quote(&self.program.display().to_string()))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> TemplateVars {
        TemplateVars::with_source_dir(Path::new("/opt/machsuite"))
    }

    #[test]
    fn test_expand_source_dir() {
        let out = expand("%(source_dir)s/aes/aes/aes-aes-gem5-accel", &vars()).unwrap();
        assert_eq!(out, "/opt/machsuite/aes/aes/aes-aes-gem5-accel");
    }

    #[test]
    fn test_expand_plain_text_and_escape() {
        assert_eq!(expand("no placeholders", &vars()).unwrap(), "no placeholders");
        assert_eq!(expand("100%% of %(source_dir)s", &vars()).unwrap(), "100% of /opt/machsuite");
    }

    #[test]
    fn test_expand_extra_vars() {
        let vars = vars().with("run", "7");
        assert_eq!(
            expand("%(source_dir)s/out-%(run)s", &vars).unwrap(),
            "/opt/machsuite/out-7"
        );
    }

    #[test]
    fn test_unknown_placeholder() {
        let err = expand("%(build_dir)s/bin", &vars()).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownPlaceholder(ref k) if k == "build_dir"));
    }

    #[test]
    fn test_malformed_directives() {
        for bad in ["%(source_dir)d", "%(source_dir", "50% done", "trailing %"] {
            assert!(
                matches!(expand(bad, &vars()), Err(CatalogError::MalformedTemplate { .. })),
                "{bad} should be rejected"
            );
        }
        let err = expand("ab%c", &vars()).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedTemplate { offset: 2, .. }));
    }

    #[test]
    fn test_invocation() {
        let inv = Invocation::expand(
            "%(source_dir)s/kmp/kmp/kmp-kmp-gem5-accel",
            "%(source_dir)s/kmp/kmp/input.data  %(source_dir)s/kmp/kmp/check.data",
            &vars(),
        )
        .unwrap();
        assert_eq!(inv.program, PathBuf::from("/opt/machsuite/kmp/kmp/kmp-kmp-gem5-accel"));
        assert_eq!(inv.args.len(), 2);
        assert_eq!(
            inv.check_data(),
            Some(Path::new("/opt/machsuite/kmp/kmp/check.data"))
        );
        assert_eq!(
            inv.to_string(),
            "/opt/machsuite/kmp/kmp/kmp-kmp-gem5-accel /opt/machsuite/kmp/kmp/input.data /opt/machsuite/kmp/kmp/check.data"
        );

        let cmd = inv.to_command();
        assert_eq!(cmd.get_args().count(), 2);
    }

    #[test]
    fn test_invocation_source_dir_with_spaces() {
        let vars = TemplateVars::with_source_dir(Path::new("/my data/MachSuite"));
        let inv = Invocation::expand(
            "%(source_dir)s/aes/aes/aes-aes-gem5-accel",
            "%(source_dir)s/aes/aes/input.data %(source_dir)s/aes/aes/check.data",
            &vars,
        )
        .unwrap();
        assert_eq!(
            inv.args,
            [
                "/my data/MachSuite/aes/aes/input.data",
                "/my data/MachSuite/aes/aes/check.data"
            ]
        );
        assert_eq!(
            inv.check_data(),
            Some(Path::new("/my data/MachSuite/aes/aes/check.data"))
        );
        assert_eq!(inv.to_command().get_args().count(), 2);
        assert_eq!(
            inv.to_string(),
            "'/my data/MachSuite/aes/aes/aes-aes-gem5-accel' \
             '/my data/MachSuite/aes/aes/input.data' '/my data/MachSuite/aes/aes/check.data'"
        );
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("plain"), "plain");
        assert_eq!(shell_quote(""), "''");
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
    }

    #[test]
    fn test_invocation_without_check_data() {
        let inv = Invocation::expand("bin", "", &vars()).unwrap();
        assert!(inv.args.is_empty());
        assert_eq!(inv.check_data(), None);
    }
}
