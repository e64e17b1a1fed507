//! Command helper methods for Test.

use super::{Test, SCRUBBED_ENV};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an asap command with a scrubbed environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - every AWS credential source removed or pointed at missing files
    /// - instance metadata lookups disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("asap").expect("failed to find asap binary");
        for var in SCRUBBED_ENV {
            cmd.env_remove(var);
        }
        let home = self.home.path();
        cmd.env("HOME", home)
            .env("USERPROFILE", home)
            .env("ASAP_CONFIG", self.config_path())
            .env("AWS_CONFIG_FILE", home.join("aws-config-missing"))
            .env("AWS_SHARED_CREDENTIALS_FILE", home.join("aws-credentials-missing"))
            .env("AWS_EC2_METADATA_DISABLED", "true")
            .env("NO_COLOR", "1")
            .current_dir(home);
        cmd
    }

    /// Shortcut for `asap search-parameters`.
    pub fn search_parameters(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("search-parameters")
            .args(args)
            .output()
            .expect("failed to run asap search-parameters")
    }

    /// Shortcut for `asap search-secrets`.
    pub fn search_secrets(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("search-secrets")
            .args(args)
            .output()
            .expect("failed to run asap search-secrets")
    }
}
