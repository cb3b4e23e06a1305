pub mod test_helpers {
    use crate::core::git::{CommandOutput, CommandRunner};
    use crate::utils::Result;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::process::Command;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Runner returning canned output keyed by the space-joined arguments.
    pub struct ScriptedRunner {
        working_directory: PathBuf,
        responses: HashMap<String, CommandOutput>,
        calls: Mutex<Vec<String>>,
    }

    impl Default for ScriptedRunner {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ScriptedRunner {
        pub fn new() -> Self {
            Self {
                working_directory: PathBuf::from("/scripted/repo"),
                responses: HashMap::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn respond(mut self, args: &str, exit_code: i32, output: impl Into<String>) -> Self {
            self.responses
                .insert(args.to_string(), CommandOutput::new(exit_code, output));
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        pub fn count_calls(&self, args: &str) -> usize {
            self.calls().iter().filter(|call| *call == args).count()
        }
    }

    #[async_trait]
    impl CommandRunner for ScriptedRunner {
        async fn run(&self, args: &[&str]) -> Result<CommandOutput> {
            let key = args.join(" ");
            self.calls.lock().unwrap().push(key.clone());
            Ok(self
                .responses
                .get(&key)
                .cloned()
                .unwrap_or_else(|| CommandOutput::new(1, format!("unscripted command: {}", key))))
        }

        fn working_directory(&self) -> &Path {
            &self.working_directory
        }
    }

    /// Repository on `main` with one commit and no remote.
    pub fn setup_test_repo() -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo_path = temp_dir.path();

        git(repo_path, &["init", "--initial-branch=main"]);
        git(repo_path, &["config", "user.name", "Test User"]);
        git(repo_path, &["config", "user.email", "test@example.com"]);

        fs::write(repo_path.join("README.md"), "# Test Repository")
            .expect("Failed to write README");
        git(repo_path, &["add", "README.md"]);
        git(repo_path, &["commit", "-m", "Initial commit"]);

        temp_dir
    }

    /// Run git in `dir`, panicking on failure. Returns trimmed stdout.
    pub fn git(dir: &Path, args: &[&str]) -> String {
        let output = Command::new("git")
            .current_dir(dir)
            .args(args)
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .expect("Failed to run git");

        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }
}
