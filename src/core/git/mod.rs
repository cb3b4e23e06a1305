pub mod classifier;
pub mod parsing;
pub mod runner;

pub use classifier::{
    BranchClassifier, ClassifierState, ZombieCandidate, ZombieReport, DEFAULT_REMOTE,
    REASON_CHECKED_OUT, REASON_UNPUSHED, REASON_WORKTREE,
};
pub use parsing::LocalBranches;
pub use runner::{CommandOutput, CommandRunner, GitCommandRunner};
