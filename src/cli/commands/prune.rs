use crate::cli::RunContext;
use crate::core::git::{BranchClassifier, CommandRunner, GitCommandRunner, ZombieReport};
use crate::ui::{confirm, Logger};
use crate::utils::{GitridError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PruneOutcome {
    NothingToDo,
    Cancelled,
    Deleted {
        deleted: Vec<String>,
        failed: Vec<String>,
    },
}

impl PruneOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            PruneOutcome::NothingToDo => 0,
            PruneOutcome::Cancelled => 1,
            PruneOutcome::Deleted { failed, .. } if failed.is_empty() => 0,
            PruneOutcome::Deleted { .. } => 1,
        }
    }
}

pub async fn execute(context: &RunContext) -> Result<PruneOutcome> {
    let runner = GitCommandRunner::new(&context.working_directory, context.logger);
    let mut classifier = BranchClassifier::new(runner).with_remote(&context.remote);
    let plain_text = context.logger.is_plain_text();

    run_prune(
        &mut classifier,
        &context.logger,
        context.assume_yes,
        |prompt| confirm(prompt, plain_text),
    )
    .await
}

/// Classify, present, confirm and delete.
pub async fn run_prune<R, F>(
    classifier: &mut BranchClassifier<R>,
    logger: &Logger,
    assume_yes: bool,
    mut confirm: F,
) -> Result<PruneOutcome>
where
    R: CommandRunner,
    F: FnMut(&str) -> bool,
{
    let directory = classifier.runner().working_directory().display().to_string();
    logger.verbose(format!(
        "Checking folder '{{color:cyan}}{}{{color}}'",
        directory
    ));

    let report = classifier.get_zombie_branches().await?;
    present_report(logger, &directory, &report);

    let deletable = report.deletable_names();
    if deletable.is_empty() {
        logger.info("No zombie branches found");
        return Ok(PruneOutcome::NothingToDo);
    }

    logger.blank();
    if assume_yes {
        logger.verbose("Skipping confirmation (--yes)");
    } else if !confirm(&removal_prompt(deletable.len())) {
        logger.info("User cancelled");
        return Ok(PruneOutcome::Cancelled);
    }

    let mut deleted = Vec::new();
    let mut failed = Vec::new();
    for branch in deletable {
        logger.info(format!("Deleting branch '{{color:cyan}}{}{{color}}'", branch));
        match classifier.delete_local_branch(&branch).await {
            Ok(output) => {
                logger.verbose(output);
                deleted.push(branch);
            }
            Err(GitridError::Deletion { branch, output }) => {
                logger.error(format!(
                    "{{color:red}}Failed{{color}} Could not delete branch '{{color:cyan}}{}{{color}}' ({{color:yellow}}git branch -d {}{{color}})",
                    branch, branch
                ));
                logger.error(format!("{{color:red}}{}", output));
                failed.push(branch);
            }
            Err(e) => return Err(e),
        }
    }

    if failed.is_empty() {
        logger.info(format!(
            "Removed {{color:cyan}}{}{{color}} zombie {}",
            deleted.len(),
            branch_word(deleted.len())
        ));
    } else {
        logger.error(format!(
            "{{color:red}}Completed with errors{{color}} Removed {} zombie {}, {} could not be deleted",
            deleted.len(),
            branch_word(deleted.len()),
            failed.len()
        ));
    }

    Ok(PruneOutcome::Deleted { deleted, failed })
}

fn present_report(logger: &Logger, directory: &str, report: &ZombieReport) {
    logger.verbose(format!(
        "Found repository url '{{color:cyan}}{}{{color}}' for folder '{{color:cyan}}{}{{color}}'",
        report.remote_url, directory
    ));
    logger.info(format!(
        "Found {{color:cyan}}{}{{color}} local branches and {{color:cyan}}{}{{color}} remote branches",
        report.local_count, report.remote_count
    ));

    for candidate in &report.candidates {
        match &candidate.error_reason {
            Some(reason) => logger.info(format!(
                "[{{color:yellow}} (OK) {{color}}] Branch '{{color:yellow}}{}{{color}}' only exists locally ({})",
                candidate.branch_name, reason
            )),
            None => logger.info(format!(
                "[{{color:yellow}}ZOMBIE{{color}}] Branch '{{color:yellow}}{}{{color}}' only exists locally",
                candidate.branch_name
            )),
        }
    }
}

pub fn removal_prompt(count: usize) -> String {
    format!(
        "{{color:yellow}}REMOVE {} ZOMBIE {}?{{color}} (y/n)",
        count,
        if count == 1 { "BRANCH" } else { "BRANCHES" }
    )
}

fn branch_word(count: usize) -> &'static str {
    if count == 1 {
        "branch"
    } else {
        "branches"
    }
}
