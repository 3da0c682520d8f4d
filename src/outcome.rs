use anyhow::Result;

/// How a run ended, as seen by the workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Nothing to verify for this event
    Skipped,
    Failure(String),
}

impl Outcome {
    /// Any error that escaped the run fails it with the full context chain
    pub fn from_result(result: Result<Outcome>) -> Outcome {
        match result {
            Ok(outcome) => outcome,
            Err(err) => {
                log::error!("Error executing action: {:#}", err);
                log::debug!("{:?}", err);
                Outcome::Failure(format!("{:#}", err))
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Success | Outcome::Skipped => 0,
            Outcome::Failure(_) => 1,
        }
    }

    /// The `::error::` workflow command that marks the step as failed
    pub fn workflow_command(&self) -> Option<String> {
        match self {
            Outcome::Failure(reason) => Some(format!("::error::{}", escape_data(reason))),
            _ => None,
        }
    }

    pub fn report(&self) -> i32 {
        if let Some(command) = self.workflow_command() {
            println!("{}", command);
        }

        self.exit_code()
    }
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
