pub mod relay;
pub mod worker;

pub use relay::{EmailJsRelay, EmailRelay, FailureReason, SenderContext, SubmissionFailed};
pub use worker::{spawn_worker, RelayCommand, RelayResult};
