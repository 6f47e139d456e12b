use super::relay::{EmailRelay, SenderContext, SubmissionFailed};
use crate::model::ContactForm;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use tracing::{info, warn};

pub enum RelayCommand {
    Send {
        ticket: u64,
        form: ContactForm,
        context: SenderContext,
    },
}

#[derive(Debug)]
pub enum RelayResult {
    Delivered { ticket: u64 },
    Failed { ticket: u64, error: SubmissionFailed },
}

pub fn spawn_worker(
    ctx: eframe::egui::Context,
    relay: Arc<dyn EmailRelay>,
) -> (Sender<RelayCommand>, Receiver<RelayResult>) {
    let (cmd_tx, cmd_rx) = channel();
    let (res_tx, res_rx) = channel();

    let ctx_clone = ctx.clone();
    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                RelayCommand::Send {
                    ticket,
                    form,
                    context,
                } => match relay.send(&form, &context) {
                    Ok(()) => {
                        info!(ticket, relay = relay.name(), "Contact message delivered");
                        let _ = res_tx.send(RelayResult::Delivered { ticket });
                    }
                    Err(error) => {
                        warn!(ticket, relay = relay.name(), %error, "Contact message not delivered");
                        let _ = res_tx.send(RelayResult::Failed { ticket, error });
                    }
                },
            }
            ctx_clone.request_repaint();
        }
    });

    (cmd_tx, res_rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::relay::FailureReason;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct CountingRelay {
        calls: AtomicUsize,
        fail: bool,
    }

    impl EmailRelay for CountingRelay {
        fn name(&self) -> &str {
            "counting"
        }

        fn send(&self, _form: &ContactForm, _context: &SenderContext) -> Result<(), SubmissionFailed> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(SubmissionFailed::new(FailureReason::Network("offline".into())))
            } else {
                Ok(())
            }
        }
    }

    fn send_one(fail: bool) -> (RelayResult, usize) {
        let relay = Arc::new(CountingRelay {
            calls: AtomicUsize::new(0),
            fail,
        });
        let (tx, rx) = spawn_worker(eframe::egui::Context::default(), relay.clone());
        tx.send(RelayCommand::Send {
            ticket: 7,
            form: ContactForm::new("Ada", "ada@example.com", "Hi"),
            context: SenderContext::now("Portfolio"),
        })
        .unwrap();
        let result = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        (result, relay.calls.load(Ordering::SeqCst))
    }

    #[test]
    fn test_delivered() {
        let (result, calls) = send_one(false);
        assert!(matches!(result, RelayResult::Delivered { ticket: 7 }));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_failed() {
        let (result, calls) = send_one(true);
        match result {
            RelayResult::Failed { ticket, error } => {
                assert_eq!(ticket, 7);
                assert_eq!(error.reason, FailureReason::Network("offline".into()));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(calls, 1);
    }
}
