use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod stream;
mod theme;

pub use spinner::Spinner;
pub use stream::StreamPrinter;
pub use theme::Style;

/// Whether an inquire error means the user pressed Ctrl+C or Esc.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs an interactive prompt flow, turning user cancellation into `Ok(())`.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancellation_is_not_an_error() {
        assert!(handle_prompt_cancellation(|| Err(InquireError::OperationCanceled.into())).is_ok());
        assert!(
            handle_prompt_cancellation(|| Err(InquireError::OperationInterrupted.into())).is_ok()
        );
    }

    #[test]
    fn test_other_errors_propagate() {
        let result = handle_prompt_cancellation(|| Err(anyhow::anyhow!("disk full")));
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_is_prompt_cancelled_other_error() {
        assert!(!is_prompt_cancelled(&InquireError::Custom("test".into())));
    }
}
