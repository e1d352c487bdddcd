//! The container engine seam and the mount pipeline

use std::io::Write;

use tracing::debug;

use super::error::MountError;
use super::outcome::MountOutcome;
use super::report::report;
use super::request::{MountRequest, Selection};

/// A container engine able to mount container root filesystems
///
/// Implementations return one outcome per resolved container, in a stable
/// order. A top-level `Err` means the whole batch failed; per-container
/// problems belong in the individual outcomes.
#[allow(async_fn_in_trait)]
pub trait MountService {
    async fn mount(&self, selection: &Selection) -> Result<Vec<MountOutcome>, MountError>;
}

/// Mount the containers selected by `request` and report the outcomes
///
/// An unknown listing format is rejected before the engine is called, and an
/// engine error aborts before anything is written to `out`.
pub async fn run_mount<S, W>(
    service: &S,
    request: &MountRequest,
    out: &mut W,
) -> Result<(), MountError>
where
    S: MountService,
    W: Write,
{
    request.check_format()?;

    let selection = request.selection();
    debug!("Requesting mount for {:?}", selection);

    let outcomes = service.mount(&selection).await?;
    debug!("Engine returned {} outcome(s)", outcomes.len());

    report(request, outcomes, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mount::outcome::TargetFailure;
    use crate::mount::request::OutputFormat;
    use std::sync::Mutex;

    /// Records every selection it receives and replays a canned response
    struct FakeEngine {
        calls: Mutex<Vec<Selection>>,
        response: fn() -> Result<Vec<MountOutcome>, MountError>,
    }

    impl FakeEngine {
        fn new(response: fn() -> Result<Vec<MountOutcome>, MountError>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                response,
            }
        }

        fn calls(&self) -> Vec<Selection> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl MountService for FakeEngine {
        async fn mount(&self, selection: &Selection) -> Result<Vec<MountOutcome>, MountError> {
            self.calls.lock().unwrap().push(selection.clone());
            (self.response)()
        }
    }

    fn mixed() -> Result<Vec<MountOutcome>, MountError> {
        Ok(vec![
            MountOutcome::mounted("1111111111111111", "web", "/mnt/web"),
            MountOutcome::failed("db", "db", TargetFailure::new("db", "no such container")),
        ])
    }

    fn unavailable() -> Result<Vec<MountOutcome>, MountError> {
        Err(MountError::engine(std::io::Error::other("engine offline")))
    }

    #[tokio::test]
    async fn named_targets_reach_the_engine() {
        let engine = FakeEngine::new(mixed);
        let request = MountRequest::new(
            vec!["web".to_string(), "db".to_string()],
            false,
            false,
            OutputFormat::Default,
            false,
        )
        .unwrap();

        let mut out = Vec::new();
        let result = run_mount(&engine, &request, &mut out).await;

        assert_eq!(
            engine.calls(),
            vec![Selection::Named(vec!["web".to_string(), "db".to_string()])]
        );
        assert_eq!(String::from_utf8(out).unwrap(), "/mnt/web\n");
        assert!(matches!(result, Err(MountError::TargetFailures(f)) if f.len() == 1));
    }

    #[tokio::test]
    async fn listing_asks_for_mounted_containers() {
        let engine = FakeEngine::new(|| {
            Ok(vec![MountOutcome::mounted(
                "1111111111111111",
                "web",
                "/mnt/web",
            )])
        });
        let request =
            MountRequest::new(Vec::new(), false, false, OutputFormat::Json, false).unwrap();

        let mut out = Vec::new();
        run_mount(&engine, &request, &mut out).await.unwrap();

        assert_eq!(engine.calls(), vec![Selection::Mounted]);
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["id"], "1111111111111111");
    }

    #[tokio::test]
    async fn engine_error_aborts_without_output() {
        let engine = FakeEngine::new(unavailable);
        let request = MountRequest::new(Vec::new(), true, false, OutputFormat::Default, false)
            .unwrap();

        let mut out = Vec::new();
        let result = run_mount(&engine, &request, &mut out).await;

        assert!(out.is_empty());
        match result {
            Err(err @ MountError::Engine(_)) => assert_eq!(err.to_string(), "engine offline"),
            other => panic!("expected engine error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_listing_format_skips_the_engine() {
        let engine = FakeEngine::new(unavailable);
        let request = MountRequest::new(
            Vec::new(),
            false,
            false,
            OutputFormat::Template("bogus".to_string()),
            false,
        )
        .unwrap();

        let mut out = Vec::new();
        let result = run_mount(&engine, &request, &mut out).await;

        assert!(engine.calls().is_empty());
        assert!(out.is_empty());
        assert!(matches!(result, Err(MountError::UnknownFormat(f)) if f == "bogus"));
    }

    #[test]
    fn conflicting_selection_never_reaches_the_engine() {
        let engine = FakeEngine::new(mixed);
        let result = MountRequest::new(
            vec!["web".to_string()],
            true,
            false,
            OutputFormat::Default,
            false,
        );

        assert!(matches!(result, Err(MountError::ConflictingSelection)));
        assert!(engine.calls().is_empty());
    }
}
