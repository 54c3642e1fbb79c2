use crate::context::Context;
use crate::schema::Session;
use crate::schema::values::DEFAULT_INTERNAL_DOMAIN;
use crate::wizard::collect::Collector;
use crate::wizard::menus;
use anyhow::Result;
use tracing::info;

/// Drive one wizard session over `session`.
///
/// Asks for the wildcard domain and, optionally, the internal cluster
/// domain, then runs the root menu until the operator exits it. Returns the
/// populated session; nothing is rendered here.
pub fn run(ctx: &Context, mut session: Session) -> Result<Session> {
    ctx.output.section("cnvrg.io Helm values wizard");
    ctx.output
        .info("Answer the prompts below; every menu lists a final option to go back");

    let collector = Collector::new(ctx);

    let domain = collector.scalar("What is your wildcard domain? ")?;
    if !domain.is_empty() {
        info!(setting = "clusterDomain.clusterDomain", value = %domain, "setting changed");
        session.cluster_domain.cluster_domain = domain;
    }

    if collector.confirm("Do you want to modify the internal cluster domain? (yes/no): ")? {
        let internal = collector.scalar(&format!(
            "What is your internal cluster domain? [default: {}]: ",
            DEFAULT_INTERNAL_DOMAIN
        ))?;
        let internal = if internal.is_empty() {
            DEFAULT_INTERNAL_DOMAIN.to_string()
        } else {
            internal
        };
        info!(setting = "clusterInternalDomain.domain", value = %internal, "setting changed");
        session.cluster_internal_domain.domain = internal;
    }

    menus::root().run(ctx, &mut session)?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{MockFileSystem, MockOutput, MockUserInput};
    use std::sync::Arc;

    fn run_transcript(lines: &[&str], start: Session) -> Result<Session> {
        let ctx = Context::test_with(
            Arc::new(MockFileSystem::new()),
            Arc::new(MockUserInput::with_lines(lines)),
            Arc::new(MockOutput::new()),
        );
        run(&ctx, start)
    }

    #[test]
    fn test_minimal_transcript_keeps_defaults() {
        let session = run_transcript(&["example.com", "no", "12"], Session::default()).unwrap();

        let mut expected = Session::default();
        expected.cluster_domain.cluster_domain = "example.com".to_string();
        assert_eq!(session, expected);
        assert_eq!(session.cluster_internal_domain.domain, "cluster.local");
    }

    #[test]
    fn test_internal_domain_override() {
        let session =
            run_transcript(&["Example.com", "yes", "Corp.Local", "12"], Session::default())
                .unwrap();

        assert_eq!(session.cluster_domain.cluster_domain, "example.com");
        assert_eq!(session.cluster_internal_domain.domain, "corp.local");
    }

    #[test]
    fn test_internal_domain_empty_answer_uses_default() {
        let mut start = Session::default();
        start.cluster_internal_domain.domain = "corp.local".to_string();

        let session = run_transcript(&["example.com", "yes", "", "12"], start).unwrap();

        assert_eq!(session.cluster_internal_domain.domain, "cluster.local");
    }

    #[test]
    fn test_empty_domain_keeps_overlay_value() {
        let mut start = Session::default();
        start.cluster_domain.cluster_domain = "preset.io".to_string();

        let session = run_transcript(&["", "no", "12"], start).unwrap();

        assert_eq!(session.cluster_domain.cluster_domain, "preset.io");
    }

    #[test]
    fn test_same_transcript_same_session() {
        let transcript = ["example.com", "no", "8", "1", "2", "3", "4", "5", "12"];

        let first = run_transcript(&transcript, Session::default()).unwrap();
        let second = run_transcript(&transcript, Session::default()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.backup.rotation, 3);
    }

    #[test]
    fn test_closed_input_before_exit_fails() {
        let err = run_transcript(&["example.com", "no"], Session::default()).unwrap_err();

        assert!(err.to_string().contains("Input stream closed"));
    }
}
