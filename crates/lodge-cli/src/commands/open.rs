use serde::Serialize;

use lodge_nav::GuardVerdict;
use lodge_session::SessionEvent;

use crate::bootstrap::AppContext;
use crate::cli::{GlobalFlags, OpenArgs};
use crate::output::output;

#[derive(Serialize)]
struct OpenView {
    path: String,
    verdict: &'static str,
    redirect_to: Option<String>,
    /// Set when the evaluation itself tore the session down (a 401/403
    /// during the role fetch).
    session_invalidated: bool,
}

/// Evaluate a navigation attempt the way the app shell would before
/// committing a route transition.
pub async fn handle(args: &OpenArgs, flags: &GlobalFlags, ctx: &AppContext) -> anyhow::Result<()> {
    let guard = ctx.guard();
    let mut events = ctx.session.subscribe();

    let verdict = guard.evaluate_path(&args.path).await;

    let session_invalidated = matches!(
        events.try_recv(),
        Ok(SessionEvent::Invalidated { .. })
    );

    let view = match verdict {
        GuardVerdict::Allow => OpenView {
            path: args.path.clone(),
            verdict: "allow",
            redirect_to: None,
            session_invalidated,
        },
        GuardVerdict::Redirect { target } => OpenView {
            path: args.path.clone(),
            verdict: "redirect",
            redirect_to: Some(target),
            session_invalidated,
        },
    };
    output(&view, flags.format)
}
