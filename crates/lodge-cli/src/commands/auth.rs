use serde::Serialize;

use lodge_api::auth::SignupRequest;

use crate::bootstrap::AppContext;
use crate::cli::{AuthCommands, GlobalFlags};
use crate::output::output;

#[derive(Serialize)]
struct LoginView {
    authenticated: bool,
    user_id: i64,
    role: Option<String>,
}

#[derive(Serialize)]
struct LogoutView {
    logged_out: bool,
}

#[derive(Serialize)]
struct StatusView {
    authenticated: bool,
    user_id: Option<String>,
    /// Which storage tier the session came from: keyring, env, or file.
    source: Option<String>,
}

pub async fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    ctx: &AppContext,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Signup(args) => {
            let response = ctx
                .api
                .signup(&SignupRequest {
                    name: args.name.clone(),
                    email: args.email.clone(),
                    password: args.password.clone(),
                    role: "user".to_string(),
                })
                .await?;
            output(&response, flags.format)
        }
        AuthCommands::Login(args) => {
            let response = ctx.api.login(&args.email, &args.password).await?;
            output(
                &LoginView {
                    authenticated: true,
                    user_id: response.user_id,
                    role: response.role,
                },
                flags.format,
            )
        }
        AuthCommands::Logout => {
            ctx.api.logout().await;
            output(&LogoutView { logged_out: true }, flags.format)
        }
        AuthCommands::Status => {
            let session = ctx.session.load();
            output(
                &StatusView {
                    authenticated: session.is_some(),
                    user_id: session.map(|s| s.user_id),
                    source: ctx.session.detect_source(),
                },
                flags.format,
            )
        }
    }
}
