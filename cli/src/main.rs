use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracker::api::{ApiClient, ApiError};
use tracker::config::{ApiConfig, ConfigError, DEFAULT_BASE_URL};
use tracker::controllers::{self, FormKind, SubmitOutcome};
use tracker::forms::FormValues;
use tracker::routes::{Resolution, Route, RouteTable};
use tracker::session::{Session, SessionError};

mod store;
mod transport;

use store::FileStore;
use transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0} field(s) failed validation")]
    Invalid(usize),
}

#[derive(Parser, Debug)]
#[command(name = "expense-cli", about = "Expense tracker API CLI")]
struct Cli {
    #[arg(long, env = "EXPENSE_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "EXPENSE_TOKEN_FILE", default_value = ".expense-token")]
    token_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account.
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Log in and store the returned token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Save wallet details (requires a stored token).
    Wallet {
        #[arg(long)]
        account_balance: String,
        #[arg(long)]
        savings_amount: String,
        #[arg(long)]
        cash_in_hand: String,
    },
    /// Forget the stored token.
    Logout,
    /// Show whether a token is stored and where `/dashboard` leads.
    Status,
}

impl Command {
    /// Form kind and raw values for commands that submit a form.
    fn form(&self) -> Option<(FormKind, FormValues)> {
        match self {
            Self::Register { username, email, password, confirm_password } => Some((
                FormKind::Register,
                FormValues::new()
                    .with("username", username.as_str())
                    .with("email", email.as_str())
                    .with("password", password.as_str())
                    .with("confirmPassword", confirm_password.as_str()),
            )),
            Self::Login { email, password } => Some((
                FormKind::Login,
                FormValues::new().with("email", email.as_str()).with("password", password.as_str()),
            )),
            Self::Wallet { account_balance, savings_amount, cash_in_hand } => Some((
                FormKind::Wallet,
                FormValues::new()
                    .with("accountBalance", account_balance.as_str())
                    .with("savingsAmount", savings_amount.as_str())
                    .with("cashInHand", cash_in_hand.as_str()),
            )),
            Self::Logout | Self::Status => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("warning: ignoring .env: {e}");
        }
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let session = Session::new(FileStore::new(&cli.token_file));

    match &cli.command {
        Command::Logout => {
            session.sign_out()?;
            println!("logged out");
            Ok(())
        }
        Command::Status => {
            println!("{}", status_line(&session));
            Ok(())
        }
        command => {
            let Some((kind, values)) = command.form() else {
                return Ok(());
            };
            let config = ApiConfig::new(&cli.base_url)?;
            let api = ApiClient::new(config, ReqwestTransport::new()?, session);
            let outcome = controllers::submit(kind, &api, &values).await;
            report(kind, outcome)
        }
    }
}

/// Print the outcome; validation and request failures become errors.
fn report(kind: FormKind, outcome: SubmitOutcome) -> Result<(), CliError> {
    match outcome {
        SubmitOutcome::Invalid(errors) => {
            for (field, message) in errors.iter() {
                eprintln!("{field}: {message}");
            }
            Err(CliError::Invalid(errors.len()))
        }
        SubmitOutcome::Failed(e) => {
            tracing::debug!(status = ?e.status(), "request failed");
            eprintln!("{}", e.user_message());
            Err(e.into())
        }
        SubmitOutcome::Navigate(route) => {
            println!("{}", success_line(kind, route));
            Ok(())
        }
        SubmitOutcome::Reset => {
            println!("wallet details saved");
            Ok(())
        }
    }
}

fn success_line(kind: FormKind, route: Route) -> String {
    match kind {
        FormKind::Register => format!("registered; log in next ({})", route.path()),
        FormKind::Login => format!("logged in; token stored ({})", route.path()),
        FormKind::Wallet => "wallet details saved".to_owned(),
    }
}

fn status_line(session: &Session) -> String {
    let state = if session.is_authenticated() { "signed in" } else { "signed out" };
    let dashboard = match RouteTable::for_session(session).resolve(Route::Dashboard.path()) {
        Resolution::Render(_) => "renders the wallet form".to_owned(),
        Resolution::Redirect(target) => format!("redirects to {}", target.path()),
    };
    format!("{state}; {} {dashboard}", Route::Dashboard.path())
}
