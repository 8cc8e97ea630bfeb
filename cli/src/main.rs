mod file_storage;
mod transport;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use evonto::config::{ConfigError, DEFAULT_BASE_URL};
use evonto::forms::{FormError, LoginForm, RegisterForm, validate_new_event};
use evonto::invitations::{self, InviteError, InviteForm};
use evonto::rsvp::{self, RsvpOutcome};
use evonto::types::{InvitationLookup, NewEvent, RsvpStatus};
use evonto::{ApiClient, ApiConfig, ApiError, ProfileCapture, SessionStore, TokenCheck, UserProfile};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::file_storage::{FileStorage, default_session_path};
use crate::transport::ReqwestTransport;

type Api = ApiClient<ReqwestTransport>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not logged in; run `evonto-cli login` first")]
    NotLoggedIn,
    #[error("login succeeded but the server sent no token")]
    NoTokenIssued,
    #[error("token rejected by the server; session cleared")]
    InvalidToken,
    #[error("invalid RSVP status `{0}` (expected yes, no, or maybe)")]
    InvalidStatus(String),
    #[error("{0}")]
    Form(#[from] FormError),
    #[error("{0}")]
    Invite(#[from] InviteError),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{}", api_error_message(.0))]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Server message when present, else the error itself with its body.
fn api_error_message(err: &ApiError) -> String {
    if let Some(message) = err.server_message() {
        return message;
    }
    match err.body().map(str::trim).filter(|b| !b.is_empty()) {
        Some(body) => format!("{err}: {body}"),
        None => err.to_string(),
    }
}

#[derive(Parser, Debug)]
#[command(name = "evonto-cli", about = "Evonto event planner CLI", version)]
struct Cli {
    #[arg(long, env = "EVONTO_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Where the session token and profile are kept between runs.
    #[arg(long, env = "EVONTO_SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// Which rotated-token responses replace the cached profile: any | auth.
    #[arg(long, env = "EVONTO_PROFILE_CAPTURE", default_value = "any")]
    profile_capture: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Ping,
    Register(RegisterArgs),
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Whoami,
    CheckToken,
    Events(EventsCommand),
    Invite(InviteCommand),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    /// Username suffix (0-99); random when omitted.
    #[arg(long)]
    suffix: Option<u8>,
}

#[derive(Args, Debug)]
struct EventsCommand {
    #[command(subcommand)]
    command: EventsSubcommand,
}

#[derive(Subcommand, Debug)]
enum EventsSubcommand {
    List,
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Local date-time, e.g. 2025-06-01T18:00
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        #[arg(long)]
        location: String,
    },
    Delete {
        event_id: i64,
    },
    Details {
        event_id: i64,
    },
}

#[derive(Args, Debug)]
struct InviteCommand {
    #[command(subcommand)]
    command: InviteSubcommand,
}

#[derive(Args, Debug)]
struct GuestArgs {
    event_id: i64,
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: Option<String>,
}

#[derive(Subcommand, Debug)]
enum InviteSubcommand {
    Send {
        #[command(flatten)]
        guest: GuestArgs,
        #[arg(long)]
        phone: Option<String>,
    },
    List {
        event_id: i64,
    },
    Info {
        #[command(flatten)]
        guest: GuestArgs,
    },
    Respond {
        #[command(flatten)]
        guest: GuestArgs,
        /// yes | no | maybe
        #[arg(long)]
        status: String,
    },
    Delete {
        invitation_id: i64,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CliError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = ApiConfig::new(&cli.base_url).with_profile_capture(ProfileCapture::parse(&cli.profile_capture)?);
    let storage = FileStorage::new(cli.session_file.unwrap_or_else(default_session_path));
    tracing::debug!(base_url = %config.base_url, session = %storage.path().display(), "starting");

    let session = Arc::new(SessionStore::new(Arc::new(storage)));
    let api = ApiClient::new(ReqwestTransport::new()?, config, session);

    match cli.command {
        Command::Ping => {
            api.ping().await?;
            println!("ok");
            Ok(())
        }
        Command::Register(args) => run_register(&api, args).await,
        Command::Login { email, password } => run_login(&api, LoginForm { email, password }).await,
        Command::Logout => {
            api.session().logout();
            println!("logged out");
            Ok(())
        }
        Command::Whoami => {
            let user = api.session().user().ok_or(CliError::NotLoggedIn)?;
            eprintln!("signed in as {}", signed_in_label(&user));
            print_json(user.as_json())
        }
        Command::CheckToken => run_check_token(&api).await,
        Command::Events(events) => run_events(&api, events).await,
        Command::Invite(invite) => run_invite(&api, invite).await,
    }
}

async fn run_register(api: &Api, args: RegisterArgs) -> Result<(), CliError> {
    let form = RegisterForm {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        password: args.password,
    };
    let suffix = args.suffix.unwrap_or_else(|| rand::random_range(0..100));
    let request = form.to_request(suffix)?;
    let body = api.register(&request).await?;
    eprintln!("registered as {}", request.username);
    print_json(&body)
}

async fn run_login(api: &Api, form: LoginForm) -> Result<(), CliError> {
    let request = form.to_request()?;
    let body = api.login(&request).await?;
    if !api.session().snapshot().has_token() {
        return Err(CliError::NoTokenIssued);
    }
    tracing::info!(email = %request.email, "logged in");
    print_json(&body)
}

async fn run_check_token(api: &Api) -> Result<(), CliError> {
    match api.check_token().await {
        TokenCheck::Valid { username } => {
            println!("valid: {username}");
            Ok(())
        }
        TokenCheck::Missing => Err(CliError::NotLoggedIn),
        TokenCheck::Invalid => {
            api.session().logout();
            Err(CliError::InvalidToken)
        }
        TokenCheck::Unreachable(e) => Err(e.into()),
    }
}

async fn run_events(api: &Api, events: EventsCommand) -> Result<(), CliError> {
    match events.command {
        EventsSubcommand::List => print_json(&serde_json::to_value(api.my_events().await?)?),
        EventsSubcommand::Create { title, description, start, end, location } => {
            let event = validate_new_event(&NewEvent {
                title,
                description,
                start_date_time: start,
                end_date_time: end,
                location,
            })?;
            print_json(&serde_json::to_value(api.create_event(&event).await?)?)
        }
        EventsSubcommand::Delete { event_id } => {
            api.delete_event(event_id).await?;
            println!("deleted event {event_id}");
            Ok(())
        }
        EventsSubcommand::Details { event_id } => print_json(&serde_json::to_value(api.event_details(event_id).await?)?),
    }
}

async fn run_invite(api: &Api, invite: InviteCommand) -> Result<(), CliError> {
    match invite.command {
        InviteSubcommand::Send { guest, phone } => {
            let form = InviteForm {
                guest_name: guest.name,
                guest_email: guest.email.unwrap_or_default(),
                guest_phone: phone.unwrap_or_default(),
            };
            let created = invitations::send_invitation(api, guest.event_id, &form).await?;
            let link = invitations::invitation_link(guest.event_id, &created.guest_name, created.guest_email.as_deref());
            eprintln!("{}; link: {link}", invitations::INVITATION_SENT);
            print_json(&serde_json::to_value(created)?)
        }
        InviteSubcommand::List { event_id } => print_json(&serde_json::to_value(api.list_invitations(event_id).await?)?),
        InviteSubcommand::Info { guest } => {
            let lookup = guest_lookup(&guest);
            print_json(&serde_json::to_value(api.invitation_info(&lookup).await?)?)
        }
        InviteSubcommand::Respond { guest, status } => run_respond(api, &guest, &status).await,
        InviteSubcommand::Delete { invitation_id } => {
            api.delete_invitation(invitation_id).await?;
            println!("deleted invitation {invitation_id}");
            Ok(())
        }
    }
}

fn signed_in_label(user: &UserProfile) -> String {
    let username = user.username().unwrap_or("unknown user");
    match user.email() {
        Some(email) => format!("{username} <{email}>"),
        None => username.to_owned(),
    }
}

fn guest_lookup(guest: &GuestArgs) -> InvitationLookup {
    InvitationLookup::new(guest.event_id, &guest.name, guest.email.as_deref())
}

/// Guests may only choose YES, NO, or MAYBE.
fn parse_choice(raw: &str) -> Result<RsvpStatus, CliError> {
    RsvpStatus::parse(raw)
        .filter(|status| rsvp::CHOICES.contains(status))
        .ok_or_else(|| CliError::InvalidStatus(raw.to_owned()))
}

async fn run_respond(api: &Api, guest: &GuestArgs, raw_status: &str) -> Result<(), CliError> {
    let status = parse_choice(raw_status)?;
    let lookup = guest_lookup(guest);
    let current = api.invitation_info(&lookup).await?.invitation;

    let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    let updated = rsvp::submit(api, &current, status, &now).await?;
    eprintln!("{}", rsvp::updated_message(status));

    let outcome = rsvp::confirm(api, &lookup, &updated).await;
    if let Some(message) = outcome.message() {
        eprintln!("{message}");
    }
    let shown = match &outcome {
        RsvpOutcome::Confirmed(server) | RsvpOutcome::Diverged(server) => server,
        RsvpOutcome::Unverified => &updated,
    };
    print_json(&serde_json::to_value(shown)?)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;
