//! Command-line driver for the landing page login and demo-request flows.
//!
//! Each subcommand runs one submission through the same controllers the page
//! uses. Toasts, inline field errors, and redirects are emitted as structured
//! log events; set `RUST_LOG=info` to see them.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]

use std::ffi::OsString;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use landing::domain::{ContactForm, FieldErrors, LoginForm, SubmitOutcome};
use landing::outbound::{NavigationHistory, TracingNotifier};
use landing::wiring::{build_contact_controller, build_login_controller};
use landing::{LandingSettings, SiteConfig};

#[derive(Debug, Parser)]
#[command(
    name = "landing",
    about = "Exercise the Class Management System landing page forms",
    version
)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Submit the login modal.
    Login {
        /// Account email.
        #[arg(long = "email", value_name = "EMAIL")]
        email: String,
        /// Account password.
        #[arg(long = "password", value_name = "PASSWORD")]
        password: String,
    },
    /// Submit the "Request a Demo" form.
    Contact {
        /// Full name.
        #[arg(long = "name", value_name = "NAME")]
        name: String,
        /// School or institute name.
        #[arg(long = "organization", value_name = "ORG")]
        organization: String,
        /// Contact email.
        #[arg(long = "email", value_name = "EMAIL")]
        email: String,
        /// Contact phone number.
        #[arg(long = "phone", value_name = "PHONE")]
        phone: String,
        /// Expected number of students and staff.
        #[arg(long = "expected-users", value_name = "TEXT")]
        expected_users: Option<String>,
        /// Requirements message.
        #[arg(long = "message", value_name = "TEXT")]
        message: String,
    },
    /// Log the sales contact details and dashboard routes.
    Info,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::try_parse()?;
    let settings = LandingSettings::load_from_iter([OsString::from("landing")])
        .wrap_err("failed to load landing settings")?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build tokio runtime")?;
    runtime.block_on(run(args.command, &settings, &SiteConfig::default()))
}

async fn run(command: Command, settings: &LandingSettings, site: &SiteConfig) -> Result<()> {
    match command {
        Command::Login { email, password } => {
            login(settings, site, &LoginForm::new(email, password)).await
        }
        Command::Contact {
            name,
            organization,
            email,
            phone,
            expected_users,
            message,
        } => {
            let form = ContactForm {
                name,
                organization,
                email,
                phone,
                expected_users,
                message,
            };
            contact(settings, form).await
        }
        Command::Info => {
            describe(site);
            Ok(())
        }
    }
}

async fn login(settings: &LandingSettings, site: &SiteConfig, form: &LoginForm) -> Result<()> {
    let navigator = Arc::new(NavigationHistory::default());
    let controller =
        build_login_controller(settings, site, Arc::new(TracingNotifier), navigator.clone())
            .wrap_err("failed to assemble login flow")?;

    match controller.submit(form).await {
        SubmitOutcome::Completed(success) => {
            match navigator.current() {
                Some(path) => info!(redirect = %path, "login complete"),
                None => info!(recognised = success.identity.is_some(), "login complete"),
            }
            Ok(())
        }
        SubmitOutcome::Invalid(errors) => Err(report_invalid("login", &errors)),
        SubmitOutcome::Failed(error) => Err(eyre!(error).wrap_err("login failed")),
        SubmitOutcome::Busy => Err(eyre!("login already in flight")),
        SubmitOutcome::Closed => Err(eyre!("login modal is closed")),
    }
}

async fn contact(settings: &LandingSettings, form: ContactForm) -> Result<()> {
    let controller = build_contact_controller(settings, Arc::new(TracingNotifier))
        .wrap_err("failed to assemble contact flow")?;

    match controller.submit(form).await {
        SubmitOutcome::Completed(()) => {
            info!(submitted = controller.is_submitted(), "demo request complete");
            Ok(())
        }
        SubmitOutcome::Invalid(errors) => Err(report_invalid("contact", &errors)),
        SubmitOutcome::Failed(error) => Err(eyre!(error).wrap_err("demo request failed")),
        SubmitOutcome::Busy => Err(eyre!("demo request already in flight")),
        SubmitOutcome::Closed => Err(eyre!("demo request form is not showing")),
    }
}

fn report_invalid(form: &str, errors: &FieldErrors) -> color_eyre::Report {
    for (field, message) in errors.iter() {
        warn!(form, field = %field, message, "field rejected");
    }
    eyre!("{form} form has {} invalid field(s): {errors}", errors.len())
}

fn describe(site: &SiteConfig) {
    info!(
        product = site.name,
        company = site.company,
        tagline = site.tagline,
        email = site.contact.email,
        phone = site.contact.phone,
        phone_alt = site.contact.phone_alt,
        website = site.contact.website,
        "site details"
    );
    for (role, path) in site.dashboards.iter() {
        info!(role = %role, dashboard = %path, "dashboard route");
    }
}
