use std::{future::Future, sync::Arc};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use reservation_core::{
    calendar::upcoming_days_from_today, validate, SimulatedSubmitter, SubmissionController,
    SubmitOutcome,
};
use shared::{
    domain::{Field, PartySize, ReservationDraft, TimeSlot},
    protocol::SubmissionFailure,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod report;

use config::{load_settings, Settings};
use report::{render_field_errors, BookingReport};

#[derive(Parser, Debug)]
#[command(name = "reserve", about = "Restaurant table reservations")]
struct Cli {
    /// Overrides the simulated booking latency.
    #[arg(long)]
    submit_delay_ms: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List seating times.
    Slots,
    /// List party size choices.
    PartySizes,
    /// List bookable days starting today.
    Dates {
        #[arg(long)]
        days: Option<u32>,
    },
    /// Check a draft without booking it.
    Validate(DraftArgs),
    /// Validate and book a reservation.
    Book(DraftArgs),
}

#[derive(Args, Debug)]
struct DraftArgs {
    #[arg(long, default_value = "")]
    date: String,
    #[arg(long, default_value = "")]
    time: String,
    #[arg(long, default_value = "")]
    party_size: String,
    #[arg(long, default_value = "")]
    first_name: String,
    #[arg(long, default_value = "")]
    last_name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    special_requests: String,
    /// Print the outcome as JSON.
    #[arg(long)]
    json: bool,
}

impl DraftArgs {
    fn fields(&self) -> [(Field, &str); 8] {
        [
            (Field::Date, self.date.as_str()),
            (Field::Time, self.time.as_str()),
            (Field::PartySize, self.party_size.as_str()),
            (Field::SpecialRequests, self.special_requests.as_str()),
            (Field::FirstName, self.first_name.as_str()),
            (Field::LastName, self.last_name.as_str()),
            (Field::Email, self.email.as_str()),
            (Field::Phone, self.phone.as_str()),
        ]
    }

    fn to_draft(&self) -> ReservationDraft {
        let mut draft = ReservationDraft::default();
        for (field, value) in self.fields() {
            draft.set(field, value.to_string());
        }
        draft
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings();
    if let Some(delay_ms) = cli.submit_delay_ms {
        settings.submit_delay_ms = delay_ms;
    }

    let filter =
        EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Slots => {
            for slot in TimeSlot::ALL {
                println!("{slot}");
            }
        }
        Command::PartySizes => {
            for option in PartySize::options() {
                println!("{}\t{}", option.value, option.label);
            }
        }
        Command::Dates { days } => {
            for day in upcoming_days_from_today(days.unwrap_or(settings.booking_horizon_days)) {
                println!("{day}");
            }
        }
        Command::Validate(args) => validate_draft(&args)?,
        Command::Book(args) => book(&args, &settings).await?,
    }

    Ok(())
}

fn validate_draft(args: &DraftArgs) -> Result<()> {
    check_catalogue(args)?;
    let errors = validate(&args.to_draft());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&errors)?);
    } else if errors.is_empty() {
        println!("ok");
    } else {
        println!("{}", render_field_errors(&errors));
    }

    if !errors.is_empty() {
        bail!("reservation has {} invalid field(s)", errors.len());
    }
    Ok(())
}

/// Rejects `--time` and `--party-size` values the pickers never offer.
/// Blank values are left for the validator to report.
fn check_catalogue(args: &DraftArgs) -> Result<()> {
    if !args.time.is_empty() && TimeSlot::parse(&args.time).is_none() {
        bail!("unknown time {:?}; see `reserve slots`", args.time);
    }
    if !args.party_size.is_empty() && PartySize::parse(&args.party_size).is_none() {
        bail!(
            "unknown party size {:?}; see `reserve party-sizes`",
            args.party_size
        );
    }
    Ok(())
}

async fn book(args: &DraftArgs, settings: &Settings) -> Result<()> {
    let interrupted = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("ctrl-c handler unavailable, booking cannot be cancelled: {err}");
            std::future::pending::<()>().await;
        }
    };
    book_until(args, settings, interrupted).await?.into_result()
}

/// Books the draft, cancelling the submission if `cancel` resolves first.
/// Each outcome is printed as it happens and returned as a report.
async fn book_until(
    args: &DraftArgs,
    settings: &Settings,
    cancel: impl Future<Output = ()>,
) -> Result<BookingReport> {
    check_catalogue(args)?;
    let submitter = Arc::new(SimulatedSubmitter::new(settings.submit_delay()));
    let mut controller = SubmissionController::new(submitter);
    for (field, value) in args.fields() {
        controller
            .set_field(field, value)
            .with_context(|| format!("failed to set {field}"))?;
    }

    if let SubmitOutcome::Rejected(errors) = controller.submit()? {
        let report = BookingReport::invalid(&errors);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", render_field_errors(&errors));
        }
        return Ok(report);
    }

    if !args.json {
        println!("Confirming Reservation...");
    }
    info!(
        delay_ms = settings.submit_delay_ms,
        "waiting for booking confirmation"
    );

    let finished = tokio::select! {
        phase = controller.wait() => Some(phase?),
        () = cancel => None,
    };
    let phase = match finished {
        Some(phase) => phase,
        None => {
            controller.cancel()?;
            controller.phase()
        }
    };

    if let Some(view) = controller.confirmation() {
        let report = BookingReport::confirmed(&view);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("Reservation Confirmed!");
            println!("{view}");
        }
        return Ok(report);
    }

    let err = controller
        .workflow()
        .submission_error()
        .with_context(|| format!("booking ended in {phase} without an error"))?;
    let report = BookingReport::failed(SubmissionFailure::from(err));
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(report)
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
