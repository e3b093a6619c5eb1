use clap::Parser;
use lead_relay::config::cli::{Command, ConsentAction, SubmitArgs};
use lead_relay::core::countdown::CountdownStatus;
use lead_relay::core::reviews::ReviewPager;
use lead_relay::core::ConfigProvider;
use lead_relay::domain::model::{self, Tariff, TrackingEvent};
use lead_relay::utils::error::ErrorSeverity;
use lead_relay::utils::{logger, telemetry, validation::Validate};
use lead_relay::{
    CliConfig, CookieConsent, FileConsentStore, LandingPage, LeadError, RelayConfig,
    SubmitOutcome, TelegramSink, TerminalView, TracingAnalytics,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting lead-relay");
    tracing::debug!("Loading configuration from: {}", cli.config);

    let mut config = match RelayConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Some(api_base) = &cli.api_base {
        config.telegram.api_base = api_base.clone();
        tracing::info!("🔧 API base overridden to: {}", api_base);
    }

    let checked = if cli.command.uses_messaging() {
        config.validate()
    } else {
        config.validate_local()
    };

    if let Err(e) = checked {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let consent = CookieConsent::new(FileConsentStore::new(config.consent_path()));
    let analytics = Arc::new(TracingAnalytics::with_consent(!consent.should_show_banner()));
    telemetry::install_panic_reporter(analytics.clone());

    let result = match cli.command.clone() {
        Command::Submit(args) => submit(args, &config, analytics.clone()).await,
        Command::CheckConfig => {
            display_config_summary(&config);
            Ok(())
        }
        Command::Consent { action } => handle_consent(action, &consent, analytics.as_ref()),
        Command::Countdown => show_countdown(&config),
        Command::Reviews { page } => {
            show_reviews(&config, page);
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        telemetry::report_unhandled(analytics.as_ref(), &e);

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 2,      // rejected input
            ErrorSeverity::Medium => 3,   // delivery, worth resubmitting
            ErrorSeverity::High => 1,     // configuration
            ErrorSeverity::Critical => 4, // system
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn submit(
    args: SubmitArgs,
    config: &RelayConfig,
    analytics: Arc<TracingAnalytics>,
) -> Result<(), LeadError> {
    let tariff: Tariff = args.tariff.parse()?;
    let sink = TelegramSink::new(config)?;
    let view = TerminalView::new();
    let mut page = LandingPage::new(sink, analytics);

    page.open_modal(&view, tariff);
    for (name, value) in [
        (model::FIRST_NAME, &args.first_name),
        (model::LAST_NAME, &args.last_name),
        (model::EMAIL, &args.email),
        (model::PHONE, &args.phone),
        (model::COUNTRY, &args.country),
        (model::EXPERIENCE, &args.experience),
        (model::MOTIVATION, &args.motivation),
    ] {
        view.set_value(name, value);
    }

    page.track_event(TrackingEvent::new("lead_submit").with("tariff", tariff.key()));

    match page.submit(&view).await {
        SubmitOutcome::Delivered => Ok(()),
        SubmitOutcome::Rejected(errors) => Err(LeadError::ValidationError(errors)),
        SubmitOutcome::Failed(e) => Err(e),
        SubmitOutcome::Ignored => Ok(()),
    }
}

fn handle_consent(
    action: ConsentAction,
    consent: &CookieConsent<FileConsentStore>,
    analytics: &TracingAnalytics,
) -> Result<(), LeadError> {
    match action {
        ConsentAction::Status => {
            match consent.decision() {
                Some(decision) => println!("Cookie consent: {}", decision.as_str()),
                None => println!("Cookie consent: not decided"),
            }
            println!("Show banner: {}", consent.should_show_banner());
        }
        ConsentAction::Accept => {
            consent.accept(analytics)?;
            println!("✅ Cookie consent accepted");
        }
        ConsentAction::Decline => {
            consent.decline()?;
            println!("Cookie consent declined");
        }
    }
    Ok(())
}

fn show_countdown(config: &RelayConfig) -> Result<(), LeadError> {
    match config.countdown()?.status() {
        CountdownStatus::Running(parts) => println!(
            "{} days {:02}:{:02}:{:02}",
            parts.days, parts.hours, parts.minutes, parts.seconds
        ),
        CountdownStatus::Started => println!("Навчання розпочалось!"),
    }
    Ok(())
}

fn show_reviews(config: &RelayConfig, clicks: usize) {
    let reviews = config.reviews();
    let pager = ReviewPager::after_clicks(clicks, reviews.len());

    for review in &reviews[pager.visible_extra(reviews.len())] {
        println!(
            "{} {} ({}): \"{}\"",
            "★".repeat(review.stars as usize),
            review.name,
            review.location,
            review.text
        );
    }

    if pager.has_more(reviews.len()) {
        println!("More reviews available with --page {}", clicks + 1);
    }
}

fn display_config_summary(config: &RelayConfig) {
    println!("✅ Configuration is valid");
    println!("   API base:      {}", config.api_base());
    println!("   Chat id:       {}", config.chat_id());
    println!(
        "   Timeout:       {}",
        config
            .request_timeout()
            .map(|t| format!("{}s", t.as_secs()))
            .unwrap_or_else(|| "transport default".to_string())
    );
    println!("   Brand:         {}", config.brand());
    println!("   UTC offset:    {} min", config.utc_offset_minutes());
    println!("   Countdown:     {}", config.page.countdown_target);
    println!("   Reviews:       {}", config.reviews().len());
    println!("   Consent file:  {}", config.consent_path());
}
