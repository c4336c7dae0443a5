use std::{sync::Arc, time::Instant};

use anyhow::Result;
use chrono::NaiveDate;
use rolodex_core::{
    ControllerEvent, FeedClient, NeoCard, SelectionController, Settings, SuccessIndicator,
};
use shared::domain::{feed_date_string, ResultSet};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = Settings::from_env();
    let controller = SelectionController::new(Arc::new(FeedClient::new(settings)));

    println!("Welcome to the NEO Rolodex!");
    println!("Check out these asteroids and comets that are whizzing by our planet...");
    println!();
    println!("Enter a date as YYYY-MM-DD, an empty line for today, or q to quit.");

    let mut events = controller.subscribe_events();
    tokio::spawn(async move {
        let mut indicator = SuccessIndicator::new();
        let mut current: Option<ResultSet> = None;
        while let Ok(event) = events.recv().await {
            match event {
                ControllerEvent::ResultsReplaced { results } => current = Some(results),
                ControllerEvent::ScrollToTop => {
                    if let Some(results) = &current {
                        render(results, indicator.is_visible(Instant::now()));
                    }
                }
                ControllerEvent::IndicatorTriggered => {
                    indicator.trigger(Instant::now());
                    println!();
                    println!("[feed updated ✓]");
                }
            }
        }
    });

    controller.initialize().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            break;
        }
        if line.is_empty() {
            controller.select_date(None).await;
            continue;
        }
        match NaiveDate::parse_from_str(line, "%Y-%m-%d") {
            Ok(date) => controller.select_date(Some(date)).await,
            Err(_) => println!("Could not read '{line}' as a date. Use YYYY-MM-DD."),
        }
    }

    Ok(())
}

fn render(results: &ResultSet, recently_updated: bool) {
    println!();
    if recently_updated {
        println!("== {} ✓ ==", feed_date_string(results.date));
    } else {
        println!("== {} ==", feed_date_string(results.date));
    }
    if results.is_empty() {
        println!("No near-earth objects reported for this day.");
    }
    for record in &results.records {
        let card = NeoCard::from_record(record);
        println!();
        println!("{}", card.title);
        for line in &card.lines {
            println!("  {line}");
        }
    }
}
