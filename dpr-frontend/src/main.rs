use std::fs::File;
use std::str::FromStr;

use dpr_frontend::fixtures;
use dpr_frontend::{SortConfig, SubmitDecision, TableSorts, UploadConfig, UploadSpinner};
use pagedom::{Event, Selector, inner_html};
use simplelog::{Config, LevelFilter, WriteLogger};

const LOG_ENV: &str = "DPR_FRONTEND_LOG";

fn log_level() -> LevelFilter {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|level| LevelFilter::from_str(&level).ok())
        .unwrap_or(LevelFilter::Debug)
}

fn main() {
    let log_file = File::create("dpr-frontend.log").expect("Failed to create log file");
    WriteLogger::init(log_level(), Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut page = fixtures::submissions_page();
    let sorts = TableSorts::attach(&mut page, SortConfig::default());
    page.content_loaded();

    println!("Wired {} sort controls", sorts.borrow().controls().len());

    let Some(button) = sorts
        .borrow()
        .control_for_column("upload-date")
        .map(|control| control.button.clone())
    else {
        eprintln!("Error: no control for upload-date");
        return;
    };

    for _ in 0..2 {
        match sorts.borrow_mut().handle_event(&mut page, &Event::click(&button)) {
            Ok(Some(outcome)) => println!("{}", outcome.announcement),
            Ok(None) => println!("Click was not handled"),
            Err(e) => eprintln!("Error: {}", e),
        }
        if let Some(body) = page.query(&Selector::tag("tbody")) {
            println!("{}", inner_html(body));
        }
    }

    let mut upload = fixtures::upload_page(Some("submission.xml"));
    let spinner = UploadSpinner::new(UploadConfig::default());
    match spinner.handle_event(&mut upload, &Event::submit(&spinner.config().form_id)) {
        Ok(Some(SubmitDecision::Resubmit { form })) => {
            if let Err(e) = spinner.complete_submit(&mut upload) {
                eprintln!("Error: {}", e);
            }
            println!("Posted #{form}");
            println!("{}", inner_html(upload.body()));
        }
        Ok(_) => println!("Submitted natively"),
        Err(e) => eprintln!("Error: {}", e),
    }
}
