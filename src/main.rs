use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match event_calendar::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("event-calendar: {}", e);
            ExitCode::FAILURE
        }
    }
}
