use hr_copilot_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("hr-copilot error: {err}");
        std::process::exit(1);
    }
}
