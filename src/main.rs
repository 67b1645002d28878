use clap::Parser;
use saturday_quiz::Config;

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    let config = Config::parse();

    if let Err(e) = saturday_quiz::run(config).await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
