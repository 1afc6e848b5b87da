use clap::Parser;
use std::env;

#[tokio::main]
async fn main() {
    env_logger::init();

    let raw_args: Vec<String> = env::args().collect();
    if raw_args.get(1).map(|s| s.as_str()) == Some("serve") {
        let port = raw_args
            .get(2)
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);
        if let Err(e) = rentbuy::api::run_http_server(port).await {
            eprintln!("Server error: {e}");
            std::process::exit(1);
        }
        return;
    }

    let cli = rentbuy::api::Cli::parse();
    match rentbuy::api::render_cli(&cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Invalid input: {e}");
            std::process::exit(1);
        }
    }
}
