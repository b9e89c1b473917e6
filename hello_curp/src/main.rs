mod greeting;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use greeting::{get_user_name, greet};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Name to greet; guessed from the environment when omitted
    #[clap(short, long)]
    user: Option<String>,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let guessed = match args.user {
        Some(_) => None,
        None => get_user_name(),
    };
    debug!("user: {:?}, guessed: {:?}", args.user, guessed);
    println!("{}", greet(args.user.as_deref(), guessed.as_deref()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_is_optional() {
        let args = Args::try_parse_from(["hello_curp"]).unwrap();
        assert_eq!(args.user, None);
    }

    #[test]
    fn long_and_short_user() {
        let args = Args::try_parse_from(["hello_curp", "--user", "dave"]).unwrap();
        assert_eq!(args.user.as_deref(), Some("dave"));
        let args = Args::try_parse_from(["hello_curp", "-u", "erin"]).unwrap();
        assert_eq!(args.user.as_deref(), Some("erin"));
    }
}
