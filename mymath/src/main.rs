use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// Number to compute the factorial of
    n: String,
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
    debug!("input: {}", args.n);
    let r = mymath::parse_input(&args.n)?;
    debug!("result bits: {}", r.bits());
    println!("{}", r);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_negative_positional() {
        let args = Args::try_parse_from(["mymath", "-5"]).unwrap();
        assert_eq!(args.n, "-5");
    }

    #[test]
    fn requires_n() {
        assert!(Args::try_parse_from(["mymath"]).is_err());
    }
}
