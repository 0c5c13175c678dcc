use anyhow::Context;
use interval_merge::{logging, merge};
use tracing::info;

const DEFAULT_INPUT: &str = "[25,30] [2,19] [14,23] [4,8]";

/// Join the arguments with single spaces, or fall back to the reference input
fn input_from_args(args: impl IntoIterator<Item = String>) -> String {
    let args: Vec<String> = args.into_iter().collect();
    if args.is_empty() {
        DEFAULT_INPUT.to_string()
    } else {
        args.join(" ")
    }
}

fn run(args: impl IntoIterator<Item = String>) -> anyhow::Result<String> {
    let input = input_from_args(args);
    info!(%input, "merging intervals");
    merge(&input).context("failed to merge intervals")
}

fn main() -> anyhow::Result<()> {
    logging::init()?;

    let output = run(std::env::args().skip(1))?;
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn no_arguments_use_reference_input() {
        assert_eq!(input_from_args(args(&[])), DEFAULT_INPUT);
        assert_eq!(run(args(&[])).unwrap(), "[2,23] [25,30]");
    }

    #[test]
    fn arguments_are_joined_with_spaces() {
        assert_eq!(input_from_args(args(&["[2,7]", "[4,10]"])), "[2,7] [4,10]");
        assert_eq!(run(args(&["[2,7]", "[4,10]"])).unwrap(), "[2,10]");
    }

    #[test]
    fn single_quoted_argument_is_used_as_is() {
        assert_eq!(run(args(&["[2,5] [10,15]"])).unwrap(), "[2,5] [10,15]");
    }

    #[test]
    fn invalid_input_is_an_error() {
        let err = run(args(&["[30,25]"])).unwrap_err();
        let cause = err.downcast_ref::<interval_merge::ParseError>().unwrap();
        assert!(cause.is_ordering());
        assert_eq!(err.to_string(), "failed to merge intervals");
    }
}
