use clap::{Parser, ValueEnum};
use gpagrip_core::UngradedPolicy;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "gpagrip")]
#[command(about = "GpaGrip - Calculate your Grade Point Average (out of 4.0) in the terminal")]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Accept typed credit hours in addition to the fixed choices (overrides config)
    #[arg(long)]
    pub allow_custom_credits: bool,

    /// How to treat courses with credit but no grade yet (overrides config)
    #[arg(long, value_enum)]
    pub ungraded: Option<UngradedArg>,
}

/// CLI spelling of [`UngradedPolicy`]
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UngradedArg {
    CountAsZero,
    Exclude,
}

impl From<UngradedArg> for UngradedPolicy {
    fn from(arg: UngradedArg) -> Self {
        match arg {
            UngradedArg::CountAsZero => UngradedPolicy::CountAsZero,
            UngradedArg::Exclude => UngradedPolicy::Exclude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let args = CliArgs::parse_from(["gpagrip"]);
        assert_eq!(args.config, None);
        assert!(!args.allow_custom_credits);
        assert_eq!(args.ungraded, None);
    }

    #[test]
    fn test_cli_parse_with_config() {
        let args = CliArgs::parse_from(["gpagrip", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_cli_parse_overrides() {
        let args = CliArgs::parse_from([
            "gpagrip",
            "--allow-custom-credits",
            "--ungraded",
            "exclude",
        ]);
        assert!(args.allow_custom_credits);
        assert_eq!(args.ungraded, Some(UngradedArg::Exclude));
        assert_eq!(UngradedPolicy::from(UngradedArg::Exclude), UngradedPolicy::Exclude);
    }

    #[test]
    fn test_cli_rejects_unknown_policy() {
        assert!(CliArgs::try_parse_from(["gpagrip", "--ungraded", "ignore"]).is_err());
    }
}
