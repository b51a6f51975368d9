use std::fs;
use std::path::PathBuf;

use anyhow::{format_err, Error};
use serde::Deserialize;
use structopt::StructOpt;

use crate::theme::Theme;

pub fn resolve_opts() -> Opts {
    let mut opts = get_cli_opts();

    if let Ok(config_opts) = get_config_opts() {
        opts = merge(opts, config_opts);
    }

    opts
}

fn get_cli_opts() -> Opts {
    Opts::from_args()
}

fn get_config_opts() -> Result<Opts, Error> {
    let config_dir = dirs_next::config_dir()
        .ok_or_else(|| format_err!("Could not get config directory"))?
        .join("avgrs");

    let config_path = config_dir.join("config.yml");

    let config = fs::read_to_string(&config_path)?;

    let opts = serde_yaml::from_str(&config)?;

    Ok(opts)
}

/// CLI flags win over the config file; flags are additive.
fn merge(mut opts: Opts, config_opts: Opts) -> Opts {
    // Options
    opts.service_id = opts.service_id.or(config_opts.service_id);
    opts.template_id = opts.template_id.or(config_opts.template_id);
    opts.public_key = opts.public_key.or(config_opts.public_key);
    opts.to_email = opts.to_email.or(config_opts.to_email);
    opts.log_file = opts.log_file.or(config_opts.log_file);
    opts.theme = opts.theme.or(config_opts.theme);

    // Flags
    opts.hide_help = opts.hide_help || config_opts.hide_help;

    opts
}

#[derive(Debug, StructOpt, Clone, Deserialize, Default)]
#[structopt(
    name = "avgrs",
    about = "Averaging-down planner and consultation desk in your terminal 📉",
    version = env!("CARGO_PKG_VERSION")
)]
#[serde(default)]
pub struct Opts {
    // Options
    //
    #[structopt(short = "s", long)]
    /// Service id of the transactional email account delivering consultation requests
    pub service_id: Option<String>,
    #[structopt(short = "t", long)]
    /// Template id for the consultation request email
    pub template_id: Option<String>,
    #[structopt(short = "k", long)]
    /// Public key authorizing sends on the email account
    pub public_key: Option<String>,
    #[structopt(long)]
    /// Fixed recipient address for consultation requests
    pub to_email: Option<String>,
    #[structopt(long, parse(from_os_str))]
    /// Append structured logs to this file
    pub log_file: Option<PathBuf>,

    // Flags
    //
    #[structopt(long)]
    /// Hide help icon in top right
    pub hide_help: bool,

    #[structopt(skip)]
    pub theme: Option<Theme>,
}

impl Opts {
    /// All three credential strings are required before any send is
    /// attempted; `to_email` stays optional.
    pub fn email_credentials(&self) -> Option<Credentials> {
        Some(Credentials {
            service_id: self.service_id.clone()?,
            template_id: self.template_id.clone()?,
            public_key: self.public_key.clone()?,
            to_email: self.to_email.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub to_email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_options_win_over_config() {
        let cli = Opts {
            service_id: Some("cli_service".into()),
            ..Opts::default()
        };
        let config = Opts {
            service_id: Some("config_service".into()),
            template_id: Some("config_template".into()),
            ..Opts::default()
        };

        let merged = merge(cli, config);

        assert_eq!(merged.service_id.as_deref(), Some("cli_service"));
        assert_eq!(merged.template_id.as_deref(), Some("config_template"));
    }

    #[test]
    fn flags_are_additive() {
        let cli = Opts::default();
        let config = Opts {
            hide_help: true,
            ..Opts::default()
        };

        assert!(merge(cli, config).hide_help);
    }

    #[test]
    fn credentials_require_all_three_ids() {
        let opts = Opts {
            service_id: Some("service".into()),
            template_id: Some("template".into()),
            ..Opts::default()
        };

        assert!(opts.email_credentials().is_none());

        let opts = Opts {
            public_key: Some("key".into()),
            ..opts
        };

        let credentials = opts.email_credentials().unwrap();
        assert_eq!(credentials.service_id, "service");
        assert_eq!(credentials.to_email, None);
    }

    #[test]
    fn config_file_shape_parses() {
        let opts: Opts = serde_yaml::from_str(
            r#"
service_id: service_abc
template_id: template_xyz
public_key: public_123
to_email: desk@example.com
hide_help: true
theme:
  profit: '#33FF33'
"#,
        )
        .unwrap();

        assert_eq!(opts.service_id.as_deref(), Some("service_abc"));
        assert!(opts.hide_help);
        assert!(opts.theme.is_some());
    }
}
