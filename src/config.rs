use std::fmt;
use std::time::Duration;
use clap::Parser;
use crate::enums::command::Command;
use crate::repositories::banktopup_repository::ENDPOINT;

#[derive(Parser)]
#[command(name = "banktopup", version, about = "Command-line client for the bank top-up API")]
pub struct AppConfig {
    //Empty until the device has been registered
    #[arg(long, env, default_value = "")]
    pub device_id: String,

    #[arg(long, env)]
    pub account_no: String,

    #[arg(long, env, hide_env_values = true)]
    pub pin: String,

    #[arg(long, env, hide_env_values = true)]
    pub license: String,

    #[arg(long, env, default_value = ENDPOINT)]
    pub base_url: String,

    #[arg(long, env)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("device_id", &self.device_id)
            .field("account_no", &self.account_no)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("command", &self.command)
            .finish_non_exhaustive()
    }
}

impl AppConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
