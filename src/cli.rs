use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "envoy-pvoutput",
    version,
    about = "Poll an Enphase Envoy for energy readings and upload them to PVOutput.org"
)]
pub struct Cli {
    /// IP address or hostname of the Envoy to retrieve data from
    #[arg(long, env = "ENVOYIP")]
    pub envoy_ip: String,

    /// Port of the Envoy to retrieve data from
    #[arg(long, env = "ENVOYPORT", default_value_t = 80)]
    pub envoy_port: u16,

    /// PVOutput.org API key to use to post data
    #[arg(long, env = "PVOUTPUTAPIKEY")]
    pub pvoutput_api_key: String,

    /// PVOutput.org system ID for the Envoy
    #[arg(long, env = "PVOUTPUTSYSTEMID")]
    pub pvoutput_system_id: u32,

    /// Polling interval in seconds
    #[arg(long, env = "POLLINTERVALSECONDS", default_value_t = 300)]
    pub poll_interval_seconds: u64,

    /// IANA timezone for upload timestamps. If unset, same as current local timezone
    #[arg(long, env = "TIMEZONE")]
    pub timezone: Option<String>,
}
