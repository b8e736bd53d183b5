use std::time::Duration;

use ads1115::{Address, Gain, Settings};

/// Converters expected on the bus. Missing ones are skipped at startup.
pub static ADDRESSES: [Address; 2] = [Address::Gnd, Address::Vdd];

/// Gain applied to every converter after initialization.
pub static GAIN: Gain = Gain::V4_096;

/// Pause between sweeps over all channels.
pub static SAMPLE_INTERVAL: Duration = Duration::from_millis(500);

/// Polling behaviour for the driver. 128 SPS converts in under 8ms, so
/// checking every 100us keeps the bus quiet without adding latency.
pub const SETTINGS: Settings = Settings {
    poll_retries: 200,
    poll_interval_us: 100,
    register_delay_us: 1000,
    strict_polling: true,
};

/// Filter used when `RUST_LOG` is unset.
pub static DEFAULT_LOG_FILTER: &str = "info";
