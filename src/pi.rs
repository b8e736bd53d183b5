//! Sample every single-ended input of the ADS1115s on a Raspberry Pi's I2C bus.

use std::cell::RefCell;

use ads1115::{Ads1115, Error, Mux};
use embedded_hal_bus::i2c::RefCellDevice;
use rppal::hal::Delay;
use rppal::i2c::I2c;
use tracing_subscriber::EnvFilter;

mod constants;
mod observer;

use observer::TracingObserver;

type Converter<'a> = Ads1115<RefCellDevice<'a, I2c>, Delay, TracingObserver>;

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_FILTER)),
        )
        .init();

    let i2c = RefCell::new(I2c::new()?);

    let mut converters: Vec<Converter<'_>> = Vec::new();

    for address in constants::ADDRESSES {
        let addr = address.into_addr();

        let mut adc = Ads1115::new(RefCellDevice::new(&i2c), Delay::new(), address)
            .with_settings(constants::SETTINGS)
            .with_observer(TracingObserver::new(addr));

        if !adc.test_connection() {
            tracing::warn!(addr, "no converter responding, skipping");
            continue;
        }

        adc.initialize().map_err(describe)?;
        adc.set_gain(constants::GAIN).map_err(describe)?;
        adc.show_config_register().map_err(describe)?;

        let rate = adc.get_rate().map_err(describe)?;

        tracing::info!(
            addr,
            full_scale_mv = adc.get_full_scale(constants::GAIN),
            samples_per_second = rate.samples_per_second(),
            "converter ready"
        );

        converters.push(adc);
    }

    anyhow::ensure!(!converters.is_empty(), "no ADS1115 found on the bus");

    loop {
        for adc in converters.iter_mut() {
            let readings = (0..4)
                .filter_map(|channel| Mux::single_ended(channel).map(|mux| (channel, mux)));

            for (channel, mux) in readings {
                match adc.get_conversion_for(mux) {
                    Ok(raw) => {
                        let mv = f32::from(raw) * adc.get_mv_per_count();
                        tracing::info!(addr = adc.address(), channel, raw, mv, "sample");
                    }
                    Err(Error::NotReady) => {
                        tracing::warn!(addr = adc.address(), channel, "conversion timed out");
                    }
                    Err(e) => return Err(describe(e)),
                }
            }
        }

        std::thread::sleep(constants::SAMPLE_INTERVAL);
    }
}

fn describe<E: core::fmt::Debug>(e: Error<E>) -> anyhow::Error {
    anyhow::anyhow!("{e}")
}
