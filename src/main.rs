#![no_std]
#![no_main]

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_nrf::config::{Config, HfclkSource, LfclkSource};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::{Duration, Instant, Ticker, Timer};

// Crate
use fuzzy_time::{Dispatcher, TimeManager, TimeReference, WatchConfig};

// Others
use chrono::{NaiveDateTime, Timelike};

// Include current UTC epoch at compile time
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

// Communication channels
static TIME: Signal<ThreadModeRawMutex, NaiveDateTime> = Signal::new();

/// Clock and regulator setup for the nRF52832
fn system_config() -> Config {
    // Generate default config, required because Config is set as
    // `non_exhaustive`
    let mut config = Config::default();

    // Set high-frequency and low-frequency clock sources to external
    config.hfclk_source = HfclkSource::ExternalXtal;
    config.lfclk_source = LfclkSource::ExternalXtal;

    // Enable DC/DC regulator to massively reduce runtime current consumption
    config.dcdc.reg1 = true;

    config
}

/// Get the current local time.
#[embassy_executor::task(pool_size = 1)]
async fn update_time(clock: TimeManager, config: WatchConfig) {
    let mut tick = Ticker::every(Duration::from_millis(config.tick_period_ms() as u64));
    loop {
        let local = clock.local(Instant::now().as_millis(), &config);

        // Send time to channel
        TIME.signal(local);

        // Re-schedule the timer interrupt
        tick.next().await;
    }
}

/// Slide stale slots out and in again whenever the time changes.
#[embassy_executor::task(pool_size = 1)]
async fn update_face(mut face: Dispatcher, config: WatchConfig) {
    let slide = Duration::from_millis(config.slide_duration_ms() as u64);
    loop {
        let time = TIME.wait().await;
        let mut stale = face.tick(&time);
        if stale.is_empty() {
            continue;
        }
        defmt::info!(
            "Current time: {}:{}, refreshing {}",
            time.hour(),
            time.minute(),
            stale
        );

        while !stale.is_empty() {
            // Slide out
            Timer::after(slide).await;
            for kind in stale.iter() {
                if let Some(text) = face.slide_out_finished(kind) {
                    defmt::info!("{}: {}", kind, text);
                }
            }

            // Slide in, slots that fell behind go around once more
            Timer::after(slide).await;
            let mut behind = fuzzy_time::StaleSlots::NONE;
            for kind in stale.iter() {
                if face.slide_in_finished(kind) {
                    behind.insert(kind);
                }
            }
            stale = behind;
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let _p = embassy_nrf::init(system_config());
    defmt::info!("Initializing");

    let config = WatchConfig::default();

    // Start the clock at the build time
    let mut clock = TimeManager::init();
    clock.set_time(unwrap!(TimeReference::from_unix(
        UTC_EPOCH,
        Instant::now().as_millis()
    )));

    // Initial paint, every slot slides in
    let mut face = Dispatcher::new();
    let now = clock.local(Instant::now().as_millis(), &config);
    face.show_immediately(&now);
    for kind in fuzzy_time::SlotKind::ALL {
        defmt::info!("{}: {}", kind, face.text(kind));
    }
    Timer::after(Duration::from_millis(config.slide_duration_ms() as u64)).await;
    for kind in fuzzy_time::SlotKind::ALL {
        face.slide_in_finished(kind);
    }

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(update_time(clock, config)));
    unwrap!(spawner.spawn(update_face(face, config)));
}
