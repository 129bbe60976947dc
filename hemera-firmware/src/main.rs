//! Hemera - E-Paper Desk Calendar Firmware
//!
//! Main firmware binary for the Raspberry Pi Pico W driving a Pico
//! Inky Pack. Keeps UTC via SNTP, shows London local time with the
//! summer offset computed on-device, and cycles screens with the three
//! front buttons.
//!
//! Named after the Greek "Hemera", the personification of day.

#![no_std]
#![no_main]

use cyw43_pio::{PioSpi, DEFAULT_CLOCK_DIVIDER};
use defmt::*;
use embassy_executor::Spawner;
use embassy_net::StackResources;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::Pio;
use embassy_rp::spi::{self, Spi};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::channels::WIFI_STATUS;
use crate::config::{parse_config, DeviceConfig};
use crate::display::InkyPack;
use crate::net::wifi;

mod channels;
mod clock;
mod config;
mod display;
mod net;
mod screens;
mod tasks;

/// Embedded device configuration (compiled into firmware)
/// Edit display.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../display.toml");

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

// Static cells for state that tasks hold references to
static CONFIG: StaticCell<DeviceConfig> = StaticCell::new();
static CYW43_STATE: StaticCell<cyw43::State> = StaticCell::new();
static NET_RESOURCES: StaticCell<StackResources<4>> = StaticCell::new();

// CYW43439 firmware blobs, flashed separately at fixed addresses so
// iterative builds stay small:
//   probe-rs download 43439A0.bin     --binary-format bin --base-address 0x10100000
//   probe-rs download 43439A0_clm.bin --binary-format bin --base-address 0x10140000
const WIFI_FW_ADDR: *const u8 = 0x1010_0000 as *const u8;
const WIFI_FW_LEN: usize = 230_321;
const WIFI_CLM_ADDR: *const u8 = 0x1014_0000 as *const u8;
const WIFI_CLM_LEN: usize = 4_752;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Hemera firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Parse the embedded configuration. build.rs validated the file on
    // the host, so a failure here means the flash image is damaged; an
    // empty config keeps the UI alive to report it.
    let config: &'static DeviceConfig = match parse_config(EMBEDDED_CONFIG) {
        Ok(c) => {
            info!("Configuration loaded");
            CONFIG.init(c)
        }
        Err(e) => {
            error!("Embedded config invalid: {:?}", e);
            CONFIG.init(DeviceConfig::default())
        }
    };

    // E-paper on SPI0 (Inky Pack: CS=17, SCK=18, MOSI=19, DC=20,
    // RESET=21, BUSY=26)
    let epd_spi_config = {
        let mut c = spi::Config::default();
        c.frequency = 12_000_000;
        c
    };
    let epd_spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, epd_spi_config);
    let epd_cs = Output::new(p.PIN_17, Level::High);
    let epd_dc = Output::new(p.PIN_20, Level::High);
    let epd_reset = Output::new(p.PIN_21, Level::High);
    let epd_busy = Input::new(p.PIN_26, Pull::Up);

    let mut epd = InkyPack::new(epd_spi, epd_cs, epd_dc, epd_reset, epd_busy);
    match epd.init() {
        Ok(()) => info!("E-paper initialized"),
        // Keep running; refreshes will report NotInitialized and the
        // defmt stream still carries everything
        Err(e) => error!("E-paper init failed: {:?}", e),
    }

    // Inky Pack front buttons, active low
    let button_a = Input::new(p.PIN_12, Pull::Up);
    let button_b = Input::new(p.PIN_13, Pull::Up);
    let button_c = Input::new(p.PIN_14, Pull::Up);

    // CYW43439 radio over PIO SPI (Pico W: PWR=23, CS=25, DIO=24, CLK=29)
    let wl_pwr = Output::new(p.PIN_23, Level::Low);
    let wl_cs = Output::new(p.PIN_25, Level::High);
    let mut pio = Pio::new(p.PIO0, Irqs);
    let wl_spi = PioSpi::new(
        &mut pio.common,
        pio.sm0,
        DEFAULT_CLOCK_DIVIDER,
        pio.irq0,
        wl_cs,
        p.PIN_24,
        p.PIN_29,
        p.DMA_CH0,
    );

    let fw = unsafe { core::slice::from_raw_parts(WIFI_FW_ADDR, WIFI_FW_LEN) };
    let clm = unsafe { core::slice::from_raw_parts(WIFI_CLM_ADDR, WIFI_CLM_LEN) };

    let state = CYW43_STATE.init(cyw43::State::new());
    let (net_device, mut control, wl_runner) = cyw43::new(state, wl_pwr, wl_spi, fw).await;
    spawner.spawn(tasks::cyw43_task(wl_runner)).unwrap();

    control.init(clm).await;
    control
        .set_power_management(cyw43::PowerManagementMode::PowerSave)
        .await;
    info!("Radio initialized");

    // Network stack with DHCP. Fixed seed; only local ports and TCP
    // sequence numbers derive from it.
    let net_config = embassy_net::Config::dhcpv4(Default::default());
    let seed = 0x0de5_1a7e_0dd5_eed5;
    let (stack, net_runner) = embassy_net::new(
        net_device,
        net_config,
        NET_RESOURCES.init(StackResources::new()),
        seed,
    );
    spawner.spawn(tasks::net_task(net_runner)).unwrap();

    // Spawn tasks
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner
        .spawn(tasks::button_task(button_a, button_b, button_c))
        .unwrap();
    spawner.spawn(tasks::sync_task(stack, config)).unwrap();
    spawner.spawn(tasks::controller_task(epd, config)).unwrap();
    info!("All tasks spawned");

    // WiFi association happens here so `control` can stay on the main
    // task; the controller learns the outcome through WIFI_STATUS
    let wifi_result = match wifi::join(&mut control, &config.wifi.ssid, &config.wifi.password).await
    {
        Ok(()) => wifi::wait_for_ip(stack).await,
        Err(e) => Err(e),
    };
    if let Err(e) = wifi_result {
        warn!("WiFi bring-up failed: {:?}", e);
    }
    WIFI_STATUS.signal(wifi_result);

    // Main task has nothing else to do - all work happens in spawned
    // tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
