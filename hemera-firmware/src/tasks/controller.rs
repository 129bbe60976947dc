//! Main controller task
//!
//! Owns the display, the log ring, the resync schedule and the screen
//! state. Runs the boot sequence (WiFi result, first sync), then the
//! main loop: button presses cycle screens, ticks drive resync
//! due-checks and the minute rollover, sync outcomes update the
//! schedule, log lines feed the log screen.

use defmt::*;
use embassy_futures::select::{select4, Either4};

use hemera_core::clock::local::local_now;
use hemera_core::clock::{CivilTime, LocalTime, SyncSchedule};
use hemera_core::log::LogRing;
use hemera_core::state::{Button, Event, Screen};

use crate::channels::{
    SyncOutcome, BUTTON_CHANNEL, LOG_CHANNEL, SYNC_OUTCOME, SYNC_REQUEST, WIFI_STATUS,
};
use crate::clock::SYSTEM_CLOCK;
use crate::config::DeviceConfig;
use crate::display::InkyPack;
use crate::screens;
use crate::tasks::tick::TICK_SIGNAL;

/// Minimum seconds between SNTP attempts while the schedule stays due
/// (first sync still missing, or a resync that keeps failing)
const RETRY_HOLDOFF_SECS: u32 = 60;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(mut epd: InkyPack<'static>, config: &'static DeviceConfig) {
    info!("Controller task started");

    let mut log = LogRing::new();
    let mut schedule = SyncSchedule::new(config.ntp.resync_interval_s);
    let mut screen = Screen::Boot;

    let mut sync_in_flight = false;
    let mut last_attempt_uptime: Option<u32> = None;
    let mut drawn_minute: Option<(u8, u8)> = None;

    push_log(&mut log, "System booting...");
    render_screen(&mut epd, screen, &log, &mut drawn_minute);

    // Boot: wait for main to report WiFi bring-up. Buttons are ignored
    // while connecting, same as always.
    match WIFI_STATUS.wait().await {
        Ok(()) => {
            push_log(&mut log, "WiFi connected");
            // First sync starts immediately; BootComplete lands when
            // the outcome comes back
            sync_in_flight = true;
            SYNC_REQUEST.signal(());
        }
        Err(e) => {
            warn!("WiFi bring-up failed: {:?}", e);
            push_log(&mut log, "WiFi connection failed");
            screen = screen.transition(Event::WifiFailed);
            render_screen(&mut epd, screen, &log, &mut drawn_minute);
        }
    }

    loop {
        let mut needs_redraw = false;

        match select4(
            BUTTON_CHANNEL.receive(),
            TICK_SIGNAL.wait(),
            SYNC_OUTCOME.wait(),
            LOG_CHANNEL.receive(),
        )
        .await
        {
            Either4::First(button) => {
                push_button_log(&mut log, button);
                screen = screen.transition(Event::Press(button));
                // Original behavior: any accepted press repaints, even
                // when the screen does not change (A refreshes the
                // clock, error banners re-show)
                needs_redraw = true;
            }

            Either4::Second(uptime_secs) => {
                // Resync due-check. Before the first sync the schedule
                // is always due; attempts are paced by the holdoff.
                let due = match SYSTEM_CLOCK.now() {
                    Some(now) => schedule.is_due(now),
                    None => true,
                };
                let held_off = last_attempt_uptime
                    .is_some_and(|t| uptime_secs.saturating_sub(t) < RETRY_HOLDOFF_SECS);
                if due && !sync_in_flight && !held_off {
                    debug!("Resync due, requesting");
                    sync_in_flight = true;
                    last_attempt_uptime = Some(uptime_secs);
                    SYNC_REQUEST.signal(());
                }

                // Minute rollover on the clock screen
                if screen.shows_time() {
                    if let Some(local) = current_local() {
                        let minute = (local.civil.hour, local.civil.minute);
                        if drawn_minute != Some(minute) {
                            needs_redraw = true;
                        }
                    }
                }
            }

            Either4::Third(outcome) => {
                sync_in_flight = false;
                match outcome {
                    SyncOutcome::Synced(instant) => {
                        schedule.record_sync(instant);
                        push_sync_log(&mut log);
                        if screen == Screen::Boot {
                            push_log(&mut log, "System ready.");
                            screen = screen.transition(Event::BootComplete);
                            needs_redraw = true;
                        }
                        // A resync can step the displayed minute
                        if screen.shows_time() {
                            needs_redraw = true;
                        }
                    }
                    SyncOutcome::Failed(_) => {
                        push_log(&mut log, "NTP sync failed");
                        if screen == Screen::Boot {
                            screen = screen.transition(Event::SyncFailed);
                            needs_redraw = true;
                        }
                        // After boot this is non-fatal: keep showing
                        // the previously known time
                    }
                }
            }

            Either4::Fourth(line) => {
                push_log(&mut log, &line);
                if screen == Screen::Log {
                    needs_redraw = true;
                }
            }
        }

        if needs_redraw {
            render_screen(&mut epd, screen, &log, &mut drawn_minute);
        }
    }
}

/// Current local time, if the clock has been set
fn current_local() -> Option<LocalTime> {
    SYSTEM_CLOCK.now().and_then(|utc| local_now(utc).ok())
}

/// Local civil time for log stamping
fn stamp_time() -> Option<CivilTime> {
    current_local().map(|l| l.civil)
}

/// Push a line onto the ring, stamped with the local time
fn push_log(log: &mut LogRing, msg: &str) {
    let t = stamp_time();
    log.push(t.as_ref(), msg);
    info!("{}", msg);
}

/// Log a successful sync with the full local timestamp it landed on
fn push_sync_log(log: &mut LogRing) {
    use core::fmt::Write;
    use hemera_core::clock::format::full_timestamp;

    let mut line: heapless::String<34> = heapless::String::new();
    match current_local() {
        Some(local) => {
            let _ = write!(line, "NTP sync OK: {}", full_timestamp(&local.civil));
        }
        None => {
            let _ = line.push_str("NTP sync OK");
        }
    }
    push_log(log, &line);
}

fn push_button_log(log: &mut LogRing, button: Button) {
    match button {
        Button::A => push_log(log, "Button A pressed!"),
        Button::B => push_log(log, "Button B pressed!"),
        Button::C => push_log(log, "Button C pressed!"),
    }
}

/// Draw the active screen and refresh the panel
fn render_screen(
    epd: &mut InkyPack<'static>,
    screen: Screen,
    log: &LogRing,
    drawn_minute: &mut Option<(u8, u8)>,
) {
    debug!("Rendering {} screen", screen.label());

    let result = match screen {
        Screen::Boot => screens::status::render_boot(epd),
        Screen::DateTime => {
            let local = current_local();
            *drawn_minute = local.as_ref().map(|l| (l.civil.hour, l.civil.minute));
            screens::datetime::render(epd, local.as_ref())
        }
        Screen::Picture => screens::picture::render(epd),
        Screen::Log => screens::log::render(epd, log),
        Screen::WifiError => screens::status::render_wifi_error(epd),
        Screen::SyncError => screens::status::render_sync_error(epd),
    };

    if let Err(e) = result {
        error!("Display error on {} screen: {:?}", screen.label(), e);
    }
}
