//! Button input task
//!
//! Owns the three Inky Pack buttons (active low). Presses are debounced
//! with a flat holdoff after each edge, matching the half-second the
//! e-paper needs to show the result anyway.

use defmt::*;
use embassy_futures::select::{select3, Either3};
use embassy_rp::gpio::Input;
use embassy_time::Timer;

use hemera_core::state::Button;

use crate::channels::BUTTON_CHANNEL;

/// Holdoff after an accepted press
const DEBOUNCE_MS: u64 = 400;

/// Button task - turns GPIO edges into debounced press events
#[embassy_executor::task]
pub async fn button_task(mut a: Input<'static>, mut b: Input<'static>, mut c: Input<'static>) {
    info!("Button task started");

    loop {
        let pressed = match select3(
            a.wait_for_falling_edge(),
            b.wait_for_falling_edge(),
            c.wait_for_falling_edge(),
        )
        .await
        {
            Either3::First(()) => Button::A,
            Either3::Second(()) => Button::B,
            Either3::Third(()) => Button::C,
        };

        debug!("Button {} pressed", pressed.name());
        // Presses are dropped, not queued, when the controller is behind
        let _ = BUTTON_CHANNEL.try_send(pressed);

        Timer::after_millis(DEBOUNCE_MS).await;
    }
}
