//! Countdown ticker lifecycle: ticks stop at the deadline and no tick
//! outlives a dropped countdown.

use std::time::Duration;

use chrono::Utc;
use storefront::ticker::Countdown;

#[tokio::test]
async fn countdown_reaches_zero_and_stops() {
    let countdown = Countdown::start(
        Utc::now() + chrono::Duration::milliseconds(80),
        Duration::from_millis(20),
    );
    let mut ticks = countdown.subscribe();

    // Receivers see the remaining time shrink to zero, then the channel
    // closes once the task stops on its own.
    let mut saw_zero = false;
    while ticks.changed().await.is_ok() {
        if ticks.borrow().is_zero() {
            saw_zero = true;
            break;
        }
    }
    assert!(saw_zero, "countdown should reach zero");

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(countdown.is_finished());
}

#[tokio::test]
async fn dropping_the_countdown_cancels_pending_ticks() {
    let countdown = Countdown::start(
        Utc::now() + chrono::Duration::seconds(60),
        Duration::from_millis(10),
    );
    let mut ticks = countdown.subscribe();

    // At least one tick arrives while the countdown is alive.
    assert!(ticks.changed().await.is_ok());
    assert!(!countdown.remaining().is_zero());

    drop(countdown);

    // The sender side is gone; after draining whatever was already
    // published, the channel reports closed and no further tick fires.
    while ticks.changed().await.is_ok() {}
}
