//! Synthesizes a toggle-drag-release gesture and prints the fling frame by
//! frame. Time is simulated, so the output is deterministic and the demo
//! finishes instantly.
//!
//! Run with `RUST_LOG=debug` to see the session lifecycle logging.

use kinescroll_core::{ManualClock, Point, ScrollConfig};
use kinescroll_gesture::{FlingDriver, ScrollSink};

#[derive(Default)]
struct PrintSink {
    frame: u32,
    total_x: i64,
    total_y: i64,
}

impl ScrollSink for PrintSink {
    fn scroll_by(&mut self, dx: i32, dy: i32) {
        self.frame += 1;
        self.total_x += dx as i64;
        self.total_y += dy as i64;
        if dx != 0 || dy != 0 {
            println!(
                "frame {:3}  delta ({:4}, {:4})  total ({:6}, {:6})",
                self.frame, dx, dy, self.total_x, self.total_y
            );
        }
    }
}

fn main() {
    env_logger::init();

    let clock = ManualClock::new();
    let config = ScrollConfig::default();

    // Press the toggle and drag up-left for 200 ms at 125 Hz sampling.
    let mut position = Point::new(400.0, 300.0);
    let mut driver = FlingDriver::press(clock.clone(), position, config);
    for _ in 0..25 {
        clock.advance(8);
        position = Point::new(position.x - 2.0, position.y - 6.0);
        driver.pointer_moved(position);
    }

    if !driver.pointer_released(position) {
        println!("released too early, no fling");
        return;
    }
    println!("fling started from ({:.0}, {:.0})", position.x, position.y);

    let mut sink = PrintSink::default();
    while let Some(delay) = driver.pump(&mut sink) {
        clock.advance(delay);
    }

    println!(
        "came to rest after {} frames ({} simulated ms), total scroll ({}, {})",
        sink.frame,
        i64::from(sink.frame) * config.frame_period_ms(),
        sink.total_x,
        sink.total_y
    );
}
