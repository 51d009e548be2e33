//! Headless framebuffer bridge example with animated content.
//!
//! Serves an animated test pattern: the bridge is pull-based, so every
//! snapshot command returns the next animation frame. Useful for exercising
//! a client's refresh loop without a real display.
//!
//! Usage:
//!   cargo run --example headless_bridge

use std::error::Error;

use bytes::BytesMut;
use fbbridge::{BridgeServer, Frame, InputInjector, Keycode, ScreenCapture};

const WIDTH: u16 = 640;
const HEIGHT: u16 = 480;

/// Generates a scrolling gradient; each capture advances the animation.
struct AnimatedCapture {
    frame: u32,
}

impl ScreenCapture for AnimatedCapture {
    fn capture(&mut self) -> fbbridge::Result<Frame> {
        let w = usize::from(WIDTH);
        let h = usize::from(HEIGHT);
        let stride = w * 4;
        let mut data = BytesMut::with_capacity(stride * h);

        for y in 0..h as u32 {
            for x in 0..w as u32 {
                let r = (x + self.frame) % 256;
                let g = (y + self.frame) % 256;
                let b = (self.frame / 2) % 256;
                data.extend_from_slice(&(r << 16 | g << 8 | b).to_ne_bytes());
            }
        }

        self.frame = self.frame.wrapping_add(1);

        Ok(Frame {
            width: WIDTH,
            height: HEIGHT,
            stride,
            data,
        })
    }
}

/// Counts injected events and prints a running total.
struct CountingInjector {
    events: u64,
}

impl CountingInjector {
    fn bump(&mut self, what: &str) {
        self.events += 1;
        if self.events % 100 == 0 {
            println!("{} events injected (last: {what})", self.events);
        }
    }
}

impl InputInjector for CountingInjector {
    fn map_keysym(&self, keysym: u16) -> Option<Keycode> {
        if keysym <= 0xff {
            Some(keysym as Keycode)
        } else {
            None
        }
    }

    fn key_event(&mut self, _keycode: Keycode, _down: bool) {
        self.bump("key");
    }

    fn button_event(&mut self, _button: u8, _down: bool) {
        self.bump("button");
    }

    fn motion_event(&mut self, _x: u16, _y: u16) {
        self.bump("motion");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!(
        "Starting headless bridge on port {}...",
        fbbridge::DEFAULT_PORT
    );
    println!("Serving an animated {WIDTH}x{HEIGHT} pattern, one frame per snapshot");
    println!("Press Ctrl+C to stop");

    let mut server = BridgeServer::new(AnimatedCapture { frame: 0 }, CountingInjector { events: 0 });
    server.listen(fbbridge::DEFAULT_PORT).await?;

    Ok(())
}
