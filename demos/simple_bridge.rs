//! Simple framebuffer bridge example.
//!
//! Serves a static gradient test pattern on the default port and logs any
//! injected input events, demonstrating the bridge without a real display.
//!
//! Usage:
//!   cargo run --example simple_bridge
//!
//! Then connect a bridge client to localhost:30002. Each 'S' command frame
//! returns one 800x600 raw pixel dump in wire format.

use std::error::Error;

use bytes::BytesMut;
use fbbridge::{BridgeServer, Frame, InputInjector, Keycode, ScreenCapture};

/// Captures a fixed horizontal/vertical gradient in the 0x00RRGGBB layout.
struct GradientCapture {
    width: u16,
    height: u16,
}

impl ScreenCapture for GradientCapture {
    fn capture(&mut self) -> fbbridge::Result<Frame> {
        let w = usize::from(self.width);
        let h = usize::from(self.height);
        let stride = w * 4;
        let mut data = BytesMut::with_capacity(stride * h);

        for y in 0..h {
            for x in 0..w {
                let r = (x * 255 / w) as u32; // R: horizontal gradient
                let g = (y * 255 / h) as u32; // G: vertical gradient
                let b = 128u32; // B: constant
                data.extend_from_slice(&(r << 16 | g << 8 | b).to_ne_bytes());
            }
        }

        Ok(Frame {
            width: self.width,
            height: self.height,
            stride,
            data,
        })
    }
}

/// Prints injected events instead of synthesizing them.
struct LoggingInjector;

impl InputInjector for LoggingInjector {
    fn map_keysym(&self, keysym: u16) -> Option<Keycode> {
        // Latin-1 keysyms map directly onto their code point; everything
        // else is unmapped on this fake host.
        if keysym <= 0xff {
            Some(keysym as Keycode)
        } else {
            None
        }
    }

    fn key_event(&mut self, keycode: Keycode, down: bool) {
        println!("key event: keycode={keycode:#04x} down={down}");
    }

    fn button_event(&mut self, button: u8, down: bool) {
        println!("button event: button={button} down={down}");
    }

    fn motion_event(&mut self, x: u16, y: u16) {
        println!("motion event: ({x}, {y})");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    println!(
        "Starting framebuffer bridge on port {}...",
        fbbridge::DEFAULT_PORT
    );
    println!("Serving a static {}x{} gradient", fbbridge::DEFAULT_WIDTH, fbbridge::DEFAULT_HEIGHT);

    let capture = GradientCapture {
        width: fbbridge::DEFAULT_WIDTH,
        height: fbbridge::DEFAULT_HEIGHT,
    };

    let mut server = BridgeServer::new(capture, LoggingInjector);
    server.listen(fbbridge::DEFAULT_PORT).await?;

    Ok(())
}
