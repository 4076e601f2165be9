//! Chameleon computes colors from colors. A color picker hands it the color under the pointer, and
//! a short arithmetic expression decides what comes out: `rgb(255 - r, 255 - g, 255 - b)` for the
//! inverse, `hls(h + 180, l, s)` for the complement, `hls(h, l1, s)` to borrow the lightness of a
//! reference color. Expressions can work in RGB, HLS, HSV or YIQ, and the variables of a color space
//! only exist once the expression mentions that space.
//!
//! The main entry point is [`Calculator`](calculator::Calculator), which parses an expression once
//! and evaluates it against any number of colors. [`config`] wraps it for applications that load
//! their expression and reference colors from settings. Everything else (windows, pointers, reading
//! pixels off the screen) is left to the application.
//!
//! Diagnostics are emitted through [`tracing`]; install a subscriber to see them.

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but the conversion coefficients are easier to check as written
#![allow(clippy::unreadable_literal)]

extern crate num;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;

pub mod ast;
pub mod calculator;
pub mod color;
pub mod colors;
pub mod colorspace;
pub mod config;
pub mod coord;
pub mod error;
pub mod eval;
pub mod functions;
pub mod hex;
pub mod number;
pub mod parser;
pub mod prelude;
pub mod scope;
