//! # CLI Module
//!
//! Operations behind the `spotrack` command line. Argument parsing lives in the
//! binary; this module turns parsed options into a running server.
//!
//! ## Usage
//!
//! ```bash
//! spotrack                              # serve with the environment's configuration
//! spotrack serve --port 8080            # override PORT
//! spotrack serve --static-dir ./dist    # override STATIC_DIR
//! spotrack serve --open                 # also open /login in the default browser
//! ```

mod serve;

pub use serve::{ServeOverrides, serve};
