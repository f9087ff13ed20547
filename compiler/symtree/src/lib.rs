//! Symtree - immutable s-expression trees with structural pattern matching.
//!
//! This crate bundles the workspace for downstream users:
//! - [`Tree`] and [`List`] from `symtree_ir`
//! - [`Pattern`], [`Bindings`] and the match errors from `symtree_patterns`
//! - the textual reader and writer from `symtree_sexpr`
//!
//! # Example
//!
//! ```
//! use symtree::{read_sexpr, Pattern};
//!
//! let pattern = Pattern::from_example(["x"], &read_sexpr("(+ x x)")?);
//! let bindings = pattern.match_fresh(&read_sexpr("(+ 7 7)")?)?;
//! assert_eq!(bindings.get("x"), Some(&read_sexpr("7")?));
//!
//! let doubled = Pattern::from_example(["x"], &read_sexpr("(* 2 x)")?);
//! assert_eq!(doubled.substitute(&bindings)?.to_string(), "(* 2 7)");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::sync::Once;

pub use symtree_ir::{List, Shape, Tree};
pub use symtree_patterns::{
    Bindings, DebugLog, MatchError, MatchResult, Pattern, SubstituteError, SubstituteResult,
};
pub use symtree_sexpr::{read_all, read_sexpr, to_sexpr, write_sexpr, ReadError, Reader};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=symtree_patterns=trace` or `RUST_LOG=symtree_sexpr=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A subscriber installed by the host application wins.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
