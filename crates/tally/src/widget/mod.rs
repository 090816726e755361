//! Widget system for Tally.
//!
//! Widgets here are headless: each owns its state and input handling and
//! reports results through [`Signal`](tally_core::Signal)s. Drawing them is
//! left to the host, which reads their state (items, offsets, labels)
//! after every input.
//!
//! Every modal widget follows the same lifecycle:
//!
//! 1. `open(..)` shows it with the caller's current value
//! 2. host input is routed to it while open and ignored otherwise
//! 3. a confirming action emits the result and then `closed`
//! 4. `dismiss()` (or `done()`) emits only `closed`

pub mod widgets;
