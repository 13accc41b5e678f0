// Search pipeline: a debouncer coalescing keystrokes and a field-based
// substring filter. The host wires them together: the input box feeds the
// debouncer, and the debounced action runs the filter and re-renders.

pub mod debounce;
pub mod filter;

pub use debounce::Debouncer;
pub use filter::{filter_items, FieldExtractor};
