//! Explorer UI state
//!
//! Global UI state is only changed through typed actions applied by a pure
//! reducer; the store keeps every dispatched action in order.

mod action;
mod color_mode;
mod format;
mod state;
mod store;

pub use action::UiAction;
pub use color_mode::{ColorMode, COLOR_MODE_SETTING};
pub use format::{
    add_sep_between_strings, dedupe_by, is_pending, memo_string, micro_to_stacks, start_pad,
    to_kebab_case, to_relative_time, transaction_caption, transaction_title, truncate_middle,
    DEFAULT_SEPARATOR,
};
pub use state::{Environment, NetworkOption, Networks, Toast, ToastTone, UiState, NETWORK_SETTING};
pub use store::{reduce, Store};
