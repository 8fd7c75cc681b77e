pub mod text;

pub use text::{format_amount, pad_display, render_table};
